pub mod schema;
pub mod tier;
pub mod variant;

// re-export for cleaner imports
pub use self::schema::ColumnSchema;
pub use self::tier::Tier;
pub use self::variant::{Variant, VariantType};
