use std::fmt::{self, Display};

use crate::consts::{TIER_FILTERED, TIER_PASS};

///
/// Confidence bucket of a called variant.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Tier {
    Pass,
    Filtered,
}

impl Tier {
    /// Tiers in processing order.
    pub const ALL: [Tier; 2] = [Tier::Pass, Tier::Filtered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Pass => TIER_PASS,
            Tier::Filtered => TIER_FILTERED,
        }
    }

    ///
    /// Whether variants of this tier must clear the minimum VAF
    /// before any lookup is issued.
    ///
    pub fn is_vaf_gated(&self) -> bool {
        matches!(self, Tier::Filtered)
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
