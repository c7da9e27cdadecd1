//! Spending tiers and priced packages.

use std::fmt;

use serde::Serialize;

/// One of three spending levels computed for the same destination and trip length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Cheap,
    Moderate,
    Premium,
}

impl Tier {
    /// All tiers, cheapest first.
    pub const ALL: [Tier; 3] = [Tier::Cheap, Tier::Moderate, Tier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Cheap => "cheap",
            Tier::Moderate => "moderate",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Itemised trip cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub travel: f64,
    pub food: f64,
    pub local_transport: f64,
    pub activities: f64,
}

/// A priced trip at one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageOption {
    pub tier: Tier,
    pub total_cost: f64,
    pub breakdown: CostBreakdown,
    /// Total cost divided by days, rounded to a whole unit.
    pub daily_average: i64,
    pub within_budget: bool,
}

/// The three tiers priced for a single destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierPackages {
    pub cheap: PackageOption,
    pub moderate: PackageOption,
    pub premium: PackageOption,
}

impl TierPackages {
    /// Package for a given tier.
    pub fn get(&self, tier: Tier) -> &PackageOption {
        match tier {
            Tier::Cheap => &self.cheap,
            Tier::Moderate => &self.moderate,
            Tier::Premium => &self.premium,
        }
    }

    /// Iterate cheapest first.
    pub fn iter(&self) -> impl Iterator<Item = &PackageOption> {
        [&self.cheap, &self.moderate, &self.premium].into_iter()
    }

    /// Whether any tier fits the budget.
    pub fn any_within_budget(&self) -> bool {
        self.iter().any(|p| p.within_budget)
    }
}
