use crate::core::registry::BracketRegistry;
use crate::domain::{Applicant, Quote};
use std::fmt;

/// Multiplier applied to the matched rate by the premium tier.
pub const PREMIUM_MULTIPLIER: f64 = 1.5;

/// Pricing tiers are pure functions over one shared registry; both use
/// the same match logic and differ only in the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTier {
    Standard,
    Premium,
}

impl PricingTier {
    pub const ALL: [PricingTier; 2] = [PricingTier::Standard, PricingTier::Premium];

    pub fn multiplier(&self) -> f64 {
        match self {
            PricingTier::Standard => 1.0,
            PricingTier::Premium => PREMIUM_MULTIPLIER,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Standard => "Standard",
            PricingTier::Premium => "Premium",
        }
    }

    /// Prices `applicant` against the registry. `None` when no bracket
    /// covers the applicant's age.
    pub fn quote(&self, registry: &BracketRegistry, applicant: &Applicant) -> Option<Quote> {
        registry.find_match(applicant.age).map(|bracket| Quote {
            bracket: *bracket,
            amount: bracket.rate * self.multiplier(),
        })
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
