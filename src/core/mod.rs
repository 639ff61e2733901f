pub mod engine;
pub mod pricing;
pub mod registry;

pub use crate::domain::{Applicant, Bracket, Quote};
pub use crate::utils::error::Result;
pub use engine::{QuoteEngine, DEFAULT_CURRENCY};
pub use pricing::{PricingTier, PREMIUM_MULTIPLIER};
pub use registry::BracketRegistry;
