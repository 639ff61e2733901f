use crate::core::pricing::PricingTier;
use crate::core::registry::BracketRegistry;
use crate::domain::{Applicant, Bracket, Quote};
use crate::utils::error::Result;

pub const DEFAULT_CURRENCY: &str = "frw";

/// Owns the single shared bracket registry and prices applicants across
/// every tier.
pub struct QuoteEngine {
    registry: BracketRegistry,
    currency: String,
}

impl QuoteEngine {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            registry: BracketRegistry::new(),
            currency: currency.into(),
        }
    }

    pub fn with_brackets(currency: impl Into<String>, brackets: Vec<Bracket>) -> Self {
        Self {
            registry: BracketRegistry::from_brackets(brackets),
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn brackets(&self) -> &[Bracket] {
        self.registry.list()
    }

    pub fn add_bracket(&mut self, bracket: Bracket) {
        tracing::info!(
            "Added bracket [{}-{}] at rate {}",
            bracket.min_age,
            bracket.max_age,
            bracket.rate
        );
        self.registry.add(bracket);
    }

    pub fn remove_bracket(&mut self, index: usize) -> Result<Bracket> {
        let removed = self.registry.remove(index)?;
        tracing::info!(
            "Removed bracket {} [{}-{}]",
            index,
            removed.min_age,
            removed.max_age
        );
        Ok(removed)
    }

    /// One result per tier, in `PricingTier::ALL` order. A `None` entry
    /// means that tier found no covering bracket.
    pub fn quote_all(&self, applicant: &Applicant) -> Vec<(PricingTier, Option<Quote>)> {
        PricingTier::ALL
            .iter()
            .map(|tier| {
                let quote = tier.quote(&self.registry, applicant);
                match &quote {
                    Some(q) => tracing::debug!(
                        "Applicant {} age {}: {} quote {}",
                        applicant.id,
                        applicant.age,
                        tier,
                        q.amount
                    ),
                    None => tracing::debug!(
                        "Applicant {} age {}: no {} match",
                        applicant.id,
                        applicant.age,
                        tier
                    ),
                }
                (*tier, quote)
            })
            .collect()
    }
}
