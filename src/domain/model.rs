use serde::{Deserialize, Serialize};

/// An age range (inclusive at both ends) with a flat premium rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub min_age: u32,
    pub max_age: u32,
    pub rate: f64,
}

impl Bracket {
    pub fn new(min_age: u32, max_age: u32, rate: f64) -> Self {
        Self {
            min_age,
            max_age,
            rate,
        }
    }

    pub fn matches(&self, age: u32) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

/// Transient per-quote input; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub id: String,
    pub age: u32,
    pub vehicle_class: String,
}

impl Applicant {
    pub fn new(id: impl Into<String>, age: u32, vehicle_class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            age,
            vehicle_class: vehicle_class.into(),
        }
    }
}

/// The priced result for one tier: the bracket that matched and the
/// amount after the tier multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub bracket: Bracket,
    pub amount: f64,
}
