// Domain layer: core models only. No dependencies beyond std/serde.

pub mod model;

pub use model::{Applicant, Bracket, Quote};
