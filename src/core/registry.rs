use crate::domain::Bracket;
use crate::utils::error::{QuoteError, Result};

/// Insertion-ordered collection of premium brackets, mutable by index.
///
/// Matching is a linear scan; when ranges overlap, the first bracket
/// added wins.
#[derive(Debug, Clone, Default)]
pub struct BracketRegistry {
    brackets: Vec<Bracket>,
}

impl BracketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_brackets(brackets: Vec<Bracket>) -> Self {
        Self { brackets }
    }

    /// Appends a bracket. Always succeeds; range sanity is the input
    /// boundary's job.
    pub fn add(&mut self, bracket: Bracket) {
        self.brackets.push(bracket);
    }

    /// Removes the bracket at `index`, preserving the order of the
    /// remainder.
    pub fn remove(&mut self, index: usize) -> Result<Bracket> {
        if index >= self.brackets.len() {
            return Err(QuoteError::IndexOutOfRange {
                index,
                len: self.brackets.len(),
            });
        }
        Ok(self.brackets.remove(index))
    }

    pub fn list(&self) -> &[Bracket] {
        &self.brackets
    }

    /// First bracket whose range contains `age`. `None` means no
    /// bracket covers the age; that is a normal outcome, not an error.
    pub fn find_match(&self, age: u32) -> Option<&Bracket> {
        self.brackets.iter().find(|b| b.matches(age))
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}
