//! Select products by name.
//!
//! This criterion was added after color and size without touching either
//! of them or the filter, which is the point of the pattern.

use crate::traits::Specification;
use catalog::Product;

/// Satisfied by products whose name contains the needle (case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsSpecification {
    needle: String,
}

impl NameContainsSpecification {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into().to_lowercase(),
        }
    }
}

impl Specification<Product> for NameContainsSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name.to_lowercase().contains(&self.needle)
    }

    fn name(&self) -> String {
        format!("name contains \"{}\"", self.needle)
    }
}
