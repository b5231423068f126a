//! Select products of one size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products whose size equals the configured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }

    fn name(&self) -> String {
        format!("size = {}", self.size)
    }
}
