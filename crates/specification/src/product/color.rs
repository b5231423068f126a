//! Select products of one color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products whose color equals the configured color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }

    fn name(&self) -> String {
        format!("color = {}", self.color)
    }
}
