//! The filter this crate replaces.
//!
//! `ProductFilter` grows a new method for every business rule, so each new
//! requirement means modifying it. It is kept to show the contrast in the
//! demo and to check that `BetterFilter` selects exactly the same products.

use catalog::{Color, Product, Size};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    // Every combination needs yet another method.
    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}
