//! Core domain types for the product catalog.
//!
//! Key Rust concepts demonstrated here:
//! - Enums for fixed sets of values (Color, Size)
//! - `FromStr` and `Display` for converting to and from text
//! - An ordered collection that only hands out borrows of its items

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Product color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(s)
    }
}

impl FromStr for Color {
    type Err = CatalogError;

    /// Case-insensitive: "Green", "GREEN" and "green" all parse
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Product size
///
/// Note: variants are declared smallest first, so the derived `Ord`
/// matches the natural ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
    Yuge,
}

impl Size {
    /// Every size, smallest first
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Yuge];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Yuge => "yuge",
        };
        f.write_str(s)
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            "yuge" => Ok(Size::Yuge),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single item in the catalog.
///
/// Rust concepts:
/// - `Clone` but not `Copy`: the name is a heap-allocated `String`
/// - `PartialEq` lets tests compare whole filter results
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

// =============================================================================
// Catalog - ordered product collection
// =============================================================================

/// Ordered collection of products.
///
/// Insertion order is preserved and duplicates are allowed. Consumers only
/// ever get `&[Product]`, so filtering can never reorder or drop items from
/// the catalog itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The three products every demo starts from: an apple, a tree and a house
    pub fn sample() -> Self {
        [
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ]
        .into_iter()
        .collect()
    }

    /// Append a product to the end of the catalog
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// All products, in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product with the given name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
