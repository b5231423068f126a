//! # Catalog Crate
//!
//! The product domain that the specification filters run over.
//!
//! ## Main Components
//!
//! - **types**: Product, Color, Size and the ordered Catalog collection
//! - **parser**: Load a catalog from a `name::color::size` or JSON file
//! - **error**: Error types for catalog loading and attribute parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Color};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/products.dat"))?;
//! let green = catalog.products().iter().filter(|p| p.color == Color::Green).count();
//! println!("{} of {} products are green", green, catalog.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Color, Product, Size};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Apple", "Tree", "House"]);
        assert_eq!(catalog.get("House").unwrap().color, Color::Blue);
        assert!(catalog.get("Car").is_none());
    }

    #[test]
    fn test_insert_keeps_order_and_duplicates() {
        let mut catalog = Catalog::new();
        catalog.insert(Product::new("Apple", Color::Green, Size::Small));
        catalog.insert(Product::new("Ball", Color::Red, Size::Medium));
        catalog.insert(Product::new("Apple", Color::Green, Size::Small));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0], catalog.products()[2]);
        assert_eq!(catalog.products()[1].name, "Ball");
    }

    #[test]
    fn test_attribute_parsing() {
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(" yuge ".parse::<Size>().unwrap(), Size::Yuge);
        assert!("huge".parse::<Size>().is_err());

        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_size_ordering() {
        assert!(Size::Small < Size::Medium);
        assert!(Size::Large < Size::Yuge);
    }
}
