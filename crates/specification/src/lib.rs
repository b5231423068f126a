//! Specification-based filtering.
//!
//! This crate provides:
//! - `Specification` trait: a reusable, composable predicate over an item
//! - Combinators (`and`, `or`, `not`, `AllOf`, `AnyOf`) for building new
//!   criteria out of existing ones
//! - `BetterFilter`: one generic filter for every criterion
//! - `FilterPipeline` for narrowing a collection in logged stages
//! - Product specifications (color, size, name) over the `catalog` domain
//! - `ProductFilter`: the per-criterion filter this design replaces
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, Color, Size};
//! use specification::product::{ColorSpecification, SizeSpecification};
//! use specification::{BetterFilter, Filter, Specification};
//!
//! let catalog = Catalog::sample();
//! let large_blue = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
//!
//! for product in BetterFilter.filter(catalog.products(), &large_blue) {
//!     println!("{} is large and blue", product.name);
//! }
//! ```

pub mod traits;
pub mod combinators;
pub mod filter;
pub mod filter_pipeline;
pub mod legacy;
pub mod product;

// Re-export main types
pub use traits::{Filter, Specification, TrySpecification};
pub use combinators::{
    AllOf, AlwaysFalse, AlwaysTrue, AndSpecification, AnyOf, BoxedSpecification, FnSpecification,
    NotSpecification, OrSpecification, and, from_fn,
};
pub use filter::BetterFilter;
pub use filter_pipeline::FilterPipeline;
pub use legacy::ProductFilter;
