//! Specification implementations for catalog products.
//!
//! Each criterion is its own type. Adding a new one (by name, by price,
//! ...) means adding a file here; nothing else has to change.

pub mod color;
pub mod name;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use name::NameContainsSpecification;
pub use size::SizeSpecification;
