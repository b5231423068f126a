//! # Principles Crate
//!
//! Small, self-contained demonstrations of the remaining design principles.
//! (Open/closed lives in the `specification` crate.)
//!
//! ## Components
//!
//! ### Single responsibility (`journal`)
//! `Journal` keeps entries; `Persistence` writes them to disk.
//!
//! ### Liskov substitution (`shapes`)
//! Rectangles and squares are separate variants, so code that sets a
//! rectangle's width and height never receives a square.
//!
//! ### Interface segregation (`devices`)
//! `Printer`, `Scanner` and `Fax` are separate roles; devices implement
//! only what they support.
//!
//! ### Dependency inversion (`relationships`)
//! `Research` depends on the `RelationshipBrowser` trait, not on the
//! `Relationships` store.
//!
//! ## Example Usage
//!
//! ```ignore
//! use principles::relationships::{Person, Relationships, Research};
//!
//! let john = Person::new("John");
//! let mut rels = Relationships::new();
//! rels.add_parent_and_child(&john, &Person::new("Chris"));
//!
//! for line in Research::new(&rels, "John").findings() {
//!     println!("{}", line);
//! }
//! ```

// Public modules
pub mod error;
pub mod journal;
pub mod shapes;
pub mod devices;
pub mod relationships;

// Re-export commonly used types
pub use error::{PrincipleError, Result};
pub use journal::{Journal, Persistence};
pub use shapes::{Rectangle, Shape, Square, set_and_measure};
pub use devices::{
    ClassicPrinter, Document, Fax, MultifunctionDevice, MultifunctionMachine,
    MultifunctionPrinter, Photocopier, Printer, Scanner,
};
pub use relationships::{Person, Relationship, RelationshipBrowser, Relationships, Research};
