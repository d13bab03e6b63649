//! # Model definitions
//!
//! The in-memory model that generators read: classes with typed,
//! cardinality-bounded attributes, the other root element kinds a model
//! may contain, and the package descriptors used to place generated files.
//!
//! ## Example
//!
//! ```rust
//! use modelgen_model::{Cardinality, ClassDef, Packages, RegularAttribute, RootElement};
//!
//! let trade = ClassDef::new("Trade")
//!     .with_definition("A trade record")
//!     .with_attribute(RegularAttribute::new("id", "string", Cardinality::single()))
//!     .with_attribute(RegularAttribute::new("legs", "Leg", Cardinality::many()));
//!
//! let elements = vec![RootElement::Class(trade)];
//! let packages = Packages::new("com.example");
//!
//! assert_eq!(packages.model().package_name(), "com.example.model");
//! assert_eq!(elements.len(), 1);
//! ```

pub mod document;
pub mod error;
pub mod packages;
pub mod types;

pub use document::ModelDocument;
pub use error::{ModelError, ModelResult};
pub use packages::{Package, Packages};
pub use types::{
    Cardinality, ClassDef, DataTypeDef, EnumDef, FunctionDef, RegularAttribute, RootElement,
};
