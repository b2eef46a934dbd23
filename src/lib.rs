//! # fdsnxml
//!
//! A reflective data-object model for FDSN StationXML.
//!
//! Every schema class carries a runtime type descriptor and a meta-object
//! listing its properties. Document readers and writers work purely through
//! that metadata, so adding a schema class means declaring its fields once.
//!
//! ## Features
//!
//! - Runtime type identification with inheritance queries
//! - Meta-objects with inherited property lookup
//! - Optional fields that fail loudly when read while absent
//! - Owned-child collections enforcing a single owner per child
//! - Structural equality, copying and assignment for all schema objects
//! - Reflective reading and writing of element trees, with a JSON dump
//!
//! ## Example
//!
//! ```rust,ignore
//! use fdsnxml::archive::{Reader, Writer};
//! use fdsnxml::fdsnxml::{Agency, Operator};
//!
//! let mut op = Operator::default();
//! op.set_agency(Agency::new("GFZ"));
//!
//! let node = Writer::new().write(&op)?;
//! let copy: Operator = Reader::new().read_as(&node)?;
//! assert_eq!(copy, op);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;
pub mod names;

// Object model
pub mod rtti;
pub mod value;
pub mod object;
pub mod optional;
pub mod collection;
pub mod property;
pub mod metaobject;
pub mod registry;

// Element trees
pub mod archive;

// Schema classes
pub mod fdsnxml;

// Re-exports for convenience
pub use collection::{Handle, OwnedCollection};
pub use error::{DecodeError, Error, Result};
pub use metaobject::MetaObject;
pub use object::{cast, cast_mut, is_kind_of, is_type_of, BaseObject, Class};
pub use optional::Optional;
pub use property::MetaProperty;
pub use registry::ClassRegistry;
pub use rtti::{Rtti, BASE_OBJECT};
pub use value::{MetaValue, PropertyKind, Value};

/// Version of the fdsnxml library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

