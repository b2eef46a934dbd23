//! Archive stand-ins
//!
//! Reflective reading and writing of schema objects. [`Writer`] walks an
//! object's meta-object and emits a [`Node`] tree; [`Reader`] instantiates
//! classes through the [`ClassRegistry`](crate::registry::ClassRegistry)
//! and populates them from a tree. Neither touches a field except through
//! its meta-property.
//!
//! Mapping rules:
//!
//! - attribute properties map to node attributes
//! - a non-attribute scalar named `value` maps to the node text
//! - other scalars map to child nodes holding the lexical form as text
//! - nested objects and collection members map to child nodes named after
//!   the property, in declaration order with inherited properties first
//! - absent optional values are omitted

mod node;
mod reader;
mod writer;

pub use node::Node;
pub use reader::{Reader, ReaderConfig, UnknownProperty};
pub use writer::{Writer, WriterConfig};

/// Scalar property stored as element text instead of a child element
pub const TEXT_PROPERTY: &str = "value";
