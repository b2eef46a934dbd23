//! Runtime type information
//!
//! Every schema class owns exactly one static [`Rtti`] descriptor naming the
//! class and linking to the descriptor of its direct parent. The links form a
//! single-rooted tree whose root is [`BASE_OBJECT`].

use std::fmt;
use std::ptr;

use crate::names;

/// Descriptor of the implicit root class
pub static BASE_OBJECT: Rtti = Rtti::root("BaseObject");

/// Type descriptor of a class
///
/// Descriptors are compared by identity: two descriptors describe the same
/// class only if they are the same static.
#[derive(Debug)]
pub struct Rtti {
    class_name: &'static str,
    parent: Option<&'static Rtti>,
}

impl Rtti {
    /// Create a descriptor for a class deriving from `parent`
    pub const fn new(class_name: &'static str, parent: &'static Rtti) -> Self {
        Self {
            class_name,
            parent: Some(parent),
        }
    }

    /// Create a root descriptor without parent
    pub const fn root(class_name: &'static str) -> Self {
        Self {
            class_name,
            parent: None,
        }
    }

    /// Get the fully qualified class name (e.g. `FDSNXML::Operator`)
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Get the class name without its namespace
    pub fn local_name(&self) -> &'static str {
        names::local_class_name(self.class_name)
    }

    /// Get the descriptor of the direct parent class
    pub fn parent(&self) -> Option<&'static Rtti> {
        self.parent
    }

    /// Check if this descriptor is exactly `other`
    pub fn is_type_of(&self, other: &Rtti) -> bool {
        ptr::eq(self, other)
    }

    /// Check if `ancestor` is this class or one of its ancestors
    pub fn is_kind_of(&self, ancestor: &Rtti) -> bool {
        self.ancestors().any(|rtti| rtti.is_type_of(ancestor))
    }

    /// Check if this class strictly derives from `ancestor`
    pub fn is_derived_from(&self, ancestor: &Rtti) -> bool {
        !self.is_type_of(ancestor) && self.is_kind_of(ancestor)
    }

    /// Iterate over this descriptor and its ancestors, most derived first
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            current: Some(self),
        }
    }

    /// Number of parent links between this descriptor and the root
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

impl fmt::Display for Rtti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name)
    }
}

/// Iterator over a descriptor chain
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    current: Option<&'a Rtti>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Rtti;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.parent;
        Some(current)
    }
}
