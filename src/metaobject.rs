//! Meta-objects
//!
//! A [`MetaObject`] lists the properties a class declares itself, in
//! declaration order, and links to the meta-object of its parent class.
//! Lookups that miss locally are delegated up that link; inherited
//! properties are never copied into the derived meta-object.
//!
//! Meta-objects are built once per class inside a `once_cell` static and are
//! immutable afterwards, so they can be shared freely between threads.

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::names;
use crate::property::MetaProperty;
use crate::rtti::Rtti;

/// Per-class property table
#[derive(Debug)]
pub struct MetaObject {
    rtti: &'static Rtti,
    base: Option<&'static MetaObject>,
    properties: IndexMap<&'static str, MetaProperty>,
}

impl MetaObject {
    /// Create an empty meta-object for `rtti`, inheriting from `base`
    pub fn new(rtti: &'static Rtti, base: Option<&'static MetaObject>) -> Self {
        Self {
            rtti,
            base,
            properties: IndexMap::new(),
        }
    }

    /// Build a meta-object from a list of property declarations
    ///
    /// # Panics
    ///
    /// Panics if a declaration is invalid (bad name or a name already used
    /// along the inheritance chain). Declarations are static program data,
    /// so this only fires on a broken class definition.
    pub fn declare(
        rtti: &'static Rtti,
        base: Option<&'static MetaObject>,
        properties: impl IntoIterator<Item = MetaProperty>,
    ) -> Self {
        let mut meta = Self::new(rtti, base);
        for property in properties {
            if let Err(e) = meta.add_property(property) {
                panic!("invalid meta-object declaration for {}: {}", rtti, e);
            }
        }
        debug!(
            "declared meta-object {} with {} own properties",
            rtti,
            meta.property_count()
        );
        meta
    }

    /// Register a property declared directly on this class
    ///
    /// Fails if the name is not a valid NCName or is already declared on
    /// this class or any of its ancestors.
    pub fn add_property(&mut self, mut property: MetaProperty) -> Result<()> {
        names::validate_property_name(property.name())?;
        if self.property(property.name()).is_some() {
            return Err(Error::DuplicateProperty {
                class: self.rtti.class_name().to_string(),
                property: property.name().to_string(),
            });
        }
        property.set_class_name(self.rtti.class_name());
        self.properties.insert(property.name(), property);
        Ok(())
    }

    /// Type descriptor of the class
    pub fn rtti(&self) -> &'static Rtti {
        self.rtti
    }

    /// Meta-object of the parent class
    pub fn base(&self) -> Option<&'static MetaObject> {
        self.base
    }

    /// Number of properties declared directly on this class
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Property declared directly on this class at `index`
    pub fn property_at(&self, index: usize) -> Option<&MetaProperty> {
        self.properties.get_index(index).map(|(_, p)| p)
    }

    /// Iterate over the properties declared directly on this class
    pub fn properties(&self) -> impl Iterator<Item = &MetaProperty> {
        self.properties.values()
    }

    /// Resolve a property by name, searching this class first and then its
    /// ancestors
    pub fn property(&self, name: &str) -> Option<&MetaProperty> {
        let mut current = Some(self);
        while let Some(meta) = current {
            if let Some(property) = meta.properties.get(name) {
                return Some(property);
            }
            current = meta.base;
        }
        None
    }

    /// Resolve a property by name or fail with [`Error::PropertyNotFound`]
    pub fn find_property(&self, name: &str) -> Result<&MetaProperty> {
        self.property(name).ok_or_else(|| Error::PropertyNotFound {
            class: self.rtti.class_name().to_string(),
            property: name.to_string(),
        })
    }

    /// All properties including inherited ones, least derived class first
    pub fn all_properties(&self) -> Vec<&MetaProperty> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(meta) = current {
            chain.push(meta);
            current = meta.base;
        }
        chain
            .into_iter()
            .rev()
            .flat_map(|meta| meta.properties.values())
            .collect()
    }

    /// Check if this meta-object's class is `rtti` or derives from it
    pub fn is_derived_from(&self, rtti: &Rtti) -> bool {
        self.rtti.is_kind_of(rtti)
    }
}
