//! Class registry
//!
//! Maps class names to their type descriptor, meta-object and a factory for
//! default instances. Readers use it to instantiate the class named by a
//! document's root element.

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::metaobject::MetaObject;
use crate::names;
use crate::object::{BaseObject, Class};
use crate::rtti::Rtti;

static GLOBAL: Lazy<ClassRegistry> = Lazy::new(|| {
    let mut registry = ClassRegistry::new();
    crate::fdsnxml::register_classes(&mut registry);
    registry
});

/// Registration record of one class
#[derive(Debug, Clone, Copy)]
pub struct ClassEntry {
    rtti: &'static Rtti,
    meta: &'static MetaObject,
    factory: fn() -> Box<dyn BaseObject>,
}

impl ClassEntry {
    /// Type descriptor of the class
    pub fn rtti(&self) -> &'static Rtti {
        self.rtti
    }

    /// Meta-object of the class
    pub fn meta(&self) -> &'static MetaObject {
        self.meta
    }

    /// Create a default instance of the class
    pub fn create(&self) -> Box<dyn BaseObject> {
        (self.factory)()
    }
}

fn create_default<T: Class>() -> Box<dyn BaseObject> {
    Box::new(T::default())
}

/// Registry of schema classes, in registration order
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<&'static str, ClassEntry>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding all bundled FDSNXML classes
    pub fn global() -> &'static ClassRegistry {
        &GLOBAL
    }

    /// Register class `T`
    ///
    /// Returns `false` if the class name is malformed or a class with the
    /// same name is already registered.
    pub fn register<T: Class>(&mut self) -> bool {
        let rtti = T::rtti();
        if let Err(e) = names::validate_class_name(rtti.class_name()) {
            debug!("class not registered: {}", e);
            return false;
        }
        if self.classes.contains_key(rtti.class_name()) {
            debug!("class {} already registered", rtti);
            return false;
        }
        self.classes.insert(
            rtti.class_name(),
            ClassEntry {
                rtti,
                meta: T::meta_object(),
                factory: create_default::<T>,
            },
        );
        debug!("registered class {}", rtti);
        true
    }

    /// Look up a class by qualified or local name
    ///
    /// A local name (`Operator`) matches the first registered class whose
    /// qualified name ends in it.
    pub fn lookup(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name).or_else(|| {
            if names::split_class_name(name).0.is_some() {
                return None;
            }
            self.classes
                .values()
                .find(|entry| entry.rtti.local_name() == name)
        })
    }

    /// Create a default instance of the named class
    pub fn create(&self, name: &str) -> Result<Box<dyn BaseObject>> {
        self.lookup(name)
            .map(ClassEntry::create)
            .ok_or_else(|| Error::UnknownClass(name.to_string()))
    }

    /// Meta-object of the named class
    pub fn meta(&self, name: &str) -> Option<&'static MetaObject> {
        self.lookup(name).map(ClassEntry::meta)
    }

    /// Type descriptor of the named class
    pub fn rtti(&self, name: &str) -> Option<&'static Rtti> {
        self.lookup(name).map(ClassEntry::rtti)
    }

    /// Check if a class is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over registered classes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    /// Registered classes deriving from `rtti` (including `rtti` itself)
    pub fn kinds_of<'a>(&'a self, rtti: &'a Rtti) -> impl Iterator<Item = &'a ClassEntry> + 'a {
        self.classes
            .values()
            .filter(move |entry| entry.rtti.is_kind_of(rtti))
    }
}
