//! Meta-property descriptors
//!
//! A [`MetaProperty`] describes one field of a schema class: its name (which
//! is also its XML tag or attribute name), its schema type, where it lives in
//! the document and how to reach it. Reaching it goes through a typed accessor
//! pair registered once per class; generic readers and writers use nothing
//! else.

use std::fmt;

use crate::collection::OwnedCollection;
use crate::error::{Error, Result};
use crate::names;
use crate::object::{cast, cast_mut, BaseObject, Class};
use crate::value::{MetaValue, PropertyKind, Value};

/// Callback used to visit borrowed child objects
pub type Visitor<'v> = dyn FnMut(&dyn BaseObject) -> Result<()> + 'v;

/// Type-erased access to one field of a class
///
/// Implementations resolve the target class through [`cast`], so properties
/// inherited from a parent class work on derived instances.
pub trait PropertyAccessor: Send + Sync {
    /// Shape of the property
    fn kind(&self) -> PropertyKind;

    /// Check if the field holds a value
    fn is_set(&self, obj: &dyn BaseObject) -> Result<bool>;

    /// Read the field; `None` when an optional field is absent
    fn read(&self, obj: &dyn BaseObject) -> Result<Option<Value>>;

    /// Write the field; `Value::None` clears an optional field
    fn write(&self, obj: &mut dyn BaseObject, value: Value) -> Result<()>;

    /// Write the field from its lexical form
    fn write_text(&self, obj: &mut dyn BaseObject, text: &str) -> Result<()>;

    /// Borrow a nested object field
    fn object<'a>(&self, obj: &'a dyn BaseObject) -> Result<Option<&'a dyn BaseObject>>;

    /// Create a default instance of the field's object class
    fn create(&self) -> Option<Box<dyn BaseObject>>;

    /// Number of children of a collection field
    fn count(&self, _obj: &dyn BaseObject) -> Result<usize> {
        Err(Error::Type("not a collection property".to_string()))
    }

    /// Visit the children of a collection field in order
    fn visit(&self, _obj: &dyn BaseObject, _visitor: &mut Visitor<'_>) -> Result<()> {
        Err(Error::Type("not a collection property".to_string()))
    }

    /// Add a child to a collection field
    fn add(&self, _obj: &mut dyn BaseObject, _child: Box<dyn BaseObject>) -> Result<bool> {
        Err(Error::Type("not a collection property".to_string()))
    }

    /// Remove the child at `index` from a collection field
    fn remove(&self, _obj: &mut dyn BaseObject, _index: usize) -> Result<bool> {
        Err(Error::Type("not a collection property".to_string()))
    }
}

fn target<C: Class>(obj: &dyn BaseObject) -> Result<&C> {
    cast::<C>(obj).ok_or_else(|| {
        Error::Type(format!("expected {}, got {}", C::rtti(), obj.class_name()))
    })
}

fn target_mut<C: Class>(obj: &mut dyn BaseObject) -> Result<&mut C> {
    let class_name = obj.class_name();
    cast_mut::<C>(obj)
        .ok_or_else(|| Error::Type(format!("expected {}, got {}", C::rtti(), class_name)))
}

/// Accessor pair for a required field
pub struct FieldAccessor<C, T> {
    getter: fn(&C) -> &T,
    setter: fn(&mut C, T),
}

impl<C: Class, T: MetaValue> PropertyAccessor for FieldAccessor<C, T> {
    fn kind(&self) -> PropertyKind {
        T::KIND
    }

    fn is_set(&self, obj: &dyn BaseObject) -> Result<bool> {
        target::<C>(obj).map(|_| true)
    }

    fn read(&self, obj: &dyn BaseObject) -> Result<Option<Value>> {
        Ok(Some((self.getter)(target::<C>(obj)?).to_value()))
    }

    fn write(&self, obj: &mut dyn BaseObject, value: Value) -> Result<()> {
        if value.is_none() {
            return Err(Error::Value(format!(
                "cannot clear required {} field",
                T::type_name()
            )));
        }
        let value = T::from_value(value)?;
        (self.setter)(target_mut::<C>(obj)?, value);
        Ok(())
    }

    fn write_text(&self, obj: &mut dyn BaseObject, text: &str) -> Result<()> {
        let value = T::from_text(text)?;
        (self.setter)(target_mut::<C>(obj)?, value);
        Ok(())
    }

    fn object<'a>(&self, obj: &'a dyn BaseObject) -> Result<Option<&'a dyn BaseObject>> {
        Ok((self.getter)(target::<C>(obj)?).as_object())
    }

    fn create(&self) -> Option<Box<dyn BaseObject>> {
        T::create_object()
    }
}

/// Accessor pair for an optional field
pub struct OptionalAccessor<C, T> {
    getter: fn(&C) -> Option<&T>,
    setter: fn(&mut C, Option<T>),
}

impl<C: Class, T: MetaValue> PropertyAccessor for OptionalAccessor<C, T> {
    fn kind(&self) -> PropertyKind {
        T::KIND
    }

    fn is_set(&self, obj: &dyn BaseObject) -> Result<bool> {
        Ok((self.getter)(target::<C>(obj)?).is_some())
    }

    fn read(&self, obj: &dyn BaseObject) -> Result<Option<Value>> {
        Ok((self.getter)(target::<C>(obj)?).map(MetaValue::to_value))
    }

    fn write(&self, obj: &mut dyn BaseObject, value: Value) -> Result<()> {
        let value = if value.is_none() {
            None
        } else {
            Some(T::from_value(value)?)
        };
        (self.setter)(target_mut::<C>(obj)?, value);
        Ok(())
    }

    fn write_text(&self, obj: &mut dyn BaseObject, text: &str) -> Result<()> {
        let value = T::from_text(text)?;
        (self.setter)(target_mut::<C>(obj)?, Some(value));
        Ok(())
    }

    fn object<'a>(&self, obj: &'a dyn BaseObject) -> Result<Option<&'a dyn BaseObject>> {
        Ok((self.getter)(target::<C>(obj)?).and_then(MetaValue::as_object))
    }

    fn create(&self) -> Option<Box<dyn BaseObject>> {
        T::create_object()
    }
}

/// Accessor pair for an owned-child collection
pub struct CollectionAccessor<C, T> {
    getter: fn(&C) -> &OwnedCollection<T>,
    getter_mut: fn(&mut C) -> &mut OwnedCollection<T>,
}

impl<C: Class, T: Class> PropertyAccessor for CollectionAccessor<C, T> {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Collection
    }

    fn is_set(&self, obj: &dyn BaseObject) -> Result<bool> {
        Ok(!(self.getter)(target::<C>(obj)?).is_empty())
    }

    fn read(&self, _obj: &dyn BaseObject) -> Result<Option<Value>> {
        Err(Error::Type("collection properties have no single value".to_string()))
    }

    fn write(&self, _obj: &mut dyn BaseObject, _value: Value) -> Result<()> {
        Err(Error::Type("collection properties have no single value".to_string()))
    }

    fn write_text(&self, _obj: &mut dyn BaseObject, _text: &str) -> Result<()> {
        Err(Error::Type("collection properties have no lexical form".to_string()))
    }

    fn object<'a>(&self, _obj: &'a dyn BaseObject) -> Result<Option<&'a dyn BaseObject>> {
        Err(Error::Type("collection properties have no single value".to_string()))
    }

    fn create(&self) -> Option<Box<dyn BaseObject>> {
        Some(Box::new(T::default()))
    }

    fn count(&self, obj: &dyn BaseObject) -> Result<usize> {
        Ok((self.getter)(target::<C>(obj)?).count())
    }

    fn visit(&self, obj: &dyn BaseObject, visitor: &mut Visitor<'_>) -> Result<()> {
        for child in (self.getter)(target::<C>(obj)?) {
            let child = child.borrow();
            visitor(&*child)?;
        }
        Ok(())
    }

    fn add(&self, obj: &mut dyn BaseObject, child: Box<dyn BaseObject>) -> Result<bool> {
        let class_name = child.class_name();
        let child = crate::object::downcast_box::<T>(child).ok_or_else(|| {
            Error::Type(format!("expected {}, got {}", T::rtti(), class_name))
        })?;
        let collection = (self.getter_mut)(target_mut::<C>(obj)?);
        collection.push(*child);
        Ok(true)
    }

    fn remove(&self, obj: &mut dyn BaseObject, index: usize) -> Result<bool> {
        let collection = (self.getter_mut)(target_mut::<C>(obj)?);
        Ok(collection.remove_at(index).is_some())
    }
}

/// Descriptor of one field of a class
pub struct MetaProperty {
    name: &'static str,
    type_name: &'static str,
    class_name: &'static str,
    is_attribute: bool,
    is_optional: bool,
    accessor: Box<dyn PropertyAccessor>,
}

impl MetaProperty {
    /// Create a descriptor from its parts
    pub fn new(
        name: &'static str,
        type_name: &'static str,
        is_attribute: bool,
        is_optional: bool,
        accessor: Box<dyn PropertyAccessor>,
    ) -> Self {
        Self {
            name,
            type_name,
            class_name: "",
            is_attribute,
            is_optional,
            accessor,
        }
    }

    /// Property name (XML tag or attribute name)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Schema type name of the field
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Class that declares the property
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Qualified name (`Class.property`) used in diagnostics
    pub fn qualified_name(&self) -> String {
        names::qualified_property_name(self.class_name, self.name)
    }

    /// Check if the property maps to an XML attribute
    pub fn is_attribute(&self) -> bool {
        self.is_attribute
    }

    /// Check if the property may be absent
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Shape of the property
    pub fn kind(&self) -> PropertyKind {
        self.accessor.kind()
    }

    /// Check if the property is an owned-child collection
    pub fn is_collection(&self) -> bool {
        self.kind() == PropertyKind::Collection
    }

    /// Check if the property is a nested object
    pub fn is_object(&self) -> bool {
        self.kind() == PropertyKind::Object
    }

    pub(crate) fn set_class_name(&mut self, class_name: &'static str) {
        self.class_name = class_name;
    }

    /// Check if the field holds a value on `obj`
    pub fn is_set(&self, obj: &dyn BaseObject) -> Result<bool> {
        self.accessor.is_set(obj)
    }

    /// Read the field value of `obj`
    ///
    /// Fails with [`Error::ValueNotSet`] when an optional field is absent.
    pub fn read(&self, obj: &dyn BaseObject) -> Result<Value> {
        self.accessor
            .read(obj)?
            .ok_or_else(|| Error::value_not_set(self.qualified_name()))
    }

    /// Write the field value of `obj`
    pub fn write(&self, obj: &mut dyn BaseObject, value: Value) -> Result<()> {
        self.accessor.write(obj, value)
    }

    /// Write the field of `obj` from its lexical form
    pub fn write_text(&self, obj: &mut dyn BaseObject, text: &str) -> Result<()> {
        self.accessor.write_text(obj, text).map_err(|e| match e {
            Error::Value(message) => {
                Error::Value(format!("{}: {}", self.qualified_name(), message))
            }
            other => other,
        })
    }

    /// Borrow a nested object field of `obj`
    ///
    /// Returns `Ok(None)` for an absent optional object.
    pub fn object<'a>(&self, obj: &'a dyn BaseObject) -> Result<Option<&'a dyn BaseObject>> {
        self.accessor.object(obj)
    }

    /// Create a default instance of the object or element class
    pub fn create(&self) -> Option<Box<dyn BaseObject>> {
        self.accessor.create()
    }

    /// Number of children in a collection property of `obj`
    pub fn count(&self, obj: &dyn BaseObject) -> Result<usize> {
        self.accessor.count(obj)
    }

    /// Visit the children of a collection property of `obj` in order
    pub fn visit(&self, obj: &dyn BaseObject, visitor: &mut Visitor<'_>) -> Result<()> {
        self.accessor.visit(obj, visitor)
    }

    /// Append a child to a collection property of `obj`
    pub fn add_child(&self, obj: &mut dyn BaseObject, child: Box<dyn BaseObject>) -> Result<bool> {
        self.accessor.add(obj, child)
    }

    /// Remove the child at `index` from a collection property of `obj`
    pub fn remove_child(&self, obj: &mut dyn BaseObject, index: usize) -> Result<bool> {
        self.accessor.remove(obj, index)
    }
}

impl fmt::Debug for MetaProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaProperty")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("class_name", &self.class_name)
            .field("kind", &self.kind())
            .field("is_attribute", &self.is_attribute)
            .field("is_optional", &self.is_optional)
            .finish()
    }
}

/// Declare a required field
pub fn property<C: Class, T: MetaValue>(
    name: &'static str,
    is_attribute: bool,
    getter: fn(&C) -> &T,
    setter: fn(&mut C, T),
) -> MetaProperty {
    MetaProperty::new(
        name,
        T::type_name(),
        is_attribute,
        false,
        Box::new(FieldAccessor { getter, setter }),
    )
}

/// Declare an optional field
pub fn optional_property<C: Class, T: MetaValue>(
    name: &'static str,
    is_attribute: bool,
    getter: fn(&C) -> Option<&T>,
    setter: fn(&mut C, Option<T>),
) -> MetaProperty {
    MetaProperty::new(
        name,
        T::type_name(),
        is_attribute,
        true,
        Box::new(OptionalAccessor { getter, setter }),
    )
}

/// Declare an owned-child collection
pub fn collection_property<C: Class, T: Class>(
    name: &'static str,
    getter: fn(&C) -> &OwnedCollection<T>,
    getter_mut: fn(&mut C) -> &mut OwnedCollection<T>,
) -> MetaProperty {
    MetaProperty::new(
        name,
        T::rtti().class_name(),
        false,
        true,
        Box::new(CollectionAccessor { getter, getter_mut }),
    )
}
