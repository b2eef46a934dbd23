//! Base value object
//!
//! [`BaseObject`] is the object-safe face of every schema class: runtime type
//! identification, the class meta-object, structural equality, copying and
//! assignment. Schema classes never implement it by hand; they implement
//! [`Class`] (usually through [`impl_class!`](crate::impl_class)) and receive
//! [`BaseObject`] from a blanket implementation.
//!
//! Inheritance is expressed by composition: a derived class embeds its parent
//! class as a field and exposes it through [`Class::base_object`]. Casting
//! walks that chain, so a derived instance can be viewed as any of its
//! ancestor classes.

use std::any::Any;
use std::fmt;

use crate::error::{Error, Result};
use crate::metaobject::MetaObject;
use crate::rtti::Rtti;
use crate::value::Value;

/// Object-safe interface shared by all schema class instances
pub trait BaseObject: Any + fmt::Debug {
    /// Get the runtime type descriptor of the concrete class
    fn type_info(&self) -> &'static Rtti;

    /// Get the meta-object of the concrete class
    fn meta(&self) -> &'static MetaObject;

    /// Get the embedded parent-class part, if the class derives from another
    fn base(&self) -> Option<&dyn BaseObject>;

    /// Get the embedded parent-class part mutably
    fn base_mut(&mut self) -> Option<&mut dyn BaseObject>;

    /// Upcast to `Any` for downcasting to the concrete class
    fn as_any(&self) -> &dyn Any;

    /// Upcast to `Any` mutably
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Upcast an owned box to `Any`
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Copy this object into a new box
    fn clone_object(&self) -> Box<dyn BaseObject>;

    /// Structural equality with another object of the same concrete class
    fn equals(&self, other: &dyn BaseObject) -> bool;

    /// Replace all fields with copies of the fields of `other`
    ///
    /// `other` must be of this class or derive from it.
    fn assign(&mut self, other: &dyn BaseObject) -> Result<()>;

    /// Get the fully qualified class name
    fn class_name(&self) -> &'static str {
        self.type_info().class_name()
    }

    /// Check if the concrete class is exactly `rtti`
    fn is_type_of(&self, rtti: &Rtti) -> bool {
        self.type_info().is_type_of(rtti)
    }

    /// Check if the concrete class is `rtti` or derives from it
    fn is_kind_of(&self, rtti: &Rtti) -> bool {
        self.type_info().is_kind_of(rtti)
    }
}

/// Static side of a schema class
pub trait Class: Any + fmt::Debug + Clone + Default + PartialEq {
    /// Type descriptor of the class
    fn rtti() -> &'static Rtti;

    /// Meta-object of the class
    fn meta_object() -> &'static MetaObject;

    /// Embedded parent-class part
    fn base_object(&self) -> Option<&dyn BaseObject> {
        None
    }

    /// Embedded parent-class part, mutably
    fn base_object_mut(&mut self) -> Option<&mut dyn BaseObject> {
        None
    }
}

impl<T: Class> BaseObject for T {
    fn type_info(&self) -> &'static Rtti {
        T::rtti()
    }

    fn meta(&self) -> &'static MetaObject {
        T::meta_object()
    }

    fn base(&self) -> Option<&dyn BaseObject> {
        self.base_object()
    }

    fn base_mut(&mut self) -> Option<&mut dyn BaseObject> {
        self.base_object_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_object(&self) -> Box<dyn BaseObject> {
        Box::new(self.clone())
    }

    fn equals(&self, other: &dyn BaseObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn assign(&mut self, other: &dyn BaseObject) -> Result<()> {
        let source = cast::<T>(other).ok_or_else(|| {
            Error::Type(format!(
                "cannot assign {} to {}",
                other.class_name(),
                T::rtti()
            ))
        })?;
        self.clone_from(source);
        Ok(())
    }
}

impl<'a> PartialEq for dyn BaseObject + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Clone for Box<dyn BaseObject> {
    fn clone(&self) -> Self {
        self.clone_object()
    }
}

/// Check if `obj` is exactly of class `rtti`
pub fn is_type_of(obj: &dyn BaseObject, rtti: &Rtti) -> bool {
    obj.is_type_of(rtti)
}

/// Check if `obj` is of class `rtti` or of a class deriving from it
pub fn is_kind_of(obj: &dyn BaseObject, rtti: &Rtti) -> bool {
    obj.is_kind_of(rtti)
}

/// View `obj` as class `T`
///
/// Succeeds whenever `obj` is of kind `T`, including when `T` is an ancestor
/// of the concrete class. Returns `None` otherwise.
pub fn cast<T: Class>(obj: &dyn BaseObject) -> Option<&T> {
    let mut current = Some(obj);
    while let Some(object) = current {
        if let Some(found) = object.as_any().downcast_ref::<T>() {
            return Some(found);
        }
        current = object.base();
    }
    None
}

/// View `obj` mutably as class `T`
pub fn cast_mut<T: Class>(obj: &mut dyn BaseObject) -> Option<&mut T> {
    if obj.as_any().is::<T>() {
        return obj.as_any_mut().downcast_mut::<T>();
    }
    obj.base_mut().and_then(cast_mut::<T>)
}

/// Take ownership of a boxed object of exactly class `T`
pub fn downcast_box<T: Class>(obj: Box<dyn BaseObject>) -> Option<Box<T>> {
    obj.into_any().downcast::<T>().ok()
}

/// Extract an object of class `T` from a dynamic value
///
/// Values holding a derived class are sliced down to their `T` part.
pub fn object_from_value<T: Class>(value: Value) -> Result<T> {
    match value {
        Value::Object(obj) => {
            if obj.as_any().is::<T>() {
                return downcast_box::<T>(obj)
                    .map(|exact| *exact)
                    .ok_or_else(|| Error::Type(format!("expected {}", T::rtti())));
            }
            cast::<T>(&*obj).cloned().ok_or_else(|| {
                Error::Type(format!(
                    "expected {}, got {}",
                    T::rtti(),
                    obj.class_name()
                ))
            })
        }
        other => Err(Error::Type(format!(
            "expected {}, got {}",
            T::rtti(),
            other.type_name()
        ))),
    }
}

/// Implement [`Class`] and [`MetaValue`](crate::value::MetaValue) for a
/// schema class
///
/// ```rust,ignore
/// impl_class!(Operator, OPERATOR_RTTI, OPERATOR_META);
/// impl_class!(FloatType, FLOAT_TYPE_RTTI, FLOAT_TYPE_META, base = base);
/// ```
#[macro_export]
macro_rules! impl_class {
    (@value $ty:ty) => {
        impl $crate::value::MetaValue for $ty {
            const KIND: $crate::value::PropertyKind = $crate::value::PropertyKind::Object;

            fn type_name() -> &'static str {
                <$ty as $crate::object::Class>::rtti().class_name()
            }

            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Object(Box::new(self.clone()))
            }

            fn from_value(value: $crate::value::Value) -> $crate::error::Result<Self> {
                $crate::object::object_from_value::<Self>(value)
            }

            fn from_text(_text: &str) -> $crate::error::Result<Self> {
                Err($crate::error::Error::Type(format!(
                    "{} has no lexical form",
                    <$ty as $crate::object::Class>::rtti()
                )))
            }

            fn as_object(&self) -> Option<&dyn $crate::object::BaseObject> {
                Some(self)
            }

            fn create_object() -> Option<Box<dyn $crate::object::BaseObject>> {
                Some(Box::new(<$ty>::default()))
            }
        }
    };
    ($ty:ty, $rtti:expr, $meta:expr, base = $base:ident) => {
        impl $crate::object::Class for $ty {
            fn rtti() -> &'static $crate::rtti::Rtti {
                &$rtti
            }

            fn meta_object() -> &'static $crate::metaobject::MetaObject {
                &$meta
            }

            fn base_object(&self) -> Option<&dyn $crate::object::BaseObject> {
                Some(&self.$base)
            }

            fn base_object_mut(&mut self) -> Option<&mut dyn $crate::object::BaseObject> {
                Some(&mut self.$base)
            }
        }

        $crate::impl_class!(@value $ty);
    };
    ($ty:ty, $rtti:expr, $meta:expr) => {
        impl $crate::object::Class for $ty {
            fn rtti() -> &'static $crate::rtti::Rtti {
                &$rtti
            }

            fn meta_object() -> &'static $crate::metaobject::MetaObject {
                &$meta
            }
        }

        $crate::impl_class!(@value $ty);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fdsnxml::{
        Agency, CounterType, FloatNoUnitType, FloatNoUnitWithNumberType, FloatType,
        Operator, StringType, FLOAT_NO_UNIT_TYPE_RTTI, FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI,
        FLOAT_TYPE_RTTI, STRING_TYPE_RTTI,
    };
    use crate::rtti::BASE_OBJECT;

    #[test]
    fn test_type_and_kind_queries() {
        let obj = FloatNoUnitWithNumberType::default();
        let obj: &dyn BaseObject = &obj;

        assert!(is_type_of(obj, &FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI));
        assert!(!is_type_of(obj, &FLOAT_NO_UNIT_TYPE_RTTI));

        assert!(is_kind_of(obj, &FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI));
        assert!(is_kind_of(obj, &FLOAT_NO_UNIT_TYPE_RTTI));
        assert!(is_kind_of(obj, &BASE_OBJECT));
        assert!(!is_kind_of(obj, &FLOAT_TYPE_RTTI));
        assert!(!is_kind_of(obj, &STRING_TYPE_RTTI));
    }

    #[test]
    fn test_cast_to_ancestor() {
        let mut value = FloatNoUnitWithNumberType::default();
        value.set_value(1.5);
        let obj: &dyn BaseObject = &value;

        let base = cast::<FloatNoUnitType>(obj).expect("ancestor cast");
        assert_eq!(base.value(), 1.5);
        assert!(cast::<FloatNoUnitWithNumberType>(obj).is_some());
        assert!(cast::<FloatType>(obj).is_none());
        assert!(cast::<Operator>(obj).is_none());
    }

    #[test]
    fn test_cast_mut_to_ancestor() {
        let mut value = FloatNoUnitWithNumberType::default();
        {
            let obj: &mut dyn BaseObject = &mut value;
            let base = cast_mut::<FloatNoUnitType>(obj).expect("ancestor cast");
            base.set_value(2.0);
        }
        assert_eq!(value.value(), 2.0);
    }

    #[test]
    fn test_equals_requires_same_class() {
        let a = StringType::new("GFZ");
        let b = Agency::new("GFZ");
        assert!(!a.equals(&b));
        assert!(a.equals(&StringType::new("GFZ")));
        assert!(!a.equals(&StringType::new("BGR")));
    }

    #[test]
    fn test_dyn_equality_and_clone() {
        let a: Box<dyn BaseObject> = Box::new(CounterType::new(4));
        let b = a.clone();
        assert!(*a == *b);
        assert!(&a == &b);
        assert_eq!(b.class_name(), "FDSNXML::CounterType");
    }

    #[test]
    fn test_assign_from_same_and_derived_class() {
        let mut target = FloatNoUnitType::default();
        let mut source = FloatNoUnitWithNumberType::default();
        source.set_value(3.25);
        source.set_number(Some(CounterType::new(7)));

        target.assign(&source).unwrap();
        assert_eq!(target.value(), 3.25);

        let mut derived = FloatNoUnitWithNumberType::default();
        derived.assign(&source).unwrap();
        assert_eq!(derived, source);

        let err = derived.assign(&target).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
    }

    #[test]
    fn test_downcast_box() {
        let obj: Box<dyn BaseObject> = Box::new(CounterType::new(3));
        assert!(downcast_box::<StringType>(obj.clone()).is_none());
        let counter = downcast_box::<CounterType>(obj).unwrap();
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn test_object_from_value_slices_derived() {
        let value = Value::Object(Box::new(Agency::new("GFZ")));
        let base: StringType = object_from_value(value).unwrap();
        assert_eq!(base.value(), "GFZ");

        let err = object_from_value::<CounterType>(Value::Int(3)).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
    }
}
