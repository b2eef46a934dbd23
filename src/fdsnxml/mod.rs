//! FDSN StationXML schema classes
//!
//! Each class declares its fields once in a meta-object; reading and writing
//! documents goes through those declarations only.

mod agency;
mod comment;
mod countertype;
mod email;
mod floatnounittype;
mod floatnounitwithnumbertype;
mod floattype;
mod operator;
mod person;
mod phonenumber;
mod stringtype;

pub use agency::{Agency, AGENCY_RTTI};
pub use comment::{Comment, COMMENT_RTTI};
pub use countertype::{CounterType, COUNTER_TYPE_RTTI};
pub use email::{Email, EMAIL_RTTI};
pub use floatnounittype::{FloatNoUnitType, FLOAT_NO_UNIT_TYPE_RTTI};
pub use floatnounitwithnumbertype::{
    FloatNoUnitWithNumberType, FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI,
};
pub use floattype::{FloatType, FLOAT_TYPE_RTTI};
pub use operator::{Operator, OPERATOR_RTTI};
pub use person::{Person, PERSON_RTTI};
pub use phonenumber::{PhoneNumber, PHONE_NUMBER_RTTI};
pub use stringtype::{StringType, STRING_TYPE_RTTI};

use crate::registry::ClassRegistry;

/// Namespace prefix of all class names in this module
pub const NAMESPACE: &str = "FDSNXML";

/// Register every class of this module, base classes first
pub fn register_classes(registry: &mut ClassRegistry) {
    registry.register::<StringType>();
    registry.register::<CounterType>();
    registry.register::<Agency>();
    registry.register::<Email>();
    registry.register::<FloatNoUnitType>();
    registry.register::<FloatType>();
    registry.register::<FloatNoUnitWithNumberType>();
    registry.register::<PhoneNumber>();
    registry.register::<Person>();
    registry.register::<Operator>();
    registry.register::<Comment>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Handle;
    use crate::names;
    use crate::object::Class;

    #[test]
    fn test_class_names_share_namespace() {
        for entry in ClassRegistry::global().iter() {
            let (namespace, _) = names::split_class_name(entry.rtti().class_name());
            assert_eq!(namespace, Some(NAMESPACE));
        }
    }

    #[test]
    fn test_derived_classes_link_base_meta() {
        assert!(std::ptr::eq(
            Agency::meta_object().base().unwrap(),
            StringType::meta_object()
        ));
        assert!(std::ptr::eq(
            FloatType::meta_object().base().unwrap(),
            FloatNoUnitType::meta_object()
        ));
        assert!(Operator::meta_object().base().is_none());
    }

    #[test]
    fn test_float_type_unit() {
        let mut value = FloatType::default();
        assert!(value.unit().is_err());
        value.set_unit(Some("M/S".to_string()));
        value.set_value(1.0);
        assert_eq!(value.unit().unwrap(), "M/S");
        assert_eq!(value.value(), 1.0);
    }

    #[test]
    fn test_base_part_access() {
        let mut agency = Agency::new("GFZ");
        agency.as_string_type_mut().set_value("IRIS");
        assert_eq!(agency.value(), "IRIS");
        assert!(std::ptr::eq(
            agency.as_string_type(),
            crate::object::cast::<StringType>(&agency).unwrap()
        ));

        let mut value = FloatNoUnitWithNumberType::default();
        value.as_float_no_unit_type_mut().set_plus_error(Some(0.25));
        value.set_measurement_method(Some("GPS".to_string()));
        assert_eq!(value.plus_error().unwrap(), 0.25);
        assert_eq!(value.as_float_no_unit_type().measurement_method().unwrap(), "GPS");
        assert_ne!(*value.as_float_no_unit_type(), FloatNoUnitType::default());
    }

    #[test]
    fn test_person_indexed_access() {
        let mut person = Person::default();
        for name in ["A", "B"] {
            person.add_name(&Handle::new(StringType::new(name)));
        }
        person.add_agency(&Handle::new(Agency::new("GFZ")));
        person.add_email(&Handle::new(Email::new("a@gfz.de")));
        person.add_phone(&Handle::new(PhoneNumber::new(331, "2880")));

        assert_eq!(person.name_count(), 2);
        assert_eq!(person.name(1).unwrap().borrow().value(), "B");
        assert!(person.name(2).is_none());
        assert_eq!(person.agency_count(), 1);
        assert_eq!(person.agency(0).unwrap().borrow().value(), "GFZ");
        assert_eq!(person.email_count(), 1);
        assert_eq!(person.email(0).unwrap().borrow().value(), "a@gfz.de");
        assert_eq!(person.phone_count(), 1);
        assert_eq!(person.phone(0).unwrap().borrow().area_code(), 331);

        let first = person.remove_name_at(0).unwrap();
        assert!(!first.has_owner());
        assert_eq!(person.name_count(), 1);
        assert_eq!(person.name(0).unwrap().borrow().value(), "B");
        assert!(person.remove_agency_at(1).is_none());
        assert!(person.remove_email_at(0).is_some());
        assert!(person.remove_phone_at(0).is_some());
        assert_eq!(person.email_count(), 0);
        assert_eq!(person.phone_count(), 0);
    }
}
