//! Integration tests for type identification and meta-object resolution

use pretty_assertions::assert_eq;

use fdsnxml::fdsnxml::{
    Agency, Comment, CounterType, Email, FloatNoUnitType, FloatNoUnitWithNumberType, FloatType,
    Operator, PhoneNumber, StringType, AGENCY_RTTI, FLOAT_NO_UNIT_TYPE_RTTI, FLOAT_TYPE_RTTI,
    STRING_TYPE_RTTI,
};
use fdsnxml::{
    cast, is_kind_of, is_type_of, BaseObject, Class, ClassRegistry, Error, PropertyKind, Value,
    BASE_OBJECT,
};

#[test]
fn test_kind_of_every_ancestor() {
    let value = FloatType::default();
    let obj: &dyn BaseObject = &value;

    for ancestor in FloatType::rtti().ancestors() {
        assert!(is_kind_of(obj, ancestor), "not kind of {}", ancestor);
    }
    assert!(is_kind_of(obj, &BASE_OBJECT));
    assert!(is_type_of(obj, &FLOAT_TYPE_RTTI));
    assert!(!is_type_of(obj, &FLOAT_NO_UNIT_TYPE_RTTI));
    assert!(!is_type_of(obj, &BASE_OBJECT));
}

#[test]
fn test_siblings_are_unrelated() {
    let agency = Agency::new("GFZ");
    let email = Email::new("info@gfz.de");
    assert!(is_kind_of(&agency, &STRING_TYPE_RTTI));
    assert!(is_kind_of(&email, &STRING_TYPE_RTTI));
    assert!(!is_kind_of(&email, &AGENCY_RTTI));
    assert!(cast::<Agency>(&email).is_none());
    assert_eq!(cast::<StringType>(&email).unwrap().value(), "info@gfz.de");
}

#[test]
fn test_inherited_property_resolution() {
    let meta = FloatNoUnitWithNumberType::meta_object();
    for name in ["value", "plusError", "minusError", "measurementMethod", "number"] {
        assert!(meta.property(name).is_some(), "{} not resolved", name);
    }
    assert!(meta.property("unit").is_none());
    assert!(meta.property("Agency").is_none());

    let err = meta.find_property("nothing").unwrap_err();
    assert_eq!(
        err.to_string(),
        "property 'nothing' not found in FDSNXML::FloatNoUnitWithNumberType"
    );
}

#[test]
fn test_property_shapes() {
    let meta = Comment::meta_object();
    let shapes: Vec<_> = meta
        .properties()
        .map(|p| (p.name(), p.kind(), p.is_attribute(), p.is_optional()))
        .collect();
    assert_eq!(
        shapes,
        vec![
            ("Value", PropertyKind::Scalar, false, false),
            ("BeginEffectiveTime", PropertyKind::Scalar, false, true),
            ("EndEffectiveTime", PropertyKind::Scalar, false, true),
            ("id", PropertyKind::Scalar, true, true),
            ("subject", PropertyKind::Scalar, true, true),
            ("Author", PropertyKind::Collection, false, true),
        ]
    );
    assert_eq!(meta.property("Author").unwrap().type_name(), "FDSNXML::Person");
    assert_eq!(meta.property("BeginEffectiveTime").unwrap().type_name(), "datetime");
}

#[test]
fn test_generic_access_through_registry() {
    let registry = ClassRegistry::global();
    let mut obj = registry.create("PhoneNumber").unwrap();
    let meta = obj.meta();

    meta.find_property("AreaCode")
        .unwrap()
        .write(&mut *obj, Value::Int(331))
        .unwrap();
    meta.find_property("PhoneNumber")
        .unwrap()
        .write_text(&mut *obj, "2880")
        .unwrap();
    meta.find_property("CountryCode")
        .unwrap()
        .write(&mut *obj, Value::from(Some(49i64)))
        .unwrap();

    let phone = cast::<PhoneNumber>(&*obj).unwrap();
    assert_eq!(phone.area_code(), 331);
    assert_eq!(phone.phone_number(), "2880");
    assert_eq!(phone.country_code().unwrap(), 49);
    assert!(phone.description().unwrap_err().is_value_not_set());

    let description = meta.find_property("description").unwrap();
    let err = description.read(&*obj).unwrap_err();
    assert_eq!(err.to_string(), "PhoneNumber.description is not set");
}

#[test]
fn test_unset_optional_never_defaults() {
    let value = FloatNoUnitType::default();
    let meta = FloatNoUnitType::meta_object();
    for name in ["plusError", "minusError", "measurementMethod"] {
        let prop = meta.property(name).unwrap();
        assert!(!prop.is_set(&value).unwrap());
        assert!(matches!(prop.read(&value), Err(Error::ValueNotSet(_))));
    }
    assert_eq!(
        meta.property("value").unwrap().read(&value).unwrap(),
        Value::Float(0.0)
    );
}

#[test]
fn test_assign_through_trait_objects() {
    let mut source = Operator::default();
    source.set_agency(Agency::new("GFZ"));
    source.set_web_site(Some(StringType::new("https://geofon.gfz.de")));

    let mut target: Box<dyn BaseObject> = ClassRegistry::global().create("Operator").unwrap();
    assert!(!target.equals(&source));
    target.assign(&source).unwrap();
    assert!(target.equals(&source));

    let mut counter = CounterType::new(1);
    assert!(matches!(counter.assign(&source), Err(Error::Type(_))));
    assert_eq!(counter.value(), 1);
}
