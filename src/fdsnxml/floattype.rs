//! `FloatType`: a `FloatNoUnitType` carrying a unit

use once_cell::sync::Lazy;

use super::floatnounittype::{FloatNoUnitType, FLOAT_NO_UNIT_TYPE_RTTI};
use crate::metaobject::MetaObject;
use crate::object::Class;
use crate::optional::Optional;
use crate::property::optional_property;
use crate::rtti::Rtti;

/// Type descriptor of [`FloatType`]
pub static FLOAT_TYPE_RTTI: Rtti = Rtti::new("FDSNXML::FloatType", &FLOAT_NO_UNIT_TYPE_RTTI);

static FLOAT_TYPE_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &FLOAT_TYPE_RTTI,
        Some(FloatNoUnitType::meta_object()),
        [optional_property(
            "unit",
            true,
            |o: &FloatType| o.unit.as_option(),
            |o: &mut FloatType, v: Option<String>| o.unit = v.into(),
        )],
    )
});

/// Floating point value with a unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatType {
    base: FloatNoUnitType,
    unit: Optional<String>,
}

impl FloatType {
    /// Base `FloatNoUnitType` part
    pub fn as_float_no_unit_type(&self) -> &FloatNoUnitType {
        &self.base
    }

    /// Mutable base `FloatNoUnitType` part
    pub fn as_float_no_unit_type_mut(&mut self) -> &mut FloatNoUnitType {
        &mut self.base
    }

    /// The value
    pub fn value(&self) -> f64 {
        self.base.value()
    }

    /// Replace the value
    pub fn set_value(&mut self, value: f64) {
        self.base.set_value(value);
    }

    /// Upper uncertainty
    pub fn plus_error(&self) -> crate::Result<f64> {
        self.base.plus_error()
    }

    /// Set or clear the upper uncertainty
    pub fn set_plus_error(&mut self, value: Option<f64>) {
        self.base.set_plus_error(value);
    }

    /// Lower uncertainty
    pub fn minus_error(&self) -> crate::Result<f64> {
        self.base.minus_error()
    }

    /// Set or clear the lower uncertainty
    pub fn set_minus_error(&mut self, value: Option<f64>) {
        self.base.set_minus_error(value);
    }

    /// Method used to obtain the value
    pub fn measurement_method(&self) -> crate::Result<&str> {
        self.base.measurement_method()
    }

    /// Set or clear the measurement method
    pub fn set_measurement_method(&mut self, value: Option<String>) {
        self.base.set_measurement_method(value);
    }

    /// Unit of the value
    pub fn unit(&self) -> crate::Result<&str> {
        self.unit.get("FloatType.unit").map(String::as_str)
    }

    /// Set or clear the unit
    pub fn set_unit(&mut self, unit: Option<String>) {
        self.unit = unit.into();
    }
}

crate::impl_class!(FloatType, FLOAT_TYPE_RTTI, FLOAT_TYPE_META, base = base);
