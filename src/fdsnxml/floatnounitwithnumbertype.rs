//! `FloatNoUnitWithNumberType`: a `FloatNoUnitType` with an optional
//! sequence number

use once_cell::sync::Lazy;

use super::countertype::CounterType;
use super::floatnounittype::{FloatNoUnitType, FLOAT_NO_UNIT_TYPE_RTTI};
use crate::error::Result;
use crate::metaobject::MetaObject;
use crate::object::Class;
use crate::optional::Optional;
use crate::property::optional_property;
use crate::rtti::Rtti;

/// Type descriptor of [`FloatNoUnitWithNumberType`]
pub static FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI: Rtti = Rtti::new(
    "FDSNXML::FloatNoUnitWithNumberType",
    &FLOAT_NO_UNIT_TYPE_RTTI,
);

static FLOAT_NO_UNIT_WITH_NUMBER_TYPE_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI,
        Some(FloatNoUnitType::meta_object()),
        [optional_property(
            "number",
            false,
            |o: &FloatNoUnitWithNumberType| o.number.as_option(),
            |o: &mut FloatNoUnitWithNumberType, v: Option<CounterType>| o.set_number(v),
        )],
    )
});

/// Unitless value tagged with a sequence number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatNoUnitWithNumberType {
    base: FloatNoUnitType,
    number: Optional<CounterType>,
}

impl FloatNoUnitWithNumberType {
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
    pub fn plus_error(&self) -> Result<f64> {
        self.base.plus_error()
    }

    /// Set or clear the upper uncertainty
    pub fn set_plus_error(&mut self, value: Option<f64>) {
        self.base.set_plus_error(value);
    }

    /// Lower uncertainty
    pub fn minus_error(&self) -> Result<f64> {
        self.base.minus_error()
    }

    /// Set or clear the lower uncertainty
    pub fn set_minus_error(&mut self, value: Option<f64>) {
        self.base.set_minus_error(value);
    }

    /// Method used to obtain the value
    pub fn measurement_method(&self) -> Result<&str> {
        self.base.measurement_method()
    }

    /// Set or clear the measurement method
    pub fn set_measurement_method(&mut self, value: Option<String>) {
        self.base.set_measurement_method(value);
    }

    /// Sequence number
    pub fn number(&self) -> Result<&CounterType> {
        self.number.get("FloatNoUnitWithNumberType.number")
    }

    /// Set or clear the sequence number
    pub fn set_number(&mut self, number: Option<CounterType>) {
        self.number = number.into();
    }
}

crate::impl_class!(
    FloatNoUnitWithNumberType,
    FLOAT_NO_UNIT_WITH_NUMBER_TYPE_RTTI,
    FLOAT_NO_UNIT_WITH_NUMBER_TYPE_META,
    base = base
);
