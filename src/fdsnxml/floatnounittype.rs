//! `FloatNoUnitType`: a measured value with optional uncertainties

use once_cell::sync::Lazy;

use crate::metaobject::MetaObject;
use crate::optional::Optional;
use crate::property::{optional_property, property};
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`FloatNoUnitType`]
pub static FLOAT_NO_UNIT_TYPE_RTTI: Rtti = Rtti::new("FDSNXML::FloatNoUnitType", &BASE_OBJECT);

static FLOAT_NO_UNIT_TYPE_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &FLOAT_NO_UNIT_TYPE_RTTI,
        None,
        [
            property(
                "value",
                false,
                |o: &FloatNoUnitType| &o.value,
                |o: &mut FloatNoUnitType, v: f64| o.value = v,
            ),
            optional_property(
                "plusError",
                true,
                |o: &FloatNoUnitType| o.plus_error.as_option(),
                |o: &mut FloatNoUnitType, v: Option<f64>| o.plus_error = v.into(),
            ),
            optional_property(
                "minusError",
                true,
                |o: &FloatNoUnitType| o.minus_error.as_option(),
                |o: &mut FloatNoUnitType, v: Option<f64>| o.minus_error = v.into(),
            ),
            optional_property(
                "measurementMethod",
                true,
                |o: &FloatNoUnitType| o.measurement_method.as_option(),
                |o: &mut FloatNoUnitType, v: Option<String>| o.measurement_method = v.into(),
            ),
        ],
    )
});

/// Floating point value without a unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatNoUnitType {
    value: f64,
    plus_error: Optional<f64>,
    minus_error: Optional<f64>,
    measurement_method: Optional<String>,
}

impl FloatNoUnitType {
    /// Create from a value with no uncertainties
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Measured value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the measured value
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Upper uncertainty
    pub fn plus_error(&self) -> crate::Result<f64> {
        self.plus_error
            .get("FloatNoUnitType.plusError")
            .copied()
    }

    /// Set or clear the upper uncertainty
    pub fn set_plus_error(&mut self, value: Option<f64>) {
        self.plus_error = value.into();
    }

    /// Lower uncertainty
    pub fn minus_error(&self) -> crate::Result<f64> {
        self.minus_error
            .get("FloatNoUnitType.minusError")
            .copied()
    }

    /// Set or clear the lower uncertainty
    pub fn set_minus_error(&mut self, value: Option<f64>) {
        self.minus_error = value.into();
    }

    /// Method used to obtain the value
    pub fn measurement_method(&self) -> crate::Result<&str> {
        self.measurement_method
            .get("FloatNoUnitType.measurementMethod")
            .map(String::as_str)
    }

    /// Set or clear the measurement method
    pub fn set_measurement_method(&mut self, value: Option<String>) {
        self.measurement_method = value.into();
    }
}

crate::impl_class!(FloatNoUnitType, FLOAT_NO_UNIT_TYPE_RTTI, FLOAT_NO_UNIT_TYPE_META);
