//! `PhoneNumber`: a telephone number split into its parts

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::metaobject::MetaObject;
use crate::optional::Optional;
use crate::property::{optional_property, property};
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`PhoneNumber`]
pub static PHONE_NUMBER_RTTI: Rtti = Rtti::new("FDSNXML::PhoneNumber", &BASE_OBJECT);

static PHONE_NUMBER_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &PHONE_NUMBER_RTTI,
        None,
        [
            optional_property(
                "description",
                true,
                |o: &PhoneNumber| o.description.as_option(),
                |o: &mut PhoneNumber, v: Option<String>| o.description = v.into(),
            ),
            optional_property(
                "CountryCode",
                false,
                |o: &PhoneNumber| o.country_code.as_option(),
                |o: &mut PhoneNumber, v: Option<i64>| o.country_code = v.into(),
            ),
            property(
                "AreaCode",
                false,
                |o: &PhoneNumber| &o.area_code,
                |o: &mut PhoneNumber, v: i64| o.area_code = v,
            ),
            property(
                "PhoneNumber",
                false,
                |o: &PhoneNumber| &o.phone_number,
                |o: &mut PhoneNumber, v: String| o.phone_number = v,
            ),
        ],
    )
});

/// Telephone number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneNumber {
    description: Optional<String>,
    country_code: Optional<i64>,
    area_code: i64,
    phone_number: String,
}

impl PhoneNumber {
    /// Create from area code and local number
    pub fn new(area_code: i64, phone_number: impl Into<String>) -> Self {
        Self {
            area_code,
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }

    /// Free-form description
    pub fn description(&self) -> Result<&str> {
        self.description
            .get("PhoneNumber.description")
            .map(String::as_str)
    }

    /// Set or clear the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.into();
    }

    /// International country code
    pub fn country_code(&self) -> Result<i64> {
        self.country_code.get("PhoneNumber.CountryCode").copied()
    }

    /// Set or clear the country code
    pub fn set_country_code(&mut self, country_code: Option<i64>) {
        self.country_code = country_code.into();
    }

    /// Area code
    pub fn area_code(&self) -> i64 {
        self.area_code
    }

    /// Replace the area code
    pub fn set_area_code(&mut self, area_code: i64) {
        self.area_code = area_code;
    }

    /// Local number
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Replace the local number
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }
}

crate::impl_class!(PhoneNumber, PHONE_NUMBER_RTTI, PHONE_NUMBER_META);
