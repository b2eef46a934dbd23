//! `StringType`: a string value element

use once_cell::sync::Lazy;

use crate::metaobject::MetaObject;
use crate::property::property;
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`StringType`]
pub static STRING_TYPE_RTTI: Rtti = Rtti::new("FDSNXML::StringType", &BASE_OBJECT);

static STRING_TYPE_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &STRING_TYPE_RTTI,
        None,
        [property(
            "value",
            false,
            |o: &StringType| &o.value,
            |o: &mut StringType, v: String| o.value = v,
        )],
    )
});

/// Plain string content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringType {
    value: String,
}

impl StringType {
    /// Create a string element holding `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// String content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the string content
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

crate::impl_class!(StringType, STRING_TYPE_RTTI, STRING_TYPE_META);
