//! `Agency`: name of an agency, derived from `StringType`

use once_cell::sync::Lazy;

use super::stringtype::{StringType, STRING_TYPE_RTTI};
use crate::metaobject::MetaObject;
use crate::object::Class;
use crate::rtti::Rtti;

/// Type descriptor of [`Agency`]
pub static AGENCY_RTTI: Rtti = Rtti::new("FDSNXML::Agency", &STRING_TYPE_RTTI);

static AGENCY_META: Lazy<MetaObject> =
    Lazy::new(|| MetaObject::new(&AGENCY_RTTI, Some(StringType::meta_object())));

/// Agency name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agency {
    base: StringType,
}

impl Agency {
    /// Create from the string content
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            base: StringType::new(value),
        }
    }

    /// Base `StringType` part
    pub fn as_string_type(&self) -> &StringType {
        &self.base
    }

    /// Mutable base `StringType` part
    pub fn as_string_type_mut(&mut self) -> &mut StringType {
        &mut self.base
    }

    /// String content
    pub fn value(&self) -> &str {
        self.base.value()
    }

    /// Replace the string content
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.base.set_value(value);
    }
}

crate::impl_class!(Agency, AGENCY_RTTI, AGENCY_META, base = base);
