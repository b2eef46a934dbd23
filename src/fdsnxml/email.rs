//! `Email`: an e-mail address, derived from `StringType`

use once_cell::sync::Lazy;

use super::stringtype::{StringType, STRING_TYPE_RTTI};
use crate::metaobject::MetaObject;
use crate::object::Class;
use crate::rtti::Rtti;

/// Type descriptor of [`Email`]
pub static EMAIL_RTTI: Rtti = Rtti::new("FDSNXML::Email", &STRING_TYPE_RTTI);

static EMAIL_META: Lazy<MetaObject> =
    Lazy::new(|| MetaObject::new(&EMAIL_RTTI, Some(StringType::meta_object())));

/// E-mail address
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Email {
    base: StringType,
}

impl Email {
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

crate::impl_class!(Email, EMAIL_RTTI, EMAIL_META, base = base);
