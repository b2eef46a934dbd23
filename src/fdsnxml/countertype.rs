//! `CounterType`: a non-negative integer element

use once_cell::sync::Lazy;

use crate::metaobject::MetaObject;
use crate::property::property;
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`CounterType`]
pub static COUNTER_TYPE_RTTI: Rtti = Rtti::new("FDSNXML::CounterType", &BASE_OBJECT);

static COUNTER_TYPE_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &COUNTER_TYPE_RTTI,
        None,
        [property(
            "value",
            false,
            |o: &CounterType| &o.value,
            |o: &mut CounterType, v: i64| o.value = v,
        )],
    )
});

/// Integer counter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterType {
    value: i64,
}

impl CounterType {
    /// Create a counter holding `value`
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// Counter value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Replace the counter value
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

crate::impl_class!(CounterType, COUNTER_TYPE_RTTI, COUNTER_TYPE_META);
