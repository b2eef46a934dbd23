//! Optional field values
//!
//! Schema fields that may be absent from a document are stored as
//! [`Optional<T>`]. Reading an absent value is an error carrying the
//! qualified property name; it never falls back to a default.

use crate::error::{Error, Result};

/// A value that is either set or absent
#[derive(Debug, Clone, PartialEq)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Create an empty optional
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Create an optional holding `value`
    pub fn with_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Check if a value is present
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Store a value, replacing any previous one
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Clear the value
    pub fn reset(&mut self) {
        self.value = None;
    }

    /// Remove and return the value
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Get the value or fail with an unset-value error for `qualified_name`
    pub fn get(&self, qualified_name: &str) -> Result<&T> {
        self.value
            .as_ref()
            .ok_or_else(|| Error::value_not_set(qualified_name))
    }

    /// Get the value mutably or fail with an unset-value error
    pub fn get_mut(&mut self, qualified_name: &str) -> Result<&mut T> {
        self.value
            .as_mut()
            .ok_or_else(|| Error::value_not_set(qualified_name))
    }

    /// Borrow as a standard option
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Convert into a standard option
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.value
    }
}
