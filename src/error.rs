//! Error types for fdsnxml
//!
//! This module defines all error types used throughout the library.
//! Ownership violations on child collections are not errors: they are
//! reported as `false`/`None` by the collection mutators.

use std::fmt;
use thiserror::Error;

/// Result type alias using fdsnxml Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fdsnxml operations
#[derive(Error, Debug)]
pub enum Error {
    /// An optional value was requested but is not set
    #[error("{0} is not set")]
    ValueNotSet(String),

    /// Property lookup exhausted the meta-object chain
    #[error("property '{property}' not found in {class}")]
    PropertyNotFound {
        /// Class whose meta-object was searched
        class: String,
        /// Requested property name
        property: String,
    },

    /// A property name is declared twice along an inheritance chain
    #[error("duplicate property '{property}' in {class}")]
    DuplicateProperty {
        /// Class declaring the duplicate
        class: String,
        /// Duplicated property name
        property: String,
    },

    /// Type mismatch between an accessor and the object or value it was given
    #[error("type error: {0}")]
    Type(String),

    /// Value error (invalid lexical form for a type)
    #[error("value error: {0}")]
    Value(String),

    /// Name error (invalid property or class name)
    #[error("name error: {0}")]
    Name(String),

    /// Class is not known to the registry
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Decoding error (element tree to object)
    #[error("decoding error: {0}")]
    Decode(#[from] DecodeError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unset-value error for a qualified property name
    pub fn value_not_set(qualified_name: impl Into<String>) -> Self {
        Error::ValueNotSet(qualified_name.into())
    }

    /// Check whether this error signals an unset optional value
    pub fn is_value_not_set(&self) -> bool {
        matches!(self, Error::ValueNotSet(_))
    }
}

/// Decoding error with document context
#[derive(Debug)]
pub struct DecodeError {
    /// Error message
    pub message: String,
    /// Path of the element that failed to decode
    pub path: Option<String>,
    /// Class being populated when the error occurred
    pub class: Option<String>,
    /// Underlying error
    pub cause: Option<Box<Error>>,
}

impl DecodeError {
    /// Create a new decode error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            class: None,
            cause: None,
        }
    }

    /// Wrap an underlying error
    pub fn from_error(err: Error) -> Self {
        match err {
            Error::Decode(inner) => inner,
            other => Self {
                message: other.to_string(),
                path: None,
                class: None,
                cause: Some(Box::new(other)),
            },
        }
    }

    /// Set the element path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the class name
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Get the underlying error, if any
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref path) = self.path {
            write!(f, "\n\nPath: {}", path)?;
        }

        if let Some(ref class) = self.class {
            write!(f, "\n\nClass: {}", class)?;
        }

        Ok(())
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
