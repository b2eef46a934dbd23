//! Limits for reflective traversal
//!
//! This module defines limits applied while the archive reader and writer
//! walk an object tree, to keep malformed or hostile input from exhausting
//! the stack or memory.

use crate::error::{Error, Result};

/// Traversal limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum nesting depth of objects
    pub max_depth: usize,

    /// Maximum number of child elements per element
    pub max_children: usize,

    /// Maximum number of attributes per element
    pub max_attributes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_children: 1_000_000,
            max_attributes: 1000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_depth: 32,
            max_children: 10_000,
            max_attributes: 64,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_depth: 4096,
            max_children: 100_000_000,
            max_attributes: 100_000,
        }
    }

    /// Check if nesting depth is within limits
    pub fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(Error::LimitExceeded(format!(
                "Nesting depth {} exceeds maximum {}",
                depth, self.max_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of children is within limits
    pub fn check_children(&self, count: usize) -> Result<()> {
        if count > self.max_children {
            Err(Error::LimitExceeded(format!(
                "Child count {} exceeds maximum {}",
                count, self.max_children
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of attributes is within limits
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            Err(Error::LimitExceeded(format!(
                "Attribute count {} exceeds maximum {}",
                count, self.max_attributes
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, 256);
        assert!(limits.check_depth(100).is_ok());
        assert!(limits.check_depth(300).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert!(limits.max_depth < Limits::default().max_depth);
        assert!(limits.check_depth(33).is_err());
    }

    #[test]
    fn test_permissive_limits() {
        let limits = Limits::permissive();
        assert!(limits.max_depth > Limits::default().max_depth);
        assert!(limits.check_depth(1000).is_ok());
    }

    #[test]
    fn test_check_children_and_attributes() {
        let limits = Limits::strict();
        assert!(limits.check_children(10).is_ok());
        assert!(limits.check_children(20_000).is_err());
        assert!(limits.check_attributes(64).is_ok());
        assert!(matches!(
            limits.check_attributes(65),
            Err(Error::LimitExceeded(_))
        ));
    }
}
