//! Property and class name utilities
//!
//! Meta-property names double as XML tag and attribute names, so they must
//! be valid NCNames. Class names are namespaced with `::`
//! (e.g. `FDSNXML::Operator`).

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Simplified NCName pattern (Latin-1 letters plus the ASCII name characters)
static NCNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}][A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\-\.0-9]*$")
        .unwrap()
});

/// Separator between a class namespace and its local name
pub const CLASS_SEPARATOR: &str = "::";

/// Check if a string is a valid NCName (non-colonized name)
pub fn is_valid_ncname(name: &str) -> bool {
    !name.is_empty() && NCNAME.is_match(name)
}

/// Validate a meta-property name and return an error if invalid
pub fn validate_property_name(name: &str) -> Result<()> {
    if is_valid_ncname(name) {
        Ok(())
    } else {
        Err(Error::Name(format!("Invalid property name: '{}'", name)))
    }
}

/// Validate a class name of the form `[Namespace::]Local`
pub fn validate_class_name(name: &str) -> Result<()> {
    let valid = name.split(CLASS_SEPARATOR).all(is_valid_ncname);
    if valid {
        Ok(())
    } else {
        Err(Error::Name(format!("Invalid class name: '{}'", name)))
    }
}

/// Split a class name into namespace and local name
pub fn split_class_name(name: &str) -> (Option<&str>, &str) {
    if let Some((namespace, local)) = name.rsplit_once(CLASS_SEPARATOR) {
        (Some(namespace), local)
    } else {
        (None, name)
    }
}

/// Get the local part of a class name
pub fn local_class_name(name: &str) -> &str {
    split_class_name(name).1
}

/// Build the qualified name of a property (`Class.property`)
pub fn qualified_property_name(class_name: &str, property: &str) -> String {
    format!("{}.{}", local_class_name(class_name), property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ncname() {
        assert!(is_valid_ncname("WebSite"));
        assert!(is_valid_ncname("plusError"));
        assert!(is_valid_ncname("_private"));
        assert!(is_valid_ncname("my-element.v2"));

        assert!(!is_valid_ncname(""));
        assert!(!is_valid_ncname("123number"));
        assert!(!is_valid_ncname("prefix:element"));
        assert!(!is_valid_ncname("two words"));
    }

    #[test]
    fn test_validate_class_name() {
        assert!(validate_class_name("FDSNXML::Operator").is_ok());
        assert!(validate_class_name("Operator").is_ok());
        assert!(validate_class_name("FDSNXML::").is_err());
        assert!(validate_class_name("FDSNXML:Operator").is_err());
    }

    #[test]
    fn test_split_class_name() {
        assert_eq!(split_class_name("Operator"), (None, "Operator"));
        assert_eq!(
            split_class_name("FDSNXML::Operator"),
            (Some("FDSNXML"), "Operator")
        );
        assert_eq!(local_class_name("A::B::C"), "C");
    }

    #[test]
    fn test_qualified_property_name() {
        assert_eq!(
            qualified_property_name("FDSNXML::FloatNoUnitWithNumberType", "number"),
            "FloatNoUnitWithNumberType.number"
        );
    }
}
