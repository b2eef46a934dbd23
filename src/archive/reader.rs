//! Reflective reader

use log::{debug, trace, warn};

use crate::error::{DecodeError, Error, Result};
use crate::limits::Limits;
use crate::metaobject::MetaObject;
use crate::object::{BaseObject, Class};
use crate::property::MetaProperty;
use crate::registry::ClassRegistry;
use crate::value::{PropertyKind, Value};

use super::node::Node;
use super::TEXT_PROPERTY;

/// Handling of attributes and elements no property is declared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownProperty {
    /// Ignore them
    #[default]
    Skip,
    /// Fail decoding
    Error,
}

/// Reader configuration
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Traversal limits
    limits: Limits,
    /// Policy for undeclared attributes and elements
    unknown_properties: UnknownProperty,
}

impl ReaderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the traversal limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Get the policy for undeclared properties
    pub fn unknown_properties(&self) -> UnknownProperty {
        self.unknown_properties
    }

    /// Builder: set traversal limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Builder: set the policy for undeclared properties
    pub fn with_unknown_properties(mut self, policy: UnknownProperty) -> Self {
        self.unknown_properties = policy;
        self
    }
}

/// Builds schema objects from a [`Node`] tree
#[derive(Debug, Clone)]
pub struct Reader<'r> {
    registry: &'r ClassRegistry,
    config: ReaderConfig,
}

impl Reader<'static> {
    /// Create a reader over the bundled classes
    pub fn new() -> Self {
        Self::with_registry(ClassRegistry::global())
    }
}

impl Default for Reader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Reader<'r> {
    /// Create a reader resolving root tags through `registry`
    pub fn with_registry(registry: &'r ClassRegistry) -> Self {
        Self {
            registry,
            config: ReaderConfig::default(),
        }
    }

    /// Builder: set the configuration
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a root node, instantiating the class named by its tag
    pub fn read(&self, node: &Node) -> Result<Box<dyn BaseObject>> {
        let path = format!("/{}", node.tag);
        let mut obj = self
            .registry
            .create(&node.tag)
            .map_err(|e| DecodeError::from_error(e).with_path(&path))?;
        self.populate(&mut *obj, node, &path, 0)?;
        Ok(obj)
    }

    /// Read a root node into a new instance of `T`, whatever its tag
    pub fn read_as<T: Class>(&self, node: &Node) -> Result<T> {
        let mut obj = T::default();
        self.read_into(node, &mut obj)?;
        Ok(obj)
    }

    /// Populate an existing object from a node
    pub fn read_into(&self, node: &Node, obj: &mut dyn BaseObject) -> Result<()> {
        self.populate(obj, node, &format!("/{}", node.tag), 0)
    }

    fn populate(
        &self,
        obj: &mut dyn BaseObject,
        node: &Node,
        path: &str,
        depth: usize,
    ) -> Result<()> {
        let meta = obj.meta();
        let fail = |e: Error| {
            Error::from(
                DecodeError::from_error(e)
                    .with_path(path)
                    .with_class(meta.rtti().class_name()),
            )
        };

        let limits = &self.config.limits;
        limits.check_depth(depth).map_err(fail)?;
        limits.check_attributes(node.attributes.len()).map_err(fail)?;
        limits.check_children(node.children.len()).map_err(fail)?;

        for (name, text) in &node.attributes {
            match meta.property(name) {
                Some(prop) if prop.is_attribute() => {
                    prop.write_text(obj, text).map_err(|e| {
                        Error::from(
                            DecodeError::from_error(e)
                                .with_path(format!("{}/@{}", path, name))
                                .with_class(meta.rtti().class_name()),
                        )
                    })?;
                }
                _ => self.unknown(meta, &format!("@{}", name), path)?,
            }
        }

        if let Some(text) = &node.text {
            match meta.property(TEXT_PROPERTY) {
                Some(prop) if prop.kind() == PropertyKind::Scalar && !prop.is_attribute() => {
                    prop.write_text(obj, text).map_err(fail)?;
                }
                _ if text.trim().is_empty() => {}
                _ => self.unknown(meta, "text()", path)?,
            }
        }

        for (index, child) in node.children.iter().enumerate() {
            let child_path = format!("{}/{}[{}]", path, child.tag, index);
            match meta.property(&child.tag) {
                Some(prop) if !prop.is_attribute() => {
                    self.read_child(obj, prop, child, &child_path, depth)?;
                }
                _ => self.unknown(meta, &child.tag, path)?,
            }
        }

        Ok(())
    }

    fn read_child(
        &self,
        obj: &mut dyn BaseObject,
        prop: &MetaProperty,
        child: &Node,
        path: &str,
        depth: usize,
    ) -> Result<()> {
        let fail = |e: Error| {
            Error::from(
                DecodeError::from_error(e)
                    .with_path(path)
                    .with_class(prop.class_name()),
            )
        };

        match prop.kind() {
            PropertyKind::Scalar => {
                let text = child.text.as_deref().unwrap_or_default();
                prop.write_text(obj, text).map_err(fail)
            }
            PropertyKind::Object => {
                let mut value = self.create(prop).map_err(fail)?;
                self.populate(&mut *value, child, path, depth + 1)?;
                prop.write(obj, Value::Object(value)).map_err(fail)
            }
            PropertyKind::Collection => {
                let mut value = self.create(prop).map_err(fail)?;
                self.populate(&mut *value, child, path, depth + 1)?;
                if !prop.add_child(obj, value).map_err(fail)? {
                    warn!("{}: {} refused child", path, prop.qualified_name());
                }
                Ok(())
            }
        }
    }

    fn create(&self, prop: &MetaProperty) -> Result<Box<dyn BaseObject>> {
        prop.create()
            .ok_or_else(|| Error::UnknownClass(prop.type_name().to_string()))
    }

    fn unknown(&self, meta: &MetaObject, name: &str, path: &str) -> Result<()> {
        match self.config.unknown_properties {
            UnknownProperty::Skip => {
                debug!("{}: skipping unknown property '{}' of {}", path, name, meta.rtti());
                trace!(
                    "known properties of {}: {:?}",
                    meta.rtti(),
                    meta.all_properties()
                        .iter()
                        .map(|p| p.name())
                        .collect::<Vec<_>>()
                );
                Ok(())
            }
            UnknownProperty::Error => Err(DecodeError::from_error(Error::PropertyNotFound {
                class: meta.rtti().class_name().to_string(),
                property: name.to_string(),
            })
            .with_path(path)
            .with_class(meta.rtti().class_name())
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fdsnxml::{FloatNoUnitWithNumberType, FloatType, Operator, StringType};

    #[test]
    fn test_read_root_by_tag() {
        let node = Node::new("Operator")
            .with_child(Node::new("Agency").with_text("GFZ"))
            .with_child(Node::new("WebSite").with_text("https://geofon.gfz.de"));
        let obj = Reader::new().read(&node).unwrap();
        let op = crate::object::cast::<Operator>(&*obj).unwrap();
        assert_eq!(op.agency().value(), "GFZ");
        assert_eq!(op.web_site().unwrap().value(), "https://geofon.gfz.de");
    }

    #[test]
    fn test_unknown_root_tag() {
        let err = Reader::new().read(&Node::new("Network")).unwrap_err();
        match err {
            Error::Decode(decode) => {
                assert_eq!(decode.path.as_deref(), Some("/Network"));
                assert!(matches!(decode.cause(), Some(Error::UnknownClass(_))));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_attributes_and_nested_object() {
        let node = Node::new("FloatNoUnitWithNumberType")
            .with_attribute("plusError", "0.25")
            .with_text("1.5")
            .with_child(Node::new("number").with_text("4"));
        let value: FloatNoUnitWithNumberType = Reader::new().read_as(&node).unwrap();
        assert_eq!(value.value(), 1.5);
        assert_eq!(value.plus_error().unwrap(), 0.25);
        assert!(value.minus_error().is_err());
        assert_eq!(value.number().unwrap().value(), 4);
    }

    #[test]
    fn test_unknown_properties_skipped_by_default() {
        let node = Node::new("StringType")
            .with_text("x")
            .with_attribute("lang", "en")
            .with_child(Node::new("Extra"));
        let value: StringType = Reader::new().read_as(&node).unwrap();
        assert_eq!(value.value(), "x");
    }

    #[test]
    fn test_unknown_properties_rejected_when_configured() {
        let config = ReaderConfig::new().with_unknown_properties(UnknownProperty::Error);
        let reader = Reader::new().with_config(config);
        let node = Node::new("FloatType").with_text("1").with_child(Node::new("Extra"));
        let err = reader.read_as::<FloatType>(&node).unwrap_err();
        match err {
            Error::Decode(decode) => {
                assert!(matches!(decode.cause(), Some(Error::PropertyNotFound { .. })));
                assert_eq!(decode.class.as_deref(), Some("FDSNXML::FloatType"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_lexical_form_reports_path() {
        let node = Node::new("Operator").with_child(
            Node::new("Contact").with_child(
                Node::new("Phone")
                    .with_child(Node::new("AreaCode").with_text("abc")),
            ),
        );
        let err = Reader::new().read(&node).unwrap_err();
        match err {
            Error::Decode(decode) => {
                assert_eq!(
                    decode.path.as_deref(),
                    Some("/Operator/Contact[0]/Phone[0]/AreaCode[0]")
                );
                assert!(decode.message.contains("PhoneNumber.AreaCode"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_attribute_tag_does_not_match_element() {
        let config = ReaderConfig::new().with_unknown_properties(UnknownProperty::Error);
        let node = Node::new("FloatType").with_child(Node::new("unit").with_text("M"));
        assert!(Reader::new()
            .with_config(config)
            .read_as::<FloatType>(&node)
            .is_err());
    }

    #[test]
    fn test_depth_limit() {
        let config = ReaderConfig::new().with_limits(Limits {
            max_depth: 1,
            ..Limits::default()
        });
        let node = Node::new("Operator")
            .with_child(Node::new("Contact").with_child(Node::new("Name").with_text("A")));
        let err = Reader::new().with_config(config).read(&node).unwrap_err();
        match err {
            Error::Decode(decode) => {
                assert!(matches!(decode.cause(), Some(Error::LimitExceeded(_))));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
