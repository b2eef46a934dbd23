//! Reflective writer

use crate::error::Result;
use crate::limits::Limits;
use crate::object::BaseObject;
use crate::property::MetaProperty;
use crate::value::PropertyKind;

use super::node::Node;
use super::TEXT_PROPERTY;

/// Writer configuration
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Tag of the root node; the local class name when unset
    root_tag: Option<String>,
    /// Traversal limits
    limits: Limits,
}

impl WriterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the root tag override
    pub fn root_tag(&self) -> Option<&str> {
        self.root_tag.as_deref()
    }

    /// Get the traversal limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Builder: override the root tag
    pub fn with_root_tag(mut self, tag: Option<String>) -> Self {
        self.root_tag = tag;
        self
    }

    /// Builder: set traversal limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Emits a [`Node`] tree from any schema object
#[derive(Debug, Clone, Default)]
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    /// Create a writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Write `obj` as a root node
    pub fn write(&self, obj: &dyn BaseObject) -> Result<Node> {
        let tag = self
            .config
            .root_tag()
            .unwrap_or_else(|| obj.type_info().local_name());
        let mut node = Node::new(tag);
        self.write_object(obj, &mut node, 0)?;
        Ok(node)
    }

    fn write_object(&self, obj: &dyn BaseObject, node: &mut Node, depth: usize) -> Result<()> {
        let limits = &self.config.limits;
        limits.check_depth(depth)?;

        for prop in obj.meta().all_properties() {
            match prop.kind() {
                PropertyKind::Scalar => self.write_scalar(obj, prop, node)?,
                PropertyKind::Object => {
                    if let Some(child) = prop.object(obj)? {
                        let mut child_node = Node::new(prop.name());
                        self.write_object(child, &mut child_node, depth + 1)?;
                        node.add_child(child_node);
                    }
                }
                PropertyKind::Collection => {
                    prop.visit(obj, &mut |child| {
                        let mut child_node = Node::new(prop.name());
                        self.write_object(child, &mut child_node, depth + 1)?;
                        node.add_child(child_node);
                        Ok(())
                    })?;
                }
            }
        }

        limits.check_attributes(node.attributes.len())?;
        limits.check_children(node.children.len())?;
        Ok(())
    }

    fn write_scalar(
        &self,
        obj: &dyn BaseObject,
        prop: &MetaProperty,
        node: &mut Node,
    ) -> Result<()> {
        if !prop.is_set(obj)? {
            return Ok(());
        }
        let text = prop.read(obj)?.to_text()?;
        if prop.is_attribute() {
            node.set_attribute(prop.name(), text);
        } else if prop.name() == TEXT_PROPERTY {
            node.set_text(text);
        } else {
            node.add_child(Node::new(prop.name()).with_text(text));
        }
        Ok(())
    }
}
