//! Syntax-free element tree
//!
//! A [`Node`] is what an XML element looks like once the syntax is gone: a
//! tag, attributes in document order, optional text content and child
//! elements. The writer produces nodes, the reader consumes them; turning
//! them into actual markup is left to the caller. Nodes serialize to JSON for
//! inspection and storage.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Element of the archive tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Element tag
    pub tag: String,
    /// Attributes in document order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    /// Text content (if any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child elements in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: append a child element
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child element
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// First child element with `tag`
    pub fn find_child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All child elements with `tag`, in order
    pub fn find_children(&self, tag: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.tag == tag).collect()
    }

    /// Text of the first child element with `tag`
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.find_child(tag).and_then(|c| c.text.as_deref())
    }

    /// Number of elements in this subtree, including this one
    pub fn element_count(&self) -> usize {
        1 + self.children.iter().map(Node::element_count).sum::<usize>()
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
