//! A pre-parsed style or locale tree.
//!
//! The renderer never reads XML itself. Whatever loads a style hands over
//! a tree of [`Node`]s exposing element names, attributes, child elements
//! and text content. Nodes can also be deserialized with serde, which is
//! how tests and non-XML front ends build them.

use serde::{Deserialize, Serialize};

/// A single attribute on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element of a pre-parsed tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Element name without namespace prefix (`term`, `date`, `if`, ...).
    pub name: String,

    #[serde(default)]
    pub attributes: Vec<Attribute>,

    #[serde(default)]
    pub children: Vec<Node>,

    /// Text content, for leaf elements such as `<term>` or `<single>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Node {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Get an attribute value by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Get an attribute that must be present.
    pub fn require_attribute(&self, name: &str) -> crate::Result<&str> {
        self.get_attribute(name)
            .ok_or_else(|| crate::Error::missing(&self.name, name))
    }

    /// Get child elements by name.
    pub fn get_children(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Get the first child element with the given name.
    pub fn get_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn all_children(&self) -> &[Node] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_attribute() {
        let node = Node::new("term")
            .with_attribute("name", "page")
            .with_attribute("form", "short");
        assert_eq!(node.get_attribute("name"), Some("page"));
        assert_eq!(node.get_attribute("form"), Some("short"));
        assert_eq!(node.get_attribute("missing"), None);
    }

    #[test]
    fn test_require_attribute_reports_element() {
        let node = Node::new("term");
        let err = node.require_attribute("name").unwrap_err();
        assert_eq!(
            err,
            crate::Error::MissingAttribute {
                element: "term".to_string(),
                attribute: "name".to_string(),
            }
        );
    }

    #[test]
    fn test_get_children_filters_by_name() {
        let node = Node::new("term")
            .with_child(Node::new("single").with_text("page"))
            .with_child(Node::new("multiple").with_text("pages"))
            .with_child(Node::new("single").with_text("p."));
        assert_eq!(node.get_children("single").len(), 2);
        assert_eq!(node.get_child("multiple").and_then(Node::text), Some("pages"));
        assert_eq!(node.all_children().len(), 3);
    }

    #[test]
    fn test_deserialize_from_json() {
        let node: Node = serde_json::from_str(
            r#"{
                "name": "if",
                "attributes": [{"name": "variable", "value": "DOI URL"}]
            }"#,
        )
        .unwrap();
        assert_eq!(node.name, "if");
        assert_eq!(node.get_attribute("variable"), Some("DOI URL"));
        assert!(node.children.is_empty());
        assert_eq!(node.text(), None);
    }
}
