//! Owned XML trees decoded from OLX text.
//!
//! A document is decoded once into an order-preserving [`Element`] tree.
//! The grouped view used for "does this problem have child X" lookups is
//! derived from it by [`Element::grouped`] instead of decoding twice.

use std::collections::BTreeMap;

use roxmltree::{Document, Namespace, Node};

use crate::error::{OlxError, Result};

/// Prefix bound to the XML namespace, never declared.
const XML_PREFIX: &str = "xml";

/// A name/value attribute pair, kept in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A node of the ordered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

impl XmlNode {
    /// Get the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

/// An element of the ordered tree.
///
/// An empty `children` list means the element has no content at all; an
/// empty text child is kept as `XmlNode::Text(String::new())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<XmlNode>,
}

impl Element {
    #[cfg(test)]
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    #[cfg(test)]
    pub(crate) fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(XmlNode::Text(text.into()))
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Concatenate the direct text children, ignoring child elements.
    #[must_use]
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Derive the grouped view of this element.
    #[must_use]
    pub fn grouped(&self) -> Grouped<'_> {
        let mut groups: BTreeMap<&str, Vec<&Element>> = BTreeMap::new();
        for child in self.children.iter().filter_map(XmlNode::as_element) {
            groups.entry(child.name.as_str()).or_default().push(child);
        }
        Grouped {
            attributes: &self.attributes,
            groups,
            text: self.own_text(),
        }
    }
}

/// Grouped view of an element: same-tag children collected per tag.
///
/// Order across distinct tags is not kept; order within a tag is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped<'a> {
    pub attributes: &'a [Attribute],
    pub groups: BTreeMap<&'a str, Vec<&'a Element>>,
    pub text: String,
}

impl<'a> Grouped<'a> {
    /// Get every child with the given tag: zero, one, or many.
    #[must_use]
    pub fn get(&self, tag: &str) -> &[&'a Element] {
        self.groups.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over the distinct child tags.
    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    /// Check for no attributes, no children and blank text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.attributes.is_empty() && self.groups.is_empty() && self.text.trim().is_empty()
    }
}

/// Decode markup text into its root element.
///
/// Whitespace-only text, comments and processing instructions are dropped.
///
/// # Errors
/// Returns `MalformedMarkup` if the input is not well-formed.
///
/// # Examples
/// ```
/// use olx_parser::xml::decode;
///
/// let root = decode(r#"<problem><p>Hi</p></problem>"#).unwrap();
/// assert_eq!(root.name, "problem");
/// assert_eq!(root.children.len(), 1);
/// ```
pub fn decode(input: &str) -> Result<Element> {
    let doc = Document::parse(input).map_err(|err| OlxError::malformed(&err, input))?;
    Ok(convert_element(doc.root_element()))
}

/// Decode a fragment that may hold several top-level nodes.
///
/// # Errors
/// Returns `MalformedMarkup` if the fragment is not well-formed.
pub fn decode_fragment(input: &str) -> Result<Vec<XmlNode>> {
    let wrapped = format!("<fragment>{input}</fragment>");
    let doc = Document::parse(&wrapped).map_err(|err| OlxError::malformed(&err, &wrapped))?;
    Ok(convert_children(doc.root_element()))
}

fn convert_element(node: Node<'_, '_>) -> Element {
    let mut attributes: Vec<Attribute> = declared_namespaces(node)
        .map(|ns| Attribute {
            name: ns.name().map_or_else(|| "xmlns".to_string(), |p| format!("xmlns:{p}")),
            value: ns.uri().to_string(),
        })
        .collect();
    attributes.extend(node.attributes().map(|attr| Attribute {
        name: qualified_name(node, attr.namespace(), attr.name()),
        value: attr.value().to_string(),
    }));

    Element {
        name: qualified_name(node, node.tag_name().namespace(), node.tag_name().name()),
        attributes,
        children: convert_children(node),
    }
}

/// Prefixed name as written in the source, `local` when unprefixed.
fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

/// Namespaces declared on this element rather than inherited from its parent.
fn declared_namespaces<'a, 'input: 'a>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = &'a Namespace<'input>> {
    let parent = node.parent_element();
    node.namespaces().filter(move |ns| {
        ns.name() != Some(XML_PREFIX)
            && !parent.is_some_and(|parent| {
                parent
                    .namespaces()
                    .any(|inherited| inherited.name() == ns.name() && inherited.uri() == ns.uri())
            })
    })
}

fn convert_children(node: Node<'_, '_>) -> Vec<XmlNode> {
    node.children()
        .filter_map(|child| {
            if child.is_element() {
                Some(XmlNode::Element(convert_element(child)))
            } else if child.is_text() {
                // Whitespace-only runs are formatting; dropping them also joins
                // inline siblings like `<b>a</b> <i>b</i>`.
                child
                    .text()
                    .filter(|text| !text.trim().is_empty())
                    .map(|text| XmlNode::Text(text.to_string()))
            } else {
                None
            }
        })
        .collect()
}
