//! Re-serialization of decoded trees back into markup.

use super::tree::{Element, XmlNode};

/// Encode a sequence of nodes, preserving their order.
///
/// # Examples
/// ```
/// use olx_parser::xml::{decode, encode_nodes};
///
/// let root = decode(r#"<p>Pick <b class="x">one</b></p>"#).unwrap();
/// assert_eq!(encode_nodes(&root.children), r#"Pick <b class="x">one</b>"#);
/// ```
#[must_use]
pub fn encode_nodes(nodes: &[XmlNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Encode a single element including its own tag.
#[must_use]
pub fn encode_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

/// Encode the content of an element, trimmed at both ends.
///
/// This is how every markup-valued field of the model is produced.
#[must_use]
pub fn inner_markup(element: &Element) -> String {
    encode_nodes(&element.children).trim().to_string()
}

/// Encode the content of an element, leaving out children with the given tags.
#[must_use]
pub fn inner_markup_without(element: &Element, excluded: &[&str]) -> String {
    let kept: Vec<XmlNode> = element
        .children
        .iter()
        .filter(|child| match child {
            XmlNode::Element(el) => !excluded.contains(&el.name.as_str()),
            XmlNode::Text(_) => true,
        })
        .cloned()
        .collect();
    encode_nodes(&kept).trim().to_string()
}

fn write_node(out: &mut String, node: &XmlNode) {
    match node {
        XmlNode::Element(element) => write_element(out, element),
        XmlNode::Text(text) => out.push_str(&escape_text(text)),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(&attr.value));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

/// Escape text content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape an attribute value for double-quoted output.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
