//! Lookup helpers for navigating decoded trees.

use super::tree::{Element, XmlNode};

/// Get all element children of a node, skipping text.
///
/// # Examples
/// ```
/// use olx_parser::xml::{decode, element_children};
///
/// let root = decode("<root>text<a/>more<b/></root>").unwrap();
/// assert_eq!(element_children(&root).count(), 2);
/// ```
pub fn element_children(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XmlNode::as_element)
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use olx_parser::xml::{decode, find_child};
///
/// let root = decode("<root><child1/><child2/></root>").unwrap();
/// assert!(find_child(&root, "child1").is_some());
/// assert!(find_child(&root, "missing").is_none());
/// ```
#[must_use]
pub fn find_child<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
    element_children(element).find(|child| child.name == tag)
}

/// Find all child elements with the given tag name.
pub fn find_children<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> {
    element_children(element).filter(move |child| child.name == tag)
}

/// Get the direct text of an element, trimmed.
#[must_use]
pub fn get_text(element: &Element) -> String {
    element.own_text().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    #[test]
    fn test_find_child() {
        let root = decode("<root><a/><b/><c/></root>").unwrap();
        assert!(find_child(&root, "a").is_some());
        assert!(find_child(&root, "c").is_some());
        assert!(find_child(&root, "d").is_none());
    }

    #[test]
    fn test_find_children() {
        let root = decode("<root><item>1</item><other/><item>2</item></root>").unwrap();
        let items: Vec<_> = find_children(&root, "item").collect();
        assert_eq!(items.len(), 2);
        assert_eq!(get_text(items[1]), "2");
    }

    #[test]
    fn test_get_text_ignores_child_elements() {
        let root = decode("<option>  Blue <optionhint>No</optionhint></option>").unwrap();
        assert_eq!(get_text(&root), "Blue");
    }
}
