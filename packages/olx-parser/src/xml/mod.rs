//! Generic markup decoding, grouped views and re-encoding.

mod encode;
mod tree;
mod utils;

pub use encode::{
    encode_element, encode_nodes, escape_attribute, escape_text, inner_markup,
    inner_markup_without,
};
pub use tree::{decode, decode_fragment, Attribute, Element, Grouped, XmlNode};
pub use utils::{element_children, find_child, find_children, get_text};
