//! Answer extractors for each response construct.

mod choice;
mod numeric;
mod text;

pub use choice::{ChoiceExtractor, TitleMode};
pub use numeric::NumericExtractor;
pub use text::TextExtractor;
