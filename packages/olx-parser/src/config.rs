//! OLX vocabulary and small validation helpers shared by the parser.

use crate::error::{truncate_fragment, OlxError, Result};

/// Root element of every problem document.
pub const PROBLEM_TAG: &str = "problem";

/// Top-level container of on-demand hints.
pub const DEMAND_HINT_TAG: &str = "demandhint";

/// A single on-demand hint inside [`DEMAND_HINT_TAG`].
pub const HINT_TAG: &str = "hint";

/// Worked solution inside a response construct.
pub const SOLUTION_TAG: &str = "solution";

/// Feedback for correct text and numeric answers.
pub const CORRECT_HINT_TAG: &str = "correcthint";

/// Extra accepted answer for text and numeric responses.
pub const ADDITIONAL_ANSWER_TAG: &str = "additional_answer";

/// Visually similar but incorrect text answer with its own feedback.
pub const STRING_EQUAL_HINT_TAG: &str = "stringequalhint";

/// Feedback attached to a combination of selected choices.
pub const COMPOUND_HINT_TAG: &str = "compoundhint";

/// Numeric response parameter (tolerance).
pub const RESPONSE_PARAM_TAG: &str = "responseparam";

/// Text input field of a string response.
pub const TEXTLINE_TAG: &str = "textline";

/// Answer value attribute of text and numeric constructs.
pub const ANSWER_ATTR: &str = "answer";

/// Correctness attribute of a choice.
pub const CORRECT_ATTR: &str = "correct";

/// Selection attribute of a per-choice hint.
pub const SELECTED_ATTR: &str = "selected";

/// Answer-letter list attribute of a compound hint.
pub const VALUE_ATTR: &str = "value";

/// Tags never copied into the question region.
pub const NON_QUESTION_TAGS: &[&str] = &[
    "additional_answer",
    "checkboxgroup",
    "choicegroup",
    "choiceresponse",
    "correcthint",
    "demandhint",
    "formulaequationinput",
    "multiplechoiceresponse",
    "numericalresponse",
    "optioninput",
    "optionresponse",
    "responseparam",
    "solution",
    "stringequalhint",
    "stringresponse",
    "textline",
];

/// Tag rewritten to [`EMPHASIS_TAG`] in the question region.
pub const DESCRIPTION_TAG: &str = "description";

/// Replacement for [`DESCRIPTION_TAG`].
pub const EMPHASIS_TAG: &str = "em";

/// Check whether a tag belongs to the question region.
#[must_use]
pub fn is_question_tag(tag: &str) -> bool {
    !NON_QUESTION_TAGS.contains(&tag)
}

/// Letter code for the answer at `index`.
///
/// `0 -> A`, `25 -> Z`, `26 -> AA`, continuing like spreadsheet columns.
///
/// # Examples
/// ```
/// use olx_parser::config::answer_id;
///
/// assert_eq!(answer_id(0), "A");
/// assert_eq!(answer_id(2), "C");
/// assert_eq!(answer_id(26), "AA");
/// ```
#[must_use]
pub fn answer_id(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Interpret a boolean attribute literal, case-insensitively.
///
/// # Arguments
/// * `attribute` - Attribute name, for error reporting
/// * `value` - Raw attribute text
/// * `fragment` - Markup of the element carrying the attribute
///
/// # Errors
/// Returns `InvalidBoolean` for anything other than `true`/`false`.
///
/// # Examples
/// ```
/// use olx_parser::config::parse_bool;
///
/// assert_eq!(parse_bool("correct", "True", "").unwrap(), true);
/// assert_eq!(parse_bool("correct", "false", "").unwrap(), false);
/// assert!(parse_bool("correct", "yes", "").is_err());
/// ```
pub fn parse_bool(attribute: &str, value: &str, fragment: &str) -> Result<bool> {
    let literal = value.trim();
    if literal.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(OlxError::InvalidBoolean {
            attribute: attribute.to_string(),
            value: value.to_string(),
            fragment: truncate_fragment(fragment),
        })
    }
}
