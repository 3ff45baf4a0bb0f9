//! Answer extractor trait and helpers shared by the extractors.

use super::types::Extraction;
use crate::config::{answer_id, ADDITIONAL_ANSWER_TAG, ANSWER_ATTR, CORRECT_HINT_TAG};
use crate::error::Result;
use crate::types::{Answer, ProblemType};
use crate::xml::{find_child, find_children, get_text, inner_markup, Element};

/// Trait for per-type answer extractors.
///
/// An extractor receives the response construct element (for example
/// `<stringresponse>`) and returns its answers and related feedback.
pub trait AnswerExtractor: Send + Sync {
    /// The problem type this extractor handles.
    fn problem_type(&self) -> ProblemType;

    /// Extract answers and feedback from a response construct.
    ///
    /// # Errors
    /// Returns an error if a boolean attribute is unrecognized or a
    /// required attribute is missing.
    fn extract(&self, construct: &Element) -> Result<Extraction>;
}

/// Read the correct-answer feedback of an element.
///
/// Empty string when the element has no `<correcthint>`.
#[must_use]
pub fn correct_hint_feedback(element: &Element) -> String {
    find_child(element, CORRECT_HINT_TAG)
        .map(inner_markup)
        .unwrap_or_default()
}

/// Value of an accepted answer: its `answer` attribute, else its text.
#[must_use]
pub fn answer_value(element: &Element) -> String {
    element
        .attribute(ANSWER_ATTR)
        .map(String::from)
        .unwrap_or_else(|| get_text(element))
}

/// Append the `<additional_answer>` children of a construct as correct answers.
pub fn push_additional_answers(construct: &Element, answers: &mut Vec<Answer>) {
    for additional in find_children(construct, ADDITIONAL_ANSWER_TAG) {
        let answer = Answer::new(answer_id(answers.len()), answer_value(additional), true)
            .with_selected_feedback(correct_hint_feedback(additional));
        answers.push(answer);
    }
}
