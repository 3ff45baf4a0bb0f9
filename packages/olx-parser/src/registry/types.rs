//! Types for the extractor registry.

use crate::types::{AdditionalAttributes, Answer, GroupFeedback};

/// What an extractor pulls out of a response construct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Answers in document order, ids already assigned.
    pub answers: Vec<Answer>,

    /// Feedback for combinations of answers.
    pub group_feedback: Vec<GroupFeedback>,

    pub additional_attributes: AdditionalAttributes,
}

impl Extraction {
    /// Create an extraction holding only answers.
    #[must_use]
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }
}
