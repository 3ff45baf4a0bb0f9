//! Extractor for `<stringresponse>` (text input) constructs.

use crate::config::{answer_id, ANSWER_ATTR, STRING_EQUAL_HINT_TAG, TEXTLINE_TAG};
use crate::error::Result;
use crate::registry::handler::{correct_hint_feedback, push_additional_answers, AnswerExtractor};
use crate::registry::types::Extraction;
use crate::types::{AdditionalAttributes, Answer, ProblemType, Textline};
use crate::xml::{find_child, find_children, inner_markup, Element};

/// Extractor for text input problems.
///
/// Answers are the construct's own `answer` (always correct), then each
/// `<additional_answer>` (correct), then each `<stringequalhint>`, which is
/// a near-miss answer with its own feedback (incorrect).
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl AnswerExtractor for TextExtractor {
    fn problem_type(&self) -> ProblemType {
        ProblemType::TextInput
    }

    fn extract(&self, construct: &Element) -> Result<Extraction> {
        let mut answers = vec![Answer::new(
            answer_id(0),
            construct.attribute(ANSWER_ATTR).unwrap_or_default(),
            true,
        )
        .with_selected_feedback(correct_hint_feedback(construct))];

        push_additional_answers(construct, &mut answers);

        for near_miss in find_children(construct, STRING_EQUAL_HINT_TAG) {
            let title = near_miss.attribute(ANSWER_ATTR).unwrap_or_default();
            let answer = Answer::new(answer_id(answers.len()), title, false)
                .with_selected_feedback(inner_markup(near_miss));
            answers.push(answer);
        }

        let additional_attributes = AdditionalAttributes {
            response_type: construct.attribute("type").map(String::from),
            textline: Some(Textline {
                size: find_child(construct, TEXTLINE_TAG)
                    .and_then(|textline| textline.attribute("size"))
                    .map(String::from),
            }),
        };

        Ok(Extraction {
            answers,
            additional_attributes,
            ..Extraction::default()
        })
    }
}
