//! Extractor for `<numericalresponse>` constructs.

use crate::config::{answer_id, ANSWER_ATTR, RESPONSE_PARAM_TAG};
use crate::error::Result;
use crate::registry::handler::{correct_hint_feedback, push_additional_answers, AnswerExtractor};
use crate::registry::types::Extraction;
use crate::types::{Answer, ProblemType};
use crate::xml::{find_child, Element};

/// Extractor for numeric problems.
///
/// Same primary/additional answer chain as text input, without near-miss
/// hints. A `<responseparam type="tolerance" default="5%"/>` is folded into
/// the primary answer as `tolerance: "5%"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericExtractor;

impl AnswerExtractor for NumericExtractor {
    fn problem_type(&self) -> ProblemType {
        ProblemType::Numeric
    }

    fn extract(&self, construct: &Element) -> Result<Extraction> {
        let mut primary = Answer::new(
            answer_id(0),
            construct.attribute(ANSWER_ATTR).unwrap_or_default(),
            true,
        )
        .with_selected_feedback(correct_hint_feedback(construct));

        if let Some(param) = find_child(construct, RESPONSE_PARAM_TAG) {
            match (param.attribute("type"), param.attribute("default")) {
                (Some(key), _) if Answer::FIELD_NAMES.contains(&key) => {
                    tracing::warn!(
                        key,
                        "Ignoring <responseparam> that would replace an answer field"
                    );
                }
                (Some(key), Some(value)) => {
                    primary.extra.insert(key.to_string(), value.to_string());
                }
                _ => tracing::warn!("Ignoring <responseparam> without type and default"),
            }
        }

        let mut answers = vec![primary];
        push_additional_answers(construct, &mut answers);

        Ok(Extraction::new(answers))
    }
}
