//! Extractors for choice-based constructs.
//!
//! Single-select, multi-select and dropdown share one shape: a widget
//! element (`choicegroup`, `checkboxgroup`, `optioninput`) holding the
//! choices, each with a `correct` flag and optional per-choice hints, plus
//! compound hints on the widget for combinations of choices.

use crate::config::{
    answer_id, parse_bool, COMPOUND_HINT_TAG, CORRECT_ATTR, SELECTED_ATTR, VALUE_ATTR,
};
use crate::error::{truncate_fragment, OlxError, Result};
use crate::registry::handler::AnswerExtractor;
use crate::registry::types::Extraction;
use crate::types::{Answer, GroupFeedback, ProblemType};
use crate::xml::{
    encode_element, find_child, find_children, get_text, inner_markup, inner_markup_without,
    Element,
};

/// How the display title of a choice is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMode {
    /// Choice content re-serialized as markup, hints removed.
    Markup,
    /// Direct text of the choice only.
    PlainText,
}

/// Extractor for one choice-based construct.
#[derive(Debug, Clone)]
pub struct ChoiceExtractor {
    problem_type: ProblemType,
    widget_tag: &'static str,
    choice_tag: &'static str,
    hint_tag: &'static str,
    title_mode: TitleMode,
}

impl ChoiceExtractor {
    /// `<multiplechoiceresponse>` / `<choicegroup>` / `<choice>`.
    #[must_use]
    pub fn single_select() -> Self {
        Self {
            problem_type: ProblemType::SingleSelect,
            widget_tag: "choicegroup",
            choice_tag: "choice",
            hint_tag: "choicehint",
            title_mode: TitleMode::Markup,
        }
    }

    /// `<choiceresponse>` / `<checkboxgroup>` / `<choice>`.
    #[must_use]
    pub fn multi_select() -> Self {
        Self {
            problem_type: ProblemType::MultiSelect,
            widget_tag: "checkboxgroup",
            choice_tag: "choice",
            hint_tag: "choicehint",
            title_mode: TitleMode::Markup,
        }
    }

    /// `<optionresponse>` / `<optioninput>` / `<option>`.
    ///
    /// Option titles are plain text.
    #[must_use]
    pub fn dropdown() -> Self {
        Self {
            problem_type: ProblemType::Dropdown,
            widget_tag: "optioninput",
            choice_tag: "option",
            hint_tag: "optionhint",
            title_mode: TitleMode::PlainText,
        }
    }

    fn parse_choice(&self, index: usize, choice: &Element) -> Result<Answer> {
        let fragment = encode_element(choice);
        let correct = match choice.attribute(CORRECT_ATTR) {
            Some(value) => parse_bool(CORRECT_ATTR, value, &fragment)?,
            None => {
                return Err(OlxError::MissingAttribute {
                    element: choice.name.clone(),
                    attribute: CORRECT_ATTR.to_string(),
                    fragment: truncate_fragment(&fragment),
                })
            }
        };

        let title = match self.title_mode {
            TitleMode::Markup => inner_markup_without(choice, &[self.hint_tag]),
            TitleMode::PlainText => get_text(choice),
        };

        let mut answer = Answer::new(answer_id(index), title, correct);
        for hint in find_children(choice, self.hint_tag) {
            let feedback = inner_markup(hint);
            let selected = match hint.attribute(SELECTED_ATTR) {
                Some(value) => parse_bool(SELECTED_ATTR, value, &encode_element(hint))?,
                None => true,
            };
            if selected {
                answer.selected_feedback = Some(feedback);
            } else {
                answer.unselected_feedback = Some(feedback);
            }
        }

        Ok(answer)
    }
}

impl AnswerExtractor for ChoiceExtractor {
    fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    fn extract(&self, construct: &Element) -> Result<Extraction> {
        let Some(widget) = find_child(construct, self.widget_tag) else {
            return Ok(Extraction::new(vec![placeholder_answer()]));
        };

        let choices: Vec<&Element> = find_children(widget, self.choice_tag).collect();
        let answers = if choices.is_empty() {
            vec![placeholder_answer()]
        } else {
            choices
                .iter()
                .enumerate()
                .map(|(index, choice)| self.parse_choice(index, choice))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Extraction {
            answers,
            group_feedback: group_feedback(widget)?,
            ..Extraction::default()
        })
    }
}

/// Correct answer with a blank title, for a widget with no choices yet.
fn placeholder_answer() -> Answer {
    Answer::new(answer_id(0), "", true)
}

/// Read the `<compoundhint>` elements of a widget.
fn group_feedback(widget: &Element) -> Result<Vec<GroupFeedback>> {
    find_children(widget, COMPOUND_HINT_TAG)
        .enumerate()
        .map(|(id, hint)| {
            let value = hint
                .attribute(VALUE_ATTR)
                .ok_or_else(|| OlxError::MissingAttribute {
                    element: hint.name.clone(),
                    attribute: VALUE_ATTR.to_string(),
                    fragment: truncate_fragment(&encode_element(hint)),
                })?;
            Ok(GroupFeedback {
                id,
                answers: value.split_whitespace().map(String::from).collect(),
                feedback: inner_markup(hint),
            })
        })
        .collect()
}
