//! Core data types of the normalized problem model.
//!
//! These are the shapes consumed by the editing UI, so field names
//! serialize in camelCase and optional fields are omitted when absent.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of problem the editor can represent.
///
/// Serialized as the OLX construct tag, which is what the editor keys on.
/// An unset problem (no type chosen yet) is modelled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemType {
    /// Single correct choice from a list.
    #[serde(rename = "multiplechoiceresponse")]
    SingleSelect,

    /// Any number of correct choices (checkboxes).
    #[serde(rename = "choiceresponse")]
    MultiSelect,

    /// Choice from a dropdown list.
    #[serde(rename = "optionresponse")]
    Dropdown,

    /// Free text compared against accepted strings.
    #[serde(rename = "stringresponse")]
    TextInput,

    /// Number compared against accepted values.
    #[serde(rename = "numericalresponse")]
    Numeric,

    /// Anything the flat answer model cannot represent.
    #[serde(rename = "advanced")]
    Advanced,
}

impl ProblemType {
    /// Types that map onto a single OLX response construct.
    pub const RESPONSE_TYPES: [ProblemType; 5] = [
        Self::SingleSelect,
        Self::MultiSelect,
        Self::Dropdown,
        Self::TextInput,
        Self::Numeric,
    ];

    /// Get the OLX construct tag (or `advanced`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleSelect => "multiplechoiceresponse",
            Self::MultiSelect => "choiceresponse",
            Self::Dropdown => "optionresponse",
            Self::TextInput => "stringresponse",
            Self::Numeric => "numericalresponse",
            Self::Advanced => "advanced",
        }
    }

    /// Get the human-facing name of this type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleSelect => "single-select",
            Self::MultiSelect => "multi-select",
            Self::Dropdown => "dropdown",
            Self::TextInput => "text-input",
            Self::Numeric => "numeric",
            Self::Advanced => "advanced",
        }
    }

    /// Look up the type whose construct uses the given tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::RESPONSE_TYPES
            .into_iter()
            .find(|problem_type| problem_type.as_str() == tag)
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single answer of a problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Letter code derived from position (A, B, C, ...).
    pub id: String,

    /// Markup for choices, literal value for text and numeric answers.
    pub title: String,

    pub correct: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_feedback: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unselected_feedback: Option<String>,

    /// Extra keyed fields such as a numeric tolerance.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Answer {
    /// Serialized names of the fixed fields; `extra` keys must not reuse them.
    pub const FIELD_NAMES: [&'static str; 5] = [
        "id",
        "title",
        "correct",
        "selectedFeedback",
        "unselectedFeedback",
    ];

    /// Create an answer with no feedback.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, correct: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            correct,
            ..Self::default()
        }
    }

    /// Set the feedback shown when this answer is selected.
    #[must_use]
    pub fn with_selected_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.selected_feedback = Some(feedback.into());
        self
    }
}

/// Feedback for a combination of selected answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFeedback {
    pub id: usize,

    /// Answer ids the feedback applies to.
    pub answers: Vec<String>,

    pub feedback: String,
}

/// An on-demand hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub id: usize,
    pub value: String,
}

/// Problem settings extracted alongside the answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub hints: Vec<Hint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_explanation: Option<String>,
}

/// Input field settings of a text response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Per-type attributes that do not belong to any single answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalAttributes {
    /// Response subtype of a text response (e.g. `ci`, `regexp`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textline: Option<Textline>,
}

impl AdditionalAttributes {
    /// Check whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.response_type.is_none() && self.textline.is_none()
    }
}

/// Fully parsed problem of a recognized type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProblem {
    /// Prompt markup, in source order.
    pub question: String,
    pub settings: Settings,
    pub answers: Vec<Answer>,
    pub problem_type: ProblemType,
    pub additional_attributes: AdditionalAttributes,

    /// Feedback shared by every incorrect answer, or empty.
    pub general_feedback: String,
    pub group_feedback_list: Vec<GroupFeedback>,
}

/// Empty settings object of an advanced problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSettings {}

/// Result of parsing one OLX document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedOlx {
    /// Empty problem, type not chosen yet. Serializes as `{}`.
    Unset {},

    /// Opaque content the structured editor does not decompose.
    #[serde(rename_all = "camelCase")]
    Advanced {
        problem_type: ProblemType,
        settings: AdvancedSettings,
    },

    /// Problem of one of the five response types.
    Problem(Box<ParsedProblem>),
}

impl ParsedOlx {
    /// Create the advanced result.
    #[must_use]
    pub fn advanced() -> Self {
        Self::Advanced {
            problem_type: ProblemType::Advanced,
            settings: AdvancedSettings::default(),
        }
    }

    /// Get the problem type, `None` for an unset problem.
    #[must_use]
    pub fn problem_type(&self) -> Option<ProblemType> {
        match self {
            Self::Unset {} => None,
            Self::Advanced { problem_type, .. } => Some(*problem_type),
            Self::Problem(problem) => Some(problem.problem_type),
        }
    }

    /// Get the structured problem, if there is one.
    #[must_use]
    pub fn as_problem(&self) -> Option<&ParsedProblem> {
        match self {
            Self::Problem(problem) => Some(problem),
            _ => None,
        }
    }
}
