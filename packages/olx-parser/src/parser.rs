//! Top-level parser that ties all components together.

use crate::classify::classify;
use crate::config::PROBLEM_TAG;
use crate::error::Result;
use crate::registry::{create_default_registry, ExtractorRegistry};
use crate::sections::{extract_hints, extract_question, extract_solution};
use crate::types::{Answer, ParsedOlx, ParsedProblem, ProblemType, Settings};
use crate::xml::{decode, find_child};

/// Parser turning OLX problem documents into the editor model.
///
/// The parser holds only its extractor table; every call to
/// [`OlxParser::parse`] decodes and owns its own tree.
pub struct OlxParser {
    registry: ExtractorRegistry,
}

impl OlxParser {
    /// Create a parser with the default extractors.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(create_default_registry())
    }

    /// Create a parser with a custom extractor registry.
    #[must_use]
    pub fn with_registry(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Parse one OLX document.
    ///
    /// # Arguments
    /// * `olx` - Full problem document, rooted at `<problem>`
    ///
    /// # Returns
    /// `ParsedOlx::Unset` for a blank problem (or a document that is not a
    /// problem), `ParsedOlx::Advanced` for anything the flat model cannot
    /// represent, otherwise the full `ParsedProblem`.
    ///
    /// # Errors
    /// Returns `MalformedMarkup` for input that is not well-formed, and
    /// `InvalidBoolean` / `MissingAttribute` for unreadable answers.
    pub fn parse(&self, olx: &str) -> Result<ParsedOlx> {
        let problem = decode(olx)?;

        if problem.name != PROBLEM_TAG {
            tracing::debug!(root = %problem.name, "Root is not <problem>, nothing to parse");
            return Ok(ParsedOlx::Unset {});
        }

        let Some(problem_type) = classify(&problem) else {
            tracing::debug!("Blank problem, type not set");
            return Ok(ParsedOlx::Unset {});
        };

        if problem_type == ProblemType::Advanced {
            return Ok(ParsedOlx::advanced());
        }

        let Some(extractor) = self.registry.get(problem_type) else {
            tracing::warn!(
                problem_type = %problem_type,
                "No extractor registered, treating problem as advanced"
            );
            return Ok(ParsedOlx::advanced());
        };

        let Some(construct) = find_child(&problem, problem_type.as_str()) else {
            return Ok(ParsedOlx::advanced());
        };

        let question = extract_question(&problem, problem_type);
        let settings = Settings {
            hints: extract_hints(&problem),
            solution_explanation: extract_solution(construct),
        };

        let extraction = extractor.extract(construct)?;
        let general_feedback = general_feedback(&extraction.answers, problem_type);

        tracing::debug!(
            problem_type = %problem_type,
            answers = extraction.answers.len(),
            hints = settings.hints.len(),
            general_feedback = !general_feedback.is_empty(),
            "Parsed problem"
        );

        Ok(ParsedOlx::Problem(Box::new(ParsedProblem {
            question,
            settings,
            answers: extraction.answers,
            problem_type,
            additional_attributes: extraction.additional_attributes,
            general_feedback,
            group_feedback_list: extraction.group_feedback,
        })))
    }
}

impl Default for OlxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one OLX document with the default extractors.
///
/// # Errors
/// See [`OlxParser::parse`].
///
/// # Examples
/// ```
/// use olx_parser::parse_olx;
/// use olx_parser::types::ProblemType;
///
/// let parsed = parse_olx(r#"<problem>
///     <stringresponse answer="42"><label>Answer?</label><textline size="5"/></stringresponse>
/// </problem>"#).unwrap();
///
/// let problem = parsed.as_problem().unwrap();
/// assert_eq!(problem.problem_type, ProblemType::TextInput);
/// assert_eq!(problem.question, "<label>Answer?</label>");
/// assert_eq!(problem.answers[0].title, "42");
/// ```
pub fn parse_olx(olx: &str) -> Result<ParsedOlx> {
    OlxParser::new().parse(olx)
}

/// Deduce the feedback shared by every incorrect answer.
///
/// Only single-select and dropdown problems have general feedback. It is
/// set when every incorrect answer carries the same non-empty selected
/// feedback and no unselected feedback; otherwise it is empty.
#[must_use]
pub fn general_feedback(answers: &[Answer], problem_type: ProblemType) -> String {
    if !matches!(problem_type, ProblemType::SingleSelect | ProblemType::Dropdown) {
        return String::new();
    }

    let mut incorrect = answers.iter().filter(|answer| !answer.correct);
    let Some(shared) = incorrect
        .next()
        .and_then(|first| first.selected_feedback.as_deref())
        .filter(|feedback| !feedback.is_empty())
    else {
        return String::new();
    };

    let uniform = answers.iter().filter(|answer| !answer.correct).all(|answer| {
        answer.selected_feedback.as_deref() == Some(shared) && answer.unselected_feedback.is_none()
    });

    if uniform {
        shared.to_string()
    } else {
        String::new()
    }
}
