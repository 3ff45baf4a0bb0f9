//! Extraction of the question, hints and solution of a problem.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{is_question_tag, DEMAND_HINT_TAG, EMPHASIS_TAG, HINT_TAG, SOLUTION_TAG};
use crate::types::{Hint, ProblemType};
use crate::xml::{encode_nodes, find_child, find_children, inner_markup, Element, XmlNode};

/// Regex matching bare `<description>` and `</description>` tags.
#[allow(clippy::expect_used)]
static DESCRIPTION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)description>").expect("valid regex"));

/// Extract the question markup of a problem.
///
/// The question region is the content of the response construct when it is
/// the first node of the problem, otherwise the content of the problem
/// itself. Response parts are dropped, the rest keeps its source order,
/// and `description` tags become emphasis.
///
/// # Examples
/// ```
/// use olx_parser::sections::extract_question;
/// use olx_parser::types::ProblemType;
/// use olx_parser::xml::decode;
///
/// let root = decode(
///     "<problem><stringresponse answer=\"4\"><p>2+2?</p><textline/></stringresponse></problem>",
/// )
/// .unwrap();
/// assert_eq!(extract_question(&root, ProblemType::TextInput), "<p>2+2?</p>");
/// ```
#[must_use]
pub fn extract_question(problem: &Element, problem_type: ProblemType) -> String {
    let region = match problem.children.first() {
        Some(XmlNode::Element(first)) if first.name == problem_type.as_str() => first,
        _ => problem,
    };

    let kept: Vec<XmlNode> = region
        .children
        .iter()
        .filter(|node| match node {
            XmlNode::Element(el) => is_question_tag(&el.name),
            XmlNode::Text(_) => true,
        })
        .cloned()
        .collect();

    let markup = encode_nodes(&kept);
    DESCRIPTION_TAG_RE
        .replace_all(markup.trim(), format!("<${{1}}{EMPHASIS_TAG}>").as_str())
        .into_owned()
}

/// Extract the on-demand hints of a problem, in document order.
///
/// # Examples
/// ```
/// use olx_parser::sections::extract_hints;
/// use olx_parser::xml::decode;
///
/// let root = decode(
///     "<problem><demandhint><hint>One</hint><hint>Two</hint></demandhint></problem>",
/// )
/// .unwrap();
/// let hints = extract_hints(&root);
/// assert_eq!(hints[1].id, 1);
/// assert_eq!(hints[1].value, "Two");
/// ```
#[must_use]
pub fn extract_hints(problem: &Element) -> Vec<Hint> {
    find_children(problem, DEMAND_HINT_TAG)
        .flat_map(|demand_hint| find_children(demand_hint, HINT_TAG))
        .enumerate()
        .map(|(id, hint)| Hint {
            id,
            value: inner_markup(hint),
        })
        .collect()
}

/// Extract the solution explanation of a response construct.
///
/// Returns `None` when the construct has no solution.
#[must_use]
pub fn extract_solution(construct: &Element) -> Option<String> {
    find_child(construct, SOLUTION_TAG).map(inner_markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    #[test]
    fn test_question_from_wrapping_construct() {
        let root = decode(
            r#"<problem>
                <multiplechoiceresponse>
                    <p>Which city?</p>
                    <label>Pick one</label>
                    <choicegroup type="MultipleChoice"><choice correct="true">Paris</choice></choicegroup>
                    <solution><p>Because.</p></solution>
                </multiplechoiceresponse>
            </problem>"#,
        )
        .unwrap();

        assert_eq!(
            extract_question(&root, ProblemType::SingleSelect),
            "<p>Which city?</p><label>Pick one</label>"
        );
    }

    #[test]
    fn test_question_from_problem_when_prompt_comes_first() {
        let root = decode(
            r#"<problem>
                <p>Enter a number</p>
                <img src="/static/graph.png"/>
                <numericalresponse answer="3"><formulaequationinput/></numericalresponse>
                <demandhint><hint>Count</hint></demandhint>
            </problem>"#,
        )
        .unwrap();

        assert_eq!(
            extract_question(&root, ProblemType::Numeric),
            r#"<p>Enter a number</p><img src="/static/graph.png"/>"#
        );
    }

    #[test]
    fn test_question_keeps_text_interleaving() {
        let root = decode(
            "<problem><stringresponse answer=\"x\">Type <b>x</b> here<textline size=\"20\"/></stringresponse></problem>",
        )
        .unwrap();
        assert_eq!(
            extract_question(&root, ProblemType::TextInput),
            "Type <b>x</b> here"
        );
    }

    #[test]
    fn test_question_rewrites_description() {
        let root = decode(
            "<problem><optionresponse><label>Color?</label><description>Think of the sky</description><optioninput/></optionresponse></problem>",
        )
        .unwrap();
        assert_eq!(
            extract_question(&root, ProblemType::Dropdown),
            "<label>Color?</label><em>Think of the sky</em>"
        );
    }

    #[test]
    fn test_hints_empty_when_absent() {
        let root = decode("<problem><p>Q</p></problem>").unwrap();
        assert!(extract_hints(&root).is_empty());
    }

    #[test]
    fn test_hints_keep_markup_and_order() {
        let root = decode(
            "<problem><demandhint><hint>First <b>hint</b></hint><hint><p>Second</p></hint></demandhint></problem>",
        )
        .unwrap();

        assert_eq!(
            extract_hints(&root),
            vec![
                Hint {
                    id: 0,
                    value: "First <b>hint</b>".to_string()
                },
                Hint {
                    id: 1,
                    value: "<p>Second</p>".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_solution_absent() {
        let construct = decode("<stringresponse answer=\"a\"/>").unwrap();
        assert_eq!(extract_solution(&construct), None);
    }

    #[test]
    fn test_solution_inner_markup() {
        let construct = decode(
            r#"<stringresponse answer="a"><solution><div class="detailed-solution"><p>Explanation</p></div></solution></stringresponse>"#,
        )
        .unwrap();
        assert_eq!(
            extract_solution(&construct).as_deref(),
            Some(r#"<div class="detailed-solution"><p>Explanation</p></div>"#)
        );
    }
}
