//! Problem-type classification.
//!
//! Compound problems (several response constructs, or one construct
//! repeated) have no safe decomposition into the flat answer model, so
//! they are handed back as [`ProblemType::Advanced`].

use crate::types::ProblemType;
use crate::xml::Element;

/// Classify a problem element.
///
/// Returns `None` for a blank problem (no attributes, no children, no
/// text), which has no type yet. Every other input gets exactly one type.
///
/// # Examples
/// ```
/// use olx_parser::classify::classify;
/// use olx_parser::types::ProblemType;
/// use olx_parser::xml::decode;
///
/// let root = decode("<problem><numericalresponse answer=\"4\"/></problem>").unwrap();
/// assert_eq!(classify(&root), Some(ProblemType::Numeric));
///
/// let blank = decode("<problem/>").unwrap();
/// assert_eq!(classify(&blank), None);
/// ```
#[must_use]
pub fn classify(problem: &Element) -> Option<ProblemType> {
    let grouped = problem.grouped();

    let matches: Vec<(ProblemType, usize)> = grouped
        .tags()
        .filter_map(|tag| ProblemType::from_tag(tag).map(|t| (t, grouped.get(tag).len())))
        .collect();

    match matches.as_slice() {
        [] if grouped.is_blank() => None,
        [] => Some(ProblemType::Advanced),
        [(problem_type, 1)] => Some(*problem_type),
        _ => {
            tracing::debug!(
                constructs = ?matches,
                "Compound problem, classifying as advanced"
            );
            Some(ProblemType::Advanced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::decode;

    fn classify_str(olx: &str) -> Option<ProblemType> {
        classify(&decode(olx).unwrap())
    }

    #[test]
    fn test_blank_problem_is_unset() {
        assert_eq!(classify_str("<problem></problem>"), None);
        assert_eq!(classify_str("<problem/>"), None);
        assert_eq!(classify_str("<problem>\n   \n</problem>"), None);
    }

    #[test]
    fn test_unrecognized_content_is_advanced() {
        assert_eq!(classify_str("<problem><p>Only text</p></problem>"), Some(ProblemType::Advanced));
        assert_eq!(classify_str("<problem>loose text</problem>"), Some(ProblemType::Advanced));
        assert_eq!(
            classify_str(r#"<problem display_name="x"></problem>"#),
            Some(ProblemType::Advanced)
        );
        assert_eq!(
            classify_str("<problem><customresponse/></problem>"),
            Some(ProblemType::Advanced)
        );
    }

    #[test]
    fn test_single_construct_types() {
        let cases = [
            ("multiplechoiceresponse", ProblemType::SingleSelect),
            ("choiceresponse", ProblemType::MultiSelect),
            ("optionresponse", ProblemType::Dropdown),
            ("stringresponse", ProblemType::TextInput),
            ("numericalresponse", ProblemType::Numeric),
        ];
        for (tag, expected) in cases {
            let olx = format!("<problem><p>Q</p><{tag}/></problem>");
            assert_eq!(classify_str(&olx), Some(expected), "tag {tag}");
        }
    }

    #[test]
    fn test_mixed_constructs_are_advanced() {
        let olx = "<problem><multiplechoiceresponse/><stringresponse answer=\"a\"/></problem>";
        assert_eq!(classify_str(olx), Some(ProblemType::Advanced));
    }

    #[test]
    fn test_repeated_construct_is_advanced() {
        let olx = "<problem><stringresponse answer=\"a\"/><stringresponse answer=\"b\"/></problem>";
        assert_eq!(classify_str(olx), Some(ProblemType::Advanced));
    }

    #[test]
    fn test_nested_constructs_are_not_top_level() {
        let olx = "<problem><div><stringresponse answer=\"a\"/></div></problem>";
        assert_eq!(classify_str(olx), Some(ProblemType::Advanced));
    }
}
