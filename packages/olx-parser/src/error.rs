//! Error types for the OLX parser.
//!
//! `OlxError` carries detailed context for library consumers. Editing UIs
//! get the flattened [`ParseFailure`], which names the failure kind and the
//! offending fragment so a recovery path can be offered.

use serde::Serialize;
use thiserror::Error;

/// Longest source fragment kept on an error.
const MAX_FRAGMENT_LEN: usize = 120;

/// Main error type for the OLX parser library.
#[derive(Debug, Error)]
pub enum OlxError {
    /// Input is not well-formed XML.
    #[error("Malformed markup at {line}:{column}: {message}")]
    MalformedMarkup {
        message: String,
        line: u32,
        column: u32,
        fragment: String,
    },

    /// A correctness or selection attribute is not `true`/`false`.
    #[error("Unrecognized boolean literal '{value}' in attribute '{attribute}'")]
    InvalidBoolean {
        attribute: String,
        value: String,
        fragment: String,
    },

    /// A required attribute is absent.
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: String,
        attribute: String,
        fragment: String,
    },

    /// Input is larger than the caller accepts.
    #[error("Input exceeds maximum size of {limit} bytes (got {size} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Some files in a batch check did not parse.
    #[error("{failed} of {total} files failed to parse")]
    CheckFailed { failed: usize, total: usize },
}

/// Coarse classification of an [`OlxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    MalformedMarkup,
    InvalidBoolean,
    MissingAttribute,
    InputTooLarge,
    Io,
    Serialization,
    CheckFailed,
}

impl OlxError {
    /// Build a malformed-markup error, keeping the offending source line.
    #[must_use]
    pub fn malformed(err: &roxmltree::Error, input: &str) -> Self {
        let pos = err.pos();
        let fragment = input
            .lines()
            .nth(pos.row.saturating_sub(1) as usize)
            .map(|line| truncate_fragment(line.trim()))
            .unwrap_or_default();

        Self::MalformedMarkup {
            message: err.to_string(),
            line: pos.row,
            column: pos.col,
            fragment,
        }
    }

    /// Get the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedMarkup { .. } => ErrorKind::MalformedMarkup,
            Self::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            Self::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
            Self::Io(_) => ErrorKind::Io,
            Self::Json(_) | Self::Yaml(_) => ErrorKind::Serialization,
            Self::CheckFailed { .. } => ErrorKind::CheckFailed,
        }
    }

    /// Get the source fragment that caused this error, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::MalformedMarkup { fragment, .. }
            | Self::InvalidBoolean { fragment, .. }
            | Self::MissingAttribute { fragment, .. } => Some(fragment.as_str()),
            _ => None,
        }
    }
}

/// Shorten a fragment to at most `MAX_FRAGMENT_LEN` characters.
pub(crate) fn truncate_fragment(fragment: &str) -> String {
    if fragment.chars().count() <= MAX_FRAGMENT_LEN {
        return fragment.to_string();
    }
    let mut short: String = fragment.chars().take(MAX_FRAGMENT_LEN).collect();
    short.push('…');
    short
}

/// Structured failure handed to editing UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl From<&OlxError> for ParseFailure {
    fn from(err: &OlxError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            fragment: err.fragment().map(String::from),
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, OlxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OlxError::InvalidBoolean {
            attribute: "correct".to_string(),
            value: "maybe".to_string(),
            fragment: r#"<choice correct="maybe">A</choice>"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized boolean literal 'maybe' in attribute 'correct'"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidBoolean);
        assert_eq!(err.fragment(), Some(r#"<choice correct="maybe">A</choice>"#));
    }

    #[test]
    fn test_malformed_keeps_offending_line() {
        let input = "<problem>\n  <p>open\n</problem>";
        let err = roxmltree::Document::parse(input).unwrap_err();
        let err = OlxError::malformed(&err, input);

        assert_eq!(err.kind(), ErrorKind::MalformedMarkup);
        let OlxError::MalformedMarkup { line, fragment, .. } = &err else {
            panic!("expected malformed markup, got {err:?}");
        };
        assert_eq!(*line, 3);
        assert_eq!(fragment, "</problem>");
    }

    #[test]
    fn test_parse_failure_from_error() {
        let err = OlxError::MissingAttribute {
            element: "compoundhint".to_string(),
            attribute: "value".to_string(),
            fragment: "<compoundhint>Hi</compoundhint>".to_string(),
        };
        let failure = ParseFailure::from(&err);

        assert_eq!(failure.kind, ErrorKind::MissingAttribute);
        assert_eq!(failure.message, "Missing attribute 'value' on <compoundhint>");
        assert_eq!(
            failure.fragment.as_deref(),
            Some("<compoundhint>Hi</compoundhint>")
        );
    }

    #[test]
    fn test_check_failed_has_no_fragment() {
        let err = OlxError::CheckFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 files failed to parse");
        assert!(err.fragment().is_none());
    }

    #[test]
    fn test_truncate_fragment() {
        let long = "x".repeat(200);
        let short = truncate_fragment(&long);
        assert_eq!(short.chars().count(), MAX_FRAGMENT_LEN + 1);
        assert!(short.ends_with('…'));
        assert_eq!(truncate_fragment("<p/>"), "<p/>");
    }
}
