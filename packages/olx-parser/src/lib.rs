//! OLX Parser - Turn assessment-problem XML into the editor model.
//!
//! This crate parses OLX problem documents (multiple choice, checkboxes,
//! dropdown, text input and numeric problems) into a normalized model of
//! question, answers, feedback, hints and solution that an editing UI can
//! work with. Anything that does not fit the model is reported as an
//! advanced problem instead of being rejected.
//!
//! # Example
//!
//! ```
//! use olx_parser::{parse_olx, ProblemType};
//!
//! let parsed = parse_olx(r#"<problem>
//!   <multiplechoiceresponse>
//!     <p>Capital of France?</p>
//!     <choicegroup>
//!       <choice correct="false">London<choicehint>No.</choicehint></choice>
//!       <choice correct="true">Paris</choice>
//!     </choicegroup>
//!   </multiplechoiceresponse>
//! </problem>"#).unwrap();
//!
//! let problem = parsed.as_problem().unwrap();
//! assert_eq!(problem.problem_type, ProblemType::SingleSelect);
//! assert_eq!(problem.question, "<p>Capital of France?</p>");
//! assert_eq!(problem.answers[1].id, "B");
//! assert_eq!(problem.general_feedback, "No.");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: OLX vocabulary, answer ids, boolean literals
//! - [`types`]: The normalized problem model
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Decoding, grouped views and re-encoding of markup
//! - [`classify`]: Problem-type classification
//! - [`sections`]: Question, hints and solution extraction
//! - [`registry`]: Per-type answer and feedback extractors
//! - [`parser`]: Main parser tying it all together
//! - [`output`]: JSON/YAML rendering
//! - [`cli`]: Command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod sections;
pub mod types;
pub mod xml;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export main functions
pub use parser::{parse_olx, OlxParser};

// Re-export commonly used items
pub use error::{ErrorKind, OlxError, ParseFailure, Result};
pub use types::{
    AdditionalAttributes, Answer, GroupFeedback, Hint, ParsedOlx, ParsedProblem, ProblemType,
    Settings,
};
