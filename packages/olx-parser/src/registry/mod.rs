//! Extractor registry for per-type answer extraction.
//!
//! Each recognized problem type has one extractor behind the uniform
//! [`AnswerExtractor`] signature. The parser looks the extractor up by
//! type instead of inspecting the document shape again.

mod config;
mod core;
mod handler;
pub mod handlers;
mod types;

pub use config::create_default_registry;
pub use core::ExtractorRegistry;
pub use handler::{answer_value, correct_hint_feedback, push_additional_answers, AnswerExtractor};
pub use types::Extraction;
