//! Registry mapping problem types to answer extractors.

use std::collections::HashMap;

use super::handler::AnswerExtractor;
use crate::types::ProblemType;

/// Dispatch table from problem type to its extractor.
pub struct ExtractorRegistry {
    extractors: HashMap<ProblemType, Box<dyn AnswerExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor under the type it reports.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register(&mut self, extractor: impl AnswerExtractor + 'static) {
        self.extractors
            .insert(extractor.problem_type(), Box::new(extractor));
    }

    /// Get the extractor for a problem type.
    #[must_use]
    pub fn get(&self, problem_type: ProblemType) -> Option<&dyn AnswerExtractor> {
        self.extractors.get(&problem_type).map(|e| e.as_ref())
    }

    /// Check if an extractor is registered for a type.
    #[must_use]
    pub fn has_extractor(&self, problem_type: ProblemType) -> bool {
        self.extractors.contains_key(&problem_type)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
