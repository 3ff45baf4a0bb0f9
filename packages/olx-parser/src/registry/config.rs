//! Registry configuration for the OLX response constructs.

use super::core::ExtractorRegistry;
use super::handlers::{ChoiceExtractor, NumericExtractor, TextExtractor};

/// Create a registry with an extractor for every response type.
#[must_use]
pub fn create_default_registry() -> ExtractorRegistry {
    let mut registry = ExtractorRegistry::new();

    // Choice-based constructs
    registry.register(ChoiceExtractor::single_select());
    registry.register(ChoiceExtractor::multi_select());
    registry.register(ChoiceExtractor::dropdown());

    // Value-based constructs
    registry.register(TextExtractor);
    registry.register(NumericExtractor);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProblemType;

    #[test]
    fn test_create_default_registry() {
        let registry = create_default_registry();

        for problem_type in ProblemType::RESPONSE_TYPES {
            assert!(registry.has_extractor(problem_type), "{problem_type}");
        }
        assert!(!registry.has_extractor(ProblemType::Advanced));
    }
}
