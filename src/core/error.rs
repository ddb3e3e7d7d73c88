//! Error type for progress engine operations

use thiserror::Error;

/// Errors surfaced by the progress engine.
///
/// Malformed grade values are never errors (they are coerced and clamped);
/// only caller/catalog mismatches are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    /// The operation named a course that is not in the catalog
    #[error("Unknown course: '{0}'")]
    UnknownCourse(String),

    /// A term number outside `1..=max` was supplied
    #[error("Term {term} is outside the curriculum (1..={max})")]
    TermOutOfRange {
        /// Requested term
        term: u32,
        /// Last term of the curriculum
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProgressError::UnknownCourse("Física II".to_string()).to_string(),
            "Unknown course: 'Física II'"
        );
        assert_eq!(
            ProgressError::TermOutOfRange { term: 0, max: 14 }.to_string(),
            "Term 0 is outside the curriculum (1..=14)"
        );
    }
}
