use crate::core::units::UnitSystem;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    NonPositiveRatio { ratio: f64 },
    SystemMismatch { expected: UnitSystem, found: UnitSystem },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRatio { ratio } => {
                write!(f, "Major/minor ratio must be positive, found {}", ratio)
            }
            Self::SystemMismatch { expected, found } => {
                write!(f, "Unit system mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

/// Error raised by the arithmetic core. Fails fast, never carries a partial result.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    pub kind: ErrorKind,
    pub operation: &'static str,
    pub suggestions: Vec<String>,
}

pub type Result<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub fn new(kind: ErrorKind, operation: &'static str) -> Self {
        Self {
            kind,
            operation,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn non_positive_ratio(ratio: f64, operation: &'static str) -> Self {
        let error = Self::new(ErrorKind::NonPositiveRatio { ratio }, operation);

        if ratio < 0.0 {
            error.with_suggestion(format!(
                "A ratio counts minor units per major unit; did you mean {}?",
                -ratio
            ))
        } else {
            error
        }
    }

    pub fn system_mismatch(expected: UnitSystem, found: UnitSystem, operation: &'static str) -> Self {
        Self::new(ErrorKind::SystemMismatch { expected, found }, operation)
            .with_suggestion(format!("Use Measurement::convert_to({:?}) first", expected))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.kind)?;

        for suggestion in &self.suggestions {
            write!(f, "\n  hint: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for DomainError {}
