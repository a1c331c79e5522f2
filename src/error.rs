use std::fmt;

use crate::Variable;

/// Errors that can occur while building or evaluating polynomials
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// A variable must be denoted by a letter
    InvalidVariable(char),

    /// Evaluation reached a variable with no substituted value
    MissingSubstitution(Variable),

    /// `quick_eval` cannot substitute into a nested polynomial
    UnsupportedNestedEvaluation,
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::InvalidVariable(c) => {
                write!(f, "Variable must be denoted as a letter, got '{}'", c)
            }
            PolyError::MissingSubstitution(var) => {
                write!(f, "No substituted value was given for variable '{}'", var)
            }
            PolyError::UnsupportedNestedEvaluation => {
                write!(f, "Cannot quick-evaluate a term over a nested polynomial")
            }
        }
    }
}

impl std::error::Error for PolyError {}
