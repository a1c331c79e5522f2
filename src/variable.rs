//! Single-letter variables
//!
//! # Example
//! ```
//! use nested_poly::Variable;
//!
//! let x = Variable::new('x').unwrap();
//! assert_eq!(x.letter(), 'x');
//! assert!(Variable::new('1').is_err());
//! ```

use crate::PolyError;
use std::fmt;

/// A variable denoted by a single alphabetic character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(char);

impl Variable {
    /// Create a variable, rejecting anything that is not a letter
    ///
    /// Letter numbers such as `'Ⅻ'` are alphabetic in Unicode but count as
    /// numbers here. Other alphabetic marks and symbols (e.g. `'Ⓐ'`) are
    /// still accepted.
    pub fn new(letter: char) -> Result<Self, PolyError> {
        if letter.is_alphabetic() && !letter.is_numeric() {
            Ok(Variable(letter))
        } else {
            Err(PolyError::InvalidVariable(letter))
        }
    }

    /// Get the letter denoting this variable
    pub fn letter(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Variable {
    type Error = PolyError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Variable::new(letter)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
