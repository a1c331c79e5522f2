//! Variable substitution sets used during evaluation
//!
//! # Example
//! ```
//! use nested_poly::Substitutions;
//!
//! let subs = Substitutions::from([('x', 20.0), ('y', 40.0)]);
//! assert_eq!(subs.get('x'), Some(20.0));
//! assert_eq!(subs.get('z'), None);
//! ```

use crate::Variable;
use rustc_hash::FxHashMap;

/// Mapping from variable letter to the value it takes during evaluation
///
/// Keys are plain characters: a key that no variable can match (such as a
/// digit) is simply never looked up. When a letter is supplied more than
/// once, the first value is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitutions {
    values: FxHashMap<char, f64>,
}

impl Substitutions {
    /// Create an empty substitution set
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitution set holding a single letter
    pub fn single(letter: char, value: f64) -> Self {
        Self::new().with(letter, value)
    }

    /// Add a substitution for `letter`
    ///
    /// A letter that is already present keeps its earlier value.
    pub fn with(mut self, letter: char, value: f64) -> Self {
        self.values.entry(letter).or_insert(value);
        self
    }

    /// Add a substitution for an already validated variable
    pub fn with_variable(self, var: Variable, value: f64) -> Self {
        self.with(var.letter(), value)
    }

    /// Value substituted for `letter`, if any
    pub fn get(&self, letter: char) -> Option<f64> {
        self.values.get(&letter).copied()
    }

    /// Value substituted for `var`, if any
    pub fn value_of(&self, var: Variable) -> Option<f64> {
        self.get(var.letter())
    }

    pub fn contains(&self, letter: char) -> bool {
        self.values.contains_key(&letter)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&[(char, f64)]> for Substitutions {
    fn from(pairs: &[(char, f64)]) -> Self {
        pairs.iter().copied().collect()
    }
}

impl<const N: usize> From<[(char, f64); N]> for Substitutions {
    fn from(pairs: [(char, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl FromIterator<(char, f64)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Substitutions::new(), |subs, (letter, value)| {
                subs.with(letter, value)
            })
    }
}

impl FromIterator<(Variable, f64)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (Variable, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Substitutions::new(), |subs, (var, value)| {
                subs.with_variable(var, value)
            })
    }
}
