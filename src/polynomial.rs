//! Polynomials: ordered sums of terms

use crate::{PolyError, Substitutions, Term};

/// An ordered sum of [`Term`]s
///
/// Term order is preserved exactly as given and decides how the polynomial
/// is rendered. Like terms are never combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Create a polynomial from terms in the given order
    pub fn new(terms: Vec<Term>) -> Self {
        Polynomial { terms }
    }

    /// Promote a single term to a polynomial
    pub fn from_term(term: Term) -> Self {
        Polynomial { terms: vec![term] }
    }

    // Accessors

    /// Terms in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms, duplicates included
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Check if the polynomial has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms in order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Deepest nesting of polynomials inside this one (0 when no term is nested)
    pub fn depth(&self) -> usize {
        self.terms.iter().map(Term::depth).max().unwrap_or(0)
    }

    // Evaluation

    /// Sum of every term evaluated with `subs`, left to right
    ///
    /// The first failing term aborts the whole evaluation.
    ///
    /// # Example
    /// ```
    /// use nested_poly::{Polynomial, Substitutions, Term};
    ///
    /// let poly = Polynomial::new(vec![
    ///     Term::variable(7.0, 'z', 3).unwrap(),
    ///     Term::variable(5.0, 'y', 1).unwrap(),
    ///     Term::variable(3.0, 'x', 2).unwrap(),
    /// ]);
    /// let subs = Substitutions::from([('x', 20.0), ('y', 40.0), ('z', 15.0)]);
    /// assert_eq!(poly.evaluate(&subs), Ok(25025.0));
    /// ```
    pub fn evaluate(&self, subs: &Substitutions) -> Result<f64, PolyError> {
        self.terms
            .iter()
            .try_fold(0.0, |acc, term| Ok(acc + term.evaluate(subs)?))
    }

    /// Evaluate with a single substitution `letter = value`
    pub fn evaluate_at(&self, letter: char, value: f64) -> Result<f64, PolyError> {
        self.evaluate(&Substitutions::single(letter, value))
    }

    /// Reserved for ordering terms by degree; currently the identity
    ///
    /// Returns an equivalent polynomial with term order preserved. No
    /// degree-based reordering is performed.
    #[must_use]
    pub fn sort(self) -> Polynomial {
        self
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Polynomial::from_term(term)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Build a [`Polynomial`] from a list of terms
///
/// ```
/// use nested_poly::{Term, poly};
///
/// let p = poly![Term::linear(1.0, 'x').unwrap(), Term::constant(-2.0)];
/// assert_eq!(p.to_string(), "x-2");
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Polynomial::default()
    };
    ($($term:expr),+ $(,)?) => {
        $crate::Polynomial::new(vec![$($term),+])
    };
}
