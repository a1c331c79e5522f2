//! Terms: a coefficient times a subexpression raised to a power

use crate::{PolyError, Polynomial, Substitutions, Variable};
use tracing::{debug, trace};

/// What a term's power is applied to
#[derive(Debug, Clone, PartialEq)]
pub enum Subexpression {
    /// A single-letter variable (e.g. `x` in `3x^2`)
    Variable(Variable),

    /// A nested polynomial (e.g. `x+1` in `2(x+1)^3`)
    Nested(Polynomial),

    /// No subexpression: the term is its coefficient
    Constant,
}

/// A single summand `coefficient * subexpression^power`
///
/// Construction enforces two rules:
/// - a zero coefficient or a constant form always yields a constant term with power 0
/// - a power of 0 drops the subexpression, leaving a constant
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    coefficient: f64,
    power: u32,
    subexpression: Subexpression,
}

impl Term {
    fn construct(coefficient: f64, subexpression: Subexpression, power: u32) -> Self {
        if matches!(subexpression, Subexpression::Constant) || coefficient == 0.0 {
            if !matches!(subexpression, Subexpression::Constant) {
                trace!(coefficient, "zero coefficient, term reduced to a constant");
            }
            return Term {
                coefficient,
                power: 0,
                subexpression: Subexpression::Constant,
            };
        }

        if power == 0 {
            trace!(coefficient, "zero power, term reduced to a constant");
            return Term {
                coefficient,
                power,
                subexpression: Subexpression::Constant,
            };
        }

        Term {
            coefficient,
            power,
            subexpression,
        }
    }

    // Constructors

    /// Create a constant term
    pub fn constant(value: f64) -> Self {
        Term::construct(value, Subexpression::Constant, 0)
    }

    /// Create `coefficient * letter^power`
    ///
    /// # Example
    /// ```
    /// use nested_poly::Term;
    ///
    /// let t = Term::variable(3.0, 'x', 2).unwrap();
    /// assert_eq!(t.to_string(), "3x^2");
    /// assert!(Term::variable(3.0, '1', 2).is_err());
    ///
    /// // Reduced to a constant before the letter is looked at
    /// assert_eq!(Term::variable(0.0, '1', 2).unwrap().to_string(), "0");
    /// ```
    pub fn variable(coefficient: f64, letter: char, power: u32) -> Result<Self, PolyError> {
        // A term that reduces to a constant never stores its letter
        if coefficient == 0.0 || power == 0 {
            trace!(coefficient, power, "term reduced to a constant");
            return Ok(Term::constant(coefficient));
        }
        Ok(Term::with_variable(coefficient, Variable::new(letter)?, power))
    }

    /// Create `coefficient * letter` (power 1)
    pub fn linear(coefficient: f64, letter: char) -> Result<Self, PolyError> {
        Term::variable(coefficient, letter, 1)
    }

    /// Create `coefficient * var^power` from an already validated variable
    pub fn with_variable(coefficient: f64, var: Variable, power: u32) -> Self {
        Term::construct(coefficient, Subexpression::Variable(var), power)
    }

    /// Create `coefficient * (poly)^power`
    pub fn nested(coefficient: f64, poly: Polynomial, power: u32) -> Self {
        Term::construct(coefficient, Subexpression::Nested(poly), power)
    }

    /// Create `coefficient * (poly)` (power 1)
    pub fn nested_linear(coefficient: f64, poly: Polynomial) -> Self {
        Term::nested(coefficient, poly, 1)
    }

    // Accessors

    /// Multiplicative factor of the term
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Exponent applied to the subexpression (0 for constants)
    pub fn power(&self) -> u32 {
        self.power
    }

    /// What the power is applied to
    pub fn subexpression(&self) -> &Subexpression {
        &self.subexpression
    }

    /// Check if the term carries no variable or nested polynomial
    pub fn is_constant(&self) -> bool {
        matches!(self.subexpression, Subexpression::Constant)
    }

    /// The variable this term is raised over, if any
    pub fn variable_of(&self) -> Option<Variable> {
        match self.subexpression {
            Subexpression::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// The nested polynomial this term is raised over, if any
    pub fn nested_poly(&self) -> Option<&Polynomial> {
        match &self.subexpression {
            Subexpression::Nested(poly) => Some(poly),
            _ => None,
        }
    }

    /// Nesting depth below this term (0 unless the subexpression is a polynomial)
    pub fn depth(&self) -> usize {
        match &self.subexpression {
            Subexpression::Nested(poly) => 1 + poly.depth(),
            _ => 0,
        }
    }

    // Evaluation

    /// Evaluate the term with the given substitutions
    ///
    /// Fails with [`PolyError::MissingSubstitution`] if a variable anywhere
    /// below this term has no value.
    pub fn evaluate(&self, subs: &Substitutions) -> Result<f64, PolyError> {
        match &self.subexpression {
            Subexpression::Variable(var) => match subs.value_of(*var) {
                Some(value) => Ok(self.scale(value)),
                None => {
                    debug!(variable = %var, "missing substitution");
                    Err(PolyError::MissingSubstitution(*var))
                }
            },
            Subexpression::Nested(poly) => Ok(self.scale(poly.evaluate(subs)?)),
            Subexpression::Constant => Ok(self.coefficient),
        }
    }

    /// Evaluate with a single substitution `letter = value`
    pub fn evaluate_at(&self, letter: char, value: f64) -> Result<f64, PolyError> {
        self.evaluate(&Substitutions::single(letter, value))
    }

    /// Evaluate by substituting `value` for the variable, whatever its letter
    ///
    /// Constant terms ignore `value`. Nested terms are rejected with
    /// [`PolyError::UnsupportedNestedEvaluation`].
    pub fn quick_eval(&self, value: f64) -> Result<f64, PolyError> {
        match &self.subexpression {
            Subexpression::Variable(_) => Ok(self.scale(value)),
            Subexpression::Nested(_) => {
                debug!("quick_eval called on a nested term");
                Err(PolyError::UnsupportedNestedEvaluation)
            }
            Subexpression::Constant => Ok(self.coefficient),
        }
    }

    #[inline]
    fn scale(&self, base: f64) -> f64 {
        self.coefficient * num_traits::pow(base, self.power as usize)
    }
}
