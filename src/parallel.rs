//! Parallel batch evaluation using Rayon
//!
//! Evaluates one polynomial over many substitution sets at once.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! nested_poly = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{PolyError, Polynomial, Substitutions};
use rayon::prelude::*;

/// Evaluate `poly` once per substitution set
///
/// Results come back in the same order as `batch`. A failing set only
/// affects its own slot.
///
/// # Example
/// ```
/// use nested_poly::{Polynomial, Substitutions, Term};
/// use nested_poly::parallel::evaluate_batch;
///
/// let poly = Polynomial::from_term(Term::variable(2.0, 'x', 2).unwrap());
/// let batch: Vec<Substitutions> = (0..4)
///     .map(|i| Substitutions::single('x', i as f64))
///     .collect();
/// let results = evaluate_batch(&poly, &batch);
/// assert_eq!(results[3], Ok(18.0));
/// ```
pub fn evaluate_batch(poly: &Polynomial, batch: &[Substitutions]) -> Vec<Result<f64, PolyError>> {
    batch.par_iter().map(|subs| poly.evaluate(subs)).collect()
}

/// Evaluate `poly` at many values of a single variable
pub fn evaluate_at_points(
    poly: &Polynomial,
    letter: char,
    points: &[f64],
) -> Result<Vec<f64>, PolyError> {
    points
        .par_iter()
        .map(|&value| poly.evaluate_at(letter, value))
        .collect()
}
