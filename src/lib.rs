//! Nested Polynomial Library
//!
//! Builds and evaluates polynomials whose terms may themselves be polynomials
//! raised to a power, with single-letter variables substituted at evaluation time.
//!
//! # Features
//! - Terms over a variable, a nested polynomial, or nothing (constants)
//! - Evaluation with a substitution set, or a single `letter = value` pair
//! - Compact rendering (`7z^3+5y+3x^2`, `2(x+1)^3`)
//! - Optional parallel batch evaluation (`parallel` feature)
//!
//! # Usage
//! ```
//! use nested_poly::{Polynomial, Substitutions, Term};
//!
//! let inner = Polynomial::new(vec![
//!     Term::linear(1.0, 'x').unwrap(),
//!     Term::constant(1.0),
//! ]);
//! let poly = Polynomial::new(vec![
//!     Term::nested(2.0, inner, 3),
//!     Term::variable(-1.0, 'y', 2).unwrap(),
//! ]);
//! assert_eq!(poly.to_string(), "2(x+1)^3-1y^2");
//!
//! let subs = Substitutions::from([('x', 1.0), ('y', 3.0)]);
//! assert_eq!(poly.evaluate(&subs), Ok(7.0));
//! ```

mod display;
mod error;
mod polynomial;
mod substitution;
mod term;
mod variable;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use display::format_number;
pub use error::PolyError;
pub use polynomial::Polynomial;
pub use substitution::Substitutions;
pub use term::{Subexpression, Term};
pub use variable::Variable;
