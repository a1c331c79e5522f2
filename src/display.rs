//! Display formatting for terms and polynomials

use crate::{Polynomial, Subexpression, Term};
use std::fmt;

/// Integral values below this magnitude are printed without a decimal point
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Numeric text used for coefficients and evaluation results
///
/// Integral values print as integers (`7`, `-3`), everything else uses the
/// shortest representation that round-trips (`2.5`, `-0.125`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < INTEGER_DISPLAY_LIMIT {
        // `as i64` also folds -0.0 into 0
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = self.coefficient();
        if self.power() == 0 {
            return write!(f, "{}", format_number(coefficient));
        }

        let coefficient_str = if coefficient == 1.0 {
            String::new()
        } else {
            format_number(coefficient)
        };

        let sub_str = match self.subexpression() {
            Subexpression::Variable(var) => var.to_string(),
            Subexpression::Nested(poly) if coefficient != 1.0 => format!("({})", poly),
            Subexpression::Nested(poly) => poly.to_string(),
            Subexpression::Constant => String::new(),
        };

        if self.power() == 1 {
            write!(f, "{}{}", coefficient_str, sub_str)
        } else {
            write!(f, "{}{}^{}", coefficient_str, sub_str, self.power())
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.iter().enumerate() {
            // Negative coefficients carry their own sign
            if i > 0 && term.coefficient() >= 0.0 {
                write!(f, "+")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
