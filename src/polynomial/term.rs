//! # Term
//!
//! A single `coefficient * x^exponent` pair and the arithmetic defined between two of them.
//! Terms are plain `Copy` values: every operation returns a fresh term and leaves
//! the operands untouched.

use std::fmt;

/// Error produced by term arithmetic that requires equal exponents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    ExponentMismatch { left: u32, right: u32 },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::ExponentMismatch { left, right } => write!(
                f,
                "Can not combine two terms with different exponents: x^{} and x^{}",
                left, right
            ),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// One term of a single-variable polynomial.
///
/// # Examples
/// ```
/// use RustedPolyCalc::polynomial::term::Term;
/// let a = Term::new(2.0, 1);
/// let b = Term::new(3.0, 2);
/// let product = a * b;
/// assert_eq!(product, Term::new(6.0, 3));
/// assert_eq!(product.to_string(), "+6.0x^3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    coefficient: f64,
    exponent: u32,
}

impl Term {
    pub fn new(coefficient: f64, exponent: u32) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    fn check_exponents(&self, other: &Term) -> Result<(), ArithmeticError> {
        if self.exponent != other.exponent {
            return Err(ArithmeticError::ExponentMismatch {
                left: self.exponent,
                right: other.exponent,
            });
        }
        Ok(())
    }

    /// sum of two terms with the same exponent
    pub fn add(&self, other: &Term) -> Result<Term, ArithmeticError> {
        self.check_exponents(other)?;
        Ok(Term::new(self.coefficient + other.coefficient, self.exponent))
    }

    /// difference of two terms with the same exponent
    pub fn subtract(&self, other: &Term) -> Result<Term, ArithmeticError> {
        self.check_exponents(other)?;
        Ok(Term::new(self.coefficient - other.coefficient, self.exponent))
    }

    /// product of two terms, any exponents. The exponent sum saturates at `u32::MAX`.
    pub fn multiply(&self, other: &Term) -> Term {
        Term::new(
            self.coefficient * other.coefficient,
            self.exponent.saturating_add(other.exponent),
        )
    }

    pub fn negate(&self) -> Term {
        Term::new(-self.coefficient, self.exponent)
    }

    // f64 Display drops the fractional part of whole numbers ("3"), keep it ("3.0")
    fn coefficient_text(&self) -> String {
        let text = self.coefficient.to_string();
        if text.contains('.') || !self.coefficient.is_finite() {
            text
        } else {
            format!("{}.0", text)
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.coefficient.is_sign_negative() {
            ""
        } else {
            "+"
        };
        write!(f, "{}{}x^{}", sign, self.coefficient_text(), self.exponent)
    }
}

impl std::ops::Mul for Term {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl std::ops::Neg for Term {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_same_exponent() {
        let sum = Term::new(1.5, 3).add(&Term::new(2.25, 3)).unwrap();
        assert_relative_eq!(sum.coefficient(), 3.75);
        assert_eq!(sum.exponent(), 3);
    }

    #[test]
    fn test_add_is_commutative_on_coefficients() {
        let a = Term::new(0.1, 2);
        let b = Term::new(-7.3, 2);
        assert_relative_eq!(
            a.add(&b).unwrap().coefficient(),
            b.add(&a).unwrap().coefficient()
        );
    }

    #[test]
    fn test_subtract_same_exponent() {
        let diff = Term::new(5.0, 0).subtract(&Term::new(7.5, 0)).unwrap();
        assert_relative_eq!(diff.coefficient(), -2.5);
        assert_eq!(diff.exponent(), 0);
    }

    #[test]
    fn test_exponent_mismatch() {
        let a = Term::new(1.0, 1);
        let b = Term::new(1.0, 2);
        assert_eq!(
            a.add(&b),
            Err(ArithmeticError::ExponentMismatch { left: 1, right: 2 })
        );
        assert_eq!(
            a.subtract(&b),
            Err(ArithmeticError::ExponentMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_multiply_any_exponents() {
        let product = Term::new(-2.0, 4).multiply(&Term::new(1.5, 7));
        assert_relative_eq!(product.coefficient(), -3.0);
        assert_eq!(product.exponent(), 11);
        assert_eq!(Term::new(-2.0, 4) * Term::new(1.5, 7), product);
    }

    #[test]
    fn test_multiply_saturates_exponent() {
        let product = Term::new(1.0, u32::MAX) * Term::new(1.0, 1);
        assert_eq!(product.exponent(), u32::MAX);
    }

    #[test]
    fn test_operands_untouched() {
        let a = Term::new(2.0, 1);
        let b = Term::new(3.0, 1);
        let _ = a.add(&b).unwrap();
        let _ = a * b;
        assert_eq!(a, Term::new(2.0, 1));
        assert_eq!(b, Term::new(3.0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::new(3.5, 2).to_string(), "+3.5x^2");
        assert_eq!(Term::new(3.0, 0).to_string(), "+3.0x^0");
        assert_eq!(Term::new(-2.25, 10).to_string(), "-2.25x^10");
        assert_eq!(Term::new(0.0, 1).to_string(), "+0.0x^1");
        assert_eq!(Term::new(-0.0, 1).to_string(), "-0.0x^1");
    }

    #[test]
    fn test_negate() {
        assert_eq!(-Term::new(4.0, 2), Term::new(-4.0, 2));
        assert_eq!(Term::new(-1.0, 0).negate(), Term::new(1.0, 0));
    }

    #[test]
    fn test_error_message() {
        let err = ArithmeticError::ExponentMismatch { left: 1, right: 2 };
        assert!(err.to_string().contains("different exponents"));
    }
}
