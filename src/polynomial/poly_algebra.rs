//! # Polynomial Algebra
//!
//! `Polynomial` is an ordered vector of [`Term`]s. Addition and subtraction merge terms that
//! share an exponent and append the rest; multiplication distributes every pair of terms and
//! collects the products by repeated addition. All operations work on a copy of the left
//! operand and return a new polynomial.
//!
//! Duplicate exponents coming straight from the parser are kept as they are. Merging only
//! happens inside `add`, `subtract` and `multiply`.

use crate::polynomial::parse_poly::{ParseError, parse_polynomial};
use crate::polynomial::term::{ArithmeticError, Term};
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString};

/// Binary operations between two polynomials
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum_macros::Display, strum_macros::EnumMessage)]
pub enum Operation {
    #[strum(to_string = "+", message = "addition")]
    Add,
    #[strum(to_string = "-", message = "subtraction")]
    Subtract,
    #[strum(to_string = "*", message = "multiplication")]
    Multiply,
}

/// What happens to subtrahend terms that have no counterpart in the minuend.
/// `Literal` appends them unchanged, `Negate` appends them with flipped sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, strum_macros::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SubtractionMode {
    #[default]
    Literal,
    Negate,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new(terms: Vec<Term>) -> Self {
        Polynomial { terms }
    }

    /// parse text straight into a polynomial
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        Ok(Polynomial::new(parse_polynomial(expression)?))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains_exponent(&self, exponent: u32) -> bool {
        self.terms.iter().any(|term| term.exponent() == exponent)
    }

    /// position of the first term with the given exponent
    pub fn exponent_index(&self, exponent: u32) -> Option<usize> {
        self.terms
            .iter()
            .position(|term| term.exponent() == exponent)
    }

    // common part of add and subtract: merge like exponents, append the rest
    fn merge_with<M, U>(
        &self,
        other: &Polynomial,
        merge: M,
        unmatched: U,
    ) -> Result<Polynomial, ArithmeticError>
    where
        M: Fn(&Term, &Term) -> Result<Term, ArithmeticError>,
        U: Fn(&Term) -> Term,
    {
        let mut result = self.clone();
        for term in &other.terms {
            match result.exponent_index(term.exponent()) {
                Some(index) => {
                    debug!("merging x^{} at position {}", term.exponent(), index);
                    result.terms[index] = merge(&result.terms[index], term)?;
                }
                None => result.terms.push(unmatched(term)),
            }
        }
        Ok(result)
    }

    pub fn add(&self, other: &Polynomial) -> Result<Polynomial, ArithmeticError> {
        self.merge_with(other, Term::add, |term| *term)
    }

    /// Subtraction in `SubtractionMode::Literal`: unmatched terms of `other` are appended as-is.
    pub fn subtract(&self, other: &Polynomial) -> Result<Polynomial, ArithmeticError> {
        self.subtract_with(SubtractionMode::Literal, other)
    }

    pub fn subtract_with(
        &self,
        mode: SubtractionMode,
        other: &Polynomial,
    ) -> Result<Polynomial, ArithmeticError> {
        match mode {
            SubtractionMode::Literal => self.merge_with(other, Term::subtract, |term| *term),
            SubtractionMode::Negate => self.merge_with(other, Term::subtract, Term::negate),
        }
    }

    /// Full distribution: products are folded into the result pair by pair,
    /// outer loop over `self`, inner loop over `other`.
    pub fn multiply(&self, other: &Polynomial) -> Result<Polynomial, ArithmeticError> {
        let mut result = Polynomial::default();
        for first_term in &self.terms {
            for second_term in &other.terms {
                let product = Polynomial::new(vec![first_term.multiply(second_term)]);
                result = result.add(&product)?;
            }
        }
        Ok(result)
    }

    /// apply `operation` with `self` on the left and `other` on the right
    pub fn combine(
        &self,
        operation: Operation,
        other: &Polynomial,
    ) -> Result<Polynomial, ArithmeticError> {
        self.combine_with(operation, other, SubtractionMode::Literal)
    }

    pub fn combine_with(
        &self,
        operation: Operation,
        other: &Polynomial,
        mode: SubtractionMode,
    ) -> Result<Polynomial, ArithmeticError> {
        debug!("{} {} {}", self, operation, other);
        match operation {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract_with(mode, other),
            Operation::Multiply => self.multiply(other),
        }
    }

    pub fn to_display_string(&self) -> String {
        self.terms.iter().map(|term| term.to_string()).join(" ")
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s)
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Polynomial::new(terms)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}
