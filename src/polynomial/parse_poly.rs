//! a module turns a String like "+2.0x^3 - 1.5x^1 4.0x^0" into a vector of terms
//!# Example
//! ```
//! use RustedPolyCalc::polynomial::parse_poly::parse_polynomial;
//! let terms = parse_polynomial("+2.0x^3 - 1.5x^1 4.0x^0").unwrap();
//! assert_eq!(terms.len(), 3);
//! assert_eq!(terms[1].coefficient(), -1.5);
//! assert_eq!(terms[2].exponent(), 0);
//! ```
//
//   term token grammar
//   ______________________________________________________________
//   | sign      | one space | number        | marker | exponent   |
//   | + | - |'' |  optional | digits.digits |  x^    | digits     |
//   |___________|___________|_______________|________|____________|
//
// Tokens need no delimiter between them. The whole input is scanned for
// tokens; whatever is left after removing them must be whitespace.
use crate::polynomial::term::Term;
use log::{debug, warn};
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{map_res, opt, recognize},
    sequence::preceded,
};
use std::fmt;

/// Error types for polynomial parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NoTermsFound,
    UnrecognizedResidue(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::NoTermsFound => write!(f, "No terms found"),
            ParseError::UnrecognizedResidue(residue) => {
                write!(f, "Unrecognized character combination {}", residue)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses an optional sign followed by at most one whitespace character
pub fn parse_sign(input: &str) -> IResult<&str, Option<char>> {
    let (input, sign) = opt(one_of("+-")).parse(input)?;
    let (input, _) = opt(satisfy(char::is_whitespace)).parse(input)?;
    Ok((input, sign))
}

/// Parses an unsigned decimal with both integer and fractional digits, e.g. "12.50"
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(recognize((digit1, char('.'), digit1)), |number: &str| {
        number.parse::<f64>()
    })
    .parse(input)
}

/// Parses the "x^" marker and the exponent digits
pub fn parse_exponent(input: &str) -> IResult<&str, u32> {
    preceded(
        tag("x^"),
        map_res(digit1, |digits: &str| digits.parse::<u32>()),
    )
    .parse(input)
}

/// Parses one term token starting exactly at the beginning of `input`
pub fn parse_term_token(input: &str) -> IResult<&str, Term> {
    let (rest, (sign, number, exponent)) =
        (parse_sign, parse_number, parse_exponent).parse(input)?;
    let coefficient = if sign == Some('-') { -number } else { number };
    Ok((rest, Term::new(coefficient, exponent)))
}

/// Finds all non-overlapping term tokens in `expression`, left to right.
/// Returns every matched substring together with the term it encodes.
pub fn scan_term_tokens(expression: &str) -> Vec<(&str, Term)> {
    let mut tokens = Vec::new();
    let mut position = 0;
    while position < expression.len() {
        let rest = &expression[position..];
        match parse_term_token(rest) {
            Ok((remaining, term)) => {
                let consumed = rest.len() - remaining.len();
                tokens.push((&rest[..consumed], term));
                position += consumed;
            }
            Err(_) => {
                // step over one char, keeping `position` on a char boundary
                position += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    tokens
}

/// Parse polynomial terms from expression.
///
/// Fails with `ParseError::NoTermsFound` if the expression holds no term token, and with
/// `ParseError::UnrecognizedResidue` if anything but whitespace is left once every token
/// has been taken out.
pub fn parse_polynomial(expression: &str) -> Result<Vec<Term>, ParseError> {
    let tokens = scan_term_tokens(expression);
    if tokens.is_empty() {
        warn!("no terms found in '{}'", expression);
        return Err(ParseError::NoTermsFound);
    }

    let mut working = expression.to_string();
    let mut terms = Vec::with_capacity(tokens.len());
    for (token, term) in tokens {
        debug!("term token '{}' parsed as {}", token, term);
        working = working.replacen(token, "", 1);
        terms.push(term);
    }

    let residue = working.trim();
    if !residue.is_empty() {
        warn!("unparsed residue '{}' in '{}'", residue, expression);
        return Err(ParseError::UnrecognizedResidue(residue.to_string()));
    }
    Ok(terms)
}
