#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a vector of polynomial terms
///
///# Example
/// ```
/// use RustedPolyCalc::polynomial::parse_poly::parse_polynomial;
/// use RustedPolyCalc::polynomial::poly_algebra::Polynomial;
/// let input = "+2.0x^1 +3.0x^0";
/// let terms = parse_polynomial(input).unwrap();
/// let polynomial = Polynomial::new(terms);
/// println!(" parsed polynomial {}", polynomial);
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_poly;
///____________________________________________________________________________________________________________________________
/// # Polynomial algebra
/// a module
/// 1) wraps parsed terms into a polynomial
/// 2) adds, subtracts and multiplies polynomials merging terms with equal exponents
/// 3) turns a polynomial back into a string for printing and control results
///# Example
/// ```
/// use RustedPolyCalc::polynomial::poly_algebra::{Operation, Polynomial};
/// let first = Polynomial::parse("+2.0x^1 +3.0x^0").unwrap();
/// let second = Polynomial::parse("+1.0x^1").unwrap();
/// let sum = first.add(&second).unwrap();
/// assert_eq!(sum.to_display_string(), "+3.0x^1 +3.0x^0");
/// let product = first.combine(Operation::Multiply, &second).unwrap();
/// assert_eq!(product.to_string(), "+2.0x^2 +3.0x^1");
///  ```
/// ________________________________________________________________________________________________________________________________________________
pub mod poly_algebra;
/// single term and term arithmetic
pub mod term;
