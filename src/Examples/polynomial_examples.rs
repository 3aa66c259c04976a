// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::polynomial::parse_poly::parse_polynomial;
use crate::polynomial::poly_algebra::{Operation, Polynomial, SubtractionMode};
use crate::polynomial::term::Term;
use strum::IntoEnumIterator;

#[allow(dead_code)]
pub fn poly_examples(example: usize) {
    match example {
        0 => {
            // PARSING
            // terms may be glued together or separated by blanks, sign is optional
            let input = "+2.0x^3 - 1.5x^1 4.0x^0";
            let terms = parse_polynomial(input).unwrap();
            println!("{} parsed into terms {:?}", input, terms);
            let polynomial = Polynomial::new(terms);
            println!("rendered back: {}", polynomial);
            // the same in one step
            let polynomial: Polynomial = "+1.0x^2-1.0x^0".parse().unwrap();
            println!("parsed in one step: {}", polynomial);
        }
        1 => {
            // ADDITION AND SUBTRACTION
            let first = Polynomial::parse("+2.0x^1 +3.0x^0").unwrap();
            let second = Polynomial::parse("+1.0x^1 +4.0x^2").unwrap();
            println!("({}) + ({}) = {}", first, second, first.add(&second).unwrap());
            // unmatched terms of the subtrahend keep their sign unless Negate mode is chosen
            println!(
                "({}) - ({}) = {}  (literal)",
                first,
                second,
                first.subtract(&second).unwrap()
            );
            println!(
                "({}) - ({}) = {}  (negate)",
                first,
                second,
                first
                    .subtract_with(SubtractionMode::Negate, &second)
                    .unwrap()
            );
        }
        2 => {
            // MULTIPLICATION
            // (x + 1)(x - 1): every pair of terms is multiplied and like exponents are merged
            let first = Polynomial::parse("+1.0x^1 +1.0x^0").unwrap();
            let second = Polynomial::parse("+1.0x^1 -1.0x^0").unwrap();
            let product = first.multiply(&second).unwrap();
            println!("({}) * ({}) = {}", first, second, product);
            let power: Polynomial = (0..8).map(|i| Term::new(1.0, i)).collect();
            println!("({})^2 = {}", power, power.multiply(&power).unwrap());
        }
        3 => {
            // ALL OPERATIONS
            let first = Polynomial::parse("-3.5x^2 +0.5x^1").unwrap();
            let second = Polynomial::parse("+2.0x^2 +1.0x^0").unwrap();
            for operation in Operation::iter() {
                let result = first.combine(operation, &second).unwrap();
                println!("({}) {} ({}) = {}", first, operation, second, result);
            }
        }
        4 => {
            // ERRORS
            for input in ["", "+1.0x^2 extra", "+3x^1"] {
                match parse_polynomial(input) {
                    Ok(terms) => println!("'{}' -> {:?}", input, terms),
                    Err(err) => println!("'{}' -> ERROR: {}", input, err),
                }
            }
            let mismatch = Term::new(1.0, 1).add(&Term::new(1.0, 2));
            println!("x^1 + x^2 as terms -> {:?}", mismatch);
        }
        _ => {
            println!("example {} not found", example);
        }
    }
}
