#![allow(non_snake_case)]
use RustedPolyCalc::Utils::config::CalculatorConfig;
use RustedPolyCalc::Utils::logger::init_logger;
use RustedPolyCalc::calculator::{CalcError, Calculator};
use std::io;

// usage: polycalc [config.toml]
fn run() -> Result<(), CalcError> {
    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::from_file(path)?,
        None => CalculatorConfig::default(),
    };
    init_logger(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut calculator = Calculator::new(stdin.lock(), stdout.lock(), config);
    calculator.run()
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Program: ERROR: {}", err);
        std::process::exit(1);
    }
}
