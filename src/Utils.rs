//! different utility modules used throughout the project
/// calculator settings read from a TOML document
pub mod config;
/// console and file logging set up from the calculator settings
pub mod logger;
