use crate::Utils::config::CalculatorConfig;
use chrono::Local;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;

/// name of the log file: the configured one or `polycalc_log_<date and time>.txt`
pub fn log_file_name(config: &CalculatorConfig) -> String {
    match &config.log_file {
        Some(name) => name.clone(),
        None => {
            let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
            format!("polycalc_log_{}.txt", date_and_time)
        }
    }
}

/// Initialize the logger based on current settings: console and/or file.
/// A logger that is already set up is left in place.
pub fn init_logger(config: &CalculatorConfig) -> std::io::Result<()> {
    let level = config.log_level;
    if level == LevelFilter::Off {
        return Ok(());
    }

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if config.log_to_console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    if config.log_to_file {
        let file = File::create(log_file_name(config))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
        info!("logging started with level {}", level);
    }
    Ok(())
}
