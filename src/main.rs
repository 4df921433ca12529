mod utils;
mod models;
use std::process::ExitCode;
use dotenv::dotenv;
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use crate::utils::config::Settings;
use crate::utils::contact::validate_contact;
use crate::utils::files::{load_contact, load_rows, write_result};
use crate::utils::gpa::compute_gpa_from_rows;
use crate::utils::report::{result_message, validation_message};

fn main() -> ExitCode {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    let settings = Settings::from_env();
    let level = settings.as_ref().map_or(LevelFilter::Info, |s| s.log_level);

    // Logs to the terminal with mixed output (both stdout and stderr) and automatic color support.
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rows = match load_rows(&settings.courses_file) {
        Ok(rows) => {
            info!("Loaded {} course rows from {}", rows.len(), settings.courses_file.display());
            rows
        },
        Err(e) => {
            error!("Error loading courses: {:#}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut status = ExitCode::SUCCESS;

    match compute_gpa_from_rows(&rows) {
        Ok(result) => {
            info!("GPA computed: {:.2} ({})", result.final_gpa, result.classification.label());
            println!("{}", result_message(&result));

            if let Some(path) = &settings.output_file {
                match write_result(path, &result) {
                    Ok(()) => info!("Result written to {}", path.display()),
                    Err(e) => {
                        error!("Error writing result: {:#}", e);
                        status = ExitCode::FAILURE;
                    },
                }
            }
        },
        Err(e) => {
            warn!("GPA not computed: {}", e);
            println!("{}", validation_message(&e));
            status = ExitCode::FAILURE;
        },
    }

    // The contact form is optional, only checked when a file is configured.
    if let Some(path) = &settings.contact_file {
        match load_contact(path).map(|form| validate_contact(&form)) {
            Ok(Ok(())) => info!("Contact message is valid"),
            Ok(Err(errors)) => {
                for (field, message) in &errors.0 {
                    warn!("Contact {:?}: {}", field, message);
                }
                status = ExitCode::FAILURE;
            },
            Err(e) => {
                error!("Error loading contact message: {:#}", e);
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}
