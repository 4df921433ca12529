use std::path::PathBuf;
use anyhow::{anyhow, Result};
use simplelog::LevelFilter;

const DEFAULT_COURSES_FILE: &str = "courses.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub courses_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub contact_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Settings {
    // Reads settings from the process environment, call after `dotenv()`.
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let courses_file = non_empty("GPA_COURSES_FILE").unwrap_or_else(|| DEFAULT_COURSES_FILE.to_string());
        let log_level = match non_empty("LOG_LEVEL") {
            Some(level) => parse_level(&level)?,
            None => LevelFilter::Info,
        };

        Ok(Settings {
            courses_file: PathBuf::from(courses_file),
            output_file: non_empty("GPA_OUTPUT_FILE").map(PathBuf::from),
            contact_file: non_empty("CONTACT_FILE").map(PathBuf::from),
            log_level,
        })
    }
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(anyhow!("LOG_LEVEL must be one of off, error, warn, info, debug, trace (got `{}`)", other)),
    }
}
