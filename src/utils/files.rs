use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::to_string_pretty;
use crate::models::{ContactForm, GpaResult, RawCourseRow};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

// Reads the calculator rows, a JSON array of `{ name, credits, mark }` strings.
pub fn load_rows(path: &Path) -> Result<Vec<RawCourseRow>> {
    read_json(path)
}

pub fn load_contact(path: &Path) -> Result<ContactForm> {
    read_json(path)
}

pub fn write_result(path: &Path, result: &GpaResult) -> Result<()> {
    fs::write(path, to_string_pretty(result)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
