// Input validation for the sequence form

use regex::Regex;
use std::sync::OnceLock;

use crate::models::cadence::Cadence;
use crate::utils::error::{DatedirsError, Result};

fn digits_regex() -> &'static Regex {
    static DIGITS_RE: OnceLock<Regex> = OnceLock::new();
    DIGITS_RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("digits regex should compile"))
}

/// Parse a date field that must consist of ASCII digits only
pub fn parse_digits(field: &str, value: &str) -> Result<u32> {
    if !digits_regex().is_match(value) {
        return Err(DatedirsError::ValidationError(format!(
            "{field} must contain digits only, got '{value}'"
        )));
    }

    value.parse::<u32>().map_err(|_| {
        DatedirsError::ValidationError(format!("{field} '{value}' is too large"))
    })
}

pub fn parse_year(value: &str) -> Result<i32> {
    let year = parse_digits("Year", value)?;
    i32::try_from(year)
        .map_err(|_| DatedirsError::ValidationError(format!("Year '{value}' is too large")))
}

/// Validate the text placed in front of every generated name
pub fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(DatedirsError::ValidationError(
            "Label cannot be empty.\n\nExample: datedirs preview --label Reports".to_string(),
        ));
    }

    if label.contains('/') || label.contains('\\') || label == "." || label == ".." {
        return Err(DatedirsError::ValidationError(format!(
            "Invalid label '{label}' - cannot contain path separators.\n\nUse --root to choose where the directories are created."
        )));
    }

    Ok(())
}

/// Sequence length must be between 1 and the cadence's maximum
pub fn validate_count(count: u32, cadence: Cadence) -> Result<()> {
    let max = cadence.max_count();
    if count == 0 || count > max {
        return Err(DatedirsError::ValidationError(format!(
            "A {cadence} sequence must have between 1 and {max} entries, got {count}"
        )));
    }
    Ok(())
}
