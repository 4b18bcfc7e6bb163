// Common error types for datedirs

use std::path::PathBuf;

use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum DatedirsError {
    /// The supplied start date does not exist on the calendar
    #[error("Invalid date: {year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Weekly arithmetic left the representable date range
    #[error("Date out of range: {start} plus {weeks} weeks cannot be represented")]
    DateOutOfRange { start: NaiveDate, weeks: u32 },

    /// Creating one entry of the sequence failed; `index` is zero-based
    #[error("Failed to create directory #{} '{}': {source}", .index + 1, .path.display())]
    DirectoryCreation {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DatedirsError>;

/// Error presentation for the command line: message, optional hint, exit code
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_error(err: &DatedirsError) -> Self {
        let (hint, exit_code) = match err {
            DatedirsError::ValidationError(_) => (None, 2),
            DatedirsError::InvalidDate { .. } => (
                Some("Check the day against the length of the month (e.g. February has 28 or 29 days).".to_string()),
                3,
            ),
            DatedirsError::DateOutOfRange { .. } => (None, 3),
            DatedirsError::DirectoryCreation { index, .. } => (
                Some(if *index == 0 {
                    "No directories were created.".to_string()
                } else {
                    format!(
                        "The first {} director{} of the sequence {} left in place.",
                        index,
                        if *index == 1 { "y" } else { "ies" },
                        if *index == 1 { "was" } else { "were" },
                    )
                }),
                4,
            ),
            DatedirsError::ConfigError(_) => (None, 5),
            DatedirsError::IoError(_) => (None, 1),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
