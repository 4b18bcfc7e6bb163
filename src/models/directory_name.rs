use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Length of a `YYYY-MM-DD` suffix
const ISO_DATE_LEN: usize = 10;

/// One generated directory path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryName(PathBuf);

impl DirectoryName {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Parse the trailing `YYYY-MM-DD` of a weekly entry's final component
    pub fn iso_date_suffix(&self) -> Option<NaiveDate> {
        let file_name = self.0.file_name()?.to_str()?;
        let split = file_name.len().checked_sub(ISO_DATE_LEN)?;
        let suffix = file_name.get(split..)?;
        NaiveDate::parse_from_str(suffix, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for DirectoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for DirectoryName {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
