use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::cadence::Cadence;

/// Starting values for the sequence form, optionally read from datedirs.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub cadence: Cadence,
    /// Entries generated for a weekly sequence when no count is given
    pub weekly_count: u32,
    /// Entries generated for a monthly sequence when no count is given
    pub monthly_count: u32,
    /// Target directory; the system temp directory when unset
    pub root: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            label: "Default".to_string(),
            year: 2020,
            month: 1,
            day: 1,
            cadence: Cadence::Weekly,
            weekly_count: Cadence::Weekly.max_count(),
            monthly_count: Cadence::Monthly.max_count(),
            root: None,
        }
    }
}

impl Defaults {
    pub const fn count_for(&self, cadence: Cadence) -> u32 {
        match cadence {
            Cadence::Weekly => self.weekly_count,
            Cadence::Monthly => self.monthly_count,
        }
    }

    pub fn root_or_temp(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(std::env::temp_dir)
    }
}
