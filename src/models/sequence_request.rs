use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::models::cadence::Cadence;
use crate::utils::error::{DatedirsError, Result};

/// Everything needed to generate one sequence of directory names.
///
/// Built fresh from user input for every preview or write and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRequest {
    /// Text placed before the date part of every name
    pub base_label: String,
    pub start_year: i32,
    /// 1-12
    pub start_month: u32,
    /// 1-31; ignored for monthly sequences
    pub start_day: u32,
    pub cadence: Cadence,
    /// Number of entries to generate, at least 1
    pub count: u32,
    /// Directory the sequence is created in
    pub root_path: PathBuf,
}

/// Years that format as four-digit `YYYY`
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

impl SequenceRequest {
    /// Resolve the start date, failing when it is not on the calendar
    /// or falls outside years 1-9999
    pub fn start_date(&self) -> Result<NaiveDate> {
        if !YEAR_RANGE.contains(&self.start_year) {
            return Err(DatedirsError::InvalidDate {
                year: self.start_year,
                month: self.start_month,
                day: self.start_day,
            });
        }

        NaiveDate::from_ymd_opt(self.start_year, self.start_month, self.start_day).ok_or(
            DatedirsError::InvalidDate {
                year: self.start_year,
                month: self.start_month,
                day: self.start_day,
            },
        )
    }

    /// Month range check used by monthly sequences, where the day is ignored
    pub fn check_month(&self) -> Result<()> {
        if (1..=12).contains(&self.start_month) {
            Ok(())
        } else {
            Err(DatedirsError::InvalidDate {
                year: self.start_year,
                month: self.start_month,
                day: self.start_day,
            })
        }
    }
}
