use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::models::cadence::Cadence;
use crate::models::directory_name::DirectoryName;
use crate::models::sequence_request::{SequenceRequest, YEAR_RANGE};
use crate::utils::error::{DatedirsError, Result};

/// Produce the ordered directory names for a request.
///
/// Pure computation: nothing touches the filesystem here.
pub fn generate(request: &SequenceRequest) -> Result<Vec<DirectoryName>> {
    if request.count == 0 {
        return Err(DatedirsError::ValidationError(
            "Sequence length must be at least 1".to_string(),
        ));
    }

    let names = match request.cadence {
        Cadence::Weekly => weekly(request, request.start_date()?)?,
        Cadence::Monthly => {
            request.check_month()?;
            monthly(request)
        }
    };

    debug!(
        cadence = %request.cadence,
        count = names.len(),
        root = %request.root_path.display(),
        "generated directory names"
    );
    Ok(names)
}

fn weekly(request: &SequenceRequest, start: NaiveDate) -> Result<Vec<DirectoryName>> {
    (0..request.count)
        .map(|week| -> Result<DirectoryName> {
            let date = start
                .checked_add_days(Days::new(7 * u64::from(week)))
                .filter(|date| YEAR_RANGE.contains(&date.year()))
                .ok_or(DatedirsError::DateOutOfRange { start, weeks: week })?;
            let leaf = format!("{}-{}", request.base_label, date.format("%Y-%m-%d"));
            Ok(DirectoryName::new(request.root_path.join(leaf)))
        })
        .collect()
}

// Entries are numbered 00.. rather than by calendar month.
fn monthly(request: &SequenceRequest) -> Vec<DirectoryName> {
    (0..request.count)
        .map(|index| {
            let leaf = format!("{}-{}-{:02}", request.base_label, request.start_year, index);
            DirectoryName::new(request.root_path.join(leaf))
        })
        .collect()
}
