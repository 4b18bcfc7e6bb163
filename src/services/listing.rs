// Human-readable rendering of a generated sequence

use crate::models::cadence::Cadence;
use crate::models::directory_name::DirectoryName;

/// Lines per column when a listing is split for display
pub const COLUMN_HEIGHT: usize = 26;

/// Start date fields as the user typed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// The "first directory name" summary, built from the typed text.
///
/// Numbers keep whatever padding was typed, unlike the generated names.
pub fn first_name_stem(label: &str, cadence: Cadence, typed: &TypedDate) -> String {
    match cadence {
        Cadence::Weekly => format!("{label}-{}-{}-{}", typed.year, typed.month, typed.day),
        Cadence::Monthly => format!("{label}-{}-{}-", typed.year, typed.month),
    }
}

/// `" #1: /tmp/Proj-2020-01-01"`, marker right-aligned to three columns
pub fn format_entry(index: usize, name: &DirectoryName) -> String {
    format!("{:>3}: {}", format!("#{}", index + 1), name)
}

pub fn format_entries(names: &[DirectoryName]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| format_entry(index, name))
        .collect()
}

/// Split lines into columns of at most `height` lines each
pub fn split_columns(lines: &[String], height: usize) -> Vec<Vec<String>> {
    if height == 0 {
        return vec![lines.to_vec()];
    }
    lines.chunks(height).map(<[String]>::to_vec).collect()
}
