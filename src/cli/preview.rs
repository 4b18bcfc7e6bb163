use clap::Args;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::models::cadence::Cadence;
use crate::models::directory_name::DirectoryName;
use crate::services::listing::{format_entries, split_columns, COLUMN_HEIGHT};
use crate::services::name_generator::generate;
use crate::utils::error::Result;

use super::sequence::{ResolvedSequence, SequenceArgs};

/// Show the directories a sequence would create, without touching the disk
#[derive(Debug, Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for preview command
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub cadence: Cadence,
    pub first_name: String,
    pub count: usize,
    pub directories: Vec<DirectoryName>,
}

impl PreviewCommand {
    /// Execute the preview command
    pub fn run(&self) -> Result<()> {
        let resolved = self.sequence.resolve()?;
        let names = generate(&resolved.request)?;

        if self.json {
            let response = PreviewResponse {
                cadence: resolved.request.cadence,
                first_name: resolved.first_name(),
                count: names.len(),
                directories: names,
            };
            print_json(&response)
        } else {
            print_listing(&resolved, &names);
            Ok(())
        }
    }
}

/// Print the stem and the numbered list, split into display columns
pub(crate) fn print_listing(resolved: &ResolvedSequence, names: &[DirectoryName]) {
    println!("First directory name: {}", resolved.first_name());
    println!("Directories to create in {}:", resolved.request.root_path.display());

    let lines = format_entries(names);
    for (column, entries) in split_columns(&lines, COLUMN_HEIGHT).iter().enumerate() {
        if column > 0 {
            println!();
        }
        for line in entries {
            println!("{line}");
        }
    }
}

pub(crate) fn print_json<T: Serialize>(response: &T) -> Result<()> {
    write_json(&mut io::stdout().lock(), response)
}

/// Pretty JSON followed by a newline; failures surface as I/O errors
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, response: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, response).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
