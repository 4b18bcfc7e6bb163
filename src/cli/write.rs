use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::directory_name::DirectoryName;
use crate::services::directory_writer::create_all;
use crate::services::name_generator::generate;
use crate::utils::error::Result;

use super::preview::{print_json, print_listing};
use super::sequence::SequenceArgs;

/// Generate a sequence and create its directories
#[derive(Debug, Args)]
pub struct WriteCommand {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for write command
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteResponse {
    pub status: String,
    pub created: usize,
    pub directories: Vec<DirectoryName>,
}

impl WriteCommand {
    /// Execute the write command
    pub fn run(&self) -> Result<()> {
        let resolved = self.sequence.resolve()?;
        let request = &resolved.request;
        let names = generate(request)?;

        if !self.json {
            print_listing(&resolved, &names);
        }

        info!(root = %request.root_path.display(), count = names.len(), "writing directory sequence");
        let created = create_all(&names)?;

        if self.json {
            let response = WriteResponse {
                status: "success".to_string(),
                created,
                directories: names,
            };
            print_json(&response)
        } else {
            println!(
                "\nCreated {} director{} in {}",
                created,
                if created == 1 { "y" } else { "ies" },
                request.root_path.display()
            );
            Ok(())
        }
    }
}
