use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::models::cadence::Cadence;
use crate::models::sequence_request::SequenceRequest;
use crate::services::listing::{first_name_stem, TypedDate};
use crate::utils::config::ConfigParser;
use crate::utils::error::Result;
use crate::utils::validation::{parse_digits, parse_year, validate_count, validate_label};

/// Options describing one directory sequence, shared by `preview` and `write`
#[derive(Debug, Clone, Default, Args)]
pub struct SequenceArgs {
    /// Text placed before the date in every directory name
    #[arg(long)]
    pub label: Option<String>,

    /// Start year (digits only)
    #[arg(long)]
    pub year: Option<String>,

    /// Start month, 1-12 (digits only)
    #[arg(long)]
    pub month: Option<String>,

    /// Start day, 1-31 (digits only; ignored for monthly sequences)
    #[arg(long)]
    pub day: Option<String>,

    /// Advance by week or by month
    #[arg(long, value_name = "weekly|monthly")]
    pub cadence: Option<Cadence>,

    /// Number of directories (1-52 weekly, 1-12 monthly)
    #[arg(long)]
    pub count: Option<u32>,

    /// Directory the sequence is created in (default: system temp directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Read defaults from this TOML file instead of the user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// A validated request plus the date text it was built from
#[derive(Debug, Clone)]
pub struct ResolvedSequence {
    pub request: SequenceRequest,
    pub typed: TypedDate,
}

impl ResolvedSequence {
    pub fn first_name(&self) -> String {
        first_name_stem(&self.request.base_label, self.request.cadence, &self.typed)
    }
}

impl SequenceArgs {
    /// Build the request from the given options, falling back to defaults
    pub fn resolve(&self) -> Result<ResolvedSequence> {
        let defaults = ConfigParser::resolve(self.config.as_deref())?;

        let base_label = self.label.clone().unwrap_or_else(|| defaults.label.clone());
        validate_label(&base_label)?;

        let cadence = self.cadence.unwrap_or(defaults.cadence);

        let year_text = self.year.clone().unwrap_or_else(|| defaults.year.to_string());
        let start_year = parse_year(&year_text)?;

        let month_text = self.month.clone().unwrap_or_else(|| defaults.month.to_string());
        let start_month = parse_digits("Month", &month_text)?;

        let (day_text, start_day) = match &self.day {
            Some(value) if cadence.uses_day() => (value.clone(), parse_digits("Day", value)?),
            Some(_) => {
                debug!(%cadence, "ignoring --day");
                (defaults.day.to_string(), defaults.day)
            }
            None => (defaults.day.to_string(), defaults.day),
        };

        let count = self.count.unwrap_or_else(|| defaults.count_for(cadence));
        validate_count(count, cadence)?;

        let root_path = self.root.clone().unwrap_or_else(|| defaults.root_or_temp());

        Ok(ResolvedSequence {
            request: SequenceRequest {
                base_label,
                start_year,
                start_month,
                start_day,
                cadence,
                count,
                root_path,
            },
            typed: TypedDate {
                year: year_text,
                month: month_text,
                day: day_text,
            },
        })
    }
}
