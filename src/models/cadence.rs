use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a directory sequence advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One directory per week, named by ISO date
    #[default]
    Weekly,
    /// One directory per month, numbered from 00
    Monthly,
}

impl Cadence {
    /// Largest sequence the form accepts for this cadence (one year)
    pub const fn max_count(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::Monthly => 12,
        }
    }

    /// Whether the start day takes part in naming
    pub const fn uses_day(self) -> bool {
        matches!(self, Self::Weekly)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            other => Err(format!("Unknown cadence '{other}' (expected 'weekly' or 'monthly')")),
        }
    }
}
