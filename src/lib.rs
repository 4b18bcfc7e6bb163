// datedirs - dated directory sequences
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::cadence::Cadence;
pub use models::directory_name::DirectoryName;
pub use models::sequence_request::SequenceRequest;
pub use services::{create_all, generate};
pub use utils::error::{DatedirsError, Result};
