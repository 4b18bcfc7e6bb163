// Models module for data structures
pub mod cadence;
pub mod defaults;
pub mod directory_name;
pub mod sequence_request;
