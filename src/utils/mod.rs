// Shared utilities: errors, configuration, validation, logging
pub mod config;
pub mod error;
pub mod logging;
pub mod validation;
