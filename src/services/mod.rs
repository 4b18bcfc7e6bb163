// Services module for sequence generation and directory creation
pub mod directory_writer;
pub mod listing;
pub mod name_generator;

pub use directory_writer::create_all;
pub use name_generator::generate;
