// Utilities around the core: file-driven batch runs

pub mod batch;

pub use batch::{run_file, run_reader, BatchConfig, BatchError, BatchReport};
