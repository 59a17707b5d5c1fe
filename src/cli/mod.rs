//! Command Line Interface for Passmith.

pub mod args;
pub mod commands;
pub mod output;
pub mod prompt;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
