//! Error types for the Passmith library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PassmithError`] enum. Validation problems with seed data (bad date
//! components, blank words) are reported as typed variants so that callers
//! can tell them apart from I/O failures.
//!
//! # Examples
//!
//! ```
//! use passmith::error::{PassmithError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PassmithError::invalid_config("table key must be a letter"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Passmith operations.
#[derive(Error, Debug)]
pub enum PassmithError {
    /// I/O errors (output sink, seed files, prompts)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date component that is not 1 or 2 ASCII digits.
    #[error("Invalid date component '{component}': {reason}")]
    InvalidDateComponent { component: String, reason: String },

    /// No seed words were supplied.
    #[error("No seed words supplied")]
    EmptySeedInput,

    /// A seed word that is blank after trimming.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Configuration errors (substitution table, special characters, limits)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A word whose estimated variant count exceeds the configured guard.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Interactive input gave up after repeated invalid answers.
    #[error("Input aborted: {0}")]
    InputAborted(String),

    /// Worker thread pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PassmithError.
pub type Result<T> = std::result::Result<T, PassmithError>;

impl PassmithError {
    /// Create a new invalid date component error.
    pub fn invalid_date_component<C: Into<String>, R: Into<String>>(component: C, reason: R) -> Self {
        PassmithError::InvalidDateComponent {
            component: component.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid seed error.
    pub fn invalid_seed<S: Into<String>>(msg: S) -> Self {
        PassmithError::InvalidSeed(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PassmithError::InvalidConfig(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        PassmithError::ResourceExhausted(msg.into())
    }

    /// Create a new input aborted error.
    pub fn input_aborted<S: Into<String>>(msg: S) -> Self {
        PassmithError::InputAborted(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        PassmithError::ThreadPool(msg.into())
    }

    /// Whether this error comes from invalid seed data rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PassmithError::InvalidDateComponent { .. }
                | PassmithError::EmptySeedInput
                | PassmithError::InvalidSeed(_)
                | PassmithError::InvalidConfig(_)
        )
    }

    /// Process exit status: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PassmithError::invalid_date_component("123", "must be 1 or 2 digits");
        assert_eq!(
            error.to_string(),
            "Invalid date component '123': must be 1 or 2 digits"
        );

        let error = PassmithError::invalid_config("bad key");
        assert_eq!(error.to_string(), "Invalid configuration: bad key");

        let error = PassmithError::EmptySeedInput;
        assert_eq!(error.to_string(), "No seed words supplied");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let passmith_error = PassmithError::from(io_error);

        match passmith_error {
            PassmithError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_validation_classification() {
        assert!(PassmithError::invalid_date_component("ab", "not numeric").is_validation());
        assert!(PassmithError::invalid_seed("blank").is_validation());
        assert!(!PassmithError::thread_pool("boom").is_validation());
        assert!(!PassmithError::resource_exhausted("too many").is_validation());
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(PassmithError::EmptySeedInput.exit_code(), 2);
        assert_eq!(PassmithError::invalid_config("cap").exit_code(), 2);
        assert_eq!(PassmithError::input_aborted("3 attempts").exit_code(), 1);
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(PassmithError::from(io_error).exit_code(), 1);
    }
}
