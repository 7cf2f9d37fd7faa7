//! Error handling for fastlane-setup.
//! Defines the error type shared by every stage of the pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for fastlane-setup operations.
///
/// Every variant is fatal: the run stops at the first one and nothing that
/// was already written is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A template source could not be read from the local template tree
    #[error("Cannot read template '{location}': {source}.")]
    TemplateReadError {
        location: String,
        #[source]
        source: io::Error,
    },

    /// A destination file or one of its parent directories could not be written
    #[error("Cannot write '{}': {source}.", .target.display())]
    WriteError {
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTTP transport failed before a response was received
    #[error("HTTP error: {0}.")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Fetching '{url}' failed with status {status}.")]
    HttpStatusError { url: String, status: reqwest::StatusCode },

    /// Template content is not valid UTF-8
    #[error("Template '{location}' is not valid UTF-8: {source}.")]
    EncodingError {
        location: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The remote base location could not be turned into a URL
    #[error("Invalid template URL: {0}.")]
    UrlError(#[from] url::ParseError),

    /// The placeholder alternation could not be compiled
    #[error("Placeholder pattern error: {0}.")]
    PatternError(#[from] regex::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
