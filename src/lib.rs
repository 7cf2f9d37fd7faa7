//! fastlane-setup bootstraps a freshly created Xcode project.
//! It fetches a fixed set of template files, replaces placeholder tokens with
//! values derived from the project name and writes them into the project.

/// Command-line interface module
pub mod cli;

/// Fixed names, locations and placeholder values
pub mod constants;

/// Placeholder tokens and single-pass substitution
pub mod environment;

/// Error types and handling
pub mod error;

/// Template source roots and readers
/// Reads from the remote template repository or a local `templates/` tree
pub mod loader;

/// The fixed list of generated files
pub mod manifest;

/// Reading, substituting and writing template files
pub mod processor;

/// Discovery of the `.xcodeproj` in the working directory
pub mod project;
