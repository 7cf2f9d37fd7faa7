//! Command-line interface implementation for fastlane-setup.
//! Provides argument parsing using clap.

use clap::Parser;

/// Command-line arguments structure for fastlane-setup.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "fastlane-setup: drops fastlane, CI and lint templates into a new Xcode project",
    long_about = None,
    args_override_self = true
)]
pub struct Args {
    /// Read templates from the directory containing this executable
    /// instead of the remote template repository
    #[arg(long)]
    pub local: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Additional arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Whether templates come from the local tree.
    ///
    /// `--local` counts wherever it appears, including after ignored arguments.
    pub fn use_local(&self) -> bool {
        self.local || self.rest.iter().any(|arg| arg == "--local")
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * Through clap's default handling for `--help`, `--version` and malformed input
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
