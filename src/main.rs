//! fastlane-setup entry point.
//! Resolves the template source, discovers the project in the working
//! directory and writes every manifest entry in order.

use std::path::PathBuf;

use fastlane_setup::{
    cli::{get_args, Args},
    constants::DISCOVERY_MESSAGE,
    environment::Environment,
    error::{default_error_handler, Result},
    loader::{get_reader, SourceRoot},
    manifest::MANIFEST,
    processor::Processor,
    project::{discover_project, Discovery},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template source root
/// 2. Discovers the project descriptor, exiting with status 0 unless exactly one exists
/// 3. Builds the placeholder environment
/// 4. Writes each manifest entry in order
fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let program = std::env::args_os().next().map(PathBuf::from).unwrap_or_default();

    let source_root = SourceRoot::resolve(args.use_local(), &program, &cwd)?;
    log::debug!("Using templates from the {source_root}");

    let project = match discover_project(&cwd)? {
        Discovery::Found(project) => project,
        Discovery::Missing | Discovery::Ambiguous(_) => {
            // Usage guidance, not a failure: the tool only targets new projects.
            println!("{DISCOVERY_MESSAGE}");
            std::process::exit(0);
        }
    };
    log::debug!("Found project '{}' ({})", project.name, project.workspace_name);

    let environment = Environment::for_project(&project)?;
    let reader = get_reader(source_root)?;
    let processor = Processor::new(&*reader, &environment, &cwd);

    processor.process_all(&MANIFEST, |target| {
        println!("{} written to disk.", target.display());
    })?;

    println!("Files written.");
    Ok(())
}
