//! Discovery of the Xcode project the templates are generated for.

use crate::constants::{PROJECT_MARKER, WORKSPACE_EXTENSION};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// The single project descriptor found in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Descriptor name without its extension, e.g. `Foo` for `Foo.xcodeproj`
    pub name: String,
    /// Project name with the workspace extension, e.g. `Foo.xcworkspace`
    pub workspace_name: String,
}

impl Project {
    /// Builds the project from a descriptor entry name.
    pub fn from_descriptor(file_name: &str) -> Self {
        let name = Path::new(file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let workspace_name = format!("{name}.{WORKSPACE_EXTENSION}");
        Self { name, workspace_name }
    }
}

/// Outcome of scanning a directory for project descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum Discovery {
    /// Exactly one descriptor was found
    Found(Project),
    /// No entry matched the marker
    Missing,
    /// Several entries matched; names are sorted
    Ambiguous(Vec<String>),
}

/// Scans the direct entries of `dir` for names containing the project marker.
///
/// # Errors
/// * `Error::IoError` if the directory cannot be listed
pub fn discover_project<P: AsRef<Path>>(dir: P) -> Result<Discovery> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(dir.as_ref()).map_err(Error::IoError)? {
        let file_name = entry.map_err(Error::IoError)?.file_name();
        let file_name = file_name.to_string_lossy();
        if file_name.contains(PROJECT_MARKER) {
            matches.push(file_name.into_owned());
        }
    }
    matches.sort();
    debug!("Project descriptors in '{}': {:?}", dir.as_ref().display(), matches);

    Ok(match matches.len() {
        0 => Discovery::Missing,
        1 => Discovery::Found(Project::from_descriptor(&matches[0])),
        _ => Discovery::Ambiguous(matches),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_descriptor() {
        let project = Project::from_descriptor("MyApp.xcodeproj");
        assert_eq!(project.name, "MyApp");
        assert_eq!(project.workspace_name, "MyApp.xcworkspace");
    }

    #[test]
    fn test_from_descriptor_strips_last_extension_only() {
        let project = Project::from_descriptor("My.App.xcodeproj");
        assert_eq!(project.name, "My.App");
        assert_eq!(project.workspace_name, "My.App.xcworkspace");
    }
}
