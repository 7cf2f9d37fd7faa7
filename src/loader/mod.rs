//! Template source resolution and reading.
//! Templates are read either from the raw-content host of the template
//! repository or from a `templates/` tree next to the executable.

use crate::constants::{BRANCH, REMOTE_REPOSITORY};
use crate::error::Result;
use crate::loader::interface::TemplateReader;
use crate::loader::local::LocalReader;
use crate::loader::remote::RemoteReader;
use std::path::{Path, PathBuf};
use url::Url;

pub mod interface;
pub mod local;
pub mod remote;

/// Base location under which every template source is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRoot {
    /// Raw-content URL of a branch of the template repository
    Remote(Url),
    /// Local directory containing a `templates/` tree
    Local(PathBuf),
}

impl std::fmt::Display for SourceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRoot::Remote(url) => write!(f, "remote repository: '{url}'"),
            SourceRoot::Local(path) => write!(f, "local path: '{}'", path.display()),
        }
    }
}

impl SourceRoot {
    /// Root of the remote template repository at the given branch.
    ///
    /// The returned URL always ends with `/` so relative sources join under it.
    pub fn remote(branch: &str) -> Result<Self> {
        Ok(Self::Remote(Url::parse(&format!("{REMOTE_REPOSITORY}/{branch}/"))?))
    }

    /// Root derived from the invoking program's path.
    ///
    /// The directory part of `program` is used as is when absolute, and
    /// joined onto `cwd` otherwise. Nothing is checked on disk here; a bad
    /// root only shows up once a template read fails.
    pub fn local<P: AsRef<Path>, C: AsRef<Path>>(program: P, cwd: C) -> Self {
        let program_dir = program.as_ref().parent().unwrap_or_else(|| Path::new(""));
        if program_dir.is_absolute() {
            Self::Local(program_dir.to_path_buf())
        } else {
            Self::Local(cwd.as_ref().join(program_dir))
        }
    }

    /// Picks the local or remote root depending on the `--local` flag.
    pub fn resolve<P: AsRef<Path>, C: AsRef<Path>>(
        local: bool,
        program: P,
        cwd: C,
    ) -> Result<Self> {
        if local {
            Ok(Self::local(program, cwd))
        } else {
            Self::remote(BRANCH)
        }
    }
}

/// Returns the reader matching the given source root.
pub fn get_reader(root: SourceRoot) -> Result<Box<dyn TemplateReader>> {
    let reader: Box<dyn TemplateReader> = match root {
        SourceRoot::Remote(base) => Box::new(RemoteReader::new(base)?),
        SourceRoot::Local(path) => Box::new(LocalReader::new(path)),
    };
    Ok(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_root_display() {
        let local = SourceRoot::Local(PathBuf::from("/path/to/setup"));
        assert_eq!(format!("{local}"), "local path: '/path/to/setup'");

        let remote = SourceRoot::remote("main").unwrap();
        assert_eq!(
            format!("{remote}"),
            "remote repository: 'https://raw.githubusercontent.com/detroit-labs/fastlane-template/main/'"
        );
    }

    #[test]
    fn test_bare_program_name_resolves_to_cwd() {
        let root = SourceRoot::local("fastlane-setup", "/work/App");
        assert_eq!(root, SourceRoot::Local(PathBuf::from("/work/App")));
    }
}
