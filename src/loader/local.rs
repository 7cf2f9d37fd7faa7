use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use crate::loader::interface::TemplateReader;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Reader for templates stored in a local `templates/` tree.
pub struct LocalReader {
    root: PathBuf,
}

impl LocalReader {
    /// Creates a new LocalReader rooted at the directory holding `templates/`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Full path of a template source.
    pub fn locate(&self, source: &str) -> PathBuf {
        self.root.join(TEMPLATES_DIR).join(source)
    }
}

impl TemplateReader for LocalReader {
    /// Reads a template from the local filesystem.
    ///
    /// # Errors
    /// * `Error::TemplateReadError` if the file is missing or unreadable
    /// * `Error::EncodingError` if the content is not valid UTF-8
    fn read(&self, source: &str) -> Result<String> {
        let path = self.locate(source);
        debug!("Reading '{}'.", path.display());

        let bytes = fs::read(&path).map_err(|e| Error::TemplateReadError {
            location: path.display().to_string(),
            source: e,
        })?;

        String::from_utf8(bytes).map_err(|e| Error::EncodingError {
            location: path.display().to_string(),
            source: e,
        })
    }

    fn describe(&self, source: &str) -> String {
        self.locate(source).display().to_string()
    }
}
