//! Materializes manifest entries: read, substitute, write.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    environment::Environment,
    error::{Error, Result},
    loader::interface::TemplateReader,
    manifest::TemplateFile,
};

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::WriteError { target: path.to_path_buf(), source: e })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes())
        .map_err(|e| Error::WriteError { target: path.to_path_buf(), source: e })
}

/// Writes template files under an output root.
pub struct Processor<'a> {
    reader: &'a dyn TemplateReader,
    environment: &'a Environment,
    output_root: PathBuf,
}

impl<'a> Processor<'a> {
    pub fn new<P: AsRef<Path>>(
        reader: &'a dyn TemplateReader,
        environment: &'a Environment,
        output_root: P,
    ) -> Self {
        Self { reader, environment, output_root: output_root.as_ref().to_path_buf() }
    }

    /// Writes a single manifest entry and returns its target path relative
    /// to the output root.
    ///
    /// Missing parent directories of the target are created before the
    /// source is read. An existing target is overwritten.
    ///
    /// # Errors
    /// Any read, directory creation or write failure. Nothing written by
    /// earlier calls is undone.
    pub fn process(&self, file: &TemplateFile) -> Result<PathBuf> {
        let target = file.target_path(self.environment);
        let dest = self.output_root.join(&target);

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(&self.output_root.join(parent))?;
        }

        debug!("Processing source file: {}", self.reader.describe(file.source));
        let content = self.reader.read(file.source)?;

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Replacing {} placeholder(s) in {}",
                self.environment.occurrences(&content),
                file.source
            );
        }
        let rendered = self.environment.apply(&content);

        debug!("Writing file: {}", dest.display());
        write_file(&dest, &rendered)?;

        Ok(target)
    }

    /// Writes every entry in order, stopping at the first failure.
    ///
    /// `on_written` is called with each target right after it is written.
    pub fn process_all<F>(&self, files: &[TemplateFile], mut on_written: F) -> Result<()>
    where
        F: FnMut(&Path),
    {
        for file in files {
            let target = self.process(file)?;
            on_written(target.as_path());
        }
        Ok(())
    }
}
