use crate::error::Result;

/// Trait for reading template sources relative to a source root.
pub trait TemplateReader {
    /// Reads the whole template as UTF-8 text.
    ///
    /// # Arguments
    /// * `source` - Path of the template relative to the `templates/` directory
    ///
    /// # Returns
    /// * `Result<String>` - Template content
    fn read(&self, source: &str) -> Result<String>;

    /// Human readable location of a template, used in log output.
    fn describe(&self, source: &str) -> String;
}
