//! The fixed list of template files written into a project.

use crate::environment::Environment;
use std::path::PathBuf;

/// One template source and the path it is written to.
///
/// `target` is relative to the working directory and may contain placeholder
/// tokens, which are expanded with the same environment as the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub source: &'static str,
    pub target: &'static str,
}

impl TemplateFile {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    /// Target path with placeholders expanded.
    pub fn target_path(&self, environment: &Environment) -> PathBuf {
        PathBuf::from(environment.apply(self.target))
    }
}

/// Every file generated for a project, in the order it is written.
pub const MANIFEST: [TemplateFile; 16] = [
    TemplateFile::new("cocoapods/Podfile", "Podfile"),
    TemplateFile::new(
        "cocoapods/Settings.bundle/Root.plist",
        "__XCODE_PROJECT_NAME__/Resources/Settings.bundle/Root.plist",
    ),
    TemplateFile::new("fastlane/env", "fastlane/.env"),
    TemplateFile::new("fastlane/Fastfile", "fastlane/Fastfile"),
    TemplateFile::new("gems/Gemfile", "Gemfile"),
    TemplateFile::new("git/gitignore", ".gitignore"),
    TemplateFile::new("github/CODEOWNERS", ".github/CODEOWNERS"),
    TemplateFile::new(
        "github/ISSUE_TEMPLATE/bug_report.md",
        ".github/ISSUE_TEMPLATE/bug_report.md",
    ),
    TemplateFile::new(
        "github/ISSUE_TEMPLATE/feature_request.md",
        ".github/ISSUE_TEMPLATE/feature_request.md",
    ),
    TemplateFile::new("github/pull_request_template.md", ".github/pull_request_template.md"),
    TemplateFile::new("readme/README.md", "README.md"),
    TemplateFile::new("ruby/ruby-gemset", ".ruby-gemset"),
    TemplateFile::new("ruby/ruby-version", ".ruby-version"),
    TemplateFile::new("swiftformat/swiftformat", ".swiftformat"),
    TemplateFile::new("swiftformat/swift-version", ".swift-version"),
    TemplateFile::new("swiftlint/swiftlint.yml", ".swiftlint.yml"),
];
