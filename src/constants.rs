//! Common constants used throughout fastlane-setup.

/// Branch of the template repository that remote templates are read from
pub const BRANCH: &str = "master";

/// Raw-content location of the template repository, without the branch
pub const REMOTE_REPOSITORY: &str =
    "https://raw.githubusercontent.com/detroit-labs/fastlane-template";

/// Directory under the source root that holds every template source
pub const TEMPLATES_DIR: &str = "templates";

/// Substring identifying the project descriptor in the working directory
pub const PROJECT_MARKER: &str = "xcodeproj";

/// Extension appended to the project name to form the workspace name
pub const WORKSPACE_EXTENSION: &str = "xcworkspace";

/// Printed when discovery does not find exactly one project descriptor
pub const DISCOVERY_MESSAGE: &str =
    "Either zero or too many xcodeprojs found, run this script on new projects only.";

pub const IOS_VERSION: &str = "12.0";
pub const IOS_DEVICE: &str = "iPhone X (12.4)";
pub const RUBY_VERSION: &str = "2.6.3";
pub const SWIFT_VERSION: &str = "5.0";
pub const XCODE_VERSION: &str = "10.3";
