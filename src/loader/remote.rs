//! Reader for templates served over HTTPS by the raw-content host.

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use crate::loader::interface::TemplateReader;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Default timeout for template requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every template request
pub const USER_AGENT: &str = concat!("fastlane-setup/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for every template fetch of a run.
///
/// # Errors
/// Returns error if client construction fails
pub fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).timeout(timeout).build()?)
}

/// Reader for templates under a remote base URL.
pub struct RemoteReader {
    base: Url,
    client: Client,
}

impl RemoteReader {
    /// Creates a reader with the default client settings.
    pub fn new(base: Url) -> Result<Self> {
        Ok(Self::with_client(base, build_client(DEFAULT_TIMEOUT)?))
    }

    /// Creates a reader around an existing client.
    pub fn with_client(base: Url, client: Client) -> Self {
        Self { base, client }
    }

    /// Full URL of a template source.
    ///
    /// `base` is expected to end with `/`, otherwise its last segment is replaced.
    pub fn locate(&self, source: &str) -> Result<Url> {
        Ok(self.base.join(&format!("{TEMPLATES_DIR}/{source}"))?)
    }
}

impl TemplateReader for RemoteReader {
    /// Fetches a template with a blocking GET request.
    ///
    /// # Errors
    /// * `Error::HttpError` if the request cannot be completed
    /// * `Error::HttpStatusError` if the server answers with a non-success status
    /// * `Error::EncodingError` if the body is not valid UTF-8
    fn read(&self, source: &str) -> Result<String> {
        let url = self.locate(source)?;
        debug!("Fetching '{url}'.");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatusError { url: url.to_string(), status });
        }

        let body = response.bytes()?;
        String::from_utf8(body.to_vec())
            .map_err(|e| Error::EncodingError { location: url.to_string(), source: e })
    }

    fn describe(&self, source: &str) -> String {
        match self.locate(source) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{TEMPLATES_DIR}/{source}", self.base),
        }
    }
}
