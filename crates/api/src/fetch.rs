//! Downloading IGC content from a client-supplied url.

use paratick_core::error::CoreError;
use paratick_core::igc::{self, IgcHeaders};

/// Cap on downloaded IGC content. Header records sit in the first few KiB,
/// but real files carry their full B-record log.
const MAX_CONTENT_BYTES: u64 = 10 * 1024 * 1024;

/// HTTP client for retrieving track files.
pub struct IgcFetcher {
    client: reqwest::Client,
}

impl IgcFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Download the IGC file at `url` and extract its header fields.
    ///
    /// An unreachable source, a non-2xx answer, or content without a valid
    /// date record are all the client's problem (a bad track reference), so
    /// everything surfaces as [`CoreError::MalformedInput`].
    pub async fn fetch_headers(&self, url: &str) -> Result<IgcHeaders, CoreError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CoreError::MalformedInput(format!("could not fetch track '{url}': {e}")))?;

        if !response.status().is_success() {
            return Err(CoreError::MalformedInput(format!(
                "track source '{url}' answered {}",
                response.status()
            )));
        }
        if response.content_length().unwrap_or(0) > MAX_CONTENT_BYTES {
            return Err(CoreError::MalformedInput(format!(
                "track source '{url}' exceeds the {MAX_CONTENT_BYTES} byte cap"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::MalformedInput(format!("could not read track '{url}': {e}")))?;

        igc::parse_headers(&body)
    }
}

impl Default for IgcFetcher {
    fn default() -> Self {
        Self::new()
    }
}
