//! Content Delivery API client.

use std::time::Duration;

use tracing::info;
use ureq::Agent;

use crate::error::ContentfulError;
use crate::types::EntriesResponse;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Production Content Delivery API host.
const DEFAULT_BASE_URL: &str = "https://cdn.contentful.com";

/// Sync client for the Contentful Content Delivery API.
pub struct ContentfulClient {
    agent: Agent,
    base_url: String,
    space_id: String,
    environment: String,
    access_token: String,
}

impl ContentfulClient {
    /// Create a client from config values.
    #[must_use]
    pub fn new(space_id: &str, environment: &str, access_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: DEFAULT_BASE_URL.to_owned(),
            space_id: space_id.to_owned(),
            environment: environment.to_owned(),
            access_token: access_token.to_owned(),
        }
    }

    /// Override the API host (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Fetch entries of one content type, newest first, with linked assets
    /// resolved one level deep.
    ///
    /// A single request covers the whole feed; the API caps `limit` at
    /// 1000 and the feed is expected to stay well under it.
    pub fn fetch_entries(
        &self,
        content_type: &str,
        limit: u32,
    ) -> Result<EntriesResponse, ContentfulError> {
        let url = format!(
            "{}/spaces/{}/environments/{}/entries?content_type={}&order=-fields.date&include=2&limit={}",
            self.base_url, self.space_id, self.environment, content_type, limit
        );

        info!("Fetching up to {} '{}' entries", limit, content_type);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ContentfulError::HttpResponse {
                status,
                body: error_body,
            });
        }

        body_reader
            .read_json()
            .map_err(|e| ContentfulError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override_trims_trailing_slash() {
        let client =
            ContentfulClient::new("space", "master", "token").with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn default_base_url_is_the_cdn() {
        let client = ContentfulClient::new("space", "master", "token");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
