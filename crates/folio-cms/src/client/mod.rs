//! Headless CMS REST API client.
//!
//! Provides a sync HTTP client that authenticates with the OAuth2
//! client-credentials grant and reads content items.

mod contents;
mod token;

use folio_config::CmsConfig;
use ureq::Agent;
use ureq::http::Response;

use crate::error::CmsError;

/// Path of the OAuth2 token endpoint below the CMS base URL.
const TOKEN_PATH: &str = "identity-server/connect/token";

/// Headless CMS API client.
pub struct CmsClient {
    agent: Agent,
    base_url: String,
    app_name: String,
    content_type_name: String,
    client_id: String,
    client_secret: String,
    scope: String,
}

impl CmsClient {
    /// Create client from config values.
    ///
    /// The config is taken as-is; call [`CmsConfig::validate`] (or
    /// `Config::require_cms`) first.
    pub fn from_config(config: &CmsConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.endpoint_url.trim_end_matches('/').to_owned(),
            app_name: config.app_name.clone(),
            content_type_name: config.content_type_name.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            scope: config.scope.clone(),
        }
    }

    /// Content type this client lists.
    pub fn content_type_name(&self) -> &str {
        &self.content_type_name
    }

    /// Token endpoint URL.
    fn token_url(&self) -> String {
        format!("{}/{TOKEN_PATH}", self.base_url)
    }

    /// Content listing URL for the configured app and content type.
    fn contents_url(&self) -> String {
        format!(
            "{}/api/content/{}/{}",
            self.base_url, self.app_name, self.content_type_name
        )
    }
}

/// Read a response body, returning the status alongside it.
fn read_response(response: Response<ureq::Body>) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response
        .into_body()
        .read_to_string()
        .unwrap_or_else(|_| "(unable to read body)".to_owned());
    (status, body)
}
