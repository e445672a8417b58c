//! OAuth2 client-credentials token exchange.

use tracing::{info, warn};

use super::{CmsClient, read_response};
use crate::error::CmsError;
use crate::types::TokenResponse;

impl CmsClient {
    /// Exchange the client credentials for a bearer token.
    ///
    /// Tokens are not cached; every listing call fetches a fresh one.
    pub(crate) fn request_token(&self) -> Result<String, CmsError> {
        let url = self.token_url();

        info!("Requesting access token for client {}", self.client_id);

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_form([
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", self.scope.as_str()),
            ])?;

        let (status, body) = read_response(response);
        if status >= 400 {
            warn!("Token exchange failed with status {}", status);
            return Err(CmsError::Token { status, body });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }
}
