//! Error types for the CMS integration.

/// Error from CMS API operations.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// Token endpoint rejected the client credentials.
    #[error("failed to get access token: {status} - {body}")]
    Token {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No content item with the requested id.
    #[error("article not found: {0}")]
    ArticleNotFound(String),
}

impl CmsError {
    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Token { status, .. } | Self::HttpResponse { status, .. } => Some(*status),
            Self::HttpRequest(_) | Self::Json(_) | Self::ArticleNotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_and_message_carry_response() {
        let err = CmsError::HttpResponse {
            status: 403,
            body: "forbidden".to_owned(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "HTTP error: 403 - forbidden");

        let err = CmsError::Token {
            status: 400,
            body: r#"{"error":"invalid_client"}"#.to_owned(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            r#"failed to get access token: 400 - {"error":"invalid_client"}"#
        );
    }

    #[test]
    fn test_status_absent_without_response() {
        let err = CmsError::ArticleNotFound("a1".to_owned());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "article not found: a1");
    }
}
