//! Content listing operations for the CMS API.

use tracing::info;

use super::{CmsClient, read_response};
use crate::article::{Article, ArticleOptions};
use crate::error::CmsError;
use crate::types::{ContentItem, ContentsResponse};

impl CmsClient {
    /// Fetch all items of the configured content type, in server order.
    ///
    /// Performs a token exchange followed by an authenticated listing call.
    pub fn fetch_items(&self) -> Result<Vec<ContentItem>, CmsError> {
        let token = self.request_token()?;
        let url = self.contents_url();

        info!("Getting '{}' items from {}", self.content_type_name, url);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .header("Accept", "application/json")
            .call()?;

        let (status, body) = read_response(response);
        if status >= 400 {
            return Err(CmsError::HttpResponse { status, body });
        }

        let contents: ContentsResponse = serde_json::from_str(&body)?;
        let items = contents.into_items();
        info!("Found {} '{}' items", items.len(), self.content_type_name);
        Ok(items)
    }

    /// Fetch all items and build articles from them.
    pub fn fetch_articles(&self, options: &ArticleOptions) -> Result<Vec<Article>, CmsError> {
        Ok(self
            .fetch_items()?
            .iter()
            .map(|item| Article::from_item(item, options))
            .collect())
    }

    /// The first article in server order, if any.
    pub fn latest_article(&self, options: &ArticleOptions) -> Result<Option<Article>, CmsError> {
        Ok(self
            .fetch_items()?
            .first()
            .map(|item| Article::from_item(item, options)))
    }

    /// The article with the given item id.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::ArticleNotFound`] if no item has that id.
    pub fn find_article(&self, id: &str, options: &ArticleOptions) -> Result<Article, CmsError> {
        self.fetch_items()?
            .iter()
            .find(|item| item.id == id)
            .map(|item| Article::from_item(item, options))
            .ok_or_else(|| CmsError::ArticleNotFound(id.to_owned()))
    }
}
