use postfeed_api::client::Client;
use postfeed_types::feed::{self, FeedItem};
use std::sync::Arc;
use tracing::{debug, error};

use super::error::Error;
use super::view::FeedView;

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub page_size: usize,
}

impl FeedConfig {
    const DEFAULT_PAGE_SIZE: usize = 2;
    pub fn new(page_size: Option<usize>) -> FeedConfig {
        FeedConfig {
            page_size: page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Assembles the home feed: posts and photos fetched concurrently,
/// paired positionally, revealed in fixed-size batches, filterable by
/// a title query.
pub struct PostFeed {
    cfg: FeedConfig,
    http: Arc<Client>,
    items: Vec<FeedItem>,
    cursor: usize,
    query: String,
}

impl PostFeed {
    pub fn new(http: Arc<Client>, cfg: Option<FeedConfig>) -> Self {
        PostFeed {
            cfg: cfg.unwrap_or_default(),
            http,
            items: vec![],
            cursor: 0,
            query: String::new(),
        }
    }

    /// Fetch both collections and build the feed. A failed fetch leaves
    /// the feed empty rather than surfacing an error.
    pub async fn load(&mut self) {
        if let Err(e) = self.refresh().await {
            error!("Error loading feed: {}", e);
            self.items.clear();
            self.cursor = 0;
        }
    }

    /// Same fetch path as load, but propagates the failure.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let (posts, photos) =
            futures::future::try_join(self.http.get_posts(), self.http.get_photos()).await?;
        self.items = feed::pair(&posts, &photos);
        self.cursor = self.cfg.page_size.min(self.items.len());
        debug!(
            "Loaded {} feed items from {} posts and {} photos",
            self.items.len(),
            posts.len(),
            photos.len()
        );
        Ok(())
    }

    /// Reveal the next batch of items. Returns false once everything is
    /// already visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.cursor = (self.cursor + self.cfg.page_size).min(self.items.len());
        debug!("Revealed up to {} of {} items", self.cursor, self.items.len());
        true
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.items.len()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn view(&self) -> FeedView {
        FeedView::build(
            &self.items[..self.cursor],
            &self.items,
            &self.query,
            self.has_more(),
        )
    }
}
