use postfeed_types::feed::FeedItem;

pub const EMPTY_MESSAGE: &str = "Sorry... do not exist posts";
pub const LOAD_MORE_LABEL: &str = "Load more posts";

/// Snapshot of what the feed displays for the current cursor and query.
#[derive(Debug, Clone)]
pub struct FeedView {
    pub items: Vec<FeedItem>,
    pub search_heading: Option<String>,
    pub load_more_enabled: bool,
}

impl FeedView {
    /// An empty query shows the revealed slice; a non-empty query
    /// filters the whole item sequence by title. The load-more control
    /// never applies to an active search.
    pub(crate) fn build(revealed: &[FeedItem], all: &[FeedItem], query: &str, has_more: bool) -> Self {
        let (items, search_heading) = if query.is_empty() {
            (revealed.to_vec(), None)
        } else {
            (
                all.iter()
                    .filter(|item| item.post.title_contains(query))
                    .cloned()
                    .collect(),
                Some(format!("Search: {}", query)),
            )
        };
        FeedView {
            items,
            search_heading,
            load_more_enabled: query.is_empty() && has_more,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// User-facing message shown instead of items when nothing matches
    /// or nothing was loaded.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(EMPTY_MESSAGE)
        } else {
            None
        }
    }

    pub fn headings(&self) -> Vec<String> {
        self.items.iter().map(|item| item.heading()).collect()
    }
}
