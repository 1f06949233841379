use super::{photo::Photo, post::Post};

/// A post paired positionally with a photo url for display.
#[derive(Clone, Debug)]
pub struct FeedItem {
    pub post: Post,
    pub image_url: String,
}

impl FeedItem {
    pub fn heading(&self) -> String {
        self.post.heading()
    }
}

/// Pair the Nth post with the Nth photo. Items beyond the shorter
/// collection are dropped, so the result holds
/// min(posts.len(), photos.len()) entries.
pub fn pair(posts: &[Post], photos: &[Photo]) -> Vec<FeedItem> {
    posts
        .iter()
        .zip(photos.iter())
        .map(|(post, photo)| FeedItem {
            post: post.clone(),
            image_url: photo.url.clone(),
        })
        .collect()
}
