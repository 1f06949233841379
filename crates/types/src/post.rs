use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Display heading for a post, e.g. "title1 1".
    pub fn heading(&self) -> String {
        format!("{} {}", self.title, self.id)
    }

    /// Case-sensitive substring match on the title. An empty query
    /// matches every post.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.contains(query)
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Post {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            user_id: id,
            title: title.to_string(),
            body: format!("body{}", id),
        }
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_heading() {
        assert_eq!(post(1, "title1").heading(), "title1 1");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_title_contains() {
        let p = post(1, "title1");
        assert!(p.title_contains("title1"));
        assert!(p.title_contains("itle"));
        assert!(p.title_contains(""));
        assert!(!p.title_contains("Title1"));
        assert!(!p.title_contains("post does not exist"));
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_camel_case_wire_format() {
        let raw = r#"{"userId": 2, "id": 7, "title": "title7", "body": "body7"}"#;
        let p: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(p.user_id, 2);
        assert_eq!(p.id, 7);
        assert_eq!(p.title, "title7");
    }
}
