//! Post definitions - the records the corpus is made of.

mod front_matter;

pub use front_matter::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique slug identifying a post (e.g. `large-reasoning-models`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// Create a post ID from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl From<String> for PostId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

/// A single blog post.
///
/// Tags keep the casing they were written with but are always compared
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,

    pub title: String,

    /// Publication date, rendered as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Display string such as "8 min read".
    pub read_time: String,

    /// One-paragraph summary shown in listings.
    pub excerpt: String,

    /// Ordered tags as stored.
    pub tags: Vec<String>,

    /// Markdown body. Opaque to every query.
    pub content: String,
}

impl Post {
    /// Create a new post with the given slug and title.
    pub fn new(id: impl Into<PostId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: NaiveDate::default(),
            read_time: String::new(),
            excerpt: String::new(),
            tags: Vec::new(),
            content: String::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = read_time.into();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Append a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append multiple tags, keeping their order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Check if this post carries `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Check if an already lower-cased needle occurs in the title, the
    /// excerpt or any tag.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new("moe-scaling", "Scaling Mixture of Experts")
            .with_excerpt("Sparse routing for large models.")
            .with_tags(["AI", "Machine Learning"])
    }

    #[test]
    fn test_post_builder() {
        let post = sample()
            .with_read_time("6 min read")
            .with_content("# Body");

        assert_eq!(post.id, PostId::new("moe-scaling"));
        assert_eq!(post.read_time, "6 min read");
        assert_eq!(post.tags, vec!["AI", "Machine Learning"]);
        assert_eq!(post.content, "# Body");
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let post = sample();
        assert!(post.has_tag("ai"));
        assert!(post.has_tag("MACHINE LEARNING"));
        assert!(!post.has_tag("machine"));
    }

    #[test]
    fn test_matches_query() {
        let post = sample();
        assert!(post.matches_query("mixture"));
        assert!(post.matches_query("sparse"));
        assert!(post.matches_query("learn"));
        assert!(!post.matches_query("kernel"));
    }

    #[test]
    fn test_post_id_display() {
        let id = PostId::new("ai-model-taxonomy-2025");
        assert_eq!(id.to_string(), "ai-model-taxonomy-2025");
        assert!(!id.is_empty());
        assert!(PostId::new("  ").is_empty());
    }
}
