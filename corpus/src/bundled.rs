//! Posts compiled into the binary.

use crate::{parse_post, ContentError, ContentRepository};

/// (file name, document) pairs in corpus order.
const BUNDLED_POSTS: &[(&str, &str)] = &[
    (
        "ai-model-taxonomy-2025.md",
        include_str!("../posts/ai-model-taxonomy-2025.md"),
    ),
    (
        "large-reasoning-models.md",
        include_str!("../posts/large-reasoning-models.md"),
    ),
];

/// Build the repository shipped with the site.
pub fn bundled() -> Result<ContentRepository, ContentError> {
    let posts = BUNDLED_POSTS
        .iter()
        .map(|(name, text)| parse_post(name, text))
        .collect::<Result<Vec<_>, _>>()?;
    ContentRepository::from_posts(posts)
}
