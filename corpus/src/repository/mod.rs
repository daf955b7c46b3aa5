//! Content Repository - the queryable, read-only post store.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::{parse_post, ContentError, Post, PostId};

/// A distinct tag and the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    /// Casing of the first occurrence in corpus order.
    pub tag: String,
    pub count: usize,
}

/// The main post store.
///
/// Posts keep their insertion order, which is the order every listing and
/// filter result is returned in. Slugs are indexed lower-cased, so lookup
/// ignores case and two slugs differing only in case collide.
#[derive(Debug, Clone, Default)]
pub struct ContentRepository {
    posts: Vec<Post>,

    /// Index: lower-cased slug -> position in `posts`.
    by_id: HashMap<String, usize>,
}

impl ContentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from posts in corpus order.
    ///
    /// Fails on an empty slug, or one already taken ignoring case.
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Result<Self, ContentError> {
        let mut repo = Self::new();
        for post in posts {
            if post.id.is_empty() {
                return Err(ContentError::EmptyId { title: post.title });
            }
            let key = post.id.as_str().to_lowercase();
            if repo.by_id.contains_key(&key) {
                return Err(ContentError::DuplicateId(post.id));
            }
            repo.by_id.insert(key, repo.posts.len());
            repo.posts.push(post);
        }
        Ok(repo)
    }

    /// Load every `*.md` post in `dir`, ordered by file name.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        let dir = dir.as_ref();
        let io_err = |path: &Path, source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
            let path = entry.map_err(|e| io_err(dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in &paths {
            let text = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
            posts.push(parse_post(&path.display().to_string(), &text)?);
        }

        let repo = Self::from_posts(posts)?;
        tracing::info!(dir = %dir.display(), posts = repo.len(), "loaded corpus");
        Ok(repo)
    }

    /// All posts in corpus order.
    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    /// Slug lookup, ignoring case.
    pub fn find_by_id(&self, id: &str) -> Option<&Post> {
        self.by_id
            .get(&id.to_lowercase())
            .and_then(|&idx| self.posts.get(idx))
    }

    /// Posts tagged with `tag`, ignoring case.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Posts whose title, excerpt or any tag contains `query`, ignoring case.
    ///
    /// The query is trimmed first. A blank query matches every post; callers
    /// reject it before getting here.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let needle = query.trim().to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.matches_query(&needle))
            .collect()
    }

    /// Distinct tags with the number of posts carrying each, sorted by tag.
    ///
    /// Tags differing only in case are counted together under the casing
    /// seen first. A post repeating a tag still counts once.
    pub fn all_tags(&self) -> Vec<TagCount> {
        let mut position: HashMap<String, usize> = HashMap::new();
        let mut tags: Vec<TagCount> = Vec::new();

        for post in &self.posts {
            let mut counted = HashSet::new();
            for tag in &post.tags {
                let key = tag.to_lowercase();
                if !counted.insert(key.clone()) {
                    continue;
                }
                match position.get(&key) {
                    Some(&idx) => tags[idx].count += 1,
                    None => {
                        position.insert(key, tags.len());
                        tags.push(TagCount {
                            tag: tag.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }

        tags.sort_by(|a, b| a.tag.cmp(&b.tag));
        tags
    }

    /// All slugs in corpus order.
    pub fn ids(&self) -> impl Iterator<Item = &PostId> {
        self.posts.iter().map(|p| &p.id)
    }

    /// Distinct tag names in sorted order.
    pub fn tag_names(&self) -> Vec<String> {
        self.all_tags().into_iter().map(|t| t.tag).collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
