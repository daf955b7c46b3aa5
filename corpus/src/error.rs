//! Errors raised while building a corpus.

use std::path::PathBuf;

use thiserror::Error;

use crate::PostId;

/// Failure to load or validate posts.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document does not open with a `+++` or `---` delimited block,
    /// or the block is never closed.
    #[error("{source_name}: missing `+++` or `---` front matter block")]
    MissingFrontMatter { source_name: String },

    /// A `+++` block is not valid TOML or lacks required keys.
    #[error("{source_name}: invalid front matter: {source}")]
    FrontMatter {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    /// A `---` block is not valid YAML or lacks required keys.
    #[error("{source_name}: invalid front matter: {source}")]
    YamlFrontMatter {
        source_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("post \"{title}\" has an empty id")]
    EmptyId { title: String },

    /// Two posts share the same slug.
    #[error("duplicate post id `{0}`")]
    DuplicateId(PostId),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
