//! Terminal configuration, loaded from TOML.
//!
//! ```toml
//! prompt = "guest@folio:~$ "
//! theme = "light"
//! content_dir = "content/posts"
//! history_file = ".folio_history"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::navigation::Theme;

pub const DEFAULT_PROMPT: &str = "guest@folio:~$ ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Prompt shown before each input line.
    pub prompt: String,

    /// Theme in effect at startup.
    pub theme: Theme,

    /// Load posts from this directory instead of the bundled corpus.
    pub content_dir: Option<PathBuf>,

    /// Where interactive history is kept. No history file when unset.
    pub history_file: Option<PathBuf>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            theme: Theme::default(),
            content_dir: None,
            history_file: None,
        }
    }
}

impl TerminalConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file. Relative `content_dir`/`history_file` entries are
    /// resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;

        if let Some(base) = path.parent() {
            config.content_dir = config.content_dir.map(|p| base.join(p));
            config.history_file = config.history_file.map(|p| base.join(p));
        }

        tracing::debug!(path = %path.display(), "loaded terminal config");
        Ok(config)
    }
}
