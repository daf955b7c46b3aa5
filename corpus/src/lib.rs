//! # Corpus
//!
//! The fixed, read-only collection of posts behind the portfolio. The corpus is
//! loaded once at startup and never mutated afterwards; every query in this
//! crate is a pure read.
//!
//! ## Core Components
//!
//! - **post**: The `Post` record and its TOML/YAML front-matter loader
//! - **repository**: `ContentRepository` with list/find/filter/search/tag queries
//! - **bundled**: The posts compiled into the binary
//!
//! This crate knows nothing about commands, terminals or rendering.

pub mod bundled;
pub mod error;
pub mod post;
pub mod repository;

pub use bundled::*;
pub use error::*;
pub use post::*;
pub use repository::*;
