//! # Terminal Core
//!
//! The interpreter behind the portfolio's terminal mode. A raw input line is
//! parsed into a [`Command`], executed against the read-only
//! [`corpus::ContentRepository`], and turned into output lines plus at most one
//! side effect for the presentation layer to apply.
//!
//! ## Core Components
//!
//! - **command**: The closed command grammar and its precedence rules
//! - **executor**: Pure `(input, repository) -> Execution` evaluation
//! - **output**: Output lines and the append-only session log
//! - **navigation**: Routes, effects and the `Collaborator` seam
//! - **session**: Thin shell that applies executions to a log and a collaborator
//!
//! ## Design Philosophy
//!
//! - **Pure Core**: Parsing and execution never touch the log or the view
//! - **Effects at the Edge**: Only `Session` appends, clears, navigates or toggles
//! - **Never Fatal**: Every bad input becomes an error line, never an `Err`

pub mod command;
pub mod config;
pub mod executor;
pub mod help;
pub mod navigation;
pub mod output;
pub mod session;

pub use command::*;
pub use config::*;
pub use executor::*;
pub use navigation::*;
pub use output::*;
pub use session::*;
