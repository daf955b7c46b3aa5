//! Non-fatal command failures. The `Display` text is the error line shown to
//! the user.

use thiserror::Error;

use crate::output::OutputLine;

/// Which argument a command was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Query,
    Tag,
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Query => write!(f, "search query"),
            Argument::Tag => write!(f, "tag name"),
        }
    }
}

/// What a lookup failed to find.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Missing {
    #[error("Blog post with ID \"{0}\" not found.")]
    Post(String),

    #[error("No posts found matching \"{0}\"")]
    SearchMatches(String),

    #[error("No posts found with tag \"{0}\"")]
    TagMatches(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Search or tag filter given without its argument.
    #[error("Please provide a {0}.")]
    EmptyArgument(Argument),

    /// Unknown post id, or a query/tag with no matches.
    #[error(transparent)]
    NotFound(#[from] Missing),

    /// Unparseable input, carrying its first token.
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
}

impl CommandError {
    /// Follow-up hint shown after the error line, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CommandError::EmptyArgument(Argument::Query) => Some("Usage: blogs search <query>"),
            CommandError::EmptyArgument(Argument::Tag) => Some("Usage: blogs tag <tag>"),
            CommandError::NotFound(Missing::Post(_)) => Some("Use \"blogs\" to see available posts."),
            _ => None,
        }
    }

    /// Render as an `error` line plus an optional `info` hint.
    pub fn to_lines(&self) -> Vec<OutputLine> {
        let mut lines = vec![OutputLine::error(self.to_string())];
        lines.extend(self.hint().map(OutputLine::info));
        lines
    }
}
