//! Command Executor - evaluates a command against the corpus.
//!
//! Execution is a pure function of the raw input and the repository. It
//! produces the lines to append and at most one [`Effect`]; applying them is
//! the caller's job (see [`crate::session::Session`]).

mod error;

pub use error::*;

use corpus::{ContentRepository, Post};
use serde::Serialize;

use crate::command::{split_first_token, Command, Section};
use crate::navigation::{Effect, Route};
use crate::output::OutputLine;

const LISTING_INDENT: u8 = 1;
const DETAIL_INDENT: u8 = 2;

/// Everything one input line produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execution {
    pub command: Command,

    /// Lines to append to the log, starting with the input echo.
    pub lines: Vec<OutputLine>,

    pub effect: Option<Effect>,
}

impl Execution {
    /// The navigation intent, if this execution carries one.
    pub fn navigation(&self) -> Option<&Route> {
        match &self.effect {
            Some(Effect::Navigate(route)) => Some(route),
            _ => None,
        }
    }

    /// Whether the command reported an error.
    pub fn is_error(&self) -> bool {
        self.lines
            .iter()
            .any(|l| l.kind == crate::output::LineKind::Error)
    }
}

/// Parse and execute one raw input line.
pub fn execute(raw: &str, repo: &ContentRepository) -> Execution {
    let command = Command::parse(raw);
    tracing::debug!(command = command.name(), input = raw, "parsed command");
    execute_command(raw, command, repo)
}

/// Execute an already parsed command. `raw` is only used for the echo line
/// and unknown-command messages.
pub fn execute_command(raw: &str, command: Command, repo: &ContentRepository) -> Execution {
    let outcome = match &command {
        Command::ListPosts => Ok((list_posts(repo), None)),
        Command::SearchPosts(query) => search_posts(repo, query).map(|l| (l, None)),
        Command::FilterByTag(tag) => filter_by_tag(repo, tag).map(|l| (l, None)),
        Command::ListTags => Ok((list_tags(repo), None)),
        Command::OpenPost(id) => open_post(repo, id),
        Command::Navigate(section) => Ok(navigate(*section)),
        Command::ShowHelp => Ok((
            vec![OutputLine::info("Opening help...")],
            Some(Effect::OpenHelp),
        )),
        Command::ToggleTheme => Ok((
            vec![OutputLine::success("Theme toggled!")],
            Some(Effect::ToggleTheme),
        )),
        Command::Clear => Ok((Vec::new(), Some(Effect::ClearLog))),
        Command::Unknown(raw) => {
            let (first, _) = split_first_token(raw);
            Err(CommandError::UnknownCommand(first.to_lowercase()))
        }
    };

    // Clear leaves no trace, not even the echo.
    let mut lines = Vec::new();
    if command != Command::Clear {
        lines.push(OutputLine::command(format!("$ {}", raw)));
    }

    let effect = match outcome {
        Ok((output, effect)) => {
            lines.extend(output);
            effect
        }
        Err(err) => {
            tracing::debug!(command = command.name(), error = %err, "command failed");
            lines.extend(err.to_lines());
            None
        }
    };

    Execution {
        command,
        lines,
        effect,
    }
}

type Outcome = Result<(Vec<OutputLine>, Option<Effect>), CommandError>;

fn list_posts(repo: &ContentRepository) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::info("Available blog posts:")];
    for post in repo.list_all() {
        lines.extend(post_summary(post));
    }
    lines.push(OutputLine::blank());
    lines.push(OutputLine::info("Use \"blogs search <query>\" to search posts"));
    lines.push(OutputLine::info("Use \"blogs tag <tag>\" to filter by tag"));
    lines
}

fn search_posts(repo: &ContentRepository, query: &str) -> Result<Vec<OutputLine>, CommandError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CommandError::EmptyArgument(Argument::Query));
    }

    let posts = repo.search(query);
    if posts.is_empty() {
        return Err(Missing::SearchMatches(query.to_string()).into());
    }

    let mut lines = vec![OutputLine::info(format!(
        "Found {} post(s) matching \"{}\":",
        posts.len(),
        query
    ))];
    for post in posts {
        lines.extend(post_summary(post));
    }
    lines.push(OutputLine::blank());
    lines.push(OutputLine::info("Use \"blog <id>\" to read a post"));
    Ok(lines)
}

fn filter_by_tag(repo: &ContentRepository, tag: &str) -> Result<Vec<OutputLine>, CommandError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(CommandError::EmptyArgument(Argument::Tag));
    }

    let posts = repo.filter_by_tag(tag);
    if posts.is_empty() {
        return Err(Missing::TagMatches(tag.to_string()).into());
    }

    let mut lines = vec![OutputLine::info(format!(
        "Found {} post(s) tagged with \"{}\":",
        posts.len(),
        tag
    ))];
    for post in posts {
        lines.extend(post_summary(post));
        lines.push(
            OutputLine::muted(format!("Tags: {}", post.tags.join(", "))).indented(DETAIL_INDENT),
        );
    }
    lines.push(OutputLine::blank());
    lines.push(OutputLine::info("Use \"blog <id>\" to read a post"));
    Ok(lines)
}

fn list_tags(repo: &ContentRepository) -> Vec<OutputLine> {
    let tags = repo.all_tags();
    let mut lines = vec![OutputLine::info(format!("Available tags ({}):", tags.len()))];
    for tag in &tags {
        lines.push(
            OutputLine::success(format!("[{}] {} post(s)", tag.tag, tag.count))
                .indented(LISTING_INDENT),
        );
    }
    lines.push(OutputLine::blank());
    lines.push(OutputLine::info("Use \"blogs tag <tag>\" to filter posts by tag"));
    lines
}

fn open_post(repo: &ContentRepository, id: &str) -> Outcome {
    let id = id.trim();
    let post = repo
        .find_by_id(id)
        .ok_or_else(|| Missing::Post(id.to_string()))?;

    Ok((
        vec![OutputLine::success(format!("Opening \"{}\"...", post.title))],
        Some(Effect::Navigate(Route::Post(post.id.clone()))),
    ))
}

fn navigate(section: Section) -> (Vec<OutputLine>, Option<Effect>) {
    (
        vec![OutputLine::success(format!("Navigating to {}...", section.title()))],
        Some(Effect::Navigate(section.route())),
    )
}

/// The `[id] title` / excerpt / date block shared by every listing.
fn post_summary(post: &Post) -> [OutputLine; 3] {
    [
        OutputLine::success(format!("[{}] {}", post.id, post.title)).indented(LISTING_INDENT),
        OutputLine::muted(post.excerpt.clone()).indented(DETAIL_INDENT),
        OutputLine::muted(format!("Date: {} | {}", post.date, post.read_time))
            .indented(DETAIL_INDENT),
    ]
}
