//! Interactive and scripted front ends over a terminal session.
//!
//! The interactive shell uses `rustyline` for line editing, history and tab
//! completion of keywords, post slugs and tags.

use anyhow::{anyhow, Result};
use colored::Colorize;
use corpus::ContentRepository;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use serde_json::json;
use terminal_core::{help, Effect, OutputLog, Route, Session, TerminalConfig};

use crate::render;
use crate::view::{Panel, TerminalView};

/// Shell-level words that end the loop. Not part of the command grammar.
const EXIT_WORDS: &[&str] = &["exit", "quit"];

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub fn run_interactive(
    repo: &ContentRepository,
    config: &TerminalConfig,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(repo);
    let mut view = TerminalView::new(config.theme);

    if !json {
        println!("{}", "Welcome to My Portfolio".green().bold());
        println!("Type `help` for commands, `blogs` to browse posts, `exit` to quit.\n");
    }

    let mut rl: Editor<ReplHelper, DefaultHistory> =
        Editor::new().map_err(|e| anyhow!("failed to init rustyline: {e}"))?;
    rl.set_helper(Some(ReplHelper::new(repo)));

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(l) => l,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => return Err(anyhow!("readline error: {e}")),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            break;
        }

        rl.add_history_entry(trimmed)
            .map_err(|e| anyhow!("failed to record history: {e}"))?;

        step(&mut session, &mut view, &line, json);
    }

    if let Some(path) = &config.history_file {
        rl.save_history(path)
            .map_err(|e| anyhow!("failed to save history to {}: {e}", path.display()))?;
    }

    if json {
        print_transcript(&session, &view)?;
    }
    Ok(())
}

/// Run a fixed list of input lines and return the final output log.
/// Blank lines and `#` comments are skipped.
pub fn run_script(
    repo: &ContentRepository,
    config: &TerminalConfig,
    lines: &[String],
    json: bool,
) -> Result<OutputLog> {
    let mut session = Session::new(repo);
    let mut view = TerminalView::new(config.theme);

    for raw in lines {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        step(&mut session, &mut view, raw, json);
    }

    if json {
        print_transcript(&session, &view)?;
    }
    Ok(session.log().clone())
}

/// Submit one line and draw whatever it produced.
fn step(session: &mut Session<'_>, view: &mut TerminalView, line: &str, json: bool) {
    let Some(exec) = session.submit(line, view) else {
        return;
    };

    if json {
        // Panels only make sense on a live terminal.
        view.take_pending();
        return;
    }

    let clears = exec.effect == Some(Effect::ClearLog);
    if clears && colored::control::SHOULD_COLORIZE.should_colorize() {
        print!("{CLEAR_SCREEN}");
    }

    for l in &exec.lines {
        println!("{}", render::line(l, view.theme));
    }

    for panel in view.take_pending() {
        match panel {
            Panel::Help => print!("{}", render::help()),
            Panel::Route(Route::Post(id)) => {
                if let Some(post) = session.repository().find_by_id(id.as_str()) {
                    print!("{}", render::post(post, view.theme));
                }
            }
            Panel::Route(route) => println!("{}", render::section(&route)),
        }
    }
}

fn print_transcript(session: &Session<'_>, view: &TerminalView) -> Result<()> {
    let out = json!({
        "ok": true,
        "session": session.id(),
        "theme": view.theme,
        "route": view.route.as_ref().map(Route::path),
        "lines": session.log(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

// ============================================================================
// Tab completion (rustyline)
// ============================================================================

struct ReplHelper {
    words: Vec<String>,
}

impl ReplHelper {
    fn new(repo: &ContentRepository) -> Self {
        let mut words: Vec<String> = help::KEYWORDS.iter().map(|w| w.to_string()).collect();
        words.extend(repo.ids().map(|id| id.to_string()));
        words.extend(
            repo.tag_names()
                .into_iter()
                .map(|t| t.to_lowercase())
                .filter(|t| !t.contains(char::is_whitespace)),
        );
        words.sort();
        words.dedup();
        Self { words }
    }

    /// Start offset of the word under the cursor and its completions.
    fn complete_word(&self, head: &str) -> (usize, Vec<&str>) {
        let word = head.split(char::is_whitespace).last().unwrap_or("");
        let start = head.len() - word.len();
        let prefix = word.to_lowercase();
        let matches = self
            .words
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .map(String::as_str)
            .collect();
        (start, matches)
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.complete_word(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}
