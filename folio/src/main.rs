//! `folio` - the portfolio terminal on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::control as color_control;
use corpus::ContentRepository;
use std::path::PathBuf;
use terminal_core::TerminalConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod render;
mod repl;
mod view;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio terminal: browse posts with free-text commands")]
struct Cli {
    #[arg(long, global = true, help = "Path to a folio.toml config file")]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Load posts from this directory instead of the bundled corpus"
    )]
    content_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Print the session transcript as JSON on exit")]
    json: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[arg(short, long, global = true, conflicts_with = "quiet", help = "Debug logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Only log errors")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive terminal (default).
    Repl,
    /// Run commands non-interactively, one per argument or script line.
    Run {
        commands: Vec<String>,
        #[arg(long, help = "Read commands from a file (`-` for stdin)")]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = match &cli.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TerminalConfig::default(),
    };

    let repo = load_corpus(cli.content_dir.as_ref().or(config.content_dir.as_ref()))?;

    match cli.command {
        None | Some(Commands::Repl) => repl::run_interactive(&repo, &config, cli.json),
        Some(Commands::Run { commands, script }) => {
            let lines = collect_script(script.as_ref(), commands)?;
            repl::run_script(&repo, &config, &lines, cli.json).map(drop)
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var("NO_COLOR").ok().is_some();
    if cli.no_color || env_no_color || cli.json {
        color_control::set_override(false);
    }
    Ok(())
}

fn load_corpus(content_dir: Option<&PathBuf>) -> Result<ContentRepository> {
    match content_dir {
        Some(dir) => ContentRepository::load_dir(dir)
            .with_context(|| format!("failed to load posts from {}", dir.display())),
        None => corpus::bundled().context("bundled corpus is invalid"),
    }
}

fn collect_script(script: Option<&PathBuf>, commands: Vec<String>) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    if let Some(path) = script {
        let text = if path.as_os_str() == "-" {
            std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?
        };
        lines.extend(text.lines().map(str::to_string));
    }

    lines.extend(commands);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from(["folio", "--json", "run", "blogs", "tags"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Run { commands, script }) => {
                assert_eq!(commands, vec!["blogs", "tags"]);
                assert!(script.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["folio", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_collect_script_appends_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");
        std::fs::write(&path, "blogs\n# note\ntags\n").unwrap();

        let lines = collect_script(Some(&path), vec!["help".to_string()]).unwrap();
        assert_eq!(lines, vec!["blogs", "# note", "tags", "help"]);
    }

    #[test]
    fn test_load_corpus_defaults_to_bundled() {
        let repo = load_corpus(None).unwrap();
        assert!(repo.find_by_id("large-reasoning-models").is_some());
    }
}
