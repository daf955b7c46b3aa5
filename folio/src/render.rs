//! Colored rendering of output lines and the views behind navigation.

use colored::{ColoredString, Colorize};
use corpus::Post;
use terminal_core::help;
use terminal_core::{LineKind, OutputLine, Route, Theme};

/// Render one log line for the given theme.
pub fn line(line: &OutputLine, theme: Theme) -> String {
    let indent = "  ".repeat(line.indent as usize);
    format!("{indent}{}", paint(&line.text, line.kind, theme))
}

fn paint(text: &str, kind: LineKind, theme: Theme) -> ColoredString {
    match (kind, theme) {
        (LineKind::Command, Theme::Dark) => text.bright_green().bold(),
        (LineKind::Command, Theme::Light) => text.green().bold(),
        (LineKind::Info, Theme::Dark) => text.bright_cyan(),
        (LineKind::Info, Theme::Light) => text.blue(),
        (LineKind::Success, Theme::Dark) => text.bright_green(),
        (LineKind::Success, Theme::Light) => text.green(),
        (LineKind::Error, _) => text.red(),
        (LineKind::Muted, _) => text.dimmed(),
        (LineKind::Text, _) => text.normal(),
    }
}

/// Detail view of a post.
pub fn post(post: &Post, theme: Theme) -> String {
    let title = match theme {
        Theme::Dark => post.title.bright_white().bold(),
        Theme::Light => post.title.black().bold(),
    };
    let mut out = String::new();
    out.push_str(&format!("\n{title}\n"));
    out.push_str(&format!(
        "{}\n",
        format!("{} | {}", post.date, post.read_time).dimmed()
    ));
    if !post.tags.is_empty() {
        out.push_str(&format!("{}\n", post.tags.join(", ").dimmed()));
    }
    out.push('\n');
    out.push_str(post.content.trim_end());
    out.push('\n');
    out
}

/// Banner for a section route.
pub fn section(route: &Route) -> String {
    format!("{} {}", "->".dimmed(), route.hash().bold())
}

/// The help surface.
pub fn help() -> String {
    let width = help::COMMANDS
        .iter()
        .map(|(pattern, _)| pattern.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", "Available commands".bold());
    for (pattern, description) in help::COMMANDS {
        out.push_str(&format!("  {:width$}  {}\n", pattern, description.dimmed()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indent_and_text() {
        colored::control::set_override(false);
        let rendered = line(&OutputLine::muted("Date: 2025-12-29").indented(2), Theme::Dark);
        assert_eq!(rendered, "    Date: 2025-12-29");
    }

    #[test]
    fn test_help_lists_every_command() {
        colored::control::set_override(false);
        let text = help();
        for (pattern, _) in help::COMMANDS {
            assert!(text.contains(pattern));
        }
    }

    #[test]
    fn test_post_view() {
        colored::control::set_override(false);
        let post = Post::new("x", "Title")
            .with_read_time("3 min read")
            .with_tags(["AI"])
            .with_content("Body\n\n");
        let text = super::post(&post, Theme::Light);
        assert!(text.contains("Title"));
        assert!(text.contains("3 min read"));
        assert!(text.ends_with("Body\n"));
    }
}
