//! Command grammar - maps a raw input line to a structured command.
//!
//! Matching is case-insensitive and ignores surrounding whitespace. Rules are
//! tried in order and the first match wins:
//!
//! 1. `blogs` | `list blogs`
//! 2. `blogs search <q>` | `search blogs <q>`
//! 3. `blogs tag <t>` | `tag blogs <t>`
//! 4. `blogs tags` | `list tags` | `tags`
//! 5. `blog <id>`
//! 6. `about` | `blog` | `contact` | `home` | `help` | `theme` | `clear`
//! 7. anything else is unknown
//!
//! Rule 5 runs before rule 6 so a second token always turns `blog` into an
//! open-post request, even when that token is itself a section name.

use serde::{Deserialize, Serialize};

use crate::navigation::Route;

const LIST_POSTS: &[&str] = &["blogs", "list blogs"];
const SEARCH_PREFIXES: &[&str] = &["blogs search", "search blogs"];
const TAG_PREFIXES: &[&str] = &["blogs tag", "tag blogs"];
const LIST_TAGS: &[&str] = &["blogs tags", "list tags", "tags"];

/// Site sections reachable by plain navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Blog,
    Contact,
}

impl Section {
    /// Capitalized name used in "Navigating to ..." lines.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Section::Home => Route::Home,
            Section::About => Route::About,
            Section::Blog => Route::Blog,
            Section::Contact => Route::Contact,
        }
    }
}

/// A parsed terminal command. Produced fresh for every input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// List every post in corpus order.
    ListPosts,

    /// Substring search. An empty query is reported as an error on execution.
    SearchPosts(String),

    /// Case-insensitive tag filter. An empty tag is reported as an error.
    FilterByTag(String),

    /// Distinct tags with post counts.
    ListTags,

    /// Open a post by slug.
    OpenPost(String),

    Navigate(Section),

    ShowHelp,

    ToggleTheme,

    /// Empty the output log.
    Clear,

    /// Unrecognized input, kept verbatim.
    Unknown(String),
}

impl Command {
    /// Parse a raw input line.
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim().to_lowercase();

        if LIST_POSTS.contains(&line.as_str()) {
            return Command::ListPosts;
        }

        if let Some(query) = strip_keyword_prefix(&line, SEARCH_PREFIXES) {
            return Command::SearchPosts(query.to_string());
        }

        if let Some(tag) = strip_keyword_prefix(&line, TAG_PREFIXES) {
            return Command::FilterByTag(tag.to_string());
        }

        if LIST_TAGS.contains(&line.as_str()) {
            return Command::ListTags;
        }

        let (first, rest) = split_first_token(&line);

        if first == "blog" && !rest.is_empty() {
            return Command::OpenPost(rest.to_string());
        }

        match first {
            "about" => Command::Navigate(Section::About),
            "blog" => Command::Navigate(Section::Blog),
            "contact" => Command::Navigate(Section::Contact),
            "home" => Command::Navigate(Section::Home),
            "help" => Command::ShowHelp,
            "theme" => Command::ToggleTheme,
            "clear" => Command::Clear,
            _ => Command::Unknown(raw.to_string()),
        }
    }

    /// Short stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListPosts => "list_posts",
            Command::SearchPosts(_) => "search_posts",
            Command::FilterByTag(_) => "filter_by_tag",
            Command::ListTags => "list_tags",
            Command::OpenPost(_) => "open_post",
            Command::Navigate(_) => "navigate",
            Command::ShowHelp => "show_help",
            Command::ToggleTheme => "toggle_theme",
            Command::Clear => "clear",
            Command::Unknown(_) => "unknown",
        }
    }
}

/// First whitespace-delimited token of a line and the trimmed remainder.
pub fn split_first_token(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (line, ""),
    }
}

/// Match `prefix <remainder>` or a bare `prefix`, returning the trimmed
/// remainder. The prefix must end on a word boundary.
fn strip_keyword_prefix<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| {
        let rest = line.strip_prefix(prefix)?;
        if rest.is_empty() {
            Some(rest)
        } else if rest.starts_with(char::is_whitespace) {
            Some(rest.trim())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_posts() {
        assert_eq!(Command::parse("blogs"), Command::ListPosts);
        assert_eq!(Command::parse("  List Blogs  "), Command::ListPosts);
    }

    #[test]
    fn test_search_prefixes() {
        assert_eq!(
            Command::parse("blogs search Reasoning"),
            Command::SearchPosts("reasoning".to_string())
        );
        assert_eq!(
            Command::parse("search blogs   chain of thought "),
            Command::SearchPosts("chain of thought".to_string())
        );
    }

    #[test]
    fn test_bare_search_is_empty_query() {
        assert_eq!(Command::parse("blogs search"), Command::SearchPosts(String::new()));
        assert_eq!(Command::parse("search blogs   "), Command::SearchPosts(String::new()));
    }

    #[test]
    fn test_tag_prefixes() {
        assert_eq!(Command::parse("blogs tag ai"), Command::FilterByTag("ai".to_string()));
        assert_eq!(
            Command::parse("BLOGS TAG ai"),
            Command::parse("blogs tag ai")
        );
        assert_eq!(
            Command::parse("tag blogs Machine Learning"),
            Command::FilterByTag("machine learning".to_string())
        );
        assert_eq!(Command::parse("blogs tag"), Command::FilterByTag(String::new()));
    }

    #[test]
    fn test_list_tags_not_confused_with_tag_filter() {
        assert_eq!(Command::parse("blogs tags"), Command::ListTags);
        assert_eq!(Command::parse("list tags"), Command::ListTags);
        assert_eq!(Command::parse("TAGS"), Command::ListTags);
    }

    #[test]
    fn test_open_post_wins_over_navigation() {
        assert_eq!(
            Command::parse("blog ai-model-taxonomy-2025"),
            Command::OpenPost("ai-model-taxonomy-2025".to_string())
        );
        assert_eq!(Command::parse("blog about"), Command::OpenPost("about".to_string()));
        assert_eq!(Command::parse("blog"), Command::Navigate(Section::Blog));
        assert_eq!(Command::parse("  blog   "), Command::Navigate(Section::Blog));
    }

    #[test]
    fn test_fixed_commands_ignore_arguments() {
        assert_eq!(Command::parse("about me"), Command::Navigate(Section::About));
        assert_eq!(Command::parse("Contact"), Command::Navigate(Section::Contact));
        assert_eq!(Command::parse("home"), Command::Navigate(Section::Home));
        assert_eq!(Command::parse("help please"), Command::ShowHelp);
        assert_eq!(Command::parse("theme"), Command::ToggleTheme);
        assert_eq!(Command::parse("clear all"), Command::Clear);
    }

    #[test]
    fn test_unknown_keeps_raw_input() {
        assert_eq!(Command::parse("xyz123"), Command::Unknown("xyz123".to_string()));
        assert_eq!(Command::parse(" Blogz "), Command::Unknown(" Blogz ".to_string()));
        assert_eq!(Command::parse("blogsearch x"), Command::Unknown("blogsearch x".to_string()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_split_first_token() {
        assert_eq!(split_first_token("blog  my-post "), ("blog", "my-post"));
        assert_eq!(split_first_token("help"), ("help", ""));
        assert_eq!(split_first_token(""), ("", ""));
    }

    #[test]
    fn test_section_routes() {
        assert_eq!(Section::About.title(), "About");
        assert_eq!(Section::Home.route(), Route::Home);
        assert_eq!(Section::Blog.route().path(), "/blog");
    }
}
