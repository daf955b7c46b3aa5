//! Help surface contents.

/// (input pattern, description) for every command, in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("blogs | list blogs", "List all blog posts"),
    ("blogs search <query>", "Search posts by title, excerpt or tag"),
    ("blogs tag <tag>", "Show posts with a tag"),
    ("blogs tags | tags", "List all tags with post counts"),
    ("blog <id>", "Open a blog post"),
    ("about", "Go to the About page"),
    ("blog", "Go to the Blog index"),
    ("contact", "Go to the Contact page"),
    ("home", "Go to the home page"),
    ("theme", "Toggle light/dark theme"),
    ("clear", "Clear the terminal output"),
    ("help", "Show this help"),
];

/// Keywords a line can start with, for completion.
pub const KEYWORDS: &[&str] = &[
    "about", "blog", "blogs", "clear", "contact", "help", "home", "list", "search", "tag", "tags",
    "theme",
];
