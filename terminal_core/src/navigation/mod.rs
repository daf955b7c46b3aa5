//! Navigation targets, side effects and the presentation-layer seam.

use corpus::PostId;
use serde::{Deserialize, Serialize};

/// A view the presentation layer can switch to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    About,
    Blog,
    Contact,
    /// Detail view of a single post.
    Post(PostId),
}

impl Route {
    /// Router path, e.g. `/blog/large-reasoning-models`.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Post(id) => format!("/blog/{}", id),
        }
    }

    /// Hash-router location, e.g. `#/about`.
    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Color theme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// The single side effect an execution may request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Switch the view to a route.
    Navigate(Route),
    ToggleTheme,
    OpenHelp,
    /// Truncate the session's output log.
    ClearLog,
}

/// The presentation layer as seen from the interpreter.
///
/// Each call is synchronous and fire-and-forget.
pub trait Collaborator {
    fn navigate(&mut self, route: &Route);

    fn toggle_theme(&mut self);

    fn open_help(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::About.path(), "/about");
        assert_eq!(Route::Contact.hash(), "#/contact");
        assert_eq!(
            Route::Post(PostId::new("large-reasoning-models")).path(),
            "/blog/large-reasoning-models"
        );
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.name(), "light");
    }
}
