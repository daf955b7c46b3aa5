//! The command-line presentation layer.

use terminal_core::{Collaborator, Route, Theme};

/// Something the view still has to draw after the execution's own lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Route(Route),
    Help,
}

/// Tracks the current route and theme and queues panels to draw.
///
/// Panels are queued rather than printed so they appear after the
/// execution's output lines.
#[derive(Debug, Default)]
pub struct TerminalView {
    pub theme: Theme,
    pub route: Option<Route>,
    pending: Vec<Panel>,
}

impl TerminalView {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Take everything queued since the last call.
    pub fn take_pending(&mut self) -> Vec<Panel> {
        std::mem::take(&mut self.pending)
    }
}

impl Collaborator for TerminalView {
    fn navigate(&mut self, route: &Route) {
        tracing::debug!(route = %route, "navigate");
        self.route = Some(route.clone());
        self.pending.push(Panel::Route(route.clone()));
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.name(), "theme toggled");
    }

    fn open_help(&mut self) {
        self.pending.push(Panel::Help);
    }
}
