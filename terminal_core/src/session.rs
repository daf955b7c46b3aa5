//! Terminal session - the thin shell around the pure executor.

use corpus::ContentRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::executor::{execute, Execution};
use crate::navigation::{Collaborator, Effect};
use crate::output::OutputLog;

/// Unique identifier for a terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One interactive terminal.
///
/// Owns the output log and borrows the corpus. Input is handled strictly one
/// line at a time: each line is executed to completion, its lines appended,
/// and its effect handed to the collaborator before `submit` returns.
pub struct Session<'a> {
    id: SessionId,
    repository: &'a ContentRepository,
    log: OutputLog,
}

impl<'a> Session<'a> {
    pub fn new(repository: &'a ContentRepository) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, posts = repository.len(), "terminal session started");
        Self {
            id,
            repository,
            log: OutputLog::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn repository(&self) -> &'a ContentRepository {
        self.repository
    }

    /// Execute one input line and apply its result.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(
        &mut self,
        raw: &str,
        collaborator: &mut dyn Collaborator,
    ) -> Option<Execution> {
        if raw.trim().is_empty() {
            return None;
        }

        let _span = tracing::debug_span!("submit", session = %self.id).entered();
        let execution = execute(raw, self.repository);
        if execution.is_error() {
            tracing::warn!(command = execution.command.name(), input = raw, "command rejected");
        }

        self.log.extend(execution.lines.iter().cloned());
        match &execution.effect {
            Some(Effect::ClearLog) => self.log.clear(),
            Some(Effect::Navigate(route)) => collaborator.navigate(route),
            Some(Effect::ToggleTheme) => collaborator.toggle_theme(),
            Some(Effect::OpenHelp) => collaborator.open_help(),
            None => {}
        }

        Some(execution)
    }
}
