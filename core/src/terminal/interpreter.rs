use super::commands::{dispatch, not_found_line, parse_input, Action, CommandKind, Reply};
use super::effects::Effects;
use super::history::SessionHistory;
use crate::content::Content;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const PROMPT: &str = "$";

/// What a submitted line did to the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Blank input, nothing changed
    Ignored,
    /// A known command ran and appended `appended` lines (echo included)
    Ran { command: CommandKind, appended: usize },
    /// `clear` ran and the history is back to the welcome banner
    Cleared,
    /// Unknown command; echo and a not-found line were appended
    NotFound { token: String },
}

/// The simulated terminal: command table, scrollback, and the effects it may trigger
pub struct Interpreter {
    content: Arc<Content>,
    history: SessionHistory,
    effects: Arc<dyn Effects>,
}

impl Interpreter {
    pub fn new(content: Arc<Content>, effects: Arc<dyn Effects>) -> Self {
        let history = SessionHistory::new(content.terminal.welcome.clone());
        Self {
            content,
            history,
            effects,
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Evaluate one line of input
    pub fn submit(&mut self, raw: &str) -> Evaluation {
        let Some(input) = parse_input(raw) else {
            return Evaluation::Ignored;
        };

        let echo = format!("{} {}", PROMPT, raw);
        let Some(kind) = CommandKind::from_token(&input.token) else {
            debug!("Unknown terminal command: {}", input.token);
            self.history.push(echo);
            self.history.push(not_found_line(&input.token));
            return Evaluation::NotFound { token: input.token };
        };

        let now = self.effects.now();
        match dispatch(kind, input.args, &self.content, &now) {
            Reply::Reset => {
                self.history.reset();
                Evaluation::Cleared
            }
            Reply::Output { lines, action } => {
                if let Some(action) = action {
                    self.perform(action);
                }
                let appended = lines.len() + 1;
                self.history.push(echo);
                self.history.extend(lines);
                Evaluation::Ran {
                    command: kind,
                    appended,
                }
            }
        }
    }

    /// Run a side effect through the injected capability. Failures are logged and dropped.
    pub fn perform(&self, action: Action) {
        match action {
            Action::OpenUrl(url) => match self.effects.open_url(&url) {
                Ok(()) => info!("Opened {}", url),
                Err(e) => warn!("Could not open {}: {}", url, e),
            },
            Action::Download { source, file_name } => {
                match self.effects.download(&source, &file_name) {
                    Ok(path) => info!("Downloaded {} to {}", source, path.display()),
                    Err(e) => warn!("Could not download {}: {}", source, e),
                }
            }
        }
    }
}
