/// Scrollback of the simulated terminal.
///
/// Always holds at least the welcome banner: it starts with it, and `reset`
/// goes back to it rather than emptying the buffer.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    welcome: Vec<String>,
    lines: Vec<String>,
}

const FALLBACK_WELCOME: &str = "$ Welcome! Type \"help\" to see available commands";

impl SessionHistory {
    pub fn new(welcome: Vec<String>) -> Self {
        let welcome = if welcome.is_empty() {
            vec![FALLBACK_WELCOME.to_string()]
        } else {
            welcome
        };
        Self {
            lines: welcome.clone(),
            welcome,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn welcome(&self) -> &[String] {
        &self.welcome
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(lines);
    }

    pub fn reset(&mut self) {
        self.lines.clone_from(&self.welcome);
    }
}
