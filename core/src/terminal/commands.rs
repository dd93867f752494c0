use crate::content::Content;
use chrono::{DateTime, Local};

/// Every command the terminal understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Clear,
    Github,
    Resume,
    Ls,
    Date,
    Echo,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Help,
        CommandKind::About,
        CommandKind::Skills,
        CommandKind::Projects,
        CommandKind::Contact,
        CommandKind::Clear,
        CommandKind::Github,
        CommandKind::Resume,
        CommandKind::Ls,
        CommandKind::Date,
        CommandKind::Echo,
    ];

    /// Exact lookup of an already lower-cased token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == token)
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::About => "about",
            CommandKind::Skills => "skills",
            CommandKind::Projects => "projects",
            CommandKind::Contact => "contact",
            CommandKind::Clear => "clear",
            CommandKind::Github => "github",
            CommandKind::Resume => "resume",
            CommandKind::Ls => "ls",
            CommandKind::Date => "date",
            CommandKind::Echo => "echo",
        }
    }

    /// One-line summary, used by the quick-open palette
    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Help => "List available commands",
            CommandKind::About => "Learn more about me",
            CommandKind::Skills => "View my technical skills",
            CommandKind::Projects => "See my recent projects",
            CommandKind::Contact => "Get my contact information",
            CommandKind::Clear => "Clear the terminal",
            CommandKind::Github => "Open my GitHub profile",
            CommandKind::Resume => "Download my resume",
            CommandKind::Ls => "List files",
            CommandKind::Date => "Show the current date and time",
            CommandKind::Echo => "Echo back your input",
        }
    }
}

/// A submitted line split into its command token and argument string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// Lower-cased first word
    pub token: String,
    /// Everything after the first run of whitespace, verbatim
    pub args: &'a str,
    /// The trimmed line
    pub line: &'a str,
}

/// Split a raw line. Returns `None` for empty or whitespace-only input.
pub fn parse_input(raw: &str) -> Option<ParsedInput<'_>> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    let (token, args) = match line.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (line, ""),
    };
    Some(ParsedInput {
        token: token.to_lowercase(),
        args,
        line,
    })
}

/// Side effect a command asks the interpreter to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenUrl(String),
    Download { source: String, file_name: String },
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Lines to append after the echoed prompt, optionally with an effect to run
    Output {
        lines: Vec<String>,
        action: Option<Action>,
    },
    /// Replace the history with the welcome banner
    Reset,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Reply::Output { lines, action: None }
    }

    fn with_action(line: &str, action: Action) -> Self {
        Reply::Output {
            lines: vec![line.to_string()],
            action: Some(action),
        }
    }
}

pub const RESUME_FILE_NAME: &str = "resume.pdf";

/// Evaluate a command. Pure: effects are returned as an [`Action`], never performed here.
pub fn dispatch(kind: CommandKind, args: &str, content: &Content, now: &DateTime<Local>) -> Reply {
    let canned = &content.terminal;
    match kind {
        CommandKind::Help => Reply::lines(canned.help.clone()),
        CommandKind::About => Reply::lines(canned.about.clone()),
        CommandKind::Skills => Reply::lines(canned.skills.clone()),
        CommandKind::Projects => Reply::lines(canned.projects.clone()),
        CommandKind::Contact => Reply::lines(canned.contact.clone()),
        CommandKind::Ls => Reply::lines(canned.ls.clone()),
        CommandKind::Clear => Reply::Reset,
        CommandKind::Github => Reply::with_action(
            "Opening GitHub profile in a new tab...",
            Action::OpenUrl(content.social.github.url.clone()),
        ),
        CommandKind::Resume => Reply::with_action(
            "Downloading resume...",
            Action::Download {
                source: content.personal.resume_path.clone(),
                file_name: RESUME_FILE_NAME.to_string(),
            },
        ),
        CommandKind::Date => Reply::lines(vec![now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()]),
        CommandKind::Echo => Reply::lines(vec![args.to_string()]),
    }
}

pub fn not_found_line(token: &str) -> String {
    format!("Command not found: {}. Type \"help\" for available commands.", token)
}
