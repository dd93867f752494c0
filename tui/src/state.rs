use folio_core::{
    AppEvent, CommandKind, ContactDesk, Content, EventSender, FormRelay, Interpreter,
    PanelResize, ResizeLimits, TabKind, Typewriter, Workbench,
};
use folio_core::terminal::{commands::RESUME_FILE_NAME, Action, Effects};
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Initial terminal panel height in rows
pub const INITIAL_TERMINAL_HEIGHT: u16 = 10;

const ABOUT_TYPING: Duration = Duration::from_millis(8);
const CODE_TYPING: Duration = Duration::from_millis(30);

/// Which region receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Editor,
    Terminal,
}

/// What a quick-open palette entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    Open(TabKind),
    Run(CommandKind),
    ToggleTerminal,
    ToggleSidebar,
    Quit,
}

/// Entry in the quick-open palette
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub name: String,
    pub description: String,
    pub action: PaletteAction,
}

/// Screen regions from the last frame, used for mouse hit-testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub sidebar: Option<Rect>,
    pub editor: Rect,
    pub terminal: Option<Rect>,
    /// Sidebar rows, each with the index of the file it opens
    pub files: Vec<(Rect, usize)>,
    /// Tab bar cells, each with its tab index
    pub tabs: Vec<(Rect, usize)>,
}

/// Application state
pub struct AppState {
    pub content: Arc<Content>,

    /// Open tabs and explorer
    pub workbench: Workbench,

    /// The simulated terminal
    pub interpreter: Interpreter,

    /// Contact form and its submission status
    pub contact: ContactDesk,

    /// Current terminal input line
    pub input: String,

    /// Cursor position in input text (byte index)
    pub input_cursor: usize,

    /// Whether the terminal panel is shown
    pub terminal_open: bool,

    /// Terminal panel height and drag gesture
    pub panel: PanelResize,

    /// Rows available to the gesture: the frame minus the status line
    pub viewport_height: u16,

    /// Terminal scroll position (first visible line)
    pub terminal_scroll: usize,

    /// Whether to keep the terminal pinned to the bottom
    pub auto_scroll_terminal: bool,

    /// Editor scroll offset
    pub editor_scroll: u16,

    /// Highlighted project on the Projects tab
    pub project_selected: usize,

    /// Whether the project detail popup is shown
    pub project_detail_open: bool,

    /// Typing effects per tab, restarted whenever the tab is opened
    pub typing: HashMap<TabKind, Vec<Typewriter>>,

    pub focus: Focus,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Event receiver for handling app events
    pub event_receiver: mpsc::UnboundedReceiver<AppEvent>,

    /// Whether cursor is visible (for blinking effect)
    pub cursor_visible: bool,

    /// Last time cursor blinked
    pub last_cursor_blink: Instant,

    /// Command palette state
    pub command_palette_open: bool,

    /// Currently selected entry in palette
    pub command_palette_selected: usize,

    /// Filter text for command palette
    pub command_palette_filter: String,

    /// Everything the palette can do
    pub palette_entries: Vec<PaletteEntry>,

    pub hit_areas: HitAreas,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        content: Arc<Content>,
        effects: Arc<dyn Effects>,
        relay: Arc<dyn FormRelay>,
        event_sender: EventSender,
        event_receiver: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        let palette_entries = Self::palette_entries(&content);

        Self {
            workbench: Workbench::new(content.sidebar_files.clone()),
            interpreter: Interpreter::new(content.clone(), effects),
            contact: ContactDesk::new(relay, event_sender),
            content,
            input: String::new(),
            input_cursor: 0,
            terminal_open: true,
            panel: PanelResize::new(INITIAL_TERMINAL_HEIGHT, ResizeLimits::default()),
            viewport_height: 0,
            terminal_scroll: 0,
            auto_scroll_terminal: true,
            editor_scroll: 0,
            project_selected: 0,
            project_detail_open: false,
            typing: HashMap::new(),
            focus: Focus::Sidebar,
            should_quit: false,
            event_receiver,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            command_palette_open: false,
            command_palette_selected: 0,
            command_palette_filter: String::new(),
            palette_entries,
            hit_areas: HitAreas::default(),
        }
    }

    fn palette_entries(content: &Content) -> Vec<PaletteEntry> {
        let mut entries: Vec<PaletteEntry> = content
            .sidebar_files
            .iter()
            .map(|file| PaletteEntry {
                name: file.name.clone(),
                description: file.description.clone(),
                action: PaletteAction::Open(file.tab),
            })
            .collect();
        entries.extend(CommandKind::ALL.into_iter().map(|kind| PaletteEntry {
            name: format!("> {}", kind.name()),
            description: kind.description().to_string(),
            action: PaletteAction::Run(kind),
        }));
        entries.push(PaletteEntry {
            name: "Toggle Terminal".to_string(),
            description: "Show or hide the terminal panel (Ctrl+T)".to_string(),
            action: PaletteAction::ToggleTerminal,
        });
        entries.push(PaletteEntry {
            name: "Toggle Explorer".to_string(),
            description: "Show or hide the sidebar (Ctrl+B)".to_string(),
            action: PaletteAction::ToggleSidebar,
        });
        entries.push(PaletteEntry {
            name: "Quit".to_string(),
            description: "Exit the portfolio".to_string(),
            action: PaletteAction::Quit,
        });
        entries
    }

    /// Palette entries matching the current filter
    pub fn filtered_palette(&self) -> Vec<&PaletteEntry> {
        let filter = self.command_palette_filter.to_lowercase();
        self.palette_entries
            .iter()
            .filter(|entry| {
                filter.is_empty()
                    || entry.name.to_lowercase().contains(&filter)
                    || entry.description.to_lowercase().contains(&filter)
            })
            .collect()
    }

    /// Open a tab, restart its typing effect and move focus to the editor
    pub fn open_tab(&mut self, tab: TabKind) {
        self.workbench.open(tab);
        self.editor_scroll = 0;
        self.project_detail_open = false;
        let writers = self.start_typing(tab, Instant::now());
        self.typing.insert(tab, writers);
        self.focus = Focus::Editor;
    }

    fn start_typing(&self, tab: TabKind, now: Instant) -> Vec<Typewriter> {
        match tab {
            TabKind::About => {
                let about = Typewriter::new(self.content.about_code(), ABOUT_TYPING, now);
                let education =
                    Typewriter::new(self.content.education_code(), ABOUT_TYPING, about.finish_time());
                vec![about, education]
            }
            TabKind::Projects => vec![Typewriter::new(self.content.skills_code(), CODE_TYPING, now)],
            TabKind::Contact => vec![Typewriter::new(self.content.contact_code(), CODE_TYPING, now)],
        }
    }

    /// Reveal all pending typing on the active tab
    pub fn skip_typing(&mut self) {
        if let Some(tab) = self.workbench.active_tab() {
            if let Some(writers) = self.typing.get_mut(&tab) {
                writers.iter_mut().for_each(Typewriter::skip);
            }
        }
    }

    pub fn typing_done(&self, tab: TabKind, now: Instant) -> bool {
        self.typing
            .get(&tab)
            .map_or(true, |writers| writers.iter().all(|w| w.is_done(now)))
    }

    pub fn toggle_terminal(&mut self) {
        self.terminal_open = !self.terminal_open;
        if self.terminal_open {
            self.focus = Focus::Terminal;
            self.auto_scroll_terminal = true;
        } else {
            self.panel.end();
            if self.focus == Focus::Terminal {
                self.focus = Focus::Editor;
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.workbench.toggle_sidebar();
        if !self.workbench.sidebar_visible() && self.focus == Focus::Sidebar {
            self.focus = Focus::Editor;
        }
    }

    /// Cycle focus through the visible regions
    pub fn cycle_focus(&mut self) {
        let order = [Focus::Sidebar, Focus::Editor, Focus::Terminal];
        let start = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        for step in 1..=order.len() {
            let candidate = order[(start + step) % order.len()];
            let visible = match candidate {
                Focus::Sidebar => self.workbench.sidebar_visible(),
                Focus::Editor => true,
                Focus::Terminal => self.terminal_open,
            };
            if visible {
                self.focus = candidate;
                return;
            }
        }
    }

    /// Run a line through the terminal and follow the output
    pub fn submit_terminal_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.input_cursor = 0;
        self.interpreter.submit(&line);
        self.auto_scroll_terminal = true;
    }

    /// Run a command picked from the palette as if it had been typed
    pub fn run_command(&mut self, kind: CommandKind) {
        if !self.terminal_open {
            self.toggle_terminal();
        }
        self.interpreter.submit(kind.name());
        self.auto_scroll_terminal = true;
        self.focus = Focus::Terminal;
    }

    /// Link behind a welcome-screen key: `g` GitHub, `l` LinkedIn, `r` resume
    pub fn welcome_link(&self, key: char) -> Option<Action> {
        let content = &self.content;
        match key {
            'g' => Some(Action::OpenUrl(content.social.github.url.clone())),
            'l' => Some(Action::OpenUrl(content.social.linkedin.url.clone())),
            'r' => Some(Action::Download {
                source: content.personal.resume_path.clone(),
                file_name: RESUME_FILE_NAME.to_string(),
            }),
            _ => None,
        }
    }

    /// Link behind a detail-popup key for the selected project: `g` repository, `d` demo
    pub fn project_link(&self, key: char) -> Option<Action> {
        let project = self.content.projects.get(self.project_selected)?;
        match key {
            'g' => Some(Action::OpenUrl(project.github.clone())),
            'd' => project.demo.clone().map(Action::OpenUrl),
            _ => None,
        }
    }

    /// Hand a link to the platform effects; failures only reach the log
    pub fn follow_link(&self, action: Action) {
        self.interpreter.perform(action);
    }

    pub fn set_viewport(&mut self, frame_height: u16) {
        self.viewport_height = frame_height.saturating_sub(1);
        self.panel.fit(self.viewport_height);
    }

    /// Update cursor blinking state
    pub fn update_cursor_blink(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_cursor_blink).as_millis() >= 500 {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = now;
        }
    }
}
