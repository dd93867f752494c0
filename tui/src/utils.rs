/// Utility functions for the TUI application

/// Terminal management utilities
pub mod terminal {
    use anyhow::Result;
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        event::{DisableMouseCapture, EnableMouseCapture},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    /// Setup terminal for TUI mode
    pub fn setup() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore terminal to normal mode
    pub fn restore<B: ratatui::backend::Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Blocking terminal input, forwarded to the async loop
pub mod input {
    use crossterm::event::{self, Event};
    use std::io;
    use std::thread;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tracing::{debug, warn};

    /// How long one read waits before checking whether the loop is still listening
    const READ_TIMEOUT: Duration = Duration::from_millis(100);

    /// Start a thread that reads crossterm events and sends them to the returned receiver
    pub fn spawn_reader() -> mpsc::UnboundedReceiver<Event> {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            forward(&tx, || {
                if event::poll(READ_TIMEOUT)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            })
        });
        rx
    }

    /// Pump `next` into `tx` until the receiver is dropped or reading fails.
    /// `Ok(None)` means the read timed out.
    pub(crate) fn forward<F>(tx: &mpsc::UnboundedSender<Event>, mut next: F)
    where
        F: FnMut() -> io::Result<Option<Event>>,
    {
        while !tx.is_closed() {
            match next() {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to read terminal input: {}", e);
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    }

}

/// Layout calculation utilities
pub mod layout {
    use ratatui::layout::{Constraint, Direction, Layout, Rect};

    pub const SIDEBAR_WIDTH: u16 = 28;

    /// Regions of one frame
    #[derive(Debug, Clone, Copy)]
    pub struct MainAreas {
        pub title: Rect,
        pub sidebar: Option<Rect>,
        pub tab_bar: Rect,
        pub editor: Rect,
        pub terminal: Option<Rect>,
        pub status: Rect,
    }

    /// Create the main application layout. `terminal_height` is `None` when the panel is closed.
    pub fn create_main_layout(area: Rect, sidebar_visible: bool, terminal_height: Option<u16>) -> MainAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(1),    // Workbench
                Constraint::Length(1), // Status line
            ].as_ref())
            .split(area);

        let (sidebar, main) = if sidebar_visible && area.width > SIDEBAR_WIDTH * 2 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SIDEBAR_WIDTH),
                    Constraint::Min(1),
                ].as_ref())
                .split(rows[1]);
            (Some(cols[0]), cols[1])
        } else {
            (None, rows[1])
        };

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                              // Tab bar
                Constraint::Min(1),                                 // Editor
                Constraint::Length(terminal_height.unwrap_or(0)),   // Terminal panel
            ].as_ref())
            .split(main);

        MainAreas {
            title: rows[0],
            sidebar,
            tab_bar: main_chunks[0],
            editor: main_chunks[1],
            terminal: terminal_height.map(|_| main_chunks[2]),
            status: rows[2],
        }
    }

    /// A rectangle centered in `area`, sized as a percentage of it
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let width = area.width * percent_x / 100;
        let height = area.height * percent_y / 100;
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x
            && column < rect.x.saturating_add(rect.width)
            && row >= rect.y
            && row < rect.y.saturating_add(rect.height)
    }

}

/// Text helpers shared by the components
pub mod text {
    use ratatui::text::Span;
    use unicode_width::UnicodeWidthChar;

    /// Hard-wrap a line to `width` display columns, keeping empty lines
    pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
        if width == 0 {
            return vec![line.to_string()];
        }
        let mut out = Vec::new();
        let mut current = String::new();
        let mut used = 0;
        for ch in line.chars() {
            let cols = ch.width().unwrap_or(0);
            if used > 0 && used + cols > width {
                out.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += cols;
        }
        out.push(current);
        out
    }

    /// Hard-wrap styled spans to `width` display columns. Styles carry over into every row.
    pub fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Vec<Span<'static>>> {
        if width == 0 {
            return vec![spans];
        }
        let mut rows = Vec::new();
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for span in spans {
            let style = span.style;
            let mut piece = String::new();
            for ch in span.content.chars() {
                let cols = ch.width().unwrap_or(0);
                if used > 0 && used + cols > width {
                    if !piece.is_empty() {
                        row.push(Span::styled(std::mem::take(&mut piece), style));
                    }
                    rows.push(std::mem::take(&mut row));
                    used = 0;
                }
                piece.push(ch);
                used += cols;
            }
            if !piece.is_empty() {
                row.push(Span::styled(piece, style));
            }
        }
        rows.push(row);
        rows
    }

}

/// VS Code dark palette
pub mod theme {
    use ratatui::style::Color;

    pub const BACKGROUND: Color = Color::Rgb(0x1e, 0x1e, 0x1e);
    pub const SIDEBAR: Color = Color::Rgb(0x25, 0x25, 0x26);
    pub const CHROME: Color = Color::Rgb(0x2d, 0x2d, 0x30);
    pub const SELECTION: Color = Color::Rgb(0x37, 0x37, 0x3d);
    pub const ACCENT: Color = Color::Rgb(0x00, 0x78, 0xd4);
    pub const TEXT: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
    pub const MUTED: Color = Color::Rgb(0x85, 0x85, 0x85);
    pub const KEYWORD: Color = Color::Rgb(0x56, 0x9c, 0xd6);
    pub const STRING: Color = Color::Rgb(0xce, 0x91, 0x78);
    pub const COMMENT: Color = Color::Rgb(0x6a, 0x99, 0x55);
    pub const PROPERTY: Color = Color::Rgb(0x9c, 0xdc, 0xfe);
    pub const FOLDER: Color = Color::Rgb(0xdc, 0xb6, 0x7a);
    pub const PROMPT: Color = Color::Green;
}
