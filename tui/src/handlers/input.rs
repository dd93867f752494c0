use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_core::{FormField, TabKind};
use std::time::Instant;
use tracing::debug;
use crate::state::{AppState, Focus, PaletteAction};
use crate::utils::layout::contains;

const SCROLL_STEP: usize = 3;
const PAGE_STEP: usize = 10;

/// Handles input events for the application
pub struct InputHandler;

impl InputHandler {
    /// Handle input events (keyboard, mouse and resize)
    pub async fn handle_event(state: &mut AppState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::handle_key_event(state, key.code, key.modifiers).await;
            }
            Event::Mouse(mouse_event) => {
                Self::handle_mouse_event(state, mouse_event);
            }
            Event::Resize(_, height) => {
                state.set_viewport(height);
            }
            _ => {}
        }
    }

    async fn handle_key_event(state: &mut AppState, key_code: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && matches!(key_code, KeyCode::Char('c') | KeyCode::Char('q')) {
            state.should_quit = true;
            return;
        }

        if state.command_palette_open {
            Self::handle_palette_key(state, key_code);
            return;
        }

        if state.project_detail_open {
            match key_code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => state.project_detail_open = false,
                KeyCode::Char(c) => {
                    if let Some(link) = state.project_link(c) {
                        state.follow_link(link);
                    }
                }
                _ => {}
            }
            return;
        }

        if ctrl {
            match key_code {
                KeyCode::Char('p') => {
                    state.command_palette_open = true;
                    state.command_palette_selected = 0;
                    state.command_palette_filter.clear();
                }
                KeyCode::Char('b') => state.toggle_sidebar(),
                KeyCode::Char('t') | KeyCode::Char('`') => state.toggle_terminal(),
                KeyCode::Char('w') => Self::close_active_tab(state),
                KeyCode::Char('s') => Self::submit_contact(state),
                KeyCode::Up if state.terminal_open => state.panel.nudge(1, state.viewport_height),
                KeyCode::Down if state.terminal_open => state.panel.nudge(-1, state.viewport_height),
                KeyCode::Right => Self::switch_tab(state, true),
                KeyCode::Left => Self::switch_tab(state, false),
                _ => {}
            }
            return;
        }

        match key_code {
            KeyCode::Tab | KeyCode::BackTab if !Self::editing_form(state) => {
                state.cycle_focus();
                return;
            }
            KeyCode::Char('q') if !Self::accepts_text(state) => {
                state.should_quit = true;
                return;
            }
            _ => {}
        }

        match state.focus {
            Focus::Sidebar => Self::handle_sidebar_key(state, key_code),
            Focus::Editor => Self::handle_editor_key(state, key_code),
            Focus::Terminal => Self::handle_terminal_key(state, key_code),
        }
    }

    fn handle_palette_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => Self::close_palette(state),
            KeyCode::Up => {
                state.command_palette_selected = state.command_palette_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = state.filtered_palette().len();
                if state.command_palette_selected + 1 < count {
                    state.command_palette_selected += 1;
                }
            }
            KeyCode::Enter => Self::execute_selected_entry(state),
            KeyCode::Backspace => {
                if state.command_palette_filter.pop().is_some() {
                    state.command_palette_selected = 0;
                } else {
                    Self::close_palette(state);
                }
            }
            KeyCode::Char(c) => {
                state.command_palette_filter.push(c);
                // Reset selection when filter changes
                state.command_palette_selected = 0;
            }
            _ => {}
        }
    }

    fn close_palette(state: &mut AppState) {
        state.command_palette_open = false;
        state.command_palette_filter.clear();
        state.command_palette_selected = 0;
    }

    /// Execute the currently selected palette entry
    fn execute_selected_entry(state: &mut AppState) {
        let action = state
            .filtered_palette()
            .get(state.command_palette_selected)
            .map(|entry| entry.action);
        Self::close_palette(state);

        let Some(action) = action else {
            return;
        };
        debug!("Palette action: {:?}", action);
        match action {
            PaletteAction::Open(tab) => state.open_tab(tab),
            PaletteAction::Run(kind) => state.run_command(kind),
            PaletteAction::ToggleTerminal => state.toggle_terminal(),
            PaletteAction::ToggleSidebar => state.toggle_sidebar(),
            PaletteAction::Quit => state.should_quit = true,
        }
    }

    fn handle_sidebar_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Up => state.workbench.cursor_up(),
            KeyCode::Down => state.workbench.cursor_down(),
            KeyCode::Enter | KeyCode::Right => {
                if let Some(tab) = state.workbench.open_selected() {
                    state.open_tab(tab);
                }
            }
            KeyCode::Left | KeyCode::Char(' ') => state.workbench.toggle_folder(),
            _ => {}
        }
    }

    fn handle_editor_key(state: &mut AppState, key_code: KeyCode) {
        let Some(tab) = state.workbench.active_tab() else {
            // Welcome screen: number keys open the file cards, letters follow the links
            match key_code {
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if let Some(tab) = state.workbench.open_file(index) {
                        state.open_tab(tab);
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(link) = state.welcome_link(c) {
                        state.follow_link(link);
                    }
                }
                _ => {}
            }
            return;
        };

        if !state.typing_done(tab, Instant::now()) {
            match key_code {
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Esc => state.skip_typing(),
                _ => Self::scroll_editor(state, key_code),
            }
            return;
        }

        match tab {
            TabKind::About => Self::scroll_editor(state, key_code),
            TabKind::Projects => match key_code {
                KeyCode::Up => state.project_selected = state.project_selected.saturating_sub(1),
                KeyCode::Down => {
                    if state.project_selected + 1 < state.content.projects.len() {
                        state.project_selected += 1;
                    }
                }
                KeyCode::Enter if !state.content.projects.is_empty() => {
                    state.project_detail_open = true;
                }
                _ => Self::scroll_editor(state, key_code),
            },
            TabKind::Contact => Self::handle_form_key(state, key_code),
        }
    }

    fn handle_form_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Up | KeyCode::BackTab => state.contact.focus_prev(),
            KeyCode::Down | KeyCode::Tab => state.contact.focus_next(),
            KeyCode::Enter if state.contact.focused == FormField::Message => Self::submit_contact(state),
            KeyCode::Enter => state.contact.focus_next(),
            KeyCode::Backspace => state.contact.delete_char(),
            KeyCode::Char(c) => state.contact.insert_char(c),
            KeyCode::Esc => state.focus = Focus::Sidebar,
            KeyCode::PageUp | KeyCode::PageDown => Self::scroll_editor(state, key_code),
            _ => {}
        }
    }

    fn scroll_editor(state: &mut AppState, key_code: KeyCode) {
        let page = PAGE_STEP as u16;
        state.editor_scroll = match key_code {
            KeyCode::Up => state.editor_scroll.saturating_sub(1),
            KeyCode::Down => state.editor_scroll.saturating_add(1),
            KeyCode::PageUp => state.editor_scroll.saturating_sub(page),
            KeyCode::PageDown => state.editor_scroll.saturating_add(page),
            KeyCode::Home => 0,
            _ => return,
        };
    }

    fn handle_terminal_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Enter => state.submit_terminal_input(),
            KeyCode::Char(c) => Self::insert_char(state, c),
            KeyCode::Backspace => Self::delete_char(state),
            KeyCode::Delete => {
                if state.input_cursor < state.input.len() {
                    state.input.remove(state.input_cursor);
                }
            }
            KeyCode::Left => Self::move_cursor_left(state),
            KeyCode::Right => Self::move_cursor_right(state),
            KeyCode::Home => state.input_cursor = 0,
            KeyCode::End => {
                state.input_cursor = state.input.len();
                state.auto_scroll_terminal = true;
            }
            KeyCode::Up => Self::scroll_terminal_up(state, 1),
            KeyCode::Down => Self::scroll_terminal_down(state, 1),
            KeyCode::PageUp => Self::scroll_terminal_up(state, PAGE_STEP),
            KeyCode::PageDown => Self::scroll_terminal_down(state, PAGE_STEP),
            KeyCode::Esc => {
                state.input.clear();
                state.input_cursor = 0;
            }
            _ => {}
        }
    }

    fn handle_mouse_event(state: &mut AppState, mouse_event: MouseEvent) {
        let (column, row) = (mouse_event.column, mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if state.command_palette_open || state.project_detail_open {
                    return;
                }
                if let Some(terminal) = state.hit_areas.terminal {
                    // The panel's top border is the resize handle
                    if row == terminal.y && column >= terminal.x && column < terminal.x + terminal.width {
                        state.panel.begin();
                        state.focus = Focus::Terminal;
                        return;
                    }
                }

                let file = state
                    .hit_areas
                    .files
                    .iter()
                    .find(|(rect, _)| contains(*rect, column, row))
                    .map(|(_, index)| *index);
                if let Some(index) = file {
                    if let Some(tab) = state.workbench.open_file(index) {
                        state.open_tab(tab);
                    }
                    return;
                }

                let tab = state
                    .hit_areas
                    .tabs
                    .iter()
                    .find(|(rect, _)| contains(*rect, column, row))
                    .and_then(|(_, index)| state.workbench.tabs().get(*index).copied());
                if let Some(tab) = tab {
                    state.open_tab(tab);
                    return;
                }

                Self::focus_at(state, column, row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if state.panel.drag_to(i32::from(row), state.viewport_height) {
                    debug!("Terminal panel resized to {} rows", state.panel.height());
                }
            }
            MouseEventKind::Up(MouseButton::Left) => state.panel.end(),
            MouseEventKind::ScrollUp => {
                if Self::over_terminal(state, column, row) {
                    Self::scroll_terminal_up(state, SCROLL_STEP);
                } else {
                    state.editor_scroll = state.editor_scroll.saturating_sub(SCROLL_STEP as u16);
                }
            }
            MouseEventKind::ScrollDown => {
                if Self::over_terminal(state, column, row) {
                    Self::scroll_terminal_down(state, SCROLL_STEP);
                } else {
                    state.editor_scroll = state.editor_scroll.saturating_add(SCROLL_STEP as u16);
                }
            }
            _ => {}
        }
    }

    fn over_terminal(state: &AppState, column: u16, row: u16) -> bool {
        state
            .hit_areas
            .terminal
            .map_or(false, |rect| contains(rect, column, row))
    }

    fn focus_at(state: &mut AppState, column: u16, row: u16) {
        if Self::over_terminal(state, column, row) {
            state.focus = Focus::Terminal;
        } else if state.hit_areas.sidebar.map_or(false, |rect| contains(rect, column, row)) {
            state.focus = Focus::Sidebar;
        } else if contains(state.hit_areas.editor, column, row) {
            state.focus = Focus::Editor;
        }
    }

    fn switch_tab(state: &mut AppState, forward: bool) {
        if forward {
            state.workbench.next_tab();
        } else {
            state.workbench.prev_tab();
        }
        if let Some(tab) = state.workbench.active_tab() {
            state.open_tab(tab);
        }
    }

    fn close_active_tab(state: &mut AppState) {
        state.workbench.close_active();
        state.editor_scroll = 0;
        state.project_detail_open = false;
    }

    fn submit_contact(state: &mut AppState) {
        if state.workbench.active_tab() != Some(TabKind::Contact) {
            return;
        }
        if !state.contact.submit() {
            debug!("Contact form not sent: incomplete or already sending");
        }
    }

    /// Whether printable keys go into a text field
    fn accepts_text(state: &AppState) -> bool {
        match state.focus {
            Focus::Terminal => true,
            Focus::Editor => Self::editing_form(state),
            Focus::Sidebar => false,
        }
    }

    fn editing_form(state: &AppState) -> bool {
        state.focus == Focus::Editor
            && state.workbench.active_tab() == Some(TabKind::Contact)
            && state.typing_done(TabKind::Contact, Instant::now())
    }

    fn scroll_terminal_up(state: &mut AppState, lines: usize) {
        state.terminal_scroll = state.terminal_scroll.saturating_sub(lines);
        // Disable auto-scroll when user manually scrolls
        state.auto_scroll_terminal = false;
    }

    fn scroll_terminal_down(state: &mut AppState, lines: usize) {
        state.terminal_scroll = state.terminal_scroll.saturating_add(lines);
        state.auto_scroll_terminal = false;
    }

    /// Insert a character at the cursor position
    fn insert_char(state: &mut AppState, ch: char) {
        if state.input_cursor <= state.input.len() {
            state.input.insert(state.input_cursor, ch);
            state.input_cursor += ch.len_utf8();
        }
    }

    /// Delete character before cursor
    fn delete_char(state: &mut AppState) {
        if state.input_cursor > 0 {
            Self::move_cursor_left(state);
            state.input.remove(state.input_cursor);
        }
    }

    /// Move cursor left
    fn move_cursor_left(state: &mut AppState) {
        if state.input_cursor > 0 {
            // Move to previous character boundary
            let mut new_cursor = state.input_cursor - 1;
            while new_cursor > 0 && !state.input.is_char_boundary(new_cursor) {
                new_cursor -= 1;
            }
            state.input_cursor = new_cursor;
        }
    }

    /// Move cursor right
    fn move_cursor_right(state: &mut AppState) {
        if state.input_cursor < state.input.len() {
            let mut new_cursor = state.input_cursor + 1;
            while new_cursor < state.input.len() && !state.input.is_char_boundary(new_cursor) {
                new_cursor += 1;
            }
            state.input_cursor = new_cursor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{make_recording_state, make_state};
    use crossterm::event::KeyEvent;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    async fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            InputHandler::handle_event(state, key(KeyCode::Char(c))).await;
        }
    }

    #[tokio::test]
    async fn test_ctrl_q_quits() {
        let mut state = make_state();
        InputHandler::handle_event(&mut state, ctrl('q')).await;
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_q_is_text_in_terminal() {
        let mut state = make_state();
        state.focus = Focus::Terminal;
        InputHandler::handle_event(&mut state, key(KeyCode::Char('q'))).await;
        assert!(!state.should_quit);
        assert_eq!(state.input, "q");

        state.focus = Focus::Sidebar;
        InputHandler::handle_event(&mut state, key(KeyCode::Char('q'))).await;
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_terminal_typing_and_submit() {
        let mut state = make_state();
        state.focus = Focus::Terminal;
        type_text(&mut state, "echo héllo").await;
        InputHandler::handle_event(&mut state, key(KeyCode::Backspace)).await;
        InputHandler::handle_event(&mut state, key(KeyCode::Left)).await;
        InputHandler::handle_event(&mut state, key(KeyCode::Left)).await;
        InputHandler::handle_event(&mut state, key(KeyCode::Char('X'))).await;
        assert_eq!(state.input, "echo héXll");

        InputHandler::handle_event(&mut state, key(KeyCode::Enter)).await;
        let lines = state.interpreter.history().lines();
        assert_eq!(lines[lines.len() - 2], "$ echo héXll");
        assert_eq!(lines[lines.len() - 1], "héXll");
        assert!(state.input.is_empty());
    }

    #[tokio::test]
    async fn test_drag_on_terminal_border_resizes_panel() {
        let mut state = make_state();
        // viewport 39, panel 10 rows: top border on row 29
        state.hit_areas.terminal = Some(Rect::new(28, 29, 72, 10));

        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 40, 29)).await;
        assert!(state.panel.is_dragging());

        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 19)).await;
        assert_eq!(state.panel.height(), 20);

        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 0)).await;
        assert_eq!(state.panel.height(), 39 - 4);

        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 38)).await;
        assert_eq!(state.panel.height(), 6);

        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 40, 38)).await;
        assert!(!state.panel.is_dragging());

        // Moves after release are ignored
        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10)).await;
        assert_eq!(state.panel.height(), 6);
    }

    #[tokio::test]
    async fn test_drag_without_press_on_border_is_ignored() {
        let mut state = make_state();
        state.hit_areas.terminal = Some(Rect::new(28, 29, 72, 10));
        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 40, 31)).await;
        assert!(!state.panel.is_dragging());
        assert_eq!(state.focus, Focus::Terminal);

        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 5)).await;
        assert_eq!(state.panel.height(), 10);
    }

    #[tokio::test]
    async fn test_ctrl_arrows_nudge_panel() {
        let mut state = make_state();
        let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL));
        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL));
        InputHandler::handle_event(&mut state, up.clone()).await;
        InputHandler::handle_event(&mut state, up).await;
        assert_eq!(state.panel.height(), 12);
        for _ in 0..20 {
            InputHandler::handle_event(&mut state, down.clone()).await;
        }
        assert_eq!(state.panel.height(), 6);
    }

    #[tokio::test]
    async fn test_resize_event_refits_panel() {
        let mut state = make_state();
        state.panel.nudge(25, state.viewport_height);
        assert_eq!(state.panel.height(), 35);
        InputHandler::handle_event(&mut state, Event::Resize(100, 20)).await;
        assert_eq!(state.viewport_height, 19);
        assert_eq!(state.panel.height(), 15);
    }

    #[tokio::test]
    async fn test_palette_opens_file() {
        let mut state = make_state();
        InputHandler::handle_event(&mut state, ctrl('p')).await;
        assert!(state.command_palette_open);
        type_text(&mut state, "contact").await;
        InputHandler::handle_event(&mut state, key(KeyCode::Enter)).await;
        assert!(!state.command_palette_open);
        assert_eq!(state.workbench.active_tab(), Some(TabKind::Contact));
        assert_eq!(state.focus, Focus::Editor);
    }

    #[tokio::test]
    async fn test_palette_runs_command() {
        let mut state = make_state();
        InputHandler::handle_event(&mut state, ctrl('p')).await;
        type_text(&mut state, "> ls").await;
        InputHandler::handle_event(&mut state, key(KeyCode::Enter)).await;
        assert!(state.interpreter.history().lines().iter().any(|l| l == "$ ls"));
    }

    #[tokio::test]
    async fn test_sidebar_enter_opens_file() {
        let mut state = make_state();
        InputHandler::handle_event(&mut state, key(KeyCode::Down)).await;
        InputHandler::handle_event(&mut state, key(KeyCode::Enter)).await;
        assert_eq!(state.workbench.active_tab(), Some(TabKind::Projects));
        assert_eq!(state.focus, Focus::Editor);
    }

    #[tokio::test]
    async fn test_welcome_number_keys_open_cards() {
        let mut state = make_state();
        state.focus = Focus::Editor;
        InputHandler::handle_event(&mut state, key(KeyCode::Char('3'))).await;
        assert_eq!(state.workbench.active_tab(), Some(TabKind::Contact));
    }

    #[tokio::test]
    async fn test_welcome_link_keys() {
        let (mut state, effects) = make_recording_state();
        state.focus = Focus::Editor;
        for c in ['g', 'l', 'r', 'x'] {
            InputHandler::handle_event(&mut state, key(KeyCode::Char(c))).await;
        }

        let opened = effects.opened.lock().unwrap().clone();
        assert_eq!(
            opened,
            vec![
                state.content.social.github.url.clone(),
                state.content.social.linkedin.url.clone(),
            ]
        );
        let downloads = effects.downloads.lock().unwrap().clone();
        assert_eq!(
            downloads,
            vec![(state.content.personal.resume_path.clone(), "resume.pdf".to_string())]
        );
        assert_eq!(state.workbench.active_tab(), None);
        // links never write to the terminal scrollback
        assert_eq!(
            state.interpreter.history().lines(),
            state.content.terminal.welcome.as_slice()
        );
    }

    #[tokio::test]
    async fn test_project_detail_link_keys() {
        let (mut state, effects) = make_recording_state();
        std::sync::Arc::make_mut(&mut state.content).projects[1].demo =
            Some("https://demo.example.com".to_string());
        state.open_tab(TabKind::Projects);
        state.skip_typing();
        state.project_selected = 1;
        state.project_detail_open = true;

        InputHandler::handle_event(&mut state, key(KeyCode::Char('g'))).await;
        InputHandler::handle_event(&mut state, key(KeyCode::Char('d'))).await;
        assert!(state.project_detail_open);
        assert_eq!(
            effects.opened.lock().unwrap().clone(),
            vec![state.content.projects[1].github.clone(), "https://demo.example.com".to_string()]
        );

        // a project without a demo ignores `d`
        state.project_selected = 0;
        InputHandler::handle_event(&mut state, key(KeyCode::Char('d'))).await;
        assert_eq!(effects.opened.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_project_detail_popup() {
        let mut state = make_state();
        state.open_tab(TabKind::Projects);
        InputHandler::handle_event(&mut state, key(KeyCode::Char(' '))).await;
        assert!(state.typing_done(TabKind::Projects, Instant::now()));

        InputHandler::handle_event(&mut state, key(KeyCode::Down)).await;
        assert_eq!(state.project_selected, 1);
        InputHandler::handle_event(&mut state, key(KeyCode::Enter)).await;
        assert!(state.project_detail_open);
        InputHandler::handle_event(&mut state, key(KeyCode::Esc)).await;
        assert!(!state.project_detail_open);
    }

    #[tokio::test]
    async fn test_contact_form_editing() {
        let mut state = make_state();
        state.open_tab(TabKind::Contact);
        state.skip_typing();

        type_text(&mut state, "Ada q").await;
        assert!(!state.should_quit);
        InputHandler::handle_event(&mut state, key(KeyCode::Backspace)).await;
        InputHandler::handle_event(&mut state, key(KeyCode::Enter)).await;
        assert_eq!(state.contact.form.name, "Ada ");
        assert_eq!(state.contact.focused, FormField::Email);

        // Incomplete form stays put and focuses the blank field
        let save = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        InputHandler::handle_event(&mut state, save).await;
        assert!(!state.contact.is_submitting());
        assert_eq!(state.contact.focused, FormField::Email);
    }

    #[tokio::test]
    async fn test_click_file_and_tab() {
        let mut state = make_state();
        state.hit_areas.files = vec![(Rect::new(0, 4, 27, 1), 0), (Rect::new(0, 5, 27, 1), 1)];
        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 3, 5)).await;
        assert_eq!(state.workbench.active_tab(), Some(TabKind::Projects));

        state.open_tab(TabKind::About);
        state.hit_areas.tabs = vec![(Rect::new(28, 2, 15, 1), 0), (Rect::new(44, 2, 12, 1), 1)];
        InputHandler::handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 30, 2)).await;
        assert_eq!(state.workbench.active_tab(), Some(TabKind::Projects));
    }

    #[tokio::test]
    async fn test_ctrl_w_closes_to_welcome() {
        let mut state = make_state();
        state.open_tab(TabKind::About);
        InputHandler::handle_event(&mut state, ctrl('w')).await;
        assert_eq!(state.workbench.active_tab(), None);
    }
}
