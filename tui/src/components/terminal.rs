use folio_core::terminal::PROMPT;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use crate::state::{AppState, Focus};
use crate::utils::{text::wrap_line, theme};

/// Component for rendering the terminal panel
pub struct TerminalComponent;

impl TerminalComponent {
    /// Render the history and the prompt line. The top border is the drag handle.
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let focused = state.focus == Focus::Terminal;
        let handle_style = if state.panel.is_dragging() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default().fg(theme::ACCENT)
        } else {
            Style::default().fg(theme::CHROME)
        };

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(handle_style)
            .title(Span::styled(
                " TERMINAL ",
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ))
            .title(Span::styled(" bash ", Style::default().fg(theme::MUTED)))
            .style(Style::default().bg(theme::BACKGROUND));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let width = inner.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for entry in state.interpreter.history().lines() {
            let style = Self::line_style(entry);
            for piece in wrap_line(entry, width) {
                lines.push(Line::from(Span::styled(piece, style)));
            }
        }
        lines.push(Self::prompt_line(state, focused));

        let content_height = lines.len();
        let visible_height = inner.height as usize;
        let max_scroll = content_height.saturating_sub(visible_height);
        let scroll_pos = if state.auto_scroll_terminal {
            max_scroll
        } else {
            state.terminal_scroll.min(max_scroll)
        };
        state.terminal_scroll = scroll_pos;

        let visible: Vec<Line> = lines.into_iter().skip(scroll_pos).take(visible_height).collect();
        f.render_widget(
            Paragraph::new(Text::from(visible)),
            inner.inner(&Margin { vertical: 0, horizontal: 1 }),
        );

        if content_height > visible_height {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None);
            let mut scrollbar_state = ScrollbarState::new(max_scroll.max(1)).position(scroll_pos);
            f.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
        }
    }

    fn line_style(line: &str) -> Style {
        if line.starts_with("Command not found") {
            Style::default().fg(Color::LightRed)
        } else if line.starts_with(PROMPT) {
            Style::default().fg(theme::PROMPT)
        } else {
            Style::default().fg(theme::TEXT)
        }
    }

    fn prompt_line(state: &AppState, focused: bool) -> Line<'static> {
        let cursor = state.input_cursor.min(state.input.len());
        let (before, rest) = state.input.split_at(cursor);
        let mut chars = rest.chars();
        let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = chars.collect();

        let cursor_style = if focused && state.cursor_visible {
            Style::default().fg(theme::BACKGROUND).bg(theme::TEXT)
        } else {
            Style::default().fg(theme::TEXT)
        };

        Line::from(vec![
            Span::styled(format!("{} ", PROMPT), Style::default().fg(theme::PROMPT).add_modifier(Modifier::BOLD)),
            Span::styled(before.to_string(), Style::default().fg(theme::TEXT)),
            Span::styled(under, cursor_style),
            Span::styled(after, Style::default().fg(theme::TEXT)),
        ])
    }
}
