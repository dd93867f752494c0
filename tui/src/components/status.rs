use folio_core::SubmitStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::state::{AppState, Focus};
use crate::utils::theme;

/// Component for rendering the status line
pub struct StatusComponent;

impl StatusComponent {
    /// Render the status line
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let focus = match state.focus {
            Focus::Sidebar => "Explorer",
            Focus::Editor => "Editor",
            Focus::Terminal => "Terminal",
        };

        let mut spans = vec![
            Span::styled(" ⎇ main ", Style::default().fg(Color::White).bg(theme::ACCENT)),
            Span::raw(format!(" {} ", focus)),
        ];

        if state.contact.is_submitting() {
            spans.push(Span::styled(" ● Sending... ", Style::default().fg(Color::Yellow)));
        } else if state.contact.status() == SubmitStatus::Error {
            spans.push(Span::styled(" ✗ Message failed ", Style::default().fg(Color::LightRed)));
        }

        if state.panel.is_dragging() {
            spans.push(Span::raw(format!(" Terminal: {} rows ", state.panel.height())));
        }

        spans.push(Span::styled(
            " Ctrl+P quick open | Ctrl+T terminal | Ctrl+B explorer | Tab focus | Ctrl+Q quit",
            Style::default().fg(Color::White),
        ));

        let status = Paragraph::new(Line::from(spans))
            .style(Style::default().fg(Color::White).bg(theme::ACCENT));
        f.render_widget(status, area);
    }
}

/// Component for rendering the window title bar
pub struct TitleBarComponent;

impl TitleBarComponent {
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let dots = [Color::Red, Color::Yellow, Color::Green]
            .into_iter()
            .map(|color| Span::styled("● ", Style::default().fg(color)));

        let title = match state.workbench.active_tab() {
            Some(tab) => format!("{} - {}", state.content.tab_title(tab), state.content.personal.name),
            None => format!("Welcome - {}", state.content.personal.name),
        };

        let mut spans: Vec<Span> = std::iter::once(Span::raw(" ")).chain(dots).collect();
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let pad = (area.width as usize).saturating_sub(title.chars().count()) / 2;
        spans.push(Span::raw(" ".repeat(pad.saturating_sub(used))));
        spans.push(Span::styled(title, Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)));

        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::CHROME)),
            area,
        );
    }
}
