use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::components::sidebar::file_icon;
use crate::state::AppState;
use crate::utils::theme;

/// Component for rendering the editor tab strip
pub struct TabBarComponent;

impl TabBarComponent {
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        state.hit_areas.tabs.clear();

        let mut spans = Vec::new();
        let mut x = area.x;
        let active = state.workbench.active_index();
        for (i, tab) in state.workbench.tabs().iter().enumerate() {
            let title = state.content.tab_title(*tab);
            let glyph = state
                .content
                .sidebar_file(*tab)
                .map(|file| file_icon(file.kind))
                .unwrap_or(("≡", theme::TEXT));
            let label = format!(" {} {} × ", glyph.0, title);
            let width = label.chars().count() as u16;

            let style = if Some(i) == active {
                Style::default()
                    .fg(theme::TEXT)
                    .bg(theme::BACKGROUND)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::MUTED).bg(theme::CHROME)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::styled("│", Style::default().fg(theme::BACKGROUND).bg(theme::CHROME)));

            let visible = x.saturating_add(width).min(area.x + area.width) - x.min(area.x + area.width);
            if visible > 0 {
                state.hit_areas.tabs.push((Rect::new(x, area.y, visible, 1), i));
            }
            x = x.saturating_add(width + 1);
        }

        if spans.is_empty() {
            spans.push(Span::styled(" Welcome ", Style::default().fg(theme::TEXT).bg(theme::BACKGROUND)));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::CHROME));
        f.render_widget(bar, area);
    }
}
