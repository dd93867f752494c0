use ratatui::{
    layout::Rect,
    style::{Color, Style, Modifier},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use crate::state::AppState;
use crate::utils::{layout, theme};

/// Component for rendering the quick-open overlay
pub struct CommandPaletteComponent;

impl CommandPaletteComponent {
    /// Render the quick-open overlay centered on the frame
    pub fn render(state: &mut AppState, f: &mut Frame) {
        let popup_area = layout::centered_rect(60, 50, f.size());
        f.render_widget(Clear, popup_area);

        let count = state.filtered_palette().len();
        if state.command_palette_selected >= count {
            state.command_palette_selected = count.saturating_sub(1);
        }
        let selected = state.command_palette_selected;
        let entries = state.filtered_palette();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)),
                Span::styled(
                    if state.command_palette_filter.is_empty() {
                        "Search files and commands".to_string()
                    } else {
                        state.command_palette_filter.clone()
                    },
                    Style::default().fg(if state.command_palette_filter.is_empty() {
                        theme::MUTED
                    } else {
                        theme::TEXT
                    }),
                ),
            ]),
            Line::from(""),
        ];

        // Keep the selection on screen: two rows per entry below the header and above the footer
        let capacity = (popup_area.height.saturating_sub(6) as usize / 2).max(1);
        let first = selected.saturating_sub(capacity - 1);

        if entries.is_empty() {
            lines.push(Line::from(Span::styled(
                "No matching results",
                Style::default().fg(Color::Red),
            )));
        } else {
            for (i, entry) in entries.iter().enumerate().skip(first).take(capacity) {
                let is_selected = i == selected;
                let style = if is_selected {
                    Style::default().bg(theme::SELECTION).fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                lines.push(Line::from(vec![
                    Span::styled(if is_selected { "► " } else { "  " }, style),
                    Span::styled(
                        entry.name.clone(),
                        style.fg(if is_selected { Color::Yellow } else { theme::PROPERTY }),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("    ", style),
                    Span::styled(
                        entry.description.clone(),
                        style.fg(if is_selected { Color::White } else { theme::MUTED }),
                    ),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑↓ Navigate • Enter Select • Esc Close",
            Style::default().fg(theme::MUTED),
        )));

        let popup = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::ACCENT))
                    .title(" Go to File or Command ")
                    .title_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().bg(theme::SIDEBAR));

        f.render_widget(popup, popup_area);
    }
}
