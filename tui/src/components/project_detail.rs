use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::state::AppState;
use crate::utils::{layout, theme};

/// Component for rendering the project detail popup
pub struct ProjectDetailComponent;

impl ProjectDetailComponent {
    pub fn render(state: &AppState, f: &mut Frame) {
        let Some(project) = state.content.projects.get(state.project_selected) else {
            return;
        };
        let area = layout::centered_rect(70, 70, f.size());
        f.render_widget(Clear, area);

        let heading = Style::default().fg(theme::PROPERTY).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("★ {}  ", project.stars), Style::default().fg(Color::Yellow)),
                Span::styled(format!("⑂ {}  ", project.forks), Style::default().fg(theme::MUTED)),
                Span::styled(project.status.clone(), Style::default().fg(Color::Green)),
                Span::styled(
                    format!("  updated {}", project.last_updated),
                    Style::default().fg(theme::MUTED),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(project.detailed_description.clone(), Style::default().fg(theme::TEXT))),
            Line::from(""),
            Line::from(Span::styled("Tech", heading)),
            Line::from(Span::styled(project.tech.join(", "), Style::default().fg(theme::STRING))),
        ];

        if !project.features.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Features", heading)));
            for feature in &project.features {
                lines.push(Line::from(format!("  • {}", feature)));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("GitHub: ", heading),
            Span::styled(project.github.clone(), Style::default().fg(theme::KEYWORD)),
        ]));
        if let Some(demo) = &project.demo {
            lines.push(Line::from(vec![
                Span::styled("Demo:   ", heading),
                Span::styled(demo.clone(), Style::default().fg(theme::KEYWORD)),
            ]));
        }
        lines.push(Line::from(""));
        let footer = if project.demo.is_some() {
            "g open GitHub • d open demo • Esc close"
        } else {
            "g open GitHub • Esc close"
        };
        lines.push(Line::from(Span::styled(footer, Style::default().fg(theme::MUTED))));

        let popup = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::ACCENT))
                    .title(format!(" {} ", project.name))
                    .title_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().bg(theme::SIDEBAR))
            .wrap(Wrap { trim: false });
        f.render_widget(popup, area);
    }
}
