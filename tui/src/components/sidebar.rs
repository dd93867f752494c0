use folio_core::content::FileKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::state::{AppState, Focus};
use crate::utils::theme;

/// Component for rendering the explorer sidebar
pub struct SidebarComponent;

impl SidebarComponent {
    /// Render the explorer and record the clickable file rows
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let focused = state.focus == Focus::Sidebar;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(if focused { theme::ACCENT } else { theme::CHROME }))
            .style(Style::default().bg(theme::SIDEBAR));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                " EXPLORER",
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let folder_open = state.workbench.folder_open();
        lines.push(Line::from(vec![
            Span::styled(if folder_open { " ▾ " } else { " ▸ " }, Style::default().fg(theme::TEXT)),
            Span::styled("■ ", Style::default().fg(theme::FOLDER)),
            Span::styled("PORTFOLIO", Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)),
        ]));

        state.hit_areas.files.clear();
        if folder_open {
            let first_row = inner.y + lines.len() as u16;
            for (i, file) in state.workbench.files().iter().enumerate() {
                let active = state.workbench.is_active_file(file);
                let under_cursor = focused && state.workbench.cursor() == i;
                let mut style = Style::default().fg(theme::TEXT);
                if active {
                    style = style.bg(theme::SELECTION);
                }
                if under_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let (glyph, color) = file_icon(file.kind);
                lines.push(Line::from(vec![
                    Span::styled(if active { "  ┃" } else { "   " }, Style::default().fg(theme::ACCENT)),
                    Span::styled(format!("{} ", glyph), style.fg(color)),
                    Span::styled(file.name.clone(), style),
                ]));

                let row = first_row + i as u16;
                if row < inner.y + inner.height {
                    state
                        .hit_areas
                        .files
                        .push((Rect::new(inner.x, row, inner.width, 1), i));
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {} files", state.workbench.files().len()),
            Style::default().fg(theme::MUTED),
        )));

        f.render_widget(Paragraph::new(lines), inner);
    }
}

/// Glyph and colour for a file kind
pub fn file_icon(kind: FileKind) -> (&'static str, Color) {
    match kind {
        FileKind::React => ("⚛", Color::Rgb(0x61, 0xda, 0xfb)),
        FileKind::Typescript => ("TS", Color::Rgb(0x31, 0x78, 0xc6)),
        FileKind::Json => ("{}", Color::Rgb(0xcb, 0xcb, 0x41)),
        FileKind::Markdown => ("M↓", Color::Rgb(0x51, 0x9a, 0xba)),
        FileKind::Plain => ("≡", theme::TEXT),
    }
}
