use folio_core::{FormField, SubmitStatus, TabKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;
use crate::components::sidebar::file_icon;
use crate::state::{AppState, Focus};
use crate::utils::{text::wrap_spans, theme};

const GUTTER_WIDTH: usize = 4;

/// Component for rendering the active editor pane
pub struct EditorComponent;

impl EditorComponent {
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let block = Block::default().style(Style::default().bg(theme::BACKGROUND));
        f.render_widget(block, area);

        match state.workbench.active_tab() {
            None => Self::render_welcome(state, f, area),
            Some(tab) => {
                let now = Instant::now();
                let width = (area.width as usize).saturating_sub(GUTTER_WIDTH + 2);
                let lines = match tab {
                    TabKind::About => Self::about_lines(state, now, width),
                    TabKind::Projects => Self::projects_lines(state, now, width),
                    TabKind::Contact => Self::contact_lines(state, now, width),
                };

                let max_scroll = lines.len().saturating_sub(area.height as usize) as u16;
                state.editor_scroll = state.editor_scroll.min(max_scroll);

                let paragraph = Paragraph::new(Text::from(lines)).scroll((state.editor_scroll, 0));
                f.render_widget(paragraph, area);
            }
        }
    }

    fn render_welcome(state: &AppState, f: &mut Frame, area: Rect) {
        let screen = &state.content.welcome_screen;
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                screen.title.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(screen.subtitle.clone(), Style::default().fg(theme::MUTED))),
            Line::from(""),
        ];

        for (i, file) in state.content.sidebar_files.iter().enumerate() {
            let (glyph, color) = file_icon(file.kind);
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(theme::ACCENT)),
                Span::styled(format!("{} ", glyph), Style::default().fg(color)),
                Span::styled(file.name.clone(), Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(file.description.clone(), Style::default().fg(theme::MUTED))));
            lines.push(Line::from(""));
        }

        let social = &state.content.social;
        let links = [
            ("g", "GitHub", social.github.username.as_str()),
            ("l", "LinkedIn", social.linkedin.username.as_str()),
            ("r", "Resume", "download PDF"),
        ];
        for (key, label, detail) in links {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", key), Style::default().fg(theme::ACCENT)),
                Span::styled(label, Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", detail), Style::default().fg(theme::MUTED)),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            screen.tip.clone(),
            Style::default().fg(theme::COMMENT).add_modifier(Modifier::ITALIC),
        )));

        let welcome = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(welcome, area);
    }

    fn about_lines(state: &AppState, now: Instant, width: usize) -> Vec<Line<'static>> {
        let mut source = String::new();
        if let Some(writers) = state.typing.get(&TabKind::About) {
            for (i, writer) in writers.iter().enumerate() {
                if i > 0 {
                    source.push_str("\n\n");
                }
                source.push_str(writer.visible(now));
            }
        }
        Self::code_lines(&source, width)
    }

    fn projects_lines(state: &AppState, now: Instant, width: usize) -> Vec<Line<'static>> {
        let source = state
            .typing
            .get(&TabKind::Projects)
            .and_then(|writers| writers.first())
            .map(|writer| writer.visible(now).to_string())
            .unwrap_or_default();
        let mut lines = Self::code_lines(&source, width);
        if !state.typing_done(TabKind::Projects, now) {
            return lines;
        }

        let mut number = source.lines().count() + 1;
        lines.push(Line::from(""));
        let mut push = |lines: &mut Vec<Line<'static>>, spans: Vec<Span<'static>>| {
            number += 1;
            lines.extend(Self::numbered(number, spans, width));
        };
        push(
            &mut lines,
            vec![Span::styled("// Projects (↑↓ select, Enter details)", Style::default().fg(theme::COMMENT))],
        );
        let focused = state.focus == Focus::Editor;
        for (i, project) in state.content.projects.iter().enumerate() {
            let selected = i == state.project_selected;
            let marker = if selected { "▸ " } else { "  " };
            let mut name_style = Style::default().fg(theme::PROPERTY).add_modifier(Modifier::BOLD);
            if selected && focused {
                name_style = name_style.bg(theme::SELECTION);
            }
            push(
                &mut lines,
                vec![
                    Span::styled(marker, Style::default().fg(theme::ACCENT)),
                    Span::styled(project.name.clone(), name_style),
                    Span::styled(
                        format!("  ★ {}  ⑂ {}  [{}]", project.stars, project.forks, project.status),
                        Style::default().fg(theme::MUTED),
                    ),
                ],
            );
            push(
                &mut lines,
                vec![
                    Span::raw("    "),
                    Span::styled(project.description.clone(), Style::default().fg(theme::TEXT)),
                ],
            );
            push(
                &mut lines,
                vec![
                    Span::raw("    "),
                    Span::styled(project.tech.join(" · "), Style::default().fg(theme::STRING)),
                ],
            );
        }
        lines
    }

    fn contact_lines(state: &AppState, now: Instant, width: usize) -> Vec<Line<'static>> {
        let source = state
            .typing
            .get(&TabKind::Contact)
            .and_then(|writers| writers.first())
            .map(|writer| writer.visible(now).to_string())
            .unwrap_or_default();
        let mut lines = Self::code_lines(&source, width);
        if !state.typing_done(TabKind::Contact, now) {
            return lines;
        }

        let desk = &state.contact;
        let focused = state.focus == Focus::Editor;
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Send me a message",
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for field in FormField::ALL {
            let active = focused && desk.focused == field;
            let label_style = if active {
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::MUTED)
            };
            let mut value = desk.form.field(field).to_string();
            if active && state.cursor_visible && !desk.is_submitting() {
                value.push('▏');
            }
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<8} ", field.label()), label_style),
                Span::styled(
                    format!("[ {} ]", value),
                    Style::default().fg(theme::TEXT).bg(if active { theme::SELECTION } else { theme::SIDEBAR }),
                ),
            ]));
        }

        lines.push(Line::from(""));
        let button = if desk.is_submitting() { "  [ Sending... ]" } else { "  [ Send Message ]" };
        lines.push(Line::from(Span::styled(
            button,
            Style::default().fg(Color::White).bg(theme::ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "  ↑↓ switch field • Enter next/send • Ctrl+S send",
            Style::default().fg(theme::MUTED),
        )));

        if let Some(banner) = desk.status().banner() {
            let color = match desk.status() {
                SubmitStatus::Success => Color::Green,
                _ => Color::LightRed,
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!("  {}", banner), Style::default().fg(color))));
        }
        lines
    }

    /// Number and highlight each line of pseudo-source, wrapping long lines under a blank gutter
    fn code_lines(source: &str, width: usize) -> Vec<Line<'static>> {
        source
            .lines()
            .enumerate()
            .flat_map(|(i, line)| Self::numbered(i + 1, highlight(line), width))
            .collect()
    }

    fn numbered(number: usize, spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
        wrap_spans(spans, width)
            .into_iter()
            .enumerate()
            .map(|(row, mut spans)| {
                let gutter = if row == 0 {
                    format!("{:>width$}  ", number, width = GUTTER_WIDTH)
                } else {
                    " ".repeat(GUTTER_WIDTH + 2)
                };
                spans.insert(0, Span::styled(gutter, Style::default().fg(theme::MUTED)));
                Line::from(spans)
            })
            .collect()
    }
}

/// Minimal colouring for the generated JS-like source
pub fn highlight(line: &str) -> Vec<Span<'static>> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return vec![Span::styled(line.to_string(), Style::default().fg(theme::COMMENT))];
    }

    let mut spans = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        if let Some(start) = rest.find('"') {
            let (plain, quoted) = rest.split_at(start);
            spans.extend(highlight_plain(plain));
            match quoted[1..].find('"') {
                Some(end) => {
                    spans.push(Span::styled(quoted[..end + 2].to_string(), Style::default().fg(theme::STRING)));
                    rest = &quoted[end + 2..];
                }
                None => {
                    spans.push(Span::styled(quoted.to_string(), Style::default().fg(theme::STRING)));
                    rest = "";
                }
            }
        } else {
            spans.extend(highlight_plain(rest));
            rest = "";
        }
    }
    spans
}

fn highlight_plain(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let flush = |word: &mut String, next: Option<char>, spans: &mut Vec<Span<'static>>| {
        if word.is_empty() {
            return;
        }
        let style = if word == "const" {
            Style::default().fg(theme::KEYWORD)
        } else if next == Some(':') {
            Style::default().fg(theme::PROPERTY)
        } else {
            Style::default().fg(theme::TEXT)
        };
        spans.push(Span::styled(std::mem::take(word), style));
    };

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            word.push(ch);
        } else {
            flush(&mut word, Some(ch), &mut spans);
            spans.push(Span::styled(ch.to_string(), Style::default().fg(theme::TEXT)));
        }
    }
    flush(&mut word, None, &mut spans);
    spans
}
