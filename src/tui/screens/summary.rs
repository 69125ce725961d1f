//! 摘要屏幕渲染

use crate::builder::step::Track;
use crate::labels::{outcome_label, step_title, summary_line_text};
use crate::builder::summary::Outcome;
use crate::tui::components::{render_hint, render_title_block, three_panel_layout};
use crate::tui::state::AppState;
use crate::tui::theme::{icon_glyph, theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染摘要屏幕
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, track: Track) {
    let [header, body, footer] = three_panel_layout(area);
    let locale = state.locale;

    render_title_block(&step_title(track.summary_step(), locale), frame, header);

    let [lines_area, actions_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(body);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(summary) = state.surface.summary(track) {
        for line in &summary.lines {
            if line.starts_block() && !lines.is_empty() {
                lines.push(Line::from(""));
            }
            let text = summary_line_text(line, locale).into_owned();
            let text_style = if line.is_emphasized() {
                theme().emphasis()
            } else {
                theme().normal()
            };
            let glyph = icon_glyph(line.icon());
            let spans = if glyph.is_empty() {
                vec![Span::styled(text, text_style)]
            } else {
                vec![
                    Span::styled(format!("{glyph} "), theme().icon(line.icon())),
                    Span::styled(text, text_style),
                ]
            };
            lines.push(Line::from(spans));
        }
    }

    let summary = Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .style(theme().normal())
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, lines_area);

    let actions = Line::from(vec![
        Span::styled(
            format!("[s] {}", outcome_label(Outcome::Committed, locale)),
            theme().success(),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[l] {}", outcome_label(Outcome::Saved, locale)),
            theme().emphasis(),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(actions).style(theme().normal()), actions_area);

    let hint = state
        .notice
        .clone()
        .unwrap_or_else(|| t!("hint_summary", locale = locale).into_owned());
    render_hint(&hint, frame, footer);
}
