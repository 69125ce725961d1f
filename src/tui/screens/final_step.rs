//! 结束页渲染

use crate::labels::{final_body, final_title};
use crate::tui::components::{render_hint, render_title_block, three_panel_layout};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染结束消息
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);
    let locale = state.locale;

    render_title_block(&t!("app_title", locale = locale), frame, header);

    let lines = match state.surface.final_message() {
        Some(message) => vec![
            Line::from(""),
            Line::from(final_title(message, locale).into_owned()).style(theme().success()),
            Line::from(""),
            Line::from(final_body(message, locale).into_owned()).style(theme().normal()),
        ],
        None => Vec::new(),
    };

    let message = Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .style(theme().normal())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, body);

    render_hint(&t!("hint_final", locale = locale), frame, footer);
}
