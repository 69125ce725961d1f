//! 退出页渲染

use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染告别信息
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let goodbye = Paragraph::new(t!("goodbye", locale = state.locale))
        .style(theme().title())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(goodbye, middle);
}
