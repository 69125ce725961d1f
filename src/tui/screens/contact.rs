//! 联系表单渲染

use crate::contact::{Field, SubmitPhase};
use crate::tui::components::{render_hint, render_title_block, three_panel_layout};
use crate::tui::state::AppState;
use crate::tui::theme::{HIGHLIGHT_SYMBOL, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染联系表单或发送结果
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);
    let locale = state.locale;

    render_title_block(&t!("contact_title", locale = locale), frame, header);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme().border());

    if let SubmitPhase::Succeeded { .. } = state.contact.session.phase() {
        let lines = vec![
            Line::from(""),
            Line::from(t!("contact_success_title", locale = locale).into_owned())
                .style(theme().success()),
            Line::from(t!("contact_success_body", locale = locale).into_owned()),
        ];
        let success = Paragraph::new(lines)
            .block(block)
            .style(theme().normal())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(success, body);
        render_hint(&t!("hint_contact", locale = locale), frame, footer);
        return;
    }

    let session = &state.contact.session;
    let mut lines: Vec<Line> = Vec::with_capacity(Field::ALL.len() * 2 + 2);
    for field in Field::ALL {
        let focused = field == state.contact.focus;
        let prefix = if focused { HIGHLIGHT_SYMBOL } else { "  " };
        let label_style = if focused { theme().selected() } else { theme().hint() };
        let required = if field.is_required() { " *" } else { "" };

        let value = match session.form.text(field) {
            Some(text) => text.to_string(),
            None if session.form.privacy => "[x]".to_string(),
            None => "[ ]".to_string(),
        };

        lines.push(Line::from(vec![
            Span::raw(prefix),
            Span::styled(format!("{}{}", field.label(locale), required), label_style),
            Span::raw(": "),
            Span::styled(value, theme().normal()),
        ]));

        if session.is_invalid(field) {
            if let Some(message) = field.error_message(locale) {
                lines.push(Line::from(format!("    {message}")).style(theme().error()));
            }
        }
    }

    lines.push(Line::from(""));
    let submit = match session.phase() {
        SubmitPhase::Sending => {
            Span::styled(format!("[ {} ]", t!("contact_sending", locale = locale)), theme().disabled())
        }
        _ => Span::styled(format!("[ {} ]", t!("contact_submit", locale = locale)), theme().emphasis()),
    };
    lines.push(Line::from(submit).centered());

    let form = Paragraph::new(lines)
        .block(block)
        .style(theme().normal())
        .wrap(Wrap { trim: false });
    frame.render_widget(form, body);

    render_hint(&t!("hint_contact", locale = locale), frame, footer);
}
