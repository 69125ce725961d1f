//! 选项步骤渲染

use crate::builder::step::{Step, Track};
use crate::builder::surface::Control;
use crate::labels::{option_label, step_title};
use crate::tui::components::{
    render_hint, render_title_block, render_tooltip, three_panel_layout, tooltip_area,
    truncate_value,
};
use crate::tui::state::AppState;
use crate::tui::theme::{HIGHLIGHT_SYMBOL, theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Paragraph},
};
use rust_i18n::t;

/// 渲染单选或多选步骤
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    let step = state.cursor.step();
    let locale = state.locale;

    let title = match step_number(step) {
        Some(current) => format!(
            "{} · {}",
            t!("step_progress", locale = locale, current = current),
            step_title(step, locale)
        ),
        None => format!(
            "{} · {}",
            t!("app_subtitle", locale = locale),
            step_title(step, locale)
        ),
    };
    render_title_block(&title, frame, header);

    let [list_area, control_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(body);

    let multi = step.is_multi_select();
    let max_width = list_area.width.saturating_sub(10) as usize;
    let items: Vec<ListItem> = state
        .cursor
        .options()
        .iter()
        .map(|option| {
            let active = state.surface.is_option_active(step, option.value);
            let marker = match (multi, active) {
                (true, true) => "[x] ",
                (true, false) => "[ ] ",
                (false, true) => "● ",
                (false, false) => "○ ",
            };
            let label = truncate_value(&option_label(step, option.value, locale), max_width);
            let style = if active { theme().active() } else { theme().normal() };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, list_area, &mut state.cursor.list_state);

    draw_controls(frame, control_area, state, step);

    let hint = match &state.notice {
        Some(notice) => notice.clone(),
        None if multi => t!("hint_multi", locale = locale).into_owned(),
        None => t!("hint_single", locale = locale).into_owned(),
    };
    render_hint(&hint, frame, footer);

    if state.show_tooltip {
        if let Some(text) = state.tooltip_text() {
            let row = state
                .cursor
                .list_state
                .selected()
                .unwrap_or(0)
                .saturating_sub(state.cursor.list_state.offset());
            let anchor = Rect::new(
                list_area.x + 1,
                list_area.y + 1 + row as u16,
                list_area.width.saturating_sub(2),
                1,
            );
            let tooltip = tooltip_area(anchor, &text, area, state.tooltip_rules);
            render_tooltip(&text, frame, tooltip);
        }
    }
}

/// 控件行：上一步、继续（多选）、重新开始、联系
fn draw_controls(frame: &mut Frame, area: Rect, state: &AppState, step: Step) {
    let locale = state.locale;
    let button = |label: String, enabled: bool| {
        let style = if enabled { theme().emphasis() } else { theme().disabled() };
        Span::styled(format!("[ {label} ]"), style)
    };

    let mut spans = vec![button(
        t!("action_back", locale = locale).into_owned(),
        state.surface.is_enabled(Control::Back),
    )];
    if step.is_multi_select() {
        let count = state.wizard.selections().selected_count(step).unwrap_or(0);
        spans.push(Span::raw("  "));
        spans.push(button(
            t!("action_continue", locale = locale).into_owned(),
            state.surface.is_enabled(Control::Continue(step)),
        ));
        spans.push(Span::styled(
            format!(" {}", t!("selected_count", locale = locale, count = count)),
            theme().hint(),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(button(
        t!("action_restart", locale = locale).into_owned(),
        state.surface.is_enabled(Control::Restart),
    ));
    spans.push(Span::raw("  "));
    spans.push(button(t!("action_contact", locale = locale).into_owned(), true));

    let line = Line::from(spans).centered();
    frame.render_widget(Paragraph::new(line).style(theme().normal()), area);
}

/// 步骤在所属流程中的序号（从 1 开始）
fn step_number(step: Step) -> Option<usize> {
    let track: Track = step.track()?;
    Step::ALL
        .iter()
        .filter(|s| s.track() == Some(track))
        .position(|s| *s == step)
        .map(|index| index + 1)
}
