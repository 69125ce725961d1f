//! UI渲染模块
//!
//! 按当前屏幕与可见步骤分发到各屏幕的渲染函数。

use crate::builder::step::{Step, Track};
use crate::tui::screens;
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::theme;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

/// 设置全局背景
fn set_background(area: Rect, buf: &mut Buffer) {
    let style = Style::new().bg(theme().bg);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut(Position { x, y }) {
                cell.set_style(style);
            }
        }
    }
}

/// 渲染整个应用
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, frame.area(), state))?;
    Ok(())
}

/// 主渲染函数
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    set_background(area, frame.buffer_mut());

    match state.screen {
        Screen::Wizard => match state.visible_step() {
            Step::WebSummary => screens::summary::draw(frame, area, state, Track::WebDevelopment),
            Step::CloudSummary => screens::summary::draw(frame, area, state, Track::CloudServices),
            Step::Final => screens::final_step::draw(frame, area, state),
            _ => screens::wizard::draw(frame, area, state),
        },
        Screen::Contact => screens::contact::draw(frame, area, state),
        Screen::Exit => screens::exit::draw(frame, area, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WizardEvent;
    use crate::config::AppConfig;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_track_select_renders_both_tracks() {
        let mut state = AppState::new(&AppConfig::default(), "nl").unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, frame.area(), &mut state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Webontwikkeling"));
        assert!(text.contains("Cloud services"));
    }

    #[test]
    fn test_final_step_renders_message() {
        let config = AppConfig {
            select_delay_ms: 0,
            start_delay_ms: 0,
            ..AppConfig::default()
        };
        let mut state = AppState::new(&config, "nl").unwrap();
        let now = Instant::now();
        state.dispatch(WizardEvent::GoToStep { step: Step::WebSummary }, now);
        state.dispatch(
            WizardEvent::Finish {
                outcome: crate::builder::Outcome::Saved,
                track: Track::WebDevelopment,
            },
            now,
        );

        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|frame| draw(frame, frame.area(), &mut state)).unwrap();
        assert!(buffer_text(&terminal).contains("Opgeslagen!"));
    }
}
