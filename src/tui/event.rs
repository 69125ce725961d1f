//! 事件处理模块
//!
//! 使用 crossterm 读取终端事件，并按向导的下一个定时任务缩短等待时间。

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// 事件轮询间隔（毫秒）
const TICK_RATE: u64 = 50;

/// 事件类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// 回车
    Enter,
    /// Esc
    Escape,
    /// 上箭头
    Up,
    /// 下箭头
    Down,
    /// 左箭头
    Left,
    /// 右箭头
    Right,
    /// Tab
    Tab,
    /// Shift+Tab
    BackTab,
    /// 退格
    Backspace,
    /// 字符输入
    Char(char),
    /// Ctrl+C 退出
    CtrlC,
    /// 窗口大小变化
    Resize(u16, u16),
    /// 无事件（超时）
    None,
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => key_event.into(),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            _ => TuiEvent::None,
        }
    }
}

impl From<KeyEvent> for TuiEvent {
    fn from(key: KeyEvent) -> Self {
        // 忽略非按下事件
        if key.kind != KeyEventKind::Press {
            return TuiEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            return TuiEvent::CtrlC;
        }

        match key.code {
            KeyCode::Esc => TuiEvent::Escape,
            KeyCode::Enter => TuiEvent::Enter,
            KeyCode::Up => TuiEvent::Up,
            KeyCode::Down => TuiEvent::Down,
            KeyCode::Left => TuiEvent::Left,
            KeyCode::Right => TuiEvent::Right,
            KeyCode::Tab => TuiEvent::Tab,
            KeyCode::BackTab => TuiEvent::BackTab,
            KeyCode::Backspace => TuiEvent::Backspace,
            KeyCode::Char(c) => TuiEvent::Char(c),
            _ => TuiEvent::None,
        }
    }
}

/// 事件轮询器
#[derive(Debug)]
pub struct EventPoll {
    tick_rate: Duration,
}

impl EventPoll {
    /// 创建事件轮询器
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// 本次等待时长：不超过轮询间隔，也不越过下一个定时任务
    pub fn timeout(&self, now: Instant, deadline: Option<Instant>) -> Duration {
        match deadline {
            Some(due) => self.tick_rate.min(due.saturating_duration_since(now)),
            None => self.tick_rate,
        }
    }

    /// 等待下一个事件
    pub fn next(&self, deadline: Option<Instant>) -> TuiEvent {
        let timeout = self.timeout(Instant::now(), deadline);
        if event::poll(timeout).unwrap_or(false) {
            event::read().map(TuiEvent::from).unwrap_or(TuiEvent::None)
        } else {
            TuiEvent::None
        }
    }
}

impl Default for EventPoll {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_respects_deadline() {
        let poll = EventPoll::default();
        let now = Instant::now();
        assert_eq!(poll.timeout(now, None), Duration::from_millis(TICK_RATE));
        assert_eq!(
            poll.timeout(now, Some(now + Duration::from_millis(10))),
            Duration::from_millis(10)
        );
        assert_eq!(poll.timeout(now, Some(now)), Duration::ZERO);
    }

    #[test]
    fn test_key_mapping() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(TuiEvent::from(key), TuiEvent::CtrlC);
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(TuiEvent::from(key), TuiEvent::Char(' '));
    }
}
