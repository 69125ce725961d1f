//! Ratatui 终端 UI 模块
//!
//! 提供基于 ratatui 的项目向导终端界面。

pub mod app;
pub mod components;
pub mod event;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::{TuiApp, handle_event};
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, Screen, TuiResult};
pub use theme::{Theme, theme};
pub use ui::render;
