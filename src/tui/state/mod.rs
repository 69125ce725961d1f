//! TUI 状态模块

pub mod app;
pub mod contact;
pub mod screen;
pub mod selection;

pub use app::{AppState, TuiResult};
pub use contact::ContactView;
pub use screen::Screen;
pub use selection::{OptionCursor, Selectable};
