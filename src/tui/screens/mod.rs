//! 各屏幕渲染

pub mod contact;
pub mod exit;
pub mod final_step;
pub mod summary;
pub mod wizard;
