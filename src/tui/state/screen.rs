//! 屏幕状态

/// 屏幕枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 项目向导（含摘要与结束页）
    #[default]
    Wizard,
    /// 联系表单
    Contact,
    /// 退出
    Exit,
}
