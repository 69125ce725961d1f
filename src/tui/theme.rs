//! 主题模块
//!
//! 向导界面的统一配色。

use crate::builder::summary::LineIcon;
use ratatui::style::{Color, Modifier, Style};

/// 高亮符号
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 强调色
    pub accent: Color,
    /// 光标所在行背景色
    pub selected_bg: Color,
    /// 光标所在行前景色
    pub selected_fg: Color,
    /// 已选选项颜色
    pub active: Color,
    /// 成功色
    pub success: Color,
    /// 警告色
    pub warning: Color,
    /// 错误色
    pub error: Color,
    /// 提示/次要文字色
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 标题颜色
    pub title: Color,
}

/// 全局主题实例
pub static THEME: Theme = Theme {
    bg: Color::Black,
    fg: Color::White,
    accent: Color::Cyan,
    selected_bg: Color::Cyan,
    selected_fg: Color::Black,
    active: Color::LightGreen,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    hint: Color::Gray,
    border: Color::Cyan,
    title: Color::Cyan,
};

/// 获取全局主题引用
pub fn theme() -> &'static Theme {
    &THEME
}

impl Theme {
    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 光标所在行样式
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 已选选项样式
    pub fn active(&self) -> Style {
        Style::new().fg(self.active).bg(self.bg)
    }

    /// 加粗文本
    pub fn emphasis(&self) -> Style {
        self.normal().add_modifier(Modifier::BOLD)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    /// 禁用控件样式
    pub fn disabled(&self) -> Style {
        self.hint().add_modifier(Modifier::DIM)
    }

    /// 成功样式
    pub fn success(&self) -> Style {
        Style::new().fg(self.success).bg(self.bg)
    }

    /// 警告样式
    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bg(self.bg)
    }

    /// 错误样式
    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.bg)
    }

    /// 提示框样式
    pub fn tooltip(&self) -> Style {
        Style::new().fg(self.bg).bg(self.accent)
    }

    /// 摘要行图标颜色
    pub fn icon(&self, icon: LineIcon) -> Style {
        let color = match icon {
            LineIcon::Package | LineIcon::Puzzle | LineIcon::Cloud => self.accent,
            LineIcon::Check | LineIcon::ArrowUp => self.success,
            LineIcon::Warning => self.warning,
            LineIcon::Cross => self.hint,
            LineIcon::Tools
            | LineIcon::Plus
            | LineIcon::Server
            | LineIcon::Calendar
            | LineIcon::Cog
            | LineIcon::Heading => self.fg,
        };
        Style::new().fg(color).bg(self.bg)
    }
}

/// 摘要行图标字符
pub fn icon_glyph(icon: LineIcon) -> &'static str {
    match icon {
        LineIcon::Package => "■",
        LineIcon::Puzzle => "◆",
        LineIcon::Check => "✓",
        LineIcon::Tools => "⚒",
        LineIcon::Plus => "+",
        LineIcon::Cross => "✗",
        LineIcon::Cloud => "☁",
        LineIcon::Server => "▣",
        LineIcon::Warning => "!",
        LineIcon::Calendar => "◷",
        LineIcon::ArrowUp => "↑",
        LineIcon::Cog => "⚙",
        LineIcon::Heading => "",
    }
}
