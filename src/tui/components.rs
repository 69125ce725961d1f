//! Common UI components module
//!
//! Layout helpers and text measuring shared by the screens.

use crate::builder::tooltip::{Placement, Rect as CellRect, TooltipRules, place_tooltip};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::theme;

/// Three-panel layout: header, body, footer
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Render a centered title block with border
pub fn render_title_block(title: &str, frame: &mut Frame, area: Rect) {
    let title_line = Line::from(format!(" {} ", title))
        .centered()
        .style(theme().title());

    let block = Block::bordered()
        .title(title_line)
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().normal());

    frame.render_widget(block, area);
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// 按显示宽度截断文本，避免 UTF-8 边界问题
pub fn truncate_value(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    let mut current_width = 0;
    let mut output = String::new();

    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        output.push(ch);
        current_width += ch_width;
    }

    output.push_str("...");
    output
}

/// 按显示宽度换行
pub fn wrap_text(value: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in value.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() { word_width } else { word_width + 1 };
        if current_width + needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// 信息提示框的位置与尺寸（终端单元格）
pub fn tooltip_area(anchor: Rect, text: &str, screen: Rect, rules: TooltipRules) -> Rect {
    let max_inner = (screen.width / 2).max(20) as usize;
    let lines = wrap_text(text, max_inner);
    let inner_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let width = (inner_width + 2).min(screen.width as usize) as i32;
    let height = (lines.len() + 2).min(screen.height as usize) as i32;

    let anchor = CellRect::new(
        anchor.x as i32,
        anchor.y as i32,
        anchor.width as i32,
        anchor.height as i32,
    );
    let Placement { x, y, .. } = place_tooltip(anchor, width, height, screen.width as i32, rules);

    let x = x.clamp(0, (screen.width as i32 - width).max(0)) as u16;
    let y = y.clamp(0, (screen.height as i32 - height).max(0)) as u16;
    Rect::new(x, y, width as u16, height as u16)
}

/// 渲染信息提示框
pub fn render_tooltip(text: &str, frame: &mut Frame, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = wrap_text(text, inner_width)
        .into_iter()
        .map(Line::from)
        .collect();
    let tooltip = Paragraph::new(lines).style(theme().tooltip()).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme().tooltip()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(tooltip, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_wide_text() {
        assert_eq!(truncate_value("Webdesign", 20), "Webdesign");
        assert_eq!(truncate_value("Containerbeheer (Docker/Kubernetes)", 12), "Container...");
    }

    #[test]
    fn test_wrap_on_words() {
        let lines = wrap_text("Wij houden uw website veilig en up-to-date", 16);
        assert!(lines.iter().all(|l| l.width() <= 16));
        assert_eq!(lines.join(" "), "Wij houden uw website veilig en up-to-date");
    }

    #[test]
    fn test_tooltip_stays_on_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(2, 1, 30, 1);
        let area = tooltip_area(anchor, "Beter vindbaar in zoekmachines", screen, TooltipRules::terminal());
        assert!(area.x + area.width <= screen.width);
        assert!(area.y + area.height <= screen.height);
        // No room above row 1, so the tooltip sits below the anchor
        assert!(area.y > anchor.y);
    }
}
