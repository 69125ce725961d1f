//! 选项光标状态

use crate::builder::catalog::{OptionSpec, options_for};
use crate::builder::step::Step;
use ratatui::widgets::ListState;

/// 可选择列表通用行为
pub trait Selectable {
    /// 总选项数
    fn count(&self) -> usize;
    /// 获取列表状态引用
    fn list_state(&self) -> &ListState;
    /// 获取列表状态可变引用
    fn list_state_mut(&mut self) -> &mut ListState;

    /// 选择下一个
    fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let next = self.list_state().selected().map_or(0, |i| (i + 1) % count);
        self.list_state_mut().select(Some(next));
    }

    /// 选择上一个
    fn prev(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let prev = match self.list_state().selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.list_state_mut().select(Some(prev));
    }

    /// 获取当前选中索引（有默认）
    fn selected_or_default(&self) -> usize {
        self.list_state().selected().unwrap_or(0)
    }
}

/// 当前步骤的选项列表与光标
#[derive(Debug, Default)]
pub struct OptionCursor {
    /// 光标所属步骤
    step: Step,
    /// 该步骤的选项
    options: Vec<OptionSpec>,
    /// Ratatui 列表状态
    pub list_state: ListState,
}

impl OptionCursor {
    /// 为步骤创建光标，指向第一个选项
    pub fn for_step(step: Step) -> Self {
        let options = options_for(step);
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            step,
            options,
            list_state,
        }
    }

    /// 步骤变化时重建光标
    pub fn follow(&mut self, step: Step) {
        if self.step != step || self.options.is_empty() {
            *self = Self::for_step(step);
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// 光标下的选项
    pub fn current(&self) -> Option<OptionSpec> {
        self.list_state
            .selected()
            .and_then(|i| self.options.get(i))
            .copied()
    }
}

impl Selectable for OptionCursor {
    fn count(&self) -> usize {
        self.options.len()
    }

    fn list_state(&self) -> &ListState {
        &self.list_state
    }

    fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = OptionCursor::for_step(Step::CloudProvider);
        assert_eq!(cursor.current().map(|o| o.value), Some("aws"));
        cursor.prev();
        assert_eq!(cursor.current().map(|o| o.value), Some("other-provider"));
        cursor.next();
        assert_eq!(cursor.selected_or_default(), 0);
    }

    #[test]
    fn test_follow_resets_on_step_change() {
        let mut cursor = OptionCursor::for_step(Step::WebServices);
        cursor.next();
        cursor.follow(Step::WebServices);
        assert_eq!(cursor.selected_or_default(), 1);
        cursor.follow(Step::WebModules);
        assert_eq!(cursor.step(), Step::WebModules);
        assert_eq!(cursor.selected_or_default(), 0);
    }

    #[test]
    fn test_summary_step_has_no_options() {
        let cursor = OptionCursor::for_step(Step::WebSummary);
        assert!(cursor.current().is_none());
    }
}
