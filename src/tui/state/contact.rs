//! 联系表单界面状态

use crate::contact::{ContactSession, Field, SubmitOutcome, SubmitPhase};
use std::time::Instant;

/// 联系表单与当前焦点字段
#[derive(Debug)]
pub struct ContactView {
    /// 表单会话
    pub session: ContactSession,
    /// 焦点字段
    pub focus: Field,
}

impl ContactView {
    pub fn new(session: ContactSession) -> Self {
        Self {
            session,
            focus: Field::FirstName,
        }
    }

    /// 是否接受输入（提交过程中不接受）
    pub fn is_editable(&self) -> bool {
        self.session.phase() == SubmitPhase::Editing
    }

    /// 离开当前字段并校验，然后移到下一个
    pub fn focus_next(&mut self) {
        self.session.check_field(self.focus);
        self.focus = step_field(self.focus, 1);
    }

    /// 离开当前字段并校验，然后移到上一个
    pub fn focus_prev(&mut self) {
        self.session.check_field(self.focus);
        self.focus = step_field(self.focus, Field::ALL.len() - 1);
    }

    /// 输入字符；勾选框用空格切换
    pub fn input(&mut self, c: char) {
        if !self.is_editable() {
            return;
        }
        match self.session.form.text_mut(self.focus) {
            Some(text) => text.push(c),
            None if c == ' ' => self.session.form.privacy = !self.session.form.privacy,
            None => return,
        }
        self.session.recheck_if_invalid(self.focus);
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        if !self.is_editable() {
            return;
        }
        if let Some(text) = self.session.form.text_mut(self.focus) {
            text.pop();
            self.session.recheck_if_invalid(self.focus);
        }
    }

    /// 提交；校验失败时焦点移到第一个错误字段
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let outcome = self.session.submit(now);
        if let SubmitOutcome::Invalid(fields) = &outcome {
            if let Some(first) = fields.first() {
                self.focus = *first;
            }
        }
        outcome
    }
}

fn step_field(field: Field, offset: usize) -> Field {
    let index = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
    Field::ALL[(index + offset) % Field::ALL.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SubmitTiming;

    fn view() -> ContactView {
        ContactView::new(ContactSession::new(SubmitTiming::default()).unwrap())
    }

    #[test]
    fn test_focus_cycles_and_validates_on_leave() {
        let mut view = view();
        view.focus_prev();
        assert_eq!(view.focus, Field::Privacy);
        assert!(view.session.is_invalid(Field::FirstName));
        view.focus_next();
        assert_eq!(view.focus, Field::FirstName);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut view = view();
        view.focus_next();
        assert!(view.session.is_invalid(Field::FirstName));
        view.focus_prev();
        view.input('A');
        assert!(!view.session.is_invalid(Field::FirstName));
        assert_eq!(view.session.form.first_name, "A");
    }

    #[test]
    fn test_space_toggles_privacy() {
        let mut view = view();
        view.focus = Field::Privacy;
        view.input(' ');
        assert!(view.session.form.privacy);
        view.input('x');
        assert!(view.session.form.privacy);
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut view = view();
        view.focus = Field::Message;
        view.session.form.first_name = "Sanne".into();
        let outcome = view.submit(Instant::now());
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(view.focus, Field::LastName);
    }
}
