//! 应用状态

use crate::builder::step::Step;
use crate::builder::summary::FinalMessage;
use crate::builder::tooltip::TooltipRules;
use crate::builder::{MemorySurface, WizardController, WizardEvent, apply_effects, validate_surface};
use crate::config::AppConfig;
use crate::contact::ContactSession;
use crate::error::Result;
use crate::labels::option_info;
use crate::tui::state::{ContactView, OptionCursor, Screen};
use std::path::PathBuf;
use std::time::Instant;

/// TUI 运行结果
#[derive(Debug)]
pub struct TuiResult {
    /// 退出时所在步骤
    pub final_step: Step,
    /// 已完成时的结束消息
    pub final_message: Option<FinalMessage>,
}

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 当前屏幕
    pub screen: Screen,
    /// 向导控制器
    pub wizard: WizardController,
    /// 渲染模型
    pub surface: MemorySurface,
    /// 选项光标
    pub cursor: OptionCursor,
    /// 是否显示信息提示框
    pub show_tooltip: bool,
    /// 联系表单
    pub contact: ContactView,
    /// 界面语言
    pub locale: &'static str,
    /// 提示框放置规则
    pub tooltip_rules: TooltipRules,
    /// 底部临时提示
    pub notice: Option<String>,
    /// 日志文件路径
    pub log_path: Option<PathBuf>,
    /// 是否退出
    pub should_exit: bool,
}

impl AppState {
    /// 创建状态并校验渲染模型
    pub fn new(config: &AppConfig, locale: &'static str) -> Result<Self> {
        let surface = MemorySurface::new();
        validate_surface(&surface)?;

        Ok(Self {
            screen: Screen::Wizard,
            wizard: WizardController::new(config.timing()),
            surface,
            cursor: OptionCursor::for_step(Step::TrackSelect),
            show_tooltip: false,
            contact: ContactView::new(ContactSession::new(config.submit_timing())?),
            locale,
            tooltip_rules: config.tooltip_rules(),
            notice: None,
            log_path: None,
            should_exit: false,
        })
    }

    /// 正在显示的步骤
    pub fn visible_step(&self) -> Step {
        self.surface
            .visible_step()
            .unwrap_or_else(|| self.wizard.current_step())
    }

    /// 发送向导事件并更新渲染模型
    pub fn dispatch(&mut self, event: WizardEvent, now: Instant) {
        let effects = self.wizard.handle(event, now);
        apply_effects(&mut self.surface, &effects);
        self.sync_cursor();
    }

    /// 推进定时任务
    pub fn tick(&mut self, now: Instant) {
        let effects = self.wizard.tick(now);
        if !effects.is_empty() {
            apply_effects(&mut self.surface, &effects);
            self.sync_cursor();
        }
        self.contact.session.tick(now);
    }

    /// 最近的定时任务到期时间
    pub fn next_due(&self) -> Option<Instant> {
        match (self.wizard.next_due(), self.contact.session.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// 光标所在选项的说明文字
    pub fn tooltip_text(&self) -> Option<String> {
        let option = self.cursor.current()?;
        option_info(option.step, option.value, self.locale).map(|text| text.into_owned())
    }

    /// 生成运行结果
    pub fn result(&self) -> TuiResult {
        TuiResult {
            final_step: self.wizard.current_step(),
            final_message: self.surface.final_message(),
        }
    }

    fn sync_cursor(&mut self) {
        let step = self.visible_step();
        if self.cursor.step() != step {
            self.show_tooltip = false;
        }
        self.cursor.follow(step);
    }
}
