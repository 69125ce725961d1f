//! TUI application main module
//!
//! Runs the event loop and maps key presses to wizard and contact form
//! operations.

use crate::builder::step::{Step, StepKind, Track};
use crate::builder::summary::Outcome;
use crate::builder::surface::Control;
use crate::builder::WizardEvent;
use crate::config::AppConfig;
use crate::error::Result;
use crate::tui::event::{EventPoll, TuiEvent};
use crate::tui::state::{AppState, Screen, Selectable, TuiResult};
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use rust_i18n::t;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
}

impl TuiApp {
    /// Create new TUI application
    pub fn new(config: &AppConfig, locale: &'static str) -> Result<Self> {
        let state = AppState::new(config, locale)?;
        let terminal = ratatui::init();

        Ok(Self {
            terminal,
            event_poll: EventPoll::default(),
            state,
        })
    }

    /// Set log path
    pub fn set_log_path(&mut self, path: PathBuf) {
        self.state.log_path = Some(path);
    }

    /// Open the wizard directly on a track
    pub fn start_track(&mut self, track: Track) {
        self.state.dispatch(WizardEvent::Start { track }, Instant::now());
    }

    /// Run application
    pub fn run(&mut self) -> Result<TuiResult> {
        let outcome = self.event_loop();
        ratatui::restore();
        outcome?;
        Ok(self.state.result())
    }

    fn event_loop(&mut self) -> Result<()> {
        render(&mut self.terminal, &mut self.state)?;

        loop {
            let event = self.event_poll.next(self.state.next_due());
            let now = Instant::now();
            self.state.tick(now);

            if handle_event(&mut self.state, event, now) {
                self.state.screen = Screen::Exit;
                render(&mut self.terminal, &mut self.state)?;
                break;
            }
            render(&mut self.terminal, &mut self.state)?;
        }

        info!(step = ?self.state.wizard.current_step(), "Interactive session ended");
        Ok(())
    }
}

/// Apply one terminal event; returns `true` when the application should exit
pub fn handle_event(state: &mut AppState, event: TuiEvent, now: Instant) -> bool {
    if event == TuiEvent::CtrlC {
        state.should_exit = true;
        return true;
    }
    if matches!(event, TuiEvent::None | TuiEvent::Resize(_, _)) {
        return false;
    }

    state.notice = None;
    let exit = match state.screen {
        Screen::Wizard => handle_wizard(state, event, now),
        Screen::Contact => handle_contact(state, event, now),
        Screen::Exit => true,
    };
    state.should_exit = exit;
    exit
}

fn handle_wizard(state: &mut AppState, event: TuiEvent, now: Instant) -> bool {
    let step = state.visible_step();

    match event {
        TuiEvent::Char('q') | TuiEvent::Escape => return true,
        TuiEvent::Char('r') => state.dispatch(WizardEvent::Restart, now),
        TuiEvent::Char('c') => {
            state.show_tooltip = false;
            state.screen = Screen::Contact;
        }
        TuiEvent::Backspace | TuiEvent::Left => {
            if state.surface.is_enabled(Control::Back) {
                state.dispatch(WizardEvent::Back, now);
            }
        }
        event => match step.kind() {
            StepKind::SingleSelect | StepKind::MultiSelect => {
                handle_options(state, step, event, now)
            }
            StepKind::Summary => handle_summary(state, step, event, now),
            StepKind::Terminal => {}
        },
    }
    false
}

fn handle_options(state: &mut AppState, step: Step, event: TuiEvent, now: Instant) {
    match event {
        TuiEvent::Up => {
            state.cursor.prev();
            state.show_tooltip = false;
        }
        TuiEvent::Down => {
            state.cursor.next();
            state.show_tooltip = false;
        }
        TuiEvent::Char('i') => state.show_tooltip = !state.show_tooltip,
        TuiEvent::Char(' ') if step.is_multi_select() => {
            if let Some(option) = state.cursor.current() {
                state.dispatch(
                    WizardEvent::ToggleMulti {
                        step,
                        value: option.value.to_string(),
                    },
                    now,
                );
            }
        }
        TuiEvent::Enter if step.is_multi_select() => {
            if state.surface.is_enabled(Control::Continue(step)) {
                state.dispatch(WizardEvent::Continue { step }, now);
            } else {
                debug!(?step, "Continue pressed while disabled");
                state.notice = Some(t!("continue_disabled", locale = state.locale).into_owned());
            }
        }
        TuiEvent::Enter | TuiEvent::Right => {
            if let Some(option) = state.cursor.current().filter(|_| step.is_single_select()) {
                state.dispatch(
                    WizardEvent::SelectSingle {
                        step,
                        value: option.value.to_string(),
                        next: option.next,
                    },
                    now,
                );
            }
        }
        _ => {}
    }
}

fn handle_summary(state: &mut AppState, step: Step, event: TuiEvent, now: Instant) {
    let Some(track) = step.track() else {
        return;
    };
    let outcome = match event {
        TuiEvent::Char('s') => Outcome::Committed,
        TuiEvent::Char('l') => Outcome::Saved,
        _ => return,
    };
    if state.surface.is_enabled(Control::Finish(track, outcome)) {
        state.dispatch(WizardEvent::Finish { outcome, track }, now);
    }
}

fn handle_contact(state: &mut AppState, event: TuiEvent, now: Instant) -> bool {
    if event == TuiEvent::Escape {
        state.screen = Screen::Wizard;
        return false;
    }

    let contact = &mut state.contact;
    match event {
        TuiEvent::Tab | TuiEvent::Down => contact.focus_next(),
        TuiEvent::BackTab | TuiEvent::Up => contact.focus_prev(),
        TuiEvent::Backspace => contact.backspace(),
        TuiEvent::Enter if contact.is_editable() => {
            let outcome = contact.submit(now);
            debug!(?outcome, "Contact form submit");
        }
        TuiEvent::Char(c) => contact.input(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Field, SubmitPhase};
    use std::time::Duration;

    fn immediate_state() -> AppState {
        let config = AppConfig {
            select_delay_ms: 0,
            start_delay_ms: 0,
            ..AppConfig::default()
        };
        AppState::new(&config, "nl").unwrap()
    }

    fn press(state: &mut AppState, event: TuiEvent, now: Instant) {
        handle_event(state, event, now);
        state.tick(now);
    }

    fn move_cursor_to(state: &mut AppState, value: &str) {
        let index = state
            .cursor
            .options()
            .iter()
            .position(|o| o.value == value)
            .unwrap();
        state.cursor.list_state.select(Some(index));
    }

    #[test]
    fn test_keyboard_walk_through_web_track() {
        let mut state = immediate_state();
        let now = Instant::now();

        move_cursor_to(&mut state, "web-development");
        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.visible_step(), Step::WebPackageType);

        move_cursor_to(&mut state, "a-la-carte");
        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.visible_step(), Step::WebServices);

        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.visible_step(), Step::WebServices);
        assert!(state.notice.is_some());

        press(&mut state, TuiEvent::Char(' '), now);
        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.visible_step(), Step::WebModules);

        move_cursor_to(&mut state, "none");
        press(&mut state, TuiEvent::Char(' '), now);
        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.visible_step(), Step::WebSummary);

        press(&mut state, TuiEvent::Char('s'), now);
        assert_eq!(state.visible_step(), Step::Final);
        let message = state.surface.final_message().unwrap();
        assert_eq!(message.outcome, Outcome::Committed);
    }

    #[test]
    fn test_back_key_ignored_at_track_select() {
        let mut state = immediate_state();
        let now = Instant::now();
        press(&mut state, TuiEvent::Backspace, now);
        assert_eq!(state.visible_step(), Step::TrackSelect);

        move_cursor_to(&mut state, "cloud-services");
        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.visible_step(), Step::CloudEnvironment);
        press(&mut state, TuiEvent::Left, now);
        assert_eq!(state.visible_step(), Step::TrackSelect);
    }

    #[test]
    fn test_restart_key_resets_selections() {
        let mut state = immediate_state();
        let now = Instant::now();
        move_cursor_to(&mut state, "cloud-services");
        press(&mut state, TuiEvent::Enter, now);
        press(&mut state, TuiEvent::Char('r'), now);

        assert_eq!(state.visible_step(), Step::TrackSelect);
        assert!(state.wizard.selections().service_track.is_none());
        assert!(state.surface.active_options(Step::TrackSelect).is_empty());
    }

    #[test]
    fn test_delayed_selection_waits_for_tick() {
        let mut state = AppState::new(&AppConfig::default(), "nl").unwrap();
        let now = Instant::now();
        move_cursor_to(&mut state, "web-development");
        handle_event(&mut state, TuiEvent::Enter, now);

        state.tick(now + Duration::from_millis(100));
        assert_eq!(state.visible_step(), Step::TrackSelect);
        state.tick(now + Duration::from_millis(500));
        assert_eq!(state.visible_step(), Step::WebPackageType);
    }

    #[test]
    fn test_contact_screen_typing_and_escape() {
        let mut state = immediate_state();
        let now = Instant::now();
        press(&mut state, TuiEvent::Char('c'), now);
        assert_eq!(state.screen, Screen::Contact);

        // 'q' is text input on the contact screen
        press(&mut state, TuiEvent::Char('q'), now);
        assert_eq!(state.contact.session.form.first_name, "q");
        assert!(!state.should_exit);

        press(&mut state, TuiEvent::Enter, now);
        assert_eq!(state.contact.focus, Field::LastName);
        assert_eq!(state.contact.session.phase(), SubmitPhase::Editing);

        press(&mut state, TuiEvent::Escape, now);
        assert_eq!(state.screen, Screen::Wizard);
    }

    #[test]
    fn test_quit_and_ctrl_c() {
        let mut state = immediate_state();
        assert!(handle_event(&mut state, TuiEvent::Char('q'), Instant::now()));
        let mut state = immediate_state();
        assert!(handle_event(&mut state, TuiEvent::CtrlC, Instant::now()));
        assert!(state.should_exit);
    }
}
