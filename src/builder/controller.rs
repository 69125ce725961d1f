//! Wizard controller
//!
//! Owns the current step, the selections and the pending delayed
//! transition. Every operation mutates the owned state and returns the
//! surface effects it requires; nothing here touches a surface directly.
//!
//! Operations invoked at a step they do not apply to are wiring defects.
//! They are logged and produce no effects.

use crate::builder::catalog::{find_option, options_for};
use crate::builder::graph::{continue_requires_selection, continue_target, previous};
use crate::builder::scheduler::{Scheduler, TaskId};
use crate::builder::selections::Selections;
use crate::builder::step::{Step, StepKind, Track};
use crate::builder::summary::{FinalMessage, Outcome, Summary, render_summary};
use crate::builder::surface::{Control, Effect};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Delays of the scheduled transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause between choosing a single-select option and opening the next step
    pub select_delay: Duration,
    /// Pause between starting a track and opening its entry step
    pub start_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            select_delay: Duration::from_millis(500),
            start_delay: Duration::from_millis(500),
        }
    }
}

impl Timing {
    /// No delays; transitions fire on the next tick
    pub fn immediate() -> Self {
        Self {
            select_delay: Duration::ZERO,
            start_delay: Duration::ZERO,
        }
    }
}

/// Delayed step change, applied only if `from` is still current when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedTransition {
    pub from: Step,
    pub to: Step,
}

/// User interaction driving the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum WizardEvent {
    Start {
        track: Track,
    },
    SelectSingle {
        step: Step,
        value: String,
        #[serde(default)]
        next: Option<Step>,
    },
    ToggleMulti {
        step: Step,
        value: String,
    },
    GoToStep {
        step: Step,
    },
    Continue {
        step: Step,
    },
    Back,
    Finish {
        outcome: Outcome,
        track: Track,
    },
    Restart,
}

/// Project builder state machine
#[derive(Debug, Clone)]
pub struct WizardController {
    current_step: Step,
    selections: Selections,
    active_track: Option<Track>,
    timing: Timing,
    scheduler: Scheduler<DelayedTransition>,
    pending: Option<TaskId>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl WizardController {
    pub fn new(timing: Timing) -> Self {
        Self {
            current_step: Step::TrackSelect,
            selections: Selections::new(),
            active_track: None,
            timing,
            scheduler: Scheduler::new(),
            pending: None,
        }
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn active_track(&self) -> Option<Track> {
        self.active_track
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Whether a delayed transition is waiting to fire
    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some_and(|id| self.scheduler.is_pending(id))
    }

    /// When the next delayed transition is due
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn back_enabled(&self) -> bool {
        self.current_step.allows_back()
    }

    /// Whether the continue control of `step` is enabled
    pub fn continue_enabled(&self, step: Step) -> bool {
        if !step.is_multi_select() {
            return false;
        }
        !continue_requires_selection(step) || self.selections.selected_count(step).unwrap_or(0) > 0
    }

    /// Dispatch one interaction event
    pub fn handle(&mut self, event: WizardEvent, now: Instant) -> Vec<Effect> {
        debug!(?event, step = ?self.current_step, "Handling wizard event");
        match event {
            WizardEvent::Start { track } => self.start(track, now),
            WizardEvent::SelectSingle { step, value, next } => {
                self.select_single(step, &value, next, now)
            }
            WizardEvent::ToggleMulti { step, value } => self.toggle_multi(step, &value),
            WizardEvent::GoToStep { step } => self.go_to_step(step),
            WizardEvent::Continue { step } => self.continue_from(step),
            WizardEvent::Back => self.go_back(),
            WizardEvent::Finish { outcome, track } => self.finish(outcome, track),
            WizardEvent::Restart => self.restart(),
        }
    }

    /// Begin a track: bring the wizard into view, then open the entry step
    pub fn start(&mut self, track: Track, now: Instant) -> Vec<Effect> {
        info!(%track, "Starting project builder track");
        self.active_track = Some(track);
        self.selections.service_track = Some(track);
        self.schedule_transition(now, self.timing.start_delay, track.entry_step());
        vec![Effect::ScrollIntoView]
    }

    /// Choose the one active option of a single-select step
    pub fn select_single(
        &mut self,
        step: Step,
        value: &str,
        next: Option<Step>,
        now: Instant,
    ) -> Vec<Effect> {
        if !self.applies_here(step, StepKind::SingleSelect, "select_single") {
            return Vec::new();
        }
        let Some(option) = find_option(step, value) else {
            reject(unknown(step, value));
            return Vec::new();
        };
        if let Err(err) = self.selections.record_single(step, option.value) {
            reject(err);
            return Vec::new();
        }
        if step == Step::TrackSelect {
            self.active_track = self.selections.service_track;
        }
        info!(?step, value = option.value, ?next, "Single option selected");

        let effects = options_for(step)
            .into_iter()
            .map(|sibling| Effect::SetOptionActive {
                step,
                value: sibling.value,
                active: sibling.value == option.value,
            })
            .collect();

        if let Some(next) = next {
            self.schedule_transition(now, self.timing.select_delay, next);
        }
        effects
    }

    /// Flip one option of a multi-select step
    pub fn toggle_multi(&mut self, step: Step, value: &str) -> Vec<Effect> {
        if !self.applies_here(step, StepKind::MultiSelect, "toggle_multi") {
            return Vec::new();
        }
        let Some(option) = find_option(step, value) else {
            reject(unknown(step, value));
            return Vec::new();
        };
        let outcome = match self.selections.toggle(step, option.value) {
            Ok(outcome) => outcome,
            Err(err) => {
                reject(err);
                return Vec::new();
            }
        };
        debug!(?step, value = option.value, active = outcome.active, "Option toggled");

        let mut effects: Vec<Effect> = outcome
            .deactivated
            .iter()
            .map(|sibling| Effect::SetOptionActive {
                step,
                value: sibling,
                active: false,
            })
            .collect();
        effects.push(Effect::SetOptionActive {
            step,
            value: option.value,
            active: outcome.active,
        });

        if continue_requires_selection(step) {
            effects.push(Effect::SetControlEnabled {
                control: Control::Continue(step),
                enabled: self.continue_enabled(step),
            });
        }
        effects
    }

    /// Show `target` in place of the current step
    pub fn go_to_step(&mut self, target: Step) -> Vec<Effect> {
        self.cancel_pending();
        let from = self.current_step;
        self.current_step = target;
        if let Some(track) = target.track() {
            self.active_track = Some(track);
        }
        info!(?from, to = ?target, "Step changed");

        let mut effects = Vec::with_capacity(4);
        if from != target {
            effects.push(Effect::HideRegion(from));
        }
        effects.push(Effect::ShowRegion(target));
        effects.push(Effect::SetControlEnabled {
            control: Control::Back,
            enabled: target.allows_back(),
        });
        effects.push(Effect::ScrollIntoView);
        effects
    }

    /// Explicit "continue" of a multi-select step
    pub fn continue_from(&mut self, step: Step) -> Vec<Effect> {
        if !self.applies_here(step, StepKind::MultiSelect, "continue") {
            return Vec::new();
        }
        if !self.continue_enabled(step) {
            warn!(?step, "Continue ignored: nothing selected");
            return Vec::new();
        }
        let Some(target) = continue_target(step) else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        if let Some(track) = target.track().filter(|t| t.summary_step() == target) {
            effects.push(Effect::WriteSummary(self.render_summary(track)));
        }
        effects.extend(self.go_to_step(target));
        effects
    }

    /// Return to the predecessor of the current step
    pub fn go_back(&mut self) -> Vec<Effect> {
        match previous(self.current_step, &self.selections) {
            Some(target) => self.go_to_step(target),
            None => {
                warn!(step = ?self.current_step, "Back is disabled at this step");
                Vec::new()
            }
        }
    }

    /// Render the final message for `track` and show the terminal step
    pub fn finish(&mut self, outcome: Outcome, track: Track) -> Vec<Effect> {
        if self.current_step != track.summary_step() {
            reject(Error::InvalidState {
                operation: "finish",
                step: self.current_step,
            });
            return Vec::new();
        }
        info!(%track, ?outcome, "Project builder finished");
        let mut effects = vec![Effect::WriteFinalMessage(FinalMessage::new(track, outcome))];
        effects.extend(self.go_to_step(Step::Final));
        effects
    }

    /// Discard all answers and return to the track-select step
    pub fn restart(&mut self) -> Vec<Effect> {
        info!("Restarting project builder");
        self.selections = Selections::new();
        self.active_track = None;
        self.scheduler.cancel_all();
        self.pending = None;

        let mut effects = vec![Effect::ClearOptions];
        effects.extend(Control::gated_continues().into_iter().map(|control| {
            Effect::SetControlEnabled {
                control,
                enabled: false,
            }
        }));
        effects.extend(self.go_to_step(Step::TrackSelect));
        effects
    }

    /// Structured summary of `track` for the current selections
    pub fn render_summary(&self, track: Track) -> Summary {
        render_summary(track, &self.selections)
    }

    /// Fire due delayed transitions whose precondition still holds
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (id, transition) in self.scheduler.poll(now) {
            if self.pending != Some(id) || self.current_step != transition.from {
                debug!(?transition, current = ?self.current_step, "Discarding stale transition");
                continue;
            }
            self.pending = None;
            effects.extend(self.go_to_step(transition.to));
        }
        effects
    }

    fn schedule_transition(&mut self, now: Instant, delay: Duration, to: Step) {
        self.cancel_pending();
        let transition = DelayedTransition {
            from: self.current_step,
            to,
        };
        let id = self.scheduler.schedule(now, delay, transition);
        debug!(?transition, delay_ms = delay.as_millis() as u64, "Transition scheduled");
        self.pending = Some(id);
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    fn applies_here(&self, step: Step, kind: StepKind, operation: &'static str) -> bool {
        if step.kind() != kind || step != self.current_step {
            reject(Error::InvalidState {
                operation,
                step: self.current_step,
            });
            return false;
        }
        true
    }
}

fn unknown(step: Step, value: &str) -> Error {
    Error::UnknownToken {
        kind: step_kind_name(step),
        token: value.to_string(),
    }
}

fn step_kind_name(step: Step) -> &'static str {
    match step {
        Step::TrackSelect => "Track",
        Step::WebPackageType => "PackageType",
        Step::WebDomainHosting => "DomainHosting",
        Step::WebServices => "Service",
        Step::WebModules => "Module",
        Step::CloudEnvironment => "CloudEnvironment",
        Step::CloudProvider => "Provider",
        Step::CloudMigrationPlans => "MigrationPlan",
        Step::CloudChallenges => "Challenge",
        Step::CloudMigrationGoals => "MigrationGoal",
        Step::CloudTechnologies => "Technology",
        Step::WebSummary | Step::CloudSummary | Step::Final => "option",
    }
}

fn reject(err: Error) {
    warn!(error = %err, "Wizard operation rejected");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_step(step: Step) -> WizardController {
        let mut wizard = WizardController::new(Timing::immediate());
        wizard.go_to_step(step);
        wizard
    }

    #[test]
    fn test_starts_at_track_select() {
        let wizard = WizardController::default();
        assert_eq!(wizard.current_step(), Step::TrackSelect);
        assert!(!wizard.back_enabled());
        assert!(wizard.active_track().is_none());
    }

    #[test]
    fn test_start_waits_for_delay() {
        let now = Instant::now();
        let mut wizard = WizardController::default();
        let effects = wizard.start(Track::CloudServices, now);
        assert_eq!(effects, vec![Effect::ScrollIntoView]);
        assert_eq!(wizard.current_step(), Step::TrackSelect);

        assert!(wizard.tick(now + Duration::from_millis(100)).is_empty());
        wizard.tick(now + Duration::from_millis(500));
        assert_eq!(wizard.current_step(), Step::CloudEnvironment);
    }

    #[test]
    fn test_select_single_marks_exactly_one_option() {
        let now = Instant::now();
        let mut wizard = at_step(Step::CloudProvider);
        let effects = wizard.select_single(Step::CloudProvider, "azure", None, now);
        let active: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::SetOptionActive { value, active: true, .. } => Some(*value),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec!["azure"]);
        assert_eq!(effects.len(), 4);
    }

    #[test]
    fn test_select_single_without_next_stays() {
        let now = Instant::now();
        let mut wizard = at_step(Step::WebDomainHosting);
        wizard.select_single(Step::WebDomainHosting, "domain-hosting-no", None, now);
        wizard.tick(now + Duration::from_secs(5));
        assert_eq!(wizard.current_step(), Step::WebDomainHosting);
    }

    #[test]
    fn test_select_single_at_wrong_step_is_ignored() {
        let now = Instant::now();
        let mut wizard = at_step(Step::WebPackageType);
        let effects = wizard.select_single(Step::CloudProvider, "aws", Some(Step::CloudChallenges), now);
        assert!(effects.is_empty());
        assert!(wizard.selections().current_provider.is_none());
        assert!(!wizard.has_pending_transition());
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut wizard = at_step(Step::WebServices);
        assert!(wizard.toggle_multi(Step::WebServices, "email").is_empty());
        assert!(wizard.selections().services.is_empty());
    }

    #[test]
    fn test_stale_transition_does_not_override_navigation() {
        let now = Instant::now();
        let mut wizard = at_step(Step::WebPackageType);
        wizard.select_single(Step::WebPackageType, "a-la-carte", Some(Step::WebServices), now);

        // User navigates away before the delay elapses
        wizard.go_back();
        assert_eq!(wizard.current_step(), Step::TrackSelect);

        assert!(wizard.tick(now + Duration::from_secs(1)).is_empty());
        assert_eq!(wizard.current_step(), Step::TrackSelect);
    }

    #[test]
    fn test_newer_selection_replaces_pending_transition() {
        let now = Instant::now();
        let mut wizard = at_step(Step::CloudEnvironment);
        wizard.select_single(Step::CloudEnvironment, "cloud-yes", Some(Step::CloudProvider), now);
        wizard.select_single(
            Step::CloudEnvironment,
            "cloud-no",
            Some(Step::CloudMigrationPlans),
            now + Duration::from_millis(10),
        );
        wizard.tick(now + Duration::from_secs(1));
        assert_eq!(wizard.current_step(), Step::CloudMigrationPlans);
    }

    #[test]
    fn test_services_continue_gated_on_selection() {
        let mut wizard = at_step(Step::WebServices);
        assert!(!wizard.continue_enabled(Step::WebServices));
        assert!(wizard.continue_from(Step::WebServices).is_empty());

        let effects = wizard.toggle_multi(Step::WebServices, "domain");
        assert!(effects.contains(&Effect::SetControlEnabled {
            control: Control::Continue(Step::WebServices),
            enabled: true,
        }));

        let effects = wizard.toggle_multi(Step::WebServices, "domain");
        assert!(effects.contains(&Effect::SetControlEnabled {
            control: Control::Continue(Step::WebServices),
            enabled: false,
        }));
    }

    #[test]
    fn test_modules_continue_allows_empty_and_writes_summary() {
        let mut wizard = at_step(Step::WebModules);
        let effects = wizard.continue_from(Step::WebModules);
        assert!(matches!(effects.first(), Some(Effect::WriteSummary(s)) if s.track == Track::WebDevelopment));
        assert_eq!(wizard.current_step(), Step::WebSummary);
    }

    #[test]
    fn test_go_to_step_effects() {
        let mut wizard = WizardController::default();
        let effects = wizard.go_to_step(Step::WebPackageType);
        assert_eq!(
            effects,
            vec![
                Effect::HideRegion(Step::TrackSelect),
                Effect::ShowRegion(Step::WebPackageType),
                Effect::SetControlEnabled {
                    control: Control::Back,
                    enabled: true,
                },
                Effect::ScrollIntoView,
            ]
        );
        assert_eq!(wizard.active_track(), Some(Track::WebDevelopment));
    }

    #[test]
    fn test_finish_requires_summary_step() {
        let mut wizard = at_step(Step::CloudTechnologies);
        assert!(wizard.finish(Outcome::Saved, Track::CloudServices).is_empty());

        let mut wizard = at_step(Step::CloudSummary);
        assert!(wizard.finish(Outcome::Saved, Track::WebDevelopment).is_empty());
        let effects = wizard.finish(Outcome::Saved, Track::CloudServices);
        assert_eq!(
            effects.first(),
            Some(&Effect::WriteFinalMessage(FinalMessage::new(Track::CloudServices, Outcome::Saved)))
        );
        assert_eq!(wizard.current_step(), Step::Final);
        assert!(!wizard.back_enabled());
    }

    #[test]
    fn test_back_from_terminal_is_noop() {
        let mut wizard = at_step(Step::Final);
        assert!(wizard.go_back().is_empty());
        assert_eq!(wizard.current_step(), Step::Final);
    }

    #[test]
    fn test_restart_resets_everything() {
        let now = Instant::now();
        let mut wizard = at_step(Step::WebServices);
        wizard.toggle_multi(Step::WebServices, "hosting");
        wizard.start(Track::CloudServices, now);

        let effects = wizard.restart();
        assert_eq!(effects.first(), Some(&Effect::ClearOptions));
        assert_eq!(wizard.current_step(), Step::TrackSelect);
        assert_eq!(wizard.selections(), &Selections::new());
        assert!(wizard.active_track().is_none());
        assert!(!wizard.has_pending_transition());
        for control in Control::gated_continues() {
            assert!(effects.contains(&Effect::SetControlEnabled { control, enabled: false }));
        }
    }

    #[test]
    fn test_event_json_shape() {
        let event: WizardEvent =
            serde_json::from_str(r#"{"event":"toggle-multi","step":"web-modules","value":"seo"}"#).unwrap();
        assert_eq!(
            event,
            WizardEvent::ToggleMulti {
                step: Step::WebModules,
                value: "seo".to_string(),
            }
        );
    }
}
