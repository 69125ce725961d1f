//! Presentation surface boundary
//!
//! The controller never touches a rendering tree directly. It emits
//! [`Effect`]s which [`apply_effects`] forwards to a [`PresentationSurface`].
//! Region and control identifiers are a boundary concern and live only
//! here.

use crate::builder::step::{Step, Track};
use crate::builder::summary::{FinalMessage, Outcome, Summary};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Anchor scrolled into view on every step change
pub const SCROLL_ANCHOR: &str = "project-builder";
/// Region receiving the final message
pub const FINAL_MESSAGE_REGION: &str = "finalMessage";

/// Action controls the controller attaches handlers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// "Continue" of a multi-select step
    Continue(Step),
    Back,
    Restart,
    Finish(Track, Outcome),
}

impl Control {
    pub fn all() -> Vec<Control> {
        let mut controls: Vec<Control> = Step::ALL
            .into_iter()
            .filter(|step| step.is_multi_select())
            .map(Control::Continue)
            .collect();
        controls.extend([Control::Back, Control::Restart]);
        for track in Track::ALL {
            controls.push(Control::Finish(track, Outcome::Committed));
            controls.push(Control::Finish(track, Outcome::Saved));
        }
        controls
    }

    /// Continue controls that start out disabled and are gated on a selection
    pub fn gated_continues() -> [Control; 4] {
        [
            Control::Continue(Step::WebServices),
            Control::Continue(Step::CloudChallenges),
            Control::Continue(Step::CloudMigrationGoals),
            Control::Continue(Step::CloudTechnologies),
        ]
    }
}

/// Surface-side effect of a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowRegion(Step),
    HideRegion(Step),
    SetOptionActive {
        step: Step,
        value: &'static str,
        active: bool,
    },
    /// Deactivate every option of every step
    ClearOptions,
    SetControlEnabled {
        control: Control,
        enabled: bool,
    },
    WriteSummary(Summary),
    WriteFinalMessage(FinalMessage),
    ScrollIntoView,
}

/// Region identifier of a step
pub fn region_id(step: Step) -> &'static str {
    match step {
        Step::TrackSelect => "step0",
        Step::WebPackageType => "step1-webdev",
        Step::WebDomainHosting => "step2a-webdev",
        Step::WebServices => "step2b-webdev",
        Step::WebModules => "step4-webdev",
        Step::WebSummary => "step5-webdev",
        Step::CloudEnvironment => "step1-cloud",
        Step::CloudProvider => "step2a-cloud",
        Step::CloudMigrationPlans => "step2b-cloud",
        Step::CloudChallenges => "step3a-cloud",
        Step::CloudMigrationGoals => "step3b-cloud",
        Step::CloudTechnologies => "step5-cloud",
        Step::CloudSummary => "step6-cloud",
        Step::Final => "finalStep",
    }
}

/// Step owning a region identifier
pub fn step_for_region(id: &str) -> Option<Step> {
    Step::ALL.into_iter().find(|step| region_id(*step) == id)
}

/// Summary region of a track
pub fn summary_region(track: Track) -> &'static str {
    match track {
        Track::WebDevelopment => "summaryContent-webdev",
        Track::CloudServices => "summaryContent-cloud",
    }
}

/// Control identifier
pub fn control_id(control: Control) -> &'static str {
    match control {
        Control::Continue(Step::WebServices) => "continueStep2b-webdev",
        Control::Continue(Step::WebModules) => "continueStep4-webdev",
        Control::Continue(Step::CloudChallenges) => "continueStep3a-cloud",
        Control::Continue(Step::CloudMigrationGoals) => "continueStep3b-cloud",
        Control::Continue(Step::CloudTechnologies) => "continueStep5-cloud",
        Control::Continue(_) => "continue",
        Control::Back => "prevStep",
        Control::Restart => "restartBuilder",
        Control::Finish(Track::WebDevelopment, Outcome::Committed) => "startProject-webdev",
        Control::Finish(Track::WebDevelopment, Outcome::Saved) => "saveForLater-webdev",
        Control::Finish(Track::CloudServices, Outcome::Committed) => "startProject-cloud",
        Control::Finish(Track::CloudServices, Outcome::Saved) => "saveForLater-cloud",
    }
}

/// Rendering surface the wizard reads from and writes to
pub trait PresentationSurface {
    fn has_region(&self, id: &str) -> bool;
    fn has_control(&self, id: &str) -> bool;
    fn show_region(&mut self, id: &'static str);
    fn hide_region(&mut self, id: &'static str);
    fn set_option_active(&mut self, step: Step, value: &'static str, active: bool);
    fn clear_options(&mut self);
    fn set_control_enabled(&mut self, id: &'static str, enabled: bool);
    fn write_summary(&mut self, region: &'static str, summary: &Summary);
    fn write_final_message(&mut self, region: &'static str, message: FinalMessage);
    fn scroll_into_view(&mut self, anchor: &'static str);
}

/// Check that every region and control the wizard uses exists
///
/// A missing element is a wiring defect and is reported at startup.
pub fn validate_surface<S: PresentationSurface + ?Sized>(surface: &S) -> Result<()> {
    let regions = Step::ALL
        .into_iter()
        .map(region_id)
        .chain(Track::ALL.into_iter().map(summary_region))
        .chain([FINAL_MESSAGE_REGION, SCROLL_ANCHOR]);
    for region in regions {
        if !surface.has_region(region) {
            return Err(Error::MissingRegion { region });
        }
    }

    for control in Control::all() {
        let id = control_id(control);
        if !surface.has_control(id) {
            return Err(Error::MissingControl { control: id });
        }
    }

    Ok(())
}

/// Forward effects to a surface in order
pub fn apply_effects<S: PresentationSurface + ?Sized>(surface: &mut S, effects: &[Effect]) {
    for effect in effects {
        debug!(?effect, "Applying surface effect");
        match effect {
            Effect::ShowRegion(step) => surface.show_region(region_id(*step)),
            Effect::HideRegion(step) => surface.hide_region(region_id(*step)),
            Effect::SetOptionActive {
                step,
                value,
                active,
            } => surface.set_option_active(*step, *value, *active),
            Effect::ClearOptions => surface.clear_options(),
            Effect::SetControlEnabled { control, enabled } => {
                surface.set_control_enabled(control_id(*control), *enabled)
            }
            Effect::WriteSummary(summary) => {
                surface.write_summary(summary_region(summary.track), summary)
            }
            Effect::WriteFinalMessage(message) => {
                surface.write_final_message(FINAL_MESSAGE_REGION, *message)
            }
            Effect::ScrollIntoView => surface.scroll_into_view(SCROLL_ANCHOR),
        }
    }
}

/// In-memory surface
///
/// Holds exactly the state a real surface would show. Used by the terminal
/// front end as its render model, by replay mode and by tests.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    missing: HashSet<&'static str>,
    visible: Vec<&'static str>,
    active_options: Vec<(Step, &'static str)>,
    enabled: HashMap<&'static str, bool>,
    summaries: HashMap<&'static str, Summary>,
    final_message: Option<FinalMessage>,
    scroll_requests: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        let mut enabled: HashMap<&'static str, bool> = Control::all()
            .into_iter()
            .map(|control| (control_id(control), true))
            .collect();
        for control in Control::gated_continues() {
            enabled.insert(control_id(control), false);
        }
        enabled.insert(control_id(Control::Back), false);

        Self {
            missing: HashSet::new(),
            visible: vec![region_id(Step::TrackSelect)],
            active_options: Vec::new(),
            enabled,
            summaries: HashMap::new(),
            final_message: None,
            scroll_requests: 0,
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface lacking one element, for exercising startup validation
    pub fn without(element: &'static str) -> Self {
        let mut surface = Self::default();
        surface.missing.insert(element);
        surface
    }

    /// Currently visible regions; exactly one in a well-wired session
    pub fn visible_regions(&self) -> &[&'static str] {
        &self.visible
    }

    /// Step of the visible region
    pub fn visible_step(&self) -> Option<Step> {
        match self.visible.as_slice() {
            [only] => step_for_region(only),
            _ => None,
        }
    }

    pub fn is_option_active(&self, step: Step, value: &str) -> bool {
        self.active_options
            .iter()
            .any(|(s, v)| *s == step && *v == value)
    }

    /// Active options of one step group
    pub fn active_options(&self, step: Step) -> Vec<&'static str> {
        self.active_options
            .iter()
            .filter(|(s, _)| *s == step)
            .map(|(_, v)| *v)
            .collect()
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.enabled
            .get(control_id(control))
            .copied()
            .unwrap_or(false)
    }

    pub fn summary(&self, track: Track) -> Option<&Summary> {
        self.summaries.get(summary_region(track))
    }

    pub fn final_message(&self) -> Option<FinalMessage> {
        self.final_message
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }
}

impl PresentationSurface for MemorySurface {
    fn has_region(&self, id: &str) -> bool {
        !self.missing.contains(id)
    }

    fn has_control(&self, id: &str) -> bool {
        !self.missing.contains(id)
    }

    fn show_region(&mut self, id: &'static str) {
        if !self.visible.contains(&id) {
            self.visible.push(id);
        }
    }

    fn hide_region(&mut self, id: &'static str) {
        self.visible.retain(|region| *region != id);
    }

    fn set_option_active(&mut self, step: Step, value: &'static str, active: bool) {
        self.active_options.retain(|(s, v)| !(*s == step && *v == value));
        if active {
            self.active_options.push((step, value));
        }
    }

    fn clear_options(&mut self) {
        self.active_options.clear();
    }

    fn set_control_enabled(&mut self, id: &'static str, enabled: bool) {
        self.enabled.insert(id, enabled);
    }

    fn write_summary(&mut self, region: &'static str, summary: &Summary) {
        self.summaries.insert(region, summary.clone());
    }

    fn write_final_message(&mut self, _region: &'static str, message: FinalMessage) {
        self.final_message = Some(message);
    }

    fn scroll_into_view(&mut self, _anchor: &'static str) {
        self.scroll_requests += 1;
    }
}
