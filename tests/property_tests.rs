//! Invariants of the wizard under arbitrary interaction sequences

use project_builder::builder::catalog::options_for;
use project_builder::builder::options::Module;
use project_builder::builder::tooltip::{Rect, TooltipRules, place_tooltip};
use project_builder::{
    Control, MemorySurface, Outcome, Selections, Step, StepKind, Timing, WizardController,
    WizardEvent, apply_effects,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Raw interaction: which step, which option, what to do with it
#[derive(Debug, Clone)]
enum Action {
    Select { step: usize, option: usize },
    Toggle { step: usize, option: usize },
    Continue { step: usize },
    Back,
    Restart,
    Wait,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..Step::ALL.len(), 0..8usize).prop_map(|(step, option)| Action::Select { step, option }),
        (0..Step::ALL.len(), 0..8usize).prop_map(|(step, option)| Action::Toggle { step, option }),
        (0..Step::ALL.len()).prop_map(|step| Action::Continue { step }),
        Just(Action::Back),
        Just(Action::Restart),
        Just(Action::Wait),
    ]
}

fn option_at(step: Step, index: usize) -> Option<String> {
    let options = options_for(step);
    if options.is_empty() {
        return None;
    }
    Some(options[index % options.len()].value.to_string())
}

fn to_event(action: &Action) -> Option<WizardEvent> {
    match *action {
        Action::Select { step, option } => {
            let step = Step::ALL[step];
            let value = option_at(step, option)?;
            let next = options_for(step)
                .into_iter()
                .find(|o| o.value == value)
                .and_then(|o| o.next);
            Some(WizardEvent::SelectSingle { step, value, next })
        }
        Action::Toggle { step, option } => {
            let step = Step::ALL[step];
            Some(WizardEvent::ToggleMulti {
                step,
                value: option_at(step, option)?,
            })
        }
        Action::Continue { step } => Some(WizardEvent::Continue {
            step: Step::ALL[step],
        }),
        Action::Back => Some(WizardEvent::Back),
        Action::Restart => Some(WizardEvent::Restart),
        Action::Wait => None,
    }
}

struct Harness {
    wizard: WizardController,
    surface: MemorySurface,
    now: Instant,
}

impl Harness {
    fn new(timing: Timing) -> Self {
        Self {
            wizard: WizardController::new(timing),
            surface: MemorySurface::new(),
            now: Instant::now(),
        }
    }

    fn send(&mut self, event: WizardEvent) {
        let effects = self.wizard.handle(event, self.now);
        apply_effects(&mut self.surface, &effects);
    }

    fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        let effects = self.wizard.tick(self.now);
        apply_effects(&mut self.surface, &effects);
    }

    fn run(&mut self, actions: &[Action]) {
        for action in actions {
            match to_event(action) {
                Some(event) => self.send(event),
                None => self.advance(500),
            }
        }
    }

    /// Take one forward step from the current step with option `choice`
    fn forward(&mut self, choice: usize) {
        let step = self.wizard.current_step();
        match step.kind() {
            StepKind::SingleSelect => {
                if let Some(event) = to_event(&Action::Select {
                    step: step_index(step),
                    option: choice,
                }) {
                    self.send(event);
                }
                self.advance(0);
            }
            StepKind::MultiSelect => {
                if let Some(value) = option_at(step, choice) {
                    if !self.surface.is_option_active(step, &value) {
                        self.send(WizardEvent::ToggleMulti { step, value });
                    }
                }
                self.send(WizardEvent::Continue { step });
            }
            StepKind::Summary => {
                if let Some(track) = step.track() {
                    self.send(WizardEvent::Finish {
                        outcome: Outcome::Saved,
                        track,
                    });
                }
            }
            StepKind::Terminal => self.send(WizardEvent::Restart),
        }
    }
}

fn step_index(step: Step) -> usize {
    Step::ALL.iter().position(|s| *s == step).unwrap_or(0)
}

proptest! {
    #[test]
    fn surface_mirrors_selections_without_duplicates(actions in prop::collection::vec(action(), 0..60)) {
        let mut harness = Harness::new(Timing::immediate());
        harness.run(&actions);

        for step in Step::ALL.into_iter().filter(|s| s.is_multi_select()) {
            let on_surface = harness.surface.active_options(step);
            let unique: HashSet<_> = on_surface.iter().collect();
            prop_assert_eq!(unique.len(), on_surface.len());

            let recorded = harness.wizard.selections().active_tokens(step);
            let recorded_set: HashSet<_> = recorded.iter().collect();
            prop_assert_eq!(recorded_set.len(), recorded.len());
            prop_assert_eq!(unique, recorded_set);
        }
    }

    #[test]
    fn none_module_is_exclusive(actions in prop::collection::vec(action(), 0..60)) {
        let mut harness = Harness::new(Timing::immediate());
        harness.run(&actions);

        let modules = &harness.wizard.selections().modules;
        if modules.contains(&Module::None) {
            prop_assert_eq!(modules.len(), 1);
        }
    }

    #[test]
    fn exactly_one_region_is_visible(actions in prop::collection::vec(action(), 0..60)) {
        let mut harness = Harness::new(Timing::immediate());
        harness.run(&actions);
        harness.advance(500);

        prop_assert_eq!(harness.surface.visible_regions().len(), 1);
        prop_assert_eq!(harness.surface.visible_step(), Some(harness.wizard.current_step()));
        prop_assert_eq!(
            harness.surface.is_enabled(Control::Back),
            harness.wizard.current_step().allows_back()
        );
    }

    #[test]
    fn back_undoes_each_forward_step(choices in prop::collection::vec(0..8usize, 1..30)) {
        let mut harness = Harness::new(Timing::immediate());

        for choice in choices {
            let from = harness.wizard.current_step();
            harness.forward(choice);
            let to = harness.wizard.current_step();
            if to == from || !to.allows_back() {
                continue;
            }

            harness.send(WizardEvent::Back);
            prop_assert_eq!(harness.wizard.current_step(), from);

            harness.forward(choice);
            prop_assert_eq!(harness.wizard.current_step(), to);
        }
    }

    #[test]
    fn restart_matches_fresh_controller(actions in prop::collection::vec(action(), 0..60)) {
        let mut harness = Harness::new(Timing::immediate());
        harness.run(&actions);
        harness.send(WizardEvent::Restart);

        let fresh = WizardController::default();
        prop_assert_eq!(harness.wizard.selections(), &Selections::new());
        prop_assert_eq!(harness.wizard.current_step(), Step::TrackSelect);
        for track in project_builder::Track::ALL {
            prop_assert_eq!(harness.wizard.render_summary(track), fresh.render_summary(track));
        }
    }

    #[test]
    fn stale_transition_never_fires(option in 0..8usize, early in 0..499u64) {
        let mut harness = Harness::new(Timing::default());
        harness.send(WizardEvent::Start { track: project_builder::Track::WebDevelopment });
        harness.advance(500);
        prop_assert_eq!(harness.wizard.current_step(), Step::WebPackageType);

        if let Some(event) = to_event(&Action::Select { step: step_index(Step::WebPackageType), option }) {
            harness.send(event);
        }
        harness.advance(early);
        harness.send(WizardEvent::Back);
        harness.advance(1000);

        prop_assert_eq!(harness.wizard.current_step(), Step::TrackSelect);
        prop_assert!(!harness.wizard.has_pending_transition());
    }

    #[test]
    fn tooltip_stays_in_viewport(
        anchor_x in 0..1200i32,
        anchor_y in 0..800i32,
        width in 40..400i32,
        height in 20..120i32,
        viewport in 500..1600i32,
    ) {
        let rules = TooltipRules::default();
        let anchor = Rect::new(anchor_x.min(viewport - 20), anchor_y, 20, 20);
        let placement = place_tooltip(anchor, width, height, viewport, rules);

        prop_assert!(placement.x + width <= viewport - rules.margin);
        prop_assert!(placement.x >= rules.margin || width > viewport - 2 * rules.margin);
        if placement.below {
            prop_assert!(placement.y >= anchor.bottom());
        } else {
            prop_assert!(placement.y >= rules.margin);
            prop_assert!(placement.y + height <= anchor.y);
        }
    }
}
