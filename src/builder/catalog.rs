//! Option catalog
//!
//! Describes the option controls of every step the way a presentation
//! surface declares them: a value token, an optional next step and the
//! multi-select flag. Built from the typed option enums and the flow graph
//! so the three never disagree.

use crate::builder::graph::next_after_single;
use crate::builder::options::{
    Challenge, CloudEnvironment, DomainHosting, MigrationGoal, MigrationPlan, Module,
    PackageType, Provider, Service, Technology,
};
use crate::builder::step::{Step, Track};

/// One option control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Step whose group the option belongs to
    pub step: Step,
    /// Wire token
    pub value: &'static str,
    /// Step opened after choosing a single-select option
    pub next: Option<Step>,
    /// Whether the option toggles instead of selecting exclusively
    pub multi: bool,
}

/// All option controls of a step, in display order
pub fn options_for(step: Step) -> Vec<OptionSpec> {
    let tokens: Vec<&'static str> = match step {
        Step::TrackSelect => Track::ALL.iter().map(|v| v.as_str()).collect(),
        Step::WebPackageType => tokens_of(PackageType::ALL, PackageType::as_str),
        Step::WebDomainHosting => tokens_of(DomainHosting::ALL, DomainHosting::as_str),
        Step::WebServices => tokens_of(Service::ALL, Service::as_str),
        Step::WebModules => tokens_of(Module::ALL, Module::as_str),
        Step::CloudEnvironment => tokens_of(CloudEnvironment::ALL, CloudEnvironment::as_str),
        Step::CloudProvider => tokens_of(Provider::ALL, Provider::as_str),
        Step::CloudMigrationPlans => tokens_of(MigrationPlan::ALL, MigrationPlan::as_str),
        Step::CloudChallenges => tokens_of(Challenge::ALL, Challenge::as_str),
        Step::CloudMigrationGoals => tokens_of(MigrationGoal::ALL, MigrationGoal::as_str),
        Step::CloudTechnologies => tokens_of(Technology::ALL, Technology::as_str),
        Step::WebSummary | Step::CloudSummary | Step::Final => Vec::new(),
    };

    let multi = step.is_multi_select();
    tokens
        .into_iter()
        .map(|value| OptionSpec {
            step,
            value,
            next: if multi { None } else { next_after_single(step, value) },
            multi,
        })
        .collect()
}

/// Look up a single option
pub fn find_option(step: Step, value: &str) -> Option<OptionSpec> {
    options_for(step).into_iter().find(|option| option.value == value)
}

fn tokens_of<T>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_options_carry_next_step() {
        for step in Step::ALL.into_iter().filter(|s| s.is_single_select()) {
            let options = options_for(step);
            assert!(!options.is_empty(), "{step:?} has no options");
            assert!(options.iter().all(|o| o.next.is_some() && !o.multi));
        }
    }

    #[test]
    fn test_multi_select_options_have_no_next_step() {
        let options = options_for(Step::WebModules);
        assert_eq!(options.len(), 6);
        assert!(options.iter().all(|o| o.multi && o.next.is_none()));
        assert_eq!(options.last().map(|o| o.value), Some("none"));
    }

    #[test]
    fn test_find_option() {
        let option = find_option(Step::CloudEnvironment, "cloud-no").unwrap();
        assert_eq!(option.next, Some(Step::CloudMigrationPlans));
        assert!(find_option(Step::CloudEnvironment, "maybe").is_none());
    }
}
