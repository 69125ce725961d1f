//! Accumulated wizard answers
//!
//! Set fields keep insertion order so the summary lists items in the order
//! they were picked. Membership in a set is the single source of truth for
//! the "active" flag of a multi-select option.

use crate::builder::options::{
    Challenge, CloudEnvironment, DomainHosting, MigrationGoal, MigrationPlan, Module,
    PackageType, Provider, Service, Technology,
};
use crate::builder::step::{Step, Track};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::str::FromStr;

/// Result of toggling a multi-select option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the toggled option is active afterwards
    pub active: bool,
    /// Sibling tokens that were deactivated as a side effect
    pub deactivated: Vec<&'static str>,
}

/// All answers of both tracks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub service_track: Option<Track>,
    // Web development
    pub package_type: Option<PackageType>,
    pub domain_hosting: Option<DomainHosting>,
    pub services: IndexSet<Service>,
    pub modules: IndexSet<Module>,
    // Cloud services
    pub cloud_environment: Option<CloudEnvironment>,
    pub current_provider: Option<Provider>,
    pub migration_plans: Option<MigrationPlan>,
    pub challenges: IndexSet<Challenge>,
    pub migration_goals: IndexSet<MigrationGoal>,
    pub technologies: IndexSet<Technology>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the value of a single-select step into the field it owns
    pub fn record_single(&mut self, step: Step, token: &str) -> Result<()> {
        match step {
            Step::TrackSelect => self.service_track = Some(parse_track(token)?),
            Step::WebPackageType => self.package_type = Some(token.parse()?),
            Step::WebDomainHosting => self.domain_hosting = Some(token.parse()?),
            Step::CloudEnvironment => self.cloud_environment = Some(token.parse()?),
            Step::CloudProvider => self.current_provider = Some(token.parse()?),
            Step::CloudMigrationPlans => self.migration_plans = Some(token.parse()?),
            _ => {
                return Err(Error::InvalidState {
                    operation: "select_single",
                    step,
                });
            }
        }
        Ok(())
    }

    /// Token currently stored for a single-select step
    pub fn single_value(&self, step: Step) -> Option<&'static str> {
        match step {
            Step::TrackSelect => self.service_track.map(|t| t.as_str()),
            Step::WebPackageType => self.package_type.map(|v| v.as_str()),
            Step::WebDomainHosting => self.domain_hosting.map(|v| v.as_str()),
            Step::CloudEnvironment => self.cloud_environment.map(|v| v.as_str()),
            Step::CloudProvider => self.current_provider.map(|v| v.as_str()),
            Step::CloudMigrationPlans => self.migration_plans.map(|v| v.as_str()),
            _ => None,
        }
    }

    /// Flip a multi-select option and apply the "none" sentinel rule
    pub fn toggle(&mut self, step: Step, token: &str) -> Result<ToggleOutcome> {
        match step {
            Step::WebServices => toggle_in(&mut self.services, token),
            Step::WebModules => self.toggle_module(token.parse()?),
            Step::CloudChallenges => toggle_in(&mut self.challenges, token),
            Step::CloudMigrationGoals => toggle_in(&mut self.migration_goals, token),
            Step::CloudTechnologies => toggle_in(&mut self.technologies, token),
            _ => Err(Error::InvalidState {
                operation: "toggle_multi",
                step,
            }),
        }
    }

    fn toggle_module(&mut self, module: Module) -> Result<ToggleOutcome> {
        if module == Module::None {
            if self.modules.contains(&Module::None) {
                self.modules.clear();
                return Ok(ToggleOutcome {
                    active: false,
                    deactivated: Vec::new(),
                });
            }
            let deactivated = self.modules.drain(..).map(|m| m.as_str()).collect();
            self.modules.insert(Module::None);
            return Ok(ToggleOutcome {
                active: true,
                deactivated,
            });
        }

        let mut deactivated = Vec::new();
        if self.modules.shift_remove(&Module::None) {
            deactivated.push(Module::None.as_str());
        }
        let active = flip(&mut self.modules, module);
        Ok(ToggleOutcome {
            active,
            deactivated,
        })
    }

    /// Whether a multi-select option is active
    pub fn is_active(&self, step: Step, token: &str) -> bool {
        match step {
            Step::WebServices => contains(&self.services, token),
            Step::WebModules => contains(&self.modules, token),
            Step::CloudChallenges => contains(&self.challenges, token),
            Step::CloudMigrationGoals => contains(&self.migration_goals, token),
            Step::CloudTechnologies => contains(&self.technologies, token),
            _ => self.single_value(step) == Some(token),
        }
    }

    /// Number of selected options of a multi-select step
    pub fn selected_count(&self, step: Step) -> Option<usize> {
        match step {
            Step::WebServices => Some(self.services.len()),
            Step::WebModules => Some(self.modules.len()),
            Step::CloudChallenges => Some(self.challenges.len()),
            Step::CloudMigrationGoals => Some(self.migration_goals.len()),
            Step::CloudTechnologies => Some(self.technologies.len()),
            _ => None,
        }
    }

    /// Active tokens of a step, for re-synchronising a surface
    pub fn active_tokens(&self, step: Step) -> Vec<&'static str> {
        match step {
            Step::WebServices => self.services.iter().map(|v| v.as_str()).collect(),
            Step::WebModules => self.modules.iter().map(|v| v.as_str()).collect(),
            Step::CloudChallenges => self.challenges.iter().map(|v| v.as_str()).collect(),
            Step::CloudMigrationGoals => self.migration_goals.iter().map(|v| v.as_str()).collect(),
            Step::CloudTechnologies => self.technologies.iter().map(|v| v.as_str()).collect(),
            _ => self.single_value(step).into_iter().collect(),
        }
    }
}

fn parse_track(token: &str) -> Result<Track> {
    token.parse().map_err(|_| Error::UnknownToken {
        kind: "Track",
        token: token.to_string(),
    })
}

fn toggle_in<T>(set: &mut IndexSet<T>, token: &str) -> Result<ToggleOutcome>
where
    T: FromStr<Err = Error> + Hash + Eq,
{
    let value = token.parse()?;
    Ok(ToggleOutcome {
        active: flip(set, value),
        deactivated: Vec::new(),
    })
}

/// Insert when absent, remove when present; returns the new membership
fn flip<T: Hash + Eq>(set: &mut IndexSet<T>, value: T) -> bool {
    if set.shift_remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

fn contains<T>(set: &IndexSet<T>, token: &str) -> bool
where
    T: FromStr + Hash + Eq,
{
    token.parse::<T>().is_ok_and(|value| set.contains(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_single_writes_owned_field() {
        let mut selections = Selections::new();
        selections.record_single(Step::WebPackageType, "complete-package").unwrap();
        selections.record_single(Step::CloudProvider, "gcp").unwrap();
        assert_eq!(selections.package_type, Some(PackageType::CompletePackage));
        assert_eq!(selections.current_provider, Some(Provider::Gcp));
        assert_eq!(selections.single_value(Step::CloudProvider), Some("gcp"));
    }

    #[test]
    fn test_record_single_rejects_multi_step() {
        let mut selections = Selections::new();
        let err = selections.record_single(Step::WebModules, "seo").unwrap_err();
        assert!(matches!(err, Error::InvalidState { step: Step::WebModules, .. }));
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut selections = Selections::new();
        assert!(selections.toggle(Step::WebServices, "hosting").unwrap().active);
        assert!(!selections.toggle(Step::WebServices, "hosting").unwrap().active);
        assert!(selections.services.is_empty());
    }

    #[test]
    fn test_none_replaces_other_modules() {
        let mut selections = Selections::new();
        selections.toggle(Step::WebModules, "seo").unwrap();
        selections.toggle(Step::WebModules, "webshop").unwrap();

        let outcome = selections.toggle(Step::WebModules, "none").unwrap();
        assert!(outcome.active);
        assert_eq!(outcome.deactivated, vec!["seo", "webshop"]);
        assert_eq!(selections.modules.len(), 1);
        assert!(selections.modules.contains(&Module::None));
    }

    #[test]
    fn test_other_module_clears_none() {
        let mut selections = Selections::new();
        selections.toggle(Step::WebModules, "none").unwrap();

        let outcome = selections.toggle(Step::WebModules, "branding").unwrap();
        assert!(outcome.active);
        assert_eq!(outcome.deactivated, vec!["none"]);
        assert_eq!(selections.active_tokens(Step::WebModules), vec!["branding"]);
    }

    #[test]
    fn test_untoggling_none_leaves_empty_set() {
        let mut selections = Selections::new();
        selections.toggle(Step::WebModules, "none").unwrap();
        let outcome = selections.toggle(Step::WebModules, "none").unwrap();
        assert!(!outcome.active);
        assert!(selections.modules.is_empty());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut selections = Selections::new();
        selections.toggle(Step::CloudTechnologies, "identity-access").unwrap();
        selections.toggle(Step::CloudTechnologies, "devops-cicd").unwrap();
        assert_eq!(
            selections.active_tokens(Step::CloudTechnologies),
            vec!["identity-access", "devops-cicd"]
        );
    }
}
