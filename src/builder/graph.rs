//! Static flow graph
//!
//! Forward edges of single-select steps are labelled by the chosen value.
//! Multi-select steps have a single "continue" edge. Back navigation is a
//! pure function of the current step and the answers that decided the
//! branch, so no history stack is kept.

use crate::builder::options::{CloudEnvironment, PackageType};
use crate::builder::selections::Selections;
use crate::builder::step::{Step, Track};

/// Next step after choosing `token` at a single-select step
pub fn next_after_single(step: Step, token: &str) -> Option<Step> {
    match step {
        Step::TrackSelect => token.parse::<Track>().ok().map(|t| t.entry_step()),
        Step::WebPackageType => match token.parse::<PackageType>().ok()? {
            PackageType::CompletePackage => Some(Step::WebDomainHosting),
            PackageType::ALaCarte => Some(Step::WebServices),
        },
        Step::WebDomainHosting => Some(Step::WebModules),
        Step::CloudEnvironment => match token.parse::<CloudEnvironment>().ok()? {
            CloudEnvironment::AlreadyOnCloud => Some(Step::CloudProvider),
            CloudEnvironment::NotOnCloud => Some(Step::CloudMigrationPlans),
        },
        Step::CloudProvider => Some(Step::CloudChallenges),
        Step::CloudMigrationPlans => Some(Step::CloudMigrationGoals),
        _ => None,
    }
}

/// Target of the "continue" control of a multi-select step
pub fn continue_target(step: Step) -> Option<Step> {
    match step {
        Step::WebServices => Some(Step::WebModules),
        Step::WebModules => Some(Step::WebSummary),
        Step::CloudChallenges | Step::CloudMigrationGoals => Some(Step::CloudTechnologies),
        Step::CloudTechnologies => Some(Step::CloudSummary),
        _ => None,
    }
}

/// Whether the step's continue control requires at least one selection
///
/// The modules step accepts zero selections, which means "no modules".
pub fn continue_requires_selection(step: Step) -> bool {
    matches!(
        step,
        Step::WebServices | Step::CloudChallenges | Step::CloudMigrationGoals | Step::CloudTechnologies
    )
}

/// Predecessor of `step`, resolving merge steps from the recorded branch
pub fn previous(step: Step, selections: &Selections) -> Option<Step> {
    match step {
        Step::TrackSelect | Step::Final => None,
        Step::WebPackageType | Step::CloudEnvironment => Some(Step::TrackSelect),
        Step::WebDomainHosting | Step::WebServices => Some(Step::WebPackageType),
        Step::WebModules => {
            if selections.package_type == Some(PackageType::CompletePackage) {
                Some(Step::WebDomainHosting)
            } else {
                Some(Step::WebServices)
            }
        }
        Step::WebSummary => Some(Step::WebModules),
        Step::CloudProvider | Step::CloudMigrationPlans => Some(Step::CloudEnvironment),
        Step::CloudChallenges => Some(Step::CloudProvider),
        Step::CloudMigrationGoals => Some(Step::CloudMigrationPlans),
        Step::CloudTechnologies => {
            if selections.cloud_environment == Some(CloudEnvironment::AlreadyOnCloud) {
                Some(Step::CloudChallenges)
            } else {
                Some(Step::CloudMigrationGoals)
            }
        }
        Step::CloudSummary => Some(Step::CloudTechnologies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_type_branches() {
        assert_eq!(next_after_single(Step::WebPackageType, "complete-package"), Some(Step::WebDomainHosting));
        assert_eq!(next_after_single(Step::WebPackageType, "a-la-carte"), Some(Step::WebServices));
        assert_eq!(next_after_single(Step::WebPackageType, "bogus"), None);
    }

    #[test]
    fn test_track_select_enters_track() {
        assert_eq!(next_after_single(Step::TrackSelect, "cloud-services"), Some(Step::CloudEnvironment));
        assert_eq!(next_after_single(Step::TrackSelect, "web-development"), Some(Step::WebPackageType));
    }

    #[test]
    fn test_modules_back_depends_on_package_type() {
        let mut selections = Selections::new();
        assert_eq!(previous(Step::WebModules, &selections), Some(Step::WebServices));
        selections.package_type = Some(PackageType::CompletePackage);
        assert_eq!(previous(Step::WebModules, &selections), Some(Step::WebDomainHosting));
    }

    #[test]
    fn test_technologies_back_depends_on_environment() {
        let mut selections = Selections::new();
        selections.cloud_environment = Some(CloudEnvironment::AlreadyOnCloud);
        assert_eq!(previous(Step::CloudTechnologies, &selections), Some(Step::CloudChallenges));
        selections.cloud_environment = Some(CloudEnvironment::NotOnCloud);
        assert_eq!(previous(Step::CloudTechnologies, &selections), Some(Step::CloudMigrationGoals));
    }

    #[test]
    fn test_no_back_at_entry_and_terminal() {
        let selections = Selections::new();
        assert_eq!(previous(Step::TrackSelect, &selections), None);
        assert_eq!(previous(Step::Final, &selections), None);
    }

    #[test]
    fn test_every_back_edge_inverts_a_forward_edge() {
        let selections = Selections::new();
        for step in Step::ALL {
            let Some(prev) = previous(step, &selections) else {
                continue;
            };
            let reachable = continue_target(prev) == Some(step)
                || crate::builder::catalog::options_for(prev)
                    .iter()
                    .any(|option| next_after_single(prev, option.value) == Some(step));
            assert!(reachable, "{prev:?} has no forward edge to {step:?}");
        }
    }
}
