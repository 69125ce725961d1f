//! Wizard tracks and steps
//!
//! `Step` is a closed set. The mapping from a step to the identifier of its
//! region on the presentation surface lives in [`crate::builder::surface`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two independent wizard flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// Website design, hosting and extra modules
    #[value(name = "web-development", alias = "web")]
    WebDevelopment,
    /// Cloud adoption and migration
    #[value(name = "cloud-services", alias = "cloud")]
    CloudServices,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::WebDevelopment, Track::CloudServices];

    /// Wire token used by the track-select options
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::WebDevelopment => "web-development",
            Track::CloudServices => "cloud-services",
        }
    }

    /// First step of the track after the track-select step
    pub fn entry_step(&self) -> Step {
        match self {
            Track::WebDevelopment => Step::WebPackageType,
            Track::CloudServices => Step::CloudEnvironment,
        }
    }

    /// Step that shows the track's summary
    pub fn summary_step(&self) -> Step {
        match self {
            Track::WebDevelopment => Step::WebSummary,
            Track::CloudServices => Step::CloudSummary,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web-development" | "webdev" | "web" => Ok(Track::WebDevelopment),
            "cloud-services" | "cloud" => Ok(Track::CloudServices),
            other => Err(format!("unknown track '{other}'")),
        }
    }
}

/// How a step collects input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Choosing one option determines the next step
    SingleSelect,
    /// Zero or more options accumulate into a set, advanced by "continue"
    MultiSelect,
    /// Read-only summary with the two finish actions
    Summary,
    /// Final message
    Terminal,
}

/// A named state of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Choose between web development and cloud services
    #[default]
    TrackSelect,
    WebPackageType,
    WebDomainHosting,
    WebServices,
    WebModules,
    WebSummary,
    CloudEnvironment,
    CloudProvider,
    CloudMigrationPlans,
    CloudChallenges,
    CloudMigrationGoals,
    CloudTechnologies,
    CloudSummary,
    /// Final message after finishing either track
    Final,
}

impl Step {
    pub const ALL: [Step; 14] = [
        Step::TrackSelect,
        Step::WebPackageType,
        Step::WebDomainHosting,
        Step::WebServices,
        Step::WebModules,
        Step::WebSummary,
        Step::CloudEnvironment,
        Step::CloudProvider,
        Step::CloudMigrationPlans,
        Step::CloudChallenges,
        Step::CloudMigrationGoals,
        Step::CloudTechnologies,
        Step::CloudSummary,
        Step::Final,
    ];

    pub fn kind(&self) -> StepKind {
        match self {
            Step::TrackSelect
            | Step::WebPackageType
            | Step::WebDomainHosting
            | Step::CloudEnvironment
            | Step::CloudProvider
            | Step::CloudMigrationPlans => StepKind::SingleSelect,
            Step::WebServices
            | Step::WebModules
            | Step::CloudChallenges
            | Step::CloudMigrationGoals
            | Step::CloudTechnologies => StepKind::MultiSelect,
            Step::WebSummary | Step::CloudSummary => StepKind::Summary,
            Step::Final => StepKind::Terminal,
        }
    }

    /// Track the step belongs to; `None` for the shared steps
    pub fn track(&self) -> Option<Track> {
        match self {
            Step::TrackSelect | Step::Final => None,
            Step::WebPackageType
            | Step::WebDomainHosting
            | Step::WebServices
            | Step::WebModules
            | Step::WebSummary => Some(Track::WebDevelopment),
            Step::CloudEnvironment
            | Step::CloudProvider
            | Step::CloudMigrationPlans
            | Step::CloudChallenges
            | Step::CloudMigrationGoals
            | Step::CloudTechnologies
            | Step::CloudSummary => Some(Track::CloudServices),
        }
    }

    pub fn is_single_select(&self) -> bool {
        self.kind() == StepKind::SingleSelect
    }

    pub fn is_multi_select(&self) -> bool {
        self.kind() == StepKind::MultiSelect
    }

    /// Back is disabled at the shared entry step and at the terminal step
    pub fn allows_back(&self) -> bool {
        !matches!(self, Step::TrackSelect | Step::Final)
    }
}
