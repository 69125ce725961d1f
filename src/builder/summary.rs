//! Summary and final message derivation
//!
//! `render_summary` is a pure function of the selections. It produces typed
//! line items; turning them into text for a locale is the job of
//! [`crate::labels`].

use crate::builder::options::{
    Challenge, CloudEnvironment, DomainHosting, MigrationGoal, MigrationPlan, Module,
    PackageType, Provider, Service, Technology,
};
use crate::builder::selections::Selections;
use crate::builder::step::Track;
use serde::{Deserialize, Serialize};

/// Visual marker of a summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineIcon {
    Package,
    Puzzle,
    Check,
    Tools,
    Plus,
    Cross,
    Cloud,
    Server,
    Warning,
    Calendar,
    ArrowUp,
    Cog,
    /// Block heading without an icon
    Heading,
}

/// One labelled line item of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum SummaryLine {
    /// "Compleet pakket" or the "Losse diensten:" heading
    Package(PackageType),
    /// Whether domain and hosting still have to be arranged
    DomainHosting(DomainHosting),
    Service(Service),
    ModulesHeading,
    Module(Module),
    NoModules,
    /// "Huidige situatie:" line
    CloudSituation(CloudEnvironment),
    Provider(Provider),
    ChallengesHeading,
    Challenge(Challenge),
    MigrationPlan(MigrationPlan),
    MigrationGoalsHeading,
    MigrationGoal(MigrationGoal),
    TechnologiesHeading,
    Technology(Technology),
}

impl SummaryLine {
    pub fn icon(&self) -> LineIcon {
        match self {
            SummaryLine::Package(PackageType::CompletePackage) => LineIcon::Package,
            SummaryLine::Package(PackageType::ALaCarte) => LineIcon::Puzzle,
            SummaryLine::DomainHosting(DomainHosting::Present) => LineIcon::Check,
            SummaryLine::DomainHosting(DomainHosting::Missing) => LineIcon::Tools,
            SummaryLine::Service(_) => LineIcon::Check,
            SummaryLine::Module(_) => LineIcon::Plus,
            SummaryLine::NoModules => LineIcon::Cross,
            SummaryLine::CloudSituation(_) => LineIcon::Cloud,
            SummaryLine::Provider(_) => LineIcon::Server,
            SummaryLine::Challenge(_) => LineIcon::Warning,
            SummaryLine::MigrationPlan(_) => LineIcon::Calendar,
            SummaryLine::MigrationGoal(_) => LineIcon::ArrowUp,
            SummaryLine::Technology(_) => LineIcon::Cog,
            SummaryLine::ModulesHeading
            | SummaryLine::ChallengesHeading
            | SummaryLine::MigrationGoalsHeading
            | SummaryLine::TechnologiesHeading => LineIcon::Heading,
        }
    }

    /// Whether the label is rendered in bold
    pub fn is_emphasized(&self) -> bool {
        matches!(
            self,
            SummaryLine::Package(_)
                | SummaryLine::ModulesHeading
                | SummaryLine::ChallengesHeading
                | SummaryLine::MigrationGoalsHeading
                | SummaryLine::TechnologiesHeading
        )
    }

    /// Whether the line opens a new block and gets extra space above it
    pub fn starts_block(&self) -> bool {
        matches!(
            self,
            SummaryLine::ModulesHeading
                | SummaryLine::NoModules
                | SummaryLine::ChallengesHeading
                | SummaryLine::MigrationGoalsHeading
                | SummaryLine::TechnologiesHeading
        )
    }
}

/// Ordered summary of one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub track: Track,
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    pub fn contains(&self, line: SummaryLine) -> bool {
        self.lines.contains(&line)
    }
}

/// Derive the summary of `track` from the selections
pub fn render_summary(track: Track, selections: &Selections) -> Summary {
    let lines = match track {
        Track::WebDevelopment => web_lines(selections),
        Track::CloudServices => cloud_lines(selections),
    };
    Summary { track, lines }
}

fn web_lines(selections: &Selections) -> Vec<SummaryLine> {
    let mut lines = Vec::new();

    if selections.package_type == Some(PackageType::CompletePackage) {
        lines.push(SummaryLine::Package(PackageType::CompletePackage));
        let hosting = match selections.domain_hosting {
            Some(DomainHosting::Present) => DomainHosting::Present,
            _ => DomainHosting::Missing,
        };
        lines.push(SummaryLine::DomainHosting(hosting));
    } else {
        lines.push(SummaryLine::Package(PackageType::ALaCarte));
        lines.extend(selections.services.iter().copied().map(SummaryLine::Service));
    }

    let has_modules = !selections.modules.is_empty() && !selections.modules.contains(&Module::None);
    if has_modules {
        lines.push(SummaryLine::ModulesHeading);
        lines.extend(selections.modules.iter().copied().map(SummaryLine::Module));
    } else {
        lines.push(SummaryLine::NoModules);
    }

    lines
}

fn cloud_lines(selections: &Selections) -> Vec<SummaryLine> {
    let mut lines = Vec::new();

    if selections.cloud_environment == Some(CloudEnvironment::AlreadyOnCloud) {
        lines.push(SummaryLine::CloudSituation(CloudEnvironment::AlreadyOnCloud));
        if let Some(provider) = selections.current_provider {
            lines.push(SummaryLine::Provider(provider));
        }
        if !selections.challenges.is_empty() {
            lines.push(SummaryLine::ChallengesHeading);
            lines.extend(selections.challenges.iter().copied().map(SummaryLine::Challenge));
        }
    } else {
        lines.push(SummaryLine::CloudSituation(CloudEnvironment::NotOnCloud));
        if let Some(plan) = selections.migration_plans {
            lines.push(SummaryLine::MigrationPlan(plan));
        }
        if !selections.migration_goals.is_empty() {
            lines.push(SummaryLine::MigrationGoalsHeading);
            lines.extend(selections.migration_goals.iter().copied().map(SummaryLine::MigrationGoal));
        }
    }

    if !selections.technologies.is_empty() {
        lines.push(SummaryLine::TechnologiesHeading);
        lines.extend(selections.technologies.iter().copied().map(SummaryLine::Technology));
    }

    lines
}

/// How the user finished the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// "Start project"
    Committed,
    /// "Save for later"
    Saved,
}

/// One of the four fixed final message templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalMessage {
    pub track: Track,
    pub outcome: Outcome,
}

impl FinalMessage {
    pub fn new(track: Track, outcome: Outcome) -> Self {
        Self { track, outcome }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Committed
    }
}
