//! Localized label mapping
//!
//! Maps typed tokens, summary lines and final messages to stable
//! translation keys. Every function takes the locale explicitly so a
//! summary can be rendered for a locale other than the process default.

use crate::builder::options::{
    Challenge, CloudEnvironment, DomainHosting, MigrationGoal, MigrationPlan, Module,
    PackageType, Provider, Service, Technology,
};
use crate::builder::step::{Step, Track};
use crate::builder::summary::{FinalMessage, Outcome, Summary, SummaryLine};
use rust_i18n::t;
use std::borrow::Cow;

pub fn track_label(track: Track, locale: &str) -> Cow<'static, str> {
    match track {
        Track::WebDevelopment => t!("track_web", locale = locale),
        Track::CloudServices => t!("track_cloud", locale = locale),
    }
}

pub fn package_label(package: PackageType, locale: &str) -> Cow<'static, str> {
    match package {
        PackageType::CompletePackage => t!("package_complete", locale = locale),
        PackageType::ALaCarte => t!("package_a_la_carte", locale = locale),
    }
}

pub fn domain_hosting_label(hosting: DomainHosting, locale: &str) -> Cow<'static, str> {
    match hosting {
        DomainHosting::Present => t!("hosting_present", locale = locale),
        DomainHosting::Missing => t!("hosting_missing", locale = locale),
    }
}

pub fn service_label(service: Service, locale: &str) -> Cow<'static, str> {
    match service {
        Service::Webdesign => t!("service_webdesign", locale = locale),
        Service::Hosting => t!("service_hosting", locale = locale),
        Service::Domain => t!("service_domain", locale = locale),
    }
}

pub fn module_label(module: Module, locale: &str) -> Cow<'static, str> {
    match module {
        Module::Seo => t!("module_seo", locale = locale),
        Module::Maintenance => t!("module_maintenance", locale = locale),
        Module::Webshop => t!("module_webshop", locale = locale),
        Module::CmsTraining => t!("module_cms_training", locale = locale),
        Module::Branding => t!("module_branding", locale = locale),
        Module::None => t!("module_none", locale = locale),
    }
}

pub fn cloud_environment_label(environment: CloudEnvironment, locale: &str) -> Cow<'static, str> {
    match environment {
        CloudEnvironment::AlreadyOnCloud => t!("cloud_yes", locale = locale),
        CloudEnvironment::NotOnCloud => t!("cloud_no", locale = locale),
    }
}

pub fn provider_label(provider: Provider, locale: &str) -> Cow<'static, str> {
    match provider {
        Provider::Aws => t!("provider_aws", locale = locale),
        Provider::Azure => t!("provider_azure", locale = locale),
        Provider::Gcp => t!("provider_gcp", locale = locale),
        Provider::Other => t!("provider_other", locale = locale),
    }
}

pub fn migration_plan_label(plan: MigrationPlan, locale: &str) -> Cow<'static, str> {
    match plan {
        MigrationPlan::WithinThreeMonths => t!("plan_3months", locale = locale),
        MigrationPlan::WithinSixMonths => t!("plan_6months", locale = locale),
        MigrationPlan::Exploring => t!("plan_exploring", locale = locale),
        MigrationPlan::NoPlans => t!("plan_no", locale = locale),
    }
}

pub fn challenge_label(challenge: Challenge, locale: &str) -> Cow<'static, str> {
    match challenge {
        Challenge::CostManagement => t!("challenge_cost_management", locale = locale),
        Challenge::Security => t!("challenge_security", locale = locale),
        Challenge::Monitoring => t!("challenge_monitoring", locale = locale),
        Challenge::Scalability => t!("challenge_scalability", locale = locale),
        Challenge::Devops => t!("challenge_devops", locale = locale),
        Challenge::Containers => t!("challenge_containers", locale = locale),
        Challenge::Other => t!("challenge_other", locale = locale),
    }
}

pub fn migration_goal_label(goal: MigrationGoal, locale: &str) -> Cow<'static, str> {
    match goal {
        MigrationGoal::WebsiteApp => t!("goal_website_app", locale = locale),
        MigrationGoal::BackendApi => t!("goal_backend_api", locale = locale),
        MigrationGoal::DataStorage => t!("goal_data_storage", locale = locale),
        MigrationGoal::CicdPipelines => t!("goal_cicd_pipelines", locale = locale),
        MigrationGoal::FullInfrastructure => t!("goal_full_infrastructure", locale = locale),
    }
}

pub fn technology_label(technology: Technology, locale: &str) -> Cow<'static, str> {
    match technology {
        Technology::DevopsCicd => t!("tech_devops_cicd", locale = locale),
        Technology::ContainerOrchestration => t!("tech_container_orchestration", locale = locale),
        Technology::MonitoringSupport => t!("tech_monitoring_support", locale = locale),
        Technology::InfrastructureCode => t!("tech_infrastructure_code", locale = locale),
        Technology::LoadBalancing => t!("tech_load_balancing", locale = locale),
        Technology::IdentityAccess => t!("tech_identity_access", locale = locale),
        Technology::Other => t!("tech_other", locale = locale),
    }
}

/// Label of the option `value` of `step`; unknown tokens are shown verbatim
pub fn option_label(step: Step, value: &str, locale: &str) -> Cow<'static, str> {
    fn typed<T: std::str::FromStr>(
        value: &str,
        label: impl Fn(T) -> Cow<'static, str>,
    ) -> Option<Cow<'static, str>> {
        value.parse::<T>().ok().map(label)
    }

    let label = match step {
        Step::TrackSelect => typed(value, |v| track_label(v, locale)),
        Step::WebPackageType => typed(value, |v| package_label(v, locale)),
        Step::WebDomainHosting => typed(value, |v| domain_hosting_label(v, locale)),
        Step::WebServices => typed(value, |v| service_label(v, locale)),
        Step::WebModules => typed(value, |v| module_label(v, locale)),
        Step::CloudEnvironment => typed(value, |v| cloud_environment_label(v, locale)),
        Step::CloudProvider => typed(value, |v| provider_label(v, locale)),
        Step::CloudMigrationPlans => typed(value, |v| migration_plan_label(v, locale)),
        Step::CloudChallenges => typed(value, |v| challenge_label(v, locale)),
        Step::CloudMigrationGoals => typed(value, |v| migration_goal_label(v, locale)),
        Step::CloudTechnologies => typed(value, |v| technology_label(v, locale)),
        Step::WebSummary | Step::CloudSummary | Step::Final => None,
    };
    label.unwrap_or_else(|| Cow::Owned(value.to_string()))
}

/// Tooltip text of the info affordance on an option card
pub fn option_info(step: Step, value: &str, locale: &str) -> Option<Cow<'static, str>> {
    let info = match (step, value) {
        (Step::TrackSelect, "web-development") => t!("info_track_web", locale = locale),
        (Step::TrackSelect, "cloud-services") => t!("info_track_cloud", locale = locale),
        (Step::WebPackageType, "complete-package") => t!("info_package_complete", locale = locale),
        (Step::WebPackageType, "a-la-carte") => t!("info_package_a_la_carte", locale = locale),
        (Step::WebModules, "seo") => t!("info_module_seo", locale = locale),
        (Step::WebModules, "maintenance") => t!("info_module_maintenance", locale = locale),
        (Step::WebModules, "webshop") => t!("info_module_webshop", locale = locale),
        (Step::WebModules, "cms-training") => t!("info_module_cms_training", locale = locale),
        (Step::WebModules, "branding") => t!("info_module_branding", locale = locale),
        (Step::CloudTechnologies, "devops-cicd") => t!("info_tech_devops_cicd", locale = locale),
        (Step::CloudTechnologies, "container-orchestration") => {
            t!("info_tech_container_orchestration", locale = locale)
        }
        (Step::CloudTechnologies, "monitoring-support") => {
            t!("info_tech_monitoring_support", locale = locale)
        }
        (Step::CloudTechnologies, "infrastructure-code") => {
            t!("info_tech_infrastructure_code", locale = locale)
        }
        (Step::CloudTechnologies, "load-balancing") => t!("info_tech_load_balancing", locale = locale),
        (Step::CloudTechnologies, "identity-access") => t!("info_tech_identity_access", locale = locale),
        _ => return None,
    };
    Some(info)
}

/// Question shown above a step's options
pub fn step_title(step: Step, locale: &str) -> Cow<'static, str> {
    match step {
        Step::TrackSelect => t!("step_track_select", locale = locale),
        Step::WebPackageType => t!("step_web_package_type", locale = locale),
        Step::WebDomainHosting => t!("step_web_domain_hosting", locale = locale),
        Step::WebServices => t!("step_web_services", locale = locale),
        Step::WebModules => t!("step_web_modules", locale = locale),
        Step::WebSummary | Step::CloudSummary => t!("step_summary", locale = locale),
        Step::CloudEnvironment => t!("step_cloud_environment", locale = locale),
        Step::CloudProvider => t!("step_cloud_provider", locale = locale),
        Step::CloudMigrationPlans => t!("step_cloud_migration_plans", locale = locale),
        Step::CloudChallenges => t!("step_cloud_challenges", locale = locale),
        Step::CloudMigrationGoals => t!("step_cloud_migration_goals", locale = locale),
        Step::CloudTechnologies => t!("step_cloud_technologies", locale = locale),
        Step::Final => t!("step_final", locale = locale),
    }
}

/// Text of one summary line
pub fn summary_line_text(line: &SummaryLine, locale: &str) -> Cow<'static, str> {
    match *line {
        SummaryLine::Package(PackageType::CompletePackage) => t!("summary_complete_package", locale = locale),
        SummaryLine::Package(PackageType::ALaCarte) => t!("summary_separate_services", locale = locale),
        SummaryLine::DomainHosting(DomainHosting::Present) => t!("summary_design_only", locale = locale),
        SummaryLine::DomainHosting(DomainHosting::Missing) => t!("summary_arrange_all", locale = locale),
        SummaryLine::Service(service) => service_label(service, locale),
        SummaryLine::ModulesHeading => t!("summary_modules_heading", locale = locale),
        SummaryLine::Module(module) => module_label(module, locale),
        SummaryLine::NoModules => t!("summary_no_modules", locale = locale),
        SummaryLine::CloudSituation(environment) => t!(
            "summary_situation",
            locale = locale,
            situation = cloud_environment_label(environment, locale)
        ),
        SummaryLine::Provider(provider) => t!(
            "summary_provider",
            locale = locale,
            provider = provider_label(provider, locale)
        ),
        SummaryLine::ChallengesHeading => t!("summary_challenges_heading", locale = locale),
        SummaryLine::Challenge(challenge) => challenge_label(challenge, locale),
        SummaryLine::MigrationPlan(plan) => migration_plan_label(plan, locale),
        SummaryLine::MigrationGoalsHeading => t!("summary_goals_heading", locale = locale),
        SummaryLine::MigrationGoal(goal) => migration_goal_label(goal, locale),
        SummaryLine::TechnologiesHeading => t!("summary_technologies_heading", locale = locale),
        SummaryLine::Technology(technology) => technology_label(technology, locale),
    }
}

/// All lines of a summary as text, in order
pub fn summary_text(summary: &Summary, locale: &str) -> Vec<String> {
    summary
        .lines
        .iter()
        .map(|line| summary_line_text(line, locale).into_owned())
        .collect()
}

pub fn final_title(message: FinalMessage, locale: &str) -> Cow<'static, str> {
    match (message.track, message.outcome) {
        (Track::WebDevelopment, Outcome::Committed) => t!("final_web_success_title", locale = locale),
        (Track::WebDevelopment, Outcome::Saved) => t!("final_web_saved_title", locale = locale),
        (Track::CloudServices, Outcome::Committed) => t!("final_cloud_success_title", locale = locale),
        (Track::CloudServices, Outcome::Saved) => t!("final_cloud_saved_title", locale = locale),
    }
}

pub fn final_body(message: FinalMessage, locale: &str) -> Cow<'static, str> {
    match (message.track, message.outcome) {
        (Track::WebDevelopment, Outcome::Committed) => t!("final_web_success_body", locale = locale),
        (Track::WebDevelopment, Outcome::Saved) => t!("final_web_saved_body", locale = locale),
        (Track::CloudServices, Outcome::Committed) => t!("final_cloud_success_body", locale = locale),
        (Track::CloudServices, Outcome::Saved) => t!("final_cloud_saved_body", locale = locale),
    }
}

pub fn outcome_label(outcome: Outcome, locale: &str) -> Cow<'static, str> {
    match outcome {
        Outcome::Committed => t!("action_start_project", locale = locale),
        Outcome::Saved => t!("action_save_for_later", locale = locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::selections::Selections;
    use crate::builder::summary::render_summary;

    #[test]
    fn test_dutch_option_labels() {
        assert_eq!(option_label(Step::CloudProvider, "aws", "nl"), "Amazon Web Services (AWS)");
        assert_eq!(option_label(Step::WebModules, "branding", "nl"), "Branding / logo / huisstijl");
        assert_eq!(option_label(Step::CloudMigrationPlans, "migration-exploring", "nl"), "Nog aan het oriënteren");
    }

    #[test]
    fn test_unknown_token_shown_verbatim() {
        assert_eq!(option_label(Step::WebServices, "email", "nl"), "email");
    }

    #[test]
    fn test_complete_package_summary_text() {
        let mut selections = Selections::new();
        selections.record_single(Step::WebPackageType, "complete-package").unwrap();
        selections.record_single(Step::WebDomainHosting, "domain-hosting-yes").unwrap();
        selections.toggle(Step::WebModules, "seo").unwrap();
        selections.toggle(Step::WebModules, "webshop").unwrap();

        let text = summary_text(&render_summary(Track::WebDevelopment, &selections), "nl");
        assert_eq!(
            text,
            vec![
                "Compleet pakket",
                "Alleen design (domein + hosting aanwezig)",
                "Extra modules:",
                "SEO-optimalisatie",
                "Webshop",
            ]
        );
    }

    #[test]
    fn test_cloud_summary_text() {
        let mut selections = Selections::new();
        selections.record_single(Step::CloudEnvironment, "cloud-yes").unwrap();
        selections.record_single(Step::CloudProvider, "azure").unwrap();
        selections.toggle(Step::CloudChallenges, "security").unwrap();

        let text = summary_text(&render_summary(Track::CloudServices, &selections), "nl");
        assert_eq!(
            text,
            vec![
                "Huidige situatie: Gebruikt al cloud services",
                "Provider: Microsoft Azure",
                "Uitdagingen:",
                "Beveiliging",
            ]
        );
    }

    #[test]
    fn test_final_message_templates() {
        let message = FinalMessage::new(Track::CloudServices, Outcome::Saved);
        assert_eq!(final_title(message, "nl"), "Informatie bewaard!");
        assert!(final_body(message, "nl").starts_with("We hebben uw cloud behoeften genoteerd."));

        let message = FinalMessage::new(Track::WebDevelopment, Outcome::Committed);
        assert_eq!(final_title(message, "nl"), "Fantastisch!");
    }

    #[test]
    fn test_info_only_for_described_options() {
        assert!(option_info(Step::WebModules, "seo", "nl").is_some());
        assert!(option_info(Step::WebModules, "none", "nl").is_none());
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(option_label(Step::CloudMigrationGoals, "data-storage", "en"), "Data & storage");
        assert_eq!(final_title(FinalMessage::new(Track::WebDevelopment, Outcome::Saved), "en"), "Saved!");
    }
}
