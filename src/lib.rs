//! Project Builder - a two-track project questionnaire
//!
//! This library drives a step-by-step wizard that helps a visitor
//! describe a web development or cloud services project:
//! - A state machine over a fixed step graph with single and multi-select steps
//! - Delayed, cancellable step transitions
//! - Structured summaries and final messages per track
//! - A presentation surface abstraction with an in-memory implementation
//! - A contact form with field validation and a timed submission flow
//! - Localized labels (Dutch and English)
//! - An interactive terminal UI and a scripted replay mode

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "nl");

pub mod builder;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod labels;
pub mod replay;
pub mod tui;

pub use builder::{
    Control, Effect, FinalMessage, MemorySurface, Outcome, PresentationSurface, Selections, Step,
    StepKind, Summary, SummaryLine, Timing, Track, WizardController, WizardEvent, apply_effects,
    validate_surface,
};
pub use cli::{Cli, OutputFormat};
pub use config::{AppConfig, ConfigError};
pub use contact::{ContactForm, ContactSession, Field, SubmitOutcome, SubmitPhase, SubmitTiming};
pub use error::{Error, Result};
pub use i18n::init_locale;
pub use replay::{ReplayReport, ReplayScript, replay};
pub use tui::{TuiApp, TuiResult};
