//! Project builder wizard
//!
//! The state machine behind the two-track questionnaire: steps, typed
//! answers, the flow graph, delayed transitions and the summary. Nothing in
//! this module renders; a front end implements
//! [`surface::PresentationSurface`] and applies the controller's effects.

pub mod catalog;
pub mod controller;
pub mod graph;
pub mod options;
pub mod scheduler;
pub mod selections;
pub mod step;
pub mod summary;
pub mod surface;
pub mod tooltip;

pub use controller::{Timing, WizardController, WizardEvent};
pub use selections::Selections;
pub use step::{Step, StepKind, Track};
pub use summary::{FinalMessage, Outcome, Summary, SummaryLine};
pub use surface::{Control, Effect, MemorySurface, PresentationSurface, apply_effects, validate_surface};
