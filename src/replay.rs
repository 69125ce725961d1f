//! Scripted sessions
//!
//! Replays a JSON list of wizard events against an in-memory surface and
//! reports where the session ended. Used for non-interactive runs and
//! demos. Example script:
//!
//! ```json
//! {
//!   "events": [
//!     { "event": "start", "track": "cloud-services" },
//!     { "event": "select-single", "step": "cloud-environment", "value": "cloud-no" },
//!     { "wait_ms": 600 },
//!     { "event": "back" }
//!   ]
//! }
//! ```

use crate::builder::catalog::find_option;
use crate::builder::controller::{Timing, WizardController, WizardEvent};
use crate::builder::selections::Selections;
use crate::builder::step::Step;
use crate::builder::summary::{FinalMessage, Summary};
use crate::builder::surface::{MemorySurface, apply_effects, validate_surface};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One entry of a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    /// Advance the clock without interacting
    Wait { wait_ms: u64 },
    Event(WizardEvent),
}

fn default_settle() -> bool {
    true
}

/// Recorded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Locale the report should be rendered in
    #[serde(default)]
    pub locale: Option<String>,

    /// Let pending delayed transitions fire after every event
    #[serde(default = "default_settle")]
    pub settle: bool,

    pub events: Vec<ScriptEntry>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Replay(format!("{}: {}", path.display(), e)))
    }
}

/// Where a replayed session ended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub final_step: Step,
    pub selections: Selections,
    /// Summary of the active track, if one was rendered
    pub summary: Option<Summary>,
    pub final_message: Option<FinalMessage>,
    pub visible_regions: Vec<&'static str>,
    pub events_applied: usize,
}

/// Run a script against a fresh wizard
pub fn replay(script: &ReplayScript, timing: Timing) -> Result<ReplayReport> {
    let mut surface = MemorySurface::new();
    validate_surface(&surface)?;

    let mut wizard = WizardController::new(timing);
    let mut now = Instant::now();
    let mut applied = 0;

    for entry in &script.events {
        match entry {
            ScriptEntry::Wait { wait_ms } => {
                now += Duration::from_millis(*wait_ms);
                apply_effects(&mut surface, &wizard.tick(now));
            }
            ScriptEntry::Event(event) => {
                let event = with_declared_next(event.clone());
                debug!(?event, "Replaying event");
                let effects = wizard.handle(event, now);
                apply_effects(&mut surface, &effects);
                applied += 1;

                if script.settle {
                    while let Some(due) = wizard.next_due() {
                        now = now.max(due);
                        apply_effects(&mut surface, &wizard.tick(now));
                    }
                }
            }
        }
    }

    let summary = wizard
        .active_track()
        .and_then(|track| surface.summary(track))
        .cloned();

    info!(
        step = ?wizard.current_step(),
        events = applied,
        "Replay finished"
    );

    Ok(ReplayReport {
        final_step: wizard.current_step(),
        selections: wizard.selections().clone(),
        summary,
        final_message: surface.final_message(),
        visible_regions: surface.visible_regions().to_vec(),
        events_applied: applied,
    })
}

/// Fill in the next step an option declares when the script omits it
fn with_declared_next(event: WizardEvent) -> WizardEvent {
    match event {
        WizardEvent::SelectSingle {
            step,
            value,
            next: None,
        } => {
            let next = find_option(step, &value).and_then(|option| option.next);
            WizardEvent::SelectSingle { step, value, next }
        }
        other => other,
    }
}
