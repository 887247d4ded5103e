//! Effects - side effects declared by the reducer
//!
//! Effects are data; `handle_effect` maps them onto the task manager.
//! Timer and fetch share one task key, so a keystroke during an in-flight
//! request aborts it and restarts the cycle.

use std::future::ready;

use crate::action::Action;
use crate::api::WeatherClient;
use crate::state::DEBOUNCE_DELAY;
use crate::tasks::{TaskKey, TaskManager};

/// Task key for the debounce timer and the fetch it dispatches.
pub const LOOKUP_TASK: &str = "forecast_lookup";

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start (or restart) the debounce timer for a lookup.
    ScheduleLookup { city: String },

    /// Fetch the forecast now, tagged with the dispatch sequence.
    Lookup { city: String, seq: u64 },

    /// Abort any pending timer or in-flight fetch.
    CancelLookup,
}

/// Run an effect by spawning or cancelling tasks.
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager<Action>, client: &WeatherClient) {
    match effect {
        Effect::ScheduleLookup { city } => {
            tasks.debounce(
                LOOKUP_TASK,
                DEBOUNCE_DELAY,
                ready(Action::ForecastFetch { city }),
            );
        }
        Effect::Lookup { city, seq } => {
            let client = client.clone();
            tasks.spawn(LOOKUP_TASK, async move {
                match client.fetch_forecast(&city).await {
                    Ok(entries) => Action::ForecastDidLoad { seq, entries },
                    Err(e) => Action::ForecastDidError {
                        seq,
                        reason: e.to_string(),
                    },
                }
            });
        }
        Effect::CancelLookup => {
            tasks.cancel(&TaskKey::new(LOOKUP_TASK));
        }
    }
}
