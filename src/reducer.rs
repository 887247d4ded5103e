//! Reducer - pure function: (state, action) -> DispatchResult<Effect>
//!
//! All state mutations happen here; async work is declared as effects and
//! handled by the main loop. Invariants enforced:
//!
//! - at most one pending lookup: every keystroke cancels and reschedules
//!   the debounce timer (same task key, see `effect::LOOKUP_TASK`)
//! - forecast snapshot and error state are mutually exclusive
//! - a `Did*` result is applied only if its sequence tag matches the most
//!   recently dispatched lookup; stale responses are dropped

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, CITY_NOT_FOUND, LookupPhase};
use crate::store::DispatchResult;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search =====
        Action::SearchQueryChange(text) => {
            state.query = text.clone();
            if text.trim().is_empty() {
                state.phase = LookupPhase::Idle;
                DispatchResult::changed_with(Effect::CancelLookup)
            } else {
                state.phase = LookupPhase::Debouncing;
                DispatchResult::changed_with(Effect::ScheduleLookup { city: text })
            }
        }

        Action::SearchQuerySubmit(text) => {
            state.query = text.clone();
            if text.trim().is_empty() {
                state.phase = LookupPhase::Idle;
                DispatchResult::changed_with(Effect::CancelLookup)
            } else {
                // Explicit search bypasses the debounce delay.
                dispatch_lookup(state, text)
            }
        }

        // ===== Forecast =====
        Action::ForecastFetch { city } => dispatch_lookup(state, city),

        Action::ForecastDidLoad { seq, entries } => {
            if seq != state.fetch_seq {
                tracing::debug!(seq, latest = state.fetch_seq, "dropping stale forecast");
                return DispatchResult::unchanged();
            }
            state.forecast = entries;
            state.error = None;
            state.phase = LookupPhase::Idle;
            DispatchResult::changed()
        }

        Action::ForecastDidError { seq, reason } => {
            if seq != state.fetch_seq {
                tracing::debug!(seq, latest = state.fetch_seq, "dropping stale error");
                return DispatchResult::unchanged();
            }
            tracing::debug!(%reason, city = %state.search_target, "forecast lookup failed");
            state.forecast.clear();
            state.error = Some(CITY_NOT_FOUND.to_string());
            state.phase = LookupPhase::Idle;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while the spinner is visible
            if state.phase.is_pending() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // handled in the main loop
            DispatchResult::unchanged()
        }
    }
}

/// Commit the search target and emit the lookup effect.
fn dispatch_lookup(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.search_target = city.clone();
    state.fetch_seq += 1;
    state.error = None;
    state.phase = LookupPhase::Fetching;
    DispatchResult::changed_with(Effect::Lookup {
        city,
        seq: state.fetch_seq,
    })
}
