//! Actions - every state transition is described by one of these
//!
//! Naming follows the intent/result convention: plain verbs are intents
//! (`SearchQueryChange`, `ForecastFetch`), `Did*` variants carry the
//! outcome of async work back into the reducer.

use crate::state::ForecastEntry;
use crate::store::Action as ActionName;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Search =====
    /// A keystroke changed the search bar text.
    SearchQueryChange(String),

    /// Explicit search (Enter): bypass the debounce delay.
    SearchQuerySubmit(String),

    // ===== Forecast =====
    /// Dispatch a lookup for the given city (debounce timer fired, or a
    /// submit committed the query).
    ForecastFetch { city: String },

    /// Result: forecast list loaded.
    ForecastDidLoad { seq: u64, entries: Vec<ForecastEntry> },

    /// Result: lookup failed. `reason` is for the log only; the UI shows
    /// the fixed localized message.
    ForecastDidError { seq: u64, reason: String },

    // ===== UI =====
    /// Flip the light/dark theme flag.
    UiToggleTheme,

    /// Periodic tick for the loading spinner.
    Tick,

    /// Exit the application.
    Quit,
}

impl ActionName for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SearchQueryChange(_) => "SearchQueryChange",
            Action::SearchQuerySubmit(_) => "SearchQuerySubmit",
            Action::ForecastFetch { .. } => "ForecastFetch",
            Action::ForecastDidLoad { .. } => "ForecastDidLoad",
            Action::ForecastDidError { .. } => "ForecastDidError",
            Action::UiToggleTheme => "UiToggleTheme",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
