//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! The reducer returns a [`DispatchResult`](crate::store::DispatchResult)
//! carrying the re-render flag and any effects.

use crate::theme::Theme;
use std::time::Duration;

/// Delay between the last keystroke and the dispatched lookup.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// Tick interval for the loading spinner animation.
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// Fixed user-facing failure message, shown for every failed lookup.
pub const CITY_NOT_FOUND: &str = "शहर फेला परेन";

/// Heading above the upcoming-forecast strip.
pub const FORECAST_HEADING: &str = "आगामी ५ घण्टाको पूर्वानुमान:";

/// How many upcoming entries the forecast strip shows (entries 1..=5).
pub const FORECAST_STRIP_LEN: usize = 5;

/// One forecast entry as returned by the weather API.
///
/// Temperatures stay in kelvin here; conversion to celsius happens at
/// render time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForecastEntry {
    pub temp_kelvin: f64,
    pub description: String,
}

/// Where the lookup cycle currently is.
///
/// `Idle` covers both "nothing requested yet" and "last cycle finished";
/// success and failure are distinguished by `forecast` / `error`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupPhase {
    #[default]
    Idle,
    /// Debounce timer pending; a new keystroke cancels and reschedules it.
    Debouncing,
    /// Request in flight.
    Fetching,
}

impl LookupPhase {
    /// True while the spinner should animate.
    pub fn is_pending(self) -> bool {
        matches!(self, LookupPhase::Debouncing | LookupPhase::Fetching)
    }
}

/// Application state - everything the UI needs to render.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Raw text in the search bar, overwritten on every keystroke.
    pub query: String,

    /// City name committed for the last dispatched lookup.
    pub search_target: String,

    /// Current position in the lookup cycle.
    pub phase: LookupPhase,

    /// Forecast snapshot from the last successful lookup. Replaced
    /// wholesale on success, cleared on failure. Entry 0 is "now".
    pub forecast: Vec<ForecastEntry>,

    /// Fixed localized message when the last lookup failed. Never
    /// populated while `forecast` is (and vice versa).
    pub error: Option<String>,

    /// Light/dark flag, session-local.
    pub theme: Theme,

    /// Monotonic tag for dispatched lookups; responses carrying an older
    /// tag are ignored.
    pub fetch_seq: u64,

    /// Animation frame counter for the spinner.
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first snapshot entry, displayed as current conditions.
    pub fn current_conditions(&self) -> Option<&ForecastEntry> {
        self.forecast.first()
    }

    /// Entries shown in the upcoming strip (snapshot entries 1..=5).
    pub fn upcoming(&self) -> &[ForecastEntry] {
        let end = self.forecast.len().min(1 + FORECAST_STRIP_LEN);
        self.forecast.get(1..end).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(temp: f64) -> ForecastEntry {
        ForecastEntry {
            temp_kelvin: temp,
            description: "clear sky".into(),
        }
    }

    #[test]
    fn current_conditions_is_first_entry() {
        let mut state = AppState::new();
        assert!(state.current_conditions().is_none());

        state.forecast = vec![entry(300.0), entry(301.0)];
        assert_eq!(state.current_conditions(), Some(&entry(300.0)));
    }

    #[test]
    fn upcoming_skips_current_and_caps_at_strip_len() {
        let mut state = AppState::new();
        assert!(state.upcoming().is_empty());

        state.forecast = (0..8).map(|i| entry(290.0 + f64::from(i))).collect();
        let upcoming = state.upcoming();
        assert_eq!(upcoming.len(), FORECAST_STRIP_LEN);
        assert_eq!(upcoming[0], entry(291.0));
    }

    #[test]
    fn phase_pending() {
        assert!(!LookupPhase::Idle.is_pending());
        assert!(LookupPhase::Debouncing.is_pending());
        assert!(LookupPhase::Fetching.is_pending());
    }
}
