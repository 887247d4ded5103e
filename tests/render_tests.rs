//! Buffer snapshots for the UI components.

use mausam::components::{
    Component, ForecastPanel, ForecastPanelProps, HelpBar, HelpBarProps, SearchBar, SearchBarProps,
};
use mausam::state::{AppState, CITY_NOT_FOUND, FORECAST_HEADING, ForecastEntry, LookupPhase};
use mausam::testing::RenderHarness;
use mausam::theme::Theme;

fn entry(temp_kelvin: f64, description: &str) -> ForecastEntry {
    ForecastEntry {
        temp_kelvin,
        description: description.into(),
    }
}

fn render_panel(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 12);
    let mut panel = ForecastPanel::default();
    render.render_to_string_plain(|frame| {
        panel.render(frame, frame.area(), ForecastPanelProps { state });
    })
}

#[test]
fn error_state_shows_the_fixed_localized_message() {
    let mut state = AppState::new();
    state.error = Some(CITY_NOT_FOUND.to_string());

    let output = render_panel(&state);
    assert!(output.contains(CITY_NOT_FOUND));
    assert!(!output.contains(FORECAST_HEADING));
}

#[test]
fn success_shows_current_conditions_and_upcoming_strip() {
    let mut state = AppState::new();
    // 300 K rounds to 27 C; 299.15 K is exactly 26 C.
    state.forecast = vec![
        entry(300.0, "clear sky"),
        entry(299.15, "broken clouds"),
        entry(298.15, "light rain"),
    ];

    let output = render_panel(&state);
    assert!(output.contains("27°C"));
    assert!(output.contains("स्पष्ट"));
    assert!(output.contains(FORECAST_HEADING));
    assert!(output.contains("26°C"));
    assert!(output.contains("बादल"));
    assert!(output.contains("25°C"));
    assert!(output.contains("बर्सात"));
}

#[test]
fn single_entry_hides_the_upcoming_heading() {
    let mut state = AppState::new();
    state.forecast = vec![entry(285.0, "light snow")];

    let output = render_panel(&state);
    assert!(output.contains("12°C"));
    assert!(output.contains("बर्फबारी"));
    assert!(!output.contains(FORECAST_HEADING));
}

#[test]
fn unknown_description_falls_back_to_the_default_display() {
    let mut state = AppState::new();
    state.forecast = vec![entry(290.0, "volcanic ash")];

    let output = render_panel(&state);
    assert!(output.contains("17°C"));
    assert!(output.contains("मौसम"));
}

#[test]
fn pending_state_shows_the_loading_line() {
    let mut state = AppState::new();
    state.phase = LookupPhase::Fetching;

    let output = render_panel(&state);
    assert!(output.contains("Fetching weather"));
    assert!(!output.contains(CITY_NOT_FOUND));
}

#[test]
fn idle_state_shows_the_hint() {
    let state = AppState::new();

    let output = render_panel(&state);
    assert!(output.contains("Type a city name"));
}

#[test]
fn dark_theme_renders_the_same_text() {
    let mut state = AppState::new();
    state.theme = Theme::Dark;
    state.forecast = vec![entry(300.0, "clear sky")];

    let output = render_panel(&state);
    assert!(output.contains("27°C"));
    assert!(output.contains("स्पष्ट"));
}

#[test]
fn search_bar_shows_placeholder_then_value() {
    let mut render = RenderHarness::new(40, 3);
    let mut bar = SearchBar::new();

    let output = render.render_to_string_plain(|frame| {
        bar.render(
            frame,
            frame.area(),
            SearchBarProps {
                value: "",
                is_focused: true,
                palette: Theme::Light.palette(),
            },
        );
    });
    assert!(output.contains("Enter city name"));

    let output = render.render_to_string_plain(|frame| {
        bar.render(
            frame,
            frame.area(),
            SearchBarProps {
                value: "Kathmandu",
                is_focused: true,
                palette: Theme::Light.palette(),
            },
        );
    });
    assert!(output.contains("Kathmandu"));
    assert!(!output.contains("Enter city name"));
}

#[test]
fn help_bar_lists_the_key_hints() {
    let mut render = RenderHarness::new(60, 1);
    let mut bar = HelpBar::default();

    let output = render.render_to_string_plain(|frame| {
        bar.render(
            frame,
            frame.area(),
            HelpBarProps {
                palette: Theme::Light.palette(),
            },
        );
    });
    assert!(output.contains("enter"));
    assert!(output.contains("ctrl+t"));
    assert!(output.contains("esc"));
}
