//! Forecast panel - current conditions, upcoming strip, error and
//! loading views
//!
//! Render-only: the panel derives everything from `AppState`. The error
//! line and a populated forecast are mutually exclusive by reducer
//! invariant, so the view match below is total.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::conditions::{condition_display, kelvin_to_celsius};
use crate::state::{AppState, FORECAST_HEADING, ForecastEntry};
use crate::theme::Palette;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const ERROR_ICON: &str = "⚠";

pub struct ForecastPanelProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct ForecastPanel;

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = state.theme.palette();

        let lines = lines_for_state(state, palette);
        if lines.is_empty() {
            return;
        }

        let constraints = vec![Constraint::Length(1); lines.len()];
        let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);

        for (line, chunk) in lines.into_iter().zip(chunks.iter().copied()) {
            frame.render_widget(Paragraph::new(line), chunk);
        }
    }
}

enum PanelView<'a> {
    Error(&'a str),
    Ready(&'a AppState),
    Pending,
    Empty,
}

impl<'a> PanelView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if let Some(error) = state.error.as_deref() {
            PanelView::Error(error)
        } else if !state.forecast.is_empty() {
            PanelView::Ready(state)
        } else if state.phase.is_pending() {
            PanelView::Pending
        } else {
            PanelView::Empty
        }
    }
}

fn lines_for_state(state: &AppState, palette: Palette) -> Vec<Line<'static>> {
    match PanelView::from_state(state) {
        PanelView::Error(error) => vec![
            blank_line(),
            Line::from(ERROR_ICON).centered(),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(palette.error).bold(),
            ))
            .centered(),
        ],
        PanelView::Ready(state) => {
            let mut lines = Vec::new();

            if let Some(current) = state.current_conditions() {
                lines.extend(current_lines(current, palette));
            }

            let upcoming = state.upcoming();
            if !upcoming.is_empty() {
                lines.push(blank_line());
                lines.push(
                    Line::from(Span::styled(
                        FORECAST_HEADING,
                        Style::default().fg(palette.fg).bold(),
                    ))
                    .centered(),
                );
                lines.push(upcoming_line(upcoming, palette));
            }

            lines
        }
        PanelView::Pending => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);
            vec![
                blank_line(),
                Line::from(vec![
                    Span::styled(spinner, Style::default().fg(palette.accent)),
                    Span::styled(
                        format!(" Fetching weather{:<3}", dots),
                        Style::default().fg(palette.muted),
                    ),
                ])
                .centered(),
            ]
        }
        PanelView::Empty => vec![
            blank_line(),
            Line::from(Span::styled(
                "Type a city name to look up the weather",
                Style::default().fg(palette.muted),
            ))
            .centered(),
        ],
    }
}

/// Icon, temperature, and localized label for the "now" entry.
fn current_lines(current: &ForecastEntry, palette: Palette) -> Vec<Line<'static>> {
    let display = condition_display(&current.description);
    let celsius = kelvin_to_celsius(current.temp_kelvin);

    vec![
        Line::from(display.icon).centered(),
        Line::from(Span::styled(
            format!("{}°C", celsius),
            Style::default().fg(palette.accent).bold(),
        ))
        .centered(),
        Line::from(Span::styled(
            display.label,
            Style::default().fg(palette.fg),
        ))
        .centered(),
    ]
}

/// One line for the upcoming strip: "26°C बादल   25°C बर्सात   ...".
fn upcoming_line(upcoming: &[ForecastEntry], palette: Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(upcoming.len() * 2);
    for (i, entry) in upcoming.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let display = condition_display(&entry.description);
        spans.push(Span::styled(
            format!("{}°C ", kelvin_to_celsius(entry.temp_kelvin)),
            Style::default().fg(palette.fg).bold(),
        ));
        spans.push(Span::styled(
            display.label,
            Style::default().fg(palette.muted),
        ));
    }
    Line::from(spans).centered()
}

fn blank_line() -> Line<'static> {
    Line::from("").centered()
}
