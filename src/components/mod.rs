//! UI components
//!
//! Components are pure: props carry all read-only data for rendering,
//! `handle_event` returns actions and never mutates external state, and
//! `render` is a function of props (plus internal UI state such as the
//! input cursor).

use ratatui::{Frame, layout::Rect};

use crate::event::EventKind;

mod forecast_panel;
mod help_bar;
mod search_bar;

pub use forecast_panel::{ForecastPanel, ForecastPanelProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps};

pub trait Component<A> {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
