//! Debounced city weather lookup for the terminal
//!
//! Architecture follows a Redux/Elm-inspired dispatch loop:
//!
//! - **Action**: every state transition, including async results
//! - **Reducer**: pure `(state, action) -> DispatchResult<Effect>`
//! - **Effect**: side effects declared as data, run by the task manager
//! - **Component**: props-driven UI elements rendered with ratatui
//!
//! Typing in the search bar schedules a lookup behind a one second
//! debounce; pressing Enter dispatches it immediately. Responses are
//! tagged with a sequence number so a stale reply can never overwrite a
//! newer lookup.

pub mod action;
pub mod api;
pub mod components;
pub mod conditions;
pub mod config;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tasks;
pub mod testing;
pub mod theme;

pub use action::Action;
pub use api::WeatherClient;
pub use config::Config;
pub use effect::{Effect, handle_effect};
pub use reducer::reducer;
pub use state::AppState;
pub use store::{DispatchResult, EffectStore, LoggingMiddleware};
pub use tasks::{TaskKey, TaskManager};
