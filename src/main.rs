use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use mausam::components::{
    Component, ForecastPanel, ForecastPanelProps, HelpBar, HelpBarProps, SearchBar, SearchBarProps,
};
use mausam::event::{EventKind, spawn_event_poller};
use mausam::state::LOADING_ANIM_TICK_MS;
use mausam::{
    Action, AppState, Config, EffectStore, LoggingMiddleware, TaskManager,
    WeatherClient, handle_effect, reducer,
};

#[derive(Parser, Debug)]
#[command(name = "mausam")]
#[command(about = "City weather lookup in the terminal, with a debounced search")]
struct Args {
    /// OpenWeatherMap API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr, and only when RUST_LOG asks for it; stdout belongs to
    // the terminal UI.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(terminal, args);

    // Restore terminal
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

/// The component tree. The search bar owns its cursor; everything else is
/// a pure function of state.
#[derive(Default)]
struct Ui {
    search_bar: SearchBar,
    forecast_panel: ForecastPanel,
    help_bar: HelpBar,
}

#[tokio::main]
async fn run_app(mut terminal: Terminal<CrosstermBackend<io::Stdout>>, args: Args) -> Result<()> {
    let config = Config::resolve(args.api_key);
    let client = WeatherClient::new(&config);

    let mut store =
        EffectStore::with_middleware(AppState::new(), reducer, LoggingMiddleware::new());

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut tasks = TaskManager::new(action_tx);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
    let cancel_token = CancellationToken::new();
    let poller = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(10),
        cancel_token.clone(),
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(LOADING_ANIM_TICK_MS));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut ui = Ui::default();
    terminal.draw(|frame| render_app(frame, frame.area(), store.state(), &mut ui))?;

    'main: loop {
        let (actions, mut needs_render): (Vec<Action>, bool) = tokio::select! {
            Some(event) = event_rx.recv() => {
                // A resize always redraws, whatever the state says.
                let resized = matches!(event, EventKind::Resize(_, _));
                (map_event(&event, store.state(), &mut ui), resized)
            }
            Some(action) = action_rx.recv() => (vec![action], false),
            _ = ticker.tick() => (vec![Action::Tick], false),
            else => break 'main,
        };
        for action in actions {
            if matches!(action, Action::Quit) {
                break 'main;
            }
            let result = store.dispatch(action);
            needs_render |= result.changed;
            for effect in result.effects {
                handle_effect(effect, &mut tasks, &client);
            }
        }

        if needs_render {
            terminal.draw(|frame| render_app(frame, frame.area(), store.state(), &mut ui))?;
        }
    }

    debug!("shutting down");
    tasks.cancel_all();
    cancel_token.cancel();
    let _ = poller.await;

    Ok(())
}

fn render_app(frame: &mut ratatui::Frame, area: Rect, state: &AppState, ui: &mut Ui) {
    let palette = state.theme.palette();
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let [input_area, panel_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    ui.search_bar.render(
        frame,
        input_area,
        SearchBarProps {
            value: &state.query,
            is_focused: true,
            palette,
        },
    );
    ui.forecast_panel
        .render(frame, panel_area, ForecastPanelProps { state });
    ui.help_bar
        .render(frame, help_area, HelpBarProps { palette });
}

fn map_event(event: &EventKind, state: &AppState, ui: &mut Ui) -> Vec<Action> {
    if event.is_quit() {
        return vec![Action::Quit];
    }

    if let EventKind::Key(key) = event {
        use crossterm::event::{KeyCode, KeyModifiers};
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
            return vec![Action::UiToggleTheme];
        }
    }

    ui.search_bar
        .handle_event(
            event,
            SearchBarProps {
                value: &state.query,
                is_focused: true,
                palette: state.theme.palette(),
            },
        )
        .into_iter()
        .collect()
}
