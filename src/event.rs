//! Terminal event plumbing
//!
//! A background task polls crossterm and forwards events over a channel;
//! the main loop selects over that channel, the action channel, and the
//! spinner tick. The poller is stopped through a cancellation token and
//! drains the crossterm buffer on the way out.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The event payload delivered to the main loop.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Key press (release/repeat events are filtered at the poller).
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

impl EventKind {
    /// True for the keys that exit the application regardless of focus:
    /// Esc, Ctrl+C, Ctrl+Q.
    pub fn is_quit(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                use crossterm::event::KeyCode;
                matches!(key.code, KeyCode::Esc)
                    || (key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')))
            }
            EventKind::Resize(_, _) => false,
        }
    }
}

/// Spawn the event polling task with cancellation support.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    debug!("event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        if let Ok(evt) = event::read() {
                            let kind = match evt {
                                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                                    Some(EventKind::Key(key))
                                }
                                event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(kind) = kind {
                                if tx.send(kind).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
