//! src/controller/event_loop.rs
//! ============================================================================
//! # EventLoop: Terminal Input, Controller Timers and Shutdown
//!
//! Waits on three sources at once:
//! - crossterm's async `EventStream` (keys and resizes)
//! - the controller's next timer deadline, via `tokio::time::sleep_until`
//! - an OS shutdown signal, delivered through a shared `Notify`
//!
//! Timers are never spawned: the loop sleeps exactly until the earliest
//! pending deadline and then lets the caller poll the controller.

use std::sync::Arc;

use crossterm::event::{Event as TerminalEvent, EventStream};
use futures::StreamExt;
use tokio::{
    signal,
    sync::Notify,
    time::{Instant, sleep_until},
};
use tracing::{info, warn};

use crate::{
    controller::actions::{Action, KeyContext},
    model::app_state::AppState,
};

/// What woke the loop up.
#[derive(Debug)]
pub enum LoopEvent {
    Action(Action),
    /// A controller deadline has passed.
    TimerDue,
    /// Input that maps to nothing in the current context.
    Ignored,
    Shutdown,
}

pub struct EventLoop {
    events: EventStream,
    shutdown: Arc<Notify>,
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Spawns a task that notifies the loop on SIGINT/SIGTERM or Ctrl+C.
    pub fn install_signal_handler(&self) {
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                    (Ok(mut sigterm), Ok(mut sigint)) => {
                        tokio::select! {
                            _ = sigterm.recv() => info!("Received SIGTERM"),
                            _ = sigint.recv() => info!("Received SIGINT"),
                        }
                    }
                    _ => {
                        warn!("Unix signal handlers unavailable, falling back to Ctrl+C");
                        if let Err(e) = signal::ctrl_c().await {
                            warn!("Failed to listen for Ctrl+C: {}", e);
                            return;
                        }
                    }
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }

    /// Waits for the next thing the app must react to.
    pub async fn next_event(&mut self, app: &AppState) -> LoopEvent {
        let deadline: Option<Instant> = app.filters.next_deadline();
        let ctx: KeyContext = app.key_context();

        let timer = async {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = self.shutdown.notified() => {
                info!("Shutdown signal received");
                LoopEvent::Shutdown
            }

            _ = timer => LoopEvent::TimerDue,

            maybe_event = self.events.next() => match maybe_event {
                Some(Ok(event)) => Self::translate(event, ctx),
                Some(Err(e)) => {
                    warn!("Terminal event error: {}", e);
                    LoopEvent::Ignored
                }
                None => {
                    info!("Terminal event stream closed");
                    LoopEvent::Shutdown
                }
            },
        }
    }

    fn translate(event: TerminalEvent, ctx: KeyContext) -> LoopEvent {
        let action = match event {
            TerminalEvent::Key(key) => Action::from_key(key, ctx),
            TerminalEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        };
        action.map_or(LoopEvent::Ignored, LoopEvent::Action)
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::ui_state::{UIMode, UIOverlay};

    fn browse() -> KeyContext {
        KeyContext {
            mode: UIMode::Browse,
            overlay: UIOverlay::None,
            detail_visible: false,
        }
    }

    #[test]
    fn resize_and_keys_become_actions() {
        let resize = EventLoop::translate(TerminalEvent::Resize(80, 24), browse());
        assert!(matches!(resize, LoopEvent::Action(Action::Resize(80, 24))));

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let quit = EventLoop::translate(TerminalEvent::Key(quit), browse());
        assert!(matches!(quit, LoopEvent::Action(Action::Quit)));
    }

    #[test]
    fn unbound_input_is_ignored() {
        let key = KeyEvent::new(KeyCode::F(12), KeyModifiers::NONE);
        let ev = EventLoop::translate(TerminalEvent::Key(key), browse());
        assert!(matches!(ev, LoopEvent::Ignored));
        assert!(matches!(
            EventLoop::translate(TerminalEvent::FocusGained, browse()),
            LoopEvent::Ignored
        ));
    }
}
