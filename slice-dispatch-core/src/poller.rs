//! Terminal event polling on a tokio task

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::event::EventKind;

/// Background reader turning crossterm events into [`EventKind`]s
///
/// Every tick the poller drains up to `max_batch` pending terminal events,
/// waiting at most `poll_timeout` for each, and forwards the translated
/// events over an unbounded channel. It stops when the token is cancelled
/// or the receiving side is dropped.
#[derive(Debug, Clone, Copy)]
pub struct EventPoller {
    tick_rate: Duration,
    poll_timeout: Duration,
    max_batch: usize,
}

impl Default for EventPoller {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(16),
            poll_timeout: Duration::from_millis(10),
            max_batch: 20,
        }
    }
}

impl EventPoller {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            ..Self::default()
        }
    }

    pub fn poll_timeout(mut self, poll_timeout: Duration) -> Self {
        self.poll_timeout = poll_timeout;
        self
    }

    /// At least one event is read per tick
    pub fn max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch.max(1);
        self
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn spawn(
        self,
        tx: mpsc::UnboundedSender<EventKind>,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(self.tick_rate);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        // Leave nothing buffered for whoever owns the terminal next
                        while event::poll(Duration::ZERO).unwrap_or(false) {
                            let _ = event::read();
                        }
                        info!("Event poller stopped");
                        return;
                    }
                    _ = ticks.tick() => {
                        if !self.drain_pending(&tx) {
                            debug!("Event receiver dropped, stopping poller");
                            return;
                        }
                    }
                }
            }
        })
    }

    /// Forward pending events; `false` once the receiver is gone
    fn drain_pending(&self, tx: &mpsc::UnboundedSender<EventKind>) -> bool {
        for _ in 0..self.max_batch {
            match event::poll(self.poll_timeout) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    warn!(error = %e, "Terminal poll failed");
                    break;
                }
            }
            let translated = match event::read() {
                Ok(raw) => translate(raw),
                Err(e) => {
                    warn!(error = %e, "Terminal read failed");
                    continue;
                }
            };
            if let Some(kind) = translated {
                if tx.send(kind).is_err() {
                    return false;
                }
            }
        }
        true
    }
}

/// Map a crossterm event to an [`EventKind`]
///
/// Key releases, focus changes and pastes are dropped. Wheel motion becomes
/// [`EventKind::Scroll`] with a delta of one row.
pub fn translate(event: Event) -> Option<EventKind> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => Some(EventKind::Key(key)),
        Event::Mouse(mouse) => {
            let delta = match mouse.kind {
                MouseEventKind::ScrollDown => 1,
                MouseEventKind::ScrollUp => -1,
                _ => return Some(EventKind::Mouse(mouse)),
            };
            Some(EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta,
            })
        }
        Event::Resize(width, height) => Some(EventKind::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}
