//! Debounced roster search
//!
//! Every keystroke resets the timer; only the last keystroke within
//! the window reaches the gateway.

use crate::controller::DeskController;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default debounce window for search keystrokes
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debouncer for the search input field
pub struct SearchDebouncer {
    controller: Arc<DeskController>,
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl SearchDebouncer {
    pub fn new(controller: Arc<DeskController>) -> Self {
        Self::with_delay(controller, DEFAULT_DEBOUNCE)
    }

    /// Debouncer with a custom window (tests use a short one)
    pub fn with_delay(controller: Arc<DeskController>, delay: Duration) -> Self {
        Self {
            controller,
            delay,
            pending: None,
        }
    }

    /// Register a keystroke with the current contents of the field.
    ///
    /// Cancels the fetch scheduled by the previous keystroke and
    /// schedules a new one after the debounce window.
    pub fn keystroke(&mut self, term: impl Into<String>) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let controller = Arc::clone(&self.controller);
        let term = term.into();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if let Err(e) = controller.refresh_roster(term).await {
                        tracing::warn!(error = %e, "Debounced roster fetch failed");
                    }
                }
            }
        });
    }

    /// Cancel any scheduled fetch without issuing a new one
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
