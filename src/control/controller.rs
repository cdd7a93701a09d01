use super::view::{ListingView, Notifier};
use crate::client::BackendClient;
use crate::render::render;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// The client's two-state view of the backend session.
///
/// A single enum rather than two booleans: "start enabled" is always the
/// negation of "stop enabled", so the invariant holds by construction. The
/// toggle reflects the last successful control request only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionToggle {
    #[default]
    Idle,
    Recording,
}

impl SessionToggle {
    pub fn start_enabled(self) -> bool {
        matches!(self, SessionToggle::Idle)
    }

    pub fn stop_enabled(self) -> bool {
        matches!(self, SessionToggle::Recording)
    }
}

/// Drives the backend's recording session and the transcription listing.
///
/// Failure semantics follow the backend contract: a failed control request is
/// caught, logged, and surfaced to the user without flipping the toggle; a
/// failed poll is logged only, since polling is best-effort background
/// refresh. No retry, no backoff.
///
/// The toggle sits behind a brief sync lock that is never held across a
/// backend await, so an in-flight poll never delays start/stop and an
/// in-flight control request never stalls a poll tick.
pub struct SessionController {
    backend: Arc<dyn BackendClient>,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn ListingView>,
    toggle: Mutex<SessionToggle>,
}

impl SessionController {
    pub fn new(
        backend: Arc<dyn BackendClient>,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn ListingView>,
    ) -> Self {
        Self {
            backend,
            notifier,
            view,
            toggle: Mutex::new(SessionToggle::Idle),
        }
    }

    pub fn toggle(&self) -> SessionToggle {
        *self.toggle.lock().unwrap()
    }

    fn set_toggle(&self, next: SessionToggle) {
        *self.toggle.lock().unwrap() = next;
    }

    /// Ask the backend to begin recording.
    ///
    /// Mirrors the disabled-button behavior: once recording, further start
    /// requests are rejected locally without touching the backend.
    pub async fn start_session(&self) {
        if !self.toggle().start_enabled() {
            warn!("Start requested while already recording");
            self.notifier.notify("Recording already in progress.");
            return;
        }

        match self.backend.start().await {
            Ok(resp) => {
                info!("Recording started: {}", resp.status);
                self.notifier.notify(&resp.status);
                self.set_toggle(SessionToggle::Recording);
            }
            Err(e) => {
                error!("Start request failed: {}", e);
                self.notifier.notify_error("Failed to start recording.");
            }
        }
    }

    /// Ask the backend to end recording. Mirror image of `start_session`.
    pub async fn stop_session(&self) {
        if !self.toggle().stop_enabled() {
            warn!("Stop requested while not recording");
            self.notifier.notify("No recording in progress.");
            return;
        }

        match self.backend.stop().await {
            Ok(resp) => {
                info!("Recording stopped: {}", resp.status);
                self.notifier.notify(&resp.status);
                self.set_toggle(SessionToggle::Idle);
            }
            Err(e) => {
                error!("Stop request failed: {}", e);
                self.notifier.notify_error("Failed to stop recording.");
            }
        }
    }

    /// Fetch the current transcription snapshot and replace the listing.
    ///
    /// Runs regardless of toggle state. A failed poll leaves the previous
    /// listing in place.
    pub async fn poll_transcriptions(&self) {
        match self.backend.transcriptions().await {
            Ok(snapshot) => {
                self.view.replace(render(&snapshot));
            }
            Err(e) => {
                warn!("Transcription poll failed: {}", e);
            }
        }
    }
}
