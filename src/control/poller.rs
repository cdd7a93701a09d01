use super::controller::SessionController;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

/// Recurring fetch of the transcription snapshot.
///
/// A cancellable scheduled task with an explicit start/stop lifecycle, tied
/// to the application's own lifecycle rather than left as an unmanaged
/// interval.
pub struct TranscriptionPoller {
    controller: Arc<SessionController>,
    interval: Duration,
}

/// Handle for a running poller task
pub struct PollerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TranscriptionPoller {
    pub fn new(controller: Arc<SessionController>, interval: Duration) -> Self {
        Self {
            controller,
            interval,
        }
    }

    /// Spawn the polling task.
    ///
    /// The first tick fires immediately so the listing is populated at
    /// startup instead of staying blank for a full interval. An in-flight
    /// poll is never aborted; a tick that lands during a slow poll runs
    /// right after it, and completions land on the view in arrival order.
    pub fn spawn(self) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            info!("Transcription poller started (every {:?})", self.interval);

            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.controller.poll_transcriptions().await;
                    }
                    _ = shutdown_rx.changed() => {
                        break;
                    }
                }
            }

            info!("Transcription poller stopped");
        });

        PollerHandle { shutdown_tx, task }
    }
}

impl PollerHandle {
    /// Signal the poller to stop and wait for the task to finish
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);
        self.task.await?;
        Ok(())
    }
}
