use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use site_logging::{site_debug, site_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{HttpVenueSource, VenueSource};
use crate::types::{ActivationId, EngineEvent};

enum EngineCommand {
    LoadVenues {
        activation: ActivationId,
        locator: String,
    },
}

/// Handle to the retrieval runtime: commands in, events out.
///
/// Each command is spawned as its own task, so overlapping retrievals settle
/// in whatever order the network produces, not the order they were issued.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new() -> Self {
        Self::with_source(Arc::new(HttpVenueSource::new()))
    }

    /// Builds a handle over a custom source, letting tests substitute the
    /// transport.
    pub fn with_source(source: Arc<dyn VenueSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx, cancel).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
            cancel,
        }
    }

    pub fn load(&self, activation: ActivationId, locator: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadVenues {
            activation,
            locator: locator.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Cooperative shutdown. In-flight retrievals run to completion but
    /// their settlements are no longer reported.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::new()
    }
}

async fn handle_command(
    source: &dyn VenueSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    match command {
        EngineCommand::LoadVenues {
            activation,
            locator,
        } => {
            let result = source.fetch_venues(activation, &locator).await;
            // The token is checked only between completion and reporting;
            // it never aborts the transport.
            if cancel.is_cancelled() {
                site_debug!("venues load dropped after shutdown activation={activation}");
                return;
            }
            if let Err(err) = &result {
                site_warn!("venues load failed activation={activation}: {err}");
            }
            let _ = event_tx.send(EngineEvent::VenuesLoaded { activation, result });
        }
    }
}
