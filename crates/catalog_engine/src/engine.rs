use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_warn};

use crate::fetch::{search, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Search { request_id: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime and reports completions.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        let fetcher = ReqwestFetcher::new(settings).map_err(io::Error::other)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                catalog_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, request_id: RequestId, url: impl Into<String>) {
        let command = EngineCommand::Search {
            request_id,
            url: url.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            catalog_warn!("engine thread is gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks for at most `timeout` waiting for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, url } => {
            catalog_debug!("request {} GET {}", request_id, url);
            let result = search(fetcher, &url).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}
