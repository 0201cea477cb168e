//! Background request worker
//!
//! Owns a tokio runtime on a dedicated thread. Each submission becomes its
//! own task, so overlapping requests run side by side; outcomes come back to
//! the UI thread over a channel.

use crate::llm::GenerativeService;
use crate::{GenAiError, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Commands sent to the request worker
#[derive(Debug, Clone)]
pub enum RequestCommand {
    /// Send one prompt to the service
    Submit {
        /// Submission generation the outcome is reported under
        generation: u64,
        /// Prompt text, sent as-is
        prompt: String,
    },

    /// Stop the worker; in-flight requests are abandoned
    Shutdown,
}

/// Events emitted by the request worker
#[derive(Debug, Clone)]
pub enum RequestEvent {
    /// A request finished
    Completed {
        /// Generation of the submission
        generation: u64,
        /// Generated text or the cause of failure
        outcome: Result<String>,
        /// Wall time of the call in milliseconds
        elapsed_ms: u64,
    },

    /// Worker has shut down
    Shutdown,
}

/// Handle for interacting with a running request worker
pub struct RequestHandle {
    command_tx: Sender<RequestCommand>,
    event_rx: Receiver<RequestEvent>,
    worker_handle: Option<JoinHandle<()>>,
}

impl RequestHandle {
    /// Queue a prompt for the given generation
    pub fn submit(&self, generation: u64, prompt: &str) -> Result<()> {
        self.command_tx
            .send(RequestCommand::Submit {
                generation,
                prompt: prompt.to_string(),
            })
            .map_err(|e| GenAiError::ChannelError(format!("Failed to send submit command: {}", e)))
    }

    /// Try to receive an event without blocking
    ///
    /// Fails with `ChannelError` once the worker is gone and every event
    /// has been drained.
    pub fn try_recv_event(&self) -> Result<Option<RequestEvent>> {
        match self.event_rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(GenAiError::ChannelError(
                "Request worker event channel closed".to_string(),
            )),
        }
    }

    /// Receive an event, waiting at most `timeout`
    pub fn recv_event_timeout(&self, timeout: Duration) -> Result<Option<RequestEvent>> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(GenAiError::ChannelError(
                "Request worker event channel closed".to_string(),
            )),
        }
    }

    /// Shutdown the worker and wait for its thread
    pub fn shutdown(mut self) -> Result<()> {
        let _ = self.command_tx.send(RequestCommand::Shutdown);
        if let Some(handle) = self.worker_handle.take() {
            handle
                .join()
                .map_err(|_| GenAiError::RuntimeError("Request worker panicked".to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl RequestHandle {
    /// Handle whose worker vanished without a shutdown event
    pub(crate) fn disconnected() -> Self {
        let (command_tx, _) = bounded(1);
        let (_, event_rx) = unbounded();
        Self {
            command_tx,
            event_rx,
            worker_handle: None,
        }
    }
}

/// Spawns the worker thread for a generative service
pub struct RequestWorker {
    service: Arc<dyn GenerativeService>,
}

impl RequestWorker {
    /// Create a worker for the given service
    pub fn new(service: Arc<dyn GenerativeService>) -> Self {
        Self { service }
    }

    /// Start the worker thread
    ///
    /// The runtime is built before the thread starts so that a failure is
    /// reported to the caller instead of as an event.
    pub fn start(self) -> Result<RequestHandle> {
        let (command_tx, command_rx) = bounded::<RequestCommand>(100);
        let (event_tx, event_rx) = unbounded::<RequestEvent>();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("genai-request")
            .enable_all()
            .build()
            .map_err(|e| GenAiError::RuntimeError(format!("Failed to create tokio runtime: {}", e)))?;

        let service = self.service;

        let worker_handle = std::thread::Builder::new()
            .name("genai-request-worker".to_string())
            .spawn(move || {
                info!("Request worker started");

                loop {
                    match command_rx.recv() {
                        Ok(RequestCommand::Submit { generation, prompt }) => {
                            debug!("Dispatching request #{} ({} chars)", generation, prompt.len());

                            let service = service.clone();
                            let event_tx = event_tx.clone();

                            runtime.spawn(async move {
                                let start_time = Instant::now();
                                let outcome = service.generate(&prompt).await;
                                let elapsed_ms = start_time.elapsed().as_millis() as u64;

                                match &outcome {
                                    Ok(text) => debug!(
                                        "Request #{} succeeded: {} chars in {}ms",
                                        generation,
                                        text.len(),
                                        elapsed_ms
                                    ),
                                    Err(e) => error!(
                                        "Request #{} failed after {}ms: {}",
                                        generation, elapsed_ms, e
                                    ),
                                }

                                if event_tx
                                    .send(RequestEvent::Completed {
                                        generation,
                                        outcome,
                                        elapsed_ms,
                                    })
                                    .is_err()
                                {
                                    warn!("Event channel closed, dropping outcome of request #{}", generation);
                                }
                            });
                        }

                        Ok(RequestCommand::Shutdown) => {
                            info!("Request worker shutting down");
                            break;
                        }

                        Err(_) => {
                            info!("Command channel closed, shutting down");
                            break;
                        }
                    }
                }

                runtime.shutdown_background();
                let _ = event_tx.send(RequestEvent::Shutdown);
                info!("Request worker stopped");
            })?;

        Ok(RequestHandle {
            command_tx,
            event_rx,
            worker_handle: Some(worker_handle),
        })
    }
}
