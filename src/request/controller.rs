//! Request lifecycle for one prompt at a time
//!
//! The controller is owned by the UI thread. Every submission gets a new
//! generation number; only the outcome of the latest generation is applied,
//! so a slow earlier request can never overwrite a newer one.

use crate::llm::GenerativeService;
use crate::request::state::{PromptInput, SubmissionState};
use crate::request::worker::{RequestEvent, RequestHandle, RequestWorker};
use crate::{GenAiError, Result, FAILED_MESSAGE};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Mediates prompt → response cycles against the generative service
pub struct RequestController {
    state: SubmissionState,
    input: PromptInput,
    generation: u64,
    last_elapsed_ms: Option<u64>,
    handle: Option<RequestHandle>,
}

impl RequestController {
    /// Create a controller around a running worker
    pub fn new(handle: RequestHandle) -> Self {
        Self {
            state: SubmissionState::Idle,
            input: PromptInput::new(),
            generation: 0,
            last_elapsed_ms: None,
            handle: Some(handle),
        }
    }

    /// Start a worker for `service` and wrap it in a controller
    pub fn start(service: Arc<dyn GenerativeService>) -> Result<Self> {
        let handle = RequestWorker::new(service).start()?;
        Ok(Self::new(handle))
    }

    /// Create a controller without a worker (for testing)
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self {
            state: SubmissionState::Idle,
            input: PromptInput::new(),
            generation: 0,
            last_elapsed_ms: None,
            handle: None,
        }
    }

    /// Submit a prompt.
    ///
    /// No validation is done; an empty prompt is sent as-is. Any previous
    /// outcome is cleared and the state becomes `Loading`. Returns the
    /// generation of this submission.
    pub fn submit(&mut self, prompt: &str) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.state = SubmissionState::Loading;

        info!("Submitting prompt #{} ({} chars)", generation, prompt.len());

        let sent = match &self.handle {
            Some(handle) => handle.submit(generation, prompt),
            None => Err(GenAiError::ChannelError(
                "Request worker is not running".to_string(),
            )),
        };

        if let Err(e) = sent {
            error!("Failed to dispatch prompt #{}: {}", generation, e);
            self.state = SubmissionState::Failed(FAILED_MESSAGE.to_string());
        }

        generation
    }

    /// Submit the current prompt input; the input is kept
    pub fn submit_input(&mut self) -> u64 {
        let prompt = self.input.as_str().to_string();
        self.submit(&prompt)
    }

    /// Apply all pending worker events.
    ///
    /// Returns true when the submission state changed.
    pub fn poll_events(&mut self) -> bool {
        let mut events = Vec::new();
        if let Some(handle) = &self.handle {
            loop {
                match handle.try_recv_event() {
                    Ok(Some(RequestEvent::Shutdown)) => {
                        events.push(RequestEvent::Shutdown);
                        break;
                    }
                    Ok(Some(event)) => events.push(event),
                    Ok(None) => break,
                    Err(e) => {
                        // Channel closed with no shutdown event
                        error!("Lost request worker: {}", e);
                        events.push(RequestEvent::Shutdown);
                        break;
                    }
                }
            }
        }

        let mut changed = false;
        for event in events {
            changed |= self.apply_event(event);
        }
        changed
    }

    /// Apply one worker event. Returns true when the state changed.
    pub(crate) fn apply_event(&mut self, event: RequestEvent) -> bool {
        match event {
            RequestEvent::Completed {
                generation,
                outcome,
                elapsed_ms,
            } => {
                if generation != self.generation {
                    debug!(
                        "Discarding stale response #{} (current #{})",
                        generation, self.generation
                    );
                    return false;
                }

                self.last_elapsed_ms = Some(elapsed_ms);
                self.state = match outcome {
                    Ok(text) => {
                        info!(
                            "Prompt #{} answered: {} chars in {}ms",
                            generation,
                            text.len(),
                            elapsed_ms
                        );
                        SubmissionState::Succeeded(text)
                    }
                    Err(e) => {
                        // The cause stays in the log; the user sees the fixed message
                        error!("Prompt #{} failed: {}", generation, e);
                        SubmissionState::Failed(FAILED_MESSAGE.to_string())
                    }
                };
                true
            }

            RequestEvent::Shutdown => {
                warn!("Request worker shut down");
                self.handle = None;
                if self.state.is_loading() {
                    self.state = SubmissionState::Failed(FAILED_MESSAGE.to_string());
                    return true;
                }
                false
            }
        }
    }

    /// Current submission state
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Generation of the latest submission (0 before the first)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Prompt buffer
    pub fn input(&self) -> &PromptInput {
        &self.input
    }

    /// Mutable prompt buffer
    pub fn input_mut(&mut self) -> &mut PromptInput {
        &mut self.input
    }

    /// Check if a request is in flight
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Duration of the last applied request in milliseconds
    pub fn last_elapsed_ms(&self) -> Option<u64> {
        self.last_elapsed_ms
    }

    /// Check if the worker is still available
    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the worker; later submissions fail immediately
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.shutdown() {
                error!("Request worker shutdown failed: {}", e);
            }
        }
    }
}

impl Drop for RequestController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
