//! Application state management
//!
//! This module ties the request controller to the reveal animations and
//! decides what the output region shows each frame.

use crate::config::AppConfig;
use crate::request::{RequestController, SubmissionState};
use crate::reveal::{CyclingTypewriter, RevealAnimator};
use std::time::{Duration, Instant};
use tracing::debug;

/// Repaint cadence while the loading skeleton pulses
const LOADING_REPAINT: Duration = Duration::from_millis(16);

/// What the output region renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputView<'a> {
    /// Request in flight
    Loading,
    /// Error banner with the typed part of the message
    Error(&'a str),
    /// Revealed response text
    Output(&'a str),
    /// Typed part of the placeholder line
    Placeholder(&'a str),
}

/// Central application state
pub struct AppState {
    /// Request lifecycle and prompt buffer
    pub controller: RequestController,

    /// Reveal of the latest successful response
    pub animator: Option<RevealAnimator>,

    /// Placeholder shown while nothing is displayed
    pub placeholder: CyclingTypewriter,

    /// Error banner typewriter for the current failure
    pub error_typewriter: Option<CyclingTypewriter>,

    reveal_interval: Duration,
    typing_delay: Duration,
}

impl AppState {
    /// Create a new application state
    pub fn new(controller: RequestController, config: &AppConfig) -> Self {
        Self {
            controller,
            animator: None,
            placeholder: CyclingTypewriter::new(
                config.placeholder_lines.iter().cloned(),
                config.typing_delay,
            ),
            error_typewriter: None,
            reveal_interval: config.reveal_interval,
            typing_delay: config.typing_delay,
        }
    }

    /// Submit the prompt input, discarding the previous reveal
    pub fn submit(&mut self) -> u64 {
        self.animator = None;
        self.error_typewriter = None;
        self.controller.submit_input()
    }

    /// Advance everything by one frame
    pub fn poll(&mut self, now: Instant) {
        self.controller.poll_events();
        self.sync_with_submission();

        if let Some(animator) = self.animator.as_mut() {
            animator.poll(now);
        }

        match self.controller.state() {
            SubmissionState::Loading => {}
            SubmissionState::Failed(_) => {
                if let Some(typewriter) = self.error_typewriter.as_mut() {
                    typewriter.poll(now);
                }
            }
            SubmissionState::Idle | SubmissionState::Succeeded(_) => {
                if self.displayed_output().is_empty() {
                    self.placeholder.poll(now);
                }
            }
        }
    }

    /// Build or drop animations to match the submission state
    fn sync_with_submission(&mut self) {
        let generation = self.controller.generation();

        match self.controller.state() {
            SubmissionState::Succeeded(text) => {
                let current = self.animator.as_ref().map(RevealAnimator::generation);
                if current != Some(generation) {
                    debug!("Starting reveal for prompt #{}", generation);
                    self.animator = Some(RevealAnimator::new(
                        text.clone(),
                        generation,
                        self.reveal_interval,
                    ));
                }
                self.error_typewriter = None;
            }
            SubmissionState::Failed(message) => {
                self.animator = None;
                if self.error_typewriter.is_none() {
                    self.error_typewriter =
                        Some(CyclingTypewriter::new([message.clone()], self.typing_delay));
                }
            }
            SubmissionState::Loading | SubmissionState::Idle => {
                self.animator = None;
                self.error_typewriter = None;
            }
        }
    }

    /// Text revealed for the latest submission
    pub fn displayed_output(&self) -> &str {
        match &self.animator {
            Some(animator) if animator.generation() == self.controller.generation() => {
                animator.displayed()
            }
            _ => "",
        }
    }

    /// What the output region should render
    pub fn output_view(&self) -> OutputView<'_> {
        match self.controller.state() {
            SubmissionState::Loading => OutputView::Loading,
            SubmissionState::Failed(_) => OutputView::Error(
                self.error_typewriter
                    .as_ref()
                    .map(CyclingTypewriter::visible)
                    .unwrap_or(""),
            ),
            SubmissionState::Idle | SubmissionState::Succeeded(_) => {
                let displayed = self.displayed_output();
                if displayed.is_empty() {
                    OutputView::Placeholder(self.placeholder.visible())
                } else {
                    OutputView::Output(displayed)
                }
            }
        }
    }

    /// Delay before the next frame is needed
    pub fn next_repaint(&self, now: Instant) -> Option<Duration> {
        match self.controller.state() {
            SubmissionState::Loading => Some(LOADING_REPAINT),
            SubmissionState::Failed(_) => self
                .error_typewriter
                .as_ref()
                .and_then(|typewriter| typewriter.time_until_next_step(now)),
            SubmissionState::Idle | SubmissionState::Succeeded(_) => {
                let reveal = self
                    .animator
                    .as_ref()
                    .and_then(|animator| animator.time_until_next_tick(now));
                if self.displayed_output().is_empty() {
                    let placeholder = self.placeholder.time_until_next_step(now);
                    match (reveal, placeholder) {
                        (Some(a), Some(b)) => Some(a.min(b)),
                        (a, b) => a.or(b),
                    }
                } else {
                    reveal
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestEvent;
    use crate::{GenAiError, FAILED_MESSAGE};

    const STEP: Duration = Duration::from_millis(50);

    fn app_state() -> AppState {
        AppState::new(RequestController::detached(), &AppConfig::default())
    }

    /// Bump the controller to `generation`; without a worker each dispatch fails
    fn submit_until(state: &mut AppState, generation: u64) {
        while state.controller.generation() < generation {
            state.submit();
        }
    }

    fn complete(state: &mut AppState, generation: u64, outcome: crate::Result<String>) {
        state.controller.apply_event(RequestEvent::Completed {
            generation,
            outcome,
            elapsed_ms: 1,
        });
    }

    #[test]
    fn test_idle_shows_placeholder() {
        let mut state = app_state();
        let now = Instant::now();
        state.poll(now);

        assert_eq!(state.output_view(), OutputView::Placeholder("Y"));
        assert!(state.next_repaint(now).is_some());
    }

    #[test]
    fn test_success_starts_reveal() {
        let mut state = app_state();
        submit_until(&mut state, 1);
        complete(&mut state, 1, Ok("Hello world".to_string()));
        assert_eq!(state.controller.state().text(), Some("Hello world"));

        let mut now = Instant::now();
        state.poll(now);
        assert_eq!(state.output_view(), OutputView::Output("Hello"));

        for _ in 0..5 {
            now += STEP;
            state.poll(now);
        }
        assert_eq!(state.output_view(), OutputView::Output("Hello world"));
        assert_eq!(state.next_repaint(now), None);
    }

    #[test]
    fn test_failure_shows_error_banner() {
        let mut state = app_state();
        submit_until(&mut state, 1);
        complete(
            &mut state,
            1,
            Err(GenAiError::MalformedResponse("No candidates".to_string())),
        );

        state.poll(Instant::now());
        assert_eq!(state.controller.state().error(), Some(FAILED_MESSAGE));
        assert_eq!(state.output_view(), OutputView::Error("F"));
    }

    #[test]
    fn test_new_submission_discards_reveal() {
        let mut state = app_state();
        submit_until(&mut state, 1);
        complete(&mut state, 1, Ok("first answer".to_string()));
        state.poll(Instant::now());
        assert!(state.animator.is_some());

        state.submit();
        assert!(state.animator.is_none());
        assert_eq!(state.displayed_output(), "");
    }

    #[test]
    fn test_stale_success_does_not_start_reveal() {
        let mut state = app_state();
        submit_until(&mut state, 2);
        complete(&mut state, 2, Ok("second".to_string()));
        complete(&mut state, 1, Ok("first".to_string()));

        state.poll(Instant::now());
        let animator = state.animator.as_ref().unwrap();
        assert_eq!(animator.generation(), 2);
        assert_eq!(animator.source(), "second");
    }

    #[test]
    fn test_empty_response_shows_placeholder() {
        let mut state = app_state();
        submit_until(&mut state, 1);
        complete(&mut state, 1, Ok(String::new()));

        state.poll(Instant::now());
        assert!(state.animator.as_ref().unwrap().is_complete());
        assert!(matches!(state.output_view(), OutputView::Placeholder(_)));
    }
}
