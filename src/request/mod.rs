//! Prompt submission lifecycle
//!
//! - **state**: `SubmissionState` and the `PromptInput` buffer
//! - **worker**: Background thread running the service calls
//! - **controller**: UI-side owner of the state and the worker handle

pub mod controller;
pub mod state;
pub mod worker;

pub use controller::RequestController;
pub use state::{PromptInput, SubmissionState};
pub use worker::{RequestCommand, RequestEvent, RequestHandle, RequestWorker};
