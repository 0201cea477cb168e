//! UI components module
//!
//! Reusable widgets for the GenAI window.

pub mod output_panel;
pub mod prompt_bar;
pub mod skeleton;

pub use output_panel::{OutputPanel, LOADING_LABEL};
pub use prompt_bar::{PromptBar, PROMPT_INPUT_LABEL, SUBMIT_BUTTON_LABEL};
pub use skeleton::Skeleton;
