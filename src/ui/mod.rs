//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for GenAI.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::{GenAiApp, REPOSITORY_URL};
pub use components::{OutputPanel, PromptBar, Skeleton};
pub use state::{AppState, OutputView};
pub use theme::Theme;
