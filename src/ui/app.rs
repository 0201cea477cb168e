//! Main GenAI application struct and eframe integration
//!
//! This module contains the GenAiApp that implements eframe::App.

use crate::config::AppConfig;
use crate::llm::GeminiClient;
use crate::request::RequestController;
use crate::ui::components::{OutputPanel, PromptBar};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::Result;
use egui::{CentralPanel, RichText, TopBottomPanel};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Link shown in the header
pub const REPOSITORY_URL: &str = "https://github.com/jliyon23/GenAI-Gemini";

/// Main GenAI application
pub struct GenAiApp {
    /// Application state
    state: AppState,
    /// UI theme
    theme: Theme,
}

impl GenAiApp {
    /// Create the application and start the request worker
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        let client = GeminiClient::new(config.service.clone())?;
        let controller = RequestController::start(Arc::new(client))?;

        info!("GenAI UI initialized (model {})", config.service.model);

        Ok(Self::from_parts(AppState::new(controller, &config), theme))
    }

    /// Assemble the application from an existing state
    pub fn from_parts(state: AppState, theme: Theme) -> Self {
        Self { state, theme }
    }

    /// Application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one frame: advance the state, draw, and schedule the next frame
    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.state.poll(now);

        self.show_header(ctx);

        CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(self.theme.spacing_lg);
                    self.show_welcome(ui);
                    ui.add_space(self.theme.spacing_lg);

                    let submitted =
                        PromptBar::new(self.state.controller.input_mut().buffer_mut(), &self.theme)
                            .show(ui);
                    if submitted {
                        self.state.submit();
                    }

                    ui.add_space(self.theme.spacing_lg);

                    OutputPanel::new(self.state.output_view(), &self.theme).show(ui);
                });
        });

        if let Some(delay) = self.state.next_repaint(now) {
            ctx.request_repaint_after(delay);
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_header)
                    .inner_margin(egui::Margin::symmetric(self.theme.spacing_lg, self.theme.spacing)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(
                        RichText::new("Gen")
                            .size(28.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new("AI")
                            .size(28.0)
                            .strong()
                            .color(self.theme.accent),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.hyperlink_to("GitHub", REPOSITORY_URL);
                    });
                });
            });
    }

    fn show_welcome(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Welcome to GenAI")
                    .heading()
                    .color(self.theme.text_primary),
            );

            ui.add_space(self.theme.spacing_sm);

            ui.label(
                RichText::new("A simple gen AI that can help you with your daily tasks.")
                    .color(self.theme.text_muted),
            );
        });
    }
}

impl eframe::App for GenAiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down GenAI");
        self.state.controller.shutdown();
    }
}
