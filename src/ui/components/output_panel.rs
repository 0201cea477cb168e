//! Output panel component
//!
//! Renders one of four views inside the output box:
//! - Loading skeleton while a request is in flight
//! - Error banner after a failure
//! - Revealed response text
//! - Typed placeholder when nothing else is shown

use crate::ui::components::skeleton::Skeleton;
use crate::ui::state::OutputView;
use crate::ui::theme::Theme;
use egui::{RichText, ScrollArea, Ui};

/// Accessibility label of the loading skeleton
pub const LOADING_LABEL: &str = "Loading response";

/// Minimum height of the output box
const MIN_HEIGHT: f32 = 160.0;

/// Output box for the current submission
pub struct OutputPanel<'a> {
    view: OutputView<'a>,
    theme: &'a Theme,
}

impl<'a> OutputPanel<'a> {
    pub fn new(view: OutputView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    pub fn show(&self, ui: &mut Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_output)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_min_height(MIN_HEIGHT);
                ui.set_min_width(ui.available_width());

                match self.view {
                    OutputView::Loading => {
                        let response = Skeleton::new(self.theme).show(ui);
                        response.widget_info(|| {
                            egui::WidgetInfo::labeled(egui::WidgetType::Label, true, LOADING_LABEL)
                        });
                    }
                    OutputView::Error(message) => self.show_error(ui, message),
                    OutputView::Output(text) => self.show_output(ui, text),
                    OutputView::Placeholder(line) => {
                        let response = ui.label(
                            RichText::new(line)
                                .color(self.theme.text_muted)
                                .italics(),
                        );
                        response.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Label,
                                true,
                                format!("Placeholder: {}", line),
                            )
                        });
                    }
                }
            });
    }

    fn show_error(&self, ui: &mut Ui, message: &str) {
        egui::Frame::none()
            .fill(self.theme.error.gamma_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, self.theme.error))
            .rounding(self.theme.button_rounding)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let response = ui.label(RichText::new(message).color(self.theme.error).strong());
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        format!("Error message: {}", message),
                    )
                });
            });
    }

    fn show_output(&self, ui: &mut Ui, text: &str) {
        ScrollArea::vertical()
            .id_salt("response_output")
            .auto_shrink([false, true])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let response = ui.label(RichText::new(text).color(self.theme.text_primary));
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        format!("Response output: {}", text),
                    )
                });
            });
    }
}
