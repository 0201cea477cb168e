//! Prompt bar component
//!
//! Multiline prompt input with a submit button. Submission is never
//! blocked: an empty prompt or a request already in flight both submit.

use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

/// Accessibility label of the prompt input
pub const PROMPT_INPUT_LABEL: &str = "Prompt input";
/// Accessibility label of the submit button
pub const SUBMIT_BUTTON_LABEL: &str = "Submit prompt";

/// Visible height of the prompt input in text rows
const PROMPT_ROWS: usize = 3;

/// Prompt input plus submit button
pub struct PromptBar<'a> {
    buffer: &'a mut String,
    theme: &'a Theme,
}

impl<'a> PromptBar<'a> {
    pub fn new(buffer: &'a mut String, theme: &'a Theme) -> Self {
        Self { buffer, theme }
    }

    /// Show the bar. Returns true when the user submitted.
    pub fn show(mut self, ui: &mut egui::Ui) -> bool {
        let mut submitted = false;

        egui::Frame::none()
            .fill(self.theme.bg_input)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                let text_edit = egui::TextEdit::multiline(&mut *self.buffer)
                    .hint_text("Enter your prompt here...")
                    .desired_rows(PROMPT_ROWS)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Body)
                    .text_color(self.theme.text_on_input)
                    .frame(false)
                    .margin(egui::Margin::symmetric(12.0, 8.0))
                    .id(egui::Id::new("prompt_input"));

                let response = ui.add(text_edit);
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, PROMPT_INPUT_LABEL)
                });

                // Ctrl+Enter submits; plain Enter inserts a newline
                if response.has_focus()
                    && ui.input(|i| i.key_pressed(Key::Enter) && i.modifiers.command)
                {
                    submitted = true;
                }
            });

        ui.add_space(self.theme.spacing_sm);

        ui.horizontal(|ui| {
            let button = egui::Button::new(
                RichText::new("Submit").color(self.theme.text_primary),
            )
            .min_size(Vec2::new(96.0, 36.0))
            .rounding(self.theme.button_rounding)
            .fill(self.theme.bg_button);

            let response = ui.add(button);
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, SUBMIT_BUTTON_LABEL)
            });

            if response.clicked() {
                submitted = true;
            }

            response.on_hover_text("Send prompt (Ctrl+Enter)");
        });

        submitted
    }
}
