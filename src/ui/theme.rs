//! Theme and styling for the GenAI UI
//!
//! This module provides colors, fonts, and visual styling for the application.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent color (title highlight, focus, links)
    pub accent: Color32,
    /// Error banner color
    pub error: Color32,

    /// Background colors
    pub bg_header: Color32,
    pub bg_primary: Color32,
    pub bg_output: Color32,
    pub bg_input: Color32,
    pub bg_button: Color32,

    /// Loading skeleton bar color
    pub skeleton: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_on_input: Color32,
    pub text_muted: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for the input and output boxes
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the dark slate theme
    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(34, 211, 238), // Cyan
            error: Color32::from_rgb(239, 68, 68),   // Red

            bg_header: Color32::from_rgb(15, 23, 42),    // Slate 900
            bg_primary: Color32::from_rgb(30, 41, 59),   // Slate 800
            bg_output: Color32::from_rgb(17, 24, 39),    // Gray 900
            bg_input: Color32::from_rgb(203, 213, 225),  // Slate 300
            bg_button: Color32::from_rgb(75, 85, 99),    // Gray 600

            skeleton: Color32::from_rgb(209, 213, 219), // Gray 300

            text_primary: Color32::WHITE,
            text_on_input: Color32::from_rgb(15, 23, 42),
            text_muted: Color32::from_rgb(148, 163, 184),

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        // Panel backgrounds
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_primary;
        visuals.extreme_bg_color = self.bg_input;

        // Widget colors
        visuals.widgets.inactive.bg_fill = self.bg_button;
        visuals.widgets.inactive.weak_bg_fill = self.bg_button;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.bg_button.gamma_multiply(1.2);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent.gamma_multiply(0.6);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Text selection
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.hyperlink_color = self.accent;
        visuals.window_rounding = self.card_rounding;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(32.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
