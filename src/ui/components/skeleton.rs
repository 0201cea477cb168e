//! Loading skeleton
//!
//! Pulsing placeholder bars shown while a request is in flight.

use crate::ui::theme::Theme;
use egui::{Sense, Ui, Vec2};

/// Heights of the skeleton bars, top to bottom
const BAR_HEIGHTS: [f32; 5] = [20.0, 40.0, 128.0, 128.0, 128.0];

/// Corner radius of each bar
const BAR_ROUNDING: f32 = 6.0;

/// Pulsing loading bars
pub struct Skeleton<'a> {
    theme: &'a Theme,
}

impl<'a> Skeleton<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Opacity of the bars at time `t` (seconds)
    pub fn pulse(t: f64) -> f32 {
        (((t * 2.0).sin() * 0.5 + 0.5) * 0.6 + 0.4) as f32
    }

    pub fn show(&self, ui: &mut Ui) -> egui::Response {
        let t = ui.ctx().input(|i| i.time);
        let color = self.theme.skeleton.gamma_multiply(Self::pulse(t));
        let width = ui.available_width();

        let response = ui
            .vertical(|ui| {
                ui.spacing_mut().item_spacing.y = self.theme.spacing;
                for height in BAR_HEIGHTS {
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
                    ui.painter().rect_filled(rect, BAR_ROUNDING, color);
                }
            })
            .response;

        ui.ctx().request_repaint();
        response
    }
}
