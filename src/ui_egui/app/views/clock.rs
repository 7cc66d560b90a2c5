use egui::{Color32, RichText};

use super::{CAPTION_COLOR, CAPTION_SIZE, MONO_DIGIT_SIZE};
use crate::services::clock::ClockReading;

/// Big hh : mm : ss face with captions under each group.
pub(super) fn render_clock(ui: &mut egui::Ui, reading: &ClockReading) {
    let top_gap = (ui.available_height() - MONO_DIGIT_SIZE - 140.0).max(0.0) / 2.0;
    ui.add_space(top_gap);

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Московское время")
                .size(36.0)
                .color(Color32::WHITE),
        );
        ui.add_space(24.0);

        // Blink the separators once per second
        let blink = ui.input(|i| i.time).fract() < 0.5;
        let separator_color = if blink { Color32::WHITE } else { Color32::from_gray(90) };

        let groups = [
            (&reading.hours, "часы"),
            (&reading.minutes, "минуты"),
            (&reading.seconds, "секунды"),
        ];

        let width = MONO_DIGIT_SIZE * 4.2;
        ui.allocate_ui(egui::vec2(width, MONO_DIGIT_SIZE + 60.0), |ui| {
            ui.horizontal(|ui| {
                for (idx, (digits, caption)) in groups.iter().enumerate() {
                    if idx > 0 {
                        ui.label(
                            RichText::new(":")
                                .monospace()
                                .size(MONO_DIGIT_SIZE)
                                .color(separator_color),
                        );
                    }
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(digits.as_str())
                                .monospace()
                                .strong()
                                .size(MONO_DIGIT_SIZE)
                                .color(Color32::WHITE),
                        );
                        ui.label(RichText::new(*caption).size(CAPTION_SIZE).color(CAPTION_COLOR));
                    });
                }
            });
        });
    });

    ui.ctx().request_repaint_after(std::time::Duration::from_millis(500));
}
