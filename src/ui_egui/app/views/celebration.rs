use egui::{Color32, Pos2, RichText};

const CONFETTI_PIECES: usize = 50;
const CONFETTI_COLORS: [Color32; 6] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(0, 255, 255),
];
/// Seconds for one piece to fall the height of the screen.
const FALL_SECONDS: f64 = 3.0;

/// Cheap stable scatter so each piece keeps its column and delay between frames.
fn scatter(index: usize, salt: u64) -> f32 {
    let mut x = (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ salt;
    x ^= x >> 29;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 32;
    (x % 10_000) as f32 / 10_000.0
}

/// Full-screen greeting with falling confetti, drawn above everything else.
pub(super) fn render_overlay(ctx: &egui::Context, subject_name: &str) {
    let screen = ctx.screen_rect();
    let time = ctx.input(|i| i.time);

    egui::Area::new(egui::Id::new("celebration_overlay"))
        .fixed_pos(screen.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());
            let painter = ui.painter();
            painter.rect_filled(screen, 0.0, Color32::BLACK);

            for i in 0..CONFETTI_PIECES {
                let x = screen.left() + scatter(i, 1) * screen.width();
                let delay = scatter(i, 2) as f64 * FALL_SECONDS;
                let progress = ((time + delay) % FALL_SECONDS / FALL_SECONDS) as f32;
                let y = screen.top() - 10.0 + progress * (screen.height() + 20.0);
                let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
                painter.rect_filled(
                    egui::Rect::from_center_size(Pos2::new(x, y), egui::vec2(10.0, 10.0)),
                    2.0,
                    color,
                );
            }

            ui.allocate_ui_at_rect(screen, |ui| {
                let top_gap = (screen.height() - 260.0).max(0.0) / 2.0;
                ui.add_space(top_gap);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("🎉 С Днём рождения! 🎉")
                            .size(96.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.add_space(32.0);
                    ui.label(
                        RichText::new(subject_name)
                            .size(72.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                });
            });
        });

    ctx.request_repaint();
}
