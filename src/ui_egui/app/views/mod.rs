use egui::{Color32, RichText};

use super::BirthdayClockApp;
use crate::services::celebration::CelebrationState;
use crate::services::widget::{ViewMode, WidgetIntent, WidgetView};

mod birthdays;
mod celebration;
mod clock;

const MONO_DIGIT_SIZE: f32 = 160.0;
const CAPTION_SIZE: f32 = 24.0;
const CAPTION_COLOR: Color32 = Color32::from_rgb(156, 163, 175);

/// Black/white toggle button used across the shell.
fn tab_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let (fill, text) = if active {
        (Color32::WHITE, Color32::BLACK)
    } else {
        (Color32::BLACK, Color32::WHITE)
    };
    ui.add(
        egui::Button::new(RichText::new(label).color(text).size(16.0))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, Color32::WHITE))
            .rounding(6.0),
    )
}

impl BirthdayClockApp {
    pub(super) fn render_main_panel(
        &mut self,
        ctx: &egui::Context,
        view: &WidgetView,
        intents: &mut Vec<WidgetIntent>,
    ) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK).inner_margin(32.0))
            .show(ctx, |ui| match view.view_mode {
                ViewMode::Clock => clock::render_clock(ui, &view.formatted_time),
                ViewMode::Birthdays => match &view.selection {
                    Some(entry) => birthdays::render_countdown(ui, entry, view.countdown, intents),
                    None => {
                        if birthdays::render_list(ui, &view.registry, intents) {
                            self.add_dialog.open();
                        }
                    }
                },
            });
    }

    pub(super) fn render_celebration(ctx: &egui::Context, state: &CelebrationState) {
        if state.active {
            celebration::render_overlay(ctx, &state.subject_name);
        }
    }

    pub(super) fn render_category_tabs(
        &mut self,
        ctx: &egui::Context,
        view: &WidgetView,
        intents: &mut Vec<WidgetIntent>,
    ) {
        egui::Area::new(egui::Id::new("category_tabs"))
            .anchor(egui::Align2::LEFT_TOP, [24.0, 24.0])
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if tab_button(ui, "Основное", view.view_mode == ViewMode::Clock).clicked() {
                        intents.push(WidgetIntent::ShowClock);
                    }
                    if tab_button(ui, "Дни рождения", view.view_mode == ViewMode::Birthdays)
                        .clicked()
                    {
                        intents.push(WidgetIntent::ShowBirthdays);
                    }
                });
            });

        egui::Area::new(egui::Id::new("fullscreen_toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -24.0])
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                let fullscreen = Self::is_fullscreen(ctx);
                let label = if fullscreen { "🗗" } else { "⛶" };
                if tab_button(ui, label, false)
                    .on_hover_text("Полный экран (F11)")
                    .clicked()
                {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
            });
    }
}
