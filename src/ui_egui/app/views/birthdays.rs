use egui::{Color32, RichText};

use super::{tab_button, CAPTION_COLOR, CAPTION_SIZE};
use crate::models::birthday::BirthdayEntry;
use crate::services::countdown::Countdown;
use crate::services::widget::WidgetIntent;
use crate::utils::date::format_entry_date;

const COUNTDOWN_DIGIT_SIZE: f32 = 96.0;

/// The birthday list. Returns true when the user asked to add one.
pub(super) fn render_list(
    ui: &mut egui::Ui,
    entries: &[BirthdayEntry],
    intents: &mut Vec<WidgetIntent>,
) -> bool {
    let mut wants_add = false;
    ui.add_space(64.0);

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Список дней рождений")
                .size(40.0)
                .color(Color32::WHITE),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            wants_add = tab_button(ui, "+ Добавить", true).clicked();
        });
    });
    ui.add_space(24.0);

    if entries.is_empty() {
        ui.add_space(64.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🎂").size(64.0).color(CAPTION_COLOR));
            ui.label(
                RichText::new("Нет добавленных дней рождений")
                    .size(20.0)
                    .color(CAPTION_COLOR),
            );
        });
        return wants_add;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in entries {
            render_row(ui, entry, intents);
            ui.add_space(12.0);
        }
    });

    wants_add
}

fn render_row(ui: &mut egui::Ui, entry: &BirthdayEntry, intents: &mut Vec<WidgetIntent>) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, Color32::WHITE))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let name = ui.add(
                        egui::Button::new(
                            RichText::new(&entry.name)
                                .size(26.0)
                                .strong()
                                .color(Color32::WHITE),
                        )
                        .frame(false),
                    );
                    if name.on_hover_text("Открыть отсчёт").clicked() {
                        intents.push(WidgetIntent::SelectBirthday(entry.id));
                    }
                    ui.label(RichText::new(format_entry_date(entry.date)).color(CAPTION_COLOR));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("🗑").size(20.0)).frame(false))
                        .on_hover_text("Удалить")
                        .clicked()
                    {
                        intents.push(WidgetIntent::DeleteBirthday(entry.id));
                    }
                });
            });
        });
}

/// Countdown screen for the selected birthday.
pub(super) fn render_countdown(
    ui: &mut egui::Ui,
    entry: &BirthdayEntry,
    countdown: Option<Countdown>,
    intents: &mut Vec<WidgetIntent>,
) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        if tab_button(ui, "✕", false).on_hover_text("Назад к списку").clicked() {
            intents.push(WidgetIntent::ClearSelection);
        }
    });

    let top_gap = (ui.available_height() - COUNTDOWN_DIGIT_SIZE - 260.0).max(0.0) / 2.0;
    ui.add_space(top_gap);

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("День рождения").size(48.0).color(Color32::WHITE));
        ui.add_space(8.0);
        ui.label(
            RichText::new(&entry.name)
                .size(56.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(48.0);

        let Some(countdown) = countdown else {
            return;
        };
        let padded = countdown.padded();
        let cells = [
            (padded.days, "дней"),
            (padded.hours, "часов"),
            (padded.minutes, "минут"),
            (padded.seconds, "секунд"),
        ];

        egui::Grid::new("countdown_grid")
            .spacing([48.0, 0.0])
            .show(ui, |ui| {
                for (value, _) in &cells {
                    ui.label(
                        RichText::new(value.as_str())
                            .monospace()
                            .strong()
                            .size(COUNTDOWN_DIGIT_SIZE)
                            .color(Color32::WHITE),
                    );
                }
                ui.end_row();
                for (_, caption) in &cells {
                    ui.label(RichText::new(*caption).size(CAPTION_SIZE).color(CAPTION_COLOR));
                }
                ui.end_row();
            });
    });
}
