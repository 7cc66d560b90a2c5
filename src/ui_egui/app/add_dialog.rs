use egui::{Color32, RichText};

use crate::services::widget::WidgetIntent;

/// Form for a new birthday. Stays open until an add succeeds or the user
/// closes it, so a rejected entry can be corrected in place.
#[derive(Debug, Default)]
pub struct AddBirthdayDialogState {
    open: bool,
    name: String,
    date_time: String,
}

impl AddBirthdayDialogState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close_and_reset(&mut self) {
        *self = Self::default();
    }

    /// Draw the dialog. Returns the add intent when the user saves.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<WidgetIntent> {
        if !self.open {
            return None;
        }

        let mut open = self.open;
        let mut submitted = false;

        egui::Window::new(RichText::new("Новый день рождения").color(Color32::WHITE))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                ui.label("Имя");
                ui.add(
                    egui::TextEdit::singleline(&mut self.name)
                        .hint_text("Введите имя")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label("Дата");
                let date_response = ui.add(
                    egui::TextEdit::singleline(&mut self.date_time)
                        .hint_text("ГГГГ-ММ-ДДTЧЧ:ММ")
                        .desired_width(f32::INFINITY),
                );
                let pressed_enter = date_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(12.0);

                let save = ui.add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(RichText::new("Сохранить").color(Color32::BLACK))
                        .fill(Color32::WHITE),
                );
                submitted = save.clicked() || pressed_enter;
            });

        self.open = open;
        if submitted && self.open {
            Some(WidgetIntent::AddBirthday {
                name: self.name.clone(),
                date_time: self.date_time.clone(),
            })
        } else {
            None
        }
    }
}
