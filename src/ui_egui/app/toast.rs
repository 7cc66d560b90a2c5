//! Toast notifications for brief feedback messages.
//!
//! Toasts are non-blocking notices that appear in the corner and fade away.
//! They carry the advisory notices the widget state queues, such as
//! "birthday added" or "fill in all fields".

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

use crate::services::notification::{Notice, NoticeLevel};

impl NoticeLevel {
    /// Get the icon for this toast level
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✓",
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Error => "✗",
        }
    }

    /// Background on the black widget canvas
    pub fn background_color(&self) -> Color32 {
        match self {
            NoticeLevel::Success => Color32::from_rgb(30, 70, 40),
            NoticeLevel::Info => Color32::from_rgb(30, 50, 80),
            NoticeLevel::Error => Color32::from_rgb(80, 30, 30),
        }
    }

    pub fn text_color(&self) -> Color32 {
        match self {
            NoticeLevel::Success => Color32::from_rgb(100, 220, 120),
            NoticeLevel::Info => Color32::from_rgb(100, 180, 255),
            NoticeLevel::Error => Color32::from_rgb(255, 120, 120),
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    /// Check if this toast has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Get the opacity based on remaining time (for fade out)
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let fade_progress = (self.duration - elapsed).as_secs_f32() / 0.5;
            fade_progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager for toast notifications
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.toasts.push(Toast::new(notice));
    }

    /// Remove expired toasts
    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Render all active toasts
    pub fn render(&mut self, ctx: &Context) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        // Request repaint for the fade animation
        ctx.request_repaint();

        // Render toasts from bottom-right, stacking upward
        let screen_rect = ctx.screen_rect();
        let toast_width = 320.0;
        let toast_height = 56.0;
        let margin = 16.0;
        let spacing = 6.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(format!("toast_{}", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let level = toast.notice.level;
                    let bg = level.background_color();
                    let fg = level.text_color();

                    let bg_color = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let text_color = Color32::from_rgba_unmultiplied(
                        fg.r(),
                        fg.g(),
                        fg.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg_color)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text_color.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(level.icon()).color(text_color).strong());
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(&toast.notice.title)
                                            .color(text_color)
                                            .strong(),
                                    );
                                    ui.label(
                                        RichText::new(&toast.notice.description).color(text_color),
                                    );
                                });
                            });
                        });
                });
        }
    }
}
