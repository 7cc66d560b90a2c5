mod add_dialog;
mod toast;
mod views;

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use self::add_dialog::AddBirthdayDialogState;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::celebration::CelebrationTransition;
use crate::services::clock::{SystemTimeSource, TimeSource};
use crate::services::notification::NotificationService;
use crate::services::ticker::{TickReceiver, TickWaker, Ticker};
use crate::services::widget::{WidgetEvent, WidgetIntent, WidgetState};

/// Desktop shell around [`WidgetState`]. Ticks arrive from the [`Ticker`]
/// channel and user intents from rendering; both are applied here on the UI
/// thread, one after the other.
pub struct BirthdayClockApp {
    widget: WidgetState,
    ticks: TickReceiver,
    ticker: Ticker,
    notification_service: NotificationService,
    toast_manager: ToastManager,
    add_dialog: AddBirthdayDialogState,
}

impl eframe::App for BirthdayClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_latest_tick();
        self.handle_shortcuts(ctx);

        let view = self.widget.view();
        let mut intents = Vec::new();

        self.render_main_panel(ctx, &view, &mut intents);
        self.render_category_tabs(ctx, &view, &mut intents);
        if let Some(intent) = self.add_dialog.render(ctx) {
            intents.push(intent);
        }
        Self::render_celebration(ctx, &view.celebration);

        for intent in intents {
            self.dispatch(intent);
        }
        self.toast_manager.render(ctx);

        // Backstop in case a tick wake-up is lost
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.ticker.stop();
        self.widget.teardown();
        log::info!("Birthday clock closed");
    }
}

impl BirthdayClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: &Handle, settings: &Settings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let repaint_ctx = cc.egui_ctx.clone();
        let waker: TickWaker = Box::new(move || repaint_ctx.request_repaint());
        let source: Arc<dyn TimeSource> = Arc::new(SystemTimeSource);
        let widget = WidgetState::new(source.now());
        let (ticker, ticks) =
            Ticker::start(runtime, source, settings.tick_interval(), Some(waker));

        Self {
            widget,
            ticks,
            ticker,
            notification_service: NotificationService::new(settings.desktop_notifications),
            toast_manager: ToastManager::new(),
            add_dialog: AddBirthdayDialogState::default(),
        }
    }

    /// Apply the newest tick, if one arrived since the last frame.
    fn apply_latest_tick(&mut self) {
        if let Some(event) = self.ticks.latest() {
            if let Some(transition) = self.widget.handle(event) {
                self.on_celebration(transition);
            }
        }
    }

    fn on_celebration(&mut self, transition: CelebrationTransition) {
        match transition {
            CelebrationTransition::Started { subject_name } => {
                if let Err(e) = self.notification_service.show_celebration(&subject_name) {
                    log::warn!("Desktop notification failed: {:#}", e);
                }
            }
            CelebrationTransition::Ended { .. } => {}
        }
    }

    fn dispatch(&mut self, intent: WidgetIntent) {
        let adding = matches!(intent, WidgetIntent::AddBirthday { .. });
        let before = self.widget.registry().len();

        self.widget.handle(WidgetEvent::Intent(intent));

        if adding && self.widget.registry().len() > before {
            self.add_dialog.close_and_reset();
        }
        for notice in self.widget.take_notices() {
            self.toast_manager.push(notice);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (toggle, leave) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F11),
                i.key_pressed(egui::Key::Escape),
            )
        });
        let fullscreen = Self::is_fullscreen(ctx);

        if toggle {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
        } else if leave && fullscreen && !self.add_dialog.is_open() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        }
    }

    fn is_fullscreen(ctx: &egui::Context) -> bool {
        ctx.input(|i| i.viewport().fullscreen.unwrap_or(false))
    }
}
