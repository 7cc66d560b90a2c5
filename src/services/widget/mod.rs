//! The widget's single owned state.
//!
//! Ticks and user intents are both applied through [`WidgetState::handle`],
//! one at a time, by whoever owns the state. Derived values (clock face,
//! countdown, celebration) are recomputed in full on every tick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::birthday::{BirthdayEntry, BirthdayId, ValidationError};
use crate::services::celebration::{CelebrationState, CelebrationTransition, CelebrationTrigger};
use crate::services::clock::{format_time, ClockReading};
use crate::services::countdown::{countdown, Countdown};
use crate::services::notification::Notice;
use crate::services::registry::BirthdayRegistry;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Clock,
    Birthdays,
}

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetIntent {
    AddBirthday { name: String, date_time: String },
    DeleteBirthday(BirthdayId),
    SelectBirthday(BirthdayId),
    ClearSelection,
    ShowClock,
    ShowBirthdays,
}

/// Everything that can change the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Tick(DateTime<Utc>),
    Intent(WidgetIntent),
}

/// Read model handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetView {
    pub formatted_time: ClockReading,
    pub registry: Vec<BirthdayEntry>,
    pub selection: Option<BirthdayEntry>,
    pub countdown: Option<Countdown>,
    pub celebration: CelebrationState,
    pub view_mode: ViewMode,
}

pub struct WidgetState {
    now: DateTime<Utc>,
    formatted_time: ClockReading,
    registry: BirthdayRegistry,
    celebration: CelebrationTrigger,
    view_mode: ViewMode,
    notices: Vec<Notice>,
}

impl WidgetState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            formatted_time: format_time(now),
            registry: BirthdayRegistry::new(),
            celebration: CelebrationTrigger::new(),
            view_mode: ViewMode::default(),
            notices: Vec::new(),
        }
    }

    /// Apply one event. Returns a celebration transition when a tick caused one.
    pub fn handle(&mut self, event: WidgetEvent) -> Option<CelebrationTransition> {
        match event {
            WidgetEvent::Tick(now) => self.on_tick(now),
            WidgetEvent::Intent(intent) => {
                self.apply_intent(intent);
                None
            }
        }
    }

    pub fn on_tick(&mut self, now: DateTime<Utc>) -> Option<CelebrationTransition> {
        self.now = now;
        self.formatted_time = format_time(now);
        self.celebration.on_tick(now, self.registry.selected())
    }

    pub fn apply_intent(&mut self, intent: WidgetIntent) {
        match intent {
            WidgetIntent::AddBirthday { name, date_time } => {
                // Outcome is reported through notices
                let _ = self.add_birthday(&name, &date_time);
            }
            WidgetIntent::DeleteBirthday(id) => {
                if let Some(name) = self.registry.get(id).map(|entry| entry.name.clone()) {
                    self.registry.remove(id);
                    self.notices.push(Notice::birthday_removed(&name));
                }
            }
            WidgetIntent::SelectBirthday(id) => {
                if self.registry.select(id) {
                    self.view_mode = ViewMode::Birthdays;
                }
            }
            WidgetIntent::ClearSelection => self.registry.clear_selection(),
            WidgetIntent::ShowClock => {
                self.view_mode = ViewMode::Clock;
                self.registry.clear_selection();
            }
            WidgetIntent::ShowBirthdays => self.view_mode = ViewMode::Birthdays,
        }
    }

    /// Add a birthday and queue the matching notice.
    pub fn add_birthday(
        &mut self,
        name: &str,
        date_time: &str,
    ) -> Result<BirthdayId, ValidationError> {
        match self.registry.add(name, date_time) {
            Ok(id) => {
                self.notices.push(Notice::birthday_added(name));
                Ok(id)
            }
            Err(err) => {
                log::warn!("Rejected birthday '{}' / '{}': {}", name, date_time, err);
                let notice = match &err {
                    ValidationError::InvalidDate(input) => Notice::invalid_date(input),
                    ValidationError::MissingName | ValidationError::MissingDate => {
                        Notice::missing_field()
                    }
                };
                self.notices.push(notice);
                Err(err)
            }
        }
    }

    /// Countdown to the selected birthday as of the last tick.
    pub fn countdown(&self) -> Option<Countdown> {
        self.registry
            .selected()
            .map(|entry| countdown(self.now, entry.date))
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            formatted_time: self.formatted_time.clone(),
            registry: self.registry.entries().to_vec(),
            selection: self.registry.selected().cloned(),
            countdown: self.countdown(),
            celebration: self.celebration.state(),
            view_mode: self.view_mode,
        }
    }

    /// Hand queued notices to the caller.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn formatted_time(&self) -> &ClockReading {
        &self.formatted_time
    }

    pub fn registry(&self) -> &BirthdayRegistry {
        &self.registry
    }

    pub fn celebration(&self) -> &CelebrationTrigger {
        &self.celebration
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Release anything scheduled. The state stays readable afterwards.
    pub fn teardown(&mut self) {
        self.celebration.teardown();
        self.notices.clear();
    }
}

impl Drop for WidgetState {
    fn drop(&mut self) {
        self.teardown();
    }
}
