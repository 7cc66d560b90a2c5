//! Midnight celebration trigger.
//!
//! Evaluated once per tick against the selected birthday. It fires only on
//! the tick that reads exactly 00:00:00 on the birthday's own date; a tick
//! that never lands on that second means no celebration that day. Once
//! fired, the celebration clears itself on the first tick at least
//! [`CELEBRATION_SECONDS`] later.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::birthday::BirthdayEntry;
use crate::utils::date::{is_midnight, is_same_day};

/// How long the celebration screen stays up.
pub const CELEBRATION_SECONDS: i64 = 10;

/// What the shell renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CelebrationState {
    pub active: bool,
    pub subject_name: String,
}

/// The pending automatic return to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledClear {
    pub fires_at: DateTime<Utc>,
}

impl ScheduledClear {
    fn after(fired_at: DateTime<Utc>) -> Self {
        Self {
            fires_at: fired_at + Duration::seconds(CELEBRATION_SECONDS),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.fires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CelebrationPhase {
    #[default]
    Idle,
    Celebrating {
        subject_name: String,
        clear: ScheduledClear,
    },
}

/// State change produced by a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CelebrationTransition {
    Started { subject_name: String },
    Ended { subject_name: String },
}

#[derive(Debug, Default)]
pub struct CelebrationTrigger {
    phase: CelebrationPhase,
    last_subject: String,
}

impl CelebrationTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the machine for one tick.
    pub fn on_tick(
        &mut self,
        now: DateTime<Utc>,
        selected: Option<&BirthdayEntry>,
    ) -> Option<CelebrationTransition> {
        match &self.phase {
            CelebrationPhase::Celebrating { subject_name, clear } => {
                if !clear.is_due(now) {
                    return None;
                }
                let subject_name = subject_name.clone();
                log::info!("Celebration for {} finished", subject_name);
                self.phase = CelebrationPhase::Idle;
                Some(CelebrationTransition::Ended { subject_name })
            }
            CelebrationPhase::Idle => {
                let entry = selected?;
                if !Self::should_fire(now, entry.date) {
                    return None;
                }

                log::info!("Celebration started for {} ({})", entry.name, entry.id);
                self.last_subject = entry.name.clone();
                self.phase = CelebrationPhase::Celebrating {
                    subject_name: entry.name.clone(),
                    clear: ScheduledClear::after(now),
                };
                Some(CelebrationTransition::Started {
                    subject_name: entry.name.clone(),
                })
            }
        }
    }

    /// Tick reads 00:00:00 on the target's calendar date.
    pub fn should_fire(now: DateTime<Utc>, target: DateTime<Utc>) -> bool {
        is_same_day(now, target) && is_midnight(now)
    }

    pub fn phase(&self) -> &CelebrationPhase {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, CelebrationPhase::Celebrating { .. })
    }

    pub fn scheduled_clear(&self) -> Option<ScheduledClear> {
        match &self.phase {
            CelebrationPhase::Celebrating { clear, .. } => Some(*clear),
            CelebrationPhase::Idle => None,
        }
    }

    /// Snapshot for rendering. The subject name outlives the celebration so
    /// a fading overlay can still show it.
    pub fn state(&self) -> CelebrationState {
        CelebrationState {
            active: self.is_active(),
            subject_name: self.last_subject.clone(),
        }
    }

    /// Drop any pending clear. Only used when the widget is torn down.
    pub fn teardown(&mut self) {
        if let Some(clear) = self.scheduled_clear() {
            log::debug!("Dropping celebration clear scheduled for {}", clear.fires_at);
        }
        self.phase = CelebrationPhase::Idle;
    }
}
