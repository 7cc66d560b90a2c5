// Integration tests for the widget: ticks and intents through WidgetState
mod fixtures;

use birthday_clock::models::birthday::ValidationError;
use birthday_clock::services::celebration::{CelebrationTransition, CELEBRATION_SECONDS};
use birthday_clock::services::countdown::Countdown;
use birthday_clock::services::notification::NoticeLevel;
use birthday_clock::services::widget::{ViewMode, WidgetEvent, WidgetIntent, WidgetState};
use chrono::Duration;
use fixtures::{dates, inputs, moscow};
use pretty_assertions::assert_eq;

fn intent(state: &mut WidgetState, intent: WidgetIntent) {
    state.handle(WidgetEvent::Intent(intent));
}

fn add(state: &mut WidgetState, (name, date_time): (&str, &str)) {
    intent(
        state,
        WidgetIntent::AddBirthday {
            name: name.to_string(),
            date_time: date_time.to_string(),
        },
    );
}

#[test]
fn test_midnight_celebration_scenario() {
    let mut state = WidgetState::new(moscow(2025, 5, 31, 23, 59, 50));
    add(&mut state, inputs::ANN);
    let id = state.registry().entries()[0].id;
    intent(&mut state, WidgetIntent::SelectBirthday(id));

    assert_eq!(state.handle(WidgetEvent::Tick(dates::eve_last_second())), None);
    assert!(!state.view().celebration.active);
    assert_eq!(
        state.view().countdown,
        Some(Countdown {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 1
        })
    );

    let transition = state.handle(WidgetEvent::Tick(dates::ann_birthday()));
    assert_eq!(
        transition,
        Some(CelebrationTransition::Started {
            subject_name: "Ann".to_string()
        })
    );
    let view = state.view();
    assert!(view.celebration.active);
    assert_eq!(view.celebration.subject_name, "Ann");
    assert!(view.countdown.unwrap().is_expired());

    for s in 1..CELEBRATION_SECONDS {
        state.handle(WidgetEvent::Tick(dates::ann_birthday() + Duration::seconds(s)));
        assert!(state.view().celebration.active, "active at +{s}s");
    }

    let transition = state.handle(WidgetEvent::Tick(moscow(2025, 6, 1, 0, 0, 10)));
    assert!(matches!(transition, Some(CelebrationTransition::Ended { .. })));
    assert!(!state.view().celebration.active);
}

#[test]
fn test_celebration_fires_once_per_midnight() {
    let mut state = WidgetState::new(dates::eve_last_second());
    let id = state.add_birthday("Ann", "2025-06-01T00:00").unwrap();
    state.apply_intent(WidgetIntent::SelectBirthday(id));

    let mut started = 0;
    for s in 0..30 {
        let tick = dates::eve_last_second() + Duration::seconds(s);
        if let Some(CelebrationTransition::Started { .. }) = state.on_tick(tick) {
            started += 1;
        }
    }
    assert_eq!(started, 1);
}

#[test]
fn test_skipped_midnight_tick_misses_the_day() {
    let mut state = WidgetState::new(dates::eve_last_second());
    let id = state.add_birthday("Ann", "2025-06-01T00:00").unwrap();
    state.apply_intent(WidgetIntent::SelectBirthday(id));

    state.on_tick(dates::eve_last_second());
    // Host slept through 00:00:00
    state.on_tick(dates::ann_birthday() + Duration::seconds(1));
    state.on_tick(dates::ann_birthday() + Duration::seconds(2));
    assert!(!state.view().celebration.active);
}

#[test]
fn test_celebration_ends_late_when_ticks_are_sparse() {
    let mut state = WidgetState::new(dates::eve_last_second());
    let id = state.add_birthday("Ann", "2025-06-01T00:00").unwrap();
    state.apply_intent(WidgetIntent::SelectBirthday(id));

    state.on_tick(dates::ann_birthday());
    state.on_tick(dates::ann_birthday() + Duration::seconds(9));
    assert!(state.view().celebration.active);
    // Next tick after the window closes ends it, even if it is late
    state.on_tick(dates::ann_birthday() + Duration::milliseconds(10_700));
    assert!(!state.view().celebration.active);
}

#[test]
fn test_no_selection_no_celebration() {
    let mut state = WidgetState::new(dates::eve_last_second());
    add(&mut state, inputs::ANN);
    assert_eq!(state.on_tick(dates::ann_birthday()), None);
}

#[test]
fn test_add_then_remove_selected() {
    let mut state = WidgetState::new(dates::leap_day_2024());
    let id = state.add_birthday(inputs::FAR_FUTURE.0, inputs::FAR_FUTURE.1).unwrap();
    state.apply_intent(WidgetIntent::SelectBirthday(id));
    state.apply_intent(WidgetIntent::DeleteBirthday(id));

    let view = state.view();
    assert!(view.registry.is_empty());
    assert_eq!(view.selection, None);
}

#[test]
fn test_invalid_adds_leave_registry_unchanged() {
    let mut state = WidgetState::new(dates::leap_day_2024());
    add(&mut state, inputs::ANN);
    let before = state.view().registry;

    assert_eq!(
        state.add_birthday("", "2030-01-01T00:00"),
        Err(ValidationError::MissingName)
    );
    assert_eq!(state.add_birthday("Bob", ""), Err(ValidationError::MissingDate));
    assert_eq!(state.view().registry, before);

    let levels: Vec<NoticeLevel> = state.take_notices().into_iter().map(|n| n.level).collect();
    assert_eq!(
        levels,
        vec![NoticeLevel::Success, NoticeLevel::Error, NoticeLevel::Error]
    );
}

#[test]
fn test_tabs_and_selection() {
    let mut state = WidgetState::new(dates::leap_day_2024());
    assert_eq!(state.view_mode(), ViewMode::Clock);

    intent(&mut state, WidgetIntent::ShowBirthdays);
    assert_eq!(state.view_mode(), ViewMode::Birthdays);

    let id = state.add_birthday("Ann", "2030-01-01T00:00").unwrap();
    intent(&mut state, WidgetIntent::SelectBirthday(id));
    intent(&mut state, WidgetIntent::ClearSelection);
    assert_eq!(state.view().selection, None);
    assert_eq!(state.view_mode(), ViewMode::Birthdays);

    intent(&mut state, WidgetIntent::SelectBirthday(id));
    intent(&mut state, WidgetIntent::ShowClock);
    assert_eq!(state.view().selection, None);
    assert_eq!(state.view().registry.len(), 1);
}

#[test]
fn test_countdown_clamps_after_birthday() {
    let mut state = WidgetState::new(dates::ann_birthday() + Duration::days(3));
    let id = state.add_birthday("Ann", "2025-06-01T00:00").unwrap();
    state.apply_intent(WidgetIntent::SelectBirthday(id));
    assert_eq!(state.countdown(), Some(Countdown::default()));
}
