use activity_log::app::{ActiveModal, AddActivityField, App, ToastKind};
use activity_log::{ActivityType, ApiClient, DistanceUnit, DurationUnit};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;
use tokio::runtime::Runtime;

fn create_test_app() -> (App, Runtime) {
    let runtime = Runtime::new().expect("failed to build runtime");
    let client =
        ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("failed to build client");
    let app = App::new(runtime.handle().clone(), client);
    (app, runtime)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::from(code)).unwrap();
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_a_opens_modal_and_esc_closes_it() {
    let (mut app, _rt) = create_test_app();

    press(&mut app, KeyCode::Char('a'));
    assert!(matches!(app.active_modal, ActiveModal::AddActivity { .. }));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.active_modal, ActiveModal::None);
}

#[test]
fn test_typing_fills_the_focused_fields() {
    let (mut app, _rt) = create_test_app();
    press(&mut app, KeyCode::Char('a'));

    // Type field: cycle twice (Running -> Cycling)
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Tab);

    // Duration, then toggle the unit to hours
    type_str(&mut app, "1.5");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);

    // Distance, unit cycled to miles
    type_str(&mut app, "20");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);

    // Calories: non-digit input is ignored
    type_str(&mut app, "4x50");
    press(&mut app, KeyCode::Tab);

    match &app.active_modal {
        ActiveModal::AddActivity {
            draft,
            focused_field,
            ..
        } => {
            assert_eq!(draft.activity_type, Some(ActivityType::Cycling));
            assert_eq!(draft.duration_input, "1.5");
            assert_eq!(draft.duration_unit, DurationUnit::Hours);
            assert_eq!(draft.distance_input, "20");
            assert_eq!(draft.distance_unit, DistanceUnit::Mi);
            assert_eq!(draft.calories_input, "450");
            assert_eq!(*focused_field, AddActivityField::Date);
        }
        other => panic!("unexpected modal state: {:?}", other),
    }
}

#[test]
fn test_backtab_moves_focus_backwards() {
    let (mut app, _rt) = create_test_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::BackTab);

    match &app.active_modal {
        ActiveModal::AddActivity { focused_field, .. } => {
            assert_eq!(*focused_field, AddActivityField::Duration);
        }
        other => panic!("unexpected modal state: {:?}", other),
    }
}

#[test]
fn test_confirm_with_empty_draft_warns_and_stays_open() {
    let (mut app, _rt) = create_test_app();
    press(&mut app, KeyCode::Char('a'));

    // Walk focus to the OK button and press Enter
    for _ in 0..7 {
        press(&mut app, KeyCode::Tab);
    }
    match &app.active_modal {
        ActiveModal::AddActivity { focused_field, .. } => {
            assert_eq!(*focused_field, AddActivityField::Confirm);
        }
        other => panic!("unexpected modal state: {:?}", other),
    }
    press(&mut app, KeyCode::Enter);

    assert!(matches!(app.active_modal, ActiveModal::AddActivity { .. }));
    assert!(!app.submitting);
    assert_eq!(app.latest_toast().unwrap().kind, ToastKind::Warning);
}

#[test]
fn test_cancel_button_closes_without_submitting() {
    let (mut app, _rt) = create_test_app();
    press(&mut app, KeyCode::Char('a'));

    for _ in 0..8 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.active_modal, ActiveModal::None);
    assert!(!app.submitting);
    assert!(app.latest_toast().is_none());
}

#[test]
fn test_help_modal_toggles() {
    let (mut app, _rt) = create_test_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.active_modal, ActiveModal::Help);
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.active_modal, ActiveModal::None);
}
