use activity_log::app::{ActiveModal, AddActivityField, ApiEvent, App, ToastKind};
use activity_log::{Activity, ActivityDraft, ActivityType, ApiClient, ApiError};
use chrono::{TimeZone, Utc};
use std::time::Duration;
use tokio::runtime::Runtime;

// Helper to build an app wired to an unreachable server; tests never pump
// the runtime, so no request outcome arrives unless injected by hand.
fn create_test_app() -> (App, Runtime) {
    let runtime = Runtime::new().expect("failed to build runtime");
    let client =
        ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("failed to build client");
    let app = App::new(runtime.handle().clone(), client);
    (app, runtime)
}

fn fill_draft(app: &mut App) {
    if let ActiveModal::AddActivity { ref mut draft, .. } = app.active_modal {
        draft.activity_type = Some(ActivityType::Running);
        draft.duration_input = "30".to_string();
        draft.calories_input = "300".to_string();
    } else {
        panic!("Add Activity modal is not open");
    }
}

fn sample_activity(id: i64, day: u32) -> Activity {
    Activity {
        id,
        activity_type: "Running".to_string(),
        duration: "30 minutes".to_string(),
        distance: Some("5 km".to_string()),
        calories: 300,
        date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_open_modal_starts_from_defaults() {
    let (mut app, _rt) = create_test_app();
    assert_eq!(app.active_modal, ActiveModal::None);

    app.open_add_activity_modal();
    match &app.active_modal {
        ActiveModal::AddActivity {
            draft,
            focused_field,
            error_message,
        } => {
            assert_eq!(*draft, ActivityDraft::new());
            assert_eq!(*focused_field, AddActivityField::Type);
            assert_eq!(*error_message, None);
        }
        other => panic!("unexpected modal state: {:?}", other),
    }
}

#[test]
fn test_submit_blocked_when_required_fields_missing() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();

    // Nothing filled in: blocked with a warning toast, nothing dispatched
    assert_eq!(app.request_submit(), None);
    assert!(!app.submitting);
    let toast = app.latest_toast().expect("expected a warning toast");
    assert_eq!(toast.kind, ToastKind::Warning);
    assert_eq!(toast.description, "Type, duration and calories are required.");

    // Still blocked with only some required fields
    if let ActiveModal::AddActivity { ref mut draft, .. } = app.active_modal {
        draft.activity_type = Some(ActivityType::Yoga);
        draft.duration_input = "45".to_string();
    }
    assert_eq!(app.request_submit(), None);
    assert!(!app.submitting);
}

#[test]
fn test_submit_builds_payload_and_sets_flag() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();
    fill_draft(&mut app);

    let payload = app.request_submit().expect("expected a payload");
    assert!(app.submitting);
    assert_eq!(payload.activity_type, "Running");
    assert_eq!(payload.duration, "30 minutes");
    assert_eq!(payload.distance, None);
    assert_eq!(payload.calories, 300);
}

#[test]
fn test_second_submit_while_in_flight_is_a_noop() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();
    fill_draft(&mut app);

    assert!(app.request_submit().is_some());
    // At most one request in flight
    assert_eq!(app.request_submit(), None);
    assert!(app.submitting);
}

#[test]
fn test_invalid_calories_sets_inline_error() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();
    fill_draft(&mut app);
    if let ActiveModal::AddActivity { ref mut draft, .. } = app.active_modal {
        draft.calories_input = "a lot".to_string();
    }

    assert_eq!(app.request_submit(), None);
    assert!(!app.submitting);
    assert!(app.latest_toast().is_none());
    match &app.active_modal {
        ActiveModal::AddActivity { error_message, .. } => {
            assert_eq!(
                error_message.as_deref(),
                Some("'a lot' is not a valid number")
            );
        }
        other => panic!("unexpected modal state: {:?}", other),
    }
}

#[test]
fn test_successful_submission_resets_and_closes() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();
    fill_draft(&mut app);
    assert!(app.request_submit().is_some());

    app.handle_api_event(ApiEvent::SubmitFinished(Ok(())));

    assert!(!app.submitting);
    assert_eq!(app.active_modal, ActiveModal::None);
    let toast = app.latest_toast().expect("expected a success toast");
    assert_eq!(toast.kind, ToastKind::Success);
    // The host callback fired: a refresh of the activity list is in flight
    assert!(app.activities_loading);

    // Reopening starts from defaults again
    app.open_add_activity_modal();
    match &app.active_modal {
        ActiveModal::AddActivity { draft, .. } => assert_eq!(*draft, ActivityDraft::new()),
        other => panic!("unexpected modal state: {:?}", other),
    }
}

#[test]
fn test_failed_submission_preserves_state() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();
    fill_draft(&mut app);
    assert!(app.request_submit().is_some());

    app.handle_api_event(ApiEvent::SubmitFinished(Err(ApiError::TimedOut)));

    // Flag cleared, dialog still open, field values untouched
    assert!(!app.submitting);
    match &app.active_modal {
        ActiveModal::AddActivity {
            draft,
            error_message,
            ..
        } => {
            assert_eq!(draft.activity_type, Some(ActivityType::Running));
            assert_eq!(draft.duration_input, "30");
            assert_eq!(draft.calories_input, "300");
            assert!(error_message.is_some());
        }
        other => panic!("unexpected modal state: {:?}", other),
    }
    let toast = app.latest_toast().expect("expected an error toast");
    assert_eq!(toast.kind, ToastKind::Error);

    // A retry is allowed once the request has settled
    assert!(app.request_submit().is_some());
}

#[test]
fn test_cancel_discards_draft() {
    let (mut app, _rt) = create_test_app();
    app.open_add_activity_modal();
    fill_draft(&mut app);

    app.close_modal();
    assert_eq!(app.active_modal, ActiveModal::None);
    assert!(!app.submitting);

    app.open_add_activity_modal();
    match &app.active_modal {
        ActiveModal::AddActivity { draft, .. } => assert_eq!(*draft, ActivityDraft::new()),
        other => panic!("unexpected modal state: {:?}", other),
    }
}

#[test]
fn test_activities_loaded_sorts_newest_first() {
    let (mut app, _rt) = create_test_app();
    app.activities_loading = true;

    app.handle_api_event(ApiEvent::ActivitiesLoaded(Ok(vec![
        sample_activity(1, 10),
        sample_activity(2, 20),
        sample_activity(3, 15),
    ])));

    assert!(!app.activities_loading);
    let ids: Vec<i64> = app.activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_activities_load_failure_keeps_old_list() {
    let (mut app, _rt) = create_test_app();
    app.activities = vec![sample_activity(1, 10)];
    app.activities_loading = true;

    app.handle_api_event(ApiEvent::ActivitiesLoaded(Err(ApiError::TimedOut)));

    assert!(!app.activities_loading);
    assert_eq!(app.activities.len(), 1);
    let toast = app.latest_toast().expect("expected an error toast");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn test_selection_clamped_after_refresh() {
    let (mut app, _rt) = create_test_app();
    app.activities = vec![
        sample_activity(1, 10),
        sample_activity(2, 11),
        sample_activity(3, 12),
    ];
    app.activity_table_state.select(Some(2));

    app.handle_api_event(ApiEvent::ActivitiesLoaded(Ok(vec![sample_activity(1, 10)])));
    assert_eq!(app.activity_table_state.selected(), Some(0));

    app.handle_api_event(ApiEvent::ActivitiesLoaded(Ok(vec![])));
    assert_eq!(app.activity_table_state.selected(), None);
}
