// src/app/state.rs
use ratatui::widgets::TableState;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::warn;

use crate::api::{Activity, ApiClient, ApiError, NewActivityPayload};
use crate::draft::ActivityDraft;

const TOAST_TTL: Duration = Duration::from_secs(5);

// Fields within the Add Activity modal, in focus-cycle order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddActivityField {
    Type,
    Duration,
    DurationUnit,
    Distance,
    DistanceUnit,
    Calories,
    Date,
    Confirm,
    Cancel,
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    AddActivity {
        draft: ActivityDraft,
        focused_field: AddActivityField,
        error_message: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient, non-blocking user-facing message.
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Completion events sent back from spawned API requests.
#[derive(Debug)]
pub enum ApiEvent {
    SubmitFinished(Result<(), ApiError>),
    ActivitiesLoaded(Result<Vec<Activity>, ApiError>),
}

/// Spawns API requests on the tokio runtime and reports their outcome over
/// the app's event channel. The UI thread never blocks on the network.
pub struct ApiDispatcher {
    handle: Handle,
    client: ApiClient,
    events: Sender<ApiEvent>,
}

impl ApiDispatcher {
    pub fn new(handle: Handle, client: ApiClient, events: Sender<ApiEvent>) -> Self {
        Self {
            handle,
            client,
            events,
        }
    }

    pub fn submit_activity(&self, payload: NewActivityPayload) {
        let client = self.client.clone();
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.create_activity(&payload).await;
            if events.send(ApiEvent::SubmitFinished(result)).is_err() {
                warn!("App event channel closed before submit outcome was delivered");
            }
        });
    }

    pub fn load_activities(&self) {
        let client = self.client.clone();
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = client.list_activities().await;
            if events.send(ApiEvent::ActivitiesLoaded(result)).is_err() {
                warn!("App event channel closed before activity list was delivered");
            }
        });
    }
}

// Holds the application state
pub struct App {
    pub dispatcher: ApiDispatcher,
    pub events: Receiver<ApiEvent>,
    pub should_quit: bool,
    pub active_modal: ActiveModal,

    // True while a create-activity request is in flight; blocks re-entrant
    // submission and is cleared once the request settles either way.
    pub submitting: bool,
    pub toasts: Vec<Toast>,

    // === Activity Log State ===
    pub activities: Vec<Activity>,
    pub activities_loading: bool,
    pub activity_table_state: TableState,
}

impl App {
    pub fn new(handle: Handle, client: ApiClient) -> Self {
        let (events_tx, events_rx) = channel();
        let mut app = App {
            dispatcher: ApiDispatcher::new(handle, client, events_tx),
            events: events_rx,
            should_quit: false,
            active_modal: ActiveModal::None,
            submitting: false,
            toasts: Vec::new(),
            activities: Vec::new(),
            activities_loading: false,
            activity_table_state: TableState::default(),
        };
        app.activity_table_state.select(Some(0));
        app
    }

    pub fn open_add_activity_modal(&mut self) {
        self.active_modal = ActiveModal::AddActivity {
            draft: ActivityDraft::new(),
            focused_field: AddActivityField::Type,
            error_message: None,
        };
    }

    /// Closes whatever modal is open. The draft, if any, is discarded.
    pub fn close_modal(&mut self) {
        self.active_modal = ActiveModal::None;
    }

    pub fn push_toast(&mut self, title: &str, description: &str, kind: ToastKind) {
        self.toasts.push(Toast {
            title: title.to_string(),
            description: description.to_string(),
            kind,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    pub fn latest_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub(crate) fn clear_expired_toasts(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    // --- Activity table navigation ---

    pub fn table_next(&mut self) {
        let max_index = self.activities.len().saturating_sub(1);
        let i = match self.activity_table_state.selected() {
            Some(i) => {
                if i >= max_index {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        if !self.activities.is_empty() {
            self.activity_table_state.select(Some(i));
        }
    }

    pub fn table_previous(&mut self) {
        let max_index = self.activities.len().saturating_sub(1);
        let i = match self.activity_table_state.selected() {
            Some(i) => {
                if i == 0 {
                    max_index
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        if !self.activities.is_empty() {
            self.activity_table_state.select(Some(i));
        }
    }
}
