// src/app/data.rs
use tracing::error;

use super::state::{ActiveModal, ApiEvent, App, ToastKind};

impl App {
    /// Housekeeping run on every tick of the main loop before drawing.
    pub fn refresh(&mut self) {
        self.clear_expired_toasts();
        self.poll_api_events();
    }

    /// Requests the activity list from the server in the background.
    pub fn request_activity_refresh(&mut self) {
        if self.activities_loading {
            return;
        }
        self.activities_loading = true;
        self.dispatcher.load_activities();
    }

    fn poll_api_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_api_event(event);
        }
    }

    /// Applies a completed API request to the app state.
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::SubmitFinished(Ok(())) => {
                self.submitting = false;
                // Discard the draft so a reopened modal starts from defaults
                self.close_modal();
                self.push_toast(
                    "Activity added",
                    "Your activity has been recorded.",
                    ToastKind::Success,
                );
                self.on_activity_added();
            }
            ApiEvent::SubmitFinished(Err(e)) => {
                self.submitting = false;
                error!("Failed to add activity: {}", e);
                // Keep the modal and its field values so the user can retry
                self.push_toast("Failed to add activity", &e.to_string(), ToastKind::Error);
                if let ActiveModal::AddActivity {
                    ref mut error_message,
                    ..
                } = self.active_modal
                {
                    *error_message = Some("Submission failed. Press Enter to retry.".to_string());
                }
            }
            ApiEvent::ActivitiesLoaded(Ok(mut activities)) => {
                self.activities_loading = false;
                activities.sort_by(|a, b| b.date.cmp(&a.date));
                self.activities = activities;

                // Clamp selection index
                if self.activity_table_state.selected().unwrap_or(0) >= self.activities.len() {
                    self.activity_table_state.select(if self.activities.is_empty() {
                        None
                    } else {
                        Some(self.activities.len() - 1)
                    });
                }
            }
            ApiEvent::ActivitiesLoaded(Err(e)) => {
                self.activities_loading = false;
                error!("Failed to load activities: {}", e);
                self.push_toast("Failed to load activities", &e.to_string(), ToastKind::Error);
            }
        }
    }

    // Invoked once per successful submission
    fn on_activity_added(&mut self) {
        self.request_activity_refresh();
    }
}
