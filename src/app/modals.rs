// src/app/modals.rs
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::state::{ActiveModal, AddActivityField, App, ToastKind};
use crate::api::NewActivityPayload;
use crate::draft::{ActivityType, REQUIRED_FIELDS_MESSAGE};

// --- Submission Logic ---

impl App {
    /// Gates a submission attempt and builds the payload for it.
    ///
    /// Returns `None` without side effects while a request is in flight, so
    /// a second confirm has no additional effect. A draft missing required
    /// fields produces a warning toast; a draft that fails to parse sets
    /// the modal's inline error. In both cases nothing is sent.
    pub fn request_submit(&mut self) -> Option<NewActivityPayload> {
        if self.submitting {
            return None;
        }
        let draft = match &self.active_modal {
            ActiveModal::AddActivity { draft, .. } => draft.clone(),
            _ => return None,
        };

        if !draft.can_submit() {
            self.push_toast(
                "Missing information",
                REQUIRED_FIELDS_MESSAGE,
                ToastKind::Warning,
            );
            return None;
        }

        match draft.build_payload() {
            Ok(payload) => {
                self.submitting = true;
                Some(payload)
            }
            Err(e) => {
                if let ActiveModal::AddActivity {
                    ref mut error_message,
                    ..
                } = self.active_modal
                {
                    *error_message = Some(e.to_string());
                }
                None
            }
        }
    }

    /// Validates the draft and hands the payload to the dispatcher.
    pub fn submit_add_activity(&mut self) {
        if let Some(payload) = self.request_submit() {
            self.dispatcher.submit_activity(payload);
        }
    }
}

// --- Input Handling ---

pub fn handle_add_activity_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    // Esc cancels from any field; in-flight requests keep running and
    // report their outcome as a toast.
    if key.code == KeyCode::Esc {
        app.close_modal();
        return Ok(());
    }

    let mut should_submit = false;
    let mut should_close = false;

    if let ActiveModal::AddActivity {
        ref mut draft,
        ref mut focused_field,
        ref mut error_message,
    } = app.active_modal
    {
        *error_message = None; // Clear error on most inputs

        match *focused_field {
            AddActivityField::Type => match key.code {
                KeyCode::Up | KeyCode::Left => {
                    draft.activity_type = Some(
                        draft
                            .activity_type
                            .map_or(ActivityType::Other, ActivityType::previous),
                    );
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
                    draft.activity_type = Some(
                        draft
                            .activity_type
                            .map_or(ActivityType::Running, ActivityType::next),
                    );
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::Duration;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::Cancel,
                _ => {}
            },
            AddActivityField::Duration => match key.code {
                KeyCode::Char(c) if "0123456789.".contains(c) => draft.duration_input.push(c),
                KeyCode::Backspace => {
                    draft.duration_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::DurationUnit;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::Type,
                _ => {}
            },
            AddActivityField::DurationUnit => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
                | KeyCode::Char(' ') => {
                    draft.duration_unit = draft.duration_unit.toggled();
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::Distance;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::Duration,
                _ => {}
            },
            AddActivityField::Distance => match key.code {
                KeyCode::Char(c) if "0123456789.".contains(c) => draft.distance_input.push(c),
                KeyCode::Backspace => {
                    draft.distance_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::DistanceUnit;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::DurationUnit,
                _ => {}
            },
            AddActivityField::DistanceUnit => match key.code {
                KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
                    draft.distance_unit = draft.distance_unit.next();
                }
                KeyCode::Up | KeyCode::Left => {
                    draft.distance_unit = draft.distance_unit.previous();
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::Calories;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::Distance,
                _ => {}
            },
            AddActivityField::Calories => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => draft.calories_input.push(c),
                KeyCode::Backspace => {
                    draft.calories_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::Date;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::DistanceUnit,
                _ => {}
            },
            AddActivityField::Date => match key.code {
                KeyCode::Char(c) => draft.date_input.push(c),
                KeyCode::Backspace => {
                    draft.date_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab => {
                    *focused_field = AddActivityField::Confirm;
                }
                KeyCode::BackTab => *focused_field = AddActivityField::Calories,
                _ => {}
            },
            AddActivityField::Confirm => match key.code {
                KeyCode::Enter => should_submit = true,
                KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
                    *focused_field = AddActivityField::Cancel;
                }
                KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
                    *focused_field = AddActivityField::Date;
                }
                _ => {}
            },
            AddActivityField::Cancel => match key.code {
                KeyCode::Enter => should_close = true,
                KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
                    *focused_field = AddActivityField::Type; // Wrap around
                }
                KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
                    *focused_field = AddActivityField::Confirm;
                }
                _ => {}
            },
        }
    } // End mutable borrow of app.active_modal

    if should_close {
        app.close_modal();
        return Ok(());
    }

    if should_submit {
        app.submit_add_activity();
    }

    Ok(())
}
