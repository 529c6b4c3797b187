// src/app/input.rs
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::modals::handle_add_activity_modal_input;
use super::state::{ActiveModal, App};

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Char('a') => self.open_add_activity_modal(),
            KeyCode::Char('r') => self.request_activity_refresh(),
            KeyCode::Char('k') | KeyCode::Up => self.table_previous(),
            KeyCode::Char('j') | KeyCode::Down => self.table_next(),
            _ => {}
        }
        Ok(())
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => {
                self.handle_help_modal_input(key);
                Ok(())
            }
            ActiveModal::AddActivity { .. } => handle_add_activity_modal_input(self, key),
            ActiveModal::None => Ok(()),
        }
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }
}
