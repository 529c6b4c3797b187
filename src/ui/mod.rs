// src/ui/mod.rs
pub mod layout;
pub mod log_view;
pub mod modals;
pub mod status_bar;

use crate::app::{ActiveModal, App, ToastKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Create main layout: title on top, content below, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_title(f, main_chunks[0]);
    log_view::render_activity_log(f, app, main_chunks[1]);
    status_bar::render_status_bar(f, app, main_chunks[2]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        modals::render_modal(f, app);
    }

    // Toasts sit on top of everything, including modals
    render_toast_overlay(f, app, size);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Activity Log")
        .style(Style::new().bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

/// Renders the most recent unexpired toast in the top-right corner.
fn render_toast_overlay(f: &mut Frame, app: &App, size: Rect) {
    let Some(toast) = app.latest_toast() else {
        return;
    };

    let width = 44.min(size.width);
    let height = 4.min(size.height);
    if width < 10 || height < 3 {
        return;
    }
    let area = Rect::new(size.width - width, 0, width, height);

    let border_color = match toast.kind {
        ToastKind::Info => Color::Cyan,
        ToastKind::Success => Color::Green,
        ToastKind::Warning => Color::Yellow,
        ToastKind::Error => Color::Red,
    };

    let block = Block::default()
        .title(toast.title.as_str())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(toast.description.as_str())
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
