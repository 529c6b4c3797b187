// src/ui/status_bar.rs
use crate::app::{ActiveModal, App};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.active_modal {
        ActiveModal::None => {
            "[↑↓/jk] Nav | [a]dd Activity | [r]efresh | [?] Help | [Q]uit "
        }
        ActiveModal::Help => " [Esc/Enter/?] Close Help ",
        ActiveModal::AddActivity { .. } => {
            " [Esc] Cancel | [Enter] Confirm/Next | [Tab/BackTab] Navigate | [↑↓] Change Selection "
        }
    };

    let in_flight_text = if app.submitting { "Submitting... " } else { "" };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let in_flight_paragraph = Paragraph::new(in_flight_text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::Yellow))
        .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(in_flight_paragraph, status_chunks[1]);
}
