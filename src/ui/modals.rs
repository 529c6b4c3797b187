// src/ui/modals.rs
use crate::{
    app::{ActiveModal, AddActivityField, App},
    draft::{parse_draft_date, ActivityDraft},
    ui::layout::{centered_rect, centered_rect_fixed},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::AddActivity { .. } => render_add_activity_modal(f, app),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Activity Log ---").style(Style::new().bold().underlined()),
        Line::from(" Q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" a: Add New Activity"),
        Line::from(" r: Refresh Activity List"),
        Line::from(""),
        Line::from("--- Add Activity Modal ---").style(Style::new().bold().underlined()),
        Line::from(" Tab / Enter: Next Field"),
        Line::from(" Shift+Tab: Previous Field"),
        Line::from(" ↑↓ / ←→ / Space: Change Type or Unit"),
        Line::from(" Enter (on OK): Submit"),
        Line::from(" Esc: Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn render_add_activity_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::AddActivity {
        draft,
        focused_field,
        error_message,
    } = &app.active_modal
    {
        let title = if app.submitting {
            "Add Activity (submitting...)"
        } else {
            "Add Activity"
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::new().yellow());

        // 7 field rows + spacer + buttons (+ error line), plus borders
        let height = 11 + u16::from(error_message.is_some());
        let area = centered_rect_fixed(52, height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });
        let mut constraints = vec![Constraint::Length(1); 9];
        if error_message.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let type_value = match draft.activity_type {
            Some(t) => format!("< {} >", t),
            None => "< select type >".to_string(),
        };
        render_field_row(
            f,
            chunks[0],
            "Type:",
            &type_value,
            *focused_field == AddActivityField::Type,
        );
        let duration_area = render_field_row(
            f,
            chunks[1],
            "Duration:",
            &draft.duration_input,
            *focused_field == AddActivityField::Duration,
        );
        render_field_row(
            f,
            chunks[2],
            "Duration Unit:",
            &format!("< {} >", draft.duration_unit),
            *focused_field == AddActivityField::DurationUnit,
        );
        let distance_area = render_field_row(
            f,
            chunks[3],
            "Distance (optional):",
            &draft.distance_input,
            *focused_field == AddActivityField::Distance,
        );
        render_field_row(
            f,
            chunks[4],
            "Distance Unit:",
            &format!("< {} >", draft.distance_unit),
            *focused_field == AddActivityField::DistanceUnit,
        );
        let calories_area = render_field_row(
            f,
            chunks[5],
            "Calories:",
            &draft.calories_input,
            *focused_field == AddActivityField::Calories,
        );
        let date_area = render_date_row(
            f,
            chunks[6],
            draft,
            *focused_field == AddActivityField::Date,
        );

        // chunks[7] is the spacer
        render_button_pair(f, chunks[8], focused_field);

        if let Some(err) = error_message {
            f.render_widget(
                Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red)),
                chunks[9],
            );
        }

        match focused_field {
            AddActivityField::Duration => {
                set_input_cursor(f, &draft.duration_input, duration_area)
            }
            AddActivityField::Distance => {
                set_input_cursor(f, &draft.distance_input, distance_area)
            }
            AddActivityField::Calories => {
                set_input_cursor(f, &draft.calories_input, calories_area)
            }
            AddActivityField::Date => set_input_cursor(f, &draft.date_input, date_area),
            _ => {}
        }
    }
}

/// Renders a "label: value" row. Returns the value area for cursor placement.
fn render_field_row(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) -> Rect {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(area);

    f.render_widget(Paragraph::new(label), row[0]);

    let value_style = if focused {
        Style::default().reversed()
    } else {
        Style::default()
    };
    f.render_widget(Paragraph::new(value).style(value_style), row[1]);
    row[1]
}

/// The date row shows the raw input plus a formatted preview when it parses.
fn render_date_row(f: &mut Frame, area: Rect, draft: &ActivityDraft, focused: bool) -> Rect {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(area);

    f.render_widget(Paragraph::new("Date (today / Y-m-d):"), row[0]);

    let input_style = if focused {
        Style::default().reversed()
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(draft.date_input.clone(), input_style)];
    if let Ok(date) = parse_draft_date(&draft.date_input) {
        spans.push(Span::styled(
            format!("  {}", date.format("%b %d, %Y")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), row[1]);
    row[1]
}

fn render_button_pair(f: &mut Frame, area: Rect, focused_field: &AddActivityField) {
    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let ok_button = Paragraph::new(" OK ").alignment(Alignment::Center).style(
        if *focused_field == AddActivityField::Confirm {
            Style::default().reversed()
        } else {
            Style::default()
        },
    );
    f.render_widget(ok_button, button_layout[0]);

    let cancel_button = Paragraph::new(" Cancel ")
        .alignment(Alignment::Center)
        .style(if *focused_field == AddActivityField::Cancel {
            Style::default().reversed()
        } else {
            Style::default()
        });
    f.render_widget(cancel_button, button_layout[1]);
}

fn set_input_cursor(f: &mut Frame, input: &str, area: Rect) {
    let cursor_x = (area.x + input.chars().count() as u16).min(area.right().saturating_sub(1));
    f.set_cursor(cursor_x, area.y);
}
