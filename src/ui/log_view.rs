// src/ui/log_view.rs
use crate::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Renders the table of recent activities fetched from the server.
pub fn render_activity_log(f: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.activities_loading {
        "Recent Activities (loading...)"
    } else {
        "Recent Activities"
    };

    let header = Row::new(vec!["Date", "Type", "Duration", "Distance", "Calories"])
        .style(Style::new().bold())
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .activities
        .iter()
        .map(|activity| {
            Row::new(vec![
                Cell::from(activity.date.format("%b %d, %Y").to_string()),
                Cell::from(activity.activity_type.clone()),
                Cell::from(activity.duration.clone()),
                Cell::from(activity.distance.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(activity.calories.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.activity_table_state);
}
