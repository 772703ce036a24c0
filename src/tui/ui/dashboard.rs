//! Dashboard screen rendering

use crate::store::total_unread;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the main menu and the signed-in identity bar
pub fn render_dashboard(f: &mut Frame, app: &App) {
    let size = f.size();

    // Create layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Identity bar
            Constraint::Min(10),   // Menu
            Constraint::Length(3), // Help text
        ])
        .split(size);

    // Title
    let title = Paragraph::new("PairPad - Find Your Roommate")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Identity bar with the unread message badge
    let identity_line = match &app.app_state.session {
        Some(session) => {
            let unread = total_unread(
                app.app_state.matches.all(),
                &app.app_state.messages,
                &session.viewer_id(),
            );
            let unread_text = if unread > 0 {
                format!(" | {} unread", unread)
            } else {
                String::new()
            };
            Line::from(vec![
                Span::styled("Signed in as ", Style::default().fg(Color::Green)),
                Span::styled(
                    session.user.display_name().to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", session.user.email),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    unread_text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Not signed in",
            Style::default().fg(Color::Red),
        )),
    };
    let identity_widget = Paragraph::new(identity_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Account"));
    f.render_widget(identity_widget, chunks[1]);

    // Menu items
    let menu_items: Vec<ListItem> = app
        .menu_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let content = if i == app.selected_index {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        item.label(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(item.label(), Style::default().fg(Color::White)),
                ])
            };
            ListItem::new(content)
        })
        .collect();

    let menu = List::new(menu_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Dashboard")
            .style(Style::default()),
    );
    f.render_widget(menu, chunks[2]);

    // Help text
    let selected = app.selected_item();
    let help_text = vec![
        Line::from(selected.description()).style(Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Navigation: ", Style::default().fg(Color::DarkGray)),
            Span::styled("↑↓ or j/k", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Select: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Quit: ", Style::default().fg(Color::DarkGray)),
            Span::styled("q/Esc", Style::default().fg(Color::Red)),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
