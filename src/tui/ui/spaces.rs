//! Living spaces list screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the living spaces list
pub fn render_spaces(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.spaces_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Space list
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("Living Spaces")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Space list
        if screen.is_loading {
            let loading = Paragraph::new("Loading spaces...")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Your Spaces"));
            f.render_widget(loading, chunks[1]);
        } else if screen.spaces.is_empty() {
            let empty_msg = Paragraph::new("You are not part of any living space yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Your Spaces"));
            f.render_widget(empty_msg, chunks[1]);
        } else {
            let items: Vec<ListItem> = screen
                .spaces
                .iter()
                .enumerate()
                .map(|(i, space)| {
                    let marker = if i == screen.selected_index { "→ " } else { "  " };
                    let mut spans = vec![
                        Span::raw(marker),
                        Span::styled(
                            space.name.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" ({} members)", space.member_count),
                            Style::default().fg(Color::Green),
                        ),
                    ];
                    if let Some(role) = &space.role {
                        spans.push(Span::styled(
                            format!(" [{}]", role.label()),
                            Style::default().fg(Color::Yellow),
                        ));
                    }
                    if !space.address.is_empty() {
                        spans.push(Span::styled(
                            format!(" - {}", space.address),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Your Spaces"));
            f.render_widget(list, chunks[1]);
        }

        // Status message
        let (status_text, status_style) = match &screen.status_message {
            Some(msg) => {
                let style = if screen.is_error {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Green)
                };
                (msg.as_str(), style)
            }
            None => ("", Style::default()),
        };
        let status_widget = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[2]);

        // Help text
        let help_text = "↑↓/j/k: Navigate | Enter: Open dashboard | b/Esc: Back | q: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
