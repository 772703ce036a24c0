//! Roommate suggestions screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the candidate list beside the selected profile
pub fn render_suggestions(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.suggestions_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Body
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("Find Roommates")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Body: candidate list on the left, selected candidate on the right
        if screen.is_loading {
            let loading = Paragraph::new("Loading suggestions...")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Suggestions"));
            f.render_widget(loading, chunks[1]);
        } else if screen.suggestions.is_empty() {
            let empty_msg = Paragraph::new(
                "No suggestions right now. Check back after more people finish the assessment.",
            )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Suggestions"));
            f.render_widget(empty_msg, chunks[1]);
        } else {
            let body_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);

            let items: Vec<ListItem> = screen
                .suggestions
                .iter()
                .enumerate()
                .map(|(i, suggestion)| {
                    let marker = if i == screen.selected_index { "→ " } else { "  " };
                    let line = Line::from(vec![
                        Span::raw(marker),
                        Span::styled(
                            suggestion.user.display_name().to_string(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" ({:.0}% match)", suggestion.compatibility_score),
                            Style::default().fg(Color::Green),
                        ),
                    ]);
                    ListItem::new(line)
                })
                .collect();

            let list_title = format!("Candidates ({})", screen.suggestions.len());
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(list_title));
            f.render_widget(list, body_chunks[0]);

            // Detail panel for the selected candidate
            let mut detail_lines: Vec<Line> = Vec::new();
            if let Some(suggestion) = screen.selected() {
                let user = &suggestion.user;
                detail_lines.push(Line::from(vec![
                    Span::styled(
                        user.display_name().to_string(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {:.0}% compatible", suggestion.compatibility_score),
                        Style::default().fg(Color::Green),
                    ),
                ]));
                detail_lines.push(Line::from(Span::styled(
                    user.role.label().to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
                if let Some(occupation) = &user.occupation {
                    detail_lines.push(Line::from(format!("Occupation: {}", occupation)));
                }
                if let Some(city) = &user.preferred_city {
                    detail_lines.push(Line::from(format!("Looking in: {}", city)));
                }
                if let (Some(min), Some(max)) = (user.budget_min, user.budget_max) {
                    detail_lines.push(Line::from(format!("Budget: {:.0}-{:.0}/month", min, max)));
                }
                if let Some(bio) = &user.bio {
                    detail_lines.push(Line::from(""));
                    detail_lines.push(Line::from(bio.clone()));
                }
            }

            let detail = Paragraph::new(detail_lines)
                .wrap(ratatui::widgets::Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Profile"));
            f.render_widget(detail, body_chunks[1]);
        }

        // Status message
        let (status_text, status_style) = if screen.is_interacting {
            (
                "Sending...".to_string(),
                Style::default().fg(Color::Yellow),
            )
        } else {
            match &screen.status_message {
                Some(msg) => {
                    let style = if screen.is_error {
                        Style::default().fg(Color::Red)
                    } else {
                        Style::default().fg(Color::Green)
                    };
                    (msg.clone(), style)
                }
                None => (String::new(), Style::default()),
            }
        };
        let status_widget = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[2]);

        // Help text
        let help_text = "↑↓/j/k: Navigate | a: Accept | x: Pass | b/Esc: Back | q: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
