//! Registration screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the account creation form
pub fn render_register(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.register_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Email field
                Constraint::Length(3), // Username field
                Constraint::Length(3), // Password field
                Constraint::Length(3), // Confirm field
                Constraint::Length(3), // Role selector
                Constraint::Length(3), // Status message
                Constraint::Min(0),    // Spacer
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("PairPad - Create Account")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Text fields
        let masked_password = "•".repeat(screen.password.chars().count());
        let masked_confirm = "•".repeat(screen.password_confirm.chars().count());
        let fields: [(&str, String); 4] = [
            ("Email", screen.email.clone()),
            ("Username", screen.username.clone()),
            ("Password", masked_password),
            ("Confirm Password", masked_confirm),
        ];

        for (i, (label, value)) in fields.iter().enumerate() {
            let style = if screen.focused_field == i {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let field = Paragraph::new(value.as_str()).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(*label),
            );
            f.render_widget(field, chunks[i + 1]);
        }

        // Role selector
        let role_style = if screen.focused_field == 4 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let role_line = Line::from(vec![
            Span::styled("< ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                screen.selected_role().label(),
                role_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" >", Style::default().fg(Color::DarkGray)),
        ]);
        let role_field = Paragraph::new(role_line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(role_style)
                .title("I am a"),
        );
        f.render_widget(role_field, chunks[5]);

        // Status message
        let status_color = if screen.is_error {
            Color::Red
        } else if screen.is_submitting {
            Color::Cyan
        } else {
            Color::Green
        };
        let status_text = screen
            .status_message
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or("");
        let status_widget = Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[6]);

        // Help text
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Next field", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Space: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Cycle role", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Create account", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Back to login", Style::default().fg(Color::Red)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[8]);
    }
}
