//! Login screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the sign-in form
pub fn render_login(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.login_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Email field
                Constraint::Length(3), // Password field
                Constraint::Length(3), // Status message
                Constraint::Min(1),    // Spacer
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("PairPad - Sign In")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Email field
        let email_style = if screen.focused_field == 0 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let email_field = Paragraph::new(screen.email.as_str())
            .style(email_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(email_style)
                    .title("Email"),
            );
        f.render_widget(email_field, chunks[1]);

        // Password field (masked)
        let password_style = if screen.focused_field == 1 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let masked = "•".repeat(screen.password.chars().count());
        let password_field = Paragraph::new(masked).style(password_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(password_style)
                .title("Password"),
        );
        f.render_widget(password_field, chunks[2]);

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
        f.render_widget(status_widget, chunks[3]);

        // Help text
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Switch field", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Sign in", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+V: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Paste", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+R: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Register", Style::default().fg(Color::Yellow)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Quit", Style::default().fg(Color::Red)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[5]);
    }
}
