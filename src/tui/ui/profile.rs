//! Profile screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the session user's account details
pub fn render_profile(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.profile_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Profile details
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("Your Profile")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Profile details
        let mut lines: Vec<Line> = Vec::new();
        if let Some(session) = &app.app_state.session {
            let user = &session.user;
            lines.push(Line::from(vec![
                Span::styled(
                    user.display_name().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", user.role.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Email: {}", user.email)));
            lines.push(Line::from(format!("Username: {}", user.username)));
            if let Some(city) = &user.current_city {
                lines.push(Line::from(format!("Current city: {}", city)));
            }
            if let Some(city) = &user.preferred_city {
                lines.push(Line::from(format!("Preferred city: {}", city)));
            }
            if let (Some(min), Some(max)) = (user.budget_min, user.budget_max) {
                lines.push(Line::from(format!("Budget: {:.0}-{:.0}/month", min, max)));
            }
            if let Some(occupation) = &user.occupation {
                lines.push(Line::from(format!("Occupation: {}", occupation)));
            }
            if let Some(bio) = &user.bio {
                lines.push(Line::from(""));
                lines.push(Line::from(bio.clone()));
            }
            lines.push(Line::from(""));
            let (assessment_text, assessment_style) = if user.has_personality_profile() {
                (
                    "Personality assessment: completed",
                    Style::default().fg(Color::Green),
                )
            } else {
                (
                    "Personality assessment: not completed",
                    Style::default().fg(Color::Yellow),
                )
            };
            lines.push(Line::from(Span::styled(assessment_text, assessment_style)));
        } else {
            lines.push(Line::from(Span::styled(
                "Not signed in",
                Style::default().fg(Color::Red),
            )));
        }

        let details = Paragraph::new(lines)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Account"));
        f.render_widget(details, chunks[1]);

        // Status message
        let (status_text, status_style) = if screen.is_refreshing {
            (
                "Refreshing...".to_string(),
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
        let help_text = "r: Refresh from server | b/Esc: Back | q: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
