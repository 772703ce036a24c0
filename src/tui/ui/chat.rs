//! Chat thread screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw one message thread and the composer
pub fn render_chat(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.chat_screen {
        let viewer_id = app.app_state.viewer_id().unwrap_or_default();
        let thread = app.app_state.messages.thread(&screen.match_id);

        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Message history
                Constraint::Length(3), // Input box
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new(format!("Chat with {}", screen.title))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Message history, pinned to the newest message unless scrolled back
        let visible_rows = chunks[1].height.saturating_sub(2) as usize;
        let total = thread.len();
        let end = total.saturating_sub(screen.scroll_offset);
        let start = end.saturating_sub(visible_rows);

        if thread.is_empty() {
            let empty_msg = Paragraph::new("No messages yet. Say hello!")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Messages"));
            f.render_widget(empty_msg, chunks[1]);
        } else {
            let items: Vec<ListItem> = thread[start..end]
                .iter()
                .map(|message| {
                    let is_own = message.sender_id == viewer_id;
                    let (author, author_style) = if is_own {
                        (
                            "You",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        (
                            screen.title.as_str(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    };

                    let line = Line::from(vec![
                        Span::styled(
                            format!("[{}] ", message.timestamp.format("%H:%M")),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(format!("{}: ", author), author_style),
                        Span::raw(message.content.clone()),
                    ]);
                    ListItem::new(line)
                })
                .collect();

            let history_title = if screen.scroll_offset > 0 {
                format!("Messages ({}/{})", end, total)
            } else {
                format!("Messages ({})", total)
            };
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(history_title));
            f.render_widget(list, chunks[1]);
        }

        // Input box
        let input_style = if screen.is_sending {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let input_title = if screen.is_sending {
            "Message (sending...)"
        } else {
            "Message"
        };
        let input = Paragraph::new(screen.input.as_str())
            .style(input_style)
            .block(Block::default().borders(Borders::ALL).title(input_title));
        f.render_widget(input, chunks[2]);

        // Status message
        let (status_text, status_style) = match &screen.status_message {
            Some(msg) => (msg.as_str(), Style::default().fg(Color::Red)),
            None => ("", Style::default()),
        };
        let status_widget = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[3]);

        // Help text
        let help_text = "Enter: Send | PgUp/PgDn: Scroll | Ctrl+V: Paste | Esc: Back to conversations";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[4]);
    }
}
