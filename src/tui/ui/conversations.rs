//! Conversations list screen rendering

use crate::store::build_conversations;
use crate::tui::app::App;
use crate::tui::ui::helpers::{format_relative_time, preview_text};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the conversation list derived from the stores
pub fn render_conversations(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.conversations_screen {
        let viewer_id = app.app_state.viewer_id().unwrap_or_default();
        let conversations = build_conversations(
            app.app_state.matches.all(),
            &app.app_state.messages,
            &viewer_id,
        );

        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Conversation list
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title_text = if screen.is_refreshing {
            format!("Messages ({} conversations, refreshing...)", conversations.len())
        } else {
            format!("Messages ({} conversations)", conversations.len())
        };
        let title = Paragraph::new(title_text)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Conversation list
        if conversations.is_empty() {
            let empty_msg =
                Paragraph::new("No conversations yet. Accept a suggestion to get matched!")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).title("Conversations"));
            f.render_widget(empty_msg, chunks[1]);
        } else {
            let items: Vec<ListItem> = conversations
                .iter()
                .enumerate()
                .map(|(i, conversation)| {
                    let name = conversation.match_info.other_user.display_name();
                    let has_unread = conversation.unread_count > 0;

                    let (indicator, name_style) = if has_unread {
                        (
                            "● ",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        ("○ ", Style::default().fg(Color::White))
                    };

                    let preview = match conversation.last_message {
                        Some(message) => preview_text(&message.content, 40),
                        None => "No messages yet".to_string(),
                    };

                    let mut spans = vec![
                        Span::raw(if i == screen.selected_index { "→ " } else { "  " }),
                        Span::styled(indicator, name_style),
                        Span::styled(format!("{} ", name), name_style),
                    ];
                    if has_unread {
                        spans.push(Span::styled(
                            format!("[{}] ", conversation.unread_count),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ));
                    }
                    spans.push(Span::styled(
                        format!("- {} ", preview),
                        Style::default().fg(Color::DarkGray),
                    ));
                    spans.push(Span::styled(
                        format!("({})", format_relative_time(conversation.last_activity)),
                        Style::default().fg(Color::DarkGray),
                    ));

                    ListItem::new(Line::from(spans))
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Conversations (● Unread | ○ Read)")
                    .style(Style::default()),
            );
            f.render_widget(list, chunks[1]);
        }

        // Status message
        let status_text = screen
            .status_message
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or("");
        let status_widget = Paragraph::new(status_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[2]);

        // Help text
        let help_text = "↑↓/j/k: Navigate | Enter: Open | r: Refresh | b/Esc: Back | q: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
