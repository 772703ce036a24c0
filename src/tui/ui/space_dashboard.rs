//! Space dashboard screen rendering

use crate::tui::app::App;
use crate::tui::ui::helpers::{format_relative_time, preview_text};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the notification panel, members, and household info
pub fn render_space_dashboard(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.space_dashboard_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Body
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title_text = if screen.is_loading {
            format!("{} (loading...)", screen.space_name)
        } else {
            screen.space_name.clone()
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

        // Body: notifications on the left, members and house info on the right
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_notifications(f, screen, body_chunks[0]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body_chunks[1]);

        render_members(f, screen, right_chunks[0]);
        render_house_info(f, screen, right_chunks[1]);

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
        let help_text = "↑↓/j/k: Navigate | d/Enter: Dismiss | r: Refresh | b/Esc: Back | q: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}

fn render_notifications(
    f: &mut Frame,
    screen: &crate::tui::screens::SpaceDashboardScreen,
    area: ratatui::layout::Rect,
) {
    let unread = screen.unread_notifications();
    let panel_title = format!("Notifications ({} unread)", unread.len());

    if unread.is_empty() {
        let text = if screen.is_loading {
            "Loading..."
        } else {
            "All caught up!"
        };
        let empty_msg = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(panel_title));
        f.render_widget(empty_msg, area);
        return;
    }

    let items: Vec<ListItem> = unread
        .iter()
        .enumerate()
        .map(|(i, notification)| {
            let marker = if i == screen.selected_notification {
                "→ "
            } else {
                "  "
            };
            let mut spans = vec![
                Span::raw(marker),
                Span::raw(format!("{} ", notification.icon())),
                Span::styled(
                    format!("{} ", notification.title),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("- {} ", preview_text(&notification.message, 36)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("({})", format_relative_time(notification.created_at)),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if screen.is_dismissing(notification.id) {
                spans.push(Span::styled(
                    " (dismissing...)",
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(panel_title));
    f.render_widget(list, area);
}

fn render_members(
    f: &mut Frame,
    screen: &crate::tui::screens::SpaceDashboardScreen,
    area: ratatui::layout::Rect,
) {
    let items: Vec<ListItem> = screen
        .members
        .iter()
        .map(|member| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", member.display_name()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("({})", member.role.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Members"));
    f.render_widget(list, area);
}

fn render_house_info(
    f: &mut Frame,
    screen: &crate::tui::screens::SpaceDashboardScreen,
    area: ratatui::layout::Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(dashboard) = &screen.dashboard {
        if !dashboard.tasks.is_empty() {
            lines.push(Line::from(Span::styled(
                "Tasks",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for task in &dashboard.tasks {
                let (mark, mark_style) = if task.is_completed() {
                    ("✓ ", Style::default().fg(Color::Green))
                } else {
                    ("○ ", Style::default().fg(Color::DarkGray))
                };
                let mut spans = vec![
                    Span::styled(mark, mark_style),
                    Span::raw(task.title.clone()),
                ];
                if let Some(assignee) = &task.assigned_to {
                    spans.push(Span::styled(
                        format!(" ({})", assignee),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                if let Some(due) = &task.due_date {
                    spans.push(Span::styled(
                        format!(" due {}", due),
                        Style::default().fg(Color::Yellow),
                    ));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::from(""));
        }

        if let Some(rules) = &dashboard.house_rules {
            lines.push(Line::from(Span::styled(
                "House Rules",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            if let (Some(start), Some(end)) = (&rules.quiet_hours_start, &rules.quiet_hours_end) {
                lines.push(Line::from(format!("Quiet hours: {} - {}", start, end)));
            }
            let guests = if rules.guests_allowed {
                match rules.max_guests {
                    Some(cap) => format!("Guests: up to {}", cap),
                    None => "Guests: allowed".to_string(),
                }
            } else {
                "Guests: not allowed".to_string()
            };
            lines.push(Line::from(guests));
            lines.push(Line::from(format!(
                "Smoking: {}",
                if rules.smoking_allowed { "allowed" } else { "not allowed" }
            )));
            lines.push(Line::from(format!(
                "Pets: {}",
                if rules.pets_allowed { "allowed" } else { "not allowed" }
            )));
            if !rules.custom_rules.is_empty() {
                lines.push(Line::from(Span::styled(
                    rules.custom_rules.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No tasks or house rules yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let info = Paragraph::new(lines)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Household"));
    f.render_widget(info, area);
}
