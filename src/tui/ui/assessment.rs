//! Personality assessment screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Likert scale labels in response order
const SCALE_LABELS: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

/// Draw the questionnaire with its progress gauge
pub fn render_assessment(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.assessment_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Progress bar
                Constraint::Min(8),    // Question and scale
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("Personality Assessment")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Progress bar
        let progress = screen.progress_percentage();
        let progress_label = format!(
            "{} of {} answered ({}%)",
            screen.answered_count(),
            screen.questions.len(),
            progress
        );
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(
                Style::default()
                    .fg(if screen.is_complete() {
                        Color::Green
                    } else {
                        Color::Cyan
                    })
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .percent(progress)
            .label(progress_label);
        f.render_widget(gauge, chunks[1]);

        // Question and scale
        if screen.is_loading {
            let loading = Paragraph::new("Loading questions...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Question"));
            f.render_widget(loading, chunks[2]);
        } else if let Some(question) = screen.current_question() {
            let selected = screen.responses.get(screen.current).copied().flatten();

            let mut lines = vec![
                Line::from(Span::styled(
                    question.question_text.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for (i, label) in SCALE_LABELS.iter().enumerate() {
                let value = (i + 1) as u8;
                let is_selected = selected == Some(value);
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if is_selected { "→ " } else { "  " };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(format!("[{}] {}", value, label), style),
                ]));
            }

            let question_widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(format!(
                    "Question {} of {}",
                    screen.current + 1,
                    screen.questions.len()
                )));
            f.render_widget(question_widget, chunks[2]);
        } else {
            let empty = Paragraph::new("No assessment questions available.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Question"));
            f.render_widget(empty, chunks[2]);
        }

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
        let help_text =
            "1-5: Answer | ←→: Previous/Next question | Enter: Submit when complete | Esc: Back";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[4]);
    }
}
