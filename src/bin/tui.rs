//! PairPad TUI (Terminal User Interface)
//!
//! A terminal-based client for the PairPad roommate-matching service.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pairpad::tui::{ui::ui, App, Screen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Environment variable overriding the data directory
const DATA_DIR_ENV: &str = "PAIRPAD_DATA_DIR";

fn data_dir() -> std::path::PathBuf {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => std::path::PathBuf::from(dir),
        _ => std::path::PathBuf::from("./pairpad_data"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(data_dir())?;

    // Try to resume the previous session in the background
    app.trigger_session_restore();

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Settle any background fetches before handling input
        app.poll_background_tasks();

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.current_screen {
                    Screen::Login => {
                        match key.code {
                            KeyCode::Esc => {
                                app.should_quit = true;
                            }
                            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.paste_from_clipboard();
                                }
                            }
                            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.show_register_screen();
                            }
                            KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.backspace();
                                }
                            }
                            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.next_field();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_login();
                            }
                            _ => {}
                        }
                    }
                    Screen::Register => {
                        let on_role_row = app
                            .register_screen
                            .as_ref()
                            .map(|screen| screen.focused_field == 4)
                            .unwrap_or(false);

                        match key.code {
                            KeyCode::Esc => {
                                app.back_to_login();
                            }
                            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if on_role_row => {
                                if let Some(screen) = &mut app.register_screen {
                                    screen.cycle_role();
                                }
                            }
                            KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                                if let Some(screen) = &mut app.register_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.register_screen {
                                    screen.backspace();
                                }
                            }
                            KeyCode::Tab | KeyCode::Down => {
                                if let Some(screen) = &mut app.register_screen {
                                    screen.next_field();
                                }
                            }
                            KeyCode::BackTab | KeyCode::Up => {
                                if let Some(screen) = &mut app.register_screen {
                                    screen.previous_field();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_registration();
                            }
                            _ => {}
                        }
                    }
                    Screen::Assessment => {
                        match key.code {
                            KeyCode::Char(c) if ('1'..='5').contains(&c) => {
                                if let Some(screen) = &mut app.assessment_screen {
                                    screen.record_response(c as u8 - b'0');
                                }
                            }
                            KeyCode::Left | KeyCode::Char('h') => {
                                if let Some(screen) = &mut app.assessment_screen {
                                    screen.previous_question();
                                }
                            }
                            KeyCode::Right | KeyCode::Char('l') => {
                                if let Some(screen) = &mut app.assessment_screen {
                                    screen.next_question();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_assessment();
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                // First-run assessment is mandatory; only a
                                // retake can be abandoned
                                let can_leave = app
                                    .app_state
                                    .session
                                    .as_ref()
                                    .map(|s| s.user.has_personality_profile())
                                    .unwrap_or(false);
                                if can_leave {
                                    app.back_to_dashboard();
                                }
                            }
                            _ => {}
                        }
                    }
                    Screen::Dashboard => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => {
                                app.should_quit = true;
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                app.next();
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                app.previous();
                            }
                            KeyCode::Enter => {
                                app.select();
                            }
                            _ => {}
                        }
                    }
                    Screen::Suggestions => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_dashboard();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.suggestions_screen {
                                    screen.next();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.suggestions_screen {
                                    screen.previous();
                                }
                            }
                            KeyCode::Char('a') | KeyCode::Enter => {
                                app.accept_selected_suggestion();
                            }
                            KeyCode::Char('x') => {
                                app.reject_selected_suggestion();
                            }
                            _ => {}
                        }
                    }
                    Screen::Conversations => {
                        // Conversations map 1:1 onto the match list
                        let count = app.app_state.matches.all().len();
                        match key.code {
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_dashboard();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.conversations_screen {
                                    screen.next(count);
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.conversations_screen {
                                    screen.previous(count);
                                }
                            }
                            KeyCode::Enter => {
                                app.open_selected_conversation();
                            }
                            KeyCode::Char('r') => {
                                app.trigger_matches_refresh();
                            }
                            _ => {}
                        }
                    }
                    Screen::Chat => {
                        match key.code {
                            KeyCode::Esc => {
                                app.back_to_conversations();
                            }
                            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                if let Some(screen) = &mut app.chat_screen {
                                    screen.paste_from_clipboard();
                                }
                            }
                            KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                                if let Some(screen) = &mut app.chat_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.chat_screen {
                                    screen.backspace();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_chat_message();
                            }
                            KeyCode::PageUp => {
                                // Extract thread length first to avoid borrow conflicts
                                let max_offset = app
                                    .chat_screen
                                    .as_ref()
                                    .map(|screen| {
                                        app.app_state
                                            .messages
                                            .thread(&screen.match_id)
                                            .len()
                                            .saturating_sub(1)
                                    })
                                    .unwrap_or(0);
                                if let Some(screen) = &mut app.chat_screen {
                                    screen.scroll_up(max_offset);
                                }
                            }
                            KeyCode::PageDown => {
                                if let Some(screen) = &mut app.chat_screen {
                                    screen.scroll_down();
                                }
                            }
                            _ => {}
                        }
                    }
                    Screen::Spaces => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_dashboard();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.spaces_screen {
                                    screen.next();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.spaces_screen {
                                    screen.previous();
                                }
                            }
                            KeyCode::Enter => {
                                app.open_selected_space();
                            }
                            _ => {}
                        }
                    }
                    Screen::SpaceDashboard => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_spaces();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.space_dashboard_screen {
                                    screen.next_notification();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.space_dashboard_screen {
                                    screen.previous_notification();
                                }
                            }
                            KeyCode::Char('d') | KeyCode::Enter => {
                                app.dismiss_selected_notification();
                            }
                            KeyCode::Char('r') => {
                                app.trigger_space_dashboard_refresh();
                                app.trigger_space_members_refresh();
                            }
                            _ => {}
                        }
                    }
                    Screen::Profile => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_dashboard();
                            }
                            KeyCode::Char('r') => {
                                app.trigger_profile_refresh();
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
