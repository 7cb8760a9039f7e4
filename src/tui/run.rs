//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and
//! ratatui, and interprets the effects the transitions request.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: three producer threads feed a single mpsc channel.
//! - Event reader thread: forwards crossterm key/mouse/resize events
//! - Ticker thread: a fixed-cadence clock for every animation deadline
//! - Submission workers: send the outcome of an in-flight POST
//! The event loop consumes from the channel, dispatching to pure
//! handlers.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config;
use crate::content::PROFILE;
use crate::platform;
use crate::submit;
use crate::types::{SectionId, Theme};

use super::state::{Action, App, AppEvent, EditOp, Effect, TICK_INTERVAL, WHEEL_STEP};
use super::update::{
    handle_submit_finished, handle_tick, note_key_input, note_pointer_input, update,
};
use super::view::{hit_test, render};

// ============================================================================
// THEME RESOLUTION
// ============================================================================

/// Startup theme: stored preference, else ambient terminal preference,
/// else dark.
pub fn initial_theme(stored: Option<Theme>, ambient: Option<Theme>) -> Theme {
    stored.or(ambient).unwrap_or(Theme::Dark)
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Bare keys only: any combination holding ctrl/alt/meta is left to
/// the terminal (Ctrl+C excepted). While a form field is being edited
/// every printable key is text, not a shortcut.
pub fn map_key(key: KeyEvent, editing: bool) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if key.modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    ) {
        return None;
    }

    if editing {
        return map_editing_key(key.code);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Esc => Some(Action::Back),

        // Panels
        KeyCode::Char('m') => Some(Action::ToggleDrawer),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('[') => Some(Action::TabLeft),
        KeyCode::Char(']') => Some(Action::TabRight),

        // Quick navigation
        KeyCode::Char('h') => Some(Action::GoToTop),
        KeyCode::Char('c') => Some(Action::GoToContact),
        KeyCode::Char('r') => Some(Action::OpenResume),
        KeyCode::Char(c @ '1'..='5') => {
            Some(Action::GoToSection(SectionId::ALL[(c as u8 - b'1') as usize]))
        }

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

fn map_editing_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(c) => Some(Action::Edit(EditOp::Insert(c))),
        KeyCode::Backspace => Some(Action::Edit(EditOp::Backspace)),
        KeyCode::Delete => Some(Action::Edit(EditOp::DeleteForward)),
        KeyCode::Left => Some(Action::Edit(EditOp::Left)),
        KeyCode::Right => Some(Action::Edit(EditOp::Right)),
        KeyCode::Home => Some(Action::Edit(EditOp::Home)),
        KeyCode::End => Some(Action::Edit(EditOp::End)),
        KeyCode::Enter => Some(Action::Edit(EditOp::Newline)),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode, mouse reporting included.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards the
/// relevant ones to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(width, height)) => tx.send(AppEvent::Resize(width, height)),
                Ok(_) => continue,
                Err(_) => break,
            };
            if forwarded.is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Spawn the fixed-cadence ticker driving animations and deadlines.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_INTERVAL);
            if tx.send(AppEvent::Tick(Instant::now())).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the portfolio UI until the user quits.
pub fn run() -> io::Result<()> {
    let prefs_path = config::default_preferences_path();
    run_with_preferences(prefs_path)
}

fn run_with_preferences(prefs_path: PathBuf) -> io::Result<()> {
    let stored = config::load_preferences(&prefs_path).theme;
    let theme = initial_theme(stored, platform::detect_ambient_theme());

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let size = terminal.size()?;
    let mut app = App::new(
        size.width,
        size.height,
        theme,
        stored,
        platform::current_year(),
        Instant::now(),
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx.clone());
    spawn_ticker(tx.clone());

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(event) => event,
            Err(_) => break, // all senders dropped
        };
        let now = Instant::now();

        match event {
            AppEvent::Key(key) => {
                note_key_input(&mut app);
                if let Some(action) = map_key(key, app.focus.editing.is_some()) {
                    let effects = update(&mut app, action, now);
                    run_effects(effects, &prefs_path, &tx);
                }
            }
            AppEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    note_pointer_input(&mut app);
                    if let Some(action) = hit_test(&app, mouse.column, mouse.row) {
                        let effects = update(&mut app, action, now);
                        run_effects(effects, &prefs_path, &tx);
                    }
                }
                MouseEventKind::ScrollUp => {
                    let _ = update(&mut app, Action::ScrollBy(-WHEEL_STEP), now);
                }
                MouseEventKind::ScrollDown => {
                    let _ = update(&mut app, Action::ScrollBy(WHEEL_STEP), now);
                }
                _ => {}
            },
            AppEvent::Resize(width, height) => {
                app.width = width;
                app.height = height;
                app.relayout();
                // Ambient preference only matters while no explicit
                // choice is stored.
                if let Some(ambient) = platform::detect_ambient_theme() {
                    let _ = update(&mut app, Action::AmbientTheme(ambient), now);
                }
            }
            AppEvent::Tick(at) => handle_tick(&mut app, at),
            AppEvent::SubmitFinished(outcome) => handle_submit_finished(&mut app, outcome, now),
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute the side effects a transition requested.
fn run_effects(effects: Vec<Effect>, prefs_path: &Path, tx: &mpsc::Sender<AppEvent>) {
    for effect in effects {
        match effect {
            Effect::PersistTheme(theme) => {
                // A failed write loses the preference, nothing more;
                // stderr is owned by the alternate screen.
                let _ = config::store_theme(prefs_path, theme);
            }
            Effect::SubmitForm(data) => {
                let tx = tx.clone();
                submit::spawn_submission(PROFILE.form_endpoint.to_string(), data, move |outcome| {
                    let _ = tx.send(AppEvent::SubmitFinished(outcome));
                });
            }
            Effect::OpenLink(url) => {
                let _ = platform::open_link(&url);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn initial_theme_priority_order() {
        // Stored wins over ambient.
        assert_eq!(
            initial_theme(Some(Theme::Light), Some(Theme::Dark)),
            Theme::Light
        );
        // Ambient wins over the default.
        assert_eq!(initial_theme(None, Some(Theme::Light)), Theme::Light);
        // Default is dark.
        assert_eq!(initial_theme(None, None), Theme::Dark);
    }

    #[test]
    fn ctrl_c_maps_to_quit_even_while_editing() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, true), Some(Action::Quit));
    }

    #[test]
    fn modified_keys_are_ignored() {
        for modifier in [KeyModifiers::CONTROL, KeyModifiers::ALT, KeyModifiers::META] {
            let combo = KeyEvent::new(KeyCode::Char('r'), modifier);
            assert_eq!(map_key(combo, false), None);
        }
    }

    #[test]
    fn shift_is_not_a_blocking_modifier() {
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(back_tab, false), Some(Action::FocusPrev));
        assert_eq!(map_key(back_tab, true), Some(Action::FocusPrev));
    }

    #[test]
    fn quick_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Char('h')), false), Some(Action::GoToTop));
        assert_eq!(
            map_key(key(KeyCode::Char('c')), false),
            Some(Action::GoToContact)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('r')), false),
            Some(Action::OpenResume)
        );
    }

    #[test]
    fn printable_keys_become_text_while_editing() {
        assert_eq!(
            map_key(key(KeyCode::Char('h')), true),
            Some(Action::Edit(EditOp::Insert('h')))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('q')), true),
            Some(Action::Edit(EditOp::Insert('q')))
        );
    }

    #[test]
    fn number_keys_jump_to_sections() {
        assert_eq!(
            map_key(key(KeyCode::Char('1')), false),
            Some(Action::GoToSection(SectionId::Home))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('5')), false),
            Some(Action::GoToSection(SectionId::Contact))
        );
        assert_eq!(map_key(key(KeyCode::Char('6')), false), None);
    }

    #[test]
    fn vim_and_arrow_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j')), false), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k')), false), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Up), false), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Down), false), Some(Action::MoveDown));
    }

    #[test]
    fn editing_keeps_line_editing_keys() {
        assert_eq!(
            map_key(key(KeyCode::Backspace), true),
            Some(Action::Edit(EditOp::Backspace))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), true),
            Some(Action::Edit(EditOp::Newline))
        );
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Action::Back));
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::F(5)), false), None);
        assert_eq!(map_key(key(KeyCode::Char('z')), false), None);
    }
}
