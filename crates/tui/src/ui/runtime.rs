//! Runtime: event loop and input routing for the terminal host.
//!
//! Responsibilities
//! - Own the terminal lifecycle (raw mode, alternate screen, mouse capture).
//! - Route key presses and every mouse event to [`MainView`] and apply the
//!   returned `Effect`s.
//! - Redraw only after input that may have changed what is on screen.
//!
//! The panel has no animations, so the loop blocks on `crossterm::event::poll`
//! with a long timeout instead of ticking.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Translate one terminal event into component calls. Returns whether the
/// screen needs a redraw.
pub(crate) fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> bool {
    let effects: Vec<Effect> = match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            Vec::new()
        }
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => return false,
    };
    app.apply_effects(effects);
    true
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    render(terminal, app, main_view)?;
    while !app.should_quit {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if handle_input_event(app, main_view, event::read()?) && !app.should_quit {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

/// Entry point for the runtime: sets up the terminal, runs the event loop and
/// always restores the terminal, even when the loop fails.
pub(crate) fn run_app(mut app: App, mut main_view: MainView) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut main_view);
    if let Err(error) = cleanup_terminal(&mut terminal) {
        warn!(error = %error, "failed to restore terminal");
    }
    result
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};
    use plantnxt_nav::{NavigationPanelController, default_catalog};

    use super::*;

    #[test]
    fn key_releases_are_ignored_and_quit_is_applied() {
        let mut app = App::new(&default_catalog(), None, NavigationPanelController::new());
        let mut view = MainView::default();

        let release = KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!handle_input_event(&mut app, &mut view, Event::Key(release)));
        assert!(!app.panel.state().pinned());

        let pin = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert!(handle_input_event(&mut app, &mut view, Event::Key(pin)));
        assert!(app.panel.state().pinned());

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        handle_input_event(&mut app, &mut view, Event::Key(quit));
        assert!(app.should_quit);
    }
}
