//! Component system for the PlantNxt terminal host.
//!
//! Components are self-contained UI elements that handle their own events and
//! rendering while sharing state through [`App`]. Host-level consequences
//! (navigation, quitting) are reported back as [`Effect`]s rather than applied
//! directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Effect};

/// A UI component with its own behavior.
///
/// 1. **Event handling**: `handle_key_events()` / `handle_mouse_events()` mutate
///    `App` and return effects.
/// 2. **Rendering**: `render()` draws into the provided area and may record
///    layout information (hit regions) for later mouse handling.
pub(crate) trait Component {
    /// Handle key events routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events. Every component sees every mouse event so that
    /// enter/leave transitions can be derived from pointer position.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into `rect`.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
