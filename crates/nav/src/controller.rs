//! Expansion-state controller for the collapsible navigation panel.
//!
//! The panel is expanded when it is pinned or when the pointer is over it.
//! Two orthogonal input bits feed one derived output:
//!
//! ```text
//! hover(v):    hovered := v
//! toggle_pin:  pinned := !pinned; if pinned became false { hovered := false }
//! expansion  = pinned || hovered
//! ```
//!
//! Unpinning clears `hovered` so a stale hover flag cannot re-expand the panel
//! the instant it is released while the pointer still rests on it.

use std::fmt;

use plantnxt_types::{ExpansionState, NavigationEntry, PanelState};
use tracing::debug;

/// Input events accepted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    /// Pointer entered (`true`) or left (`false`) the panel's hit region.
    Hover(bool),
    /// Explicit pin/unpin request.
    TogglePin,
}

/// Pure transition function for the panel state machine.
pub fn transition(state: PanelState, input: PanelInput) -> PanelState {
    match input {
        PanelInput::Hover(hovered) => PanelState::new(state.pinned(), hovered),
        PanelInput::TogglePin => {
            let pinned = !state.pinned();
            let hovered = pinned && state.hovered();
            PanelState::new(pinned, hovered)
        }
    }
}

/// Before/after pair produced by every controller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelChange {
    pub previous: PanelState,
    pub current: PanelState,
}

impl PanelChange {
    pub fn expansion_changed(&self) -> bool {
        self.previous.expansion() != self.current.expansion()
    }

    pub fn pin_changed(&self) -> bool {
        self.previous.pinned() != self.current.pinned()
    }

    /// The new expansion when it differs from the previous one.
    pub fn new_expansion(&self) -> Option<ExpansionState> {
        self.expansion_changed().then_some(self.current.expansion())
    }
}

/// Receives notifications when the controller's visible state changes.
///
/// Both hooks default to no-ops so observers implement only what they need.
pub trait PanelObserver {
    fn on_expansion_changed(&mut self, _expansion: ExpansionState) {}

    fn on_pin_changed(&mut self, _pinned: bool) {}
}

/// Persistence seam for the single `pinned` preference.
///
/// Writes are fire-and-forget: implementations log their own failures and the
/// controller never waits on them.
pub trait PinStore {
    fn load_pinned(&self) -> Option<bool>;

    fn store_pinned(&self, pinned: bool);
}

impl<T: PinStore + ?Sized> PinStore for std::sync::Arc<T> {
    fn load_pinned(&self) -> Option<bool> {
        (**self).load_pinned()
    }

    fn store_pinned(&self, pinned: bool) {
        (**self).store_pinned(pinned)
    }
}

/// Observer that forwards pin changes to a [`PinStore`].
#[derive(Debug)]
pub struct PersistPin<S>(pub S);

impl<S: PinStore> PanelObserver for PersistPin<S> {
    fn on_pin_changed(&mut self, pinned: bool) {
        self.0.store_pinned(pinned);
    }
}

struct ExpansionCallback<F>(F);

impl<F: FnMut(ExpansionState)> PanelObserver for ExpansionCallback<F> {
    fn on_expansion_changed(&mut self, expansion: ExpansionState) {
        (self.0)(expansion)
    }
}

/// Owns the panel's expansion state and the small-screen drawer flag.
///
/// Intended to be owned and mutated by exactly one rendering context.
#[derive(Default)]
pub struct NavigationPanelController {
    state: PanelState,
    drawer_open: bool,
    observers: Vec<Box<dyn PanelObserver>>,
}

impl fmt::Debug for NavigationPanelController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationPanelController")
            .field("state", &self.state)
            .field("drawer_open", &self.drawer_open)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl NavigationPanelController {
    /// Unpinned, not hovered, collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a host-supplied pin preference.
    pub fn with_pinned(pinned: bool) -> Self {
        Self {
            state: PanelState::new(pinned, false),
            ..Self::default()
        }
    }

    /// Reads the initial pin preference from `store`, defaulting to unpinned.
    pub fn from_store(store: &dyn PinStore) -> Self {
        Self::with_pinned(store.load_pinned().unwrap_or(false))
    }

    pub fn subscribe(&mut self, observer: impl PanelObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Registers a closure invoked whenever the effective expansion flips.
    pub fn on_expansion_change(&mut self, callback: impl FnMut(ExpansionState) + 'static) {
        self.subscribe(ExpansionCallback(callback));
    }

    /// Records pointer presence. While pinned the value is stored but has no
    /// visible effect.
    pub fn set_hovered(&mut self, is_hovered: bool) -> PanelChange {
        self.apply(PanelInput::Hover(is_hovered))
    }

    pub fn toggle_pin(&mut self) -> PanelChange {
        self.apply(PanelInput::TogglePin)
    }

    /// Feeds one input through [`transition`] and notifies observers.
    pub fn apply(&mut self, input: PanelInput) -> PanelChange {
        let previous = self.state;
        self.state = transition(previous, input);
        let change = PanelChange {
            previous,
            current: self.state,
        };

        debug!(
            ?input,
            pinned = change.current.pinned(),
            hovered = change.current.hovered(),
            expansion = ?change.current.expansion(),
            "navigation panel input applied"
        );
        self.notify(&change);
        change
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn expansion(&self) -> ExpansionState {
        self.state.expansion()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Returns the destination the router should navigate to and closes the
    /// drawer, matching the small-screen "navigate then dismiss" behaviour.
    pub fn activate<'a>(&mut self, entry: &'a NavigationEntry) -> &'a str {
        self.close_drawer();
        debug!(entry = %entry.id, destination = %entry.destination, "navigation entry activated");
        &entry.destination
    }

    fn notify(&mut self, change: &PanelChange) {
        let new_expansion = change.new_expansion();
        let pin_changed = change.pin_changed();
        if new_expansion.is_none() && !pin_changed {
            return;
        }
        for observer in &mut self.observers {
            if let Some(expansion) = new_expansion {
                observer.on_expansion_changed(expansion);
            }
            if pin_changed {
                observer.on_pin_changed(change.current.pinned());
            }
        }
    }
}
