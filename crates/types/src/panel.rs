use serde::{Deserialize, Serialize};

/// Layout the navigation panel should render with.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionState {
    /// Narrow, icon-only layout.
    #[default]
    Collapsed,
    /// Wide, labeled layout.
    Expanded,
}

impl ExpansionState {
    /// Effective expansion is `pinned || hovered`.
    pub fn from_flags(pinned: bool, hovered: bool) -> Self {
        if pinned || hovered { Self::Expanded } else { Self::Collapsed }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Snapshot of the panel controller.
///
/// Only the two input bits are stored; the layout is computed from them on
/// every read, so a state can never claim an expansion its flags disagree
/// with. Serialized form carries just `pinned` and `hovered`.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    /// Sticky user preference; persists until toggled.
    pinned: bool,
    /// Transient pointer presence over the panel's hit region.
    hovered: bool,
}

impl PanelState {
    pub fn new(pinned: bool, hovered: bool) -> Self {
        Self { pinned, hovered }
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn expansion(&self) -> ExpansionState {
        ExpansionState::from_flags(self.pinned, self.hovered)
    }

    pub fn is_expanded(&self) -> bool {
        self.expansion().is_expanded()
    }

    /// The pin control is offered whenever the panel is wide, which covers
    /// both the pinned and the hovered case.
    pub fn shows_pin_control(&self) -> bool {
        self.is_expanded()
    }
}
