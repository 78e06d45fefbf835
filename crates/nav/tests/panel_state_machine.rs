use plantnxt_nav::{ExpansionState, NavigationPanelController, PanelInput, PanelState, transition};

const INPUTS: [PanelInput; 3] = [PanelInput::Hover(true), PanelInput::Hover(false), PanelInput::TogglePin];

/// Every input sequence of length `len` over `INPUTS`.
fn sequences(len: usize) -> Vec<Vec<PanelInput>> {
    (0..len).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix| {
                INPUTS.iter().map(move |input| {
                    let mut next = prefix.clone();
                    next.push(*input);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn expansion_equals_pinned_or_hovered_after_every_input() {
    for len in 1..=6 {
        for sequence in sequences(len) {
            let mut controller = NavigationPanelController::new();
            for input in &sequence {
                let state = controller.apply(*input).current;
                assert_eq!(
                    state.is_expanded(),
                    state.pinned() || state.hovered(),
                    "invariant broken after {sequence:?}"
                );
                assert_eq!(state, controller.state());
            }
        }
    }
}

#[test]
fn unpinning_always_clears_hover() {
    for len in 0..=5 {
        for prefix in sequences(len) {
            let mut controller = NavigationPanelController::new();
            for input in &prefix {
                controller.apply(*input);
            }
            if !controller.state().pinned() {
                controller.toggle_pin();
            }
            let change = controller.toggle_pin();
            assert!(!change.current.pinned());
            assert!(!change.current.hovered(), "hover survived unpin after {prefix:?}");
            assert_eq!(change.current.expansion(), ExpansionState::Collapsed);
        }
    }
}

#[test]
fn double_toggle_restores_pin_and_clears_hover() {
    for pinned in [false, true] {
        for hovered in [false, true] {
            let start = PanelState::new(pinned, hovered);
            let end = transition(transition(start, PanelInput::TogglePin), PanelInput::TogglePin);
            assert_eq!(end.pinned(), start.pinned());
            // Exactly one of the two toggles was an unpin, which clears hover.
            assert!(!end.hovered(), "start={start:?} end={end:?}");
        }
    }
    let end = transition(transition(PanelState::new(false, true), PanelInput::TogglePin), PanelInput::TogglePin);
    assert_eq!(end, PanelState::new(false, false));
}

#[test]
fn hover_then_leave_while_unpinned() {
    let mut controller = NavigationPanelController::new();
    assert_eq!(controller.set_hovered(true).current.expansion(), ExpansionState::Expanded);
    assert_eq!(controller.set_hovered(false).current.expansion(), ExpansionState::Collapsed);
}

#[test]
fn pin_then_unpin_with_pointer_still_over_panel_collapses() {
    let mut controller = NavigationPanelController::new();
    controller.set_hovered(true);

    assert_eq!(controller.toggle_pin().current.expansion(), ExpansionState::Expanded);
    assert_eq!(controller.toggle_pin().current.expansion(), ExpansionState::Collapsed);
}

#[test]
fn rapid_hover_jitter_leaves_last_value() {
    let mut controller = NavigationPanelController::new();
    for step in 0..101 {
        controller.set_hovered(step % 2 == 0);
    }
    assert_eq!(controller.state(), PanelState::new(false, true));
    controller.set_hovered(false);
    assert_eq!(controller.state(), PanelState::new(false, false));
}
