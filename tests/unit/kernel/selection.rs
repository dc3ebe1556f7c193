use super::*;

#[test]
fn initial_state_selects_first_line() {
    let state = SelectionState::new();
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.anchor(), 0);
    assert_eq!(state.active_range(), LineRange::new(0, 0));
}

#[test]
fn collapse_then_extend_scenario() {
    let len = 4;
    let mut state = SelectionState::new();

    assert!(state.move_cursor(1, false, len));
    assert!(state.move_cursor(1, false, len));
    assert_eq!(state.cursor(), 2);
    assert_eq!(state.active_range(), LineRange { low: 2, high: 2 });

    assert!(state.move_cursor(-1, true, len));
    assert_eq!(state.active_range(), LineRange { low: 1, high: 2 });
    assert_eq!(state.anchor(), 2);
}

#[test]
fn collapsing_move_always_yields_single_line_range() {
    let len = 10;
    let mut state = SelectionState::new();
    state.move_cursor(5, true, len);
    assert_eq!(state.active_range(), LineRange::new(0, 5));

    state.move_cursor(-2, false, len);
    assert_eq!(state.active_range(), LineRange::new(3, 3));
}

#[test]
fn repeated_extends_grow_monotonically() {
    let len = 10;
    let mut state = SelectionState::new();
    state.move_cursor(5, false, len);

    let mut previous = state.active_range();
    for _ in 0..3 {
        state.move_cursor(1, true, len);
        let range = state.active_range();
        assert_eq!(range.low, previous.low);
        assert!(range.high > previous.high);
        previous = range;
    }
    assert_eq!(state.anchor(), 5);
}

#[test]
fn extending_back_past_anchor_flips_the_range() {
    let len = 10;
    let mut state = SelectionState::new();
    state.move_cursor(4, false, len);
    state.move_cursor(1, true, len);
    state.move_cursor(-3, true, len);

    assert_eq!(state.cursor(), 2);
    assert_eq!(state.active_range(), LineRange::new(2, 4));
}

#[test]
fn moves_clamp_to_document_bounds() {
    let len = 5;
    let mut state = SelectionState::new();

    assert!(state.move_cursor(100, false, len));
    assert_eq!(state.cursor(), 4);

    assert!(state.move_cursor(-100, true, len));
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.active_range(), LineRange::new(0, 4));
}

#[test]
fn move_at_boundary_changes_nothing() {
    let len = 3;
    let mut state = SelectionState::new();
    state.move_cursor(2, false, len);
    state.move_cursor(-1, true, len);
    let before = state;

    state.move_cursor(-1, true, len);
    let at_top = state;
    assert!(!state.move_cursor(-1, false, len));
    assert_eq!(state, at_top);
    assert_ne!(state, before);
    assert_eq!(state.active_range(), LineRange::new(0, 2));
}

#[test]
fn single_line_document_never_moves() {
    let mut state = SelectionState::new();
    for (delta, extend) in [(1, false), (-1, false), (1, true), (-1, true), (20, false)] {
        assert!(!state.move_cursor(delta, extend, 1));
        assert_eq!(state.active_range(), LineRange::new(0, 0));
    }
}

#[test]
fn moved_returns_the_next_state() {
    let state = SelectionState::new();
    let next = state.moved(2, true, 5);
    assert_eq!(state.cursor(), 0);
    assert_eq!(next.cursor(), 2);
    assert_eq!(next.anchor(), 0);
}

#[test]
fn line_range_displays_one_based() {
    assert_eq!(LineRange::new(0, 0).to_string(), "1");
    assert_eq!(LineRange::new(3, 1).to_string(), "2-4");
    assert_eq!(LineRange::new(1, 3).len(), 3);
    assert!(LineRange::new(1, 3).contains(3));
    assert!(!LineRange::new(1, 3).contains(0));
}
