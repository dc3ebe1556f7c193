use super::*;

#[test]
fn follow_cursor_scrolls_down_minimally() {
    let mut viewport = ViewportState::new(5);
    viewport.follow_cursor(4, 100);
    assert_eq!(viewport.line_offset, 0);

    viewport.follow_cursor(5, 100);
    assert_eq!(viewport.line_offset, 1);

    viewport.follow_cursor(12, 100);
    assert_eq!(viewport.line_offset, 8);
    assert!(viewport.visible_range(100).contains(&12));
}

#[test]
fn follow_cursor_scrolls_up_to_cursor() {
    let mut viewport = ViewportState::new(5);
    viewport.line_offset = 20;
    viewport.follow_cursor(7, 100);
    assert_eq!(viewport.line_offset, 7);
}

#[test]
fn cursor_inside_window_does_not_scroll() {
    let mut viewport = ViewportState::new(10);
    viewport.line_offset = 3;
    viewport.follow_cursor(8, 100);
    assert_eq!(viewport.line_offset, 3);
}

#[test]
fn set_height_reclamps_offset_for_short_documents() {
    let mut viewport = ViewportState::new(5);
    viewport.follow_cursor(19, 20);
    assert_eq!(viewport.line_offset, 15);

    viewport.set_height(30, 19, 20);
    assert_eq!(viewport.line_offset, 0);
    assert_eq!(viewport.visible_range(20), 0..20);
}

#[test]
fn page_size_keeps_one_line_of_context() {
    assert_eq!(ViewportState::new(20).page_size(), 19);
    assert_eq!(ViewportState::new(1).page_size(), 1);
}

#[test]
fn expand_tabs_aligns_to_tab_stops() {
    assert_eq!(expand_tabs("\tx", 4), "    x");
    assert_eq!(expand_tabs("ab\tx", 4), "ab  x");
    assert_eq!(expand_tabs("abcd\tx", 4), "abcd    x");
}

#[test]
fn expand_tabs_from_continues_column_across_segments() {
    let mut col = 0;
    let first = expand_tabs_from("ab", 4, &mut col);
    let second = expand_tabs_from("\tc", 4, &mut col);
    assert_eq!(format!("{first}{second}"), "ab  c");
    assert_eq!(col, 5);
}

#[test]
fn wide_characters_count_two_columns() {
    assert_eq!(expand_tabs("中\tx", 4), "中  x");
}
