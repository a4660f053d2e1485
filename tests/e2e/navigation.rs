use crate::common::harness::{layout, SessionTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};

/// The first page is on screen before any key is pressed
#[test]
fn test_initial_page_shown() {
    let harness = SessionTestHarness::with_records(45, 20).unwrap();

    assert_eq!(harness.visible_data_rows(), 20);
    assert!(harness.screen_row(layout::FIRST_DATA_ROW).contains("First0"));
    assert_eq!(harness.footer(), "Page 1/3");
}

/// 45 records, 20 per page: n, n lands on the 5-record last page and stays there
#[test]
fn test_next_until_last_page() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();

    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
    assert!(harness.screen_row(layout::FIRST_DATA_ROW).contains("First20"));
    assert_eq!(harness.footer(), "Page 2/3");

    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
    assert!(harness.screen_row(layout::FIRST_DATA_ROW).contains("First40"));
    assert_eq!(harness.visible_data_rows(), 5);
    assert_eq!(harness.footer(), "Page 3/3");

    harness
        .send_key_repeat(KeyCode::Char('n'), KeyModifiers::NONE, 3)
        .unwrap();
    assert_eq!(harness.session().pager().offset(), 40);
    assert_eq!(harness.visible_data_rows(), 5);
    assert_eq!(harness.footer(), "Page 3/3");
}

/// Rows from the previous page never linger after a shorter page is drawn
#[test]
fn test_short_page_replaces_full_page() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    harness
        .send_key_repeat(KeyCode::Char('n'), KeyModifiers::NONE, 2)
        .unwrap();

    harness.assert_screen_contains("First44");
    harness.assert_screen_not_contains("First39");
    harness.assert_screen_not_contains("First0 ");
}

#[test]
fn test_previous_page() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    harness
        .send_key_repeat(KeyCode::Char('n'), KeyModifiers::NONE, 2)
        .unwrap();

    harness.send_key(KeyCode::Char('p'), KeyModifiers::NONE).unwrap();
    assert!(harness.screen_row(layout::FIRST_DATA_ROW).contains("First20"));
    assert_eq!(harness.footer(), "Page 2/3");

    harness
        .send_key_repeat(KeyCode::Char('p'), KeyModifiers::NONE, 4)
        .unwrap();
    assert_eq!(harness.session().pager().offset(), 0);
    assert!(harness.screen_row(layout::FIRST_DATA_ROW).contains("First0"));
    assert_eq!(harness.footer(), "Page 1/3");
}

/// Arrow and page keys navigate like n and p
#[test]
fn test_alternate_navigation_keys() {
    let mut harness = SessionTestHarness::with_records(100, 10).unwrap();

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::PageDown, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.footer(), "Page 3/10");

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.footer(), "Page 2/10");
    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.footer(), "Page 1/10");
}

#[test]
fn test_unbound_keys_do_nothing() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    let before = harness.screen_to_string();
    let calls = harness.session().pager().store().query_calls();

    assert!(harness.send_key(KeyCode::Char('x'), KeyModifiers::NONE).unwrap());
    assert!(harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap());

    assert_eq!(harness.screen_to_string(), before);
    assert_eq!(harness.session().pager().store().query_calls(), calls);
}

#[test]
fn test_quit_keys() {
    for (code, modifiers) in [
        (KeyCode::Esc, KeyModifiers::NONE),
        (KeyCode::Char('q'), KeyModifiers::NONE),
        (KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut harness = SessionTestHarness::with_records(5, 2).unwrap();
        assert!(!harness.send_key(code, modifiers).unwrap(), "{code:?} should quit");
        assert!(harness.session().should_quit());
    }
}

#[test]
fn test_empty_store() {
    let mut harness = SessionTestHarness::with_records(0, 20).unwrap();
    assert_eq!(harness.visible_data_rows(), 0);
    assert_eq!(harness.footer(), "Page 1/1");
    harness.assert_screen_contains("ID1");

    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
    assert_eq!(harness.footer(), "Page 1/1");
}
