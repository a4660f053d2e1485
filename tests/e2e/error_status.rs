use crate::common::harness::{layout, SessionTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};

/// A failing fetch shows an error in the footer and keeps the page on screen
#[test]
fn test_fetch_error_shown_in_footer() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
    let first_row = harness.screen_row(layout::FIRST_DATA_ROW);

    harness.session().pager().store().set_failing(true);
    let keep_running = harness
        .send_key(KeyCode::Char('n'), KeyModifiers::NONE)
        .unwrap();

    assert!(keep_running);
    assert_eq!(harness.screen_row(layout::FIRST_DATA_ROW), first_row);
    assert_eq!(harness.visible_data_rows(), 20);
    let footer = harness.footer();
    assert!(footer.starts_with("Page 2/3"), "footer was {footer:?}");
    assert!(footer.contains("Error: store unavailable"), "footer was {footer:?}");
}

/// Failing in both directions never moves the pager
#[test]
fn test_errors_in_both_directions() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
    harness.session().pager().store().set_failing(true);

    harness.send_key(KeyCode::Char('p'), KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();

    assert_eq!(harness.session().pager().offset(), 20);
    assert!(harness.footer().contains("Error:"));
}

/// The next successful fetch clears the error
#[test]
fn test_error_cleared_after_recovery() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    harness.session().pager().store().set_failing(true);
    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();
    assert!(harness.footer().contains("Error:"));

    harness.session().pager().store().set_failing(false);
    harness.send_key(KeyCode::Char('n'), KeyModifiers::NONE).unwrap();

    assert_eq!(harness.footer(), "Page 2/3");
    harness.assert_screen_not_contains("Error:");
}

/// Quitting still works while the store is failing
#[test]
fn test_quit_while_failing() {
    let mut harness = SessionTestHarness::with_records(45, 20).unwrap();
    harness.session().pager().store().set_failing(true);

    assert!(!harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap());
}
