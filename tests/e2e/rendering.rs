use crate::common::harness::{layout, SessionTestHarness};
use breaches::config::ViewConfig;
use breaches::model::Record;
use breaches::services::MemoryStore;
use breaches::view::Column;

fn record(fields: [&str; 9]) -> Record {
    Record::from_fields(fields.map(String::from))
}

#[test]
fn test_title_and_header() {
    let harness = SessionTestHarness::with_records(45, 20).unwrap();

    assert!(harness.screen_row(layout::TITLE_ROW).contains(" 45 records "));

    let header = harness.screen_row(layout::HEADER_ROW);
    let mut last_position = 0;
    for column in Column::ALL {
        let position = header
            .find(column.header())
            .unwrap_or_else(|| panic!("missing {:?} in {header:?}", column));
        assert!(position >= last_position, "{:?} out of order", column);
        last_position = position;
    }
}

#[test]
fn test_help_line() {
    let harness = SessionTestHarness::with_records(3, 20).unwrap();
    let help = harness.help();
    assert!(help.contains("next"));
    assert!(help.contains("previous"));
    assert!(help.contains("quit"));
}

/// Long cells are cut to the configured column width without a marker
#[test]
fn test_long_cells_truncated() {
    let store = MemoryStore::new(vec![record([
        "1",
        "2",
        "Maximilianus-Bartholomew",
        "Doe",
        "M",
        "Toronto",
        "Ottawa",
        "Senior Software Engineer",
        "2020-01-01",
    ])]);
    let harness = SessionTestHarness::new(store, &ViewConfig::default(), 200, 12).unwrap();

    // first name and job are cut at 20 characters
    harness.assert_screen_contains("Maximilianus-Barthol ");
    harness.assert_screen_not_contains("Maximilianus-Bartholo");
    harness.assert_screen_contains("Senior Software Engi ");
    harness.assert_screen_not_contains("…");
    harness.assert_screen_not_contains("...");
}

#[test]
fn test_truncation_disabled_shows_full_cells() {
    let store = MemoryStore::new(vec![record([
        "1",
        "2",
        "Maximilianus-Bartholomew",
        "Doe",
        "M",
        "Toronto",
        "Ottawa",
        "Senior Software Engineer",
        "2020-01-01",
    ])]);
    let config = ViewConfig {
        truncate: false,
        ..ViewConfig::default()
    };
    let harness = SessionTestHarness::new(store, &config, 200, 12).unwrap();

    harness.assert_screen_contains("Maximilianus-Bartholomew");
    harness.assert_screen_contains("Senior Software Engineer");
}

/// Non-ASCII cells are cut on character boundaries
#[test]
fn test_non_ascii_truncation() {
    let store = MemoryStore::new(vec![record([
        "1",
        "2",
        "Zoë",
        "Lefèvre",
        "F",
        "Trois-Rivières-Ouest-Québec",
        "Montréal",
        "Ingénieure",
        "2020-01-01",
    ])]);
    let harness = SessionTestHarness::new(store, &ViewConfig::default(), 200, 12).unwrap();

    // birth place limit is 25 characters
    harness.assert_screen_contains("Trois-Rivières-Ouest-Québ ");
    harness.assert_screen_contains("Montréal");
    harness.assert_screen_contains("Ingénieure");
}
