//! Snapshot tests for full browser frames
//!
//! Uses insta + the scripted console to pin the exact screen layout after a
//! sequence of keys.

use crate::format::{ConsumableTable, SeriesTable};
use crate::model::{Consumable, RecordId, Series, Status};
use crate::test_harness::ScriptedConsole;
use crate::view::{Browser, ColorConfig};

#[test]
fn series_list_scrolled() {
    let ids = [4, 9, 15, 16, 23, 42, 108, 111, 256, 512, 1024, 2048];
    let names = [
        "Discworld",
        "Foundation",
        "Dune",
        "Earthsea",
        "The Expanse",
        "Hyperion",
        "Culture",
        "Malazan",
        "Wheel of Time",
        "Stormlight",
        "Witcher",
        "Ender",
    ];
    let records: Vec<Series> = ids
        .iter()
        .zip(names)
        .map(|(&id, name)| Series {
            id: RecordId::new(id),
            name: name.to_string(),
        })
        .collect();

    // 12 rows leave 7 body rows; the window follows the cursor to row 5.
    let mut console = ScriptedConsole::new(60, 12, &["J", "J", "ENTER", "J", "J", "J", "Q"]);
    let state = Browser::new(records, SeriesTable)
        .with_color(ColorConfig::new(false))
        .run_on(&mut console)
        .expect("browser should exit cleanly");

    assert_eq!(
        state.selected_ids().iter().copied().collect::<Vec<_>>(),
        vec![RecordId::new(15)]
    );
    insta::assert_snapshot!("series_list_scrolled", console.screen());
}

#[test]
fn consumable_list_undated() {
    let consumable = |id, kind: &str, name: &str, parts, max_parts, rating, completions, status| {
        Consumable {
            id: RecordId::new(id),
            kind: kind.to_string(),
            name: name.to_string(),
            parts,
            max_parts,
            rating,
            completions,
            status,
            start_date: None,
            end_date: None,
        }
    };
    let records = vec![
        consumable(1, "NOVEL", "Dune", 1, Some(1), Some(9.5), 2, Status::Completed),
        consumable(2, "NOVEL", "Emma", 0, None, None, 0, Status::Planning),
        consumable(7, "TV", "The Expanse", 3, Some(6), Some(8.5), 0, Status::InProgress),
    ];

    let mut console = ScriptedConsole::new(100, 10, &["J", "J", "Q"]);
    Browser::new(records, ConsumableTable::default())
        .with_color(ColorConfig::new(false))
        .run_on(&mut console)
        .expect("browser should exit cleanly");

    insta::assert_snapshot!("consumable_list_undated", console.screen());
}
