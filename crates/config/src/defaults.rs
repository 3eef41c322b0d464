//! Built-in demo scenario.

use crate::{Error, Scenario, loader::load_from_str};

/// Five seeded items on a 1080x1920 canvas with 120px cells (9x16), followed
/// by one drag of each kind: commit, swap, revert, and cancel.
pub const DEMO_SCENARIO: &str = r#"(
    canvas: (width: 1080, height: 1920),
    cell_hint: (width: 120, height: 120),
    items: [
        (id: 100, at: (0, 0)),
        (id: 200, at: (1, 1)),
        (id: 300, at: (4, 0), span: (2, 2)),
        (id: 400, at: (7, 2), span: (1, 2)),
        (id: 500, at: (4, 4), span: (2, 1)),
    ],
    events: [
        press(item: 100, x: 60.0, y: 60.0),
        move(x: 180.0, y: 60.0),
        move(x: 300.0, y: 60.0),
        release(x: 300.0, y: 60.0),

        press(item: 200, x: 180.0, y: 180.0),
        move(x: 300.0, y: 60.0),
        release(x: 300.0, y: 60.0),

        press(item: 300, x: 500.0, y: 60.0),
        move(x: 1000.0, y: 60.0),
        release(x: 1000.0, y: 60.0),

        press(item: 500, x: 500.0, y: 500.0),
        move(x: 740.0, y: 980.0),
        cancel,
    ],
)"#;

/// The built-in demo scenario.
pub fn demo() -> Result<Scenario, Error> {
    load_from_str(DEMO_SCENARIO, None)
}
