//! Serde shapes of the scenario document, before validation.

use serde::{Deserialize, Serialize};

// ===== RAW SCENARIO DOCUMENT =====

/// Width and height pair, in pixels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawSize {
    pub width: i32,
    pub height: i32,
}

/// Pixel inset for one item; omitted sides default to zero.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawMargins {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
}

const fn default_span() -> (i32, i32) {
    (1, 1)
}

/// One seeded item.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawItem {
    pub id: u32,
    /// Top-left cell as `(x, y)`.
    pub at: (i32, i32),
    /// Cells covered as `(horizontal, vertical)`; a single cell when omitted.
    #[serde(default = "default_span")]
    pub span: (i32, i32),
    #[serde(default)]
    pub margins: RawMargins,
}

/// One scripted gesture event.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RawEvent {
    /// Long-press on `item` starting a drag.
    Press { item: u32, x: f64, y: f64 },
    /// Pointer moved during the drag.
    Move { x: f64, y: f64 },
    /// Pointer released.
    Release { x: f64, y: f64 },
    /// Gesture aborted by the platform.
    Cancel,
}

/// A scenario document exactly as written.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawScenario {
    pub canvas: RawSize,
    pub cell_hint: RawSize,
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}
