//! Scenario files for cellgrid hosts.
//!
//! A scenario is a RON document describing a canvas, a cell-size hint, the
//! items to seed, and a scripted gesture sequence. Raw serde types are parsed
//! first and then validated into [`Scenario`].
#![allow(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod defaults;
mod error;
mod loader;
mod raw;
mod scenario;

#[cfg(test)]
mod test_parse;

pub use defaults::{DEMO_SCENARIO, demo};
pub use error::{Error, excerpt_at};
pub use loader::{load_from_path, load_from_str};
pub use raw::{RawEvent, RawItem, RawMargins, RawScenario, RawSize};
pub use scenario::{GestureEvent, ItemSpec, Scenario};
