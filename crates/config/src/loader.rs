//! Parse and load scenario files.

use std::{ffi::OsStr, fs, path::Path};

use tracing::debug;

use crate::{Error, Scenario, error::excerpt_at, raw::RawScenario};

/// Load and validate a scenario from a `.ron` file at `path`.
pub fn load_from_path(path: &Path) -> Result<Scenario, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported scenario format (expected a .ron file)".to_string(),
        });
    }
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_from_str(&source, Some(path))
}

/// Parse and validate scenario text. `path` is only used for error reporting.
pub fn load_from_str(source: &str, path: Option<&Path>) -> Result<Scenario, Error> {
    let raw: RawScenario = ron::from_str(source).map_err(|e| {
        let line = e.span.start.line;
        let col = e.span.start.col;
        Error::Parse {
            path: path.map(Path::to_path_buf),
            line,
            col,
            message: e.code.to_string(),
            excerpt: excerpt_at(source, line, col),
        }
    })?;
    let scenario = raw.into_scenario(path)?;
    debug!(
        columns = scenario.config.columns(),
        rows = scenario.config.rows(),
        items = scenario.items.len(),
        events = scenario.events.len(),
        "scenario loaded"
    );
    Ok(scenario)
}
