//! Project JSON interchange.
//!
//! Encoding is plain serde. Decoding is an explicit validation boundary:
//! the file is parsed, shape-checked for the required top-level fields, and
//! only then deserialized into a [`Project`]. Nothing downstream ever sees
//! a partially-trusted shape — a failure here leaves the caller's current
//! project untouched.

use serde_json::Value;

use crate::model::Project;
use crate::{Error, Result};

/// Required top-level fields of a project file. A file missing any of these
/// is rejected outright; every other field is optional and defaults —
/// older files omit `customColumns`, `visibleDefaultColumns`, the name,
/// and the timestamps.
const REQUIRED_FIELDS: [&str; 3] = ["id", "spaces", "adjacencies"];

/// Decode a project file, rejecting malformed input.
pub fn decode_project(json: &str) -> Result<Project> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| Error::InvalidProject(format!("not valid JSON: {e}")))?;

    let obj = value
        .as_object()
        .ok_or_else(|| Error::InvalidProject("top level is not an object".into()))?;

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(Error::InvalidProject(format!("missing required field `{field}`")));
        }
    }
    if !obj["spaces"].is_array() {
        return Err(Error::InvalidProject("`spaces` is not an array".into()));
    }
    if !obj["adjacencies"].is_object() {
        return Err(Error::InvalidProject("`adjacencies` is not an object".into()));
    }

    serde_json::from_value(value).map_err(|e| Error::InvalidProject(e.to_string()))
}

/// Encode a project for storage (compact).
pub fn encode_project(project: &Project) -> Result<String> {
    serde_json::to_string(project).map_err(|e| Error::Storage(e.to_string()))
}

/// Encode a project for file export (pretty-printed, the shareable form).
pub fn encode_project_pretty(project: &Project) -> Result<String> {
    serde_json::to_string_pretty(project).map_err(|e| Error::Storage(e.to_string()))
}

/// Suggested download name: whitespace runs collapse to `-`.
pub fn export_file_name(project: &Project) -> String {
    let slug: String = project
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.json")
}
