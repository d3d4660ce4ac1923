//! Cat fact API types.

use serde::Deserialize;

/// Body of `GET /fact`.
///
/// Only `fact` is read; `length` and any other upstream fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomFactResponse {
    /// The fact text. Missing when the upstream changes shape.
    #[serde(default)]
    pub fact: Option<String>,
}
