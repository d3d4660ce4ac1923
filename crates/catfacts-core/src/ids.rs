//! Identifier types for cat facts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fact identifier assigned by the store on insert.
///
/// Identifiers increase monotonically and are never reused or changed once assigned.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactId(i64);

impl FactId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw database identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for FactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Debug for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FactId({})", self.0)
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_id_parse_and_display() {
        let id: FactId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "FactId(42)");
    }

    #[test]
    fn fact_id_rejects_garbage() {
        assert!("abc".parse::<FactId>().is_err());
    }

    #[test]
    fn fact_id_serializes_as_number() {
        let json = serde_json::to_string(&FactId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
