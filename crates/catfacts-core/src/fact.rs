//! Cat fact records and the inputs that create or change them.

use serde::{Deserialize, Serialize};

use crate::error::{FactError, Result};
use crate::ids::FactId;

/// Page size used by listings when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// A persisted English/Spanish fact pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatFact {
    /// Identifier assigned by the store.
    pub id: FactId,
    /// English text.
    pub fact_en: String,
    /// Spanish text, translated from `fact_en` unless given explicitly.
    pub fact_es: String,
}

/// Normalize an optional text field: empty and whitespace-only values count as absent.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Input for a manually created fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFact {
    /// English text, never empty.
    pub fact_en: String,
    /// Spanish text if the caller supplied one.
    pub fact_es: Option<String>,
}

impl NewFact {
    /// Validate raw request fields.
    ///
    /// # Errors
    ///
    /// Returns `FactError::Validation` when `fact_en` is absent or empty.
    pub fn validate(fact_en: Option<String>, fact_es: Option<String>) -> Result<Self> {
        let fact_en = non_empty(fact_en)
            .ok_or_else(|| FactError::Validation("El hecho en inglés es obligatorio".into()))?;

        Ok(Self {
            fact_en,
            fact_es: non_empty(fact_es),
        })
    }

    /// English text to translate, if no Spanish text was supplied.
    #[must_use]
    pub fn translation_source(&self) -> Option<&str> {
        match self.fact_es {
            Some(_) => None,
            None => Some(self.fact_en.as_str()),
        }
    }
}

/// Partial replacement of a stored fact.
///
/// Absent fields keep their stored value. The one exception: a new `fact_en` without a
/// `fact_es` replaces the Spanish text with a fresh translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactPatch {
    /// Replacement English text.
    pub fact_en: Option<String>,
    /// Replacement Spanish text.
    pub fact_es: Option<String>,
}

impl FactPatch {
    /// Build a patch, treating empty values as absent.
    #[must_use]
    pub fn new(fact_en: Option<String>, fact_es: Option<String>) -> Self {
        Self {
            fact_en: non_empty(fact_en),
            fact_es: non_empty(fact_es),
        }
    }

    /// English text that must be translated before applying this patch.
    #[must_use]
    pub fn translation_source(&self) -> Option<&str> {
        match (&self.fact_en, &self.fact_es) {
            (Some(en), None) => Some(en.as_str()),
            _ => None,
        }
    }

    /// Apply the patch on top of `current`.
    ///
    /// `translated` is the translation of the new English text, required exactly when
    /// [`translation_source`](Self::translation_source) returned `Some`.
    #[must_use]
    pub fn apply(self, current: CatFact, translated: Option<String>) -> CatFact {
        let fact_es = translated.or(self.fact_es).unwrap_or(current.fact_es);

        CatFact {
            id: current.id,
            fact_en: self.fact_en.unwrap_or(current.fact_en),
            fact_es,
        }
    }
}

/// One window of a fact listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactPage {
    /// Number of facts in the store, regardless of the window.
    pub total: u64,
    /// Requested maximum page size.
    pub limit: u32,
    /// Number of facts skipped.
    pub offset: u32,
    /// Facts in the window, newest first.
    pub facts: Vec<CatFact>,
}
