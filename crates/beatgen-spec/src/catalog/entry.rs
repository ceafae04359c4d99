//! Catalog document types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::frequency::{FrequencyRange, FrequencySpec};

/// Top-level catalog document as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Key used when a caller asks for the catalog default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Preset entries by key.
    pub presets: BTreeMap<String, PresetEntry>,
}

/// A single catalog entry.
///
/// Exactly one of `spec` or `alias` must be set. `range` and `description`
/// are presentation metadata carried for listing only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetEntry {
    /// Frequency spec for this preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<FrequencySpec>,
    /// Key of another entry this one resolves to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Descriptive band range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<FrequencyRange>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PresetEntry {
    /// Creates an entry holding a spec.
    pub fn with_spec(spec: FrequencySpec) -> Self {
        Self {
            spec: Some(spec),
            alias: None,
            range: None,
            description: None,
        }
    }

    /// Creates an alias entry.
    pub fn alias_of(target: impl Into<String>) -> Self {
        Self {
            spec: None,
            alias: Some(target.into()),
            range: None,
            description: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the descriptive range.
    pub fn range(mut self, low_hz: f64, high_hz: f64) -> Self {
        self.range = Some(FrequencyRange { low_hz, high_hz });
        self
    }
}

/// Normalizes a preset key for loose matching.
///
/// Lowercases, keeps ASCII alphanumerics, joins words with `-`:
/// `"Deep Sleep & Healing"` becomes `"deep-sleep-healing"`.
pub fn slugify(key: &str) -> String {
    key.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Suggested download filename for a preset key.
///
/// `"Focus & Productivity"` becomes `"Focus_&_Productivity_beat.wav"`.
pub fn suggested_filename(key: &str) -> String {
    format!("{}_beat.wav", key.replace(' ', "_"))
}
