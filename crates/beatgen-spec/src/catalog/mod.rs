//! Preset catalog: an injected mapping from selector keys to frequency specs.
//!
//! The catalog is data, loaded from JSON. The built-in catalog is an embedded
//! JSON file, so extending it never touches synthesis code. Aliases are
//! resolved and checked once at load time; lookups afterwards are plain map
//! reads.

mod entry;


pub use entry::{slugify, suggested_filename, CatalogDocument, PresetEntry};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{SpecError, SpecResult};
use crate::frequency::{FrequencyRange, FrequencySpec};

const BUILTIN_CATALOG: &str = include_str!("default_presets.json");

/// What to do when a selector key is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Report `UnknownPreset`.
    #[default]
    Error,
    /// Substitute the given key and flag the result as a fallback.
    UseKey(String),
    /// Substitute the catalog's declared default key.
    CatalogDefault,
}

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Canonical key that produced the spec.
    pub key: String,
    /// Resolved spec.
    pub spec: FrequencySpec,
    /// True when the requested key was missing and a fallback was used.
    pub fell_back: bool,
}

/// Listing view of one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetInfo<'a> {
    /// Canonical key.
    pub key: &'a str,
    /// Resolved spec (aliases followed).
    pub spec: FrequencySpec,
    /// Alias target, if the entry is an alias.
    pub alias: Option<&'a str>,
    /// Descriptive range, taken from the entry or the alias target.
    pub range: Option<FrequencyRange>,
    /// Description.
    pub description: Option<&'a str>,
}

/// Validated preset catalog.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    entries: BTreeMap<String, PresetEntry>,
    resolved: BTreeMap<String, FrequencySpec>,
    slugs: BTreeMap<String, String>,
    default_key: Option<String>,
}

impl PresetCatalog {
    /// Loads the built-in catalog.
    pub fn builtin() -> SpecResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog from a JSON string.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            presets = catalog.len(),
            "loaded preset catalog"
        );
        Ok(catalog)
    }

    /// Builds a catalog from a document, resolving aliases and validating specs.
    pub fn from_document(document: CatalogDocument) -> SpecResult<Self> {
        let CatalogDocument {
            default: default_key,
            presets: entries,
        } = document;

        let mut resolved = BTreeMap::new();
        for key in entries.keys() {
            let spec = resolve_alias_chain(&entries, key)?;
            spec.validate().map_err(|e| {
                SpecError::invalid_catalog(format!("preset '{}' has an invalid spec: {}", key, e))
            })?;
            resolved.insert(key.clone(), spec);
        }

        let mut slugs = BTreeMap::new();
        for key in entries.keys() {
            let slug = slugify(key);
            if slug.is_empty() {
                continue;
            }
            if let Some(existing) = slugs.insert(slug.clone(), key.clone()) {
                return Err(SpecError::invalid_catalog(format!(
                    "presets '{}' and '{}' normalize to the same name '{}'",
                    existing, key, slug
                )));
            }
        }

        if let Some(default_key) = &default_key {
            if !entries.contains_key(default_key) {
                return Err(SpecError::invalid_catalog(format!(
                    "default preset '{}' is not defined",
                    default_key
                )));
            }
        }

        Ok(Self {
            entries,
            resolved,
            slugs,
            default_key,
        })
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no presets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The catalog's declared default key, if any.
    pub fn default_key(&self) -> Option<&str> {
        self.default_key.as_deref()
    }

    /// Returns true if `key` resolves (exactly or by slug).
    pub fn contains(&self, key: &str) -> bool {
        self.canonical_key(key).is_some()
    }

    /// Maps a selector to its canonical key: exact match first, then slug.
    pub fn canonical_key(&self, key: &str) -> Option<&str> {
        if let Some((canonical, _)) = self.entries.get_key_value(key) {
            return Some(canonical.as_str());
        }
        self.slugs.get(&slugify(key)).map(String::as_str)
    }

    /// Resolves a selector key, reporting `UnknownPreset` when absent.
    ///
    /// ```
    /// use beatgen_spec::{FrequencySpec, PresetCatalog};
    ///
    /// let catalog = PresetCatalog::builtin().unwrap();
    /// assert_eq!(catalog.resolve("alpha").unwrap(), FrequencySpec::binaural(10.0));
    /// assert!(catalog.resolve("omega").is_err());
    /// ```
    pub fn resolve(&self, key: &str) -> SpecResult<FrequencySpec> {
        self.resolve_with(key, &FallbackPolicy::Error)
            .map(|resolution| resolution.spec)
    }

    /// Resolves a selector key under an explicit fallback policy.
    pub fn resolve_with(&self, key: &str, policy: &FallbackPolicy) -> SpecResult<Resolution> {
        if let Some(canonical) = self.canonical_key(key) {
            let spec = self.resolved[canonical];
            tracing::debug!(key, canonical, %spec, "resolved preset");
            return Ok(Resolution {
                key: canonical.to_string(),
                spec,
                fell_back: false,
            });
        }

        let fallback = match policy {
            FallbackPolicy::Error => return Err(SpecError::unknown_preset(key)),
            FallbackPolicy::UseKey(fallback) => fallback.as_str(),
            FallbackPolicy::CatalogDefault => self
                .default_key
                .as_deref()
                .ok_or_else(|| SpecError::unknown_preset(key))?,
        };

        // A missing fallback key is a configuration error, reported as the fallback key.
        let canonical = self
            .canonical_key(fallback)
            .ok_or_else(|| SpecError::unknown_preset(fallback))?;
        let spec = self.resolved[canonical];
        tracing::warn!(
            requested = key,
            fallback = canonical,
            %spec,
            "unknown preset, using fallback"
        );
        Ok(Resolution {
            key: canonical.to_string(),
            spec,
            fell_back: true,
        })
    }

    /// Iterates over all presets in key order.
    pub fn iter(&self) -> impl Iterator<Item = PresetInfo<'_>> + '_ {
        self.entries.iter().map(move |(key, entry)| PresetInfo {
            key: key.as_str(),
            spec: self.resolved[key],
            alias: entry.alias.as_deref(),
            range: entry.range.or_else(|| self.alias_range(entry)),
            description: entry.description.as_deref(),
        })
    }

    fn alias_range(&self, entry: &PresetEntry) -> Option<FrequencyRange> {
        let mut current = entry;
        let mut hops = 0;
        while let Some(target) = current.alias.as_deref() {
            current = self.entries.get(target)?;
            if let Some(range) = current.range {
                return Some(range);
            }
            hops += 1;
            if hops > self.entries.len() {
                return None;
            }
        }
        None
    }
}

/// Follows aliases from `key` to a concrete spec, rejecting cycles and dangling targets.
fn resolve_alias_chain(
    entries: &BTreeMap<String, PresetEntry>,
    key: &str,
) -> SpecResult<FrequencySpec> {
    let mut visited = BTreeSet::new();
    let mut current = key;

    loop {
        if !visited.insert(current) {
            return Err(SpecError::invalid_catalog(format!(
                "alias cycle detected starting at '{}'",
                key
            )));
        }

        let entry = entries.get(current).ok_or_else(|| {
            SpecError::invalid_catalog(format!(
                "preset '{}' aliases unknown preset '{}'",
                key, current
            ))
        })?;

        match (&entry.spec, &entry.alias) {
            (Some(spec), None) => return Ok(*spec),
            (None, Some(target)) => current = target.as_str(),
            (Some(_), Some(_)) => {
                return Err(SpecError::invalid_catalog(format!(
                    "preset '{}' sets both 'spec' and 'alias'",
                    current
                )))
            }
            (None, None) => {
                return Err(SpecError::invalid_catalog(format!(
                    "preset '{}' sets neither 'spec' nor 'alias'",
                    current
                )))
            }
        }
    }
}
