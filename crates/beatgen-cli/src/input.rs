//! Catalog and duration inputs shared by the commands.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use beatgen_spec::{PresetCatalog, SpecResult, DEFAULT_DURATION_MINUTES};

/// Environment variable naming a catalog JSON file.
pub const CATALOG_ENV: &str = "BEATGEN_CATALOG";

/// Where a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The embedded catalog.
    Builtin,
    /// A JSON file.
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "built-in"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A catalog plus its provenance.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// The validated catalog.
    pub catalog: PresetCatalog,
    /// Where it was loaded from.
    pub source: CatalogSource,
}

/// Picks the catalog file: explicit path first, then `BEATGEN_CATALOG`.
///
/// An empty value counts as unset at either level.
pub fn catalog_path(explicit: Option<&str>) -> Option<PathBuf> {
    select_catalog_path(explicit, std::env::var_os(CATALOG_ENV))
}

fn select_catalog_path(explicit: Option<&str>, env: Option<OsString>) -> Option<PathBuf> {
    explicit
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| env.filter(|path| !path.is_empty()).map(PathBuf::from))
}

/// Loads the catalog named by `explicit` or the environment, else the built-in one.
pub fn load_catalog(explicit: Option<&str>) -> SpecResult<LoadedCatalog> {
    match catalog_path(explicit) {
        Some(path) => load_catalog_file(&path),
        None => Ok(LoadedCatalog {
            catalog: PresetCatalog::builtin()?,
            source: CatalogSource::Builtin,
        }),
    }
}

fn load_catalog_file(path: &Path) -> SpecResult<LoadedCatalog> {
    Ok(LoadedCatalog {
        catalog: PresetCatalog::from_path(path)?,
        source: CatalogSource::File(path.to_path_buf()),
    })
}

/// Session length in seconds from `--seconds` or `--minutes`.
///
/// The CLI accepts at most one of the two; neither means the default
/// session.
pub fn duration_seconds(minutes: Option<f64>, seconds: Option<f64>) -> f64 {
    match (seconds, minutes) {
        (Some(seconds), _) => seconds,
        (None, Some(minutes)) => minutes * 60.0,
        (None, None) => DEFAULT_DURATION_MINUTES * 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_seconds() {
        assert_eq!(duration_seconds(None, None), 900.0);
        assert_eq!(duration_seconds(Some(2.0), None), 120.0);
        assert_eq!(duration_seconds(Some(2.0), Some(5.0)), 5.0);
    }

    #[test]
    fn test_explicit_catalog_path_wins() {
        assert_eq!(
            catalog_path(Some("presets.json")),
            Some(PathBuf::from("presets.json"))
        );
    }

    #[test]
    fn test_empty_explicit_path_defers_to_environment() {
        let env = Some(OsString::from("/etc/beatgen/presets.json"));
        assert_eq!(
            select_catalog_path(Some(""), env.clone()),
            Some(PathBuf::from("/etc/beatgen/presets.json"))
        );
        assert_eq!(
            select_catalog_path(Some("mine.json"), env),
            Some(PathBuf::from("mine.json"))
        );
    }

    #[test]
    fn test_empty_values_mean_builtin() {
        assert_eq!(select_catalog_path(Some(""), Some(OsString::new())), None);
        assert_eq!(select_catalog_path(None, None), None);
    }

    #[test]
    fn test_load_explicit_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(
            &path,
            r#"{"presets": {"calm": {"spec": {"type": "binaural_beat", "beat_hz": 7.83}}}}"#,
        )
        .unwrap();

        let loaded = load_catalog(path.to_str()).unwrap();
        assert_eq!(loaded.source, CatalogSource::File(path.clone()));
        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.source.to_string(), path.display().to_string());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        assert!(load_catalog(Some("/nonexistent/beatgen/presets.json")).is_err());
    }
}
