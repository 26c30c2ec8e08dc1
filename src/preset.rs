// Preset persistence - ordered list of trait names as pretty JSON
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use crate::catalog::{Catalog, Trait};
use crate::error::PresetError;

pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the preset file with the given names
    pub fn save<S: AsRef<str>>(&self, names: &[S]) -> Result<(), PresetError> {
        save_to(&self.path, names)
    }

    /// Read the preset file. Missing and malformed files are distinct errors
    /// so callers can log them differently; both mean "no saved preset".
    pub fn load(&self) -> Result<Vec<String>, PresetError> {
        load_from(&self.path)
    }
}

pub fn save_to<S: AsRef<str>>(path: &Path, names: &[S]) -> Result<(), PresetError> {
    let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    // serde_json pretty printing uses 2-space indentation
    let json = serde_json::to_string_pretty(&names).map_err(|e| PresetError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, json).map_err(|e| PresetError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn load_from(path: &Path) -> Result<Vec<String>, PresetError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PresetError::Missing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(PresetError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str::<Vec<String>>(&contents).map_err(|e| PresetError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Map loaded names onto catalog traits, keeping their relative order.
/// Unknown names are skipped one by one and returned; repeats are dropped.
pub fn resolve_names(catalog: &Catalog, names: &[String]) -> (Vec<Trait>, Vec<String>) {
    let mut resolved = Vec::with_capacity(names.len());
    let mut skipped = Vec::new();
    let mut seen = HashSet::new();

    for name in names {
        match catalog.get(name) {
            Some(t) => {
                if seen.insert(t.name.as_str()) {
                    resolved.push(t.clone());
                }
            }
            None => skipped.push(name.clone()),
        }
    }

    (resolved, skipped)
}
