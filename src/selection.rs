use crate::catalog::{Catalog, Trait};
use crate::error::PresetError;
use crate::preset::{resolve_names, PresetStore};

/// Ordered set of selected traits. Click order is replay order.
///
/// Every committed mutation writes the preset file. Write failures are
/// logged and swallowed so a full disk never takes the window down.
pub struct SelectionState {
    selected: Vec<Trait>,
    store: Option<PresetStore>,
}

impl SelectionState {
    /// Empty selection persisted to `store`
    pub fn new(store: PresetStore) -> Self {
        Self {
            selected: Vec::new(),
            store: Some(store),
        }
    }

    /// Empty selection that never touches the disk
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            selected: Vec::new(),
            store: None,
        }
    }

    /// Build the selection from the preset file. Missing or corrupt files
    /// give an empty selection; unknown names are dropped individually.
    pub fn restore(catalog: &Catalog, store: PresetStore) -> Self {
        let names = match store.load() {
            Ok(names) => names,
            Err(PresetError::Missing(path)) => {
                log::info!("No saved preset at {}", path.display());
                Vec::new()
            }
            Err(e) => {
                log::warn!("Ignoring saved preset: {}", e);
                Vec::new()
            }
        };

        let mut state = Self::new(store);
        state.load_names(catalog, &names);
        state
    }

    /// Bulk-add names without writing the preset file
    pub fn load_names(&mut self, catalog: &Catalog, names: &[String]) {
        let (traits, skipped) = resolve_names(catalog, names);
        for name in &skipped {
            log::warn!("Skipping unknown trait '{}' in preset", name);
        }
        for t in &traits {
            self.add_uncommitted(t);
        }
        log::info!("Loaded {} traits from preset", self.selected.len());
    }

    /// Select a trait and persist. Returns false if it was already selected.
    pub fn add(&mut self, t: &Trait) -> bool {
        let changed = self.add_uncommitted(t);
        if changed {
            self.commit();
        }
        changed
    }

    /// Select a trait without persisting (bulk load only)
    pub fn add_uncommitted(&mut self, t: &Trait) -> bool {
        if self.contains(&t.name) {
            return false;
        }
        self.selected.push(t.clone());
        true
    }

    /// Deselect by name and persist. Returns false if it was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.selected.iter().position(|t| t.name == name) {
            Some(i) => {
                self.selected.remove(i);
                self.commit();
                true
            }
            None => false,
        }
    }

    /// Drop every selected trait (single write)
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.commit();
    }

    /// Replace the whole selection (single write), keeping the first
    /// occurrence of repeated names
    pub fn replace_all(&mut self, traits: &[Trait]) {
        self.selected.clear();
        for t in traits {
            self.add_uncommitted(t);
        }
        self.commit();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selected.iter().any(|t| t.name == name)
    }

    /// Whether a catalog tile for this trait should be clickable
    pub fn is_available(&self, t: &Trait) -> bool {
        !self.contains(&t.name)
    }

    pub fn traits(&self) -> &[Trait] {
        &self.selected
    }

    pub fn names(&self) -> Vec<String> {
        self.selected.iter().map(|t| t.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn total_cost(&self) -> u32 {
        self.selected.iter().map(|t| t.cost).sum()
    }

    pub fn label_text(&self) -> String {
        if self.selected.is_empty() {
            "Selected Traits".to_string()
        } else {
            format!(
                "Selected Traits ({} traits, {} upgrade points)",
                self.selected.len(),
                self.total_cost()
            )
        }
    }

    fn commit(&self) {
        let Some(store) = &self.store else {
            return;
        };
        match store.save(&self.names()) {
            Ok(()) => log::debug!("Saved {} traits to {}", self.selected.len(), store.path().display()),
            Err(e) => log::warn!("Failed to save preset: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Trait::new("A", 2, "Test"),
            Trait::new("B", 3, "Test"),
            Trait::new("C", 1, "Test"),
            Trait::new("Doctor", 3, "Healing"),
        ])
        .unwrap()
    }

    fn pick<'a>(catalog: &'a Catalog, name: &str) -> &'a Trait {
        catalog.get(name).unwrap()
    }

    #[test]
    fn test_label_scenario() {
        let catalog = catalog();
        let mut state = SelectionState::in_memory();
        assert_eq!(state.label_text(), "Selected Traits");

        state.add(pick(&catalog, "A"));
        assert_eq!(state.label_text(), "Selected Traits (1 traits, 2 upgrade points)");

        state.add(pick(&catalog, "B"));
        assert_eq!(state.label_text(), "Selected Traits (2 traits, 5 upgrade points)");

        state.remove("A");
        assert_eq!(state.label_text(), "Selected Traits (1 traits, 3 upgrade points)");
    }

    #[test]
    fn test_add_twice_is_noop() {
        let catalog = catalog();
        let mut state = SelectionState::in_memory();

        assert!(state.add(pick(&catalog, "B")));
        assert!(state.add(pick(&catalog, "A")));
        assert!(!state.add(pick(&catalog, "B")));
        assert_eq!(state.names(), vec!["B", "A"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let catalog = catalog();
        let mut state = SelectionState::in_memory();
        state.add(pick(&catalog, "A"));

        assert!(!state.remove("B"));
        assert!(!state.remove("Nonexistent"));
        assert_eq!(state.names(), vec!["A"]);
    }

    #[test]
    fn test_availability_follows_selection() {
        let catalog = catalog();
        let mut state = SelectionState::in_memory();
        let a = pick(&catalog, "A");

        assert!(state.is_available(a));
        state.add(a);
        assert!(!state.is_available(a));
        state.remove("A");
        assert!(state.is_available(a));
    }

    #[test]
    fn test_commits_write_preset_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.json");
        let catalog = catalog();
        let mut state = SelectionState::new(PresetStore::new(&path));

        state.add(pick(&catalog, "Doctor"));
        state.add(pick(&catalog, "A"));
        assert_eq!(PresetStore::new(&path).load().unwrap(), vec!["Doctor", "A"]);

        state.remove("Doctor");
        assert_eq!(PresetStore::new(&path).load().unwrap(), vec!["A"]);

        state.clear();
        assert!(PresetStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_uncommitted_add_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.json");
        let catalog = catalog();
        let mut state = SelectionState::new(PresetStore::new(&path));

        state.add_uncommitted(pick(&catalog, "A"));
        assert!(!path.exists());
    }

    #[test]
    fn test_restore_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.json");
        let catalog = catalog();

        let mut state = SelectionState::new(PresetStore::new(&path));
        for name in ["C", "Doctor", "A"] {
            state.add(pick(&catalog, name));
        }

        let restored = SelectionState::restore(&catalog, PresetStore::new(&path));
        assert_eq!(restored.names(), vec!["C", "Doctor", "A"]);
    }

    #[test]
    fn test_restore_drops_unknown_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.json");
        fs::write(&path, r#"["B", "Removed Trait", "A", "Old Trait"]"#).unwrap();

        let restored = SelectionState::restore(&catalog(), PresetStore::new(&path));
        assert_eq!(restored.names(), vec!["B", "A"]);
    }

    #[test]
    fn test_restore_does_not_rewrite_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.json");
        let original = r#"["B", "Removed Trait"]"#;
        fs::write(&path, original).unwrap();

        let _ = SelectionState::restore(&catalog(), PresetStore::new(&path));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_restore_missing_or_corrupt_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = SelectionState::restore(&catalog(), PresetStore::new(dir.path().join("nope.json")));
        assert!(missing.is_empty());

        let corrupt_path = dir.path().join("corrupt.json");
        fs::write(&corrupt_path, "[\"A\", ").unwrap();
        let corrupt = SelectionState::restore(&catalog(), PresetStore::new(&corrupt_path));
        assert!(corrupt.is_empty());
    }

    #[test]
    fn test_save_failure_keeps_session_alive() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog();
        let mut state =
            SelectionState::new(PresetStore::new(dir.path().join("missing").join("preset.json")));

        assert!(state.add(pick(&catalog, "A")));
        assert_eq!(state.names(), vec!["A"]);
    }

    #[test]
    fn test_replace_all_dedups() {
        let catalog = catalog();
        let mut state = SelectionState::in_memory();
        state.add(pick(&catalog, "C"));

        let a = pick(&catalog, "A").clone();
        let b = pick(&catalog, "B").clone();
        state.replace_all(&[b.clone(), a, b]);
        assert_eq!(state.names(), vec!["B", "A"]);
    }

    proptest! {
        #[test]
        fn prop_label_matches_selection(ops in prop::collection::vec((any::<bool>(), 0usize..4), 0..40)) {
            let catalog = catalog();
            let all: Vec<&Trait> = catalog.iter().collect();
            let mut state = SelectionState::in_memory();

            for (is_add, idx) in ops {
                let t = all[idx];
                if is_add {
                    state.add(t);
                } else {
                    state.remove(&t.name);
                }
            }

            let expected_cost: u32 = state.traits().iter().map(|t| t.cost).sum();
            prop_assert_eq!(state.total_cost(), expected_cost);

            let mut names = state.names();
            let count = names.len();
            names.sort();
            names.dedup();
            prop_assert_eq!(names.len(), count);

            if count == 0 {
                prop_assert_eq!(state.label_text(), "Selected Traits");
            } else {
                prop_assert_eq!(
                    state.label_text(),
                    format!("Selected Traits ({} traits, {} upgrade points)", count, expected_cost)
                );
            }
        }
    }
}
