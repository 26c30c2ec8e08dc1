// Trait catalog - immutable reference data built once at startup
use std::collections::HashMap;
use crate::error::CatalogError;

mod builtin;

/// A named, costed character upgrade. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trait {
    pub name: String,
    pub cost: u32,
    pub category: String,
}

impl Trait {
    pub fn new(name: &str, cost: u32, category: &str) -> Self {
        Self {
            name: name.to_string(),
            cost,
            category: category.to_string(),
        }
    }
}

/// All known traits, sorted by name, with a name index.
#[derive(Debug)]
pub struct Catalog {
    traits: Vec<Trait>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(mut traits: Vec<Trait>) -> Result<Self, CatalogError> {
        traits.sort_by(|a, b| a.name.cmp(&b.name));

        let mut index = HashMap::with_capacity(traits.len());
        for (i, t) in traits.iter().enumerate() {
            if index.insert(t.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateTrait(t.name.clone()));
            }
        }

        Ok(Self { traits, index })
    }

    /// The traits shipped with the application
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            builtin::TRAITS
                .iter()
                .map(|(name, cost, category)| Trait::new(name, *cost, category))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Trait> {
        self.index.get(name).map(|&i| &self.traits[i])
    }

    /// Traits in display order (by name)
    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_by_name() {
        let catalog = Catalog::new(vec![
            Trait::new("Necromancer", 5, "Healing"),
            Trait::new("Doctor", 3, "Healing"),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Doctor", "Necromancer"]);
        assert_eq!(catalog.get("Necromancer").unwrap().cost, 5);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = Catalog::new(vec![
            Trait::new("Doctor", 3, "Healing"),
            Trait::new("Doctor", 2, "Healing"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateTrait(name)) if name == "Doctor"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::new(vec![Trait::new("Doctor", 3, "Healing")]).unwrap();
        assert!(catalog.get("Doctor").is_some());
        assert!(catalog.get("doctor").is_none());
        assert!(catalog.get("Physician").is_none());
    }

    #[test]
    fn test_builtin_is_consistent() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() > 20);
        for (i, t) in catalog.iter().enumerate() {
            assert_eq!(catalog.get(&t.name), Some(t));
            if i > 0 {
                assert!(catalog.traits[i - 1].name < t.name);
            }
        }
        assert!(catalog.get("Doctor").is_some());
    }
}
