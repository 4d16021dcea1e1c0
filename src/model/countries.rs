use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::StartupError;

/// Country name to aggregator code lookup, in the order the data file lists them.
///
/// Built once at startup and shared read-only by every worker.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl CountryRegistry {
    /// Load the registry from a JSON object of `"Country Name": "CODE"` pairs.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file is unreadable, is not a JSON object, holds a
    /// non-string code or an empty name.
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StartupError::Registry(format!("The country file '{}' is not readable: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// # Errors
    ///
    /// Same conditions as [`CountryRegistry::load`], minus the file access.
    pub fn from_json(contents: &str) -> Result<Self, StartupError> {
        let json: Value = serde_json::from_str(contents)?;
        let Value::Object(map) = json else {
            return Err(StartupError::Registry(
                "The country file is not in the correct format. Expected an object.".to_string(),
            ));
        };

        let mut pairs = Vec::with_capacity(map.len());
        for (name, code) in map {
            let Value::String(code) = code else {
                return Err(StartupError::Registry(format!(
                    "The code for '{name}' is not in the correct format. Expected a string."
                )));
            };
            pairs.push((name, code));
        }
        Self::from_pairs(pairs)
    }

    /// Build a registry from name/code pairs. A repeated name keeps its first
    /// position and its last code.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any name is blank.
    pub fn from_pairs<I, N, C>(pairs: I) -> Result<Self, StartupError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut registry = Self::default();
        for (name, code) in pairs {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(StartupError::Registry("Country names must not be empty.".to_string()));
            }
            let code = code.into();
            match registry.index.get(&name) {
                Some(&idx) => registry.entries[idx].1 = code,
                None => {
                    registry.index.insert(name.clone(), registry.entries.len());
                    registry.entries.push((name, code));
                }
            }
        }
        Ok(registry)
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn code(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Every name whose uppercased form contains the uppercased fragment.
    /// An empty fragment matches everything.
    #[must_use]
    pub fn autocomplete(&self, fragment: &str) -> Vec<&str> {
        let needle = fragment.to_uppercase();
        self.names()
            .filter(|name| name.to_uppercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
