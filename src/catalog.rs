use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "exercicios")]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
}

type Durations = BTreeMap<String, Workout>;
type Levels = BTreeMap<String, Durations>;

/// Static routine dataset keyed by category, level and duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<String, Levels>,
}

impl Catalog {
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = fs::read(path).await.map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn lookup(&self, category: &str, level: &str, duration: &str) -> Option<&Workout> {
        self.categories.get(category)?.get(level)?.get(duration)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn levels(&self) -> Vec<&str> {
        let levels: BTreeSet<&str> = self
            .categories
            .values()
            .flat_map(|levels| levels.keys().map(String::as_str))
            .collect();
        levels.into_iter().collect()
    }

    /// Selectable durations, numeric keys in ascending minute order.
    pub fn durations(&self) -> Vec<&str> {
        let durations: BTreeSet<&str> = self
            .categories
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(|durations| durations.keys().map(String::as_str))
            .collect();
        let mut durations: Vec<&str> = durations.into_iter().collect();
        durations.sort_by_key(|key| (key.parse::<u32>().unwrap_or(u32::MAX), *key));
        durations
    }
}
