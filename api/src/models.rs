use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `GET /models`: task name → ordered algorithm names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    pub tasks: BTreeMap<String, Vec<String>>,
}

impl ModelCatalog {
    pub fn algorithms_for(&self, task: &str) -> &[String] {
        self.tasks.get(task).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_listing_preserving_algorithm_order() {
        let catalog: ModelCatalog = serde_json::from_value(json!({
            "classification": ["RandomForest", "LogisticRegression", "SVC"],
            "clustering": ["KMeans", "DBSCAN"]
        }))
        .unwrap();

        assert_eq!(
            catalog.algorithms_for("classification"),
            ["RandomForest", "LogisticRegression", "SVC"]
        );
        assert_eq!(catalog.algorithms_for("clustering"), ["KMeans", "DBSCAN"]);
        assert!(catalog.algorithms_for("regression").is_empty());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn empty_catalog_reports_empty() {
        assert!(ModelCatalog::default().is_empty());
    }
}
