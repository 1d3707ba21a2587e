/// Decade and hit records
pub mod entities;
/// Genre badge colours
pub mod styling;
/// Video id extraction and embed URLs
pub mod video;

use std::path::Path;

use log::debug;

use crate::errors::{Error, Result};
pub use entities::{Decade, Hit};

const EMBEDDED_DECADES: &str = include_str!("../../data/decades.json");

/// Read-only list of decades, in timeline order.
#[derive(Debug, Clone)]
pub struct Catalog {
    decades: Vec<Decade>,
}

impl Catalog {
    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DECADES)
    }

    /// Parse a JSON array of decades.
    pub fn from_json(data: &str) -> Result<Self> {
        let decades: Vec<Decade> = serde_json::from_str(data)?;
        debug!("Loaded {} decades", decades.len());
        Ok(Catalog { decades })
    }

    /// Read and parse a decades file.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let data = tokio::fs::read_to_string(path).await?;
        debug!("Read decade data from {path:?}");
        Self::from_json(&data)
    }

    /// Load from `path` when given, otherwise use the embedded dataset.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p).await,
            None => Self::embedded(),
        }
    }

    /// All decades, oldest first.
    pub fn decades(&self) -> &[Decade] {
        &self.decades
    }

    /// Look up a decade by id.
    pub fn get(&self, id: &str) -> Option<&Decade> {
        self.decades.iter().find(|d| d.id == id)
    }

    /// Like [`Catalog::get`], but unknown ids are an error.
    pub fn require(&self, id: &str) -> Result<&Decade> {
        self.get(id).ok_or_else(|| Error::UnknownDecade(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.decades().is_empty());
        assert_eq!(catalog.decades()[0].id, "1900s");
    }

    #[test]
    fn test_embedded_ids_are_unique() {
        let catalog = Catalog::embedded().unwrap();
        let mut ids: Vec<_> = catalog.decades().iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.decades().len());
    }

    #[test]
    fn test_preview_hits_are_listed_in_all_hits() {
        let catalog = Catalog::embedded().unwrap();
        for decade in catalog.decades() {
            for hit in &decade.preview_hits {
                assert!(decade.all_hits.contains(hit), "{} in {}", hit.title, decade.id);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.get("1980s").unwrap().name, "שנות ה-80");
        assert!(catalog.get("1880s").is_none());
        assert!(matches!(catalog.require("1880s"), Err(Error::UnknownDecade(id)) if id == "1880s"));
    }

    #[test]
    fn test_from_json_rejects_malformed_data() {
        let result = Catalog::from_json(r#"[{"id": "1950s"}]"#);
        assert!(matches!(result, Err(Error::DataError(_))));
    }

    #[tokio::test]
    async fn test_load_without_path_uses_embedded() {
        let catalog = Catalog::load(None).await.unwrap();
        assert_eq!(catalog.decades().len(), Catalog::embedded().unwrap().decades().len());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Catalog::load(Some(Path::new("/nonexistent/decades.json"))).await;
        assert!(matches!(
            result,
            Err(Error::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
