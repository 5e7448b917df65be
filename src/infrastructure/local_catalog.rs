use crate::domain::{
    catalog::{CatalogSummary, SkillBackend},
    models::{Customer, ExportScope, Project},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    customers: Vec<Customer>,
}

/// A TOML file of projects and customers standing in for the hosted query
/// API. Searches are case-insensitive substring matches; exports are CSV
/// files written under `export_dir`.
pub struct LocalCatalog {
    projects: Vec<Project>,
    customers: Vec<Customer>,
    export_dir: PathBuf,
}

impl LocalCatalog {
    pub fn new(projects: Vec<Project>, customers: Vec<Customer>, export_dir: PathBuf) -> Self {
        Self {
            projects,
            customers,
            export_dir,
        }
    }

    /// Loads the catalog at `path`. A missing file is an empty catalog.
    pub fn load(path: &Path, export_dir: PathBuf) -> Result<Self, CatalogError> {
        if !path.exists() {
            debug!(?path, "catalog file does not exist, starting empty");
            return Ok(Self::new(Vec::new(), Vec::new(), export_dir));
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            ?path,
            projects = file.projects.len(),
            customers = file.customers.len(),
            "catalog loaded"
        );
        Ok(Self::new(file.projects, file.customers, export_dir))
    }

    fn export_path(&self, scope: ExportScope) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        self.export_dir
            .join(format!("paver-{}-{stamp}.csv", scope.label()))
    }

    fn render_csv(&self, scope: ExportScope) -> String {
        let mut out = String::new();
        match scope {
            ExportScope::Projects => {
                push_csv_row(&mut out, &["id", "name", "status", "city", "customer"]);
                for p in &self.projects {
                    push_csv_row(&mut out, &[&p.id.0, &p.name, &p.status, &p.city, &p.customer]);
                }
            }
            ExportScope::Customers => {
                push_csv_row(&mut out, &["id", "name", "email", "city"]);
                for c in &self.customers {
                    push_csv_row(&mut out, &[&c.id.0, &c.name, &c.email, &c.city]);
                }
            }
        }
        out
    }
}

fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

fn push_csv_row(out: &mut String, fields: &[&str]) {
    let escaped: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[async_trait]
impl SkillBackend for LocalCatalog {
    async fn search_projects(&self, query: &str) -> Result<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| matches_query(query, &[&p.name, &p.status, &p.city, &p.customer]))
            .cloned()
            .collect())
    }

    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>> {
        Ok(self
            .customers
            .iter()
            .filter(|c| matches_query(query, &[&c.name, &c.email, &c.city]))
            .cloned()
            .collect())
    }

    async fn export_csv(&self, scope: ExportScope) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .with_context(|| format!("creating {}", self.export_dir.display()))?;

        let path = self.export_path(scope);
        tokio::fs::write(&path, self.render_csv(scope))
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    async fn summary(&self) -> Result<CatalogSummary> {
        Ok(CatalogSummary {
            projects: self.projects.len(),
            customers: self.customers.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RecordId;

    const CATALOG: &str = r#"
[[projects]]
id = "p-1"
name = "Kitchen remodel"
status = "active"
city = "Boise"
customer = "Alvarez"

[[projects]]
id = "p-2"
name = "Deck, phase 2"
status = "bidding"
city = "Eagle"

[[customers]]
id = "c-1"
name = "Alvarez Family"
email = "alvarez@example.com"
city = "Boise"
"#;

    fn load_fixture(dir: &Path) -> LocalCatalog {
        let path = dir.join("catalog.toml");
        std::fs::write(&path, CATALOG).unwrap();
        LocalCatalog::load(&path, dir.join("exports")).unwrap()
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_fixture(dir.path());

        let hits = catalog.search_projects("KITCHEN").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, RecordId("p-1".to_string()));

        let by_city = catalog.search_projects("boise").await.unwrap();
        assert_eq!(by_city.len(), 1);

        let all = catalog.search_projects("  ").await.unwrap();
        assert_eq!(all.len(), 2);

        let customers = catalog.search_customers("example.com").await.unwrap();
        assert_eq!(customers.len(), 1);
    }

    #[tokio::test]
    async fn test_export_writes_escaped_csv() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_fixture(dir.path());

        let path = catalog.export_csv(ExportScope::Projects).await.unwrap();
        assert!(path.starts_with(dir.path().join("exports")));

        let csv = std::fs::read_to_string(path).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "id,name,status,city,customer");
        assert_eq!(lines[1], "p-1,Kitchen remodel,active,Boise,Alvarez");
        assert_eq!(lines[2], "p-2,\"Deck, phase 2\",bidding,Eagle,");
    }

    #[tokio::test]
    async fn test_missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog =
            LocalCatalog::load(&dir.path().join("nope.toml"), dir.path().to_path_buf()).unwrap();
        assert_eq!(catalog.summary().await.unwrap(), CatalogSummary::default());
    }

    #[test]
    fn test_invalid_catalog_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "[[projects]]\nname = 3").unwrap();
        let err = LocalCatalog::load(&path, dir.path().to_path_buf())
            .err()
            .unwrap();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_export_scope_from_param() {
        assert_eq!(ExportScope::from_param("Customers"), ExportScope::Customers);
        assert_eq!(ExportScope::from_param("customer list"), ExportScope::Customers);
        assert_eq!(ExportScope::from_param(""), ExportScope::Projects);
        assert_eq!(ExportScope::from_param("jobs"), ExportScope::Projects);
    }
}
