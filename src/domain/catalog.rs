use crate::domain::models::{Customer, ExportScope, Project};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub projects: usize,
    pub customers: usize,
}

/// Data access behind the search and export skills.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillBackend: Send + Sync {
    async fn search_projects(&self, query: &str) -> Result<Vec<Project>>;

    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>>;

    // Writes a CSV and returns where it landed
    async fn export_csv(&self, scope: ExportScope) -> Result<PathBuf>;

    async fn summary(&self) -> Result<CatalogSummary>;
}
