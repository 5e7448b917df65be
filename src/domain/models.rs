use chrono::{DateTime, Local};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::skill::SkillName;
use super::trigger::Trigger;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub customer: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
}

/// Which slice of the catalog an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Projects,
    Customers,
}

impl ExportScope {
    /// Anything that isn't clearly customers exports projects.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        if param.trim().to_lowercase().starts_with("customer") {
            ExportScope::Customers
        } else {
            ExportScope::Projects
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExportScope::Projects => "projects",
            ExportScope::Customers => "customers",
        }
    }
}

/// What a skill produced, ready for the result panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillOutput {
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    File(PathBuf),
    Booking {
        topic: String,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillResult {
    pub ticket: u64,
    pub skill: SkillName,
    pub param: String,
    pub output: SkillOutput,
    pub finished_at: DateTime<Local>,
}

/// One ingested assistant reply.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: usize,
    pub received_at: DateTime<Local>,
    pub cleaned_text: String,
    pub triggers: Vec<Trigger>,
    /// Triggers rendered as buttons on the entry rather than run on arrival.
    pub affordances: Vec<(SkillName, String)>,
}
