use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("unknown skill: {0}")]
    UnknownSkill(String),
}

/// The closed set of skills an assistant reply may trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillName {
    SearchProjects,
    SearchCustomers,
    ExportCsv,
    BookMeeting,
}

impl SkillName {
    pub const ALL: [SkillName; 4] = [
        SkillName::SearchProjects,
        SkillName::SearchCustomers,
        SkillName::ExportCsv,
        SkillName::BookMeeting,
    ];

    /// Tag name as it appears on the wire, e.g. `SEARCH_PROJECTS`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            SkillName::SearchProjects => "SEARCH_PROJECTS",
            SkillName::SearchCustomers => "SEARCH_CUSTOMERS",
            SkillName::ExportCsv => "EXPORT_CSV",
            SkillName::BookMeeting => "BOOK_MEETING",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SkillName::SearchProjects => "Search projects",
            SkillName::SearchCustomers => "Search customers",
            SkillName::ExportCsv => "Export CSV",
            SkillName::BookMeeting => "Book a meeting",
        }
    }

    /// Prompt shown when the skill is started from the palette.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            SkillName::SearchProjects => " SEARCH PROJECTS ",
            SkillName::SearchCustomers => " SEARCH CUSTOMERS ",
            SkillName::ExportCsv => " EXPORT SCOPE (projects / customers) ",
            SkillName::BookMeeting => " MEETING TOPIC ",
        }
    }

    /// Affordance skills render as a button on the reply instead of running
    /// as soon as the reply arrives.
    #[must_use]
    pub fn is_affordance(&self) -> bool {
        matches!(self, SkillName::BookMeeting)
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SkillName {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillName::ALL
            .into_iter()
            .find(|skill| skill.tag() == s)
            .ok_or_else(|| SkillError::UnknownSkill(s.to_string()))
    }
}
