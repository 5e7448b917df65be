use super::action::Action;
use super::state::Panel;
use crate::domain::{skill::SkillName, trigger::Trigger};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    Skills,
    Navigation,
    View,
    Session,
}

impl CommandCategory {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CommandCategory::Skills => "Skills",
            CommandCategory::Navigation => "Navigate",
            CommandCategory::View => "View",
            CommandCategory::Session => "Session",
        }
    }
}

/// What committing a command does: dispatch an action, or move focus.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandTarget {
    Action(Action),
    Navigate(Panel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub category: CommandCategory,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub target: CommandTarget,
}

#[must_use]
pub fn get_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            id: "skills.search-projects",
            category: CommandCategory::Skills,
            icon: "⌕",
            label: "Search Projects",
            description: "Find projects by name, status or city",
            keywords: &["find", "jobs", "lookup"],
            target: CommandTarget::Action(Action::SkillPromptIntent(SkillName::SearchProjects)),
        },
        CommandDefinition {
            id: "skills.search-customers",
            category: CommandCategory::Skills,
            icon: "⌕",
            label: "Search Customers",
            description: "Find customers by name, email or city",
            keywords: &["find", "clients", "contacts", "lookup"],
            target: CommandTarget::Action(Action::SkillPromptIntent(SkillName::SearchCustomers)),
        },
        CommandDefinition {
            id: "skills.export-projects",
            category: CommandCategory::Skills,
            icon: "⇩",
            label: "Export Projects",
            description: "Write every project to a CSV file",
            keywords: &["csv", "download", "spreadsheet"],
            target: CommandTarget::Action(Action::RunSkill(Trigger::new(
                SkillName::ExportCsv.tag(),
                "projects",
            ))),
        },
        CommandDefinition {
            id: "skills.export-customers",
            category: CommandCategory::Skills,
            icon: "⇩",
            label: "Export Customers",
            description: "Write every customer to a CSV file",
            keywords: &["csv", "download", "spreadsheet", "clients"],
            target: CommandTarget::Action(Action::RunSkill(Trigger::new(
                SkillName::ExportCsv.tag(),
                "customers",
            ))),
        },
        CommandDefinition {
            id: "skills.book-meeting",
            category: CommandCategory::Skills,
            icon: "◷",
            label: "Book Meeting",
            description: "Open the booking widget",
            keywords: &["calendar", "schedule", "demo", "call"],
            target: CommandTarget::Action(Action::SkillPromptIntent(SkillName::BookMeeting)),
        },
        CommandDefinition {
            id: "nav.transcript",
            category: CommandCategory::Navigation,
            icon: "→",
            label: "Go to Transcript",
            description: "Focus the assistant replies",
            keywords: &["focus", "replies", "chat"],
            target: CommandTarget::Navigate(Panel::Transcript),
        },
        CommandDefinition {
            id: "nav.results",
            category: CommandCategory::Navigation,
            icon: "→",
            label: "Go to Results",
            description: "Focus the skill results panel",
            keywords: &["focus", "output", "table"],
            target: CommandTarget::Navigate(Panel::Results),
        },
        CommandDefinition {
            id: "nav.latest",
            category: CommandCategory::Navigation,
            icon: "↓",
            label: "Latest Reply",
            description: "Jump to the newest assistant reply",
            keywords: &["bottom", "end", "newest"],
            target: CommandTarget::Action(Action::SelectLastEntry),
        },
        CommandDefinition {
            id: "view.toggle-results",
            category: CommandCategory::View,
            icon: "▥",
            label: "Toggle Results",
            description: "Show or hide the results panel",
            keywords: &["panel", "layout", "hide", "show"],
            target: CommandTarget::Action(Action::ToggleResults),
        },
        CommandDefinition {
            id: "view.clear-results",
            category: CommandCategory::View,
            icon: "✕",
            label: "Clear Results",
            description: "Discard the current result and history",
            keywords: &["reset", "empty"],
            target: CommandTarget::Action(Action::ClearResults),
        },
        CommandDefinition {
            id: "view.help",
            category: CommandCategory::View,
            icon: "?",
            label: "Help",
            description: "Show the key bindings",
            keywords: &["keys", "shortcuts", "bindings"],
            target: CommandTarget::Action(Action::ToggleHelp),
        },
        CommandDefinition {
            id: "session.paste-reply",
            category: CommandCategory::Session,
            icon: "✎",
            label: "Paste Reply",
            description: "Ingest an assistant reply typed or pasted by hand",
            keywords: &["input", "message", "add"],
            target: CommandTarget::Action(Action::PasteReplyIntent),
        },
        CommandDefinition {
            id: "session.reload",
            category: CommandCategory::Session,
            icon: "↻",
            label: "Reload Transcript",
            description: "Re-read the transcript file for new replies",
            keywords: &["refresh", "sync", "file"],
            target: CommandTarget::Action(Action::ReloadTranscript),
        },
        CommandDefinition {
            id: "session.quit",
            category: CommandCategory::Session,
            icon: "⏻",
            label: "Quit",
            description: "Quit Paver",
            keywords: &["exit", "close"],
            target: CommandTarget::Action(Action::Quit),
        },
    ]
}

/// The registry shared by every palette session.
#[must_use]
pub fn registry() -> Arc<[CommandDefinition]> {
    get_commands().into()
}

fn is_match(cmd: &CommandDefinition, query_lower: &str) -> bool {
    cmd.label.to_lowercase().contains(query_lower)
        || cmd.description.to_lowercase().contains(query_lower)
        || cmd
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query_lower))
}

/// Indices of the commands matching `query`, in registry order.
#[must_use]
pub fn search_commands(query: &str, registry: &[CommandDefinition]) -> Vec<usize> {
    if query.is_empty() {
        return (0..registry.len()).collect();
    }

    let query_lower = query.to_lowercase();
    registry
        .iter()
        .enumerate()
        .filter(|(_, cmd)| is_match(cmd, &query_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Case-insensitive substring filter over label, description and keywords.
/// Stable: matches keep their registry order.
#[must_use]
pub fn filter_commands<'r>(
    query: &str,
    registry: &'r [CommandDefinition],
) -> Vec<&'r CommandDefinition> {
    search_commands(query, registry)
        .into_iter()
        .map(|i| &registry[i])
        .collect()
}
