use crate::app::{action::Action, command::Command};
use crate::domain::{
    catalog::SkillBackend,
    models::{Customer, ExportScope, Project, SkillOutput},
    skill::SkillName,
    transcript::split_replies,
};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Runs a reducer side effect in the background. Results come back on `tx`;
/// nothing here blocks the event loop.
pub fn handle_command(
    command: Command,
    backend: Arc<dyn SkillBackend>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::RunSkill {
            ticket,
            skill,
            param,
        } => {
            tokio::spawn(async move {
                let result = run_skill(backend.as_ref(), skill, &param)
                    .await
                    .map_err(|e| {
                        warn!(%skill, ticket, error = %format!("{e:#}"), "skill failed");
                        format!("{e:#}")
                    });
                let _ = tx
                    .send(Action::SkillCompleted {
                        ticket,
                        skill,
                        param,
                        result,
                    })
                    .await;
            });
        }
        Command::LoadPaletteHint(generation) => {
            tokio::spawn(async move {
                match backend.summary().await {
                    Ok(summary) => {
                        let _ = tx
                            .send(Action::PaletteHint(
                                generation,
                                format!(
                                    "{} projects · {} customers",
                                    summary.projects, summary.customers
                                ),
                            ))
                            .await;
                    }
                    Err(e) => debug!(error = %e, "no palette hint"),
                }
            });
        }
        Command::LoadTranscript(path) => {
            tokio::spawn(async move {
                match tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("reading transcript {}", path.display()))
                {
                    Ok(content) => {
                        let _ = tx
                            .send(Action::TranscriptLoaded(split_replies(&content)))
                            .await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::ErrorOccurred(format!("{e:#}"))).await;
                    }
                }
            });
        }
        Command::Batch(commands) => {
            for command in commands {
                handle_command(command, backend.clone(), tx.clone())?;
            }
        }
    }
    Ok(())
}

pub async fn run_skill(
    backend: &dyn SkillBackend,
    skill: SkillName,
    param: &str,
) -> Result<SkillOutput> {
    match skill {
        SkillName::SearchProjects => {
            let projects = backend.search_projects(param).await?;
            Ok(project_table(param, &projects))
        }
        SkillName::SearchCustomers => {
            let customers = backend.search_customers(param).await?;
            Ok(customer_table(param, &customers))
        }
        SkillName::ExportCsv => {
            let path = backend.export_csv(ExportScope::from_param(param)).await?;
            Ok(SkillOutput::File(path))
        }
        SkillName::BookMeeting => bail!("{skill} is shown in the UI and has no backend action"),
    }
}

fn search_title(kind: &str, query: &str) -> String {
    if query.trim().is_empty() {
        format!("All {kind}")
    } else {
        format!("{kind} matching \"{}\"", query.trim())
    }
}

fn project_table(query: &str, projects: &[Project]) -> SkillOutput {
    SkillOutput::Table {
        title: search_title("Projects", query),
        columns: ["Name", "Status", "City", "Customer"]
            .map(String::from)
            .to_vec(),
        rows: projects
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.status.clone(),
                    p.city.clone(),
                    p.customer.clone(),
                ]
            })
            .collect(),
    }
}

fn customer_table(query: &str, customers: &[Customer]) -> SkillOutput {
    SkillOutput::Table {
        title: search_title("Customers", query),
        columns: ["Name", "Email", "City"].map(String::from).to_vec(),
        rows: customers
            .iter()
            .map(|c| vec![c.name.clone(), c.email.clone(), c.city.clone()])
            .collect(),
    }
}
