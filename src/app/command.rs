use crate::domain::skill::SkillName;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunSkill {
        ticket: u64,
        skill: SkillName,
        param: String,
    },
    LoadPaletteHint(u64),
    LoadTranscript(PathBuf),
    Batch(Vec<Command>),
}

impl Command {
    /// Folds several side effects into one, or none.
    #[must_use]
    pub fn batch(mut commands: Vec<Command>) -> Option<Command> {
        match commands.len() {
            0 => None,
            1 => commands.pop(),
            _ => Some(Command::Batch(commands)),
        }
    }
}
