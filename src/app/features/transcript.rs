use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::{models::TranscriptEntry, skill::SkillName, trigger};
use tracing::{debug, info};

use super::skills;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNextEntry => {
            state.transcript.select_next();
            UpdateResult::Handled(None)
        }
        Action::SelectPrevEntry => {
            state.transcript.select_prev();
            UpdateResult::Handled(None)
        }
        Action::SelectLastEntry => {
            state.transcript.select_last();
            UpdateResult::Handled(None)
        }
        Action::NextButton => {
            state.transcript.next_button();
            UpdateResult::Handled(None)
        }
        Action::PrevButton => {
            state.transcript.prev_button();
            UpdateResult::Handled(None)
        }
        Action::ActivateAffordance => {
            let affordance = state.transcript.selected_affordance().cloned();
            UpdateResult::Handled(
                affordance.and_then(|(skill, param)| skills::start_skill(state, skill, param)),
            )
        }
        Action::IngestReply(text) => UpdateResult::Handled(ingest_reply(state, text)),
        Action::ReloadTranscript | Action::ExternalChangeDetected => {
            UpdateResult::Handled(state.transcript_path.clone().map(Command::LoadTranscript))
        }
        Action::TranscriptLoaded(replies) => {
            let seen = state.transcript.file_replies;
            if replies.len() < seen {
                debug!(seen, now = replies.len(), "transcript file shrank");
            }
            let fresh: Vec<String> = replies.iter().skip(seen).cloned().collect();
            state.transcript.file_replies = replies.len();

            let commands = fresh
                .iter()
                .filter_map(|reply| ingest_reply(state, reply))
                .collect();
            UpdateResult::Handled(Command::batch(commands))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Parses a reply once, appends the cleaned text, and starts every trigger
/// that isn't an affordance. Affordances become buttons on the entry.
pub fn ingest_reply(state: &mut AppState, text: &str) -> Option<Command> {
    let parsed = trigger::parse(text);
    let mut affordances = Vec::new();
    let mut commands = Vec::new();

    for trigger in &parsed.triggers {
        match trigger.skill_name.parse::<SkillName>() {
            Ok(skill) if skill.is_affordance() => affordances.push((skill, trigger.param.clone())),
            Ok(skill) => commands.extend(skills::start_skill(state, skill, trigger.param.clone())),
            Err(err) => skills::report_unknown(state, &err),
        }
    }

    let id = state.transcript.entries.len();
    info!(
        entry = id,
        triggers = parsed.triggers.len(),
        affordances = affordances.len(),
        "reply ingested"
    );
    state.transcript.entries.push(TranscriptEntry {
        id,
        received_at: chrono::Local::now(),
        cleaned_text: parsed.cleaned_text,
        triggers: parsed.triggers,
        affordances,
    });
    state.transcript.select_last();

    Command::batch(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::AppMode;
    use std::path::PathBuf;

    #[test]
    fn test_reply_is_cleaned_and_dispatched() {
        let mut state = AppState::default();
        let cmd = reducer::update(
            &mut state,
            Action::IngestReply(
                "Let me check. [SKILL:SEARCH_PROJECTS:kitchen remodel] One sec.".to_string(),
            ),
        );

        let entry = &state.transcript.entries[0];
        assert_eq!(entry.cleaned_text, "Let me check.  One sec.");
        assert_eq!(entry.triggers.len(), 1);
        assert!(entry.affordances.is_empty());
        assert_eq!(
            cmd,
            Some(Command::RunSkill {
                ticket: 1,
                skill: SkillName::SearchProjects,
                param: "kitchen remodel".to_string(),
            })
        );
        assert_eq!(state.transcript.list_state.selected(), Some(0));
    }

    #[test]
    fn test_booking_becomes_a_button() {
        let mut state = AppState::default();
        let cmd = reducer::update(
            &mut state,
            Action::IngestReply(
                "Happy to walk you through it. [SKILL:BOOK_MEETING:demo] [SKILL:EXPORT_CSV:projects]"
                    .to_string(),
            ),
        );

        // Only the export runs on arrival
        assert!(matches!(
            cmd,
            Some(Command::RunSkill {
                skill: SkillName::ExportCsv,
                ..
            })
        ));
        assert_eq!(
            state.transcript.entries[0].affordances,
            vec![(SkillName::BookMeeting, "demo".to_string())]
        );
        assert_eq!(state.mode, AppMode::Normal);

        reducer::update(&mut state, Action::ActivateAffordance);
        assert_eq!(state.mode, AppMode::Booking);
        assert_eq!(state.booking.as_ref().map(|b| b.topic.as_str()), Some("demo"));
    }

    #[test]
    fn test_second_button_can_be_pressed() {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::IngestReply(
                "Pick one: [SKILL:BOOK_MEETING:intro] [SKILL:BOOK_MEETING:pricing]".to_string(),
            ),
        );
        assert_eq!(state.transcript.entries[0].affordances.len(), 2);

        reducer::update(&mut state, Action::NextButton);
        reducer::update(&mut state, Action::ActivateAffordance);
        assert_eq!(state.mode, AppMode::Booking);
        assert_eq!(
            state.booking.as_ref().map(|b| b.topic.as_str()),
            Some("pricing")
        );
    }

    #[test]
    fn test_several_triggers_batch() {
        let mut state = AppState::default();
        let cmd = reducer::update(
            &mut state,
            Action::IngestReply(
                "[SKILL:SEARCH_PROJECTS:a][SKILL:NOPE][SKILL:SEARCH_CUSTOMERS:b]".to_string(),
            ),
        );
        let Some(Command::Batch(commands)) = cmd else {
            panic!("expected a batch, got {cmd:?}");
        };
        assert_eq!(commands.len(), 2);
        assert_eq!(state.results.pending.len(), 2);
        assert_eq!(state.transcript.entries[0].cleaned_text, "");
    }

    #[test]
    fn test_file_reload_only_ingests_new_replies() {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::TranscriptLoaded(vec!["one".to_string(), "two".to_string()]),
        );
        assert_eq!(state.transcript.entries.len(), 2);

        reducer::update(
            &mut state,
            Action::TranscriptLoaded(vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
            ]),
        );
        assert_eq!(state.transcript.entries.len(), 3);
        assert_eq!(state.transcript.entries[2].cleaned_text, "three");

        // Truncated file: nothing re-ingested
        reducer::update(&mut state, Action::TranscriptLoaded(vec!["one".to_string()]));
        assert_eq!(state.transcript.entries.len(), 3);
        assert_eq!(state.transcript.file_replies, 1);
    }

    #[test]
    fn test_reload_needs_a_path() {
        let mut state = AppState::default();
        assert!(reducer::update(&mut state, Action::ReloadTranscript).is_none());

        state.transcript_path = Some(PathBuf::from("/tmp/replies.txt"));
        assert_eq!(
            reducer::update(&mut state, Action::ExternalChangeDetected),
            Some(Command::LoadTranscript(PathBuf::from("/tmp/replies.txt")))
        );
    }

    #[test]
    fn test_affordance_without_selection_is_noop() {
        let mut state = AppState::default();
        assert!(reducer::update(&mut state, Action::ActivateAffordance).is_none());
        assert_eq!(state.mode, AppMode::Normal);
    }
}
