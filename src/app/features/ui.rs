use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ErrorSeverity, ErrorState, InputPurpose, InputState, Panel},
};
use std::time::{Duration, Instant};

use super::{skills, transcript};

pub const STATUS_TTL: Duration = Duration::from_secs(4);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|t| Instant::now() >= t)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.input = None;
            state.booking = None;
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::ToggleResults => {
            state.show_results = !state.show_results;
            if !state.show_results {
                state.focused_panel = Panel::Transcript;
            }
            UpdateResult::Handled(None)
        }
        Action::FocusPanel(panel) => {
            if *panel == Panel::Results && !state.show_results {
                return UpdateResult::Handled(None);
            }
            state.focused_panel = *panel;
            UpdateResult::Handled(None)
        }
        Action::ScrollResultsUp(n) => {
            state.results.scroll = state.results.scroll.saturating_sub(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollResultsDown(n) => {
            state.results.scroll = state.results.scroll.saturating_add(*n);
            UpdateResult::Handled(None)
        }
        Action::ShowOlderResult => {
            state.results.show_older();
            UpdateResult::Handled(None)
        }
        Action::ShowNewerResult => {
            state.results.show_newer();
            UpdateResult::Handled(None)
        }
        Action::ClearResults => {
            state.results.clear();
            state.set_status("Results cleared");
            UpdateResult::Handled(None)
        }
        Action::PasteReplyIntent => {
            state.input = Some(InputState::new(InputPurpose::Reply));
            state.mode = AppMode::Input;
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(input) = &mut state.input {
                input.text_area.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaPaste(text) => {
            if let Some(input) = &mut state.input {
                input.text_area.insert_str(text);
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitInput => {
            let Some(input) = state.input.take() else {
                return UpdateResult::Handled(None);
            };
            state.mode = AppMode::Normal;
            let text = input.text();
            let command = match input.purpose {
                InputPurpose::SkillParam(skill) => {
                    skills::start_skill(state, skill, text.trim().to_string())
                }
                InputPurpose::Reply if text.trim().is_empty() => None,
                InputPurpose::Reply => transcript::ingest_reply(state, &text),
            };
            UpdateResult::Handled(command)
        }
        Action::ErrorOccurred(msg) => {
            state.last_error = Some(ErrorState::new(msg.clone(), ErrorSeverity::Error));
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}
