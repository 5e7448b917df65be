pub mod handler;

pub use handler::handle_command;

use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, BookingState, ErrorSeverity, ErrorState, InputPurpose, InputState},
};
use crate::domain::{
    models::{SkillOutput, SkillResult},
    skill::{SkillError, SkillName},
    trigger::Trigger,
};
use tracing::{info, warn};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SkillPromptIntent(skill) => {
            state.input = Some(InputState::new(InputPurpose::SkillParam(*skill)));
            state.mode = AppMode::Input;
            UpdateResult::Handled(None)
        }
        Action::RunSkill(trigger) => UpdateResult::Handled(dispatch_trigger(state, trigger)),
        Action::SkillCompleted {
            ticket,
            skill,
            param,
            result,
        } => {
            match result {
                Ok(output) => {
                    let shown = state.results.accept(SkillResult {
                        ticket: *ticket,
                        skill: *skill,
                        param: param.clone(),
                        output: output.clone(),
                        finished_at: chrono::Local::now(),
                    });
                    if shown {
                        state.set_status(format!("{} finished", skill.label()));
                    }
                }
                Err(err) => {
                    state.results.settle(*ticket);
                    state.last_error = Some(ErrorState::new(
                        format!("{} failed: {err}", skill.label()),
                        ErrorSeverity::Error,
                    ));
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Resolves a parsed trigger against the skill enum and starts it. Unknown
/// names are logged and dropped.
pub fn dispatch_trigger(state: &mut AppState, trigger: &Trigger) -> Option<Command> {
    match trigger.skill_name.parse::<SkillName>() {
        Ok(skill) => start_skill(state, skill, trigger.param.clone()),
        Err(err) => {
            report_unknown(state, &err);
            None
        }
    }
}

pub fn report_unknown(state: &mut AppState, err: &SkillError) {
    warn!(%err, "ignoring trigger");
    state.set_status(format!("Ignored {err}"));
}

/// Takes a ticket for `skill` and returns the side effect to run, if any.
/// Booking only opens the widget, so it completes on the spot.
pub fn start_skill(state: &mut AppState, skill: SkillName, param: String) -> Option<Command> {
    let ticket = state.results.issue_ticket(skill);
    info!(%skill, ticket, param = %param, "starting skill");

    match skill {
        SkillName::BookMeeting => {
            let booking = BookingState {
                topic: param.clone(),
                url: state.booking_url.clone(),
            };
            state.results.accept(SkillResult {
                ticket,
                skill,
                param,
                output: SkillOutput::Booking {
                    topic: booking.topic.clone(),
                    url: booking.url.clone(),
                },
                finished_at: chrono::Local::now(),
            });
            state.booking = Some(booking);
            state.mode = AppMode::Booking;
            None
        }
        _ => Some(Command::RunSkill {
            ticket,
            skill,
            param,
        }),
    }
}
