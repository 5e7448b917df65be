use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

/// Applies `action` to the state and returns the side effect, if any, for
/// the runtime to execute.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 4] = [
        features::palette::update,
        features::skills::update,
        features::transcript::update,
        features::ui::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }
    None
}
