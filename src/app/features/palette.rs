use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    command_palette::CommandTarget,
    reducer,
    state::{AppMode, AppState, CommandPalette},
};
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenCommandPalette => {
            if state.is_palette_open() {
                return UpdateResult::Handled(None);
            }
            state.palette_generation += 1;
            state.command_palette = Some(CommandPalette::open(
                state.registry.clone(),
                state.palette_generation,
                &mut state.palette_view,
            ));
            state.mode = AppMode::CommandPalette;
            UpdateResult::Handled(Some(Command::LoadPaletteHint(state.palette_generation)))
        }
        Action::ClosePalette => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::CancelMode if state.is_palette_open() => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::PaletteInput(key) => {
            if let Some(palette) = &mut state.command_palette {
                match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        palette.push_char(c, &mut state.palette_view);
                    }
                    KeyCode::Backspace => palette.pop_char(&mut state.palette_view),
                    _ => {}
                }
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            if let Some(palette) = &mut state.command_palette {
                palette.select_next(&mut state.palette_view);
            }
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            if let Some(palette) = &mut state.command_palette {
                palette.select_prev(&mut state.palette_view);
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteCommit => UpdateResult::Handled(commit(state, None)),
        Action::PaletteClickRow(row) => UpdateResult::Handled(commit(state, Some(*row))),
        Action::PaletteHint(generation, text) => {
            match &state.command_palette {
                Some(palette) if palette.generation() == *generation => {
                    state.palette_view.hint = Some(text.clone());
                }
                _ => debug!(generation, "dropping hint for a closed palette"),
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn close(state: &mut AppState) {
    if let Some(palette) = state.command_palette.take() {
        palette.close(&mut state.palette_view);
    }
    if state.mode == AppMode::CommandPalette {
        state.mode = AppMode::Normal;
    }
}

/// Tears the session down, then runs the chosen command once. An empty
/// match list leaves the palette open and does nothing.
fn commit(state: &mut AppState, row: Option<usize>) -> Option<Command> {
    let (id, target) = {
        let palette = state.command_palette.as_ref()?;
        let cmd = palette.commit_target(row)?;
        (cmd.id, cmd.target.clone())
    };

    close(state);
    info!(command = id, "palette command");

    match target {
        CommandTarget::Action(action) => reducer::update(state, action),
        CommandTarget::Navigate(panel) => {
            state.focused_panel = panel;
            if panel == crate::app::state::Panel::Results {
                state.show_results = true;
            }
            None
        }
    }
}
