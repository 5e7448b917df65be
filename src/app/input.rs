use crate::app::{
    action::Action,
    state::{AppMode, AppState, Panel},
    ui,
};
use crate::components::modals::command_palette::{palette_layout, row_at};
use crate::components::modals::helpers::contains;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

/// Shifted symbols arrive with SHIFT set (`?`, `:`, `R`); the keymap stores
/// them bare.
fn normalize(mut key: KeyEvent) -> KeyEvent {
    if matches!(key.code, KeyCode::Char(_)) {
        key.modifiers.remove(KeyModifiers::SHIFT);
    }
    key.kind = KeyEventKind::Press;
    key.state = crossterm::event::KeyEventState::NONE;
    key
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }

    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match app_state.mode {
        AppMode::CommandPalette => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::ClosePalette),
                _ if is_ctrl(&key, 'k') || is_ctrl(&key, 'c') => Some(Action::ClosePalette),
                KeyCode::Enter => Some(Action::PaletteCommit),
                KeyCode::Up => Some(Action::PalettePrev),
                KeyCode::Down => Some(Action::PaletteNext),
                _ if is_ctrl(&key, 'p') => Some(Action::PalettePrev),
                _ if is_ctrl(&key, 'n') => Some(Action::PaletteNext),
                _ => Some(Action::PaletteInput(key)),
            },
            Event::Mouse(mouse) => map_palette_mouse(mouse, app_state, area),
            _ => None,
        },
        AppMode::Input => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => Some(Action::SubmitInput),
                _ => Some(Action::TextAreaInput(key)),
            },
            Event::Paste(text) => Some(Action::TextAreaPaste(text)),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Booking => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CancelMode),
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => Some(Action::CancelMode),
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => app_state
                .keymap
                .get_action(normalize(key), app_state.focused_panel),
            // Pasting straight into the main view ingests the text as a reply
            Event::Paste(text) if !text.trim().is_empty() => Some(Action::IngestReply(text)),
            Event::Mouse(mouse) => {
                let layout = ui::get_layout(
                    area,
                    app_state.show_results,
                    app_state.last_error.is_some(),
                );
                let over_results = app_state.show_results
                    && contains(layout.results, mouse.column, mouse.row);

                match mouse.kind {
                    MouseEventKind::ScrollUp if over_results => Some(Action::ScrollResultsUp(1)),
                    MouseEventKind::ScrollDown if over_results => {
                        Some(Action::ScrollResultsDown(1))
                    }
                    MouseEventKind::ScrollUp => Some(Action::SelectPrevEntry),
                    MouseEventKind::ScrollDown => Some(Action::SelectNextEntry),
                    MouseEventKind::Down(MouseButton::Left) => {
                        if over_results {
                            Some(Action::FocusPanel(Panel::Results))
                        } else if contains(layout.transcript, mouse.column, mouse.row) {
                            Some(Action::FocusPanel(Panel::Transcript))
                        } else {
                            None
                        }
                    }
                    _ => None,
                }
            }
            _ => None,
        },
    }
}

fn map_palette_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::PalettePrev),
        MouseEventKind::ScrollDown => Some(Action::PaletteNext),
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = palette_layout(area);
            if !contains(layout.modal, mouse.column, mouse.row) {
                return Some(Action::ClosePalette);
            }
            row_at(&layout, &app_state.palette_view, mouse.column, mouse.row)
                .map(Action::PaletteClickRow)
        }
        _ => None,
    }
}
