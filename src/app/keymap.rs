use super::action::Action;
use super::state::Panel;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// `default` or `vim` (adds j/k/g/G).
    pub profile: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
        }
    }
}

pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub results_panel: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut results_panel = HashMap::new();

        // --- Global / Normal Mode ---
        global.insert(ctrl('k'), Action::OpenCommandPalette);
        global.insert(char_key(':'), Action::OpenCommandPalette);
        global.insert(char_key('q'), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Down), Action::SelectNextEntry);
        global.insert(key(KeyCode::Up), Action::SelectPrevEntry);
        global.insert(key(KeyCode::End), Action::SelectLastEntry);
        global.insert(key(KeyCode::Enter), Action::ActivateAffordance);
        global.insert(key(KeyCode::Right), Action::NextButton);
        global.insert(key(KeyCode::Left), Action::PrevButton);
        global.insert(char_key('['), Action::ShowOlderResult);
        global.insert(char_key(']'), Action::ShowNewerResult);
        global.insert(key(KeyCode::Tab), Action::FocusPanel(Panel::Results));
        global.insert(key(KeyCode::PageDown), Action::ScrollResultsDown(10));
        global.insert(key(KeyCode::PageUp), Action::ScrollResultsUp(10));
        global.insert(char_key('p'), Action::PasteReplyIntent);
        global.insert(char_key('r'), Action::ReloadTranscript);
        global.insert(char_key('R'), Action::ToggleResults);
        global.insert(char_key('?'), Action::ToggleHelp);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        if config.profile == "vim" {
            global.insert(char_key('j'), Action::SelectNextEntry);
            global.insert(char_key('k'), Action::SelectPrevEntry);
            global.insert(char_key('G'), Action::SelectLastEntry);
        }

        // --- Results Panel Overrides ---
        results_panel.insert(key(KeyCode::Tab), Action::FocusPanel(Panel::Transcript));
        results_panel.insert(key(KeyCode::Down), Action::ScrollResultsDown(1));
        results_panel.insert(key(KeyCode::Up), Action::ScrollResultsUp(1));
        results_panel.insert(key(KeyCode::Left), Action::ShowOlderResult);
        results_panel.insert(key(KeyCode::Right), Action::ShowNewerResult);
        if config.profile == "vim" {
            results_panel.insert(char_key('j'), Action::ScrollResultsDown(1));
            results_panel.insert(char_key('k'), Action::ScrollResultsUp(1));
        }

        Self {
            global,
            results_panel,
        }
    }

    pub fn get_action(&self, event: KeyEvent, panel: Panel) -> Option<Action> {
        if panel == Panel::Results {
            if let Some(action) = self.results_panel.get(&event) {
                return Some(action.clone());
            }
        }
        self.global.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_k_opens_palette() {
        let keymap = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(
            keymap.get_action(ctrl('k'), Panel::Transcript),
            Some(Action::OpenCommandPalette)
        );
        // Plain `k` is only bound in the vim profile
        assert_eq!(keymap.get_action(char_key('k'), Panel::Transcript), None);
    }

    #[test]
    fn test_side_arrows_follow_focus() {
        let keymap = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(
            keymap.get_action(key(KeyCode::Right), Panel::Transcript),
            Some(Action::NextButton)
        );
        assert_eq!(
            keymap.get_action(key(KeyCode::Left), Panel::Results),
            Some(Action::ShowOlderResult)
        );
        assert_eq!(
            keymap.get_action(char_key(']'), Panel::Transcript),
            Some(Action::ShowNewerResult)
        );
    }

    #[test]
    fn test_results_panel_overrides_arrows() {
        let keymap = KeyMap::from_config(&KeyConfig {
            profile: "vim".to_string(),
        });
        assert_eq!(
            keymap.get_action(char_key('j'), Panel::Results),
            Some(Action::ScrollResultsDown(1))
        );
        assert_eq!(
            keymap.get_action(char_key('j'), Panel::Transcript),
            Some(Action::SelectNextEntry)
        );
    }
}
