use crate::domain::{models::TranscriptEntry, skill::SkillName};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    pub entries: Vec<TranscriptEntry>,
    pub list_state: ListState,
    /// Replies already taken from the transcript file.
    pub file_replies: usize,
    /// Focused button on the selected reply.
    pub button: usize,
}

impl TranscriptState {
    #[must_use]
    pub fn selected_entry(&self) -> Option<&TranscriptEntry> {
        self.list_state.selected().and_then(|i| self.entries.get(i))
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.select(next);
    }

    fn select(&mut self, index: usize) {
        if self.list_state.selected() != Some(index) {
            self.button = 0;
        }
        self.list_state.select(Some(index));
    }

    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.select(prev);
    }

    pub fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.select(self.entries.len() - 1);
        }
    }

    pub fn next_button(&mut self) {
        let count = self.selected_entry().map_or(0, |e| e.affordances.len());
        if count > 0 {
            self.button = (self.button + 1).min(count - 1);
        }
    }

    pub fn prev_button(&mut self) {
        self.button = self.button.saturating_sub(1);
    }

    /// The button `Enter` would press.
    #[must_use]
    pub fn selected_affordance(&self) -> Option<&(SkillName, String)> {
        self.selected_entry()
            .and_then(|entry| entry.affordances.get(self.button))
    }

    #[must_use]
    pub fn affordance_count(&self) -> usize {
        self.entries.iter().map(|e| e.affordances.len()).sum()
    }
}
