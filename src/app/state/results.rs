use crate::domain::{models::SkillResult, skill::SkillName};
use tracing::debug;

const HISTORY_LIMIT: usize = 20;

/// The result surface. Every dispatch takes a ticket; a result only
/// becomes current if no newer ticket is already showing. Older results stay
/// browsable in ticket order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    next_ticket: u64,
    pub current: Option<SkillResult>,
    /// Ascending by ticket, all older than `current`.
    pub history: Vec<SkillResult>,
    pub pending: Vec<(u64, SkillName)>,
    pub scroll: u16,
    /// Steps back from `current` the panel is showing.
    back: usize,
}

impl ResultsState {
    pub fn issue_ticket(&mut self, skill: SkillName) -> u64 {
        self.next_ticket += 1;
        self.pending.push((self.next_ticket, skill));
        self.next_ticket
    }

    pub fn settle(&mut self, ticket: u64) {
        self.pending.retain(|(t, _)| *t != ticket);
    }

    /// Stores a finished result. Returns whether it became the current one.
    pub fn accept(&mut self, result: SkillResult) -> bool {
        self.settle(result.ticket);

        if let Some(current) = &self.current {
            if current.ticket > result.ticket {
                debug!(
                    ticket = result.ticket,
                    current = current.ticket,
                    "stale result moved to history"
                );
                self.push_history(result);
                return false;
            }
        }

        if let Some(previous) = self.current.replace(result) {
            self.push_history(previous);
        }
        self.back = 0;
        self.scroll = 0;
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
        self.back = 0;
        self.scroll = 0;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        usize::from(self.current.is_some()) + self.history.len()
    }

    /// The result the panel should draw.
    #[must_use]
    pub fn shown(&self) -> Option<&SkillResult> {
        match self.back {
            0 => self.current.as_ref(),
            back => self
                .history
                .len()
                .checked_sub(back)
                .and_then(|i| self.history.get(i)),
        }
    }

    /// One-based position of the shown result among all kept results, oldest
    /// first.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.shown()?;
        let total = self.count();
        Some((total - self.back, total))
    }

    pub fn show_older(&mut self) {
        if self.back + 1 < self.count() {
            self.back += 1;
            self.scroll = 0;
        }
    }

    pub fn show_newer(&mut self) {
        if self.back > 0 {
            self.back -= 1;
            self.scroll = 0;
        }
    }

    fn push_history(&mut self, result: SkillResult) {
        let at = self.history.partition_point(|r| r.ticket < result.ticket);
        // Keep the browsed result in place when something lands after it
        if self.back > 0 && at > self.history.len().saturating_sub(self.back) {
            self.back += 1;
        }
        self.history.insert(at, result);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.back = self.back.min(self.count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SkillOutput;

    fn result(ticket: u64, text: &str) -> SkillResult {
        SkillResult {
            ticket,
            skill: SkillName::SearchProjects,
            param: String::new(),
            output: SkillOutput::File(text.into()),
            finished_at: chrono::Local::now(),
        }
    }

    #[test]
    fn test_tickets_increase_and_track_pending() {
        let mut results = ResultsState::default();
        let a = results.issue_ticket(SkillName::SearchProjects);
        let b = results.issue_ticket(SkillName::ExportCsv);
        assert!(b > a);
        assert_eq!(results.pending.len(), 2);

        results.settle(a);
        assert_eq!(results.pending, vec![(b, SkillName::ExportCsv)]);
    }

    #[test]
    fn test_stale_result_does_not_overwrite_newer() {
        let mut results = ResultsState::default();
        let old = results.issue_ticket(SkillName::SearchProjects);
        let new = results.issue_ticket(SkillName::SearchProjects);

        assert!(results.accept(result(new, "new")));
        assert!(!results.accept(result(old, "old")));

        assert_eq!(results.current.as_ref().map(|r| r.ticket), Some(new));
        assert_eq!(results.history.len(), 1);
        assert_eq!(results.history[0].ticket, old);
        assert!(results.pending.is_empty());
    }

    #[test]
    fn test_newer_result_pushes_current_to_history() {
        let mut results = ResultsState::default();
        let a = results.issue_ticket(SkillName::SearchProjects);
        let b = results.issue_ticket(SkillName::SearchProjects);

        assert!(results.accept(result(a, "a")));
        assert!(results.accept(result(b, "b")));
        assert_eq!(results.current.as_ref().map(|r| r.ticket), Some(b));
        assert_eq!(results.history[0].ticket, a);
    }

    #[test]
    fn test_browse_older_and_newer() {
        let mut results = ResultsState::default();
        let a = results.issue_ticket(SkillName::SearchProjects);
        let b = results.issue_ticket(SkillName::SearchCustomers);
        let c = results.issue_ticket(SkillName::SearchProjects);

        results.accept(result(c, "c"));
        results.accept(result(a, "a"));
        results.accept(result(b, "b"));
        assert_eq!(results.position(), Some((3, 3)));

        let tickets: Vec<u64> = results.history.iter().map(|r| r.ticket).collect();
        assert_eq!(tickets, vec![a, b]);

        results.show_older();
        assert_eq!(results.shown().map(|r| r.ticket), Some(b));
        results.show_older();
        results.show_older();
        assert_eq!(results.shown().map(|r| r.ticket), Some(a));
        assert_eq!(results.position(), Some((1, 3)));

        results.show_newer();
        assert_eq!(results.shown().map(|r| r.ticket), Some(b));

        // A fresh result jumps back to the newest
        let d = results.issue_ticket(SkillName::ExportCsv);
        results.accept(result(d, "d"));
        assert_eq!(results.shown().map(|r| r.ticket), Some(d));
        assert_eq!(results.position(), Some((4, 4)));
    }

    #[test]
    fn test_late_result_keeps_browsed_result_in_view() {
        let mut results = ResultsState::default();
        let a = results.issue_ticket(SkillName::SearchProjects);
        let b = results.issue_ticket(SkillName::SearchProjects);
        let c = results.issue_ticket(SkillName::SearchProjects);

        results.accept(result(c, "c"));
        results.accept(result(a, "a"));
        results.show_older();
        assert_eq!(results.shown().map(|r| r.ticket), Some(a));

        results.accept(result(b, "b"));
        assert_eq!(results.shown().map(|r| r.ticket), Some(a));
        assert_eq!(results.position(), Some((1, 3)));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut results = ResultsState::default();
        for _ in 0..HISTORY_LIMIT + 5 {
            let t = results.issue_ticket(SkillName::SearchProjects);
            results.accept(result(t, "x"));
        }
        assert_eq!(results.history.len(), HISTORY_LIMIT);
    }
}
