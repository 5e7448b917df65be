use crate::app::command_palette::{search_commands, CommandCategory, CommandDefinition, CommandTarget};
use std::sync::Arc;

/// Render hooks driven by the palette state machine. Implemented by the
/// terminal view model, and by recording doubles in tests.
pub trait PaletteView {
    fn render_overlay_open(&mut self);
    fn render_list(&mut self, items: &[&CommandDefinition], selected_index: usize);
    fn render_overlay_closed(&mut self);
}

/// An open palette session. `None` in `AppState` is the closed state, so a
/// session only exists between open and cancel/commit.
#[derive(Debug, Clone)]
pub struct CommandPalette {
    registry: Arc<[CommandDefinition]>,
    query: String,
    matches: Vec<usize>, // Indices into the registry
    selected_index: usize,
    generation: u64,
}

impl CommandPalette {
    pub fn open(
        registry: Arc<[CommandDefinition]>,
        generation: u64,
        view: &mut impl PaletteView,
    ) -> Self {
        let palette = Self {
            matches: (0..registry.len()).collect(),
            registry,
            query: String::new(),
            selected_index: 0,
            generation,
        };
        view.render_overlay_open();
        palette.render(view);
        palette
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&CommandDefinition> {
        self.matches.iter().map(|&i| &self.registry[i]).collect()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CommandDefinition> {
        self.row(self.selected_index)
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&CommandDefinition> {
        self.matches.get(row).map(|&i| &self.registry[i])
    }

    /// Replaces the query. Returns false, and leaves the selection alone,
    /// when the query didn't actually change.
    pub fn set_query(&mut self, query: &str, view: &mut impl PaletteView) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.matches = search_commands(&self.query, &self.registry);
        self.selected_index = 0;
        self.render(view);
        true
    }

    pub fn push_char(&mut self, c: char, view: &mut impl PaletteView) {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(&query, view);
    }

    pub fn pop_char(&mut self, view: &mut impl PaletteView) {
        let mut query = self.query.clone();
        if query.pop().is_some() {
            self.set_query(&query, view);
        }
    }

    pub fn select_next(&mut self, view: &mut impl PaletteView) {
        if self.matches.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(self.matches.len() - 1);
        self.render(view);
    }

    pub fn select_prev(&mut self, view: &mut impl PaletteView) {
        if self.matches.is_empty() {
            return;
        }
        self.selected_index = self.selected_index.saturating_sub(1);
        self.render(view);
    }

    /// Target of the highlighted row, or of `row` for pointer commits.
    /// `None` means there is nothing to commit.
    #[must_use]
    pub fn commit_target(&self, row: Option<usize>) -> Option<&CommandDefinition> {
        self.row(row.unwrap_or(self.selected_index))
    }

    pub fn close(self, view: &mut impl PaletteView) {
        view.render_overlay_closed();
    }

    fn render(&self, view: &mut impl PaletteView) {
        view.render_list(&self.filtered(), self.selected_index);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub navigates: bool,
}

/// What the palette modal draws. Only the state machine writes to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaletteViewModel {
    pub visible: bool,
    pub rows: Vec<PaletteRow>,
    pub selected_index: usize,
    pub hint: Option<String>,
}

impl PaletteView for PaletteViewModel {
    fn render_overlay_open(&mut self) {
        self.visible = true;
        self.hint = None;
    }

    fn render_list(&mut self, items: &[&CommandDefinition], selected_index: usize) {
        self.rows = items
            .iter()
            .map(|cmd| PaletteRow {
                icon: cmd.icon,
                label: cmd.label,
                description: cmd.description,
                category: cmd.category,
                navigates: matches!(cmd.target, CommandTarget::Navigate(_)),
            })
            .collect();
        self.selected_index = selected_index;
    }

    fn render_overlay_closed(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::command_palette::get_commands;

    #[derive(Debug, Clone, PartialEq)]
    pub enum ViewCall {
        Open,
        List(Vec<&'static str>, usize),
        Closed,
    }

    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub calls: Vec<ViewCall>,
    }

    impl PaletteView for RecordingView {
        fn render_overlay_open(&mut self) {
            self.calls.push(ViewCall::Open);
        }

        fn render_list(&mut self, items: &[&CommandDefinition], selected_index: usize) {
            self.calls
                .push(ViewCall::List(items.iter().map(|c| c.id).collect(), selected_index));
        }

        fn render_overlay_closed(&mut self) {
            self.calls.push(ViewCall::Closed);
        }
    }

    fn open() -> (CommandPalette, RecordingView) {
        let mut view = RecordingView::default();
        let palette = CommandPalette::open(get_commands().into(), 1, &mut view);
        (palette, view)
    }

    #[test]
    fn test_open_renders_full_registry() {
        let (palette, view) = open();
        let n = get_commands().len();
        assert_eq!(palette.query(), "");
        assert_eq!(palette.matches().len(), n);
        assert_eq!(palette.selected_index(), 0);
        assert_eq!(view.calls[0], ViewCall::Open);
        assert!(matches!(&view.calls[1], ViewCall::List(ids, 0) if ids.len() == n));
    }

    #[test]
    fn test_typing_filters_and_resets_selection() {
        let (mut palette, mut view) = open();
        palette.select_next(&mut view);
        palette.select_next(&mut view);
        assert_eq!(palette.selected_index(), 2);

        for c in "export".chars() {
            palette.push_char(c, &mut view);
        }
        let expected = crate::app::command_palette::search_commands("export", &get_commands());
        assert_eq!(palette.matches(), expected.as_slice());
        assert_eq!(palette.matches().len(), 2);
        assert_eq!(palette.selected_index(), 0);
        assert_eq!(
            view.calls.last(),
            Some(&ViewCall::List(
                vec!["skills.export-projects", "skills.export-customers"],
                0
            ))
        );
    }

    #[test]
    fn test_backspace_on_empty_query_changes_nothing() {
        let (mut palette, mut view) = open();
        palette.select_next(&mut view);
        let calls = view.calls.len();

        palette.pop_char(&mut view);
        assert_eq!(palette.selected_index(), 1);
        assert_eq!(view.calls.len(), calls);
    }

    #[test]
    fn test_navigation_clamps() {
        let (mut palette, mut view) = open();
        palette.select_prev(&mut view);
        assert_eq!(palette.selected_index(), 0);

        let last = palette.matches().len() - 1;
        for _ in 0..last + 5 {
            palette.select_next(&mut view);
        }
        assert_eq!(palette.selected_index(), last);
        palette.select_next(&mut view);
        assert_eq!(palette.selected_index(), last);
    }

    #[test]
    fn test_empty_matches() {
        let (mut palette, mut view) = open();
        palette.set_query("no such command", &mut view);
        assert!(palette.matches().is_empty());

        palette.select_next(&mut view);
        palette.select_prev(&mut view);
        assert_eq!(palette.selected_index(), 0);
        assert!(palette.selected().is_none());
        assert!(palette.commit_target(None).is_none());
    }

    #[test]
    fn test_commit_target_prefers_clicked_row() {
        let (mut palette, mut view) = open();
        palette.set_query("go to", &mut view);
        assert_eq!(palette.commit_target(None).map(|c| c.id), Some("nav.transcript"));
        assert_eq!(palette.commit_target(Some(1)).map(|c| c.id), Some("nav.results"));
        assert!(palette.commit_target(Some(2)).is_none());
    }

    #[test]
    fn test_close_renders_closed() {
        let (palette, mut view) = open();
        palette.close(&mut view);
        assert_eq!(view.calls.last(), Some(&ViewCall::Closed));
    }

    #[test]
    fn test_view_model_tracks_machine() {
        let mut vm = PaletteViewModel::default();
        let mut palette = CommandPalette::open(get_commands().into(), 3, &mut vm);
        assert!(vm.visible);
        assert_eq!(vm.rows.len(), get_commands().len());

        palette.set_query("results", &mut vm);
        palette.select_next(&mut vm);
        assert_eq!(vm.selected_index, palette.selected_index());
        assert!(vm.rows.iter().any(|r| r.navigates));

        palette.close(&mut vm);
        assert_eq!(vm, PaletteViewModel::default());
    }
}
