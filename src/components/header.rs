use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let replies = state.transcript.entries.len();
        let triggers: usize = state
            .transcript
            .entries
            .iter()
            .map(|e| e.triggers.len())
            .sum();

        let buttons = state.transcript.affordance_count();

        let mut spans = vec![
            Span::styled(" PAVER ", self.theme.header_logo),
            Span::styled(
                format!(" {replies} replies · {triggers} triggers · {buttons} buttons "),
                self.theme.header,
            ),
        ];

        if let Some(path) = &state.transcript_path {
            spans.push(Span::styled(
                format!(" {} ", path.display()),
                self.theme.header_item,
            ));
        }

        let mode = match state.mode {
            AppMode::Normal => None,
            AppMode::CommandPalette => Some(" PALETTE "),
            AppMode::Input => Some(" INPUT "),
            AppMode::Help => Some(" HELP "),
            AppMode::Booking => Some(" BOOKING "),
        };
        if let Some(mode) = mode {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(mode, self.theme.header_active));
        }

        if !state.results.pending.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} running ", state.results.pending.len()),
                self.theme.header_warn,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
