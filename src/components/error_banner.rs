use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line, non-blocking error strip above the footer.
pub struct ErrorBanner<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let severity = self.error.severity;
        let style = match severity {
            ErrorSeverity::Warning => self.theme.status_warn,
            ErrorSeverity::Error => self.theme.status_error,
        };

        let mut spans = vec![
            Span::styled(severity.label(), style.add_modifier(Modifier::REVERSED)),
            Span::raw(" "),
            Span::styled(self.error.message.as_str(), style),
            Span::styled(
                format!("  {}", self.error.raised_at.format("%H:%M:%S")),
                self.theme.reply_meta,
            ),
        ];

        if let Some(suggestion) = self.error.suggestions.first() {
            spans.push(Span::styled("  → ", self.theme.reply_meta));
            spans.push(Span::styled(suggestion.as_str(), self.theme.footer_segment_key));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
