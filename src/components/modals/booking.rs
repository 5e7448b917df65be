use crate::app::state::BookingState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed_height, open_modal};

/// The booking widget opened by a BOOK_MEETING button.
pub struct BookingModal<'a> {
    pub theme: &'a Theme,
    pub booking: &'a BookingState,
}

impl Widget for BookingModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 9, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        let block = open_modal(buf, modal_area, area, " BOOK A MEETING ", self.theme);

        let topic = if self.booking.topic.is_empty() {
            "Introductory call".to_string()
        } else {
            self.booking.topic.clone()
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Topic: ", self.theme.header_item),
                Span::styled(topic, self.theme.reply_text),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Pick a slot at:",
                self.theme.list_item,
            )),
            Line::from(Span::styled(
                self.booking.url.as_str(),
                self.theme.footer_segment_key,
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw(" Press "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(" to close "),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
