use crate::app::state::{InputPurpose, InputState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use super::helpers::{centered_rect, centered_rect_fixed_height, open_modal};

pub struct TextInputModal<'a, 'b> {
    pub theme: &'a Theme,
    pub input: &'a InputState<'b>,
}

impl Widget for TextInputModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Pasted replies get room; skill params are one line
        let multiline = self.input.purpose == InputPurpose::Reply;
        let modal_area = if multiline {
            centered_rect(70, 50, area)
        } else {
            centered_rect_fixed_height(60, 3, area)
        };

        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        let mut block = open_modal(
            buf,
            modal_area,
            area,
            self.input.purpose.title(),
            self.theme,
        );
        if multiline {
            block = block.title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(": ingest "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(": cancel "),
            ]));
        }

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let text_area = if multiline {
            inner_area.inner(Margin::new(1, 1))
        } else {
            inner_area
        };

        if !text_area.is_empty() {
            self.input.text_area.render(text_area, buf);
        }
    }
}
