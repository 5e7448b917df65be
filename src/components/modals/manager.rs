use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::booking::BookingModal;
use super::command_palette::CommandPaletteModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::text_input::TextInputModal;

pub struct ModalManager<'a, 'b> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'b>,
}

impl Widget for ModalManager<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // --- Visual Dimming ---
        if self.app_state.mode != AppMode::Normal {
            dim_area(buf, area);
        }

        match self.app_state.mode {
            AppMode::Normal => {}
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::Input => {
                if let Some(input) = &self.app_state.input {
                    TextInputModal {
                        theme: self.theme,
                        input,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Booking => {
                if let Some(booking) = &self.app_state.booking {
                    BookingModal {
                        theme: self.theme,
                        booking,
                    }
                    .render(area, buf);
                }
            }
            AppMode::CommandPalette => {
                if let Some(palette) = &self.app_state.command_palette {
                    CommandPaletteModal {
                        theme: self.theme,
                        query: palette.query(),
                        view: &self.app_state.palette_view,
                    }
                    .render(area, buf);
                }
            }
        }
    }
}
