use crate::domain::skill::SkillName;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// What the text entered in the input modal is for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputPurpose {
    SkillParam(SkillName),
    Reply,
}

impl InputPurpose {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            InputPurpose::SkillParam(skill) => skill.prompt(),
            InputPurpose::Reply => " PASTE ASSISTANT REPLY ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputState<'a> {
    pub text_area: TextArea<'a>,
    pub purpose: InputPurpose,
}

impl InputState<'_> {
    #[must_use]
    pub fn new(purpose: InputPurpose) -> Self {
        let mut text_area = TextArea::default();
        // No underline on the cursor row
        text_area.set_cursor_line_style(Style::default());
        if let InputPurpose::Reply = purpose {
            text_area.set_placeholder_text("Paste the assistant's reply here");
        }
        Self { text_area, purpose }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.lines().join("\n")
    }
}
