use crate::app::command::Command;
use crate::app::state::Panel;
use crate::domain::{models::SkillOutput, skill::SkillName, trigger::Trigger};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Transcript ---
    SelectNextEntry,
    SelectPrevEntry,
    SelectLastEntry,
    NextButton,                 // Move between buttons on the selected reply
    PrevButton,
    ActivateAffordance,         // Run the focused button on the selected reply
    IngestReply(String),        // Parse and append an assistant reply
    ReloadTranscript,           // Re-read the transcript file
    TranscriptLoaded(Vec<String>),
    ExternalChangeDetected,     // Transcript file changed on disk

    // --- Results ---
    ScrollResultsUp(u16),
    ScrollResultsDown(u16),
    ShowOlderResult,
    ShowNewerResult,
    ClearResults,

    // --- Skills ---
    SkillPromptIntent(SkillName), // Ask for a param, then run
    RunSkill(Trigger),
    SkillCompleted {
        ticket: u64,
        skill: SkillName,
        param: String,
        result: Result<SkillOutput, String>,
    },

    // --- UI Mode Transitions ---
    FocusPanel(Panel),
    ToggleResults,
    ToggleHelp,
    PasteReplyIntent,
    TextAreaInput(crossterm::event::KeyEvent),
    TextAreaPaste(String),
    SubmitInput,
    CancelMode, // ESC key (close modal/mode)

    // --- Command Palette ---
    OpenCommandPalette,
    ClosePalette,
    PaletteInput(crossterm::event::KeyEvent),
    PaletteNext,
    PalettePrev,
    PaletteCommit,
    PaletteClickRow(usize),
    PaletteHint(u64, String), // (generation, text)

    // --- Async Results ---
    ErrorOccurred(String),
}
