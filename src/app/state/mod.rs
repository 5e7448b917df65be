use super::command_palette::CommandDefinition;
use super::config::AppConfig;
use super::keymap::KeyMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub mod command_palette;
pub mod error;
pub mod input;
pub mod results;
pub mod transcript;

// Re-exports
pub use command_palette::{CommandPalette, PaletteView, PaletteViewModel};
pub use error::{ErrorSeverity, ErrorState};
pub use input::{InputPurpose, InputState};
pub use results::ResultsState;
pub use transcript::TranscriptState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Transcript,
    Results,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Browsing replies and results
    CommandPalette, // Filterable quick actions
    Input,          // Text input modal (skill param or pasted reply)
    Help,           // Showing the help overlay
    Booking,        // Booking widget is open
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub topic: String,
    pub url: String,
}

pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Data ---
    pub transcript: TranscriptState,
    pub results: ResultsState,
    pub transcript_path: Option<PathBuf>,
    pub booking_url: String,

    // --- Modals ---
    pub input: Option<InputState<'a>>,
    pub booking: Option<BookingState>,

    // --- Command Palette ---
    pub registry: Arc<[CommandDefinition]>,
    pub command_palette: Option<CommandPalette>,
    pub palette_view: PaletteViewModel,
    pub palette_generation: u64,

    // --- Layout ---
    pub focused_panel: Panel,
    pub show_results: bool,
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keymap)),
            transcript_path: config.transcript_path.clone(),
            booking_url: config.booking_url.clone(),
            ..Default::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + super::features::ui::STATUS_TTL);
    }

    #[must_use]
    pub fn is_palette_open(&self) -> bool {
        self.command_palette.is_some()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            transcript: TranscriptState::default(),
            results: ResultsState::default(),
            transcript_path: None,
            booking_url: AppConfig::default().booking_url,
            input: None,
            booking: None,
            registry: super::command_palette::registry(),
            command_palette: None,
            palette_view: PaletteViewModel::default(),
            palette_generation: 0,
            focused_panel: Panel::Transcript,
            show_results: true,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&super::keymap::KeyConfig::default())),
            theme: crate::theme::Theme::default(),
        }
    }
}
