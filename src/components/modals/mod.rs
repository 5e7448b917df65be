pub mod booking;
pub mod command_palette;
pub mod help;
pub mod helpers;
pub mod manager;
pub mod text_input;

pub use manager::ModalManager;
