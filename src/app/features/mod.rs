pub mod palette;
pub mod skills;
pub mod transcript;
pub mod ui;
