pub mod error_banner;
pub mod footer;
pub mod header;
pub mod modals;
pub mod results_view;
pub mod transcript_view;
