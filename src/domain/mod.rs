pub mod catalog;
pub mod models;
pub mod skill;
pub mod transcript;
pub mod trigger;
