pub mod app;
pub mod config;
pub mod events;
pub mod status;
pub mod surface;
pub mod sys;
