pub mod app;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod version;
