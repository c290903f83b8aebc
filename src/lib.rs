pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod panel;
pub mod ui;
