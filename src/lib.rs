pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod store;
pub mod tui;
pub mod views;

mod tui_shell;
