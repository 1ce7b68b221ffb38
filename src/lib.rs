pub mod config;
pub mod controller;
pub mod dispatch;
pub mod events;
pub mod fs;
pub mod listing;
pub mod logging;
pub mod planner;
pub mod rename;
pub mod state;
pub mod ui;
