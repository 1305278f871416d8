//! Application state split into focused submodules
pub mod commands;
pub mod input;
pub mod screens;
pub mod state;

pub use state::App;
