//! Core library for the daycare staff app: the navigation controller,
//! domain records and the screen collaborators that mutate them.

#[macro_use]
pub mod logger;

pub mod alerts;
pub mod attendance;
pub mod auth;
pub mod chat;
pub mod clock;
pub mod config;
pub mod error;
pub mod health;
pub mod incident;
pub mod media;
pub mod mock;
pub mod models;
pub mod navigation;
pub mod notes;
pub mod pickup;
pub mod roster;
pub mod schedule;

// Re-exports for convenience
pub use config::Config;
pub use error::{DaycareError, Result};
pub use navigation::{NavigationController, Region, ScreenId, Selection, Session};
