//! Error types for daycare-core
//!
//! Navigation itself never fails. These errors come from parsing
//! user-supplied names, configuration IO and form validation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaycareError {
    // =========================================================================
    // Lookup / parsing
    // =========================================================================
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("no child with id {0}")]
    UnknownChild(u32),

    #[error("no conversation with id {0}")]
    UnknownChat(u32),

    #[error("malformed step '{step}': {reason}")]
    MalformedStep { step: String, reason: String },

    // =========================================================================
    // Configuration
    // =========================================================================
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to write config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Form validation
    // =========================================================================
    #[error("Please fill in {0}")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please mark attendance for all children")]
    AttendanceIncomplete { unmarked: usize },

    #[error("Please write a note")]
    EmptyNote,

    #[error("Please select who picked up the child")]
    NoPickupPerson,

    #[error("Please choose an incident type")]
    MissingIncidentType,

    #[error("Please enter a {0} value")]
    MissingHealthValue(String),

    #[error("Schedule event needs a time and an activity")]
    InvalidScheduleEvent,
}

pub type Result<T> = std::result::Result<T, DaycareError>;
