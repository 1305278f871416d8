//! TUI Types Module
//!
//! Events flowing into the loop, the entries a screen is made of and the
//! modal dialogs drawn over it.

use daycare_core::models::{MediaKind, PresenceStatus};
use daycare_core::navigation::ScreenId;

/// Events delivered to the main loop
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(crossterm::event::Event),
    Tick,
}

/// Editable text fields across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LoginEmail,
    LoginPassword,
    SignupName,
    SignupEmail,
    SignupPhone,
    SignupPassword,
    SignupConfirm,
    ResetEmail,
    ChildSearch,
    ChatSearch,
    Allergies,
    AttendanceFrom,
    AttendanceTo,
    NoteDraft,
    Caption,
    IncidentTime,
    IncidentDescription,
    IncidentAction,
    ChatDraft,
    EventTime,
    EventActivity,
    HealthValue,
    HealthSymptoms,
    HealthNotes,
    PickupNotes,
}

impl Field {
    pub fn masked(self) -> bool {
        matches!(
            self,
            Field::LoginPassword | Field::SignupPassword | Field::SignupConfirm
        )
    }

    /// Action fired by Enter while the field is focused.
    pub fn submit(self) -> Option<Action> {
        match self {
            Field::LoginEmail | Field::LoginPassword => Some(Action::Login),
            Field::SignupName
            | Field::SignupEmail
            | Field::SignupPhone
            | Field::SignupPassword
            | Field::SignupConfirm => Some(Action::Register),
            Field::ResetEmail => Some(Action::SendReset),
            Field::NoteDraft => Some(Action::AddNote),
            Field::ChatDraft => Some(Action::SendText),
            _ => None,
        }
    }
}

/// Fields that cycle through a fixed set of values with Left/Right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    IncidentChild,
    IncidentType,
    EventIcon,
    EventColor,
    HealthChild,
    HealthType,
}

/// Everything a selectable entry can trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Open(ScreenId),
    /// Open a child sub-screen with the selected child
    OpenForChild(ScreenId),
    Login,
    Register,
    SendReset,
    ViewChild(u32),
    CallParent(u32),
    MessageParent(u32),
    SaveAllergies,
    StartAttendance,
    EditAttendance(u32),
    ToggleAttendance(u32),
    MarkAll(PresenceStatus),
    SaveAttendance,
    CancelAttendance,
    AddNote,
    Capture(MediaKind),
    DeleteMedia(u32),
    SubmitIncident,
    OpenChat(u32),
    SendText,
    SendPhoto,
    ToggleRecording,
    NewEvent,
    EditEvent(u32),
    DeleteEvent(u32),
    SaveEvent,
    CancelEvent,
    NewHealthLog,
    SaveHealthLog,
    CancelHealthLog,
    SelectPickup(u32),
    VerifyPickup,
    AlertInfo,
    Notice(&'static str, &'static str),
    Logout,
    ToggleLogs,
}

/// Colour hint for display-only lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Muted,
    Accent,
    Good,
    Warn,
    Bad,
    Staff,
    Parent,
}

/// One row of a screen body
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Heading(String),
    Text(String, Tone),
    Input {
        field: Field,
        label: &'static str,
    },
    Choice {
        choice: Choice,
        label: &'static str,
        value: String,
    },
    Button {
        action: Action,
        label: String,
    },
    Item {
        action: Action,
        title: String,
        detail: String,
        tone: Tone,
    },
}

impl Entry {
    pub fn text(text: impl Into<String>) -> Self {
        Entry::Text(text.into(), Tone::Normal)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Entry::Text(text.into(), Tone::Muted)
    }

    pub fn button(action: Action, label: impl Into<String>) -> Self {
        Entry::Button {
            action,
            label: label.into(),
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, Entry::Heading(_) | Entry::Text(..))
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            Entry::Button { action, .. } | Entry::Item { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// Confirmed operations waiting on a y/n answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmAction {
    Logout,
    DeleteMedia(u32),
    DeleteEvent(u32),
    Exit,
}

/// Modal overlay; while one is open it receives every key
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Notice {
        title: String,
        message: String,
    },
    Confirm {
        title: String,
        message: String,
        action: ConfirmAction,
    },
}

impl Dialog {
    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog::Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>, action: ConfirmAction) -> Self {
        Dialog::Confirm {
            title: title.into(),
            message: message.into(),
            action,
        }
    }
}
