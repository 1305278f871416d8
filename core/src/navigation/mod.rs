//! Screen identifiers and the navigation state machine
//!
//! The screen set is closed. Which screens are reachable depends only on
//! the session's region (authenticated or not); which selection slot a
//! screen consumes is fixed per screen by [`ScreenId::context_slot`].

pub mod controller;

pub use controller::{NavigationController, Selection, SelectionContext, Session, FALLBACK_STAFF_NAME};

use crate::error::DaycareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenId {
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Children,
    ChildProfile,
    Attendance,
    DailyNotes,
    UploadMedia,
    Incidents,
    ChatList,
    Chat,
    Schedule,
    HealthLog,
    Pickup,
    AiAlerts,
    Settings,
}

/// Authentication partition of the screen set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Unauthenticated,
    Authenticated,
}

impl Region {
    pub fn for_session(authenticated: bool) -> Self {
        if authenticated {
            Region::Authenticated
        } else {
            Region::Unauthenticated
        }
    }

    /// Where an out-of-region screen lands.
    pub fn default_screen(self) -> ScreenId {
        match self {
            Region::Unauthenticated => ScreenId::Login,
            Region::Authenticated => ScreenId::Dashboard,
        }
    }
}

/// The selection slot a screen reads its entity from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSlot {
    Child,
    Chat,
    None,
}

impl ScreenId {
    pub const ALL: [ScreenId; 17] = [
        ScreenId::Login,
        ScreenId::Signup,
        ScreenId::ForgotPassword,
        ScreenId::Dashboard,
        ScreenId::Children,
        ScreenId::ChildProfile,
        ScreenId::Attendance,
        ScreenId::DailyNotes,
        ScreenId::UploadMedia,
        ScreenId::Incidents,
        ScreenId::ChatList,
        ScreenId::Chat,
        ScreenId::Schedule,
        ScreenId::HealthLog,
        ScreenId::Pickup,
        ScreenId::AiAlerts,
        ScreenId::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Signup => "signup",
            ScreenId::ForgotPassword => "forgotPassword",
            ScreenId::Dashboard => "dashboard",
            ScreenId::Children => "children",
            ScreenId::ChildProfile => "childProfile",
            ScreenId::Attendance => "attendance",
            ScreenId::DailyNotes => "dailyNotes",
            ScreenId::UploadMedia => "uploadMedia",
            ScreenId::Incidents => "incidents",
            ScreenId::ChatList => "chatList",
            ScreenId::Chat => "chat",
            ScreenId::Schedule => "schedule",
            ScreenId::HealthLog => "healthLog",
            ScreenId::Pickup => "pickup",
            ScreenId::AiAlerts => "aiAlerts",
            ScreenId::Settings => "settings",
        }
    }

    /// Header title shown above the screen.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Login => "Staff Login",
            ScreenId::Signup => "Create Account",
            ScreenId::ForgotPassword => "Forgot Password",
            ScreenId::Dashboard => "Dashboard",
            ScreenId::Children => "Children",
            ScreenId::ChildProfile => "Child Profile",
            ScreenId::Attendance => "Attendance",
            ScreenId::DailyNotes => "Daily Notes",
            ScreenId::UploadMedia => "Upload Media",
            ScreenId::Incidents => "Incident Report",
            ScreenId::ChatList => "Messages",
            ScreenId::Chat => "Chat",
            ScreenId::Schedule => "Daily Schedule",
            ScreenId::HealthLog => "Health Log",
            ScreenId::Pickup => "Pickup Verification",
            ScreenId::AiAlerts => "AI Alerts",
            ScreenId::Settings => "Settings",
        }
    }

    pub fn region(self) -> Region {
        match self {
            ScreenId::Login | ScreenId::Signup | ScreenId::ForgotPassword => Region::Unauthenticated,
            _ => Region::Authenticated,
        }
    }

    pub fn context_slot(self) -> ContextSlot {
        match self {
            ScreenId::ChildProfile
            | ScreenId::DailyNotes
            | ScreenId::UploadMedia
            | ScreenId::HealthLog => ContextSlot::Child,
            ScreenId::Chat => ContextSlot::Chat,
            ScreenId::Login
            | ScreenId::Signup
            | ScreenId::ForgotPassword
            | ScreenId::Dashboard
            | ScreenId::Children
            | ScreenId::Attendance
            | ScreenId::Incidents
            | ScreenId::ChatList
            | ScreenId::Schedule
            | ScreenId::Pickup
            | ScreenId::AiAlerts
            | ScreenId::Settings => ContextSlot::None,
        }
    }

    /// Target of the screen's back arrow, if it has one.
    pub fn back_target(self) -> Option<ScreenId> {
        match self {
            ScreenId::Login | ScreenId::Dashboard => None,
            ScreenId::Signup | ScreenId::ForgotPassword => Some(ScreenId::Login),
            ScreenId::ChildProfile => Some(ScreenId::Children),
            ScreenId::DailyNotes | ScreenId::UploadMedia => Some(ScreenId::ChildProfile),
            ScreenId::Chat => Some(ScreenId::ChatList),
            ScreenId::Children
            | ScreenId::Attendance
            | ScreenId::Incidents
            | ScreenId::ChatList
            | ScreenId::Schedule
            | ScreenId::HealthLog
            | ScreenId::Pickup
            | ScreenId::AiAlerts
            | ScreenId::Settings => Some(ScreenId::Dashboard),
        }
    }

    /// Bottom-bar tab highlighted while this screen is shown.
    pub fn bottom_tab(self) -> Option<ScreenId> {
        match self {
            ScreenId::Dashboard | ScreenId::Children | ScreenId::Attendance | ScreenId::Schedule | ScreenId::AiAlerts => {
                Some(ScreenId::Dashboard)
            }
            ScreenId::ChatList => Some(ScreenId::ChatList),
            ScreenId::Settings => Some(ScreenId::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenId {
    type Err = DaycareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ScreenId::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DaycareError::UnknownScreen(wanted.to_string()))
    }
}

/// Tabs of the bottom navigation bar, in display order.
pub const BOTTOM_TABS: [(ScreenId, &str); 3] = [
    (ScreenId::Dashboard, "Home"),
    (ScreenId::ChatList, "Chat"),
    (ScreenId::Settings, "Settings"),
];
