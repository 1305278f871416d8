//! Navigation controller
//!
//! Single source of truth for what is on screen, who is logged in and
//! which child or conversation the current screen operates on. Every
//! operation is total; out-of-region screens are corrected at resolution
//! time rather than rejected.

use super::{ContextSlot, Region, ScreenId};
use crate::models::{ChatRecord, ChildRecord};
use serde::{Deserialize, Serialize};

/// Display name used when `login` receives a blank name.
pub const FALLBACK_STAFF_NAME: &str = "Staff";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub user_name: String,
    pub photo: Option<String>,
}

impl Session {
    pub fn region(&self) -> Region {
        Region::for_session(self.is_authenticated)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    pub child: Option<ChildRecord>,
    pub chat: Option<ChatRecord>,
}

impl SelectionContext {
    pub fn is_empty(&self) -> bool {
        self.child.is_none() && self.chat.is_none()
    }
}

/// Entity handed to `navigate` for context-dependent screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Selection {
    Child(ChildRecord),
    Chat(ChatRecord),
}

impl Selection {
    pub fn slot(&self) -> ContextSlot {
        match self {
            Selection::Child(_) => ContextSlot::Child,
            Selection::Chat(_) => ContextSlot::Chat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    current_screen: ScreenId,
    session: Session,
    selection: SelectionContext,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current_screen: ScreenId::Login,
            session: Session::default(),
            selection: SelectionContext::default(),
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    pub fn selected_child(&self) -> Option<&ChildRecord> {
        self.selection.child.as_ref()
    }

    pub fn selected_chat(&self) -> Option<&ChatRecord> {
        self.selection.chat.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// Authenticate unconditionally and land on the dashboard.
    pub fn login(&mut self, name: &str) {
        self.login_with_photo(name, None);
    }

    pub fn login_with_photo(&mut self, name: &str, photo: Option<String>) {
        let user_name = if name.trim().is_empty() {
            FALLBACK_STAFF_NAME.to_string()
        } else {
            name.to_string()
        };
        info_log!("[NAV] login as '{}'", user_name);
        self.session = Session {
            is_authenticated: true,
            user_name,
            photo,
        };
        self.current_screen = ScreenId::Dashboard;
    }

    /// Drop the session and selection; back to the initial state.
    pub fn logout(&mut self) {
        info_log!("[NAV] logout '{}'", self.session.user_name);
        self.session = Session::default();
        self.selection = SelectionContext::default();
        self.current_screen = ScreenId::Login;
    }

    /// Switch screens, updating only the selection slot `screen` consumes.
    ///
    /// A context screen reached without a matching payload gets its slot
    /// cleared, so it renders its empty state instead of stale data.
    pub fn navigate(&mut self, screen: ScreenId, payload: Option<Selection>) {
        match (screen.context_slot(), payload) {
            (ContextSlot::Child, Some(Selection::Child(child))) => {
                self.selection.child = Some(child);
            }
            (ContextSlot::Chat, Some(Selection::Chat(chat))) => {
                self.selection.chat = Some(chat);
            }
            (ContextSlot::Child, other) => {
                if let Some(selection) = other {
                    debug_log!("[NAV] {:?} payload ignored for {}", selection.slot(), screen);
                }
                self.selection.child = None;
            }
            (ContextSlot::Chat, other) => {
                if let Some(selection) = other {
                    debug_log!("[NAV] {:?} payload ignored for {}", selection.slot(), screen);
                }
                self.selection.chat = None;
            }
            (ContextSlot::None, Some(selection)) => {
                debug_log!("[NAV] {:?} payload ignored for {}", selection.slot(), screen);
            }
            (ContextSlot::None, None) => {}
        }
        self.current_screen = screen;
        info_log!("[NAV] navigate to {} (renders {})", screen, self.resolve());
    }

    pub fn navigate_to(&mut self, screen: ScreenId) {
        self.navigate(screen, None);
    }

    pub fn navigate_with_child(&mut self, screen: ScreenId, child: ChildRecord) {
        self.navigate(screen, Some(Selection::Child(child)));
    }

    pub fn navigate_with_chat(&mut self, screen: ScreenId, chat: ChatRecord) {
        self.navigate(screen, Some(Selection::Chat(chat)));
    }

    /// Follow the current screen's back arrow, re-sending the selected
    /// child when returning to a child screen.
    pub fn back(&mut self) -> bool {
        let Some(target) = self.resolve().back_target() else {
            return false;
        };
        let payload = match target.context_slot() {
            ContextSlot::Child => self.selection.child.clone().map(Selection::Child),
            ContextSlot::Chat => self.selection.chat.clone().map(Selection::Chat),
            ContextSlot::None => None,
        };
        self.navigate(target, payload);
        true
    }

    /// The screen that is actually rendered for the current state.
    pub fn resolve(&self) -> ScreenId {
        let region = self.session.region();
        if self.current_screen.region() == region {
            self.current_screen
        } else {
            region.default_screen()
        }
    }
}
