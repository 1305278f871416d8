//! Application state management
//!
//! `App` owns the navigation controller, the in-memory books every screen
//! reads from, and the screen-local form state.

use crate::tui::types::{Dialog, Entry};
use chrono::NaiveDate;
use daycare_core::attendance::{AttendanceBook, AttendanceSheet};
use daycare_core::auth::{ForgotPasswordForm, LoginForm, SignupForm};
use daycare_core::chat::ChatBook;
use daycare_core::health::{HealthBook, HealthForm};
use daycare_core::incident::{IncidentForm, IncidentLog};
use daycare_core::media::MediaGallery;
use daycare_core::models::{AiAlert, ChatRecord, ChildRecord};
use daycare_core::notes::NoteBook;
use daycare_core::pickup::PickupVerification;
use daycare_core::schedule::{EventDraft, Schedule};
use daycare_core::{clock, debug_log, mock, Config, NavigationController, ScreenId};
use std::collections::HashMap;

/// Event being added (`id` is `None`) or edited on the schedule screen
#[derive(Debug, Clone, PartialEq)]
pub struct EventEditor {
    pub id: Option<u32>,
    pub draft: EventDraft,
}

pub struct App {
    pub config: Config,
    pub nav: NavigationController,
    pub dialog: Option<Dialog>,
    pub show_logs: bool,
    pub should_quit: bool,
    /// Transient one-line feedback under the screen body
    pub status_message: Option<String>,

    /// Screen the local state was last prepared for
    pub(crate) screen: ScreenId,
    /// Index among the selectable entries of the current screen
    pub selected: usize,
    /// Character position inside the focused text field
    pub cursor_position: usize,
    pub today: NaiveDate,

    // Data
    pub children: Vec<ChildRecord>,
    pub chats: Vec<ChatRecord>,
    pub alerts: Vec<AiAlert>,
    pub attendance: AttendanceBook,
    pub chat_book: ChatBook,
    pub notes: NoteBook,
    pub media: MediaGallery,
    pub health: HealthBook,
    pub incidents: IncidentLog,
    pub schedule: Schedule,
    pub allergies: HashMap<u32, String>,

    // Screen-local state
    pub login: LoginForm,
    pub signup: SignupForm,
    pub forgot: ForgotPasswordForm,
    pub child_search: String,
    pub chat_search: String,
    pub allergies_draft: String,
    pub sheet: Option<AttendanceSheet>,
    pub note_draft: String,
    pub caption: String,
    pub incident: IncidentForm,
    pub chat_draft: String,
    pub event_editor: Option<EventEditor>,
    pub health_child: usize,
    pub health_form: Option<HealthForm>,
    pub pickup: PickupVerification,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_date(config, clock::today())
    }

    pub fn with_date(config: Config, today: NaiveDate) -> Self {
        let mut login = LoginForm::default();
        login.email = default_email(&config.staff.name);
        Self {
            config,
            nav: NavigationController::new(),
            dialog: None,
            show_logs: false,
            should_quit: false,
            status_message: None,
            screen: ScreenId::Login,
            selected: 0,
            cursor_position: login.email.chars().count(),
            today,
            children: mock::children(),
            chats: mock::chats(),
            alerts: mock::ai_alerts(),
            attendance: AttendanceBook::new(mock::attendance_records(today)),
            chat_book: ChatBook::new(),
            notes: NoteBook::new(),
            media: MediaGallery::new(),
            health: HealthBook::new(),
            incidents: IncidentLog::default(),
            schedule: Schedule::new(today),
            allergies: HashMap::new(),
            login,
            signup: SignupForm::default(),
            forgot: ForgotPasswordForm::default(),
            child_search: String::new(),
            chat_search: String::new(),
            allergies_draft: String::new(),
            sheet: None,
            note_draft: String::new(),
            caption: String::new(),
            incident: IncidentForm::default(),
            chat_draft: String::new(),
            event_editor: None,
            health_child: 0,
            health_form: None,
            pickup: PickupVerification::default(),
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.nav.resolve()
    }

    pub fn notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.dialog = Some(Dialog::notice(title, message));
    }

    /// Prepare local state when the resolved screen changed since the last call.
    pub fn sync_screen(&mut self) {
        let screen = self.nav.resolve();
        if screen == self.screen {
            return;
        }
        debug_log!("[TUI] screen {} -> {}", self.screen, screen);
        if self.screen == ScreenId::Chat {
            self.chat_book.cancel_recording();
        }
        self.screen = screen;
        self.selected = 0;
        match screen {
            ScreenId::Login => self.login.password.clear(),
            ScreenId::Signup => self.signup = SignupForm::default(),
            ScreenId::ForgotPassword => self.forgot.reset(),
            ScreenId::ChildProfile => {
                self.allergies_draft = self
                    .nav
                    .selected_child()
                    .map(|child| self.allergies_for(child.id).to_string())
                    .unwrap_or_default();
            }
            ScreenId::Attendance => self.sheet = None,
            ScreenId::DailyNotes => self.note_draft.clear(),
            ScreenId::UploadMedia => self.caption.clear(),
            ScreenId::Incidents => self.incident = IncidentForm::default(),
            ScreenId::Chat => self.chat_draft.clear(),
            ScreenId::Schedule => self.event_editor = None,
            ScreenId::HealthLog => {
                self.health_child = self
                    .nav
                    .selected_child()
                    .and_then(|selected| self.children.iter().position(|c| c.id == selected.id))
                    .unwrap_or(0);
                self.health_form = None;
            }
            ScreenId::Pickup => self.pickup = PickupVerification::default(),
            _ => {}
        }
        self.focus_changed();
    }

    pub fn allergies_for(&self, child_id: u32) -> &str {
        self.allergies
            .get(&child_id)
            .map(String::as_str)
            .unwrap_or(mock::DEFAULT_ALLERGIES)
    }

    /// Child the health log screen is showing.
    pub fn health_child(&self) -> Option<&ChildRecord> {
        self.children.get(self.health_child)
    }

    /// Entries of the current screen that can take focus, with their index in `entries`.
    pub fn selectable(entries: &[Entry]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_selectable())
            .map(|(i, _)| i)
            .collect()
    }

    /// The focused entry of the current screen.
    pub fn selected_entry(&self) -> Option<Entry> {
        let entries = self.entries();
        let selectable = Self::selectable(&entries);
        let index = *selectable.get(self.selected.min(selectable.len().saturating_sub(1)))?;
        entries.into_iter().nth(index)
    }

    pub fn select_next(&mut self) {
        let count = Self::selectable(&self.entries()).len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
        self.focus_changed();
    }

    pub fn select_previous(&mut self) {
        let count = Self::selectable(&self.entries()).len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
        self.focus_changed();
    }

    /// Keep the selection inside the current entry list after it shrank.
    pub fn clamp_selection(&mut self) {
        let count = Self::selectable(&self.entries()).len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
            self.focus_changed();
        }
    }

    /// Put the cursor at the end of the newly focused field.
    pub fn focus_changed(&mut self) {
        self.cursor_position = match self.selected_entry() {
            Some(Entry::Input { field, .. }) => self.field_value(field).chars().count(),
            _ => 0,
        };
    }
}

fn default_email(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or("staff");
    format!("{}@littlestars.com", first.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycare_core::navigation::Selection;

    fn app() -> App {
        App::with_date(Config::default(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
    }

    #[test]
    fn test_starts_on_login_with_prefilled_email() {
        let app = app();
        assert_eq!(app.current_screen(), ScreenId::Login);
        assert!(app.login.email.ends_with("@littlestars.com"));
        assert_eq!(app.cursor_position, app.login.email.chars().count());
    }

    #[test]
    fn test_sync_screen_prepares_health_child() {
        let mut app = app();
        app.nav.login("Alice");
        let oliver = mock::find_child(2).unwrap();
        app.nav.navigate(ScreenId::HealthLog, Some(Selection::Child(oliver)));
        app.sync_screen();
        assert_eq!(app.health_child().unwrap().name, "Oliver Brown");

        app.nav.navigate_to(ScreenId::Dashboard);
        app.sync_screen();
        app.nav.navigate_to(ScreenId::HealthLog);
        app.sync_screen();
        assert_eq!(app.health_child().unwrap().name, "Emma Wilson");
    }

    #[test]
    fn test_leaving_chat_stops_recording() {
        let mut app = app();
        app.nav.login("Alice");
        let chat = mock::find_chat(1).unwrap();
        app.nav.navigate(ScreenId::Chat, Some(Selection::Chat(chat.clone())));
        app.sync_screen();
        app.chat_book.toggle_recording(&chat, "10:00 AM");
        assert!(app.chat_book.is_recording(&chat));

        app.nav.back();
        app.sync_screen();
        assert!(!app.chat_book.is_recording(&chat));
    }

    #[test]
    fn test_profile_loads_saved_allergies() {
        let mut app = app();
        app.nav.login("Alice");
        app.allergies.insert(1, "None known".to_string());
        app.nav.navigate(ScreenId::ChildProfile, Some(Selection::Child(mock::find_child(1).unwrap())));
        app.sync_screen();
        assert_eq!(app.allergies_draft, "None known");
    }

    #[test]
    fn test_default_email() {
        assert_eq!(default_email("Sarah Johnson"), "sarah@littlestars.com");
        assert_eq!(default_email(""), "staff@littlestars.com");
    }
}
