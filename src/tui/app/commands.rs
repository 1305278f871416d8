//! Screen actions
//!
//! Each action delegates the domain change to `daycare-core` and turns
//! validation failures into a notice dialog.

use crate::tui::app::state::{App, EventEditor};
use crate::tui::types::{Action, ConfirmAction, Dialog, Entry};
use daycare_core::alerts::VIEW_ONLY_NOTICE;
use daycare_core::attendance::AttendanceSheet;
use daycare_core::auth::SignupForm;
use daycare_core::health::HealthForm;
use daycare_core::incident::IncidentLog;
use daycare_core::models::{ChatRecord, PresenceStatus};
use daycare_core::pickup::PickupVerification;
use daycare_core::schedule::EventDraft;
use daycare_core::{clock, error_log, info_log, mock, roster, DaycareError, ScreenId};

impl App {
    fn reject(&mut self, err: DaycareError) {
        log::debug!("rejected on {}: {}", self.current_screen(), err);
        self.notice("Oops", err.to_string());
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Open(screen) => self.nav.navigate_to(screen),
            Action::OpenForChild(screen) => match self.nav.selected_child().cloned() {
                Some(child) => self.nav.navigate_with_child(screen, child),
                None => self.nav.navigate_to(screen),
            },
            Action::Login => self.submit_login(),
            Action::Register => match self.signup.validate() {
                Ok(()) => {
                    info_log!("[AUTH] signup request for '{}'", self.signup.email.trim());
                    self.signup = SignupForm::default();
                    self.nav.navigate_to(ScreenId::Login);
                    self.notice("Registration", SignupForm::SUCCESS_NOTICE);
                }
                Err(e) => self.reject(e),
            },
            Action::SendReset => {
                if let Err(e) = self.forgot.submit() {
                    self.reject(e);
                }
            }
            Action::ViewChild(id) => {
                if let Some(child) = self.find_child(id) {
                    self.nav.navigate_with_child(ScreenId::ChildProfile, child);
                }
            }
            Action::CallParent(id) => {
                if let Some(child) = self.find_child(id) {
                    self.notice("Call", roster::call_notice(&child));
                }
            }
            Action::MessageParent(id) => {
                if let Some(child) = self.find_child(id) {
                    self.nav.navigate_with_chat(ScreenId::Chat, ChatRecord::for_child(&child));
                }
            }
            Action::SaveAllergies => {
                if let Some(child) = self.nav.selected_child() {
                    let id = child.id;
                    self.allergies.insert(id, self.allergies_draft.trim().to_string());
                    self.notice("Allergies", "Medical information updated successfully!");
                }
            }
            Action::StartAttendance => {
                self.sheet = Some(AttendanceSheet::new(&self.children, self.today));
                self.selected = 0;
            }
            Action::EditAttendance(id) => {
                if let Some(record) = self.attendance.records.iter().find(|r| r.id == id) {
                    self.sheet = Some(AttendanceSheet::for_record(&self.children, record, self.today));
                    self.selected = 0;
                }
            }
            Action::ToggleAttendance(id) => self.mark_attendance(id, PresenceStatus::Present),
            Action::MarkAll(status) => {
                if let Some(sheet) = self.sheet.as_mut() {
                    sheet.mark_all(status);
                }
            }
            Action::SaveAttendance => self.save_attendance(),
            Action::CancelAttendance => {
                self.sheet = None;
                self.selected = 0;
            }
            Action::AddNote => self.add_note(),
            Action::Capture(kind) => {
                if let Some(child) = self.nav.selected_child().cloned() {
                    let item = self.media.upload(&child, kind, &self.caption, &clock::now_time_label());
                    self.caption.clear();
                    self.status_message = Some(format!("Uploaded \"{}\"", item.caption));
                }
            }
            Action::DeleteMedia(id) => {
                self.dialog = Some(Dialog::confirm(
                    "Delete media",
                    "Are you sure you want to delete this item?",
                    ConfirmAction::DeleteMedia(id),
                ));
            }
            Action::SubmitIncident => {
                match self.incidents.submit(&self.incident, &mock::picker_children()) {
                    Ok(report) => {
                        info_log!("[INCIDENT] {} for {}", report.kind, report.child_name);
                        self.nav.navigate_to(ScreenId::Dashboard);
                        self.notice("Incident", IncidentLog::SUBMITTED_NOTICE);
                    }
                    Err(e) => self.reject(e),
                }
            }
            Action::OpenChat(id) => {
                if let Some(chat) = self.chats.iter().find(|c| c.id == id).cloned() {
                    self.nav.navigate_with_chat(ScreenId::Chat, chat);
                }
            }
            Action::SendText => {
                if let Some(chat) = self.nav.selected_chat().cloned() {
                    if self
                        .chat_book
                        .send_text(&chat, &self.chat_draft, &clock::now_time_label())
                        .is_some()
                    {
                        self.chat_draft.clear();
                        self.cursor_position = 0;
                    }
                }
            }
            Action::SendPhoto => {
                if let Some(chat) = self.nav.selected_chat().cloned() {
                    self.chat_book.send_photo(&chat, &clock::now_time_label());
                }
            }
            Action::ToggleRecording => {
                if let Some(chat) = self.nav.selected_chat().cloned() {
                    let sent = self.chat_book.toggle_recording(&chat, &clock::now_time_label());
                    self.status_message = Some(match sent {
                        Some(_) => "Voice message sent".to_string(),
                        None => "Recording...".to_string(),
                    });
                }
            }
            Action::NewEvent => {
                self.event_editor = Some(EventEditor {
                    id: None,
                    draft: EventDraft::default(),
                });
                self.selected = 0;
            }
            Action::EditEvent(id) => {
                if let Some(event) = self.schedule.get(id) {
                    self.event_editor = Some(EventEditor {
                        id: Some(id),
                        draft: EventDraft::from_event(event),
                    });
                    self.selected = 0;
                }
            }
            Action::DeleteEvent(id) => {
                self.dialog = Some(Dialog::confirm(
                    "Delete event",
                    "Are you sure you want to delete this event?",
                    ConfirmAction::DeleteEvent(id),
                ));
            }
            Action::SaveEvent => self.save_event(),
            Action::CancelEvent => {
                self.event_editor = None;
                self.selected = 0;
            }
            Action::NewHealthLog => {
                self.health_form = Some(HealthForm::default());
                self.selected = 1;
            }
            Action::SaveHealthLog => self.save_health_log(),
            Action::CancelHealthLog => {
                self.health_form = None;
                self.selected = 0;
            }
            Action::SelectPickup(id) => self.pickup.select(id),
            Action::VerifyPickup => match self.pickup.verify(&clock::now_time_label()) {
                Ok(message) => {
                    info_log!("[PICKUP] {}", message);
                    self.pickup = PickupVerification::default();
                    self.nav.navigate_to(ScreenId::Dashboard);
                    self.notice("Pickup", message);
                }
                Err(e) => self.reject(e),
            },
            Action::AlertInfo => self.notice("AI Alerts", VIEW_ONLY_NOTICE),
            Action::Notice(title, message) => self.notice(title, message),
            Action::Logout => {
                if self.config.ui.confirm_logout {
                    self.dialog = Some(Dialog::confirm(
                        "Logout",
                        "Are you sure you want to logout?",
                        ConfirmAction::Logout,
                    ));
                } else {
                    self.logout();
                }
            }
            Action::ToggleLogs => self.show_logs = !self.show_logs,
        }
        self.clamp_selection();
    }

    /// Run a confirmed dialog action.
    pub fn confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::Logout => self.logout(),
            ConfirmAction::DeleteMedia(id) => {
                if let Some(child) = self.nav.selected_child().cloned() {
                    if self.media.delete(&child, id) {
                        self.status_message = Some("Media deleted".to_string());
                    }
                }
            }
            ConfirmAction::DeleteEvent(id) => {
                if self.schedule.delete(id) {
                    self.status_message = Some("Event deleted".to_string());
                }
            }
            ConfirmAction::Exit => self.should_quit = true,
        }
        self.clamp_selection();
    }

    /// Single-key shortcuts on the focused row. Returns whether the key was used.
    pub fn hotkey(&mut self, c: char) -> bool {
        let Some(action) = self.selected_entry().as_ref().and_then(Entry::action) else {
            return false;
        };
        match (action, c.to_ascii_lowercase()) {
            (Action::ViewChild(id), 'c') => self.perform(Action::CallParent(id)),
            (Action::ViewChild(id), 'm') => self.perform(Action::MessageParent(id)),
            (Action::ToggleAttendance(id), 'p') => self.mark_attendance(id, PresenceStatus::Present),
            (Action::ToggleAttendance(id), 'a') => self.mark_attendance(id, PresenceStatus::Absent),
            (Action::DeleteMedia(id), 'd') => self.perform(Action::DeleteMedia(id)),
            (Action::EditEvent(id), 'd') => self.perform(Action::DeleteEvent(id)),
            _ => return false,
        }
        true
    }

    /// Left/Right on a non-input row steps the day on dated screens.
    pub fn shift_day(&mut self, forward: bool) -> bool {
        match self.current_screen() {
            ScreenId::Attendance => match self.sheet.as_mut() {
                Some(sheet) if forward => sheet.next_day(),
                Some(sheet) => sheet.previous_day(),
                None => return false,
            },
            ScreenId::Schedule if forward => self.schedule.next_day(),
            ScreenId::Schedule => self.schedule.previous_day(),
            _ => return false,
        }
        true
    }

    fn submit_login(&mut self) {
        if let Err(e) = self.login.validate() {
            self.reject(e);
            return;
        }
        let staff = &self.config.staff;
        self.nav
            .login_with_photo(&staff.name, Some(staff.photo.clone()));
        self.login.password.clear();
    }

    fn logout(&mut self) {
        self.nav.logout();
        self.sheet = None;
        self.event_editor = None;
        self.health_form = None;
        self.chat_book.cancel_recording();
    }

    fn find_child(&self, id: u32) -> Option<daycare_core::models::ChildRecord> {
        self.children.iter().find(|c| c.id == id).cloned()
    }

    fn mark_attendance(&mut self, id: u32, status: PresenceStatus) {
        if let Some(sheet) = self.sheet.as_mut() {
            sheet.toggle(id, status);
        }
    }

    fn save_attendance(&mut self) {
        let Some(sheet) = self.sheet.as_ref() else {
            return;
        };
        match self.attendance.save(sheet) {
            Ok(record) => {
                info_log!(
                    "[ATTENDANCE] saved {} ({} present, {} absent)",
                    record.date,
                    record.present,
                    record.absent
                );
                self.sheet = None;
                self.selected = 0;
                self.notice("Attendance", "Attendance saved successfully!");
            }
            Err(e) => self.reject(e),
        }
    }

    fn add_note(&mut self) {
        let Some(child) = self.nav.selected_child().cloned() else {
            return;
        };
        let today = clock::date_label(self.today);
        match self
            .notes
            .add(&child, &self.note_draft, &clock::now_time_label(), &today)
        {
            Ok(_) => {
                self.note_draft.clear();
                self.cursor_position = 0;
                self.status_message = Some("Note added".to_string());
            }
            Err(e) => self.reject(e),
        }
    }

    fn save_event(&mut self) {
        let Some(editor) = self.event_editor.clone() else {
            return;
        };
        let saved = match editor.id {
            Some(id) => self.schedule.update(id, &editor.draft),
            None => self.schedule.add(&editor.draft).map(|_| ()),
        };
        match saved {
            Ok(()) => {
                self.event_editor = None;
                self.selected = 0;
                self.status_message = Some("Schedule updated".to_string());
            }
            Err(e) => self.reject(e),
        }
    }

    fn save_health_log(&mut self) {
        let (Some(child), Some(form)) = (self.health_child().cloned(), self.health_form.clone()) else {
            return;
        };
        match self.health.add(&child, &form, &clock::now_time_label()) {
            Ok(log) => {
                info_log!("[HEALTH] {} for {}", log.kind, child.name);
                self.health_form = None;
                self.selected = 0;
                self.notice("Health Log", "Health log added successfully!");
            }
            Err(e) => {
                error_log!("[HEALTH] rejected: {}", e);
                self.reject(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::App;
    use crate::tui::types::{Action, ConfirmAction, Dialog};
    use chrono::NaiveDate;
    use daycare_core::models::{MediaKind, PresenceStatus};
    use daycare_core::navigation::Selection;
    use daycare_core::{mock, Config, ScreenId};

    fn app() -> App {
        let mut config = Config::default();
        config.staff.name = "Sarah Johnson".to_string();
        App::with_date(config, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
    }

    fn logged_in() -> App {
        let mut app = app();
        app.login.password = "secret".to_string();
        app.perform(Action::Login);
        app.sync_screen();
        app
    }

    fn notice_text(app: &App) -> String {
        match &app.dialog {
            Some(Dialog::Notice { message, .. }) => message.clone(),
            other => panic!("expected notice, got {:?}", other),
        }
    }

    #[test]
    fn test_login_requires_password() {
        let mut app = app();
        app.perform(Action::Login);
        assert_eq!(notice_text(&app), "Please fill in password");
        assert!(!app.nav.is_authenticated());
    }

    #[test]
    fn test_login_uses_configured_staff() {
        let app = logged_in();
        assert_eq!(app.current_screen(), ScreenId::Dashboard);
        assert_eq!(app.nav.session().user_name, "Sarah Johnson");
        assert!(app.nav.session().photo.is_some());
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn test_signup_success_returns_to_login() {
        let mut app = app();
        app.perform(Action::Open(ScreenId::Signup));
        app.sync_screen();
        app.signup.full_name = "Maya Lee".into();
        app.signup.email = "maya@littlestars.com".into();
        app.signup.phone = "555".into();
        app.signup.password = "pw".into();
        app.signup.confirm_password = "pw".into();
        app.perform(Action::Register);
        assert_eq!(app.current_screen(), ScreenId::Login);
        assert_eq!(
            notice_text(&app),
            "Registration successful! Please contact admin for account activation."
        );
    }

    #[test]
    fn test_message_parent_opens_chat_for_child() {
        let mut app = logged_in();
        app.perform(Action::MessageParent(3));
        assert_eq!(app.current_screen(), ScreenId::Chat);
        assert_eq!(app.nav.selected_chat().unwrap().parent_name, "Emily Davis");
    }

    #[test]
    fn test_message_parent_leaves_listed_chat_alone() {
        let mut app = logged_in();
        let listed = mock::find_chat(2).unwrap();
        let before = app.chat_book.messages(&listed).into_owned();

        app.perform(Action::MessageParent(2));
        app.sync_screen();
        assert_eq!(app.nav.selected_chat().unwrap().parent_name, "John Brown");
        app.chat_draft = "Oliver napped well".into();
        app.perform(Action::SendText);

        assert_eq!(app.chat_book.messages(&listed).as_ref(), before.as_slice());
        let chat = app.nav.selected_chat().cloned().unwrap();
        assert_eq!(app.chat_book.messages(&chat).last().unwrap().content, "Oliver napped well");
    }

    #[test]
    fn test_call_parent_notice() {
        let mut app = logged_in();
        app.perform(Action::CallParent(1));
        assert_eq!(notice_text(&app), "Calling Sarah Wilson at +1 (555) 123-4567...");
    }

    #[test]
    fn test_save_allergies_notice() {
        let mut app = logged_in();
        app.perform(Action::ViewChild(1));
        app.sync_screen();
        app.allergies_draft = "None known".into();
        app.perform(Action::SaveAllergies);
        assert_eq!(notice_text(&app), "Medical information updated successfully!");
        assert_eq!(app.allergies_for(1), "None known");
    }

    #[test]
    fn test_attendance_flow() {
        let mut app = logged_in();
        app.perform(Action::Open(ScreenId::Attendance));
        app.sync_screen();
        app.perform(Action::StartAttendance);
        app.perform(Action::ToggleAttendance(1));
        app.perform(Action::SaveAttendance);
        assert_eq!(notice_text(&app), "Please mark attendance for all children");
        assert!(app.sheet.is_some());

        app.dialog = None;
        app.perform(Action::MarkAll(PresenceStatus::Present));
        app.perform(Action::SaveAttendance);
        assert_eq!(notice_text(&app), "Attendance saved successfully!");
        assert!(app.sheet.is_none());
        assert_eq!(app.attendance.records.len(), 4);
        assert_eq!(app.attendance.records[0].present, 8);
    }

    #[test]
    fn test_media_delete_needs_confirmation() {
        let mut app = logged_in();
        let emma = mock::find_child(1).unwrap();
        app.nav.navigate(ScreenId::UploadMedia, Some(Selection::Child(emma.clone())));
        app.sync_screen();
        app.caption = "Painting".into();
        app.perform(Action::Capture(MediaKind::Photo));
        let newest = app.media.items(&emma)[0].clone();
        assert_eq!(newest.caption, "Painting");

        app.perform(Action::DeleteMedia(newest.id));
        assert!(matches!(
            app.dialog,
            Some(Dialog::Confirm { action: ConfirmAction::DeleteMedia(_), .. })
        ));
        assert_eq!(app.media.items(&emma).len(), 3);
        app.dialog = None;
        app.confirm(ConfirmAction::DeleteMedia(newest.id));
        assert_eq!(app.media.items(&emma).len(), 2);
    }

    #[test]
    fn test_incident_submit_goes_home() {
        let mut app = logged_in();
        app.perform(Action::Open(ScreenId::Incidents));
        app.sync_screen();
        app.perform(Action::SubmitIncident);
        assert_eq!(notice_text(&app), "Please choose an incident type");

        app.incident.kind = Some(1);
        app.incident.time = "10:15 AM".into();
        app.incident.description = "Pushed a friend".into();
        app.perform(Action::SubmitIncident);
        assert_eq!(
            notice_text(&app),
            "Incident report submitted. Parent has been notified."
        );
        assert_eq!(app.current_screen(), ScreenId::Dashboard);
        assert_eq!(app.incidents.reports.len(), 1);
    }

    #[test]
    fn test_pickup_flow() {
        let mut app = logged_in();
        app.perform(Action::Open(ScreenId::Pickup));
        app.sync_screen();
        app.perform(Action::VerifyPickup);
        assert_eq!(notice_text(&app), "Please select who picked up the child");

        app.perform(Action::SelectPickup(2));
        app.perform(Action::VerifyPickup);
        let message = notice_text(&app);
        assert!(message.starts_with("Pickup verified: Emma Wilson picked up by John Wilson at "));
        assert_eq!(app.current_screen(), ScreenId::Dashboard);
    }

    #[test]
    fn test_health_log_flow() {
        let mut app = logged_in();
        app.perform(Action::Open(ScreenId::HealthLog));
        app.sync_screen();
        app.perform(Action::NewHealthLog);
        app.perform(Action::SaveHealthLog);
        assert_eq!(notice_text(&app), "Please enter a temperature value");

        app.health_form.as_mut().unwrap().value = "98.6".into();
        app.perform(Action::SaveHealthLog);
        assert_eq!(notice_text(&app), "Health log added successfully!");
        let emma = mock::find_child(1).unwrap();
        assert_eq!(app.health.logs(&emma)[0].value, "98.6°F");
    }

    #[test]
    fn test_logout_confirmation() {
        let mut app = logged_in();
        app.perform(Action::Open(ScreenId::Settings));
        app.perform(Action::Logout);
        assert!(app.nav.is_authenticated());
        app.dialog = None;
        app.confirm(ConfirmAction::Logout);
        assert!(!app.nav.is_authenticated());
        assert_eq!(app.current_screen(), ScreenId::Login);
    }

    #[test]
    fn test_logout_without_confirmation_when_disabled() {
        let mut app = logged_in();
        app.config.ui.confirm_logout = false;
        app.perform(Action::Logout);
        assert!(app.dialog.is_none());
        assert!(!app.nav.is_authenticated());
    }

    #[test]
    fn test_schedule_add_and_cancel() {
        let mut app = logged_in();
        app.perform(Action::Open(ScreenId::Schedule));
        app.sync_screen();
        app.perform(Action::NewEvent);
        app.perform(Action::SaveEvent);
        assert_eq!(notice_text(&app), "Schedule event needs a time and an activity");

        app.dialog = None;
        let editor = app.event_editor.as_mut().unwrap();
        editor.draft.time = "5:00 AM".into();
        editor.draft.activity = "Staff Prep".into();
        app.perform(Action::SaveEvent);
        assert!(app.event_editor.is_none());
        assert_eq!(app.schedule.events[0].activity, "Staff Prep");
    }
}
