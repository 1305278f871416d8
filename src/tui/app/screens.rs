//! Screen bodies
//!
//! Each screen is a flat list of entries. Rendering draws them in order and
//! the event loop moves focus over the selectable ones.

use crate::tui::app::state::App;
use crate::tui::types::{Action, Choice, Entry, Field, Tone};
use daycare_core::alerts::{self, group_by_date};
use daycare_core::models::{AlertKind, ChildRecord, MediaKind, MessageKind, PresenceStatus, Sender};
use daycare_core::{clock, mock, roster, ScreenId};

impl App {
    /// Entries of the screen that is currently rendered.
    pub fn entries(&self) -> Vec<Entry> {
        match self.nav.resolve() {
            ScreenId::Login => self.login_entries(),
            ScreenId::Signup => self.signup_entries(),
            ScreenId::ForgotPassword => self.forgot_entries(),
            ScreenId::Dashboard => self.dashboard_entries(),
            ScreenId::Children => self.children_entries(),
            ScreenId::ChildProfile => self.profile_entries(),
            ScreenId::Attendance => self.attendance_entries(),
            ScreenId::DailyNotes => self.notes_entries(),
            ScreenId::UploadMedia => self.media_entries(),
            ScreenId::Incidents => self.incident_entries(),
            ScreenId::ChatList => self.chat_list_entries(),
            ScreenId::Chat => self.chat_entries(),
            ScreenId::Schedule => self.schedule_entries(),
            ScreenId::HealthLog => self.health_entries(),
            ScreenId::Pickup => self.pickup_entries(),
            ScreenId::AiAlerts => self.alert_entries(),
            ScreenId::Settings => self.settings_entries(),
        }
    }

    fn login_entries(&self) -> Vec<Entry> {
        vec![
            Entry::Heading("Little Stars Daycare".to_string()),
            Entry::muted("Sign in to your staff account"),
            Entry::Input { field: Field::LoginEmail, label: "Email" },
            Entry::Input { field: Field::LoginPassword, label: "Password" },
            Entry::button(Action::Login, "Sign In"),
            Entry::button(Action::Open(ScreenId::ForgotPassword), "Forgot password?"),
            Entry::button(Action::Open(ScreenId::Signup), "Don't have an account? Sign up"),
        ]
    }

    fn signup_entries(&self) -> Vec<Entry> {
        vec![
            Entry::muted("Register as a staff member"),
            Entry::Input { field: Field::SignupName, label: "Full name" },
            Entry::Input { field: Field::SignupEmail, label: "Email" },
            Entry::Input { field: Field::SignupPhone, label: "Phone" },
            Entry::Input { field: Field::SignupPassword, label: "Password" },
            Entry::Input { field: Field::SignupConfirm, label: "Confirm password" },
            Entry::button(Action::Register, "Create Account"),
            Entry::button(Action::Open(ScreenId::Login), "Already have an account? Sign in"),
        ]
    }

    fn forgot_entries(&self) -> Vec<Entry> {
        match &self.forgot.sent_to {
            Some(email) => vec![
                Entry::Heading("Check your email".to_string()),
                Entry::text(format!("We've sent a password reset link to {email}")),
                Entry::button(Action::Open(ScreenId::Login), "Back to Login"),
            ],
            None => vec![
                Entry::muted("Enter your email and we'll send you a reset link"),
                Entry::Input { field: Field::ResetEmail, label: "Email" },
                Entry::button(Action::SendReset, "Send Reset Link"),
                Entry::button(Action::Open(ScreenId::Login), "Back to Login"),
            ],
        }
    }

    fn dashboard_entries(&self) -> Vec<Entry> {
        let counts = roster::presence_counts(&self.children);
        let summary = alerts::summarize(&self.alerts);
        vec![
            Entry::Heading(format!("Good day, {}!", self.nav.session().user_name)),
            Entry::muted(format!(
                "{} · {}",
                self.config.staff.room,
                clock::long_date_label(self.today)
            )),
            Entry::Text(
                format!(
                    "{} present · {} absent · {} alerts today",
                    counts.present, counts.absent, summary.today
                ),
                Tone::Accent,
            ),
            Entry::Heading("Menu".to_string()),
            Entry::button(Action::Open(ScreenId::Children), "Children"),
            Entry::button(Action::Open(ScreenId::Attendance), "Attendance"),
            Entry::button(Action::Open(ScreenId::AiAlerts), "AI Alerts"),
            Entry::Heading("Quick actions".to_string()),
            Entry::button(Action::Open(ScreenId::Schedule), "Schedule"),
            Entry::button(Action::Open(ScreenId::Incidents), "Report Incident"),
            Entry::button(Action::Open(ScreenId::Pickup), "Pickup Verify"),
        ]
    }

    fn children_entries(&self) -> Vec<Entry> {
        let counts = roster::presence_counts(&self.children);
        let mut entries = vec![
            Entry::Input { field: Field::ChildSearch, label: "Search" },
            Entry::Text(
                format!("{} present · {} absent", counts.present, counts.absent),
                Tone::Accent,
            ),
        ];
        let hits = roster::filter_children(&self.children, &self.child_search);
        if hits.is_empty() {
            entries.push(Entry::muted("No children match your search"));
        }
        entries.extend(hits.into_iter().map(|child| Entry::Item {
            action: Action::ViewChild(child.id),
            title: child.name.clone(),
            detail: child_detail(child),
            tone: presence_tone(child),
        }));
        entries.push(Entry::muted("Enter: profile · c: call parent · m: message parent"));
        entries
    }

    fn profile_entries(&self) -> Vec<Entry> {
        let Some(child) = self.nav.selected_child() else {
            return no_child_selected();
        };
        vec![
            Entry::Heading(child.name.clone()),
            Entry::Text(format!("{} years old · {}", child.age, child.status), presence_tone(child)),
            Entry::muted(format!(
                "Checked in: {}",
                child.check_in.as_deref().unwrap_or("Not checked in")
            )),
            Entry::text(format!("Parent: {} · {}", child.parent_name, child.parent_phone)),
            Entry::Heading("Allergies & medical notes".to_string()),
            Entry::Input { field: Field::Allergies, label: "Allergies" },
            Entry::button(Action::SaveAllergies, "Save allergies"),
            Entry::Heading("Actions".to_string()),
            Entry::button(Action::OpenForChild(ScreenId::DailyNotes), "Daily Notes"),
            Entry::button(Action::OpenForChild(ScreenId::UploadMedia), "Upload Media"),
            Entry::button(Action::OpenForChild(ScreenId::HealthLog), "Health Logs"),
            Entry::button(Action::Open(ScreenId::Pickup), "Pickup Verify"),
            Entry::button(Action::CallParent(child.id), "Call Parent"),
            Entry::button(Action::MessageParent(child.id), "Message Parent"),
        ]
    }

    fn attendance_entries(&self) -> Vec<Entry> {
        let Some(sheet) = &self.sheet else {
            let mut entries = vec![Entry::button(Action::StartAttendance, "Mark Attendance")];
            entries.push(Entry::Heading("History".to_string()));
            if self.attendance.records.is_empty() {
                entries.push(Entry::muted("No attendance records yet"));
            }
            entries.extend(self.attendance.records.iter().map(|record| Entry::Item {
                action: Action::EditAttendance(record.id),
                title: record.date.clone(),
                detail: format!(
                    "{}-{} · {} present · {} absent · {} total",
                    record.time_from, record.time_to, record.present, record.absent, record.total
                ),
                tone: Tone::Normal,
            }));
            return entries;
        };

        let mut entries = vec![
            Entry::Heading(format!("{}  (←/→ change day)", clock::date_label(sheet.date))),
            Entry::Input { field: Field::AttendanceFrom, label: "From" },
            Entry::Input { field: Field::AttendanceTo, label: "To" },
            Entry::Text(
                format!(
                    "{} present · {} absent · {} unmarked",
                    sheet.count(PresenceStatus::Present),
                    sheet.count(PresenceStatus::Absent),
                    sheet.unmarked()
                ),
                Tone::Accent,
            ),
            Entry::button(Action::MarkAll(PresenceStatus::Present), "Mark all present"),
            Entry::button(Action::MarkAll(PresenceStatus::Absent), "Mark all absent"),
        ];
        entries.extend(sheet.entries.iter().map(|entry| {
            let (detail, tone) = match entry.status {
                Some(PresenceStatus::Present) => ("✓ Present", Tone::Good),
                Some(PresenceStatus::Absent) => ("✗ Absent", Tone::Bad),
                None => ("· Not marked", Tone::Muted),
            };
            Entry::Item {
                action: Action::ToggleAttendance(entry.id),
                title: entry.name.clone(),
                detail: detail.to_string(),
                tone,
            }
        }));
        entries.push(Entry::muted("p: present · a: absent · pressing the same key again clears"));
        entries.push(Entry::button(Action::SaveAttendance, "Save Attendance"));
        entries.push(Entry::button(Action::CancelAttendance, "Cancel"));
        entries
    }

    fn notes_entries(&self) -> Vec<Entry> {
        let Some(child) = self.nav.selected_child() else {
            return no_child_selected();
        };
        let today = clock::date_label(self.today);
        let mut entries = vec![
            Entry::Heading(format!("Notes for {}", child.name)),
            Entry::Input { field: Field::NoteDraft, label: "New note" },
            Entry::button(Action::AddNote, "Add Note"),
            Entry::Heading("Timeline".to_string()),
        ];
        let notes = self.notes.notes(child, &today);
        if notes.is_empty() {
            entries.push(Entry::muted("No notes yet"));
        }
        for note in notes.iter() {
            entries.push(Entry::Text(format!("{} · {}", note.time, note.date), Tone::Muted));
            entries.push(Entry::text(format!("  {}", note.text)));
        }
        entries
    }

    fn media_entries(&self) -> Vec<Entry> {
        let Some(child) = self.nav.selected_child() else {
            return no_child_selected();
        };
        let mut entries = vec![
            Entry::Heading(format!("Media for {}", child.name)),
            Entry::Input { field: Field::Caption, label: "Caption" },
            Entry::button(Action::Capture(MediaKind::Photo), "Take Photo"),
            Entry::button(Action::Capture(MediaKind::Video), "Record Video"),
            Entry::Heading("Gallery".to_string()),
        ];
        let items = self.media.items(child);
        if items.is_empty() {
            entries.push(Entry::muted("No media uploaded yet"));
        }
        entries.extend(items.iter().map(|item| Entry::Item {
            action: Action::DeleteMedia(item.id),
            title: item.caption.clone(),
            detail: format!("{} · {}", item.kind, item.timestamp),
            tone: Tone::Normal,
        }));
        entries.push(Entry::muted("Enter or d on an item: delete"));
        entries
    }

    fn incident_entries(&self) -> Vec<Entry> {
        let picker = mock::picker_children();
        let child = picker
            .get(self.incident.child)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        vec![
            Entry::Choice { choice: Choice::IncidentChild, label: "Child", value: child },
            Entry::Choice {
                choice: Choice::IncidentType,
                label: "Type",
                value: self.incident.kind_label().unwrap_or("Select type").to_string(),
            },
            Entry::Input { field: Field::IncidentTime, label: "Time of incident" },
            Entry::Input { field: Field::IncidentDescription, label: "Description" },
            Entry::Input { field: Field::IncidentAction, label: "Action taken" },
            Entry::muted("Parents are notified automatically when the report is submitted"),
            Entry::button(Action::SubmitIncident, "Submit Report"),
        ]
    }

    fn chat_list_entries(&self) -> Vec<Entry> {
        let mut entries = vec![Entry::Input { field: Field::ChatSearch, label: "Search" }];
        let hits = roster::filter_chats(&self.chats, &self.chat_search);
        if hits.is_empty() {
            entries.push(Entry::muted("No conversations found"));
        }
        entries.extend(hits.into_iter().map(|chat| {
            let unread = if chat.unread > 0 {
                format!(" · {} unread", chat.unread)
            } else {
                String::new()
            };
            Entry::Item {
                action: Action::OpenChat(chat.id),
                title: format!("{} ({})", chat.parent_name, chat.child_name),
                detail: format!("{} · {}{}", chat.last_message, chat.timestamp, unread),
                tone: if chat.unread > 0 { Tone::Accent } else { Tone::Normal },
            }
        }));
        entries
    }

    fn chat_entries(&self) -> Vec<Entry> {
        let Some(chat) = self.nav.selected_chat() else {
            return vec![
                Entry::muted("No conversation selected"),
                Entry::button(Action::Open(ScreenId::ChatList), "Back to Messages"),
            ];
        };
        let mut entries = vec![Entry::Heading(format!(
            "{} · parent of {}",
            chat.parent_name, chat.child_name
        ))];
        for message in self.chat_book.messages(chat).iter() {
            let body = match message.kind {
                MessageKind::Text => message.content.clone(),
                MessageKind::Photo => format!("[photo] {}", message.content),
                MessageKind::Voice => format!("[voice] {}", message.content),
            };
            let (who, tone) = match message.sender {
                Sender::Staff => ("You".to_string(), Tone::Staff),
                Sender::Parent => (chat.parent_name.clone(), Tone::Parent),
            };
            entries.push(Entry::Text(format!("{} ({}): {}", who, message.time, body), tone));
        }
        if self.chat_book.is_recording(chat) {
            entries.push(Entry::Text("● Recording...".to_string(), Tone::Bad));
        }
        entries.push(Entry::Input { field: Field::ChatDraft, label: "Message" });
        entries.push(Entry::button(Action::SendText, "Send"));
        entries.push(Entry::button(Action::SendPhoto, "Send Photo"));
        let record = if self.chat_book.is_recording(chat) {
            "Stop & Send Voice"
        } else {
            "Record Voice"
        };
        entries.push(Entry::button(Action::ToggleRecording, record));
        entries
    }

    fn schedule_entries(&self) -> Vec<Entry> {
        let mut entries = vec![Entry::Heading(format!(
            "{}  (←/→ change day)",
            clock::long_date_label(self.schedule.date)
        ))];
        if let Some(editor) = &self.event_editor {
            let title = if editor.id.is_some() { "Edit Event" } else { "New Event" };
            entries.push(Entry::Heading(title.to_string()));
            entries.push(Entry::Input { field: Field::EventTime, label: "Time" });
            entries.push(Entry::Input { field: Field::EventActivity, label: "Activity" });
            entries.push(Entry::Choice {
                choice: Choice::EventIcon,
                label: "Icon",
                value: mock::SCHEDULE_ICONS[editor.draft.icon % mock::SCHEDULE_ICONS.len()].to_string(),
            });
            entries.push(Entry::Choice {
                choice: Choice::EventColor,
                label: "Color",
                value: mock::SCHEDULE_COLORS[editor.draft.color % mock::SCHEDULE_COLORS.len()].to_string(),
            });
            entries.push(Entry::button(Action::SaveEvent, "Save Event"));
            entries.push(Entry::button(Action::CancelEvent, "Cancel"));
            return entries;
        }
        entries.push(Entry::button(Action::NewEvent, "Add Event"));
        if self.schedule.events.is_empty() {
            entries.push(Entry::muted("Nothing scheduled"));
        }
        entries.extend(self.schedule.events.iter().map(|event| Entry::Item {
            action: Action::EditEvent(event.id),
            title: event.activity.clone(),
            detail: format!("{} · {}", event.time, event.icon),
            tone: color_tone(&event.color),
        }));
        entries.push(Entry::muted("Enter: edit · d: delete"));
        entries
    }

    fn health_entries(&self) -> Vec<Entry> {
        let Some(child) = self.health_child() else {
            return no_child_selected();
        };
        let mut entries = vec![Entry::Choice {
            choice: Choice::HealthChild,
            label: "Child",
            value: child.name.clone(),
        }];
        match &self.health_form {
            Some(form) => {
                entries.push(Entry::Heading("New Health Log".to_string()));
                entries.push(Entry::Choice {
                    choice: Choice::HealthType,
                    label: "Type",
                    value: form.kind_label().to_string(),
                });
                if form.needs_value() {
                    entries.push(Entry::Input { field: Field::HealthValue, label: "Value" });
                }
                entries.push(Entry::Input { field: Field::HealthSymptoms, label: "Symptoms" });
                entries.push(Entry::Input { field: Field::HealthNotes, label: "Notes" });
                entries.push(Entry::button(Action::SaveHealthLog, "Save Log"));
                entries.push(Entry::button(Action::CancelHealthLog, "Cancel"));
            }
            None => entries.push(Entry::button(Action::NewHealthLog, "Add Health Log")),
        }
        entries.push(Entry::Heading("History".to_string()));
        for log in self.health.logs(child).iter() {
            entries.push(Entry::Text(
                format!("{}: {} · {} {}", log.kind, log.value, log.date, log.time),
                Tone::Accent,
            ));
            if !log.notes.is_empty() {
                entries.push(Entry::muted(format!("  {}", log.notes)));
            }
        }
        entries
    }

    fn pickup_entries(&self) -> Vec<Entry> {
        let child = &self.pickup.child;
        let mut entries = vec![
            Entry::Heading(child.name.clone()),
            Entry::muted(format!(
                "{} years old · checked in {}",
                child.age,
                child.check_in.as_deref().unwrap_or("-")
            )),
            Entry::Heading("Authorized persons".to_string()),
        ];
        entries.extend(self.pickup.persons.iter().map(|person| {
            let picked = self.pickup.selected == Some(person.id);
            Entry::Item {
                action: Action::SelectPickup(person.id),
                title: format!("{} {}", if picked { "●" } else { "○" }, person.name),
                detail: format!("{} · {}", person.relation, person.phone),
                tone: if picked { Tone::Good } else { Tone::Normal },
            }
        }));
        entries.push(Entry::Input { field: Field::PickupNotes, label: "Notes" });
        entries.push(Entry::button(Action::VerifyPickup, "Verify Pickup"));
        entries
    }

    fn alert_entries(&self) -> Vec<Entry> {
        let summary = alerts::summarize(&self.alerts);
        let counts = AlertKind::ALL
            .iter()
            .map(|kind| format!("{}: {}", kind.label(), summary.count(*kind)))
            .collect::<Vec<_>>()
            .join(" · ");
        let mut entries = vec![
            Entry::Text(counts, Tone::Accent),
            Entry::button(Action::AlertInfo, "About AI alerts"),
        ];
        for (date, items) in group_by_date(&self.alerts) {
            entries.push(Entry::Heading(date.to_string()));
            for alert in items {
                let place = match &alert.child {
                    Some(child) => format!("{} · {}", alert.room, child),
                    None => alert.room.clone(),
                };
                entries.push(Entry::Text(
                    format!("{} {} · {} · {}", alert_marker(alert.kind), alert.title, alert.time, place),
                    alert_tone(alert.kind),
                ));
                entries.push(Entry::muted(format!("  {} ({})", alert.description, alert.status)));
            }
        }
        entries
    }

    fn settings_entries(&self) -> Vec<Entry> {
        let session = self.nav.session();
        vec![
            Entry::Heading(session.user_name.clone()),
            Entry::muted(format!("Staff · {}", self.config.staff.room)),
            Entry::button(Action::Notice("Edit Profile", "Profile editing is managed by the admin office."), "Edit Profile"),
            Entry::button(Action::Notice("Notifications", "Notification preferences are coming soon."), "Notifications"),
            Entry::button(Action::Notice("Change Password", "A password change link has been sent to your email."), "Change Password"),
            Entry::button(Action::ToggleLogs, "Activity Log (F12)"),
            Entry::button(Action::Logout, "Logout"),
        ]
    }
}

fn no_child_selected() -> Vec<Entry> {
    vec![
        Entry::muted("No child selected"),
        Entry::button(Action::Open(ScreenId::Children), "Go to Children"),
    ]
}

fn child_detail(child: &ChildRecord) -> String {
    match &child.check_in {
        Some(time) => format!("{} yrs · {} · in at {}", child.age, child.status, time),
        None => format!("{} yrs · {}", child.age, child.status),
    }
}

fn presence_tone(child: &ChildRecord) -> Tone {
    if child.is_present() {
        Tone::Good
    } else {
        Tone::Bad
    }
}

fn color_tone(color: &str) -> Tone {
    match color {
        "Green" => Tone::Good,
        "Yellow" => Tone::Warn,
        "Red" => Tone::Bad,
        "Blue" | "Purple" | "Pink" => Tone::Accent,
        _ => Tone::Normal,
    }
}

fn alert_marker(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Cry => "♪",
        AlertKind::Fire => "▲",
        AlertKind::UnknownPerson => "?",
        AlertKind::DangerousObject => "!",
    }
}

fn alert_tone(kind: AlertKind) -> Tone {
    match kind {
        AlertKind::Fire | AlertKind::DangerousObject => Tone::Bad,
        AlertKind::UnknownPerson => Tone::Warn,
        AlertKind::Cry => Tone::Accent,
    }
}
