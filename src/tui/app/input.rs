//! Input handling - field lookup, cursor movement and text editing
use crate::tui::app::state::App;
use crate::tui::types::{Choice, Field};
use daycare_core::mock;

impl App {
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::LoginEmail => &self.login.email,
            Field::LoginPassword => &self.login.password,
            Field::SignupName => &self.signup.full_name,
            Field::SignupEmail => &self.signup.email,
            Field::SignupPhone => &self.signup.phone,
            Field::SignupPassword => &self.signup.password,
            Field::SignupConfirm => &self.signup.confirm_password,
            Field::ResetEmail => &self.forgot.email,
            Field::ChildSearch => &self.child_search,
            Field::ChatSearch => &self.chat_search,
            Field::Allergies => &self.allergies_draft,
            Field::AttendanceFrom => self.sheet.as_ref().map_or("", |s| s.time_from.as_str()),
            Field::AttendanceTo => self.sheet.as_ref().map_or("", |s| s.time_to.as_str()),
            Field::NoteDraft => &self.note_draft,
            Field::Caption => &self.caption,
            Field::IncidentTime => &self.incident.time,
            Field::IncidentDescription => &self.incident.description,
            Field::IncidentAction => &self.incident.action_taken,
            Field::ChatDraft => &self.chat_draft,
            Field::EventTime => self.event_editor.as_ref().map_or("", |e| e.draft.time.as_str()),
            Field::EventActivity => self.event_editor.as_ref().map_or("", |e| e.draft.activity.as_str()),
            Field::HealthValue => self.health_form.as_ref().map_or("", |f| f.value.as_str()),
            Field::HealthSymptoms => self.health_form.as_ref().map_or("", |f| f.symptoms.as_str()),
            Field::HealthNotes => self.health_form.as_ref().map_or("", |f| f.notes.as_str()),
            Field::PickupNotes => &self.pickup.notes,
        }
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::LoginEmail => &mut self.login.email,
            Field::LoginPassword => &mut self.login.password,
            Field::SignupName => &mut self.signup.full_name,
            Field::SignupEmail => &mut self.signup.email,
            Field::SignupPhone => &mut self.signup.phone,
            Field::SignupPassword => &mut self.signup.password,
            Field::SignupConfirm => &mut self.signup.confirm_password,
            Field::ResetEmail => &mut self.forgot.email,
            Field::ChildSearch => &mut self.child_search,
            Field::ChatSearch => &mut self.chat_search,
            Field::Allergies => &mut self.allergies_draft,
            Field::AttendanceFrom => &mut self.sheet.as_mut()?.time_from,
            Field::AttendanceTo => &mut self.sheet.as_mut()?.time_to,
            Field::NoteDraft => &mut self.note_draft,
            Field::Caption => &mut self.caption,
            Field::IncidentTime => &mut self.incident.time,
            Field::IncidentDescription => &mut self.incident.description,
            Field::IncidentAction => &mut self.incident.action_taken,
            Field::ChatDraft => &mut self.chat_draft,
            Field::EventTime => &mut self.event_editor.as_mut()?.draft.time,
            Field::EventActivity => &mut self.event_editor.as_mut()?.draft.activity,
            Field::HealthValue => &mut self.health_form.as_mut()?.value,
            Field::HealthSymptoms => &mut self.health_form.as_mut()?.symptoms,
            Field::HealthNotes => &mut self.health_form.as_mut()?.notes,
            Field::PickupNotes => &mut self.pickup.notes,
        })
    }

    // Cursor movement
    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self, field: Field) {
        let char_count = self.field_value(field).chars().count();
        if self.cursor_position < char_count {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self, field: Field) {
        self.cursor_position = self.field_value(field).chars().count();
    }

    // Text input
    pub fn enter_char(&mut self, field: Field, new_char: char) {
        if new_char == '\r' {
            return;
        }
        let cursor = self.cursor_position;
        let Some(text) = self.field_mut(field) else {
            return;
        };
        let byte_idx = text
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        text.insert(byte_idx, new_char);
        self.cursor_position = cursor + 1;
    }

    pub fn delete_char(&mut self, field: Field) {
        let cursor = self.cursor_position;
        if cursor == 0 {
            return;
        }
        if let Some(text) = self.field_mut(field) {
            if let Some((byte_idx, _)) = text.char_indices().nth(cursor - 1) {
                text.remove(byte_idx);
                self.move_cursor_left();
            }
        }
    }

    pub fn delete_at_cursor(&mut self, field: Field) {
        let cursor = self.cursor_position;
        if let Some(text) = self.field_mut(field) {
            if let Some((byte_idx, _)) = text.char_indices().nth(cursor) {
                text.remove(byte_idx);
            }
        }
    }

    /// Step a choice field forward or backward through its values.
    pub fn cycle_choice(&mut self, choice: Choice, forward: bool) {
        let step = |current: usize, len: usize| {
            if len == 0 {
                0
            } else if forward {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            }
        };
        match choice {
            Choice::IncidentChild => {
                let len = mock::picker_children().len();
                self.incident.child = step(self.incident.child, len);
            }
            Choice::IncidentType => {
                let len = mock::INCIDENT_TYPES.len();
                self.incident.kind = Some(match self.incident.kind {
                    Some(kind) => step(kind, len),
                    None if forward => 0,
                    None => len - 1,
                });
            }
            Choice::EventIcon => {
                if let Some(editor) = self.event_editor.as_mut() {
                    editor.draft.icon = step(editor.draft.icon, mock::SCHEDULE_ICONS.len());
                }
            }
            Choice::EventColor => {
                if let Some(editor) = self.event_editor.as_mut() {
                    editor.draft.color = step(editor.draft.color, mock::SCHEDULE_COLORS.len());
                }
            }
            Choice::HealthChild => {
                self.health_child = step(self.health_child, self.children.len());
            }
            Choice::HealthType => {
                if let Some(form) = self.health_form.as_mut() {
                    form.kind = step(form.kind, mock::HEALTH_LOG_TYPES.len());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::App;
    use crate::tui::types::{Choice, Field};
    use daycare_core::Config;

    #[test]
    fn test_insert_and_delete_respect_cursor() {
        let mut app = App::new(Config::default());
        app.child_search.clear();
        app.cursor_position = 0;
        for c in "emma".chars() {
            app.enter_char(Field::ChildSearch, c);
        }
        assert_eq!(app.child_search, "emma");

        app.move_cursor_home();
        app.move_cursor_right(Field::ChildSearch);
        app.enter_char(Field::ChildSearch, 'X');
        assert_eq!(app.child_search, "eXmma");

        app.delete_char(Field::ChildSearch);
        assert_eq!(app.child_search, "emma");
        app.delete_at_cursor(Field::ChildSearch);
        assert_eq!(app.child_search, "ema");

        app.move_cursor_end(Field::ChildSearch);
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut app = App::new(Config::default());
        app.cursor_position = 0;
        app.enter_char(Field::NoteDraft, 'é');
        app.enter_char(Field::NoteDraft, '°');
        app.delete_char(Field::NoteDraft);
        assert_eq!(app.note_draft, "é");
    }

    #[test]
    fn test_fields_of_closed_forms_ignore_input() {
        let mut app = App::new(Config::default());
        app.cursor_position = 0;
        app.enter_char(Field::EventTime, '9');
        assert!(app.event_editor.is_none());
        assert_eq!(app.field_value(Field::EventTime), "");
    }

    #[test]
    fn test_cycle_incident_type_wraps() {
        let mut app = App::new(Config::default());
        app.cycle_choice(Choice::IncidentType, false);
        assert_eq!(app.incident.kind_label(), Some("Other"));
        app.cycle_choice(Choice::IncidentType, true);
        assert_eq!(app.incident.kind_label(), Some("Minor Injury"));
    }
}
