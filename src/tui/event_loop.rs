//! Event Loop Module
//!
//! Handles keyboard events for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use daycare_core::navigation::{Region, BOTTOM_TABS};
use daycare_core::debug_log;

use crate::tui::app::App;
use crate::tui::types::{ConfirmAction, Dialog, Entry};

/// Action to take after handling an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopAction {
    /// Continue the event loop
    Continue,
    /// Break out of the event loop
    Break,
}

/// Handle key events
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> LoopAction {
    if key.kind == KeyEventKind::Release {
        return LoopAction::Continue;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.should_quit = true;
        return LoopAction::Break;
    }

    handle_key(app, key);
    app.sync_screen();

    if app.should_quit {
        LoopAction::Break
    } else {
        LoopAction::Continue
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Modal dialogs take every key
    if let Some(dialog) = app.dialog.clone() {
        handle_dialog(app, dialog, key);
        return;
    }

    if app.show_logs {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(12)) {
            app.show_logs = false;
        }
        return;
    }

    // Global shortcuts
    match key.code {
        KeyCode::F(12) => {
            app.show_logs = true;
            return;
        }
        KeyCode::F(n @ 1..=3) => {
            if app.nav.session().region() == Region::Authenticated {
                let (tab, _) = BOTTOM_TABS[usize::from(n - 1)];
                app.nav.navigate_to(tab);
            }
            return;
        }
        KeyCode::Esc => {
            app.status_message = None;
            if !app.nav.back() {
                app.dialog = Some(Dialog::confirm(
                    "Exit",
                    "Are you sure you want to exit?",
                    ConfirmAction::Exit,
                ));
            }
            return;
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.select_previous();
            return;
        }
        KeyCode::Down | KeyCode::Tab => {
            app.select_next();
            return;
        }
        _ => {}
    }

    // Focus-specific handling
    match app.selected_entry() {
        Some(Entry::Input { field, .. }) => match key.code {
            KeyCode::Enter => match field.submit() {
                Some(action) => {
                    debug_log!("[EVENT_LOOP] submit {:?} from {:?}", action, field);
                    app.perform(action);
                }
                None => app.select_next(),
            },
            KeyCode::Char(c) => app.enter_char(field, c),
            KeyCode::Backspace => app.delete_char(field),
            KeyCode::Delete => app.delete_at_cursor(field),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(field),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(field),
            _ => {}
        },
        Some(Entry::Choice { choice, .. }) => match key.code {
            KeyCode::Left => app.cycle_choice(choice, false),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => app.cycle_choice(choice, true),
            _ => {}
        },
        Some(entry) => match key.code {
            KeyCode::Enter => {
                if let Some(action) = entry.action() {
                    app.status_message = None;
                    app.perform(action);
                }
            }
            KeyCode::Left => {
                app.shift_day(false);
            }
            KeyCode::Right => {
                app.shift_day(true);
            }
            KeyCode::Char(c) => {
                app.hotkey(c);
            }
            _ => {}
        },
        None => {}
    }
}

fn handle_dialog(app: &mut App, dialog: Dialog, key: KeyEvent) {
    match dialog {
        Dialog::Notice { .. } => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.dialog = None;
            }
        }
        Dialog::Confirm { action, .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.dialog = None;
                app.confirm(action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.dialog = None;
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daycare_core::{Config, ScreenId};

    fn app() -> App {
        App::with_date(Config::default(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> LoopAction {
        handle_key_event(app, KeyEvent::from(code))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn login(app: &mut App) {
        press(app, KeyCode::Down);
        type_text(app, "secret");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_login_by_keyboard() {
        let mut app = app();
        login(&mut app);
        assert_eq!(app.current_screen(), ScreenId::Dashboard);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_login_with_empty_password_shows_notice() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.dialog, Some(Dialog::Notice { .. })));
        // Keys go to the dialog until it is dismissed
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_bottom_tabs_need_a_session() {
        let mut app = app();
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.current_screen(), ScreenId::Login);

        login(&mut app);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.current_screen(), ScreenId::ChatList);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.current_screen(), ScreenId::Settings);
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.current_screen(), ScreenId::Dashboard);
    }

    #[test]
    fn test_escape_goes_back_then_asks_to_exit() {
        let mut app = app();
        login(&mut app);
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen(), ScreenId::Dashboard);

        press(&mut app, KeyCode::Esc);
        assert!(matches!(
            app.dialog,
            Some(Dialog::Confirm { action: ConfirmAction::Exit, .. })
        ));
        assert_eq!(press(&mut app, KeyCode::Char('y')), LoopAction::Break);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&mut app, key), LoopAction::Break);
    }

    #[test]
    fn test_children_search_and_open_profile() {
        let mut app = app();
        login(&mut app);
        // Dashboard: first button is Children
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Children);

        type_text(&mut app, "noah");
        assert_eq!(app.child_search, "noah");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::ChildProfile);
        assert_eq!(app.nav.selected_child().unwrap().name, "Noah Johnson");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen(), ScreenId::Children);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_children_hotkeys() {
        let mut app = app();
        login(&mut app);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('c'));
        match &app.dialog {
            Some(Dialog::Notice { message, .. }) => assert!(message.starts_with("Calling Sarah Wilson")),
            other => panic!("expected notice, got {:?}", other),
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.current_screen(), ScreenId::Chat);
    }

    #[test]
    fn test_chat_send_by_enter() {
        let mut app = app();
        login(&mut app);
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Chat);
        let chat = app.nav.selected_chat().cloned().unwrap();
        let before = app.chat_book.messages(&chat).len();

        // The message input is the first focusable entry
        type_text(&mut app, "Lunch went well");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat_book.messages(&chat).len(), before + 1);
        assert!(app.chat_draft.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat_book.messages(&chat).len(), before + 1);
    }

    #[test]
    fn test_attendance_hotkeys_and_day_shift() {
        let mut app = app();
        login(&mut app);
        app.perform(crate::tui::types::Action::Open(ScreenId::Attendance));
        app.sync_screen();
        press(&mut app, KeyCode::Enter);
        assert!(app.sheet.is_some());

        // From, To, all present, all absent, then the first child
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char('a'));
        let sheet = app.sheet.as_ref().unwrap();
        assert_eq!(sheet.entries[0].status, Some(daycare_core::models::PresenceStatus::Absent));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.sheet.as_ref().unwrap().date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_log_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::F(12));
        assert!(app.show_logs);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Login);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_logs);
        assert!(app.dialog.is_none());
    }
}
