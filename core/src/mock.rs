//! Hardcoded mock datasets
//!
//! Everything the screens display comes from here. Nothing is fetched or
//! persisted.

use crate::models::{
    AiAlert, AlertKind, AttendanceRecord, AuthorizedPerson, ChatRecord, ChildRecord, HealthLog,
    MediaItem, MediaKind, Message, MessageKind, Note, PresenceStatus, ScheduleEvent, Sender,
};
use chrono::{Duration, NaiveDate};

pub const DEFAULT_STAFF_PHOTO: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop";

pub const INCIDENT_TYPES: [&str; 6] = [
    "Minor Injury",
    "Behavioral Issue",
    "Allergic Reaction",
    "Illness",
    "Accident",
    "Other",
];

pub const HEALTH_LOG_TYPES: [&str; 5] = [
    "Temperature",
    "Medicine Given",
    "Allergic Reaction",
    "Injury",
    "Illness",
];

pub const SCHEDULE_ICONS: [&str; 6] = ["Users", "Utensils", "Book", "Sun", "Music", "Clock"];

pub const SCHEDULE_COLORS: [&str; 6] = ["Blue", "Green", "Purple", "Yellow", "Pink", "Red"];

pub const DEFAULT_ALLERGIES: &str = "• Peanut allergy (severe)\n• Lactose intolerant";

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{id}?w=100&h=100&fit=crop")
}

fn child(
    id: u32,
    name: &str,
    age: u8,
    check_in: Option<&str>,
    parent_name: &str,
    parent_phone: &str,
    photo_id: &str,
) -> ChildRecord {
    ChildRecord {
        id,
        name: name.to_string(),
        age,
        status: if check_in.is_some() {
            PresenceStatus::Present
        } else {
            PresenceStatus::Absent
        },
        check_in: check_in.map(str::to_string),
        parent_name: parent_name.to_string(),
        parent_phone: parent_phone.to_string(),
        photo: photo(photo_id),
    }
}

/// The room's roster.
pub fn children() -> Vec<ChildRecord> {
    vec![
        child(1, "Emma Wilson", 3, Some("8:30 AM"), "Sarah Wilson", "+1 (555) 123-4567", "1503454537195-1dcabb73ffb9"),
        child(2, "Oliver Brown", 4, Some("8:45 AM"), "John Brown", "+1 (555) 234-5678", "1519340241574-2cec6aef0c01"),
        child(3, "Sophia Davis", 2, None, "Emily Davis", "+1 (555) 345-6789", "1518990013801-39976c49e6fd"),
        child(4, "Liam Martinez", 3, Some("9:00 AM"), "Maria Martinez", "+1 (555) 456-7890", "1504570126050-8f35f8c3f1f6"),
        child(5, "Ava Anderson", 4, Some("8:15 AM"), "Lisa Anderson", "+1 (555) 567-8901", "1531983412531-1f49a365ffed"),
        child(6, "Noah Johnson", 2, Some("9:15 AM"), "Mike Johnson", "+1 (555) 678-9012", "1502134249126-9f3755a50d78"),
        child(7, "Isabella Garcia", 3, None, "Sofia Garcia", "+1 (555) 789-0123", "1488656491611-27af00c5a7e3"),
        child(8, "Ethan Taylor", 4, Some("8:40 AM"), "Rachel Taylor", "+1 (555) 890-1234", "1534447677768-be436bb09401"),
    ]
}

pub fn find_child(id: u32) -> Option<ChildRecord> {
    children().into_iter().find(|c| c.id == id)
}

fn chat(id: u32, child_name: &str, parent_name: &str, photo_id: &str, last: &str, ts: &str, unread: u32) -> ChatRecord {
    ChatRecord {
        id,
        child_name: child_name.to_string(),
        parent_name: parent_name.to_string(),
        parent_photo: photo(photo_id),
        last_message: last.to_string(),
        timestamp: ts.to_string(),
        unread,
    }
}

pub fn chats() -> Vec<ChatRecord> {
    vec![
        chat(1, "Emma Wilson", "Sarah Wilson", "1494790108377-be9c29b29330", "Thank you for the update!", "10:30 AM", 2),
        chat(2, "Oliver Brown", "Michael Brown", "1507003211169-0a1dd7228f2d", "Will pick up at 4 PM today", "9:45 AM", 0),
        chat(3, "Sophia Davis", "Emily Davis", "1438761681033-6461ffad8d80", "Is she feeling better?", "Yesterday", 1),
        chat(4, "Liam Martinez", "Carlos Martinez", "1500648767791-00dcc994a43e", "Sent the photos, thanks!", "Yesterday", 0),
    ]
}

pub fn find_chat(id: u32) -> Option<ChatRecord> {
    chats().into_iter().find(|c| c.id == id)
}

fn message(id: u32, sender: Sender, kind: MessageKind, content: &str, time: &str) -> Message {
    Message {
        id,
        sender,
        kind,
        content: content.to_string(),
        time: time.to_string(),
    }
}

/// Opening history for a conversation.
pub fn conversation(chat: &ChatRecord) -> Vec<Message> {
    let first_name = chat.child_name.split_whitespace().next().unwrap_or("your child");
    let mut messages = vec![
        message(1, Sender::Parent, MessageKind::Text, &format!("Hi! How is {first_name} doing today?"), "9:30 AM"),
        message(
            2,
            Sender::Staff,
            MessageKind::Text,
            &format!("Good morning! {first_name} is doing great! Had a wonderful breakfast and is now enjoying arts and crafts."),
            "9:35 AM",
        ),
        message(3, Sender::Staff, MessageKind::Photo, "https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=300&h=300&fit=crop", "10:15 AM"),
        message(4, Sender::Parent, MessageKind::Text, "Thank you so much! Looks so happy", "10:20 AM"),
        message(5, Sender::Staff, MessageKind::Voice, "Voice message (0:12)", "11:05 AM"),
    ];
    if !chat.last_message.is_empty() {
        let id = messages.len() as u32 + 1;
        messages.push(message(id, Sender::Parent, MessageKind::Text, &chat.last_message, &chat.timestamp));
    }
    messages
}

pub fn daily_notes(child: &ChildRecord, today: &str) -> Vec<Note> {
    let first_name = child.name.split_whitespace().next().unwrap_or("They");
    vec![
        Note {
            id: 1,
            time: "10:30 AM".to_string(),
            date: today.to_string(),
            text: format!("{first_name} had a great morning! Enjoyed arts and crafts and played nicely with friends."),
        },
        Note {
            id: 2,
            time: "2:45 PM".to_string(),
            date: today.to_string(),
            text: "Ate all the snack and asked for more fruits!".to_string(),
        },
    ]
}

pub fn media_gallery() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: 1,
            kind: MediaKind::Photo,
            url: "https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=400&h=300&fit=crop".to_string(),
            caption: "Playing with building blocks!".to_string(),
            timestamp: "10:30 AM".to_string(),
        },
        MediaItem {
            id: 2,
            kind: MediaKind::Video,
            url: "https://images.unsplash.com/photo-1519340241574-2cec6aef0c01?w=400&h=300&fit=crop".to_string(),
            caption: "Singing during music time".to_string(),
            timestamp: "2:15 PM".to_string(),
        },
    ]
}

/// Children offered by the health log and incident child pickers.
pub fn picker_children() -> Vec<ChildRecord> {
    children().into_iter().take(3).collect()
}

pub fn health_logs() -> Vec<HealthLog> {
    let log = |id: u32, kind: &str, value: &str, time: &str, date: &str, notes: &str| HealthLog {
        id,
        kind: kind.to_string(),
        value: value.to_string(),
        time: time.to_string(),
        date: date.to_string(),
        notes: notes.to_string(),
    };
    vec![
        log(1, "Temperature", "98.6°F", "10:30 AM", "Today", "Normal temperature, feeling well"),
        log(2, "Medicine", "Tylenol (5ml)", "9:00 AM", "Today", "For fever, parent consent on file"),
        log(3, "Allergy Alert", "No reaction", "12:00 PM", "Yesterday", "Careful lunch monitoring"),
    ]
}

pub fn attendance_records(today: NaiveDate) -> Vec<AttendanceRecord> {
    let record = |id: u32, days_ago: i64, present: usize, absent: usize, to: &str| AttendanceRecord {
        id,
        date: crate::clock::date_label(today - Duration::days(days_ago)),
        present,
        absent,
        total: present + absent,
        time_from: "8:00 AM".to_string(),
        time_to: to.to_string(),
    };
    vec![
        record(1, 0, 6, 2, "9:30 AM"),
        record(2, 1, 7, 1, "9:15 AM"),
        record(3, 2, 8, 0, "9:00 AM"),
    ]
}

pub fn default_schedule() -> Vec<ScheduleEvent> {
    let event = |id: u32, time: &str, activity: &str, icon: &str, color: &str| ScheduleEvent {
        id,
        time: time.to_string(),
        activity: activity.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    };
    vec![
        event(1, "7:00 AM - 8:30 AM", "Arrival & Free Play", "Users", "Blue"),
        event(2, "8:30 AM - 9:00 AM", "Breakfast Time", "Utensils", "Green"),
        event(3, "9:00 AM - 10:00 AM", "Circle Time & Learning", "Book", "Purple"),
        event(4, "10:00 AM - 10:30 AM", "Snack Time", "Utensils", "Green"),
        event(5, "10:30 AM - 11:30 AM", "Outdoor Play", "Sun", "Yellow"),
        event(6, "11:30 AM - 12:30 PM", "Lunch Time", "Utensils", "Green"),
        event(7, "12:30 PM - 2:30 PM", "Nap Time", "Clock", "Purple"),
        event(8, "2:30 PM - 3:00 PM", "Afternoon Snack", "Utensils", "Green"),
        event(9, "3:00 PM - 4:00 PM", "Music & Arts", "Music", "Pink"),
        event(10, "4:00 PM - 4:30 PM", "Story Time", "Book", "Purple"),
        event(11, "4:30 PM - 6:00 PM", "Free Play & Pick Up", "Users", "Blue"),
    ]
}

pub fn ai_alerts() -> Vec<AiAlert> {
    let alert = |id: u32, kind: AlertKind, title: &str, room: &str, child: Option<&str>, time: &str, date: &str, description: &str| AiAlert {
        id,
        kind,
        title: title.to_string(),
        room: room.to_string(),
        child: child.map(str::to_string),
        time: time.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        status: "Resolved by Admin".to_string(),
    };
    vec![
        alert(1, AlertKind::Cry, "Cry Detection", "Room 2A", Some("Emma Wilson"), "10:45 AM", "Today", "Continuous crying detected for 2 minutes"),
        alert(2, AlertKind::Fire, "Fire Detected", "Kitchen Area", None, "9:30 AM", "Today", "Smoke detected in kitchen area"),
        alert(3, AlertKind::UnknownPerson, "Unknown Person", "Main Entrance", None, "8:15 AM", "Today", "Unrecognized person detected at entrance"),
        alert(4, AlertKind::DangerousObject, "Dangerous Object", "Play Area", None, "2:20 PM", "Yesterday", "Sharp object detected in play area"),
        alert(5, AlertKind::Cry, "Cry Detection", "Room 1B", Some("Oliver Brown"), "11:30 AM", "Yesterday", "Crying detected during nap time"),
        alert(6, AlertKind::UnknownPerson, "Unknown Person", "Playground", None, "3:45 PM", "Yesterday", "Unrecognized person near playground fence"),
    ]
}

/// The child whose pickup is being verified, with the people allowed to collect them.
pub fn pickup_roster() -> (ChildRecord, Vec<AuthorizedPerson>) {
    let person = |id: u32, name: &str, relation: &str, phone: &str, photo_id: &str| AuthorizedPerson {
        id,
        name: name.to_string(),
        relation: relation.to_string(),
        phone: phone.to_string(),
        photo: photo(photo_id),
    };
    let persons = vec![
        person(1, "Sarah Wilson", "Mother", "+1 (555) 123-4567", "1494790108377-be9c29b29330"),
        person(2, "John Wilson", "Father", "+1 (555) 123-4568", "1507003211169-0a1dd7228f2d"),
        person(3, "Margaret Smith", "Grandmother", "+1 (555) 123-4569", "1438761681033-6461ffad8d80"),
    ];
    let mut roster = children();
    (roster.swap_remove(0), persons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_counts() {
        let roster = children();
        assert_eq!(roster.len(), 8);
        assert_eq!(roster.iter().filter(|c| c.is_present()).count(), 6);
        assert!(roster.iter().filter(|c| !c.is_present()).all(|c| c.check_in.is_none()));
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(find_child(4).map(|c| c.name), Some("Liam Martinez".to_string()));
        assert!(find_child(99).is_none());
        assert_eq!(find_chat(2).map(|c| c.parent_name), Some("Michael Brown".to_string()));
    }

    #[test]
    fn test_conversation_mentions_child() {
        let chat = find_chat(3).unwrap();
        let messages = conversation(&chat);
        assert!(messages[0].content.contains("Sophia"));
        assert_eq!(messages.last().unwrap().content, "Is she feeling better?");
    }

    #[test]
    fn test_fresh_conversation_has_no_trailing_message() {
        let chat = ChatRecord::for_child(&find_child(5).unwrap());
        assert_eq!(conversation(&chat).len(), 5);
    }

    #[test]
    fn test_attendance_dates_count_back() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let records = attendance_records(today);
        assert_eq!(records[0].date, "Mar 2, 2026");
        assert_eq!(records[1].date, "Mar 1, 2026");
        assert_eq!(records[2].date, "Feb 28, 2026");
        assert!(records.iter().all(|r| r.total == r.present + r.absent));
    }
}
