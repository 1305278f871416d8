//! Domain records shown by the staff screens

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Present,
    Absent,
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresenceStatus::Present => write!(f, "Present"),
            PresenceStatus::Absent => write!(f, "Absent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub status: PresenceStatus,
    pub check_in: Option<String>,
    pub parent_name: String,
    pub parent_phone: String,
    pub photo: String,
}

impl ChildRecord {
    pub fn is_present(&self) -> bool {
        self.status == PresenceStatus::Present
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: u32,
    pub child_name: String,
    pub parent_name: String,
    pub parent_photo: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: u32,
}

/// Ids of conversations opened from a child start here, clear of the chat list ids.
pub const CHILD_CHAT_ID_BASE: u32 = 1000;

impl ChatRecord {
    /// A fresh conversation with a child's parent, as opened from the roster or a profile.
    pub fn for_child(child: &ChildRecord) -> Self {
        let parent_name = if child.parent_name.trim().is_empty() {
            "Parent".to_string()
        } else {
            child.parent_name.clone()
        };
        Self {
            id: CHILD_CHAT_ID_BASE + child.id,
            child_name: child.name.clone(),
            parent_name,
            parent_photo: child.photo.clone(),
            last_message: String::new(),
            timestamp: "Now".to_string(),
            unread: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Staff,
    Parent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Photo,
    Voice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: Sender,
    pub kind: MessageKind,
    pub content: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub time: String,
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "photo"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u32,
    pub kind: MediaKind,
    pub url: String,
    pub caption: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLog {
    pub id: u32,
    pub kind: String,
    pub value: String,
    pub time: String,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u32,
    pub date: String,
    pub present: usize,
    pub absent: usize,
    pub total: usize,
    pub time_from: String,
    pub time_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: u32,
    pub time: String,
    pub activity: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Cry,
    Fire,
    UnknownPerson,
    DangerousObject,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Cry,
        AlertKind::Fire,
        AlertKind::UnknownPerson,
        AlertKind::DangerousObject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Cry => "Cry",
            AlertKind::Fire => "Fire",
            AlertKind::UnknownPerson => "Unknown person",
            AlertKind::DangerousObject => "Dangerous object",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAlert {
    pub id: u32,
    pub kind: AlertKind,
    pub title: String,
    pub room: String,
    pub child: Option<String>,
    pub time: String,
    pub date: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedPerson {
    pub id: u32,
    pub name: String,
    pub relation: String,
    pub phone: String,
    pub photo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child() -> ChildRecord {
        ChildRecord {
            id: 7,
            name: "Isabella Garcia".to_string(),
            age: 3,
            status: PresenceStatus::Absent,
            check_in: None,
            parent_name: "Sofia Garcia".to_string(),
            parent_phone: "+1 (555) 789-0123".to_string(),
            photo: "photo.jpg".to_string(),
        }
    }

    #[test]
    fn test_chat_for_child() {
        let chat = ChatRecord::for_child(&child());
        assert_eq!(chat.id, CHILD_CHAT_ID_BASE + 7);
        assert_eq!(chat.child_name, "Isabella Garcia");
        assert_eq!(chat.parent_name, "Sofia Garcia");
        assert_eq!(chat.timestamp, "Now");
        assert_eq!(chat.unread, 0);
        assert!(chat.last_message.is_empty());
    }

    #[test]
    fn test_chat_for_child_without_parent_name() {
        let mut c = child();
        c.parent_name = "  ".to_string();
        assert_eq!(ChatRecord::for_child(&c).parent_name, "Parent");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&PresenceStatus::Present).unwrap();
        assert_eq!(json, "\"present\"");
        let json = serde_json::to_string(&AlertKind::UnknownPerson).unwrap();
        assert_eq!(json, "\"unknown_person\"");
    }
}
