//! Parent conversations
//!
//! Messages live only in memory, one thread per conversation id, seeded
//! from the mock history the first time a conversation is opened.

use crate::mock;
use crate::models::{ChatRecord, Message, MessageKind, Sender};
use std::borrow::Cow;
use std::collections::HashMap;

pub const MOCK_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1519340241574-2cec6aef0c01?w=300&h=300&fit=crop";
pub const MOCK_VOICE_CLIP: &str = "Voice message (0:05)";

#[derive(Debug, Clone, Default)]
pub struct ChatBook {
    threads: HashMap<u32, Vec<Message>>,
    recording: Option<u32>,
}

impl ChatBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of a conversation, seeding it on first access.
    pub fn thread(&mut self, chat: &ChatRecord) -> &[Message] {
        self.thread_mut(chat).as_slice()
    }

    /// Read-only view for rendering; an unopened conversation shows its seed.
    pub fn messages(&self, chat: &ChatRecord) -> Cow<'_, [Message]> {
        match self.threads.get(&chat.id) {
            Some(thread) => Cow::Borrowed(thread.as_slice()),
            None => Cow::Owned(mock::conversation(chat)),
        }
    }

    fn thread_mut(&mut self, chat: &ChatRecord) -> &mut Vec<Message> {
        self.threads
            .entry(chat.id)
            .or_insert_with(|| mock::conversation(chat))
    }

    fn push(&mut self, chat: &ChatRecord, kind: MessageKind, content: String, time: &str) -> Message {
        let thread = self.thread_mut(chat);
        let message = Message {
            id: thread.len() as u32 + 1,
            sender: Sender::Staff,
            kind,
            content,
            time: time.to_string(),
        };
        thread.push(message.clone());
        message
    }

    /// Send a text message; blank input sends nothing.
    pub fn send_text(&mut self, chat: &ChatRecord, text: &str, time: &str) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(chat, MessageKind::Text, text.to_string(), time))
    }

    pub fn send_photo(&mut self, chat: &ChatRecord, time: &str) -> Message {
        self.push(chat, MessageKind::Photo, MOCK_PHOTO_URL.to_string(), time)
    }

    pub fn is_recording(&self, chat: &ChatRecord) -> bool {
        self.recording == Some(chat.id)
    }

    /// Start recording, or stop and send the clip. Returns the sent message when stopping.
    pub fn toggle_recording(&mut self, chat: &ChatRecord, time: &str) -> Option<Message> {
        if self.is_recording(chat) {
            self.recording = None;
            Some(self.push(chat, MessageKind::Voice, MOCK_VOICE_CLIP.to_string(), time))
        } else {
            self.recording = Some(chat.id);
            None
        }
    }

    /// Leaving a conversation abandons any recording in progress.
    pub fn cancel_recording(&mut self) {
        self.recording = None;
    }
}
