//! Daily notes per child, newest first

use crate::error::{DaycareError, Result};
use crate::mock;
use crate::models::{ChildRecord, Note};
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    notes: HashMap<u32, Vec<Note>>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self, child: &ChildRecord, today: &str) -> Cow<'_, [Note]> {
        match self.notes.get(&child.id) {
            Some(notes) => Cow::Borrowed(notes.as_slice()),
            None => Cow::Owned(mock::daily_notes(child, today)),
        }
    }

    /// Record a note at the top of the child's timeline.
    pub fn add(&mut self, child: &ChildRecord, text: &str, time: &str, today: &str) -> Result<Note> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DaycareError::EmptyNote);
        }
        let notes = self
            .notes
            .entry(child.id)
            .or_insert_with(|| mock::daily_notes(child, today));
        let note = Note {
            id: notes.len() as u32 + 1,
            time: time.to_string(),
            date: today.to_string(),
            text: text.to_string(),
        };
        notes.insert(0, note.clone());
        Ok(note)
    }
}
