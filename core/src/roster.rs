//! Roster and conversation list filtering

use crate::models::{ChatRecord, ChildRecord};

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Children whose name contains `query`, case-insensitively. An empty query keeps everyone.
pub fn filter_children<'a>(children: &'a [ChildRecord], query: &str) -> Vec<&'a ChildRecord> {
    let query = query.trim();
    children.iter().filter(|c| matches(&c.name, query)).collect()
}

/// Conversations matching `query` on either the child's or the parent's name.
pub fn filter_chats<'a>(chats: &'a [ChatRecord], query: &str) -> Vec<&'a ChatRecord> {
    let query = query.trim();
    chats
        .iter()
        .filter(|c| matches(&c.child_name, query) || matches(&c.parent_name, query))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresenceCounts {
    pub present: usize,
    pub absent: usize,
}

pub fn presence_counts(children: &[ChildRecord]) -> PresenceCounts {
    children.iter().fold(PresenceCounts::default(), |mut acc, c| {
        if c.is_present() {
            acc.present += 1;
        } else {
            acc.absent += 1;
        }
        acc
    })
}

pub fn call_notice(child: &ChildRecord) -> String {
    format!("Calling {} at {}...", child.parent_name, child.parent_phone)
}
