//! Per-child photo and video gallery

use crate::mock;
use crate::models::{ChildRecord, MediaItem, MediaKind};
use std::borrow::Cow;
use std::collections::HashMap;

const MOCK_PHOTO: &str = "https://images.unsplash.com/photo-1518990013801-39976c49e6fd?w=400&h=300&fit=crop";
const MOCK_VIDEO: &str = "https://images.unsplash.com/photo-1504570126050-8f35f8c3f1f6?w=400&h=300&fit=crop";

#[derive(Debug, Clone, Default)]
pub struct MediaGallery {
    uploads: HashMap<u32, Vec<MediaItem>>,
}

impl MediaGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self, child: &ChildRecord) -> Cow<'_, [MediaItem]> {
        match self.uploads.get(&child.id) {
            Some(items) => Cow::Borrowed(items.as_slice()),
            None => Cow::Owned(mock::media_gallery()),
        }
    }

    fn items_mut(&mut self, child: &ChildRecord) -> &mut Vec<MediaItem> {
        self.uploads.entry(child.id).or_insert_with(mock::media_gallery)
    }

    /// Simulated capture; a blank caption becomes "New photo" / "New video".
    pub fn upload(&mut self, child: &ChildRecord, kind: MediaKind, caption: &str, time: &str) -> MediaItem {
        let items = self.items_mut(child);
        let caption = match caption.trim() {
            "" => format!("New {kind}"),
            text => text.to_string(),
        };
        let item = MediaItem {
            id: items.iter().map(|i| i.id).max().unwrap_or(0) + 1,
            kind,
            url: match kind {
                MediaKind::Photo => MOCK_PHOTO.to_string(),
                MediaKind::Video => MOCK_VIDEO.to_string(),
            },
            caption,
            timestamp: time.to_string(),
        };
        items.insert(0, item.clone());
        item
    }

    pub fn delete(&mut self, child: &ChildRecord, id: u32) -> bool {
        let items = self.items_mut(child);
        let before = items.len();
        items.retain(|item| item.id != id);
        items.len() != before
    }
}
