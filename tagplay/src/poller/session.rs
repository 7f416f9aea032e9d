// tagplay/src/poller/session.rs

//! Tag presence session: debounce and per-tag rotation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::TagId;

/// What happens to the "previous tag" marker when a detected tag has no
/// catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTagPolicy {
    /// The unknown tag becomes the previous tag: it is reported once per
    /// presentation.
    #[default]
    Remember,
    /// The previous tag is cleared: the unknown tag is reported on every
    /// cycle it stays on the reader.
    Forget,
}

/// Debounce state plus the rotation index of every tag seen so far.
///
/// IDLE is `previous() == None`. A tag that differs from `previous()` is a
/// new presentation; the same tag again is a repeat.
#[derive(Debug, Clone, Default)]
pub struct TagSession {
    previous: Option<TagId>,
    rotation: HashMap<TagId, usize>,
}

impl TagSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<&TagId> {
        self.previous.as_ref()
    }

    pub fn is_repeat(&self, tag: &TagId) -> bool {
        self.previous.as_ref() == Some(tag)
    }

    pub fn remember(&mut self, tag: TagId) {
        self.previous = Some(tag);
    }

    /// Back to IDLE. Rotation indices are kept.
    pub fn clear(&mut self) {
        self.previous = None;
    }

    /// Pick the item index for a new presentation of `tag` among
    /// `item_count` items.
    ///
    /// The first presentation gets index 0, each later one the next index
    /// modulo `item_count`. Single-item tags always get 0 and never store
    /// an index.
    pub fn select(&mut self, tag: &TagId, item_count: usize) -> usize {
        if item_count <= 1 {
            return 0;
        }
        let next = match self.rotation.get(tag) {
            Some(&last) => (last + 1) % item_count,
            None => 0,
        };
        self.rotation.insert(tag.clone(), next);
        next
    }

    /// Last index handed out for `tag`, if any.
    pub fn rotation_index(&self, tag: &TagId) -> Option<usize> {
        self.rotation.get(tag).copied()
    }
}
