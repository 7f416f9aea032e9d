// tagplay/src/catalog.rs

//! Tag catalog: which items a tag plays.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::TagId;
use crate::{Error, Result};

/// A single uri or an explicit list of uris
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemUri {
    One(String),
    Many(Vec<String>),
}

/// What an item's uri points at. Albums and playlists are played as a
/// context; tracks and uri lists are played as a queue of uris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Track,
    Album,
    Playlist,
    List,
    Unknown,
}

impl ItemKind {
    /// Classify `spotify:<type>:<id>` uris. Lists are always `List`.
    pub fn of(uri: &ItemUri) -> Self {
        let uri = match uri {
            ItemUri::Many(_) => return ItemKind::List,
            ItemUri::One(uri) => uri,
        };

        let Some(rest) = uri.strip_prefix("spotify:") else {
            return ItemKind::Unknown;
        };
        match rest.split_once(':') {
            Some(("track", _)) => ItemKind::Track,
            Some(("album", _)) => ItemKind::Album,
            Some(("playlist", _)) => ItemKind::Playlist,
            _ => ItemKind::Unknown,
        }
    }

    pub fn is_context(self) -> bool {
        matches!(self, ItemKind::Album | ItemKind::Playlist)
    }
}

/// A playable entry associated with a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub uri: ItemUri,
    #[serde(default)]
    pub shuffle: bool,
    /// Playback volume in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u8>,
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        ItemKind::of(&self.uri)
    }

    pub fn uris(&self) -> Vec<String> {
        match &self.uri {
            ItemUri::One(u) => vec![u.clone()],
            ItemUri::Many(v) => v.clone(),
        }
    }
}

/// Items configured for one tag, rotated through on each presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tracks: Vec<CatalogItem>,
}

/// Tag identifier → entry. Keys are validated and normalised on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, TagEntry>")]
pub struct TagCatalog {
    entries: HashMap<TagId, TagEntry>,
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Empty entries are rejected since a
    /// presentation would have nothing to select.
    pub fn insert(&mut self, tag: TagId, entry: TagEntry) -> Result<()> {
        if entry.tracks.is_empty() {
            return Err(Error::Config(format!("tag {} has no tracks", tag)));
        }
        if let Some(item) = entry
            .tracks
            .iter()
            .find(|i| matches!(i.volume, Some(v) if v > 100))
        {
            return Err(Error::Config(format!(
                "tag {}: volume of {:?} is above 100",
                tag, item.name
            )));
        }
        self.entries.insert(tag, entry);
        Ok(())
    }

    pub fn get(&self, tag: &TagId) -> Option<&TagEntry> {
        self.entries.get(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &TagId> {
        self.entries.keys()
    }
}

impl TryFrom<HashMap<String, TagEntry>> for TagCatalog {
    type Error = Error;

    fn try_from(raw: HashMap<String, TagEntry>) -> Result<Self> {
        let mut catalog = TagCatalog::new();
        for (key, entry) in raw {
            let tag = TagId::parse(&key)?;
            if catalog.get(&tag).is_some() {
                return Err(Error::Config(format!("duplicate tag id {}", tag)));
            }
            catalog.insert(tag, entry)?;
        }
        Ok(catalog)
    }
}
