// fixtures.rs: provides commonly used tags, catalogs and reader wiring

use std::sync::{Arc, Mutex};

use tagplay::catalog::{CatalogItem, ItemUri, TagCatalog, TagEntry};
use tagplay::poller::{Poller, PollerConfig};
use tagplay::test_support::{MockRig, mock_reader};
use tagplay::{Result, TagId};

pub const SAMPLE_UID: [u8; 4] = [0x04, 0xa1, 0xb2, 0xc3];
pub const SAMPLE_TAG: &str = "04a1b2c3";
pub const SINGLE_UID: [u8; 7] = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
pub const SINGLE_TAG: &str = "04112233445566";

pub const CATALOG_JSON: &str = r#"{
    "04a1b2c3": { "tracks": [
        { "name": "first",  "uri": "spotify:album:aaa" },
        { "name": "second", "uri": "spotify:playlist:bbb" },
        { "name": "third",  "uri": ["spotify:track:1", "spotify:track:2"], "shuffle": true }
    ] },
    "04112233445566": { "tracks": [
        { "name": "only", "uri": "spotify:track:xyz", "volume": 35 }
    ] }
}"#;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_tag() -> TagId {
    TagId::parse(SAMPLE_TAG).unwrap()
}

pub fn sample_catalog() -> TagCatalog {
    serde_json::from_str(CATALOG_JSON).unwrap()
}

pub fn item(name: &str) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        uri: ItemUri::One(format!("spotify:track:{}", name)),
        shuffle: false,
        volume: None,
    }
}

pub fn catalog_for(tag: &str, names: &[&str]) -> TagCatalog {
    let mut catalog = TagCatalog::new();
    let entry = TagEntry {
        tracks: names.iter().map(|n| item(n)).collect(),
    };
    catalog.insert(TagId::parse(tag).unwrap(), entry).unwrap();
    catalog
}

/// (tag, item name) for every dispatch
pub type Dispatches = Arc<Mutex<Vec<(String, String)>>>;

pub type RecordingDispatcher = Box<dyn FnMut(&TagId, &CatalogItem) -> Result<()> + Send>;

/// Poller over a mock reader whose dispatcher records what it was given.
pub fn recording_poller(
    catalog: TagCatalog,
    config: PollerConfig,
) -> (Poller<RecordingDispatcher>, MockRig, Dispatches) {
    init_logger();
    let (reader, rig) = mock_reader();
    let dispatches: Dispatches = Default::default();
    let sink = dispatches.clone();
    let dispatcher: RecordingDispatcher = Box::new(move |tag: &TagId, item: &CatalogItem| {
        sink.lock()
            .unwrap()
            .push((tag.to_string(), item.name.clone()));
        Ok(())
    });
    let poller = Poller::new(reader, catalog, dispatcher, config);
    (poller, rig, dispatches)
}

pub fn names(dispatches: &Dispatches) -> Vec<String> {
    dispatches
        .lock()
        .unwrap()
        .iter()
        .map(|(_, name)| name.clone())
        .collect()
}
