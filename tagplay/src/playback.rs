// tagplay/src/playback.rs

//! Turning a selected catalog item into a playback request, and the stock
//! dispatchers that deliver it.

use std::process::Command;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::poller::Dispatcher;
use crate::types::TagId;
use crate::{Error, Result};

/// What a playback collaborator needs to start an item.
///
/// Albums and playlists carry a `context_uri`; tracks and uri lists carry
/// `uris` in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u8>,
}

impl PlaybackRequest {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self::from_item_with_rng(item, &mut rand::thread_rng())
    }

    /// As `from_item`, shuffling with `rng` when the item asks for it.
    pub fn from_item_with_rng<R: Rng + ?Sized>(item: &CatalogItem, rng: &mut R) -> Self {
        let mut uris = item.uris();
        if item.kind().is_context() {
            return Self {
                name: item.name.clone(),
                context_uri: uris.into_iter().next(),
                uris: Vec::new(),
                volume: item.volume,
            };
        }

        if item.shuffle && uris.len() > 1 {
            uris.shuffle(rng);
        }
        Self {
            name: item.name.clone(),
            context_uri: None,
            uris,
            volume: item.volume,
        }
    }

    pub fn is_context(&self) -> bool {
        self.context_uri.is_some()
    }
}

/// Logs each request instead of playing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDispatcher;

impl Dispatcher for LogDispatcher {
    fn dispatch(&mut self, tag: &TagId, item: &CatalogItem) -> Result<()> {
        let request = PlaybackRequest::from_item(item);
        if let Some(context) = &request.context_uri {
            info!("[{}] play {:?} from {}", tag, request.name, context);
        } else {
            info!("[{}] play {:?}: {} piece(s)", tag, request.name, request.uris.len());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct TaggedRequest<'a> {
    tag: &'a TagId,
    #[serde(flatten)]
    request: &'a PlaybackRequest,
}

/// Runs an external program per dispatch, passing the request as a JSON
/// document in its last argument, and waits for it to exit.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    program: String,
    args: Vec<String>,
}

impl CommandDispatcher {
    /// `command[0]` is the program, the rest are leading arguments.
    pub fn new(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| Error::Config("dispatch command is empty".into()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The JSON argument handed to the program for `item`.
    pub fn render(tag: &TagId, request: &PlaybackRequest) -> Result<String> {
        Ok(serde_json::to_string(&TaggedRequest { tag, request })?)
    }
}

impl Dispatcher for CommandDispatcher {
    fn dispatch(&mut self, tag: &TagId, item: &CatalogItem) -> Result<()> {
        let request = PlaybackRequest::from_item(item);
        let json = Self::render(tag, &request)?;
        debug!("exec {} {:?} {}", self.program, self.args, json);

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&json)
            .status()
            .map_err(|e| Error::Dispatch(format!("{}: {}", self.program, e)))?;
        if !status.success() {
            return Err(Error::Dispatch(format!("{} exited with {}", self.program, status)));
        }
        Ok(())
    }
}
