// tagplay/src/poller/mod.rs

//! Tag polling loop.
//!
//! Each cycle runs one detection, folds the status into the health window,
//! resets the reader when the window says it is wedged, and dispatches a
//! catalog item for every new tag presentation.

pub mod health;
pub mod session;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::catalog::{CatalogItem, TagCatalog};
use crate::device::Pn532;
use crate::status::Status;
use crate::types::{BaudProfile, TagId};
use crate::utils::timeout::DEFAULT_POLL_TIMEOUT_MS;
use crate::Result;

pub use health::{DEFAULT_HEALTH_THRESHOLD, DEFAULT_HEALTH_WINDOW, HealthWindow};
pub use session::{TagSession, UnknownTagPolicy};

/// Polling loop settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PollerConfig {
    /// Bound for each detection exchange (ms)
    pub poll_timeout_ms: u64,
    /// Sleep between cycles
    pub poll_delay: Duration,
    pub health_window: usize,
    pub health_threshold: f64,
    /// Status bits that must all be clear for a detection to dispatch.
    /// `0xff` requires an exact `OK`; `0x01` only looks at the timeout bit.
    pub status_mask: u8,
    pub unknown_tag: UnknownTagPolicy,
    pub baud: BaudProfile,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            poll_delay: Duration::from_secs(1),
            health_window: DEFAULT_HEALTH_WINDOW,
            health_threshold: DEFAULT_HEALTH_THRESHOLD,
            status_mask: 0xff,
            unknown_tag: UnknownTagPolicy::default(),
            baud: BaudProfile::default(),
        }
    }
}

/// What one poll cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The health window tripped and the reader was reset.
    Reset,
    /// A new presentation dispatched item `index` of the tag's entry.
    Dispatched { tag: TagId, index: usize },
    /// The tag is still on the reader; nothing dispatched.
    Repeat(TagId),
    /// The tag has no catalog entry.
    Unknown(TagId),
    /// No usable detection this cycle.
    NoTag(Status),
}

/// Receives the item selected for a new tag presentation.
///
/// Called synchronously from the loop; polling pauses while it runs.
pub trait Dispatcher {
    fn dispatch(&mut self, tag: &TagId, item: &CatalogItem) -> Result<()>;
}

impl<F> Dispatcher for F
where
    F: FnMut(&TagId, &CatalogItem) -> Result<()>,
{
    fn dispatch(&mut self, tag: &TagId, item: &CatalogItem) -> Result<()> {
        self(tag, item)
    }
}

/// Owns the reader and drives detection, health and dispatch.
pub struct Poller<D> {
    reader: Pn532,
    catalog: TagCatalog,
    dispatcher: D,
    config: PollerConfig,
    health: HealthWindow,
    session: TagSession,
}

impl<D: Dispatcher> Poller<D> {
    /// The reader is expected to be initialized already (see
    /// `Pn532::reset_device`).
    pub fn new(reader: Pn532, catalog: TagCatalog, dispatcher: D, config: PollerConfig) -> Self {
        let health = HealthWindow::new(config.health_window, config.health_threshold);
        Self {
            reader,
            catalog,
            dispatcher,
            config,
            health,
            session: TagSession::new(),
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn reader(&self) -> &Pn532 {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut Pn532 {
        &mut self.reader
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &TagSession {
        &self.session
    }

    pub fn health(&self) -> &HealthWindow {
        &self.health
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn into_reader(self) -> Pn532 {
        self.reader
    }

    /// Run one cycle without the trailing sleep.
    ///
    /// Only a failed reset escapes as an error; every detection failure is
    /// folded into the outcome.
    pub fn poll_once(&mut self) -> Result<CycleOutcome> {
        let (status, uid) = self
            .reader
            .detect_tag(self.config.baud, self.config.poll_timeout_ms);

        self.health.record_status(status);
        if self.health.should_reset() {
            warn!(
                "{} of the last {} polls failed, resetting reader",
                self.health.unhealthy_count(),
                self.health.size()
            );
            self.reader.reset_device()?;
            self.health.clear();
            return Ok(CycleOutcome::Reset);
        }

        let masked = status.masked(Status::from_bits(self.config.status_mask));
        let uid = match uid {
            Some(uid) if masked.is_ok() => uid,
            _ => {
                if status.is_worse_than_timeout() {
                    debug!("poll: {}", status);
                }
                self.session.clear();
                return Ok(CycleOutcome::NoTag(status));
            }
        };

        let tag = TagId::from(&uid);
        if self.session.is_repeat(&tag) {
            return Ok(CycleOutcome::Repeat(tag));
        }

        let Some(entry) = self.catalog.get(&tag) else {
            warn!("unrecognized tag: {}", tag);
            match self.config.unknown_tag {
                UnknownTagPolicy::Remember => self.session.remember(tag.clone()),
                UnknownTagPolicy::Forget => self.session.clear(),
            }
            return Ok(CycleOutcome::Unknown(tag));
        };

        let index = self.session.select(&tag, entry.tracks.len());
        let item = &entry.tracks[index];
        info!("tag {}: playing {:?} ({}/{})", tag, item.name, index + 1, entry.tracks.len());
        if let Err(e) = self.dispatcher.dispatch(&tag, item) {
            error!("dispatch for tag {} failed: {}", tag, e);
        }

        self.session.remember(tag.clone());
        Ok(CycleOutcome::Dispatched { tag, index })
    }

    /// Poll until `stop` is set. The flag is checked between cycles, never
    /// in the middle of an exchange.
    pub fn run_until(&mut self, stop: &AtomicBool) -> Result<()> {
        while !stop.load(Ordering::SeqCst) {
            self.poll_once()?;
            if stop.load(Ordering::SeqCst) {
                break;
            }
            let delay = self.config.poll_delay;
            self.reader.sleep(delay);
        }
        info!("polling stopped");
        Ok(())
    }

    /// Poll forever. Returns only when a reset fails.
    pub fn run(&mut self) -> Result<()> {
        self.run_until(&AtomicBool::new(false))
    }
}

#[cfg(feature = "async")]
impl<D> Poller<D>
where
    D: Dispatcher + Send + 'static,
{
    /// Move the loop onto tokio's blocking pool. The poller is handed back
    /// when `stop` is set.
    pub fn spawn(
        mut self,
        stop: std::sync::Arc<AtomicBool>,
    ) -> tokio::task::JoinHandle<Result<Self>> {
        tokio::task::spawn_blocking(move || {
            self.run_until(&stop)?;
            Ok(self)
        })
    }
}
