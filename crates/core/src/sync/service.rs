//! Request sync service
//!
//! `load_all` fans out one fetch per configured status, treats any failed
//! status as empty, concatenates the rest in status order and publishes the
//! merged list on a watch channel.
//!
//! Loads are sequenced by generation. Starting a load cancels the fan-out of
//! the one before it, and a load only publishes if it is still the newest
//! one started when it completes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use travelgate_domain::RequestStatus;
use tracing::{debug, info, instrument, warn};

use super::ports::{RequestSource, Resync};
use crate::entity::WorkflowEntity;

/// Result of one `load_all` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The merged collection was published.
    Published { generation: u64, count: usize },
    /// A newer load started first; nothing was published.
    Superseded { generation: u64 },
}

impl SyncOutcome {
    pub fn generation(self) -> u64 {
        match self {
            Self::Published { generation, .. } | Self::Superseded { generation } => generation,
        }
    }

    pub fn is_published(self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

struct InFlight {
    generation: u64,
    token: CancellationToken,
}

/// Keeps a local snapshot of remote requests in sync.
pub struct RequestSync<E: WorkflowEntity> {
    source: Arc<dyn RequestSource<E>>,
    statuses: Vec<RequestStatus>,
    generation: AtomicU64,
    in_flight: Mutex<Option<InFlight>>,
    published: watch::Sender<Arc<Vec<E>>>,
}

impl<E: WorkflowEntity> RequestSync<E> {
    /// Sync over all five workflow statuses.
    pub fn new(source: Arc<dyn RequestSource<E>>) -> Self {
        Self::with_statuses(source, RequestStatus::KNOWN.to_vec())
    }

    /// Sync over a subset of statuses, queried and merged in the given order.
    pub fn with_statuses(source: Arc<dyn RequestSource<E>>, statuses: Vec<RequestStatus>) -> Self {
        let (published, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            source,
            statuses,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            published,
        }
    }

    pub fn statuses(&self) -> &[RequestStatus] {
        &self.statuses
    }

    /// The port this sync reads from.
    pub fn source(&self) -> Arc<dyn RequestSource<E>> {
        Arc::clone(&self.source)
    }

    /// Latest published collection.
    pub fn snapshot(&self) -> Arc<Vec<E>> {
        Arc::clone(&self.published.borrow())
    }

    /// Receiver notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<E>>> {
        self.published.subscribe()
    }

    /// Generation of the most recently started load.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Fetch every status, merge and publish.
    ///
    /// Never fails: a status whose fetch fails contributes nothing.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn load_all(&self) -> SyncOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();

        let previous = self.in_flight.lock().replace(InFlight { generation, token: token.clone() });
        if let Some(previous) = previous {
            debug!(superseded = previous.generation, generation, "cancelling older load");
            previous.token.cancel();
        }

        let fetches = join_all(self.statuses.iter().map(|status| self.fetch_status(status)));
        let batches = tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(generation, "load cancelled by a newer one");
                return SyncOutcome::Superseded { generation };
            }
            batches = fetches => batches,
        };

        let merged: Vec<E> = batches.into_iter().flatten().collect();
        self.publish_if_current(generation, merged)
    }

    fn publish_if_current(&self, generation: u64, merged: Vec<E>) -> SyncOutcome {
        let mut in_flight = self.in_flight.lock();
        if in_flight.as_ref().map(|current| current.generation) != Some(generation) {
            debug!(generation, "discarding superseded load");
            return SyncOutcome::Superseded { generation };
        }
        in_flight.take();

        let count = merged.len();
        self.published.send_replace(Arc::new(merged));
        info!(generation, count, "requests synced");
        SyncOutcome::Published { generation, count }
    }

    async fn fetch_status(&self, status: &RequestStatus) -> Vec<E> {
        match self.source.fetch_by_status(status).await {
            Ok(requests) => {
                debug!(%status, count = requests.len(), "status fetched");
                requests
            }
            Err(err) => {
                warn!(%status, error = %err, "status fetch failed, treating as empty");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl<E: WorkflowEntity> Resync for RequestSync<E> {
    async fn resync(&self) {
        self.load_all().await;
    }
}
