//! In-process publication of match events to observers.

use async_trait::async_trait;
use futures::{stream::BoxStream, StreamExt};
use matside_types::{
    events::SystemEvent, game::MatchSnapshot, MatsideError, Result,
};
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tracing::{debug, warn};

#[async_trait]
pub trait SnapshotFeed: Send + Sync {
    async fn publish(&self, event: SystemEvent) -> Result<()>;
    fn subscribe(&self) -> BoxStream<'static, SystemEvent>;
}

/// Feed backed by a broadcast channel. Slow subscribers skip what they missed.
#[derive(Clone)]
pub struct LocalFeed {
    tx: broadcast::Sender<SystemEvent>,
}

impl LocalFeed {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MatsideError::Feed("capacity must be greater than zero".into()));
        }
        let (tx, _) = broadcast::channel(capacity);
        Ok(Self { tx })
    }
}

#[async_trait]
impl SnapshotFeed for LocalFeed {
    async fn publish(&self, event: SystemEvent) -> Result<()> {
        if self.tx.send(event).is_err() {
            debug!("No feed subscribers; event dropped");
        }
        Ok(())
    }

    fn subscribe(&self) -> BoxStream<'static, SystemEvent> {
        BroadcastStream::new(self.tx.subscribe())
            .filter_map(|event| async move {
                match event {
                    Ok(event) => Some(event),
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        warn!("Feed subscriber lagged; skipped {skipped} events");
                        None
                    }
                }
            })
            .boxed()
    }
}

/// Pulls the snapshot out of a snapshot event.
pub fn expect_snapshot(event: SystemEvent) -> Result<MatchSnapshot> {
    let kind = event.kind.clone();
    event
        .as_snapshot()
        .cloned()
        .ok_or(MatsideError::Event(kind))
}

/// Only the snapshots published on `feed`, in order.
pub fn snapshots<F: SnapshotFeed + ?Sized>(feed: &F) -> BoxStream<'static, MatchSnapshot> {
    let mut events = feed.subscribe();
    async_stream::stream! {
        while let Some(event) = events.next().await {
            if let Ok(snapshot) = expect_snapshot(event) {
                yield snapshot;
            }
        }
    }
    .boxed()
}
