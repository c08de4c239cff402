//! Match host: owns the authoritative snapshot, serializes every operation
//! against it, and drives the match clock with a single tick timer.

use std::sync::{Arc, Weak};

use matside_engine::Transition;
use matside_feed::SnapshotFeed;
use matside_ops::EventJournal;
use matside_types::{
    commands::MatchCommand,
    config::ClockConfig,
    corner::{Corner, Position},
    events::{
        ClockEvent, CommandEvent, CommandOutcome, EventKind, EventPayload, LifecycleEvent,
        LifecyclePhase, SystemEvent,
    },
    game::{BoutSummary, CompetitorIdentity, MatchSnapshot, MatchStatus, WinMethod},
    scoring::ScoringAction,
    time_control::Period,
    MatsideError, Result,
};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{interval_at, Duration, Instant},
};
use tracing::{debug, info, warn};

struct Ticker {
    generation: u64,
    handle: JoinHandle<()>,
}

struct Slot {
    snapshot: MatchSnapshot,
    ticker: Option<Ticker>,
    generation: u64,
}

impl Slot {
    fn is_current(&self, generation: u64) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| ticker.generation == generation)
    }
}

struct HostInner<F> {
    slot: Mutex<Slot>,
    feed: F,
    journal: EventJournal,
    tick_interval: Duration,
}

/// Cheaply cloneable handle to the match host.
pub struct MatchHost<F> {
    inner: Arc<HostInner<F>>,
}

impl<F> Clone for MatchHost<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F> MatchHost<F>
where
    F: SnapshotFeed + 'static,
{
    pub fn new(config: &ClockConfig, feed: F, journal: EventJournal) -> Self {
        Self {
            inner: Arc::new(HostInner {
                slot: Mutex::new(Slot {
                    snapshot: MatchSnapshot::default(),
                    ticker: None,
                    generation: 0,
                }),
                feed,
                journal,
                tick_interval: Duration::from_millis(config.tick_interval_ms),
            }),
        }
    }

    pub async fn boot(&self) -> Result<()> {
        if self.inner.tick_interval.is_zero() {
            return Err(orchestrator_error("tick interval must be non-zero"));
        }
        let slot = self.inner.slot.lock().await;
        self.inner
            .publish(SystemEvent::lifecycle(
                LifecyclePhase::Boot,
                "match host ready",
            ))
            .await?;
        self.inner
            .publish(SystemEvent::snapshot(slot.snapshot.clone()))
            .await
    }

    /// Stops the clock timer and announces shutdown.
    pub async fn shutdown(&self) -> Result<()> {
        let mut slot = self.inner.slot.lock().await;
        if let Some(clock) = self.inner.disarm(&mut slot) {
            self.inner.publish(clock_event(clock)).await?;
        }
        self.inner
            .publish(SystemEvent::lifecycle(
                LifecyclePhase::Shutdown,
                "match host stopped",
            ))
            .await
    }

    /// Runs one command against the current snapshot and replaces it.
    pub async fn execute(&self, command: MatchCommand) -> Result<Transition> {
        self.inner.execute(command).await
    }

    pub async fn snapshot(&self) -> MatchSnapshot {
        self.inner.slot.lock().await.snapshot.clone()
    }

    /// Whether a tick timer is currently live.
    pub async fn clock_armed(&self) -> bool {
        self.inner.slot.lock().await.ticker.is_some()
    }

    pub fn feed(&self) -> &F {
        &self.inner.feed
    }

    pub fn journal(&self) -> &EventJournal {
        &self.inner.journal
    }

    pub async fn start_match(
        &self,
        red: CompetitorIdentity,
        green: CompetitorIdentity,
    ) -> Result<Transition> {
        self.execute(MatchCommand::StartMatch { red, green }).await
    }

    pub async fn tick(&self) -> Result<Transition> {
        self.execute(MatchCommand::Tick).await
    }

    pub async fn apply_score(&self, corner: Corner, action: ScoringAction) -> Result<Transition> {
        self.execute(MatchCommand::Score { corner, action }).await
    }

    pub async fn apply_stalling(&self, corner: Corner) -> Result<Transition> {
        self.execute(MatchCommand::Stalling { corner }).await
    }

    pub async fn apply_caution(&self, corner: Corner) -> Result<Transition> {
        self.execute(MatchCommand::Caution { corner }).await
    }

    pub async fn undo_last(&self) -> Result<Transition> {
        self.execute(MatchCommand::UndoLast).await
    }

    pub async fn set_period(&self, period: Period) -> Result<Transition> {
        self.execute(MatchCommand::SetPeriod { period }).await
    }

    pub async fn set_position(&self, position: Position) -> Result<Transition> {
        self.execute(MatchCommand::SetPosition { position }).await
    }

    pub async fn toggle_clock(&self) -> Result<Transition> {
        self.execute(MatchCommand::ToggleClock).await
    }

    pub async fn end_match(&self, winner: Corner, method: WinMethod) -> Result<Transition> {
        self.execute(MatchCommand::EndMatch { winner, method }).await
    }

    pub async fn end_by_decision(&self) -> Result<Transition> {
        self.execute(MatchCommand::EndByDecision).await
    }

    pub async fn reset_to_setup(&self) -> Result<Transition> {
        self.execute(MatchCommand::ResetToSetup).await
    }
}

impl<F> HostInner<F>
where
    F: SnapshotFeed + 'static,
{
    async fn execute(self: &Arc<Self>, command: MatchCommand) -> Result<Transition> {
        let mut slot = self.slot.lock().await;
        let previous_status = slot.snapshot.status;
        let previous = std::mem::take(&mut slot.snapshot);
        let mut transition = matside_engine::apply(previous, &command);
        if transition.snapshot.running_at_zero() {
            // No timer arms on an expired clock, so clamp here.
            transition.snapshot = matside_engine::tick(transition.snapshot).snapshot;
        }
        slot.snapshot = transition.snapshot.clone();

        match &transition.outcome {
            CommandOutcome::Ignored(reason) => warn!("Ignored {}: {reason}", command.name()),
            _ => debug!("Applied {}", command.name()),
        }

        let clock = self.reconcile_clock(&mut slot);
        let ignored = transition.is_ignored();
        let command_event = SystemEvent::new(
            EventKind::Command,
            EventPayload::Command(CommandEvent {
                command,
                outcome: transition.outcome.clone(),
            }),
        );
        if ignored {
            self.feed.publish(command_event).await?;
        } else {
            self.publish(command_event).await?;
        }

        if !ignored {
            self.publish(SystemEvent::snapshot(slot.snapshot.clone()))
                .await?;
            self.announce_lifecycle(previous_status, &slot.snapshot)
                .await?;
        }
        if let Some(clock) = clock {
            self.publish(clock_event(clock)).await?;
        }
        Ok(transition)
    }

    /// Timer body: applies one tick if `generation` still owns the clock.
    /// Returns false once the timer should stop.
    async fn timer_tick(&self, generation: u64) -> Result<bool> {
        let mut slot = self.slot.lock().await;
        if !slot.is_current(generation) {
            return Ok(false);
        }
        let previous = std::mem::take(&mut slot.snapshot);
        let transition = matside_engine::tick(previous);
        slot.snapshot = transition.snapshot;
        self.publish(SystemEvent::snapshot(slot.snapshot.clone()))
            .await?;

        if slot.snapshot.clock_should_run() {
            return Ok(true);
        }
        // Clock ran out: the timer retires itself.
        slot.ticker = None;
        info!("Clock stopped at {}", slot.snapshot.match_clock);
        self.publish(clock_event(ClockEvent {
            armed: false,
            remaining_secs: slot.snapshot.match_clock,
            generation,
        }))
        .await?;
        Ok(false)
    }

    /// Arms or disarms the timer so that it is live exactly when the snapshot
    /// says the clock should run.
    fn reconcile_clock(self: &Arc<Self>, slot: &mut Slot) -> Option<ClockEvent> {
        match (slot.ticker.is_some(), slot.snapshot.clock_should_run()) {
            (false, true) => Some(self.arm(slot)),
            (true, false) => self.disarm(slot),
            _ => None,
        }
    }

    fn arm(self: &Arc<Self>, slot: &mut Slot) -> ClockEvent {
        if let Some(stale) = slot.ticker.take() {
            stale.handle.abort();
        }
        slot.generation += 1;
        let generation = slot.generation;
        let handle = tokio::spawn(run_timer(
            Arc::downgrade(self),
            generation,
            self.tick_interval,
        ));
        slot.ticker = Some(Ticker { generation, handle });
        debug!("Clock timer armed (generation {generation})");
        ClockEvent {
            armed: true,
            remaining_secs: slot.snapshot.match_clock,
            generation,
        }
    }

    fn disarm(&self, slot: &mut Slot) -> Option<ClockEvent> {
        let ticker = slot.ticker.take()?;
        ticker.handle.abort();
        debug!("Clock timer disarmed (generation {})", ticker.generation);
        Some(ClockEvent {
            armed: false,
            remaining_secs: slot.snapshot.match_clock,
            generation: ticker.generation,
        })
    }

    async fn announce_lifecycle(
        &self,
        previous: MatchStatus,
        snapshot: &MatchSnapshot,
    ) -> Result<()> {
        let event = match (previous, snapshot.status) {
            (MatchStatus::Setup, MatchStatus::InProgress) => SystemEvent::lifecycle(
                LifecyclePhase::MatchStart,
                format!(
                    "{} vs {}",
                    snapshot.red.display_name(),
                    snapshot.green.display_name()
                ),
            ),
            (MatchStatus::InProgress, MatchStatus::Finished) => {
                let summary = BoutSummary::from_snapshot(snapshot)
                    .ok_or_else(|| orchestrator_error("finished bout has no result"))?;
                self.journal.record_bout(summary.clone()).await?;
                SystemEvent::new(
                    EventKind::Lifecycle,
                    EventPayload::Lifecycle(LifecycleEvent {
                        phase: LifecyclePhase::MatchEnd,
                        details: Some(summary.headline()),
                        summary: Some(summary),
                    }),
                )
            }
            (MatchStatus::Finished, MatchStatus::Setup) => {
                SystemEvent::lifecycle(LifecyclePhase::Reset, "ready for next bout")
            }
            _ => return Ok(()),
        };
        self.publish(event).await
    }

    /// Broadcasts `event`, journaling everything except snapshots.
    async fn publish(&self, event: SystemEvent) -> Result<()> {
        if event.kind != EventKind::Snapshot {
            self.journal.record_event(event.clone()).await?;
        }
        self.feed.publish(event).await
    }
}

async fn run_timer<F>(inner: Weak<HostInner<F>>, generation: u64, period: Duration)
where
    F: SnapshotFeed + 'static,
{
    let mut interval = interval_at(Instant::now() + period, period);
    loop {
        interval.tick().await;
        let Some(host) = inner.upgrade() else {
            break;
        };
        match host.timer_tick(generation).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                warn!("Clock timer stopped: {err}");
                break;
            }
        }
    }
}

fn clock_event(clock: ClockEvent) -> SystemEvent {
    SystemEvent::new(EventKind::Clock, EventPayload::Clock(clock))
}

pub fn orchestrator_error(message: impl Into<String>) -> MatsideError {
    MatsideError::Orchestrator(message.into())
}
