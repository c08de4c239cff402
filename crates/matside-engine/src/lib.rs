//! Match state machine and scoring rules.
//!
//! Every operation takes the previous snapshot by value and returns the next
//! one. Calls that make no sense in the current lifecycle state hand the
//! snapshot back untouched with an `Ignored` outcome.

pub mod rules;

use matside_types::{
    commands::MatchCommand,
    corner::{Corner, Position},
    events::CommandOutcome,
    game::{CompetitorIdentity, MatchSnapshot, MatchStatus, WinMethod},
    scoring::{Attribution, LogAction, LogEntry, ScoringAction},
    time_control::Period,
};
use tracing::{debug, info};

use crate::rules::{caution_outcome, stalling_outcome, PenaltyAward, PenaltyOutcome};

/// The snapshot produced by an operation and what happened to it.
#[derive(Debug, Clone)]
pub struct Transition {
    pub snapshot: MatchSnapshot,
    pub outcome: CommandOutcome,
}

impl Transition {
    fn applied(snapshot: MatchSnapshot) -> Self {
        Self {
            snapshot,
            outcome: CommandOutcome::Applied,
        }
    }

    fn finished(snapshot: MatchSnapshot) -> Self {
        Self {
            snapshot,
            outcome: CommandOutcome::Finished,
        }
    }

    fn ignored(snapshot: MatchSnapshot, reason: impl Into<String>) -> Self {
        Self {
            snapshot,
            outcome: CommandOutcome::Ignored(reason.into()),
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self.outcome, CommandOutcome::Ignored(_))
    }
}

const NOT_LIVE: &str = "match is not in progress";

fn live(snapshot: &MatchSnapshot) -> bool {
    snapshot.status == MatchStatus::InProgress
}

/// Dispatches a command to its operation.
pub fn apply(snapshot: MatchSnapshot, command: &MatchCommand) -> Transition {
    match command {
        MatchCommand::StartMatch { red, green } => start_match(snapshot, red, green),
        MatchCommand::EndMatch { winner, method } => end_match(snapshot, *winner, method.clone()),
        MatchCommand::EndByDecision => end_by_decision(snapshot),
        MatchCommand::ResetToSetup => reset_to_setup(snapshot),
        MatchCommand::Score { corner, action } => apply_score(snapshot, *corner, *action),
        MatchCommand::Stalling { corner } => apply_stalling(snapshot, *corner),
        MatchCommand::Caution { corner } => apply_caution(snapshot, *corner),
        MatchCommand::UndoLast => undo_last(snapshot),
        MatchCommand::SetPeriod { period } => set_period(snapshot, *period),
        MatchCommand::SetPosition { position } => set_position(snapshot, *position),
        MatchCommand::ToggleClock => toggle_clock(snapshot),
        MatchCommand::Tick => tick(snapshot),
    }
}

pub fn start_match(
    mut snapshot: MatchSnapshot,
    red: &CompetitorIdentity,
    green: &CompetitorIdentity,
) -> Transition {
    if snapshot.status != MatchStatus::Setup {
        return Transition::ignored(snapshot, "match already started");
    }
    for (corner, identity) in [(Corner::Red, red), (Corner::Green, green)] {
        let competitor = snapshot.competitor_mut(corner);
        competitor.name = identity.name.trim().to_string();
        competitor.school = identity.school.trim().to_string();
    }
    snapshot.status = MatchStatus::InProgress;
    info!(
        "Bout started: {} (red) vs {} (green)",
        snapshot.red.display_name(),
        snapshot.green.display_name()
    );
    Transition::applied(snapshot)
}

/// Advances the match clock by one second and accrues riding time.
pub fn tick(mut snapshot: MatchSnapshot) -> Transition {
    if snapshot.running_at_zero() {
        snapshot.is_running = false;
        return Transition::applied(snapshot);
    }
    if !snapshot.clock_should_run() {
        return Transition::ignored(snapshot, "clock is not running");
    }
    snapshot.match_clock = snapshot.match_clock.saturating_sub(1);
    snapshot.riding_time += snapshot.position.riding_delta();
    if snapshot.match_clock == 0 {
        snapshot.is_running = false;
        info!("Period {} clock expired", snapshot.period);
    }
    Transition::applied(snapshot)
}

pub fn apply_score(mut snapshot: MatchSnapshot, corner: Corner, action: ScoringAction) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    let points = action.points();
    let competitor = snapshot.competitor_mut(corner);
    competitor.score = competitor.score.saturating_add(points);
    *competitor.stats.counter_mut(action) += 1;

    match action {
        ScoringAction::Takedown | ScoringAction::Reversal => {
            snapshot.position = Position::advantage(corner);
        }
        ScoringAction::Escape => snapshot.position = Position::Neutral,
        ScoringAction::NearFall2 | ScoringAction::NearFall3 | ScoringAction::NearFall4 => {}
    }

    push_log(&mut snapshot, LogAction::Score(action), points, corner.into());
    debug!("{corner} scored {} (+{points})", action.label());
    Transition::applied(snapshot)
}

pub fn apply_stalling(mut snapshot: MatchSnapshot, corner: Corner) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    let offender = snapshot.competitor_mut(corner);
    offender.stalling_count += 1;
    offender.stats.stalling += 1;
    let count = offender.stalling_count;

    match stalling_outcome(count) {
        PenaltyOutcome::Award(PenaltyAward { action, points }) => {
            award_opponent(&mut snapshot, corner, points);
            push_log(&mut snapshot, action, points, corner.into());
            debug!("{corner} stalling #{count}: +{points} to opponent");
            Transition::applied(snapshot)
        }
        PenaltyOutcome::Disqualification => {
            // The bout result carries this one; the match log gets no entry.
            snapshot.status = MatchStatus::Finished;
            snapshot.winner = Some(corner.opponent());
            snapshot.win_method = Some(WinMethod::StallingDisqualification);
            snapshot.is_running = false;
            info!("{corner} disqualified for stalling (violation #{count})");
            Transition::finished(snapshot)
        }
    }
}

pub fn apply_caution(mut snapshot: MatchSnapshot, corner: Corner) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    let offender = snapshot.competitor_mut(corner);
    offender.caution_count += 1;
    offender.stats.cautions += 1;
    let count = offender.caution_count;

    let PenaltyAward { action, points } = caution_outcome(count);
    award_opponent(&mut snapshot, corner, points);
    push_log(&mut snapshot, action, points, corner.into());
    debug!("{corner} caution #{count}: +{points} to opponent");
    Transition::applied(snapshot)
}

/// Reverses the most recent log entry and removes it.
pub fn undo_last(mut snapshot: MatchSnapshot) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    if snapshot.logs.is_empty() {
        return Transition::ignored(snapshot, "match log is empty");
    }
    let entry = snapshot.logs.remove(0);

    if let Some(corner) = entry.attribution.corner() {
        let points = entry.points;
        if entry.action.is_stalling() || entry.action.is_caution() {
            let offender = snapshot.competitor_mut(corner);
            if entry.action.is_stalling() {
                offender.stalling_count = offender.stalling_count.saturating_sub(1);
                offender.stats.stalling = offender.stats.stalling.saturating_sub(1);
            } else {
                offender.caution_count = offender.caution_count.saturating_sub(1);
                offender.stats.cautions = offender.stats.cautions.saturating_sub(1);
            }
            let opponent = snapshot.competitor_mut(corner.opponent());
            opponent.score = opponent.score.saturating_sub(points);
        } else {
            let scorer = snapshot.competitor_mut(corner);
            scorer.score = scorer.score.saturating_sub(points);
            if let LogAction::Score(action) = entry.action {
                let counter = scorer.stats.counter_mut(action);
                *counter = counter.saturating_sub(1);
            }
        }
    }

    debug!("Undid '{}'", entry.description);
    Transition::applied(snapshot)
}

pub fn set_period(mut snapshot: MatchSnapshot, period: Period) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    snapshot.period = period;
    snapshot.match_clock = period.duration_secs();
    snapshot.is_running = false;
    Transition::applied(snapshot)
}

pub fn set_position(mut snapshot: MatchSnapshot, position: Position) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    snapshot.position = position;
    Transition::applied(snapshot)
}

pub fn toggle_clock(mut snapshot: MatchSnapshot) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    snapshot.is_running = !snapshot.is_running;
    Transition::applied(snapshot)
}

pub fn end_match(mut snapshot: MatchSnapshot, winner: Corner, method: WinMethod) -> Transition {
    if !live(&snapshot) {
        return Transition::ignored(snapshot, NOT_LIVE);
    }
    info!("Bout ended: {winner} wins by {method}");
    snapshot.status = MatchStatus::Finished;
    snapshot.winner = Some(winner);
    snapshot.win_method = Some(method);
    snapshot.is_running = false;
    Transition::finished(snapshot)
}

/// Ends the bout on points. A tied score goes to red.
pub fn end_by_decision(snapshot: MatchSnapshot) -> Transition {
    let winner = snapshot.leader();
    end_match(snapshot, winner, WinMethod::Decision)
}

pub fn reset_to_setup(snapshot: MatchSnapshot) -> Transition {
    if snapshot.status != MatchStatus::Finished {
        return Transition::ignored(snapshot, "match has not finished");
    }
    Transition::applied(MatchSnapshot::default())
}

fn award_opponent(snapshot: &mut MatchSnapshot, offender: Corner, points: u32) {
    let opponent = snapshot.competitor_mut(offender.opponent());
    opponent.score = opponent.score.saturating_add(points);
}

fn push_log(snapshot: &mut MatchSnapshot, action: LogAction, points: u32, attribution: Attribution) {
    let entry = LogEntry::new(
        action,
        points,
        attribution,
        snapshot.period,
        snapshot.match_clock,
    );
    snapshot.logs.insert(0, entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> MatchSnapshot {
        start_match(
            MatchSnapshot::default(),
            &CompetitorIdentity::new("A", "North"),
            &CompetitorIdentity::new("B", "South"),
        )
        .snapshot
    }

    fn run(snapshot: MatchSnapshot, commands: &[MatchCommand]) -> MatchSnapshot {
        commands
            .iter()
            .fold(snapshot, |snap, cmd| apply(snap, cmd).snapshot)
    }

    fn score(corner: Corner, action: ScoringAction) -> MatchCommand {
        MatchCommand::Score { corner, action }
    }

    #[test]
    fn start_moves_setup_to_in_progress() {
        let snapshot = started();
        assert_eq!(snapshot.status, MatchStatus::InProgress);
        assert_eq!(snapshot.match_clock, 180);
        assert_eq!(snapshot.period, Period::P1);
        assert_eq!(snapshot.red.name, "A");
        assert_eq!(snapshot.green.school, "South");

        let again = start_match(
            snapshot,
            &CompetitorIdentity::default(),
            &CompetitorIdentity::default(),
        );
        assert!(again.is_ignored());
        assert_eq!(again.snapshot.red.name, "A");
    }

    #[test]
    fn start_trims_identity() {
        let snapshot = start_match(
            MatchSnapshot::default(),
            &CompetitorIdentity::new("  Kim ", " Iowa"),
            &CompetitorIdentity::default(),
        )
        .snapshot;
        assert_eq!(snapshot.red.name, "Kim");
        assert_eq!(snapshot.red.school, "Iowa");
    }

    #[test]
    fn full_bout_scenario() {
        let mut snapshot = started();
        snapshot = apply_score(snapshot, Corner::Red, ScoringAction::Takedown).snapshot;
        assert_eq!(snapshot.red.score, 3);
        assert_eq!(snapshot.position, Position::RedTop);
        assert_eq!(snapshot.logs.len(), 1);

        snapshot = toggle_clock(snapshot).snapshot;
        for _ in 0..5 {
            snapshot = tick(snapshot).snapshot;
        }
        assert_eq!(snapshot.match_clock, 175);
        assert_eq!(snapshot.riding_time, 5);

        snapshot = apply_stalling(snapshot, Corner::Green).snapshot;
        assert_eq!(snapshot.red.score, 3);
        assert_eq!(snapshot.logs[0].description, "Stalling Warning");
        snapshot = apply_stalling(snapshot, Corner::Green).snapshot;
        snapshot = apply_stalling(snapshot, Corner::Green).snapshot;
        assert_eq!(snapshot.red.score, 5);
        snapshot = apply_stalling(snapshot, Corner::Green).snapshot;
        assert_eq!(snapshot.red.score, 7);
        assert_eq!(
            snapshot.logs[0].description,
            "Stalling Penalty (+2 to Opponent)"
        );

        let log_len = snapshot.logs.len();
        let transition = apply_stalling(snapshot, Corner::Green);
        assert_eq!(transition.outcome, CommandOutcome::Finished);
        let snapshot = transition.snapshot;
        assert_eq!(snapshot.status, MatchStatus::Finished);
        assert_eq!(snapshot.winner, Some(Corner::Red));
        assert_eq!(
            snapshot.win_method.as_ref().map(ToString::to_string).as_deref(),
            Some("Disqualification (Stalling)")
        );
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.red.score, 7);
        assert_eq!(snapshot.logs.len(), log_len);
        assert_eq!(snapshot.green.stalling_count, 5);
    }

    #[test]
    fn tick_runs_down_and_stops_at_zero() {
        let mut snapshot = run(
            started(),
            &[MatchCommand::SetPeriod {
                period: Period::TieBreak,
            }],
        );
        snapshot = toggle_clock(snapshot).snapshot;
        let mut previous = snapshot.match_clock;
        while snapshot.is_running {
            snapshot = tick(snapshot).snapshot;
            assert_eq!(snapshot.match_clock, previous - 1);
            previous = snapshot.match_clock;
        }
        assert_eq!(snapshot.match_clock, 0);

        let after = tick(snapshot.clone());
        assert!(after.is_ignored());
        assert_eq!(after.snapshot.match_clock, 0);
    }

    #[test]
    fn tick_ignored_when_paused_or_not_live() {
        let paused = tick(started());
        assert!(paused.is_ignored());
        assert_eq!(paused.snapshot.match_clock, 180);

        let mut setup = MatchSnapshot::default();
        setup.is_running = true;
        assert!(tick(setup).is_ignored());
    }

    #[test]
    fn toggling_at_zero_is_cleared_by_next_tick() {
        let mut snapshot = set_period(started(), Period::TieBreak).snapshot;
        snapshot = toggle_clock(snapshot).snapshot;
        for _ in 0..30 {
            snapshot = tick(snapshot).snapshot;
        }
        assert_eq!(snapshot.match_clock, 0);
        assert!(!snapshot.is_running);

        snapshot = toggle_clock(snapshot).snapshot;
        assert!(snapshot.is_running);
        snapshot = set_position(snapshot, Position::RedTop).snapshot;

        let cleared = tick(snapshot);
        assert!(!cleared.is_ignored());
        assert!(!cleared.snapshot.is_running);
        assert_eq!(cleared.snapshot.match_clock, 0);
        assert_eq!(cleared.snapshot.riding_time, 0);
        assert!(tick(cleared.snapshot).is_ignored());
    }

    #[test]
    fn riding_time_follows_position() {
        let mut snapshot = toggle_clock(started()).snapshot;
        snapshot = set_position(snapshot, Position::GreenTop).snapshot;
        for expected in [-1, -2, -3] {
            snapshot = tick(snapshot).snapshot;
            assert_eq!(snapshot.riding_time, expected);
        }
        snapshot = set_position(snapshot, Position::Neutral).snapshot;
        snapshot = tick(snapshot).snapshot;
        assert_eq!(snapshot.riding_time, -3);
        snapshot = set_position(snapshot, Position::RedTop).snapshot;
        for _ in 0..10 {
            snapshot = tick(snapshot).snapshot;
        }
        assert_eq!(snapshot.riding_time, 7);
    }

    #[test]
    fn scoring_position_side_effects() {
        let snapshot = apply_score(started(), Corner::Green, ScoringAction::Takedown).snapshot;
        assert_eq!(snapshot.position, Position::GreenTop);
        let snapshot = apply_score(snapshot, Corner::Red, ScoringAction::Escape).snapshot;
        assert_eq!(snapshot.position, Position::Neutral);
        let snapshot = apply_score(snapshot, Corner::Red, ScoringAction::Reversal).snapshot;
        assert_eq!(snapshot.position, Position::RedTop);
        let snapshot = apply_score(snapshot, Corner::Red, ScoringAction::NearFall3).snapshot;
        assert_eq!(snapshot.position, Position::RedTop);
        assert_eq!(snapshot.red.score, 1 + 2 + 3);
        assert_eq!(snapshot.green.score, 3);
        assert_eq!(snapshot.logs[0].description, "Near Fall 3 (+3)");
        assert_eq!(snapshot.logs[0].attribution, Attribution::Red);
        assert_eq!(snapshot.red.stats.near_fall_3, 1);
        assert_eq!(snapshot.green.stats.takedowns, 1);
    }

    #[test]
    fn log_entry_stamps_clock_and_period() {
        let snapshot = run(
            started(),
            &[
                MatchCommand::SetPeriod {
                    period: Period::P2,
                },
                MatchCommand::ToggleClock,
                MatchCommand::Tick,
                MatchCommand::Tick,
                score(Corner::Green, ScoringAction::Escape),
            ],
        );
        let entry = &snapshot.logs[0];
        assert_eq!(entry.timestamp, "1:58");
        assert_eq!(entry.period, Period::P2);
    }

    #[test]
    fn caution_schedule_applies_to_opponent() {
        let mut snapshot = started();
        for _ in 0..2 {
            snapshot = apply_caution(snapshot, Corner::Red).snapshot;
        }
        assert_eq!(snapshot.green.score, 0);
        assert_eq!(snapshot.logs[0].description, "Caution");
        for _ in 0..6 {
            snapshot = apply_caution(snapshot, Corner::Red).snapshot;
        }
        assert_eq!(snapshot.green.score, 6);
        assert_eq!(snapshot.red.caution_count, 8);
        assert_eq!(snapshot.status, MatchStatus::InProgress);
        assert_eq!(snapshot.logs.len(), 8);
        assert_eq!(
            snapshot.logs[0].description,
            "Caution Penalty (+1 to Opponent)"
        );
    }

    #[test]
    fn undo_reverses_score() {
        let before = started();
        let after = apply_score(before.clone(), Corner::Red, ScoringAction::Takedown).snapshot;
        let undone = undo_last(after).snapshot;
        assert_eq!(undone.red.score, before.red.score);
        assert!(undone.logs.is_empty());
        assert_eq!(undone.red.stats.takedowns, 0);
    }

    #[test]
    fn undo_reverses_stalling_penalty() {
        let snapshot = run(
            started(),
            &[
                MatchCommand::Stalling {
                    corner: Corner::Green,
                },
                MatchCommand::Stalling {
                    corner: Corner::Green,
                },
            ],
        );
        assert_eq!(snapshot.red.score, 1);
        assert_eq!(snapshot.green.stalling_count, 2);

        let snapshot = undo_last(snapshot).snapshot;
        assert_eq!(snapshot.red.score, 0);
        assert_eq!(snapshot.green.stalling_count, 1);
        assert_eq!(snapshot.logs.len(), 1);

        let snapshot = undo_last(snapshot).snapshot;
        assert_eq!(snapshot.green.stalling_count, 0);
        assert_eq!(snapshot.green.stats.stalling, 0);
    }

    #[test]
    fn undo_reverses_caution_penalty() {
        let mut snapshot = started();
        for _ in 0..3 {
            snapshot = apply_caution(snapshot, Corner::Green).snapshot;
        }
        assert_eq!(snapshot.red.score, 1);
        let snapshot = undo_last(snapshot).snapshot;
        assert_eq!(snapshot.red.score, 0);
        assert_eq!(snapshot.green.caution_count, 2);
    }

    #[test]
    fn undo_walks_back_through_history() {
        let snapshot = run(
            started(),
            &[
                score(Corner::Red, ScoringAction::Takedown),
                score(Corner::Green, ScoringAction::Escape),
                MatchCommand::Caution {
                    corner: Corner::Red,
                },
            ],
        );
        let snapshot = run(
            snapshot,
            &[
                MatchCommand::UndoLast,
                MatchCommand::UndoLast,
                MatchCommand::UndoLast,
            ],
        );
        assert_eq!(snapshot.red.score, 0);
        assert_eq!(snapshot.green.score, 0);
        assert_eq!(snapshot.red.caution_count, 0);
        assert!(snapshot.logs.is_empty());
    }

    #[test]
    fn undo_on_empty_log_is_idempotent() {
        let snapshot = started();
        let once = undo_last(snapshot.clone());
        assert!(once.is_ignored());
        let twice = undo_last(once.snapshot);
        assert_eq!(twice.snapshot, snapshot);
    }

    #[test]
    fn undo_floors_at_zero() {
        let mut snapshot = apply_score(started(), Corner::Red, ScoringAction::NearFall4).snapshot;
        snapshot.red.score = 1;
        let snapshot = undo_last(snapshot).snapshot;
        assert_eq!(snapshot.red.score, 0);
    }

    #[test]
    fn undo_neutral_entry_only_removes_it() {
        let mut snapshot = apply_score(started(), Corner::Red, ScoringAction::Escape).snapshot;
        snapshot.logs.insert(
            0,
            LogEntry::new(
                LogAction::Score(ScoringAction::Takedown),
                3,
                Attribution::Neutral,
                Period::P1,
                100,
            ),
        );
        let snapshot = undo_last(snapshot).snapshot;
        assert_eq!(snapshot.red.score, 1);
        assert_eq!(snapshot.logs.len(), 1);
    }

    #[test]
    fn set_period_resets_clock_and_stops() {
        let mut snapshot = toggle_clock(started()).snapshot;
        snapshot = apply_score(snapshot, Corner::Red, ScoringAction::Takedown).snapshot;
        snapshot = tick(tick(snapshot).snapshot).snapshot;
        let snapshot = set_period(snapshot, Period::Overtime).snapshot;
        assert_eq!(snapshot.match_clock, 60);
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.red.score, 3);
        assert_eq!(snapshot.riding_time, 2);

        let again = set_period(snapshot, Period::Overtime).snapshot;
        assert_eq!(again.match_clock, 60);
        assert!(!again.is_running);
    }

    #[test]
    fn operations_ignored_outside_in_progress() {
        let setup = MatchSnapshot::default();
        let commands = [
            score(Corner::Red, ScoringAction::Takedown),
            MatchCommand::Stalling {
                corner: Corner::Red,
            },
            MatchCommand::Caution {
                corner: Corner::Green,
            },
            MatchCommand::UndoLast,
            MatchCommand::SetPeriod {
                period: Period::P3,
            },
            MatchCommand::SetPosition {
                position: Position::RedTop,
            },
            MatchCommand::ToggleClock,
            MatchCommand::EndByDecision,
            MatchCommand::ResetToSetup,
        ];
        for cmd in &commands {
            let transition = apply(setup.clone(), cmd);
            assert!(transition.is_ignored(), "{} should be ignored", cmd.name());
            assert_eq!(transition.snapshot, setup);
        }
    }

    #[test]
    fn end_match_and_reset() {
        let snapshot = toggle_clock(started()).snapshot;
        let transition = end_match(snapshot, Corner::Green, WinMethod::Fall);
        assert_eq!(transition.outcome, CommandOutcome::Finished);
        let finished = transition.snapshot;
        assert_eq!(finished.winner, Some(Corner::Green));
        assert!(!finished.is_running);

        assert!(apply_score(finished.clone(), Corner::Red, ScoringAction::Escape).is_ignored());

        let reset = reset_to_setup(finished).snapshot;
        assert_eq!(reset, MatchSnapshot::default());
    }

    #[test]
    fn decision_goes_to_leader() {
        let snapshot = run(
            started(),
            &[
                score(Corner::Green, ScoringAction::Escape),
                MatchCommand::EndByDecision,
            ],
        );
        assert_eq!(snapshot.winner, Some(Corner::Green));
        assert_eq!(snapshot.win_method, Some(WinMethod::Decision));

        let tied = end_by_decision(started()).snapshot;
        assert_eq!(tied.winner, Some(Corner::Red));
    }
}
