mod common;

use common::{GAME_ID, free_throw, other, roster, shot, sub};
use rusty_hoops::controller::reconstruct::fold_events;
use rusty_hoops::controller::reconstruct::free_throw::{
    FreeThrowBuffer, FreeThrowEnd, sequence_end, starts_sequence,
};
use rusty_hoops::model::{Anomaly, AnomalyLog, PeriodRules, PlayerId, TeamSide};

#[test]
fn test2_sequence_markers() {
    assert!(starts_sequence(&free_throw(1, 1, 5, 0, Some("1 of 2"), 2, (1, 0))));
    assert!(starts_sequence(&free_throw(1, 1, 5, 0, Some("1 of 1"), 2, (1, 0))));
    assert!(!starts_sequence(&free_throw(1, 1, 5, 0, Some("2 of 2"), 2, (1, 0))));
    assert!(!starts_sequence(&shot(1, 1, 5, 0, 2, (2, 0))));

    assert_eq!(
        sequence_end(&free_throw(1, 1, 5, 0, Some("2 of 2"), 2, (1, 0))),
        Some(FreeThrowEnd::Final)
    );
    assert_eq!(sequence_end(&free_throw(1, 1, 5, 0, Some("1 of 2"), 2, (1, 0))), None);
    assert_eq!(
        sequence_end(&free_throw(1, 1, 5, 0, None, 2, (1, 0))),
        Some(FreeThrowEnd::MissingMarker)
    );
    assert_eq!(
        sequence_end(&free_throw(1, 1, 5, 0, Some("technical"), 2, (1, 0))),
        Some(FreeThrowEnd::Unrecognized)
    );
    assert_eq!(sequence_end(&shot(1, 1, 5, 0, 2, (2, 0))), None);
}

#[test]
fn test2_buffer_releases_at_last_attempt() {
    let mut log = AnomalyLog::new(GAME_ID);
    let mut buffer = FreeThrowBuffer::default();

    assert_eq!(buffer.observe(&shot(1, 1, 6, 0, 2, (2, 0)), &mut log), None);
    assert!(!buffer.in_progress());

    assert_eq!(buffer.observe(&free_throw(2, 1, 5, 0, Some("1 of 3"), 2, (3, 0)), &mut log), None);
    assert!(buffer.in_progress());
    buffer.hold(sub(3, 1, 5, 0, 1, "out", (3, 0)));
    buffer.hold(sub(4, 1, 5, 0, 6, "in", (3, 0)));
    assert_eq!(buffer.observe(&free_throw(5, 1, 5, 0, Some("2 of 3"), 2, (4, 0)), &mut log), None);
    assert_eq!(buffer.pending().len(), 2);

    let released = buffer
        .observe(&free_throw(6, 1, 5, 0, Some("3 of 3"), 2, (5, 0)), &mut log)
        .expect("sequence should end at 3 of 3");
    let numbers: Vec<i64> = released.iter().map(|e| e.action_number).collect();
    assert_eq!(numbers, vec![3, 4]);
    assert!(!buffer.in_progress());
    assert!(log.items().is_empty());
}

#[test]
fn test2_substitution_waits_for_final_free_throw() -> Result<(), Box<dyn std::error::Error>> {
    // already in play order: the subs are logged between the two attempts
    let events = vec![
        other(1, 1, 12, 0, "jumpball", (0, 0)),
        shot(2, 1, 8, 0, 11, (0, 2)),
        free_throw(3, 1, 5, 0, Some("1 of 2"), 2, (1, 2)),
        sub(4, 1, 5, 0, 1, "out", (1, 2)),
        sub(5, 1, 5, 0, 6, "in", (1, 2)),
        free_throw(6, 1, 5, 0, Some("2 of 2"), 2, (2, 2)),
        shot(7, 1, 4, 0, 6, (4, 2)),
    ];
    let recon = fold_events(roster(), &events, PeriodRules::nba(), AnomalyLog::new(GAME_ID))?;

    assert_eq!(recon.intervals.len(), 2);
    let first = &recon.intervals[0];
    // both free throws count for the lineup that drew the foul
    assert_eq!(first.home_points, 2);
    assert_eq!(first.away_points, 2);
    assert!(first.home_lineup.contains(PlayerId(1)));
    assert_eq!(first.end.clock.centis(), 30_000);

    let second = &recon.intervals[1];
    assert!(second.home_lineup.contains(PlayerId(6)));
    assert!(!second.home_lineup.contains(PlayerId(1)));
    assert_eq!(second.home_points, 2);
    assert_eq!(second.plus_minus, 2);

    let subs_interval: Vec<usize> = recon
        .timeline
        .iter()
        .filter(|e| e.action_type == "substitution")
        .map(|e| e.interval)
        .collect();
    assert_eq!(subs_interval, vec![0, 0]);
    assert!(recon.anomalies.is_empty());
    Ok(())
}

#[test]
fn test2_missing_marker_ends_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let events = vec![
        other(1, 1, 12, 0, "jumpball", (0, 0)),
        free_throw(2, 1, 7, 0, Some("1 of 2"), 12, (0, 1)),
        sub(3, 1, 7, 0, 11, "out", (0, 1)),
        sub(4, 1, 7, 0, 16, "in", (0, 1)),
        free_throw(5, 1, 7, 0, None, 12, (0, 2)),
        shot(6, 1, 6, 0, 1, (2, 2)),
    ];
    let recon = fold_events(roster(), &events, PeriodRules::nba(), AnomalyLog::new(GAME_ID))?;

    assert_eq!(recon.intervals.len(), 2);
    assert_eq!(recon.intervals[0].away_points, 2);
    assert!(recon.intervals[1].lineup(TeamSide::Away).contains(PlayerId(16)));
    assert_eq!(
        recon.anomalies,
        vec![Anomaly::FreeThrowWithoutMarker { action_number: 5 }]
    );
    Ok(())
}

#[test]
fn test2_open_sequence_at_end_of_game() -> Result<(), Box<dyn std::error::Error>> {
    let events = vec![
        other(1, 4, 1, 0, "period", (100, 98)),
        free_throw(2, 4, 0, 0, Some("1 of 2"), 2, (101, 98)),
        sub(3, 4, 0, 0, 2, "out", (101, 98)),
        sub(4, 4, 0, 0, 7, "in", (101, 98)),
    ];
    let recon = fold_events(roster(), &events, PeriodRules::nba(), AnomalyLog::new(GAME_ID))?;

    assert_eq!(recon.intervals.len(), 1);
    assert_eq!(recon.intervals[0].home_points, 1);
    assert_eq!(
        recon.anomalies,
        vec![Anomaly::FreeThrowSequenceOpen {
            pending_substitutions: 2
        }]
    );
    Ok(())
}
