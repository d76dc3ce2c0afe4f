//! Persistence contract tests - the engine only produces and consumes the
//! snapshot shape; a host-side collaborator owns the file.

use chrono::{DateTime, Utc};
use join_five::{
    Drag, DragOutcome, GameSession, HiScoreEntry, Lattice, Settings, SettingsError,
};

const I: f32 = join_five::DEFAULT_INTERVAL;

fn played_session() -> GameSession {
    let mut session = GameSession::new();
    // Two opening moves on the starting cross.
    for drag in [
        Drag::new(6.0, 3.0 * I, 6.0, 7.2 * I),
        Drag::new(6.0, 3.0 * I, 4.2 * I, 3.0 * I),
    ] {
        let outcome = session.drag(drag).unwrap();
        assert!(matches!(outcome, DragOutcome::Committed(_)));
    }
    session
}

#[test]
fn test_snapshot_survives_the_settings_file() {
    let session = played_session();
    let snapshot = Settings::capture(&session);

    // Host-side collaborator: write at shutdown, read at startup.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, snapshot.to_json().unwrap()).unwrap();

    let loaded = Settings::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, snapshot);

    let restored = loaded.restore(Lattice::default()).unwrap();
    assert_eq!(restored.score(), 2);
    assert_eq!(restored.board().dots(), session.board().dots());
    assert_eq!(restored.board().lines(), session.board().lines());
}

#[test]
fn test_snapshot_keys_match_the_contract() {
    let json = Settings::capture(&played_session()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("hiScore").is_some());
    assert!(value.get("dots").is_some());
    assert!(value.get("lines").is_some());

    let dot = &value["dots"][0];
    assert!(dot.get("x").is_some());
    assert!(dot.get("y").is_some());
    assert!(dot.get("isInitial").is_some());

    let line = &value["lines"][0];
    for key in ["x1", "y1", "x2", "y2"] {
        assert!(line.get(key).is_some());
    }
    assert_eq!(line["dots"].as_array().unwrap().len(), 5);
}

#[test]
fn test_tampered_snapshot_is_rejected() {
    let mut snapshot = Settings::capture(&played_session());
    // Shift a line endpoint so its dots no longer match.
    let dots = *snapshot.lines[0].dots();
    snapshot.lines[0] = join_five::Line::new(
        snapshot.lines[0].x1() + 1,
        snapshot.lines[0].y1(),
        snapshot.lines[0].x2(),
        snapshot.lines[0].y2(),
        dots,
    );

    assert!(matches!(
        snapshot.restore(Lattice::default()),
        Err(SettingsError::CorruptBoard(_))
    ));
}

#[test]
fn test_hi_score_entry_keeps_caller_timestamp() {
    let session = played_session();
    let timestamp = "2025-01-15T08:30:00Z".parse::<DateTime<Utc>>().unwrap();

    let mut snapshot = Settings::capture(&session);
    snapshot.record_hi_score(HiScoreEntry::capture(&session, timestamp));
    let parsed = Settings::from_json(&snapshot.to_json().unwrap()).unwrap();

    let entry = &parsed.hi_score_history[0];
    assert_eq!(entry.timestamp, timestamp);
    assert_eq!(entry.hi_score, 2);
    assert_eq!(entry.game_id, 1);
}
