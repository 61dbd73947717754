use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use hamekomi::{
    HapticError, HapticPulse, HapticSink, PuzzleSession, SaveStore, SessionHooks, SoundCue,
};
use hamekomi_core::game::ScatterArea;
use hamekomi_core::Board;

const TARGETS: [(f32, f32); 4] = [(0.0, 0.0), (200.0, 0.0), (0.0, 200.0), (200.0, 200.0)];

fn area() -> ScatterArea {
    ScatterArea::new(0.0, 0.0, 800.0, 600.0)
}

struct Recorder {
    sounds: Rc<RefCell<Vec<SoundCue>>>,
    wins: Rc<Cell<u32>>,
}

fn recording_hooks() -> (SessionHooks, Recorder) {
    let sounds = Rc::new(RefCell::new(Vec::new()));
    let wins = Rc::new(Cell::new(0u32));
    let hooks = SessionHooks {
        on_sound: {
            let sounds = sounds.clone();
            Rc::new(move |cue| sounds.borrow_mut().push(cue))
        },
        on_win: {
            let wins = wins.clone();
            Rc::new(move || wins.set(wins.get() + 1))
        },
        on_reload: Rc::new(|| {}),
    };
    (hooks, Recorder { sounds, wins })
}

fn session(dir: &Path, seed: u32, hooks: SessionHooks) -> PuzzleSession {
    PuzzleSession::with_null_haptics(&TARGETS, area(), seed, SaveStore::new(dir), hooks)
}

fn drag_onto_target(session: &mut PuzzleSession, id: usize) {
    let piece = session.board().piece(id).expect("piece exists");
    let (tx, ty) = piece.target();
    let (cx, cy) = piece.position();
    assert!(session.begin_drag(id));
    session.drag_delta(id, tx - cx, ty - cy);
    session.end_drag(id);
}

fn count(sounds: &[SoundCue], cue: SoundCue) -> usize {
    sounds.iter().filter(|entry| **entry == cue).count()
}

#[test]
fn four_piece_walkthrough_saves_then_completes_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (hooks, recorder) = recording_hooks();
    let mut session = session(dir.path(), 42, hooks);
    let probe = SaveStore::new(dir.path());

    for id in 0..3 {
        drag_onto_target(&mut session, id);
        assert!(!session.is_game_over());
        let data = probe.peek().expect("save written after placement");
        assert_eq!(data.placed_count(), id + 1);
        assert_eq!(recorder.wins.get(), 0);
    }

    drag_onto_target(&mut session, 3);
    assert!(session.is_game_over());
    assert_eq!(recorder.wins.get(), 1);
    assert!(!probe.exists(), "save slot deleted on completion");

    let sounds = recorder.sounds.borrow();
    assert_eq!(count(&sounds, SoundCue::Win), 1);
    assert_eq!(count(&sounds, SoundCue::DropCorrect), 4);
    assert_eq!(count(&sounds, SoundCue::DropIncorrect), 0);
}

#[test]
fn placement_events_after_completion_are_no_ops() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (hooks, recorder) = recording_hooks();
    let mut session = session(dir.path(), 42, hooks);

    for id in 0..4 {
        drag_onto_target(&mut session, id);
    }
    assert_eq!(recorder.wins.get(), 1);

    // Further input on placed pieces goes nowhere.
    assert!(!session.begin_drag(0));
    session.drag_delta(0, 50.0, 50.0);
    session.end_drag(0);
    assert_eq!(recorder.wins.get(), 1);
    assert_eq!(count(&recorder.sounds.borrow(), SoundCue::Win), 1);
}

#[test]
fn progress_round_trips_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut first = session(dir.path(), 7, SessionHooks::empty());
        drag_onto_target(&mut first, 0);
        drag_onto_target(&mut first, 2);
    }

    // Different scatter seed: the restore decides the layout, not the seed.
    let second = session(dir.path(), 1234, SessionHooks::empty());
    let reference = {
        let mut board = Board::new(&TARGETS, area(), 7);
        for id in [0usize, 2] {
            let target = board.piece(id).unwrap().target();
            let piece = board.piece_mut(id).unwrap();
            piece.begin_drag();
            let (cx, cy) = piece.position();
            piece.apply_drag_delta(target.0 - cx, target.1 - cy);
            piece.end_drag();
        }
        board
    };

    for (restored, expected) in second.board().pieces().iter().zip(reference.pieces()) {
        assert_eq!(restored.position(), expected.position());
        assert_eq!(restored.is_placed(), expected.is_placed());
    }
    assert!(!second.is_game_over());
}

#[test]
fn completed_puzzle_does_not_reload_solved() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut finished = session(dir.path(), 9, SessionHooks::empty());
        for id in 0..4 {
            drag_onto_target(&mut finished, id);
        }
        assert!(finished.is_game_over());
    }

    let fresh = session(dir.path(), 9, SessionHooks::empty());
    let scattered = Board::new(&TARGETS, area(), 9);
    for (piece, expected) in fresh.board().pieces().iter().zip(scattered.pieces()) {
        assert!(!piece.is_placed());
        assert_eq!(piece.position(), expected.position());
    }
}

#[test]
fn drag_cue_plays_once_per_drag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (hooks, recorder) = recording_hooks();
    let mut session = session(dir.path(), 3, hooks);

    assert!(session.begin_drag(0));
    session.drag_delta(0, 1.0, 0.0);
    session.drag_delta(0, 1.0, 0.0);
    session.drag_delta(0, 0.0, 1.0);
    session.end_drag(0);
    assert_eq!(count(&recorder.sounds.borrow(), SoundCue::Drag), 1);

    // The loop latch clears with the drag; the next drag cues again.
    assert!(session.begin_drag(0));
    session.drag_delta(0, 1.0, 0.0);
    session.end_drag(0);
    assert_eq!(count(&recorder.sounds.borrow(), SoundCue::Drag), 2);
}

#[test]
fn missed_drop_cues_and_keeps_piece_draggable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (hooks, recorder) = recording_hooks();
    let mut session = session(dir.path(), 5, hooks);

    let piece = session.board().piece(0).unwrap();
    let (tx, ty) = piece.target();
    let (cx, cy) = piece.position();
    assert!(session.begin_drag(0));
    // Stop 100 units short of the target.
    session.drag_delta(0, tx - cx + 100.0, ty - cy);
    session.end_drag(0);

    assert_eq!(count(&recorder.sounds.borrow(), SoundCue::DropIncorrect), 1);
    assert!(!session.board().piece(0).unwrap().is_placed());
    assert!(session.board().piece(0).unwrap().shake_active());

    // Shake settles back to the drop position.
    for _ in 0..30 {
        session.tick(1.0 / 60.0);
    }
    assert!(!session.board().piece(0).unwrap().shake_active());
    assert_eq!(session.board().piece(0).unwrap().position(), (tx + 100.0, ty));
}

#[test]
fn malformed_save_file_leaves_session_playable() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(hamekomi::SAVE_FILE_NAME), "not json").expect("write");

    let (hooks, recorder) = recording_hooks();
    let mut session = session(dir.path(), 21, hooks);
    assert!(session.board().pieces().iter().all(|piece| !piece.is_placed()));

    for id in 0..4 {
        drag_onto_target(&mut session, id);
    }
    assert!(session.is_game_over());
    assert_eq!(recorder.wins.get(), 1);
}

#[test]
fn undersized_save_file_restores_overlap_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut short = PuzzleSession::with_null_haptics(
            &TARGETS[..2],
            area(),
            7,
            SaveStore::new(dir.path()),
            SessionHooks::empty(),
        );
        drag_onto_target(&mut short, 0);
    }

    let full = session(dir.path(), 7, SessionHooks::empty());
    assert!(full.board().piece(0).unwrap().is_placed());
    assert!(!full.board().piece(1).unwrap().is_placed());
    // Indices beyond the snapshot stay at their scattered positions.
    let scattered = Board::new(&TARGETS, area(), 7);
    assert_eq!(
        full.board().piece(3).unwrap().position(),
        scattered.piece(3).unwrap().position()
    );
}

#[test]
fn write_failure_keeps_session_playable_in_memory() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Point the store at a directory that does not exist; every write fails.
    let missing = dir.path().join("no").join("such").join("dir");
    let (hooks, recorder) = recording_hooks();
    let mut session = PuzzleSession::with_null_haptics(
        &TARGETS,
        area(),
        13,
        SaveStore::new(&missing),
        hooks,
    );

    for id in 0..3 {
        drag_onto_target(&mut session, id);
        assert!(session.board().piece(id).unwrap().is_placed());
        assert!(!SaveStore::new(&missing).exists());
    }
    assert!(!session.is_game_over());

    drag_onto_target(&mut session, 3);
    assert!(session.is_game_over());
    assert_eq!(recorder.wins.get(), 1);
    assert_eq!(count(&recorder.sounds.borrow(), SoundCue::Win), 1);
}

struct FailingHaptics;

impl HapticSink for FailingHaptics {
    fn pulse(&self, _pulse: HapticPulse) -> Result<(), HapticError> {
        Err(HapticError("no vibration motor".into()))
    }
}

#[test]
fn haptic_failure_never_reaches_gameplay() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (hooks, recorder) = recording_hooks();
    let mut session = PuzzleSession::new(
        &TARGETS,
        area(),
        11,
        SaveStore::new(dir.path()),
        Box::new(FailingHaptics),
        hooks,
    );

    for id in 0..4 {
        drag_onto_target(&mut session, id);
    }
    assert!(session.is_game_over());
    assert_eq!(recorder.wins.get(), 1);
}

#[test]
fn reload_request_reaches_the_host() {
    let dir = tempfile::tempdir().expect("tempdir");
    let reloads = Rc::new(Cell::new(0u32));
    let hooks = SessionHooks {
        on_sound: Rc::new(|_| {}),
        on_win: Rc::new(|| {}),
        on_reload: {
            let reloads = reloads.clone();
            Rc::new(move || reloads.set(reloads.get() + 1))
        },
    };
    let session = session(dir.path(), 2, hooks);
    session.reload();
    assert_eq!(reloads.get(), 1);
}
