use std::rc::Rc;

use hamekomi_core::game::ScatterArea;
use hamekomi_core::{Board, CompletionChange, DropOutcome};

use crate::audio::{AudioDispatcher, AudioSink, SoundCue};
use crate::haptics::{HapticPulse, HapticSink, NullHaptics};
use crate::store::SaveStore;

/// Host callbacks owned by the session. Subscription lifecycle is tied to
/// session construction; there are no process-wide event hooks.
#[derive(Clone)]
pub struct SessionHooks {
    pub on_sound: AudioSink,
    pub on_win: Rc<dyn Fn()>,
    pub on_reload: Rc<dyn Fn()>,
}

impl SessionHooks {
    pub fn empty() -> Self {
        Self {
            on_sound: Rc::new(|_| {}),
            on_win: Rc::new(|| {}),
            on_reload: Rc::new(|| {}),
        }
    }
}

/// Composition root for one puzzle session. Owns the board, the save store,
/// the audio dispatcher, and the haptic sink; the host feeds it drag input
/// and a per-frame tick, and renders the transforms it exposes.
pub struct PuzzleSession {
    board: Board,
    store: SaveStore,
    audio: AudioDispatcher,
    haptics: Box<dyn HapticSink>,
    hooks: SessionHooks,
}

impl PuzzleSession {
    /// Builds the board (index-aligned targets, scattered starts), then
    /// restores a prior session from the store if one exists.
    pub fn new(
        targets: &[(f32, f32)],
        area: ScatterArea,
        seed: u32,
        store: SaveStore,
        haptics: Box<dyn HapticSink>,
        hooks: SessionHooks,
    ) -> Self {
        let mut board = Board::new(targets, area, seed);
        store.initialize();
        store.load(&mut board);
        let audio = AudioDispatcher::new(hooks.on_sound.clone());
        Self {
            board,
            store,
            audio,
            haptics,
            hooks,
        }
    }

    pub fn with_null_haptics(
        targets: &[(f32, f32)],
        area: ScatterArea,
        seed: u32,
        store: SaveStore,
        hooks: SessionHooks,
    ) -> Self {
        Self::new(targets, area, seed, store, Box::new(NullHaptics), hooks)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_solved()
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    pub fn begin_drag(&mut self, id: usize) -> bool {
        self.board
            .piece_mut(id)
            .map(|piece| piece.begin_drag())
            .unwrap_or(false)
    }

    pub fn drag_delta(&mut self, id: usize, dx: f32, dy: f32) {
        let Some(piece) = self.board.piece_mut(id) else {
            return;
        };
        if piece.apply_drag_delta(dx, dy) {
            self.audio.play(SoundCue::Drag);
        }
    }

    pub fn end_drag(&mut self, id: usize) {
        self.audio.end_drag_loop();
        let Some(piece) = self.board.piece_mut(id) else {
            return;
        };
        match piece.end_drag() {
            Some(DropOutcome::Snapped) => {
                self.audio.play(SoundCue::DropCorrect);
                self.pulse(HapticPulse::Short);
                self.handle_piece_placed();
            }
            Some(DropOutcome::Missed) => {
                self.audio.play(SoundCue::DropIncorrect);
                self.pulse(HapticPulse::Long);
            }
            None => {}
        }
    }

    /// Placement event: completion first, then persistence. On the solving
    /// placement no save is written; the slot is deleted instead.
    fn handle_piece_placed(&mut self) {
        match self.board.note_piece_placed() {
            CompletionChange::JustSolved => {
                self.audio.play(SoundCue::Win);
                (self.hooks.on_win)();
                self.store.delete();
            }
            CompletionChange::Unchanged => {
                self.store.save(&self.board);
            }
            CompletionChange::AlreadySolved => {}
        }
    }

    /// Advances per-piece timed state. Returns `true` when any transform
    /// changed and the host should redraw.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.board.tick(dt)
    }

    /// Asks the host to restart the session from scratch.
    pub fn reload(&self) {
        (self.hooks.on_reload)();
    }

    fn pulse(&self, pulse: HapticPulse) {
        if let Err(err) = self.haptics.pulse(pulse) {
            log::debug!("{err}");
        }
    }
}
