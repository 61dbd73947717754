use crate::game::{scatter_positions, ScatterArea, SCATTER_MARGIN};
use crate::piece::Piece;

/// Result of re-evaluating completion after a placement event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionChange {
    Unchanged,
    JustSolved,
    AlreadySolved,
}

/// Owns the piece collection and the monotonic solved flag. Targets are
/// index-aligned with the layout anchors handed in at construction; start
/// positions are sampled once inside the scatter area.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: Vec<Piece>,
    solved: bool,
}

impl Board {
    pub fn new(targets: &[(f32, f32)], area: ScatterArea, seed: u32) -> Self {
        let starts = scatter_positions(seed, targets.len(), area, SCATTER_MARGIN);
        let pieces = targets
            .iter()
            .zip(starts)
            .map(|(target, start)| Piece::new(*target, start))
            .collect();
        Self {
            pieces,
            solved: false,
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: usize) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_mut(&mut self, id: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(id)
    }

    /// Re-evaluates completion after a placement event. O(n) scan over the
    /// pieces; fires `JustSolved` exactly once, on the first transition to
    /// all-placed. Re-invocation after completion is a no-op.
    pub fn note_piece_placed(&mut self) -> CompletionChange {
        if self.solved {
            return CompletionChange::AlreadySolved;
        }
        if self.pieces.is_empty() || !self.pieces.iter().all(Piece::is_placed) {
            return CompletionChange::Unchanged;
        }
        self.solved = true;
        CompletionChange::JustSolved
    }

    /// Advances per-piece timed state (shakes). Returns `true` when any
    /// transform changed this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut changed = false;
        for piece in &mut self.pieces {
            if piece.tick(dt) {
                changed = true;
            }
        }
        changed
    }
}
