use crate::game::{
    distance, rand_range, splitmix32, SHAKE_DURATION, SHAKE_MAGNITUDE, SNAP_DISTANCE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PiecePhase {
    Idle,
    Dragging,
    Placed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Snapped,
    Missed,
}

/// Timed perturbation played after an incorrect drop. Holds the pre-shake
/// origin and the elapsed time; polled once per tick until the duration is
/// exhausted, then the origin is restored. A new drag on the same piece
/// supersedes it.
#[derive(Clone, Copy, Debug)]
pub struct Shake {
    origin: (f32, f32),
    elapsed: f32,
    seed: u32,
    frame: u32,
}

impl Shake {
    fn new(origin: (f32, f32), seed: u32) -> Self {
        Self {
            origin,
            elapsed: 0.0,
            seed,
            frame: 0,
        }
    }

    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Advances by `dt` seconds. Returns the position for this tick, or
    /// `None` once the shake has run its full duration (the caller restores
    /// the origin and drops the shake).
    fn tick(&mut self, dt: f32) -> Option<(f32, f32)> {
        self.elapsed += dt.max(0.0);
        if self.elapsed >= SHAKE_DURATION {
            return None;
        }
        let salt = 0x5AAE_u32 + (self.frame << 1);
        self.frame = self.frame.wrapping_add(1);
        let dx = rand_range(self.seed, salt, -SHAKE_MAGNITUDE, SHAKE_MAGNITUDE);
        let dy = rand_range(self.seed, salt + 1, -SHAKE_MAGNITUDE, SHAKE_MAGNITUDE);
        Some((self.origin.0 + dx, self.origin.1 + dy))
    }
}

/// One puzzle piece: current position, fixed target, and placement state.
/// Once placed the position equals the target exactly and all drag input is
/// ignored.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    current: (f32, f32),
    target: (f32, f32),
    phase: PiecePhase,
    outline: bool,
    shake: Option<Shake>,
}

impl Piece {
    pub fn new(target: (f32, f32), start: (f32, f32)) -> Self {
        Self {
            current: start,
            target,
            phase: PiecePhase::Idle,
            outline: true,
            shake: None,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.current
    }

    pub fn target(&self) -> (f32, f32) {
        self.target
    }

    pub fn phase(&self) -> PiecePhase {
        self.phase
    }

    pub fn is_placed(&self) -> bool {
        self.phase == PiecePhase::Placed
    }

    pub fn has_outline(&self) -> bool {
        self.outline
    }

    pub fn shake_active(&self) -> bool {
        self.shake.is_some()
    }

    /// Starts a drag. Returns `false` when the piece is placed and no longer
    /// interactive. An in-flight shake is cancelled and its origin restored
    /// before the drag takes over.
    pub fn begin_drag(&mut self) -> bool {
        if self.phase == PiecePhase::Placed {
            return false;
        }
        if let Some(shake) = self.shake.take() {
            self.current = shake.origin();
        }
        self.phase = PiecePhase::Dragging;
        true
    }

    /// Moves the piece by an incremental delta. Returns `true` when the piece
    /// actually moved (the caller then requests a drag cue).
    pub fn apply_drag_delta(&mut self, dx: f32, dy: f32) -> bool {
        if self.phase != PiecePhase::Dragging {
            return false;
        }
        self.current.0 += dx;
        self.current.1 += dy;
        true
    }

    /// Ends the drag and validates placement. Strict threshold: a drop at
    /// exactly the snap distance does not snap.
    pub fn end_drag(&mut self) -> Option<DropOutcome> {
        if self.phase != PiecePhase::Dragging {
            return None;
        }
        if distance(self.current, self.target) < SNAP_DISTANCE {
            self.current = self.target;
            self.phase = PiecePhase::Placed;
            self.outline = false;
            self.shake = None;
            return Some(DropOutcome::Snapped);
        }
        self.phase = PiecePhase::Idle;
        let seed = splitmix32(self.current.0.to_bits() ^ self.current.1.to_bits().rotate_left(16));
        self.shake = Some(Shake::new(self.current, seed));
        Some(DropOutcome::Missed)
    }

    /// Restore path used by the save store. Marks the piece placed and pins
    /// it to the target without emitting drop events, so a load never
    /// cascades into saves or placement handling.
    pub fn restore_placed(&mut self) {
        self.current = self.target;
        self.phase = PiecePhase::Placed;
        self.outline = false;
        self.shake = None;
    }

    /// Positional restore for unplaced pieces; ignored once placed.
    pub fn set_position(&mut self, x: f32, y: f32) {
        if self.phase == PiecePhase::Placed {
            return;
        }
        self.current = (x, y);
    }

    /// Advances the shake, if any. Returns `true` when the visual transform
    /// changed this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(shake) = self.shake.as_mut() else {
            return false;
        };
        match shake.tick(dt) {
            Some(position) => {
                self.current = position;
            }
            None => {
                self.current = shake.origin();
                self.shake = None;
            }
        }
        true
    }
}
