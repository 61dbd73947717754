use std::cell::Cell;
use std::rc::Rc;

/// Discrete cue tags consumed by the host's audio player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Drag,
    DropIncorrect,
    DropCorrect,
    Win,
}

pub type AudioSink = Rc<dyn Fn(SoundCue)>;

/// Forwards cue tags to the host sink. `Drag` is a loop: while one is marked
/// active, further drag cues are suppressed until the drag ends. The one-shot
/// cues always forward.
pub struct AudioDispatcher {
    sink: AudioSink,
    drag_loop_active: Cell<bool>,
}

impl AudioDispatcher {
    pub fn new(sink: AudioSink) -> Self {
        Self {
            sink,
            drag_loop_active: Cell::new(false),
        }
    }

    pub fn muted() -> Self {
        Self::new(Rc::new(|_| {}))
    }

    pub fn play(&self, cue: SoundCue) {
        if cue == SoundCue::Drag {
            if self.drag_loop_active.get() {
                return;
            }
            self.drag_loop_active.set(true);
        }
        (self.sink)(cue);
    }

    /// Clears the drag-loop latch; called when a drag ends.
    pub fn end_drag_loop(&self) {
        self.drag_loop_active.set(false);
    }
}
