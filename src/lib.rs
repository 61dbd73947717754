pub mod audio;
pub mod haptics;
pub mod session;
pub mod store;

pub use audio::{AudioDispatcher, SoundCue};
pub use haptics::{HapticError, HapticPulse, HapticSink, NullHaptics};
pub use session::{PuzzleSession, SessionHooks};
pub use store::{SaveStore, StoreError, SAVE_FILE_NAME};
