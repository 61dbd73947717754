pub mod board;
pub mod game;
pub mod piece;
pub mod snapshot;

pub use board::{Board, CompletionChange};
pub use game::{ScatterArea, SCATTER_MARGIN, SNAP_DISTANCE};
pub use piece::{DropOutcome, Piece, PiecePhase};
pub use snapshot::{apply_save_data, build_save_data, SaveData, SaveVec3};
