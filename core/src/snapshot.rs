use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Stored position. The plane is 2D; `z` is carried for compatibility with
/// the persisted format and written as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveVec3 {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// Single-slot persisted snapshot. Both arrays are index-aligned with piece
/// creation order and have the same length as the piece list at save time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(rename = "PlacedPositions")]
    pub placed_positions: Vec<SaveVec3>,
    #[serde(rename = "PiecesPlacedCorrectly")]
    pub pieces_placed_correctly: Vec<bool>,
}

impl SaveData {
    pub fn placed_count(&self) -> usize {
        self.pieces_placed_correctly
            .iter()
            .filter(|placed| **placed)
            .count()
    }
}

pub fn build_save_data(board: &Board) -> SaveData {
    let mut data = SaveData {
        placed_positions: Vec::with_capacity(board.len()),
        pieces_placed_correctly: Vec::with_capacity(board.len()),
    };
    for piece in board.pieces() {
        let (x, y) = piece.position();
        data.placed_positions.push(SaveVec3 { x, y, z: 0.0 });
        data.pieces_placed_correctly.push(piece.is_placed());
    }
    data
}

/// Restores a snapshot into a live board. Only the overlapping index range is
/// applied when counts mismatch; the rest keeps its scattered state. Placed
/// flags go through the restore path, never the interactive drop path, so no
/// placement events or saves cascade out of a load.
pub fn apply_save_data(board: &mut Board, data: &SaveData) {
    let overlap = board
        .len()
        .min(data.placed_positions.len());
    for id in 0..overlap {
        let Some(piece) = board.piece_mut(id) else {
            break;
        };
        let stored = data.placed_positions[id];
        piece.set_position(stored.x, stored.y);
        if data.pieces_placed_correctly.get(id).copied().unwrap_or(false) {
            piece.restore_placed();
        }
    }
}
