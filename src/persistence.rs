//! Minimal state needed to resume a piece's rotation.
//!
//! Binary record (little endian, 7 bytes):
//! - u32: piece type id
//! - u8: rotation index (0..=3)
//! - u8: previous rotation index (0..=3)
//! - i8: direction of the last turn (+1 or -1)

use std::io::{self, Read, Write};

use crate::codec::PieceTypeId;
use crate::piece::{Direction, Piece, RotationState};
use crate::shape::ROTATION_COUNT;

/// Size of one encoded record in bytes.
pub const RECORD_LEN: usize = 7;

/// What a piece needs to be rebuilt by [`crate::RotationEngine::resume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeState {
    pub type_id: PieceTypeId,
    pub rotation: RotationState,
}

impl From<&Piece> for ResumeState {
    fn from(piece: &Piece) -> Self {
        Self {
            type_id: piece.type_id(),
            rotation: piece.rotation(),
        }
    }
}

/// Writes the resume record of a piece.
pub fn write_state(piece: &Piece, writer: &mut impl Write) -> io::Result<()> {
    let state = ResumeState::from(piece);
    writer.write_all(&state.type_id.0.to_le_bytes())?;
    writer.write_all(&[
        state.rotation.index,
        state.rotation.previous,
        state.rotation.direction.sign() as u8,
    ])?;
    Ok(())
}

/// Reads one resume record, rejecting out-of-range rotation fields.
///
/// The type id is not decoded here; the engine does that when resuming.
pub fn read_state(reader: &mut impl Read) -> io::Result<ResumeState> {
    let mut u32_buffer = [0u8; 4];
    reader.read_exact(&mut u32_buffer)?;
    let type_id = PieceTypeId(u32::from_le_bytes(u32_buffer));

    let mut rotation_buffer = [0u8; 3];
    reader.read_exact(&mut rotation_buffer)?;
    let [index, previous, direction] = rotation_buffer;

    if index >= ROTATION_COUNT || previous >= ROTATION_COUNT {
        return Err(invalid(format!("rotation index out of range: {index}/{previous}")));
    }
    let direction = Direction::from_sign(direction as i8)
        .ok_or_else(|| invalid(format!("bad turn direction {}", direction as i8)))?;

    Ok(ResumeState {
        type_id,
        rotation: RotationState {
            index,
            direction,
            previous,
        },
    })
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::color::ColorCombination;
    use crate::shape::{Category, PieceType, Tetromino};

    fn gun_piece(rotation: RotationState) -> Piece {
        let kind = PieceType::plain(Category::Tetromino(Tetromino::Gun), ColorCombination::ORANGE);
        Piece::with_rotation(kind, rotation)
    }

    #[test]
    fn test_record_layout() {
        let rotation = RotationState {
            index: 2,
            direction: Direction::CounterClockwise,
            previous: 3,
        };
        let piece = gun_piece(rotation);
        let mut bytes = Vec::new();
        write_state(&piece, &mut bytes).unwrap();

        assert_eq!(bytes.len(), RECORD_LEN);
        assert_eq!(&bytes[..4], &encode(&piece.kind()).0.to_le_bytes());
        assert_eq!(&bytes[4..], &[2, 3, 0xFF]);

        let state = read_state(&mut bytes.as_slice()).unwrap();
        assert_eq!(state, ResumeState::from(&piece));
    }

    #[test]
    fn test_rejects_bad_fields() {
        let mut bytes = Vec::new();
        write_state(&gun_piece(RotationState::at(1)), &mut bytes).unwrap();

        let mut bad_index = bytes.clone();
        bad_index[4] = 4;
        let err = read_state(&mut bad_index.as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let mut bad_direction = bytes.clone();
        bad_direction[6] = 0;
        assert!(read_state(&mut bad_direction.as_slice()).is_err());
    }

    #[test]
    fn test_truncated_record() {
        let err = read_state(&mut [1u8, 0, 0, 2, 0].as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
