//! Abstract grid board shared by every chess-family variant.
//!
//! `GameBoard` owns the complete game state: its fixed dimensions, the identity
//! registry (name and owner for every id ever issued), the occupancy grid
//! (square -> id) and the position index (id -> square). Every mutation keeps the
//! occupancy grid and the position index exact inverses of each other.
//!
//! Identity records live in a dense vector indexed by `id - 1` because they are
//! defined for the full issued range. Positions live in a sparse map because only
//! placed pieces have one. Captured pieces keep their identity record forever.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::board::board_errors::{BoardError, BoardResult};
use crate::board::board_point::BoardPoint;
use crate::board::piece_id::PieceId;

/// Display label given to pieces created without a name.
pub const DEFAULT_PIECE_NAME: &str = "?";

#[derive(Debug, Clone)]
struct PieceIdentity<O> {
    name: String,
    owner: O,
}

/// A `width x height` board whose pieces are owned by tokens of type `O`.
#[derive(Debug, Clone)]
pub struct GameBoard<O> {
    width: u16,
    height: u16,
    identities: Vec<PieceIdentity<O>>,
    // Row-major: index = y * width + x.
    occupancy: Vec<PieceId>,
    positions: HashMap<PieceId, BoardPoint>,
}

impl<O> GameBoard<O> {
    /// Create an empty board. Both dimensions must be non-zero.
    pub fn new(width: u16, height: u16) -> BoardResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self::with_valid_dimensions(width, height))
    }

    pub(crate) fn with_valid_dimensions(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            identities: Vec::new(),
            occupancy: vec![PieceId::NONE; width as usize * height as usize],
            positions: HashMap::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// True when `point` addresses a square of this board.
    #[inline]
    pub fn contains(&self, point: BoardPoint) -> bool {
        (0..self.width as i32).contains(&point.x) && (0..self.height as i32).contains(&point.y)
    }

    #[inline]
    fn square_index(&self, point: BoardPoint) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width as usize + point.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn point_at_index(&self, index: usize) -> BoardPoint {
        let width = self.width as usize;
        BoardPoint::new((index % width) as i32, (index / width) as i32)
    }

    fn identity(&self, id: PieceId) -> BoardResult<&PieceIdentity<O>> {
        if id.is_none() {
            return Err(BoardError::InvalidPieceId(id));
        }
        self.identities
            .get(id.get() as usize - 1)
            .ok_or(BoardError::InvalidPieceId(id))
    }

    fn identity_mut(&mut self, id: PieceId) -> BoardResult<&mut PieceIdentity<O>> {
        if id.is_none() {
            return Err(BoardError::InvalidPieceId(id));
        }
        self.identities
            .get_mut(id.get() as usize - 1)
            .ok_or(BoardError::InvalidPieceId(id))
    }

    /// Number of ids issued so far, captured pieces included.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.identities.len()
    }

    /// Register a new piece and optionally place it.
    ///
    /// `name` defaults to [`DEFAULT_PIECE_NAME`]. A coordinate must be on the
    /// board and the square must be empty; placing a new piece never evicts
    /// another. On failure no id is issued.
    pub fn create_piece(
        &mut self,
        owner: O,
        name: Option<&str>,
        coordinate: Option<BoardPoint>,
    ) -> BoardResult<PieceId> {
        let square = match coordinate {
            Some(point) => {
                let index = self
                    .square_index(point)
                    .ok_or(BoardError::OutOfBounds(point))?;
                let occupant = self.occupancy[index];
                if occupant.is_some() {
                    return Err(BoardError::SquareOccupied { point, occupant });
                }
                Some((index, point))
            }
            None => None,
        };

        self.identities.push(PieceIdentity {
            name: name.unwrap_or(DEFAULT_PIECE_NAME).to_owned(),
            owner,
        });
        let id = PieceId::new(self.identities.len() as u32);

        if let Some((index, point)) = square {
            self.occupancy[index] = id;
            self.positions.insert(id, point);
        }
        debug!(piece = %id, placed = square.is_some(), "created piece");
        Ok(id)
    }

    pub fn rename(&mut self, id: PieceId, new_name: &str) -> BoardResult<()> {
        self.identity_mut(id)?.name = new_name.to_owned();
        Ok(())
    }

    pub fn name_of(&self, id: PieceId) -> BoardResult<&str> {
        Ok(self.identity(id)?.name.as_str())
    }

    /// Occupant of `point`, or `PieceId::NONE` when the square is empty or off the board.
    pub fn piece_at(&self, point: BoardPoint) -> PieceId {
        self.square_index(point)
            .map_or(PieceId::NONE, |index| self.occupancy[index])
    }

    /// Like [`GameBoard::piece_at`] but reports off-board points as `OutOfBounds`
    /// instead of treating them as empty.
    pub fn piece_at_strict(&self, point: BoardPoint) -> BoardResult<PieceId> {
        self.square_index(point)
            .map(|index| self.occupancy[index])
            .ok_or(BoardError::OutOfBounds(point))
    }

    /// Current square of a piece. Fails for invalid ids and for pieces off the board.
    pub fn locate(&self, id: PieceId) -> BoardResult<BoardPoint> {
        self.identity(id)?;
        self.positions
            .get(&id)
            .copied()
            .ok_or(BoardError::NotPlaced(id))
    }

    #[inline]
    pub fn is_placed(&self, id: PieceId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Move a piece to `point`, capturing whatever stands there.
    ///
    /// The piece's previous square (if any) is cleared first, then a different
    /// occupant of the destination loses its position but keeps its identity.
    /// Owners are not compared here. Returns the captured id, if any.
    pub fn move_piece(&mut self, id: PieceId, point: BoardPoint) -> BoardResult<Option<PieceId>> {
        self.identity(id)?;
        let destination = self
            .square_index(point)
            .ok_or(BoardError::OutOfBounds(point))?;

        if let Some(past) = self.positions.get(&id).copied() {
            if let Some(index) = self.square_index(past) {
                self.occupancy[index] = PieceId::NONE;
            }
        }

        let occupant = self.occupancy[destination];
        let captured = if occupant.is_some() && occupant != id {
            self.positions.remove(&occupant);
            debug!(piece = %id, captured = %occupant, to = %point, "captured piece");
            Some(occupant)
        } else {
            None
        };

        self.occupancy[destination] = id;
        self.positions.insert(id, point);
        trace!(piece = %id, to = %point, "moved piece");
        Ok(captured)
    }

    /// Owner of a piece. `PieceId::NONE` (an empty square) has no owner.
    pub fn owner_of(&self, id: PieceId) -> BoardResult<Option<&O>> {
        if id.is_none() {
            return Ok(None);
        }
        Ok(Some(&self.identity(id)?.owner))
    }

    /// Placed pieces in row-major square order.
    pub fn placed_pieces(&self) -> impl Iterator<Item = (PieceId, BoardPoint)> + '_ {
        self.occupancy
            .iter()
            .enumerate()
            .filter(|(_, id)| id.is_some())
            .map(|(index, id)| (*id, self.point_at_index(index)))
    }
}

impl<O: PartialEq> GameBoard<O> {
    /// Every id ever issued to `owner`, ascending, whether placed or captured.
    pub fn pieces_owned_by(&self, owner: &O) -> Vec<PieceId> {
        self.identities
            .iter()
            .enumerate()
            .filter(|(_, record)| record.owner == *owner)
            .map(|(index, _)| PieceId::new(index as u32 + 1))
            .collect()
    }
}
