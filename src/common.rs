//! Common types for Broadside: grid coordinates, shot results and board errors.

use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell coordinate on a grid. Signed so that neighbours of edge cells can be
/// expressed and then rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub r: i32,
    pub c: i32,
}

impl Point {
    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    /// The point `steps` cells away in `dir`.
    pub fn offset(self, dir: Heading, steps: i32) -> Self {
        let (dr, dc) = dir.delta();
        Point::new(self.r + dr * steps, self.c + dc * steps)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

/// Orientation of a ship on the board. The origin is the leftmost cell for
/// horizontal ships and the topmost for vertical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The `i`-th cell of a ship starting at `origin`.
    pub fn cell(self, origin: Point, i: i32) -> Point {
        match self {
            Direction::Horizontal => Point::new(origin.r, origin.c + i),
            Direction::Vertical => Point::new(origin.r + i, origin.c),
        }
    }
}

/// One of the four cardinal headings used when walking away from a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Left, Heading::Right, Heading::Up, Heading::Down];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
        }
    }
}

/// Effect of a valid attack on the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Shot landed on water.
    Miss,
    /// Shot damaged a ship that still floats.
    Hit,
    /// Shot sank the ship with this roster id.
    Destroyed(usize),
}

impl AttackOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// What an attacker learns about its own shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    /// The shot was rejected by the board (out of bounds or already attacked)
    /// and the turn was wasted.
    Invalid,
    Miss,
    Hit,
    Destroyed(usize),
}

impl ShotResult {
    pub fn is_valid(self) -> bool {
        !matches!(self, ShotResult::Invalid)
    }

    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Destroyed(_))
    }

    /// Id of the ship this shot sank, if any.
    pub fn destroyed(self) -> Option<usize> {
        match self {
            ShotResult::Destroyed(id) => Some(id),
            _ => None,
        }
    }
}

impl From<Result<AttackOutcome, BoardError>> for ShotResult {
    fn from(res: Result<AttackOutcome, BoardError>) -> Self {
        match res {
            Ok(AttackOutcome::Miss) => ShotResult::Miss,
            Ok(AttackOutcome::Hit) => ShotResult::Hit,
            Ok(AttackOutcome::Destroyed(id)) => ShotResult::Destroyed(id),
            Err(_) => ShotResult::Invalid,
        }
    }
}

/// Errors returned by Board operations. A board never mutates when it
/// returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Ship id is not an index into the roster.
    #[error("ship id {0} is not in the roster")]
    InvalidShipId(usize),
    /// Attempted to place a ship that is already placed.
    #[error("ship {0} is already placed on the board")]
    ShipAlreadyPlaced(usize),
    /// Some target cell lies outside the grid.
    #[error("point {0} is out of bounds")]
    OutOfBounds(Point),
    /// Some target cell is not empty.
    #[error("cell {0} is not empty")]
    CellOccupied(Point),
    /// The ship does not sit at the given origin and direction.
    #[error("ship {0} is not placed there")]
    ShipNotPlacedHere(usize),
    /// Guess was already made at this position.
    #[error("cell {0} was already attacked")]
    AlreadyAttacked(Point),
    /// A player could not produce a layout for its whole roster.
    #[error("unable to place all ships")]
    UnableToPlaceShips,
}
