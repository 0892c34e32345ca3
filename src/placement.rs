//! Backtracking layout search used by the randomized AI players.
//!
//! Ships are placed from the highest roster id down to id 0. Each ship goes at
//! the first row-major cell where it fits, horizontal before vertical. When the
//! rest of the fleet cannot follow, the ship is taken back off the board and
//! the search reports failure; the caller re-randomizes with [`Board::block`]
//! and tries again.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Direction};

/// Number of randomized attempts before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 50;

/// Place ships `0..count` on `board`, backtracking on failure. Returns `true`
/// when the whole group is on the board.
pub fn fit_fleet(board: &mut Board, count: usize) -> bool {
    let Some(id) = count.checked_sub(1) else {
        return true;
    };
    let points: Vec<_> = board.config().points().collect();
    for p in points {
        for dir in [Direction::Horizontal, Direction::Vertical] {
            if board.place_ship(p, id, dir).is_ok() {
                if fit_fleet(board, id) {
                    return true;
                }
                let _ = board.unplace_ship(p, id, dir);
                return false;
            }
        }
    }
    false
}

/// Up to [`PLACEMENT_ATTEMPTS`] rounds of: block half the board, search for a
/// layout, unblock on success. The board is cleared between failed rounds.
pub fn place_randomized<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    let count = board.config().n_ships();
    for attempt in 0..PLACEMENT_ATTEMPTS {
        board.block(rng);
        if fit_fleet(board, count) {
            board.unblock();
            debug!("fleet placed after {} attempt(s)", attempt + 1);
            return Ok(());
        }
        board.clear();
    }
    debug!("no layout found in {} blocked attempts", PLACEMENT_ATTEMPTS);
    Err(BoardError::UnableToPlaceShips)
}
