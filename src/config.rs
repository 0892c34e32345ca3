//! Board dimensions and ship roster for a match.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::Point;
use crate::ship::ShipDef;

pub const MAX_ROWS: usize = 10;
pub const MAX_COLS: usize = 10;

/// Marker of an untouched empty cell.
pub const EMPTY_SYMBOL: char = '.';
/// Marker of a shot that landed on water.
pub const MISS_SYMBOL: char = 'o';
/// Marker of a shot that damaged a ship.
pub const HIT_SYMBOL: char = 'X';
/// Marker of a cell reserved during placement search.
pub const BLOCKED_SYMBOL: char = '#';

const RESERVED_SYMBOLS: [char; 4] = [EMPTY_SYMBOL, MISS_SYMBOL, HIT_SYMBOL, BLOCKED_SYMBOL];

/// Reasons a board size or roster entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("number of rows must be >= 1 and <= {}, got {0}", MAX_ROWS)]
    BadRows(usize),
    #[error("number of columns must be >= 1 and <= {}, got {0}", MAX_COLS)]
    BadCols(usize),
    #[error("bad ship length {0}; it must be >= 1")]
    LengthTooShort(usize),
    #[error("bad ship length {0}; it won't fit on the board")]
    LengthTooLong(usize),
    #[error("unprintable character {0:?} must not be used as a ship symbol")]
    UnprintableSymbol(char),
    #[error("character {0:?} must not be used as a ship symbol")]
    ReservedSymbol(char),
    #[error("ship symbol {0:?} must not be used for more than one ship")]
    DuplicateSymbol(char),
    #[error("board is too small to fit all ships")]
    BoardTooSmall,
}

/// Board dimensions plus the validated roster. Shared read-only by both
/// boards and every player of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    ships: Vec<ShipDef>,
}

impl GameConfig {
    /// Create an empty roster on a `rows`×`cols` board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_ROWS).contains(&rows) {
            return Err(ConfigError::BadRows(rows));
        }
        if !(1..=MAX_COLS).contains(&cols) {
            return Err(ConfigError::BadCols(cols));
        }
        Ok(Self {
            rows,
            cols,
            ships: Vec::new(),
        })
    }

    /// The classic 10×10 game with five ships.
    pub fn standard() -> Self {
        let ships = vec![
            ShipDef::new(5, 'A', "aircraft carrier"),
            ShipDef::new(4, 'B', "battleship"),
            ShipDef::new(3, 'D', "destroyer"),
            ShipDef::new(3, 'S', "submarine"),
            ShipDef::new(2, 'P', "patrol boat"),
        ];
        Self {
            rows: MAX_ROWS,
            cols: MAX_COLS,
            ships,
        }
    }

    /// Append a ship to the roster. On error the roster is left unchanged.
    pub fn add_ship(
        &mut self,
        length: usize,
        symbol: char,
        name: impl Into<String>,
    ) -> Result<usize, ConfigError> {
        if length < 1 {
            return Err(ConfigError::LengthTooShort(length));
        }
        if length > self.rows.max(self.cols) {
            return Err(ConfigError::LengthTooLong(length));
        }
        if !symbol.is_ascii_graphic() {
            return Err(ConfigError::UnprintableSymbol(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol() == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        if self.total_ship_cells() + length > self.rows * self.cols {
            return Err(ConfigError::BoardTooSmall);
        }
        self.ships.push(ShipDef::new(length, symbol, name));
        Ok(self.ships.len() - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of ships in the roster.
    pub fn n_ships(&self) -> usize {
        self.ships.len()
    }

    pub fn ships(&self) -> &[ShipDef] {
        &self.ships
    }

    pub fn ship(&self, id: usize) -> Option<&ShipDef> {
        self.ships.get(id)
    }

    /// Length of ship `id`, or zero for an id outside the roster.
    pub fn ship_length(&self, id: usize) -> usize {
        self.ship(id).map_or(0, ShipDef::length)
    }

    pub fn ship_name(&self, id: usize) -> &str {
        self.ship(id).map_or("unknown ship", ShipDef::name)
    }

    /// Sum of all roster lengths.
    pub fn total_ship_cells(&self) -> usize {
        self.ships.iter().map(ShipDef::length).sum()
    }

    /// Whether `p` lies inside the board.
    pub fn is_valid(&self, p: Point) -> bool {
        p.r >= 0 && (p.r as usize) < self.rows && p.c >= 0 && (p.c as usize) < self.cols
    }

    /// Uniformly random point on the board.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.rows) as i32,
            rng.random_range(0..self.cols) as i32,
        )
    }

    /// Row-major index of a valid point.
    pub(crate) fn index(&self, p: Point) -> usize {
        p.r as usize * self.cols + p.c as usize
    }

    /// Every point of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Point::new(r as i32, c as i32)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
