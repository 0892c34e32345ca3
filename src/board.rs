//! One player's grid: ship placement, attack resolution and damage tracking.

use core::fmt;
use rand::Rng;

use crate::common::{AttackOutcome, BoardError, Direction, Point};
use crate::config::{GameConfig, BLOCKED_SYMBOL, EMPTY_SYMBOL, HIT_SYMBOL, MISS_SYMBOL};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Reserved by [`Board::block`] while searching for a layout.
    Blocked,
    /// Holds part of the ship with this symbol.
    Occupied(char),
    Miss,
    Hit,
}

impl Cell {
    /// Character used to draw this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Blocked => BLOCKED_SYMBOL,
            Cell::Occupied(sym) => sym,
            Cell::Miss => MISS_SYMBOL,
            Cell::Hit => HIT_SYMBOL,
        }
    }

    pub fn is_attacked(self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit)
    }
}

/// Main board state: cells, placed ships and damage history.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    cells: Vec<Cell>,
    placed: Vec<usize>,
    damage: Vec<char>,
}

impl Board {
    /// Create an empty board sized for `config`.
    pub fn new(config: &GameConfig) -> Self {
        Board {
            cells: vec![Cell::Empty; config.rows() * config.cols()],
            config: config.clone(),
            placed: Vec::new(),
            damage: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    /// State of the cell at `p`, or `None` when `p` is off the board.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.config
            .is_valid(p)
            .then(|| self.cells[self.config.index(p)])
    }

    /// Ids of currently placed ships, in placement order.
    pub fn placed_ships(&self) -> &[usize] {
        &self.placed
    }

    /// Symbols of every successful hit, in the order they landed.
    pub fn damage_events(&self) -> &[char] {
        &self.damage
    }

    /// Number of damage events recorded against ship `id`.
    pub fn damage_to(&self, id: usize) -> usize {
        self.config
            .ship(id)
            .map_or(0, |def| self.damage.iter().filter(|&&s| s == def.symbol()).count())
    }

    /// Reset every cell to empty and forget placements and damage.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.placed.clear();
        self.damage.clear();
    }

    /// Block about half of the board by sampling random empty cells until
    /// enough distinct ones are marked.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty = self.cells.iter().filter(|&&c| c == Cell::Empty).count();
        let target = (self.cells.len() / 2).min(empty);
        let mut blocked = 0;
        while blocked < target {
            let idx = self.config.index(self.config.random_point(rng));
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = Cell::Blocked;
                blocked += 1;
            }
        }
    }

    /// Turn every blocked cell back into an empty one.
    pub fn unblock(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Blocked) {
            *cell = Cell::Empty;
        }
    }

    /// Place ship `id` with its top or left cell at `origin`.
    pub fn place_ship(&mut self, origin: Point, id: usize, dir: Direction) -> Result<(), BoardError> {
        let def = self.config.ship(id).ok_or(BoardError::InvalidShipId(id))?;
        if self.placed.contains(&id) {
            return Err(BoardError::ShipAlreadyPlaced(id));
        }
        let (symbol, length) = (def.symbol(), def.length() as i32);
        for i in 0..length {
            let p = dir.cell(origin, i);
            match self.cell(p) {
                None => return Err(BoardError::OutOfBounds(p)),
                Some(Cell::Empty) => {}
                Some(_) => return Err(BoardError::CellOccupied(p)),
            }
        }
        for i in 0..length {
            let idx = self.config.index(dir.cell(origin, i));
            self.cells[idx] = Cell::Occupied(symbol);
        }
        self.placed.push(id);
        Ok(())
    }

    /// Remove ship `id`, which must sit exactly at `origin` facing `dir`.
    pub fn unplace_ship(&mut self, origin: Point, id: usize, dir: Direction) -> Result<(), BoardError> {
        let def = self.config.ship(id).ok_or(BoardError::InvalidShipId(id))?;
        let pos = self
            .placed
            .iter()
            .position(|&placed| placed == id)
            .ok_or(BoardError::ShipNotPlacedHere(id))?;
        let (symbol, length) = (def.symbol(), def.length() as i32);
        let in_place = (0..length).all(|i| self.cell(dir.cell(origin, i)) == Some(Cell::Occupied(symbol)));
        if !in_place {
            return Err(BoardError::ShipNotPlacedHere(id));
        }
        for i in 0..length {
            let idx = self.config.index(dir.cell(origin, i));
            self.cells[idx] = Cell::Empty;
        }
        self.placed.remove(pos);
        Ok(())
    }

    /// Fire at `p`. Out-of-bounds and repeated shots are rejected without
    /// touching the board.
    pub fn attack(&mut self, p: Point) -> Result<AttackOutcome, BoardError> {
        let cell = self.cell(p).ok_or(BoardError::OutOfBounds(p))?;
        let idx = self.config.index(p);
        match cell {
            Cell::Miss | Cell::Hit => Err(BoardError::AlreadyAttacked(p)),
            Cell::Empty | Cell::Blocked => {
                self.cells[idx] = Cell::Miss;
                Ok(AttackOutcome::Miss)
            }
            Cell::Occupied(symbol) => {
                self.damage.push(symbol);
                self.cells[idx] = Cell::Hit;
                let damage = self.damage.iter().filter(|&&s| s == symbol).count();
                // symbols are unique across the roster
                let sunk = self.placed.iter().copied().find(|&id| {
                    self.config
                        .ship(id)
                        .is_some_and(|def| def.symbol() == symbol && def.length() == damage)
                });
                Ok(sunk.map_or(AttackOutcome::Hit, AttackOutcome::Destroyed))
            }
        }
    }

    /// Returns `true` when every placed ship has taken as many hits as it is long.
    pub fn all_ships_destroyed(&self) -> bool {
        let total: usize = self.placed.iter().map(|&id| self.config.ship_length(id)).sum();
        self.damage.len() == total
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, placed: {:?}, damage: {:?} }}",
            self.rows(),
            self.cols(),
            self.placed,
            self.damage
        )?;
        for row in self.cells.chunks(self.cols()) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}
