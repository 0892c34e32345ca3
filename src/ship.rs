//! Ship roster entries.

use serde::{Deserialize, Serialize};

/// Immutable roster entry: length, display symbol and name. A ship's id is its
/// index in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDef {
    length: usize,
    symbol: char,
    name: String,
}

impl ShipDef {
    /// Create a new ship definition. Validation happens when the ship is
    /// added to a [`GameConfig`](crate::GameConfig).
    pub fn new(length: usize, symbol: char, name: impl Into<String>) -> Self {
        Self {
            length,
            symbol,
            name: name.into(),
        }
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Symbol marking the ship's cells on its owner's grid.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
