//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AwfulPlayer: places ships in a stack and fires in a fixed raster order
//! - MediocrePlayer: randomized placement, random search, cross-shaped targeting
//! - GoodPlayer: randomized placement, striped search, hunt and extend targeting
//! - HumanPlayer: interactive terminal player

use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Point, ShotResult};
use crate::config::GameConfig;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board
/// - Selecting points to attack on the opponent's board
/// - Handling feedback from its shots and from the opponent's shots
pub trait Player {
    fn name(&self) -> &str;

    /// Whether moves come from a person at a terminal.
    fn is_human(&self) -> bool {
        false
    }

    /// Whether the player has stopped providing moves (e.g. its input closed).
    /// The opponent is declared the winner.
    fn has_resigned(&self) -> bool {
        false
    }

    /// Place the whole roster onto the provided board.
    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next point to attack.
    fn recommend_attack(&mut self) -> Point;

    /// Inform the player of the result of its last shot.
    fn record_attack_result(&mut self, _p: Point, _result: ShotResult) {}

    /// Inform the player that the opponent fired at `p`. The outcome is not
    /// revealed.
    fn record_attack_by_opponent(&mut self, _p: Point) {}
}

pub mod awful;
pub use awful::AwfulPlayer;

pub mod mediocre;
pub use mediocre::MediocrePlayer;

pub mod good;
pub use good::GoodPlayer;

pub mod human;
pub use human::HumanPlayer;

/// Player tiers selectable when a match is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Human,
    Awful,
    Mediocre,
    Good,
}

impl PlayerKind {
    /// Build a player of this kind. AI players draw their randomness from `rng`.
    pub fn create(self, name: &str, config: &GameConfig, rng: SmallRng) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(name, config)),
            PlayerKind::Awful => Box::new(AwfulPlayer::new(name, config)),
            PlayerKind::Mediocre => Box::new(MediocrePlayer::new(name, config, rng)),
            PlayerKind::Good => Box::new(GoodPlayer::new(name, config, rng)),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Awful => "awful",
            PlayerKind::Mediocre => "mediocre",
            PlayerKind::Good => "good",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "awful" => Ok(PlayerKind::Awful),
            "mediocre" => Ok(PlayerKind::Mediocre),
            "good" => Ok(PlayerKind::Good),
            other => Err(format!("unknown player type: {}", other)),
        }
    }
}
