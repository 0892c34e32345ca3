mod board;
mod common;
mod config;
mod game;
mod logging;
pub mod placement;
pub mod player;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::{AwfulPlayer, GoodPlayer, HumanPlayer, MediocrePlayer, Player, PlayerKind};
pub use ship::*;
