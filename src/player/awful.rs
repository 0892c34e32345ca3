use crate::{
    board::Board,
    common::{BoardError, Direction, Point},
    config::GameConfig,
};

use super::Player;

/// Baseline player: stacks its ships in the top-left corner and sweeps the
/// opponent's board backwards from the last cell, ignoring every result.
pub struct AwfulPlayer {
    name: String,
    rows: i32,
    cols: i32,
    last_cell_attacked: Point,
}

impl AwfulPlayer {
    pub fn new(name: &str, config: &GameConfig) -> Self {
        Self {
            name: name.to_owned(),
            rows: config.rows() as i32,
            cols: config.cols() as i32,
            last_cell_attacked: Point::new(0, 0),
        }
    }
}

impl Player for AwfulPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError> {
        // ship k along row k
        for id in 0..board.config().n_ships() {
            board.place_ship(Point::new(id as i32, 0), id, Direction::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self) -> Point {
        let p = &mut self.last_cell_attacked;
        if p.c > 0 {
            p.c -= 1;
        } else {
            p.c = self.cols - 1;
            p.r = if p.r > 0 { p.r - 1 } else { self.rows - 1 };
        }
        *p
    }
}
