use log::trace;
use rand::{rngs::SmallRng, Rng};

use crate::{
    board::Board,
    common::{BoardError, Heading, Point, ShotResult},
    config::GameConfig,
    placement,
};

use super::Player;

/// Furthest distance from the remembered hit that targeting will reach.
pub const CROSS_RADIUS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Fire at random unattacked cells.
    Search,
    /// Fire at random unattacked cells on the cross centred on `hit`.
    Target { hit: Point },
}

/// Randomized player that, after a hit, keeps shooting near it until a ship
/// goes down or the surrounding cross is used up.
pub struct MediocrePlayer {
    name: String,
    config: GameConfig,
    rng: SmallRng,
    attacked: Vec<bool>,
    unattacked: Vec<Point>,
    mode: Mode,
}

impl MediocrePlayer {
    pub fn new(name: &str, config: &GameConfig, rng: SmallRng) -> Self {
        Self {
            name: name.to_owned(),
            attacked: vec![false; config.rows() * config.cols()],
            unattacked: config.points().collect(),
            config: config.clone(),
            rng,
            mode: Mode::Search,
        }
    }

    fn is_open(&self, p: Point) -> bool {
        self.config.is_valid(p) && !self.attacked[self.config.index(p)]
    }

    fn mark(&mut self, p: Point) -> Point {
        self.attacked[self.config.index(p)] = true;
        if let Some(pos) = self.unattacked.iter().position(|&q| q == p) {
            self.unattacked.swap_remove(pos);
        }
        p
    }

    /// Unattacked in-bounds cells within [`CROSS_RADIUS`] of `hit` along its
    /// row or column.
    fn cross(&self, hit: Point) -> Vec<Point> {
        Heading::ALL
            .iter()
            .flat_map(|&h| (1..=CROSS_RADIUS).map(move |step| hit.offset(h, step)))
            .filter(|&p| self.is_open(p))
            .collect()
    }
}

impl Player for MediocrePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError> {
        placement::place_randomized(board, &mut self.rng)
    }

    fn recommend_attack(&mut self) -> Point {
        if let Mode::Target { hit } = self.mode {
            let candidates = self.cross(hit);
            if candidates.is_empty() {
                trace!("{}: cross around {} exhausted, back to search", self.name, hit);
                self.mode = Mode::Search;
            } else {
                let p = candidates[self.rng.random_range(0..candidates.len())];
                return self.mark(p);
            }
        }

        if self.unattacked.is_empty() {
            return Point::default();
        }
        let p = self.unattacked[self.rng.random_range(0..self.unattacked.len())];
        self.mark(p)
    }

    fn record_attack_result(&mut self, p: Point, result: ShotResult) {
        match result {
            ShotResult::Destroyed(_) => self.mode = Mode::Search,
            ShotResult::Hit => {
                trace!("{}: targeting around {}", self.name, p);
                self.mode = Mode::Target { hit: p };
            }
            ShotResult::Miss | ShotResult::Invalid => {}
        }
    }
}
