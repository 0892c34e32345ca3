use log::trace;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Heading, Point, ShotResult},
    config::GameConfig,
    placement,
};

use super::Player;

/// What the player knows about one cell of the opponent's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Belief {
    Unknown,
    Miss,
    /// Hit on a ship not yet known to be sunk.
    Hit,
    /// Part of a ship that has been destroyed.
    Sunk,
}

/// Targeting phase of the hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntMode {
    /// Sweep the board in stripes looking for a ship.
    Search,
    /// Probe the four neighbours of the anchor for a second hit.
    FirstHit,
    /// Keep walking from the last hit along the heading that produced it.
    Extend,
}

/// Everything the player remembers about the opponent's board.
#[derive(Debug, Clone)]
pub struct HuntMemory {
    config: GameConfig,
    belief: Vec<Belief>,
    attacked: Vec<bool>,
    /// Lengths of ships still afloat.
    remaining: Vec<usize>,
    anchor: Point,
    last_hit: Point,
    mode: HuntMode,
    /// Index into [`Heading::ALL`] of the heading being probed.
    heading: usize,
}

impl HuntMemory {
    pub fn new(config: &GameConfig) -> Self {
        let cells = config.rows() * config.cols();
        Self {
            config: config.clone(),
            belief: vec![Belief::Unknown; cells],
            attacked: vec![false; cells],
            remaining: config.ships().iter().map(|s| s.length()).collect(),
            anchor: Point::default(),
            last_hit: Point::default(),
            mode: HuntMode::Search,
            heading: 0,
        }
    }

    pub fn mode(&self) -> HuntMode {
        self.mode
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn remaining_lengths(&self) -> &[usize] {
        &self.remaining
    }

    pub fn belief(&self, p: Point) -> Option<Belief> {
        self.config
            .is_valid(p)
            .then(|| self.belief[self.config.index(p)])
    }

    pub fn is_attacked(&self, p: Point) -> bool {
        self.config.is_valid(p) && self.attacked[self.config.index(p)]
    }

    fn is_open(&self, p: Point) -> bool {
        self.config.is_valid(p) && !self.attacked[self.config.index(p)]
    }

    fn mark(&mut self, p: Point) -> Point {
        let idx = self.config.index(p);
        self.attacked[idx] = true;
        p
    }

    fn set_belief(&mut self, p: Point, belief: Belief) {
        if self.config.is_valid(p) {
            let idx = self.config.index(p);
            self.belief[idx] = belief;
        }
    }

    fn current_heading(&self) -> Heading {
        Heading::ALL[self.heading.min(3)]
    }

    /// Choose the next point, updating the mode when a phase runs dry.
    pub fn next_target(&mut self) -> Point {
        if self.mode == HuntMode::Extend {
            if let Some(p) = self.extend() {
                return self.mark(p);
            }
            trace!("extend from {} exhausted, reversing", self.anchor);
            self.last_hit = self.anchor;
            self.heading += 1;
            self.mode = HuntMode::FirstHit;
        }

        if self.mode == HuntMode::FirstHit {
            if let Some(p) = self.probe() {
                return self.mark(p);
            }
            trace!("no open neighbour around {}, back to search", self.anchor);
            self.mode = HuntMode::Search;
        }

        match self.search() {
            Some(p) => self.mark(p),
            None => Point::default(),
        }
    }

    /// Next open cell past the run of hits starting at the last hit.
    fn extend(&self) -> Option<Point> {
        let heading = self.current_heading();
        let mut p = self.last_hit.offset(heading, 1);
        while self.belief(p) == Some(Belief::Hit) {
            p = p.offset(heading, 1);
        }
        self.is_open(p).then_some(p)
    }

    /// First open neighbour of the anchor, advancing the heading cursor past
    /// blocked headings.
    fn probe(&mut self) -> Option<Point> {
        while self.heading < Heading::ALL.len() {
            let p = self.anchor.offset(Heading::ALL[self.heading], 1);
            if self.is_open(p) {
                return Some(p);
            }
            self.heading += 1;
        }
        None
    }

    /// Striped sweep. No ship shorter than the shortest remaining one can hide
    /// between stripes, so only every `stride`-th cell needs a shot.
    fn search(&self) -> Option<Point> {
        let stride = self.remaining.iter().copied().min().unwrap_or(1).max(1);
        let (rows, cols) = (self.config.rows() as i32, self.config.cols() as i32);

        let row_major = (0..rows).flat_map(|r| {
            (r % 2..cols)
                .step_by(stride)
                .map(move |c| Point::new(r, c))
        });
        let col_major = (0..cols).flat_map(|c| {
            (c % 2..rows)
                .step_by(stride)
                .map(move |r| Point::new(r, c))
        });

        row_major
            .chain(col_major)
            .chain(self.config.points())
            .find(|&p| self.is_open(p))
    }

    /// Fold the result of our shot at `p` into memory.
    pub fn record(&mut self, p: Point, result: ShotResult) {
        match result {
            ShotResult::Invalid => {}
            ShotResult::Miss => {
                self.set_belief(p, Belief::Miss);
                match self.mode {
                    HuntMode::FirstHit => self.heading += 1,
                    HuntMode::Extend => {
                        self.last_hit = self.anchor;
                        self.heading += 1;
                        self.mode = HuntMode::FirstHit;
                    }
                    HuntMode::Search => {}
                }
            }
            ShotResult::Hit => {
                self.set_belief(p, Belief::Hit);
                match self.mode {
                    HuntMode::Search => {
                        self.anchor = p;
                        self.last_hit = p;
                        self.heading = 0;
                        self.mode = HuntMode::FirstHit;
                    }
                    HuntMode::FirstHit => {
                        self.last_hit = p;
                        self.mode = HuntMode::Extend;
                    }
                    HuntMode::Extend => self.last_hit = p,
                }
            }
            ShotResult::Destroyed(id) => {
                self.set_belief(p, Belief::Hit);
                let length = self.config.ship_length(id);
                if let Some(pos) = self.remaining.iter().position(|&l| l == length) {
                    self.remaining.swap_remove(pos);
                }
                self.paint_sunk(p, length);
                self.resume();
            }
        }
    }

    /// Mark the `length` cells of the ship that sank at `p`. The run of hits
    /// leading back along the current heading is preferred.
    fn paint_sunk(&mut self, p: Point, length: usize) {
        let back = match self.current_heading() {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        };
        let order = core::iter::once(back).chain(Heading::ALL.into_iter().filter(move |&h| h != back));
        let length = length as i32;
        for h in order {
            let run: Vec<Point> = (0..length).map(|i| p.offset(h, i)).collect();
            if run.iter().all(|&q| self.belief(q) == Some(Belief::Hit)) {
                for q in run {
                    self.set_belief(q, Belief::Sunk);
                }
                return;
            }
        }
        self.set_belief(p, Belief::Sunk);
    }

    /// After a sinking, go back to any hit that no sunk ship accounts for.
    fn resume(&mut self) {
        self.heading = 0;
        let pending = self
            .config
            .points()
            .find(|&q| self.belief(q) == Some(Belief::Hit));
        match pending {
            Some(q) => {
                trace!("resuming hunt at unresolved hit {}", q);
                self.anchor = q;
                self.last_hit = q;
                self.mode = HuntMode::FirstHit;
            }
            None => self.mode = HuntMode::Search,
        }
    }
}

/// Player that hunts in stripes and, once it finds a ship, follows the line
/// of hits in both directions until the ship sinks.
pub struct GoodPlayer {
    name: String,
    rng: SmallRng,
    memory: HuntMemory,
}

impl GoodPlayer {
    pub fn new(name: &str, config: &GameConfig, rng: SmallRng) -> Self {
        Self {
            name: name.to_owned(),
            rng,
            memory: HuntMemory::new(config),
        }
    }

    pub fn memory(&self) -> &HuntMemory {
        &self.memory
    }
}

impl Player for GoodPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError> {
        if placement::place_randomized(board, &mut self.rng).is_ok() {
            return Ok(());
        }
        // last try without blocked cells
        let count = board.config().n_ships();
        if placement::fit_fleet(board, count) {
            Ok(())
        } else {
            Err(BoardError::UnableToPlaceShips)
        }
    }

    fn recommend_attack(&mut self) -> Point {
        self.memory.next_target()
    }

    fn record_attack_result(&mut self, p: Point, result: ShotResult) {
        self.memory.record(p, result);
    }
}
