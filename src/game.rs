//! Match orchestration: setup, alternating turns and win detection.

use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    board::Board,
    common::{Point, ShotResult},
    config::GameConfig,
    player::Player,
    ui,
};

/// Which side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// `winner` sank the whole opposing fleet (or the opponent resigned)
    /// after `rounds` shots in total.
    Won { winner: Seat, rounds: usize },
    /// `seat` could not place its roster; nobody wins.
    SetupFailed { seat: Seat },
    /// The roster is empty so there is nothing to play for.
    NoShips,
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            MatchOutcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// One shot of a match, as seen by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shot {
    pub attacker: Seat,
    pub target: Point,
    pub result: ShotResult,
}

/// Runs matches between two players on a fixed board configuration.
pub struct Game {
    config: GameConfig,
    show_boards: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            show_boards: false,
        }
    }

    /// Print the attacked board to stdout before and after every shot.
    pub fn show_boards(mut self, show: bool) -> Self {
        self.show_boards = show;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play a match on fresh boards.
    pub fn play<'a>(&self, p1: &mut (dyn Player + 'a), p2: &mut (dyn Player + 'a)) -> MatchOutcome {
        let mut b1 = Board::new(&self.config);
        let mut b2 = Board::new(&self.config);
        self.play_on(p1, p2, &mut b1, &mut b2, |_| {})
    }

    /// Play a match on caller-owned boards, reporting every shot to `on_shot`.
    /// Player 1 owns `b1` and fires first.
    pub fn play_on<'a, F>(
        &self,
        p1: &mut (dyn Player + 'a),
        p2: &mut (dyn Player + 'a),
        b1: &mut Board,
        b2: &mut Board,
        mut on_shot: F,
    ) -> MatchOutcome
    where
        F: FnMut(Shot),
    {
        if self.config.n_ships() == 0 {
            return MatchOutcome::NoShips;
        }
        b1.clear();
        b2.clear();
        if let Err(e) = p1.place_ships(b1) {
            warn!("{} could not place ships: {}", p1.name(), e);
            return MatchOutcome::SetupFailed { seat: Seat::One };
        }
        if let Err(e) = p2.place_ships(b2) {
            warn!("{} could not place ships: {}", p2.name(), e);
            return MatchOutcome::SetupFailed { seat: Seat::Two };
        }

        let mut rounds = 0;
        loop {
            let attacker_seat = if rounds % 2 == 0 { Seat::One } else { Seat::Two };
            let (attacker, defender, target_board) = match attacker_seat {
                Seat::One => (&mut *p1, &mut *p2, &mut *b2),
                Seat::Two => (&mut *p2, &mut *p1, &mut *b1),
            };
            let shot = self.turn(attacker_seat, attacker, defender, target_board);
            on_shot(shot);
            rounds += 1;

            if p1.has_resigned() || p2.has_resigned() {
                let winner = if p1.has_resigned() { Seat::Two } else { Seat::One };
                info!("resignation; {:?} wins after {} shots", winner, rounds);
                return MatchOutcome::Won { winner, rounds };
            }
            if b2.all_ships_destroyed() {
                info!("{} wins after {} shots", p1.name(), rounds);
                self.reveal(p2.is_human(), p1.name(), b1);
                return MatchOutcome::Won { winner: Seat::One, rounds };
            }
            if b1.all_ships_destroyed() {
                info!("{} wins after {} shots", p2.name(), rounds);
                self.reveal(p1.is_human(), p2.name(), b2);
                return MatchOutcome::Won { winner: Seat::Two, rounds };
            }
        }
    }

    /// One shot: ask, apply, then tell the attacker the outcome and the
    /// defender only where it was fired at.
    fn turn<'a>(
        &self,
        seat: Seat,
        attacker: &mut (dyn Player + 'a),
        defender: &mut (dyn Player + 'a),
        board: &mut Board,
    ) -> Shot {
        if self.show_boards {
            println!("{}'s turn. Board for {}:", attacker.name(), defender.name());
            print!("{}", ui::render_board(board, attacker.is_human()));
        }
        let target = attacker.recommend_attack();
        let result = ShotResult::from(board.attack(target));
        attacker.record_attack_result(target, result);
        defender.record_attack_by_opponent(target);

        match result {
            ShotResult::Invalid => debug!("{} wasted a shot at {}", attacker.name(), target),
            ShotResult::Miss => debug!("{} attacked {} and missed", attacker.name(), target),
            ShotResult::Hit => debug!("{} attacked {} and hit something", attacker.name(), target),
            ShotResult::Destroyed(id) => debug!(
                "{} attacked {} and destroyed the {}",
                attacker.name(),
                target,
                self.config.ship_name(id)
            ),
        }
        if self.show_boards && result.is_valid() {
            print!("{}", ui::render_board(board, attacker.is_human()));
        }
        Shot {
            attacker: seat,
            target,
            result,
        }
    }

    /// Show a human loser where the winner's ships were.
    fn reveal(&self, loser_is_human: bool, winner_name: &str, winner_board: &Board) {
        if self.show_boards && loser_is_human {
            println!("Here is where {}'s ships were:", winner_name);
            print!("{}", ui::render_board(winner_board, false));
        }
    }
}
