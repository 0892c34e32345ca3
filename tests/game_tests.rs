use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use broadside::{
    Board, BoardError, Direction, Game, GameConfig, MatchOutcome, Player, PlayerKind, Point, Seat,
    Shot, ShotResult,
};
use rand::{rngs::SmallRng, SeedableRng};

type Log = Rc<RefCell<Vec<String>>>;

/// Fires a fixed list of shots and records every callback it gets.
struct Scripted {
    name: &'static str,
    shots: VecDeque<Point>,
    log: Log,
}

impl Scripted {
    fn new(name: &'static str, shots: &[(i32, i32)], log: &Log) -> Self {
        Self {
            name,
            shots: shots.iter().map(|&(r, c)| Point::new(r, c)).collect(),
            log: Rc::clone(log),
        }
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError> {
        board.place_ship(Point::new(0, 0), 0, Direction::Horizontal)
    }

    fn recommend_attack(&mut self) -> Point {
        self.shots.pop_front().unwrap_or_default()
    }

    fn record_attack_result(&mut self, p: Point, result: ShotResult) {
        self.log
            .borrow_mut()
            .push(format!("{} result {} {:?}", self.name, p, result));
    }

    fn record_attack_by_opponent(&mut self, p: Point) {
        self.log
            .borrow_mut()
            .push(format!("{} fired at {}", self.name, p));
    }
}

fn single_dinghy() -> GameConfig {
    let mut config = GameConfig::new(3, 3).unwrap();
    config.add_ship(1, 'S', "dinghy").unwrap();
    config
}

#[test]
fn test_ai_pairings_always_finish() {
    let kinds = [PlayerKind::Awful, PlayerKind::Mediocre, PlayerKind::Good];
    let config = GameConfig::standard();
    let game = Game::new(config.clone());
    let mut seed = 0;
    for k1 in kinds {
        for k2 in kinds {
            seed += 2;
            let mut p1 = k1.create("one", &config, SmallRng::seed_from_u64(seed));
            let mut p2 = k2.create("two", &config, SmallRng::seed_from_u64(seed + 1));
            match game.play(p1.as_mut(), p2.as_mut()) {
                MatchOutcome::Won { rounds, .. } => assert!(rounds <= 200, "{} vs {}", k1, k2),
                other => panic!("{} vs {} ended with {:?}", k1, k2, other),
            }
        }
    }
}

#[test]
fn test_attacker_hears_result_before_defender_hears_shot() {
    let log: Log = Rc::default();
    let mut p1 = Scripted::new("one", &[(10, 10), (0, 0)], &log);
    let mut p2 = Scripted::new("two", &[(2, 2)], &log);
    let config = single_dinghy();
    let mut b1 = Board::new(&config);
    let mut b2 = Board::new(&config);

    let mut shots = Vec::new();
    let outcome = Game::new(config).play_on(&mut p1, &mut p2, &mut b1, &mut b2, |s| shots.push(s));

    assert_eq!(outcome, MatchOutcome::Won { winner: Seat::One, rounds: 3 });
    assert_eq!(
        *log.borrow(),
        vec![
            "one result (10,10) Invalid",
            "two fired at (10,10)",
            "two result (2,2) Miss",
            "one fired at (2,2)",
            "one result (0,0) Destroyed(0)",
            "two fired at (0,0)",
        ]
    );
    assert_eq!(
        shots,
        vec![
            Shot {
                attacker: Seat::One,
                target: Point::new(10, 10),
                result: ShotResult::Invalid
            },
            Shot {
                attacker: Seat::Two,
                target: Point::new(2, 2),
                result: ShotResult::Miss
            },
            Shot {
                attacker: Seat::One,
                target: Point::new(0, 0),
                result: ShotResult::Destroyed(0)
            },
        ]
    );
}

#[test]
fn test_second_seat_can_win() {
    let log: Log = Rc::default();
    let mut p1 = Scripted::new("one", &[(1, 1), (2, 2)], &log);
    let mut p2 = Scripted::new("two", &[(0, 0)], &log);
    let outcome = Game::new(single_dinghy()).play(&mut p1, &mut p2);
    assert_eq!(outcome, MatchOutcome::Won { winner: Seat::Two, rounds: 2 });
    assert_eq!(outcome.winner(), Some(Seat::Two));
}

#[test]
fn test_repeated_shot_is_wasted() {
    let log: Log = Rc::default();
    let mut p1 = Scripted::new("one", &[(1, 1), (1, 1), (0, 0)], &log);
    let mut p2 = Scripted::new("two", &[(2, 2), (2, 1), (2, 0)], &log);
    let outcome = Game::new(single_dinghy()).play(&mut p1, &mut p2);
    assert_eq!(outcome, MatchOutcome::Won { winner: Seat::One, rounds: 5 });
    assert!(log.borrow().contains(&"one result (1,1) Invalid".to_string()));
}

#[test]
fn test_empty_roster_has_nothing_to_play() {
    let config = GameConfig::new(4, 4).unwrap();
    let mut p1 = PlayerKind::Good.create("one", &config, SmallRng::seed_from_u64(1));
    let mut p2 = PlayerKind::Good.create("two", &config, SmallRng::seed_from_u64(2));
    assert_eq!(
        Game::new(config).play(p1.as_mut(), p2.as_mut()),
        MatchOutcome::NoShips
    );
}

#[test]
fn test_second_seat_setup_failure() {
    let mut config = GameConfig::new(3, 3).unwrap();
    for sym in ['A', 'B', 'C', 'D'] {
        config.add_ship(1, sym, "dinghy").unwrap();
    }
    let mut p1 = PlayerKind::Good.create("one", &config, SmallRng::seed_from_u64(1));
    let mut p2 = PlayerKind::Awful.create("two", &config, SmallRng::seed_from_u64(2));
    assert_eq!(
        Game::new(config).play(p1.as_mut(), p2.as_mut()),
        MatchOutcome::SetupFailed { seat: Seat::Two }
    );
}

#[test]
fn test_play_on_resets_boards() {
    let log: Log = Rc::default();
    let config = single_dinghy();
    let mut b1 = Board::new(&config);
    let mut b2 = Board::new(&config);
    // leftovers from an earlier match
    b1.place_ship(Point::new(2, 2), 0, Direction::Horizontal).unwrap();
    b2.attack(Point::new(1, 1)).unwrap();

    let mut p1 = Scripted::new("one", &[(1, 1), (0, 0)], &log);
    let mut p2 = Scripted::new("two", &[(2, 2)], &log);
    let outcome = Game::new(config).play_on(&mut p1, &mut p2, &mut b1, &mut b2, |_| {});
    assert_eq!(outcome, MatchOutcome::Won { winner: Seat::One, rounds: 3 });
    assert!(log.borrow().contains(&"one result (1,1) Miss".to_string()));
    assert!(log.borrow().contains(&"two result (2,2) Miss".to_string()));
}
