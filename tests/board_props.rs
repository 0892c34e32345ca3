use broadside::{AttackOutcome, Board, BoardError, Cell, Direction, GameConfig, Point};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

/// Standard roster scattered by trial and error; some ships may be left off.
fn random_board(seed: u64) -> Board {
    let config = GameConfig::standard();
    let mut board = Board::new(&config);
    let mut rng = SmallRng::seed_from_u64(seed);
    for id in 0..config.n_ships() {
        for _ in 0..3 {
            let p = config.random_point(&mut rng);
            let dir = if rng.random() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            if board.place_ship(p, id, dir).is_ok() {
                break;
            }
        }
    }
    board
}

fn shuffled_points(config: &GameConfig, seed: u64) -> Vec<Point> {
    let mut points: Vec<Point> = config.points().collect();
    points.shuffle(&mut SmallRng::seed_from_u64(seed));
    points
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_place_then_unplace_restores_board(
        seed in any::<u64>(),
        r in -2i32..12,
        c in -2i32..12,
        horizontal in any::<bool>(),
    ) {
        let mut board = random_board(seed);
        let config = board.config().clone();
        let dir = if horizontal { Direction::Horizontal } else { Direction::Vertical };
        let Some(id) = (0..config.n_ships()).find(|id| !board.placed_ships().contains(id)) else {
            return Ok(());
        };
        let before = board.clone();
        match board.place_ship(Point::new(r, c), id, dir) {
            Ok(()) => {
                prop_assert_ne!(&board, &before);
                board.unplace_ship(Point::new(r, c), id, dir).unwrap();
                prop_assert_eq!(&board, &before);
            }
            Err(e) => {
                prop_assert!(matches!(e, BoardError::OutOfBounds(_) | BoardError::CellOccupied(_)));
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn prop_hit_cells_match_damage_events(
        seed in any::<u64>(),
        shot_seed in any::<u64>(),
        n in 0usize..=100,
    ) {
        let mut board = random_board(seed);
        let config = board.config().clone();
        let mut hits = 0;
        for p in shuffled_points(&config, shot_seed).into_iter().take(n) {
            if board.attack(p).unwrap().is_hit() {
                hits += 1;
            }
        }
        let hit_cells = config.points().filter(|&p| board.cell(p) == Some(Cell::Hit)).count();
        prop_assert_eq!(hit_cells, hits);
        prop_assert_eq!(board.damage_events().len(), hits);
        let attacked = config
            .points()
            .filter(|&p| board.cell(p).is_some_and(Cell::is_attacked))
            .count();
        prop_assert_eq!(attacked, n);
    }

    #[test]
    fn prop_fleet_destroyed_exactly_when_every_ship_is(
        seed in any::<u64>(),
        shot_seed in any::<u64>(),
    ) {
        let mut board = random_board(seed);
        let config = board.config().clone();
        let mut destroyed = Vec::new();
        for p in shuffled_points(&config, shot_seed) {
            if let AttackOutcome::Destroyed(id) = board.attack(p).unwrap() {
                prop_assert!(!destroyed.contains(&id));
                prop_assert_eq!(board.damage_to(id), config.ship_length(id));
                destroyed.push(id);
            }
            let all_sunk = board
                .placed_ships()
                .iter()
                .all(|&id| board.damage_to(id) == config.ship_length(id));
            prop_assert_eq!(board.all_ships_destroyed(), all_sunk);
        }
        prop_assert!(board.all_ships_destroyed());
        destroyed.sort_unstable();
        let mut placed = board.placed_ships().to_vec();
        placed.sort_unstable();
        prop_assert_eq!(destroyed, placed);
    }

    #[test]
    fn prop_second_attack_is_rejected(seed in any::<u64>(), r in 0i32..10, c in 0i32..10) {
        let mut board = random_board(seed);
        let p = Point::new(r, c);
        board.attack(p).unwrap();
        let before = board.clone();
        prop_assert_eq!(board.attack(p), Err(BoardError::AlreadyAttacked(p)));
        prop_assert_eq!(&board, &before);
    }
}
