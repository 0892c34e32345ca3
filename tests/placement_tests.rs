use broadside::placement::{fit_fleet, place_randomized};
use broadside::{
    Board, BoardError, Cell, Game, GameConfig, GoodPlayer, MatchOutcome, MediocrePlayer, Player,
    Point, Seat,
};
use rand::{rngs::SmallRng, SeedableRng};

fn tight_config() -> GameConfig {
    let mut config = GameConfig::new(2, 2).unwrap();
    config.add_ship(2, 'A', "alpha").unwrap();
    config.add_ship(2, 'B', "bravo").unwrap();
    config
}

#[test]
fn test_fit_fleet_is_first_fit_from_last_id() {
    let config = GameConfig::standard();
    let mut board = Board::new(&config);
    assert!(fit_fleet(&mut board, config.n_ships()));
    assert_eq!(board.placed_ships(), &[4, 3, 2, 1, 0]);

    let at = |r, c| board.cell(Point::new(r, c));
    assert_eq!(at(0, 0), Some(Cell::Occupied('P')));
    assert_eq!(at(0, 1), Some(Cell::Occupied('P')));
    for c in 2..5 {
        assert_eq!(at(0, c), Some(Cell::Occupied('S')));
    }
    for c in 5..8 {
        assert_eq!(at(0, c), Some(Cell::Occupied('D')));
    }
    for r in 0..4 {
        assert_eq!(at(r, 8), Some(Cell::Occupied('B')));
    }
    for r in 0..5 {
        assert_eq!(at(r, 9), Some(Cell::Occupied('A')));
    }
    assert_eq!(at(4, 8), Some(Cell::Empty));
}

#[test]
fn test_fit_fleet_with_nothing_to_place() {
    let config = GameConfig::standard();
    let mut board = Board::new(&config);
    assert!(fit_fleet(&mut board, 0));
    assert!(board.placed_ships().is_empty());
}

#[test]
fn test_place_randomized_leaves_no_blocked_cells() {
    let config = GameConfig::standard();
    for seed in 0..20 {
        let mut board = Board::new(&config);
        let mut rng = SmallRng::seed_from_u64(seed);
        place_randomized(&mut board, &mut rng).unwrap();
        assert_eq!(board.placed_ships().len(), 5);
        let occupied = config
            .points()
            .filter(|&p| matches!(board.cell(p), Some(Cell::Occupied(_))))
            .count();
        assert_eq!(occupied, 17);
        assert!(config.points().all(|p| board.cell(p) != Some(Cell::Blocked)));
    }
}

#[test]
fn test_place_randomized_gives_up_on_full_board() {
    let config = tight_config();
    let mut board = Board::new(&config);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        place_randomized(&mut board, &mut rng),
        Err(BoardError::UnableToPlaceShips)
    );
    assert_eq!(board, Board::new(&config));
}

#[test]
fn test_mediocre_cannot_fill_board_but_good_can() {
    let config = tight_config();

    let mut mediocre = MediocrePlayer::new("m", &config, SmallRng::seed_from_u64(1));
    let mut board = Board::new(&config);
    assert_eq!(
        mediocre.place_ships(&mut board),
        Err(BoardError::UnableToPlaceShips)
    );
    assert!(config.points().all(|p| board.cell(p) == Some(Cell::Empty)));

    let mut good = GoodPlayer::new("g", &config, SmallRng::seed_from_u64(1));
    let mut board = Board::new(&config);
    good.place_ships(&mut board).unwrap();
    assert_eq!(board.cell(Point::new(0, 0)), Some(Cell::Occupied('B')));
    assert_eq!(board.cell(Point::new(1, 1)), Some(Cell::Occupied('A')));
}

#[test]
fn test_setup_failure_aborts_match() {
    let config = tight_config();
    let mut p1 = MediocrePlayer::new("m", &config, SmallRng::seed_from_u64(5));
    let mut p2 = GoodPlayer::new("g", &config, SmallRng::seed_from_u64(6));
    let outcome = Game::new(config).play(&mut p1, &mut p2);
    assert_eq!(outcome, MatchOutcome::SetupFailed { seat: Seat::One });
    assert_eq!(outcome.winner(), None);
}
