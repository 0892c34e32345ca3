use broadside::ui::render_board;
use broadside::{Board, Direction, GameConfig, Point};

fn sample_board() -> Board {
    let mut config = GameConfig::new(3, 4).unwrap();
    config.add_ship(2, 'P', "patrol boat").unwrap();
    let mut board = Board::new(&config);
    board.place_ship(Point::new(1, 1), 0, Direction::Horizontal).unwrap();
    board.attack(Point::new(1, 1)).unwrap();
    board.attack(Point::new(0, 3)).unwrap();
    board
}

#[test]
fn test_render_owner_view() {
    assert_eq!(
        render_board(&sample_board(), false),
        "  0123\n0 ...o\n1 .XP.\n2 ....\n"
    );
}

#[test]
fn test_render_hides_unhit_ships() {
    assert_eq!(
        render_board(&sample_board(), true),
        "  0123\n0 ...o\n1 .X..\n2 ....\n"
    );
}
