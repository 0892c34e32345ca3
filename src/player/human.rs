use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::warn;

use crate::{
    board::Board,
    common::{BoardError, Direction, Point, ShotResult},
    config::GameConfig,
    ui,
};

use super::Player;

/// Terminal player. Reads placements and shots as whitespace separated
/// integers from `input` and writes prompts to `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    config: GameConfig,
    input: R,
    output: W,
    buf: String,
    resigned: bool,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio(name: &str, config: &GameConfig) -> Self {
        Self::new(name, config, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: &str, config: &GameConfig, input: R, output: W) -> Self {
        Self {
            name: name.to_owned(),
            config: config.clone(),
            input,
            output,
            buf: String::new(),
            resigned: false,
        }
    }

    /// Print `prompt` and read one trimmed line. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<&str> {
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();
        self.buf.clear();
        match self.input.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(self.buf.trim()),
            Err(e) => {
                warn!("{}: failed to read input: {}", self.name, e);
                None
            }
        }
    }

    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.output, "{}", msg);
    }

    fn read_direction(&mut self, id: usize) -> Option<Direction> {
        let prompt = format!(
            "Enter h or v for direction of {} (length {}): ",
            self.config.ship_name(id),
            self.config.ship_length(id)
        );
        loop {
            match self.read_line(&prompt)? {
                "h" | "H" => return Some(Direction::Horizontal),
                "v" | "V" => return Some(Direction::Vertical),
                _ => self.say("Direction must be h or v."),
            }
        }
    }

    fn read_point(&mut self, prompt: &str) -> Option<Point> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_point(line) {
                Some(p) => return Some(p),
                None => self.say("You must enter two integers."),
            }
        }
    }
}

/// Parse "r c" into a point.
fn parse_point(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    Some(Point::new(r, c))
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn has_resigned(&self) -> bool {
        self.resigned
    }

    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError> {
        let msg = format!("{} must place {} ships.", self.name, self.config.n_ships());
        self.say(&msg);
        for id in 0..self.config.n_ships() {
            let view = ui::render_board(board, false);
            let _ = write!(self.output, "{}", view);
            let dir = self.read_direction(id).ok_or(BoardError::UnableToPlaceShips)?;
            let prompt = match dir {
                Direction::Horizontal => "Enter row and column of leftmost cell (e.g., 3 5): ",
                Direction::Vertical => "Enter row and column of topmost cell (e.g., 3 5): ",
            };
            loop {
                let p = self.read_point(prompt).ok_or(BoardError::UnableToPlaceShips)?;
                match board.place_ship(p, id, dir) {
                    Ok(()) => break,
                    Err(e) => self.say(&format!("The ship can not be placed there: {}.", e)),
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self) -> Point {
        match self.read_point("Enter the row and column to attack (e.g., 3 5): ") {
            Some(p) => p,
            None => {
                self.resigned = true;
                Point::new(-1, -1)
            }
        }
    }

    fn record_attack_result(&mut self, p: Point, result: ShotResult) {
        let msg = match result {
            ShotResult::Invalid => format!("{} is not a valid target; shot wasted.", p),
            ShotResult::Miss => format!("You missed at {}.", p),
            ShotResult::Hit => format!("You hit something at {}.", p),
            ShotResult::Destroyed(id) => {
                format!("You destroyed the {} at {}.", self.config.ship_name(id), p)
            }
        };
        self.say(&msg);
    }

    fn record_attack_by_opponent(&mut self, p: Point) {
        self.say(&format!("Your opponent fired at {}.", p));
    }
}
