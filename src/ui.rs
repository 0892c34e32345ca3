use core::fmt::Write;

use crate::board::{Board, Cell};
use crate::common::Point;
use crate::config::EMPTY_SYMBOL;

/// Render a board as text: a header of column numbers, then one line per row
/// prefixed by its number. With `shots_only`, ship cells that have not been
/// hit are drawn as water.
pub fn render_board(board: &Board, shots_only: bool) -> String {
    let mut out = String::from("  ");
    for c in 0..board.cols() {
        let _ = write!(out, "{}", c);
    }
    out.push('\n');
    for r in 0..board.rows() {
        let _ = write!(out, "{} ", r);
        for c in 0..board.cols() {
            let cell = board.cell(Point::new(r as i32, c as i32)).unwrap_or(Cell::Empty);
            let ch = match cell {
                Cell::Occupied(_) | Cell::Empty if shots_only => EMPTY_SYMBOL,
                other => other.symbol(),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
