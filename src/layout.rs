//! Text layouts: five rows of four symbols.
//!
//! `^`/`v` are the top and bottom of a vertical double, `<`/`>` the left and
//! right of a horizontal double, `2` a single, `1` the goal block (its first
//! cell in reading order is the anchor) and `.` an empty cell.

use crate::board::{Board, Cell, HEIGHT, WIDTH};
use crate::error::ConfigurationError;
use crate::piece::{Coord, Piece, PieceKind};

/// A cell already promised to a piece anchored earlier in reading order.
#[derive(Clone, Copy)]
struct Claim {
    cell: Cell,
    anchor: Coord,
}

pub fn parse_layout(text: &str) -> Result<Board, ConfigurationError> {
    let mut rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    if rows.len() != HEIGHT {
        return Err(ConfigurationError::WrongRowCount {
            expected: HEIGHT,
            found: rows.len(),
        });
    }

    let mut claims: [[Option<Claim>; WIDTH]; HEIGHT] = [[None; WIDTH]; HEIGHT];
    let mut pieces = Vec::new();
    let mut goal_found = false;

    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != WIDTH {
            return Err(ConfigurationError::WrongRowWidth {
                row: y,
                expected: WIDTH,
                found,
            });
        }

        for (x, symbol) in row.chars().enumerate() {
            let at = Coord::new(x, y);
            let cell = Cell::from_symbol(symbol).ok_or(ConfigurationError::UnrecognizedSymbol {
                row: y,
                col: x,
                symbol,
            })?;

            if let Some(claim) = claims[y][x] {
                if claim.cell == cell {
                    continue;
                }
                return Err(match claim.cell {
                    Cell::Goal => ConfigurationError::IncompleteGoal(claim.anchor),
                    other => ConfigurationError::OrphanHalf {
                        at: claim.anchor,
                        symbol: match other {
                            Cell::Bottom => Cell::Top.symbol(),
                            _ => Cell::Left.symbol(),
                        },
                    },
                });
            }

            let kind = match cell {
                Cell::Empty => continue,
                Cell::Single => PieceKind::Single,
                Cell::Top => PieceKind::VerticalDouble,
                Cell::Left => PieceKind::HorizontalDouble,
                Cell::Goal if goal_found => return Err(ConfigurationError::GoalCount(2)),
                Cell::Goal => {
                    goal_found = true;
                    PieceKind::Goal
                }
                Cell::Right | Cell::Bottom => {
                    return Err(ConfigurationError::OrphanHalf { at, symbol })
                }
            };

            let piece = Piece::new(kind, at);
            if !piece.fits() {
                return Err(match kind {
                    PieceKind::Goal => ConfigurationError::IncompleteGoal(at),
                    _ => ConfigurationError::OrphanHalf { at, symbol },
                });
            }
            for (covered, cell) in piece.cells().filter(|(covered, _)| *covered != at) {
                claims[covered.y][covered.x] = Some(Claim { cell, anchor: at });
            }
            pieces.push(piece);
        }
    }

    Board::new(pieces)
}

/// One block of rows per board, each followed by a blank line.
pub fn render_solution(boards: &[Board]) -> String {
    let mut out = String::with_capacity(boards.len() * (HEIGHT * (WIDTH + 1) + 1));
    for board in boards {
        out.push_str(&board.to_string());
        out.push('\n');
    }
    out
}
