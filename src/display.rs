//! Coloured terminal rendering, one colour per kind of piece.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::board::{Board, Cell};
use crate::path::SolutionPath;

fn colour(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::DarkGrey,
        Cell::Goal => Color::Red,
        Cell::Single => Color::Yellow,
        Cell::Left | Cell::Right => Color::Cyan,
        Cell::Top | Cell::Bottom => Color::Green,
    }
}

pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.grid().rows() {
        for cell in row {
            queue!(out, SetForegroundColor(colour(*cell)), Print(cell.symbol()))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    Ok(())
}

/// Every board of `path` under a `step N: move` heading.
pub fn write_solution<W: Write>(out: &mut W, path: &SolutionPath) -> io::Result<()> {
    for (step, board) in path.boards().iter().enumerate() {
        let heading = match step.checked_sub(1).and_then(|i| path.moves().get(i)) {
            Some(mv) => format!("step {step}: {mv}"),
            None => "start".to_string(),
        };
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(heading),
            SetAttribute(Attribute::Reset),
            Print('\n')
        )?;
        write_board(out, board)?;
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::parse_layout;
    use crate::search::{solve, SearchConfig, Strategy};

    fn strip_escapes(bytes: &[u8]) -> String {
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn board_renders_its_symbols() {
        let board = parse_layout("^11^\nv11v\n^<>^\nv22v\n2..2\n").unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();
        assert!(out.contains(&0x1b), "expected colour escapes");
        assert_eq!(strip_escapes(&out), board.to_string());
    }

    #[test]
    fn solution_has_a_heading_per_board() {
        let board = parse_layout("^^^^\nvvvv\n^11^\nv11v\n2..2\n").unwrap();
        let outcome = solve(board, &SearchConfig::new(Strategy::AStar)).unwrap();
        let mut out = Vec::new();
        write_solution(&mut out, outcome.path().unwrap()).unwrap();
        let plain = strip_escapes(&out);
        assert!(plain.starts_with("start\n^^^^\n"));
        assert!(plain.contains("step 1: (1, 2) Down\n^^^^\nvvvv\n^..^\nv11v\n2112\n"));
    }
}
