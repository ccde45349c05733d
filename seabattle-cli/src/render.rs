// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text rendering of boards.

use std::fmt;

use seabattle::board::{Board, CellState};

/// Glyph printed for a cell.
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Ship => '■',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Blocked => '.',
    }
}

/// Display helper that draws a board with 1-based axis labels. Ships are drawn only if
/// the board is not hidden.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board = self.0;
        write!(f, "   ")?;
        for col in 1..=board.size() {
            write!(f, "{:^3}", col)?;
        }
        writeln!(f)?;
        for (i, row) in board.rows().enumerate() {
            write!(f, "{:>2} ", i + 1)?;
            for coord in row {
                let state = board.view(coord).unwrap_or_default();
                write!(f, "{:^3}", glyph(state))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
