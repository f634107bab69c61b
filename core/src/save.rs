//! Line-per-board text format of the progress file.
//!
//! Four JSON grids in fixed order: player board, player tracking board,
//! computer board, computer tracking board.

use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

pub const SAVE_LINES: usize = 4;

impl BattleEngine {
    pub fn to_save_string(&self) -> core::result::Result<String, SaveError> {
        let boards = [
            self.player_board(),
            self.player_tracking(),
            self.computer_board(),
            self.computer_tracking(),
        ];

        let mut lines = Vec::with_capacity(SAVE_LINES);
        for (index, board) in boards.into_iter().enumerate() {
            let line = serde_json::to_string(board).map_err(|source| SaveError::Json {
                line: index + 1,
                source,
            })?;
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    pub fn from_save_str(text: &str) -> core::result::Result<Self, SaveError> {
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != SAVE_LINES {
            return Err(SaveError::LineCount {
                expected: SAVE_LINES,
                found: lines.len(),
            });
        }

        let mut boards = Vec::with_capacity(SAVE_LINES);
        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            let rows: BoardRows = serde_json::from_str(line).map_err(|source| SaveError::Json {
                line: line_no,
                source,
            })?;
            let board = Board::from_rows(rows).map_err(|_| SaveError::Shape { line: line_no })?;
            boards.push(board);
        }

        let mut boards = boards.into_iter();
        let mut next = || boards.next().unwrap_or_default();
        Ok(Self::from_boards(next(), next(), next(), next()))
    }
}
