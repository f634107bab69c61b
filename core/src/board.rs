use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rows as they appear in the progress file. Cells written as `null` by older
/// saves load as empty.
pub type BoardRows = Vec<Vec<Option<Cell>>>;

/// One 8×8 grid. Each side owns a primary board holding its boats plus
/// incoming marks, and a tracking board holding the outcome of its own
/// guesses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRows", into = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    pub fn from_rows(rows: BoardRows) -> Result<Self> {
        let size = usize::from(BOARD_SIZE);
        if rows.len() != size || rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidBoardShape);
        }

        let flat: Vec<Cell> = rows
            .into_iter()
            .flatten()
            .map(Option::unwrap_or_default)
            .collect();
        let cells = Array2::from_shape_vec((size, size), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn from_boats(boats: &[Coord2]) -> Result<Self> {
        let mut board = Self::new();
        for &coords in boats {
            board.validate_coords(coords)?;
            board[coords] = Cell::Boat;
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < BOARD_SIZE && coords.1 < BOARD_SIZE {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn count(&self, cell: Cell) -> CellCount {
        self.cells
            .iter()
            .filter(|&&other| other == cell)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn boat_count(&self) -> CellCount {
        self.count(Cell::Boat)
    }

    /// A board is lost once none of its cells holds a boat.
    pub fn is_lost(&self) -> bool {
        !self.cells.iter().any(|&cell| cell == Cell::Boat)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        iter_coords().map(|coords| (coords, self[coords]))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<BoardRows> for Board {
    type Error = GameError;

    fn try_from(rows: BoardRows) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Tab separated grid with column letters across the top and row digits down
/// the side. Empty cells are left blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 0..BOARD_SIZE {
            write!(f, "\t{}", column_label(column))?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{}\t", row_label(row))?;
            for column in 0..BOARD_SIZE {
                write!(f, "{}\t", self[(row, column)].tag())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn new_board_is_empty_and_lost() {
        let board = Board::new();

        assert_eq!(board.count(Cell::Empty), 64);
        assert_eq!(board.boat_count(), 0);
        assert!(board.is_lost());
    }

    #[test]
    fn board_with_a_boat_is_not_lost() {
        let mut board = Board::new();
        board[(3, 4)] = Cell::Boat;

        assert!(!board.is_lost());

        board[(3, 4)] = Cell::Hit;
        assert!(board.is_lost());
    }

    #[test]
    fn from_boats_rejects_out_of_range() {
        assert_eq!(
            Board::from_boats(&[(0, 0), (8, 0)]),
            Err(GameError::InvalidCoordinate)
        );
    }

    #[test]
    fn from_rows_rejects_shape_mismatch() {
        let short: BoardRows = vec![vec![None; 8]; 7];
        assert_eq!(Board::from_rows(short), Err(GameError::InvalidBoardShape));

        let mut ragged: BoardRows = vec![vec![None; 8]; 8];
        ragged[2].push(None);
        assert_eq!(Board::from_rows(ragged), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn null_cells_load_as_empty() {
        let mut rows: BoardRows = vec![vec![None; 8]; 8];
        rows[0][1] = Some(Cell::Boat);

        let board = Board::from_rows(rows).unwrap();

        assert_eq!(board[(0, 1)], Cell::Boat);
        assert_eq!(board[(0, 0)], Cell::Empty);
    }

    #[test]
    fn json_round_trip_keeps_cells() {
        let mut board = Board::from_boats(&[(0, 0), (7, 7)]).unwrap();
        board[(2, 5)] = Cell::Miss;
        board[(7, 7)] = Cell::Hit;

        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with("[[\"B\",\"\""));

        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn rows_are_indexed_by_row_then_column() {
        let board = Board::from_boats(&[(1, 6)]).unwrap();
        let rows = board.to_rows();

        assert_eq!(rows[1][6], Cell::Boat);
        assert_eq!(rows[6][1], Cell::Empty);
    }

    #[test]
    fn display_renders_headers_and_tags() {
        let mut board = Board::from_boats(&[(0, 0)]).unwrap();
        board[(1, 2)] = Cell::Miss;

        let text = board.to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("\tA\tB\tC\tD\tE\tF\tG\tH"));
        assert_eq!(lines.next(), Some("1\tB\t\t\t\t\t\t\t\t"));
        assert_eq!(lines.next(), Some("2\t\t\tM\t\t\t\t\t\t"));
        assert_eq!(text.lines().count(), 9);
    }
}
