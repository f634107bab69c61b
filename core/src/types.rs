/// Single coordinate axis used for board rows and columns.
pub type Coord = u8;

/// Count type used for boat and cell counts.
pub type CellCount = u8;

/// Two-dimensional coordinates `(row, column)`, both zero-based.
pub type Coord2 = (Coord, Coord);

/// Width and height of every board.
pub const BOARD_SIZE: Coord = 8;

/// Number of single-cell boats each side places.
pub const FLEET_SIZE: CellCount = 5;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Every coordinate of a square board in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| (row, column)))
}
