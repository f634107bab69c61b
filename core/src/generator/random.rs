use alloc::vec::Vec;
use rand::Rng;

use super::*;

/// Upper bound on blind draws before falling back to picking among the
/// remaining candidates directly.
const MAX_DRAWS: u32 = 1024;

/// Uniformly random `(row, column)` on the board.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Coord2 {
    (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE))
}

/// Draws random cells until one satisfies `accept`.
///
/// Collisions are retried with fresh draws. After `MAX_DRAWS` misses the
/// choice is made uniformly among the accepted cells instead, so the result is
/// still uniform over the candidates and the loop always ends.
pub fn draw_cell<R, F>(board: &Board, rng: &mut R, accept: F) -> Result<Coord2>
where
    R: Rng + ?Sized,
    F: Fn(Cell) -> bool,
{
    if !board.iter().any(|(_, cell)| accept(cell)) {
        return Err(GameError::BoardFull);
    }

    for attempt in 1..=MAX_DRAWS {
        let coords = random_cell(rng);
        if accept(board[coords]) {
            return Ok(coords);
        }
        log::trace!("draw {} collided at {:?}, retrying", attempt, coords);
    }

    let candidates: Vec<Coord2> = board
        .iter()
        .filter(|&(_, cell)| accept(cell))
        .map(|(coords, _)| coords)
        .collect();
    log::debug!(
        "no free cell after {} draws, choosing among {} candidates",
        MAX_DRAWS,
        candidates.len()
    );
    Ok(candidates[rng.random_range(0..candidates.len())])
}

/// Fleet of single-cell boats dropped on uniformly random free cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomFleetGenerator {
    boats: CellCount,
}

impl RandomFleetGenerator {
    pub fn new(boats: CellCount) -> Self {
        Self { boats }
    }
}

impl Default for RandomFleetGenerator {
    fn default() -> Self {
        Self::new(FLEET_SIZE)
    }
}

impl FleetGenerator for RandomFleetGenerator {
    fn generate<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Result<()> {
        let free = board.count(Cell::Empty);
        if free < self.boats {
            log::warn!(
                "Cannot place {} boats, only {} free cells",
                self.boats,
                free
            );
            return Err(GameError::BoardFull);
        }

        for _ in 0..self.boats {
            let coords = draw_cell(board, rng, Cell::is_empty)?;
            board[coords] = Cell::Boat;
            log::trace!("generated boat at {:?}", coords);
        }
        Ok(())
    }
}
