use rand::Rng;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Placing,
    Guessing,
    PlayerWon,
    ComputerWon,
}

impl EngineState {
    pub const fn is_placing(self) -> bool {
        matches!(self, Self::Placing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::PlayerWon | Self::ComputerWon)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed { remaining: CellCount },
    FleetComplete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// Hit that sank the defender's last boat.
    Won,
}

impl ShotOutcome {
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit | Self::Won)
    }
}

/// The four boards of a human versus computer game and the phase it is in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleEngine {
    player_board: Board,
    player_tracking: Board,
    computer_board: Board,
    computer_tracking: Board,
    state: EngineState,
}

impl BattleEngine {
    pub fn new() -> Self {
        Self::from_boards(Board::new(), Board::new(), Board::new(), Board::new())
    }

    /// Rebuilds an engine from stored boards, deriving the phase from them.
    ///
    /// Boats the computer already hit still count as placed, so a fleet that
    /// was fully placed never returns to placement. A complete player fleet
    /// facing an empty, never-hit computer board stays in placement until the
    /// computer fleet is generated.
    pub fn from_boards(
        player_board: Board,
        player_tracking: Board,
        computer_board: Board,
        computer_tracking: Board,
    ) -> Self {
        let mut engine = Self {
            player_board,
            player_tracking,
            computer_board,
            computer_tracking,
            state: EngineState::Placing,
        };
        let placing =
            engine.player_boats_placed() < FLEET_SIZE || engine.awaits_computer_fleet();
        engine.state = if placing {
            EngineState::Placing
        } else if engine.computer_board.is_lost() {
            EngineState::PlayerWon
        } else if engine.player_board.is_lost() {
            EngineState::ComputerWon
        } else {
            EngineState::Guessing
        };
        log::debug!("engine restored in state {:?}", engine.state);
        engine
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn player_tracking(&self) -> &Board {
        &self.player_tracking
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn computer_tracking(&self) -> &Board {
        &self.computer_tracking
    }

    /// Boats the player has put down, including ones already hit.
    pub fn player_boats_placed(&self) -> CellCount {
        self.player_board.count(Cell::Boat) + self.player_board.count(Cell::Hit)
    }

    pub fn boats_to_place(&self) -> CellCount {
        FLEET_SIZE.saturating_sub(self.player_boats_placed())
    }

    fn awaits_computer_fleet(&self) -> bool {
        self.computer_board.is_lost() && self.player_tracking.count(Cell::Hit) == 0
    }

    pub fn place_player_boat(&mut self, coords: Coord2) -> Result<PlacementOutcome> {
        let coords = self.player_board.validate_coords(coords)?;
        self.check_placing()?;

        if self.boats_to_place() == 0 {
            return Err(GameError::WrongPhase);
        }
        if !self.player_board[coords].is_empty() {
            return Err(GameError::BoatAlreadyPlaced);
        }

        self.player_board[coords] = Cell::Boat;
        let remaining = self.boats_to_place();
        log::debug!("player boat at {:?}, {} left", coords, remaining);

        Ok(if remaining == 0 {
            PlacementOutcome::FleetComplete
        } else {
            PlacementOutcome::Placed { remaining }
        })
    }

    /// Generates the computer's fleet and starts the guessing phase.
    pub fn place_computer_fleet<G, R>(&mut self, generator: &G, rng: &mut R) -> Result<()>
    where
        G: FleetGenerator,
        R: Rng + ?Sized,
    {
        self.check_placing()?;
        if self.boats_to_place() > 0 {
            return Err(GameError::FleetIncomplete);
        }

        generator.generate(&mut self.computer_board, rng)?;
        self.state = EngineState::Guessing;
        log::info!("computer fleet placed, guessing begins");
        Ok(())
    }

    pub fn player_guess(&mut self, coords: Coord2) -> Result<ShotOutcome> {
        let coords = self.player_tracking.validate_coords(coords)?;
        self.check_guessing()?;

        if !self.player_tracking[coords].is_empty() {
            return Err(GameError::AlreadyGuessed);
        }

        let outcome = if self.computer_board[coords] == Cell::Boat {
            self.player_tracking[coords] = Cell::Hit;
            self.computer_board[coords] = Cell::Empty;
            if self.computer_board.is_lost() {
                self.end_game(EngineState::PlayerWon);
                ShotOutcome::Won
            } else {
                ShotOutcome::Hit
            }
        } else {
            self.player_tracking[coords] = Cell::Miss;
            ShotOutcome::Miss
        };
        log::debug!("player guessed {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Fires at a random cell the computer has not tried yet.
    pub fn computer_guess<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coord2, ShotOutcome)> {
        self.check_guessing()?;

        let coords = draw_cell(&self.computer_tracking, rng, Cell::is_empty)?;
        let outcome = if self.player_board[coords] == Cell::Boat {
            self.player_board[coords] = Cell::Hit;
            self.computer_tracking[coords] = Cell::Hit;
            if self.player_board.is_lost() {
                self.end_game(EngineState::ComputerWon);
                ShotOutcome::Won
            } else {
                ShotOutcome::Hit
            }
        } else {
            self.computer_tracking[coords] = Cell::Miss;
            ShotOutcome::Miss
        };
        log::debug!("computer guessed {:?}: {:?}", coords, outcome);
        Ok((coords, outcome))
    }

    fn end_game(&mut self, state: EngineState) {
        if self.state.is_finished() {
            return;
        }
        log::info!("game over: {:?}", state);
        self.state = state;
    }

    fn check_placing(&self) -> Result<()> {
        match self.state {
            EngineState::Placing => Ok(()),
            EngineState::Guessing => Err(GameError::WrongPhase),
            EngineState::PlayerWon | EngineState::ComputerWon => Err(GameError::AlreadyEnded),
        }
    }

    fn check_guessing(&self) -> Result<()> {
        match self.state {
            EngineState::Guessing => Ok(()),
            EngineState::Placing => Err(GameError::WrongPhase),
            EngineState::PlayerWon | EngineState::ComputerWon => Err(GameError::AlreadyEnded),
        }
    }
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new()
    }
}
