use std::io::{BufRead, Write};

use battleboats_core::{
    BattleEngine, EngineState, GameError, RandomFleetGenerator, ShotOutcome, format_coordinate,
};
use rand::Rng;

use crate::console::Console;
use crate::store::ProgressStore;

pub const PLACE_PROMPT: &str = "Enter a coordinate for your boat to go in: ";
pub const GUESS_PROMPT: &str = "Guess the computer's boat location: ";

/// Drives one game from placement through to a winner, saving as it goes.
pub struct Session<'a, R, W, G: ?Sized> {
    console: &'a mut Console<R, W>,
    store: &'a ProgressStore,
    rng: &'a mut G,
}

impl<'a, R, W, G> Session<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    pub fn new(console: &'a mut Console<R, W>, store: &'a ProgressStore, rng: &'a mut G) -> Self {
        Self {
            console,
            store,
            rng,
        }
    }

    /// Plays `engine` to the end and returns the terminal state.
    pub fn run(mut self, mut engine: BattleEngine) -> anyhow::Result<EngineState> {
        self.console.say(engine.player_board())?;

        if engine.state().is_placing() {
            self.place_fleet(&mut engine)?;
        }

        while !engine.is_finished() {
            self.console.say(engine.player_tracking())?;
            self.player_turn(&mut engine)?;
            if engine.is_finished() {
                break;
            }
            self.store.save(&engine)?;

            self.computer_turn(&mut engine)?;
            if engine.is_finished() {
                break;
            }
            self.store.save(&engine)?;
        }

        self.finish(&engine)?;
        Ok(engine.state())
    }

    fn place_fleet(&mut self, engine: &mut BattleEngine) -> anyhow::Result<()> {
        while engine.boats_to_place() > 0 {
            let coords = self.console.prompt_coordinate(PLACE_PROMPT)?;
            match engine.place_player_boat(coords) {
                Ok(_) => {}
                Err(GameError::BoatAlreadyPlaced) => {
                    self.console
                        .say("You have already placed a boat here! Try again")?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            // the computer fleet goes into the same save as the last player boat
            if engine.boats_to_place() == 0 {
                self.place_computer_fleet(engine)?;
            }
            self.console.say(engine.player_board())?;
            self.store.save(engine)?;
        }

        if engine.state().is_placing() {
            self.place_computer_fleet(engine)?;
            self.store.save(engine)?;
        }
        Ok(())
    }

    fn place_computer_fleet(&mut self, engine: &mut BattleEngine) -> anyhow::Result<()> {
        engine.place_computer_fleet(&RandomFleetGenerator::default(), &mut *self.rng)?;
        log::debug!("computer fleet placed");
        Ok(())
    }

    fn player_turn(&mut self, engine: &mut BattleEngine) -> anyhow::Result<()> {
        loop {
            let coords = self.console.prompt_coordinate(GUESS_PROMPT)?;
            match engine.player_guess(coords) {
                Ok(outcome) if outcome.is_hit() => {
                    return self.console.say("You have hit the computer's boat!");
                }
                Ok(_) => return self.console.say("You missed"),
                Err(GameError::AlreadyGuessed) => {
                    self.console.say("You have already guessed here! Try again")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn computer_turn(&mut self, engine: &mut BattleEngine) -> anyhow::Result<()> {
        let (coords, outcome) = engine.computer_guess(&mut *self.rng)?;
        self.console.say(format_args!(
            "Computer has guessed coordinate {}",
            format_coordinate(coords)
        ))?;
        match outcome {
            ShotOutcome::Hit | ShotOutcome::Won => self.console.say("Computer has hit!"),
            ShotOutcome::Miss => self.console.say("Computer has missed"),
        }
    }

    fn finish(&mut self, engine: &BattleEngine) -> anyhow::Result<()> {
        match engine.state() {
            EngineState::PlayerWon => self.console.say("Player has won!")?,
            EngineState::ComputerWon => self.console.say("Computer has won!")?,
            EngineState::Placing | EngineState::Guessing => return Ok(()),
        }
        self.store.wipe()
    }
}
