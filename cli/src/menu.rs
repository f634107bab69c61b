use std::io::{BufRead, Write};

use battleboats_core::BattleEngine;
use rand::Rng;

use crate::console::Console;
use crate::session::Session;
use crate::settings::{Settings, pause};
use crate::store::{Progress, ProgressStore};

const MENU: &str = "1.)Play Game\n2.)Read Instructions\n3.)Resume Game\n4.)Quit Game";
pub const INVALID_OPTION: &str = "Please input a valid option";
pub const NEVER_PLAYED: &str = "Cannot resume a game that's never been played! Please play and place at least one boat to resume a game";
pub const NO_DATA: &str = "You have no data saved!";

const BANNER: &str = r#" ____        _   _   _                ____              _
| __ )  __ _| |_| |_| | ___          | __ )  ___   __ _| |_ ___
|  _ \ / _` | __| __| |/ _ \  _____  |  _ \ / _ \ / _` | __/ __|
| |_) | (_| | |_| |_| |  __/ |_____| | |_) | (_) | (_| | |_\__ \
|____/ \__,_|\__|\__|_|\___|         |____/ \___/ \__,_|\__|___/
"#;

const INSTRUCTIONS: &[&str] = &[
    "1.)You will be displayed with a blank fleet",
    "2.)Then, you will be prompted to enter a coordinate to place your boats. You will prompted to do this 5 times with 5 unique locations.",
    "3.)Then, the computer will randomly generate five coordinates for it to place its own boats.",
    "4.)You will then be presented with a tracking board. This is where your hits and misses will be recorded",
    "5.)You will be prompted to input a coordinate to guess where a boat is stored on the computer's board. A hit or miss will be added to your tracking board accordingly",
    "6.)The computer will then guess a coordinate from your board which will be displayed. If the computer has already guessed this location, it will try and guess again.",
    "7.)A message is displayed, confirming whether the boat hit or missed one of your boats",
    "8.)This process continues until there is a winner. The winner will be output. Any data saved throughout the game will be wiped at the point someone wins",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Instructions,
    Resume,
    Quit,
}

impl MenuChoice {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().parse::<i32>().ok()? {
            1 => Some(Self::Play),
            2 => Some(Self::Instructions),
            3 => Some(Self::Resume),
            4 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Top level loop: shows the menu until the player quits.
pub fn run_menu<R, W, G>(
    console: &mut Console<R, W>,
    store: &ProgressStore,
    rng: &mut G,
    settings: &Settings,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        console.say(MENU)?;
        let reply = console.prompt("")?;
        let Some(choice) = MenuChoice::parse(&reply) else {
            console.say(INVALID_OPTION)?;
            continue;
        };
        log::debug!("menu choice {:?}", choice);

        match choice {
            MenuChoice::Play => {
                Session::new(&mut *console, store, &mut *rng).run(BattleEngine::new())?;
            }
            MenuChoice::Instructions => {
                console.say(BANNER)?;
                for line in INSTRUCTIONS {
                    console.say(line)?;
                }
                pause(settings.instructions_pause);
            }
            MenuChoice::Resume => match store.load()? {
                Progress::Missing => console.say(NEVER_PLAYED)?,
                Progress::Empty => {
                    console.say(NO_DATA)?;
                    pause(settings.no_data_pause);
                }
                Progress::Saved(engine) => {
                    Session::new(&mut *console, store, &mut *rng).run(engine)?;
                }
            },
            MenuChoice::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use battleboats_core::{Board, Cell, EngineState};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::session::PLACE_PROMPT;
    use crate::store::tests::TempSave;

    fn run(store: &ProgressStore, input: &str) -> (anyhow::Result<()>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut rng = SmallRng::seed_from_u64(17);
        let result = run_menu(&mut console, store, &mut rng, &Settings::immediate());
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn parses_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Instructions));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Resume));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Quit));
    }

    #[test]
    fn rejects_other_menu_input() {
        for input in ["0", "5", "-1", "", "play", "1.5"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn invalid_option_reprompts_then_quits() {
        let temp = TempSave::new("menu-invalid");

        let (result, output) = run(&temp.0, "9\nabc\n4\n");

        assert!(result.is_ok());
        assert_eq!(output.matches(INVALID_OPTION).count(), 2);
        assert_eq!(output.matches("4.)Quit Game").count(), 3);
    }

    #[test]
    fn undecodable_menu_input_reprompts() {
        let temp = TempSave::new("menu-undecodable");
        let mut input = vec![0xc3, 0x28, b'\n'];
        input.extend_from_slice(b"4\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut rng = SmallRng::seed_from_u64(17);

        let result = run_menu(&mut console, &temp.0, &mut rng, &Settings::immediate());

        assert!(result.is_ok());
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches(INVALID_OPTION).count(), 1);
    }

    #[test]
    fn instructions_return_to_menu() {
        let temp = TempSave::new("menu-instructions");

        let (result, output) = run(&temp.0, "2\n4\n");

        assert!(result.is_ok());
        assert!(output.contains("|____/ \\__,_|\\__|\\__|_|\\___|         |____/"));
        assert!(output.contains("8.)This process continues until there is a winner."));
        assert_eq!(output.matches("1.)Play Game").count(), 2);
    }

    #[test]
    fn resume_without_file_reports_never_played() {
        let temp = TempSave::new("menu-never-played");

        let (result, output) = run(&temp.0, "3\n4\n");

        assert!(result.is_ok());
        assert!(output.contains(NEVER_PLAYED));
    }

    #[test]
    fn resume_after_win_reports_no_data() {
        let temp = TempSave::new("menu-after-win");
        let engine = BattleEngine::from_boards(
            Board::from_boats(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]).unwrap(),
            Board::new(),
            Board::from_boats(&[(5, 5)]).unwrap(),
            Board::new(),
        );
        temp.0.save(&engine).unwrap();

        let (result, output) = run(&temp.0, "3\nF6\n3\n4\n");

        assert!(result.is_ok());
        assert!(output.contains("Player has won!"));
        assert!(output.contains(NO_DATA));
        assert!(!output.contains(NEVER_PLAYED));
    }

    #[test]
    fn resume_mid_placement_asks_only_for_remaining_boats() {
        let temp = TempSave::new("menu-mid-placement");
        let engine = BattleEngine::from_boards(
            Board::from_boats(&[(0, 0), (0, 1), (0, 2)]).unwrap(),
            Board::new(),
            Board::new(),
            Board::new(),
        );
        temp.0.save(&engine).unwrap();

        // input ends at the first guess
        let (result, output) = run(&temp.0, "3\nD1\nE1\n");

        assert!(result.is_err());
        assert_eq!(output.matches(PLACE_PROMPT).count(), 2);
        let Progress::Saved(engine) = temp.0.load().unwrap() else {
            panic!("expected a saved game");
        };
        assert_eq!(engine.state(), EngineState::Guessing);
        assert_eq!(engine.player_board().boat_count(), 5);
        assert_eq!(engine.player_board()[(0, 4)], Cell::Boat);
        assert_eq!(engine.computer_board().boat_count(), 5);
    }

    #[test]
    fn new_game_starts_from_blank_boards() {
        let temp = TempSave::new("menu-new-game");
        let engine = BattleEngine::from_boards(
            Board::from_boats(&[(7, 7)]).unwrap(),
            Board::new(),
            Board::new(),
            Board::new(),
        );
        temp.0.save(&engine).unwrap();

        let (result, output) = run(&temp.0, "1\nA1\n");

        assert!(result.is_err());
        assert_eq!(output.matches(PLACE_PROMPT).count(), 2);
        let Progress::Saved(engine) = temp.0.load().unwrap() else {
            panic!("expected a saved game");
        };
        assert_eq!(engine.player_board().boat_count(), 1);
        assert_eq!(engine.player_board()[(0, 0)], Cell::Boat);
        assert_eq!(engine.player_board()[(7, 7)], Cell::Empty);
    }
}
