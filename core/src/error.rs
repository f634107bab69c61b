use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    #[error("A boat is already placed there")]
    BoatAlreadyPlaced,
    #[error("That cell was already guessed")]
    AlreadyGuessed,
    #[error("Player fleet is not fully placed yet")]
    FleetIncomplete,
    #[error("Move is not allowed in the current phase")]
    WrongPhase,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("No free cells left on the board")]
    BoardFull,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("expected {expected} board lines, found {found}")]
    LineCount { expected: usize, found: usize },
    #[error("board on line {line} is not valid JSON")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("board on line {line} has the wrong shape")]
    Shape { line: usize },
}
