//! Mapping between the `A1`..`H8` notation typed by players and zero-based
//! `(row, column)` board coordinates. Letters name columns, digits name rows.

use alloc::string::String;

use crate::*;

const COLUMN_LABELS: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const ROW_LABELS: [char; BOARD_SIZE as usize] = ['1', '2', '3', '4', '5', '6', '7', '8'];

pub fn column_label(column: Coord) -> char {
    COLUMN_LABELS[usize::from(column)]
}

pub fn row_label(row: Coord) -> char {
    ROW_LABELS[usize::from(row)]
}

fn column_index(letter: char) -> Option<Coord> {
    let letter = letter.to_ascii_uppercase();
    COLUMN_LABELS
        .iter()
        .position(|&label| label == letter)
        .and_then(|index| index.try_into().ok())
}

fn row_index(digit: char) -> Option<Coord> {
    ROW_LABELS
        .iter()
        .position(|&label| label == digit)
        .and_then(|index| index.try_into().ok())
}

/// Parses a two character coordinate such as `g5` or `A1`.
///
/// A trailing line terminator is ignored. Any other whitespace makes the
/// coordinate invalid. The letter is case-insensitive.
pub fn parse_coordinate(text: &str) -> Result<Coord2> {
    let mut chars = text.trim_end_matches(['\r', '\n']).chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(GameError::InvalidCoordinate);
    };

    let column = column_index(letter).ok_or(GameError::InvalidCoordinate)?;
    let row = row_index(digit).ok_or(GameError::InvalidCoordinate)?;
    Ok((row, column))
}

pub fn format_coordinate((row, column): Coord2) -> String {
    let mut text = String::with_capacity(2);
    text.push(column_label(column));
    text.push(row_label(row));
    text
}
