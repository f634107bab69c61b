use serde::{Deserialize, Serialize};

/// State of a single board cell, serialized as the short tags kept in the
/// progress file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "B")]
    Boat,
    #[serde(rename = "H")]
    Hit,
    #[serde(rename = "M")]
    Miss,
}

impl Cell {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Boat => "B",
            Self::Hit => "H",
            Self::Miss => "M",
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Guess marks, as opposed to boats or open water.
    pub const fn is_mark(self) -> bool {
        matches!(self, Self::Hit | Self::Miss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_serialized_form() {
        for cell in [Cell::Empty, Cell::Boat, Cell::Hit, Cell::Miss] {
            let json = serde_json::to_string(&cell).unwrap();
            assert_eq!(json, alloc::format!("\"{}\"", cell.tag()));
        }
    }

    #[test]
    fn only_hits_and_misses_are_marks() {
        assert!(Cell::Hit.is_mark());
        assert!(Cell::Miss.is_mark());
        assert!(!Cell::Boat.is_mark());
        assert!(!Cell::Empty.is_mark());
    }
}
