use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of categories shown on the board.
pub const COLUMNS: u8 = 5;

/// Number of point levels per category.
pub const LEVELS: u8 = 4;

/// Total tile count of the board.
pub const TILE_COUNT: usize = (COLUMNS as usize) * (LEVELS as usize);

/// Display value of a level, `(level + 1) * 10`.
pub const fn points_for_level(level: u8) -> u32 {
    (level as u32 + 1) * 10
}

/// One board cell, written as `"<column>-<level>"` wherever it leaves memory.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TileId {
    pub column: u8,
    pub level: u8,
}

impl TileId {
    pub const fn new(column: u8, level: u8) -> Self {
        Self { column, level }
    }

    /// Like [`TileId::new`] but rejects positions outside the board.
    pub fn checked(column: u8, level: u8) -> Result<Self> {
        let tile = Self::new(column, level);
        if tile.in_grid() {
            Ok(tile)
        } else {
            Err(BoardError::InvalidTileId)
        }
    }

    pub const fn in_grid(self) -> bool {
        self.column < COLUMNS && self.level < LEVELS
    }

    pub const fn points(self) -> u32 {
        points_for_level(self.level)
    }

    /// All tiles in render order: level by level, columns left to right.
    pub fn all() -> impl Iterator<Item = TileId> {
        (0..LEVELS).flat_map(|level| (0..COLUMNS).map(move |column| TileId::new(column, level)))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.column, self.level)
    }
}

/// Plain decimal index: digits only, no sign, no leading zero.
fn parse_index(part: &str) -> Result<u8> {
    let canonical = !part.is_empty()
        && part.bytes().all(|b| b.is_ascii_digit())
        && (part.len() == 1 || !part.starts_with('0'));
    if !canonical {
        return Err(BoardError::InvalidTileId);
    }
    part.parse().map_err(|_| BoardError::InvalidTileId)
}

impl FromStr for TileId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let (column, level) = s.split_once('-').ok_or(BoardError::InvalidTileId)?;
        Self::checked(parse_index(column)?, parse_index(level)?)
    }
}

impl From<TileId> for String {
    fn from(tile: TileId) -> Self {
        use alloc::string::ToString;
        tile.to_string()
    }
}

impl TryFrom<String> for TileId {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn tile_id_uses_column_dash_level_format() {
        assert_eq!(TileId::new(3, 1).to_string(), "3-1");
        assert_eq!("4-3".parse::<TileId>(), Ok(TileId::new(4, 3)));
    }

    #[test]
    fn tile_id_rejects_garbage_and_out_of_grid() {
        for raw in [
            "", "3", "a-1", "1-", "5-0", "0-4", "-1-0", "1-2-3", "+1-0", "1-+0", "01-0", "0-00",
            " 1-0", "1-0 ",
        ] {
            assert_eq!(raw.parse::<TileId>(), Err(BoardError::InvalidTileId), "{raw}");
        }
    }

    #[test]
    fn all_tiles_are_row_major() {
        let tiles: Vec<_> = TileId::all().collect();
        assert_eq!(tiles.len(), TILE_COUNT);
        assert_eq!(tiles[0], TileId::new(0, 0));
        assert_eq!(tiles[4], TileId::new(4, 0));
        assert_eq!(tiles[5], TileId::new(0, 1));
        assert_eq!(tiles[19], TileId::new(4, 3));
    }

    #[test]
    fn points_follow_level() {
        let points: Vec<_> = (0..LEVELS).map(points_for_level).collect();
        assert_eq!(points, [10, 20, 30, 40]);
    }
}
