use alloc::collections::BTreeSet;
use serde::Serialize;

use crate::*;

/// Tiles consumed in the current game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    used_tiles: BTreeSet<TileId>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles(tiles: impl IntoIterator<Item = TileId>) -> Self {
        Self {
            used_tiles: tiles.into_iter().collect(),
        }
    }

    pub fn hydrate(&mut self, persisted: BoardState) {
        log::debug!("hydrated {} used tiles", persisted.used_tiles.len());
        *self = persisted;
    }

    pub fn is_used(&self, tile: TileId) -> bool {
        self.used_tiles.contains(&tile)
    }

    pub fn mark_used(&mut self, tile: TileId) -> MarkOutcome {
        if self.used_tiles.insert(tile) {
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        }
    }

    pub fn reset(&mut self) -> MarkOutcome {
        if self.used_tiles.is_empty() {
            MarkOutcome::NoChange
        } else {
            self.used_tiles.clear();
            MarkOutcome::Changed
        }
    }

    pub fn used_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.used_tiles.iter().copied()
    }

    pub fn used_count(&self) -> usize {
        self.used_tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used_tiles.is_empty()
    }
}
