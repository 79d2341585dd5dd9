use alloc::string::ToString;
use serde_json::Value;

use crate::*;

/// Durable key-value slot holding the serialized board state.
pub trait StateStore {
    /// Stored value, `None` when absent or not valid JSON.
    fn read(&self) -> Option<Value>;

    /// Overwrites the stored value.
    fn write(&mut self, value: &Value) -> Result<()>;
}

/// Reads and writes [`BoardState`] through a [`StateStore`], treating stored data as untrusted.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: StateStore> Persistence<S> {
    pub const USED_TILES_FIELD: &'static str = "usedTiles";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> BoardState {
        match self.store.read() {
            Some(value) => Self::normalize(&value),
            None => BoardState::default(),
        }
    }

    pub fn save(&mut self, state: &BoardState) {
        if let Err(err) = Self::encode(state).and_then(|value| self.store.write(&value)) {
            log::error!("Could not save board state: {}", err);
        }
    }

    pub fn encode(state: &BoardState) -> Result<Value> {
        serde_json::to_value(state).map_err(|err| BoardError::Storage(err.to_string()))
    }

    /// Keeps every valid tile identifier found under `usedTiles` and drops the rest.
    pub fn normalize(value: &Value) -> BoardState {
        let Some(entries) = value.get(Self::USED_TILES_FIELD).and_then(Value::as_array) else {
            log::warn!("stored board state has no usedTiles list, starting fresh");
            return BoardState::default();
        };

        BoardState::from_tiles(entries.iter().filter_map(|entry| {
            let tile = entry.as_str().and_then(|raw| raw.parse::<TileId>().ok());
            if tile.is_none() {
                log::warn!("dropping invalid stored tile {}", entry);
            }
            tile
        }))
    }
}

/// In-memory [`StateStore`] that counts writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<Value>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: Value) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Option<Value> {
        self.value.clone()
    }

    fn write(&mut self, value: &Value) -> Result<()> {
        self.value = Some(value.clone());
        self.writes += 1;
        Ok(())
    }
}
