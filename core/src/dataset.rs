use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> core::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    /// Authored value, kept only for consistency checks; the board shows [`points_for_level`].
    #[serde(deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub answer: String,
    /// Optional media reference (an image URL relative to the page).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_activity: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
}

impl Category {
    /// Activity categories are open-ended prompts, their answers are never revealed.
    pub fn has_revealable_answer(&self, question: &Question) -> bool {
        !self.is_activity && !question.answer.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| BoardError::Dataset(err.to_string()))
    }

    /// Falls back to an empty dataset when loading failed, so the board can still render.
    pub fn or_empty<E: Display>(loaded: core::result::Result<Self, E>) -> Self {
        match loaded {
            Ok(dataset) => {
                log::info!("loaded {} categories", dataset.categories.len());
                dataset
            }
            Err(err) => {
                log::error!("Error loading questions: {}", err);
                Self::empty()
            }
        }
    }

    pub fn category(&self, column: u8) -> Option<&Category> {
        self.categories.get(usize::from(column))
    }

    pub fn question_at(&self, tile: TileId) -> Result<(&Category, &Question)> {
        let TileId { column, level } = tile;
        let category = self
            .category(column)
            .ok_or(BoardError::InvalidSelection { column, level })?;
        let question = category
            .questions
            .get(usize::from(level))
            .ok_or(BoardError::InvalidSelection { column, level })?;
        Ok((category, question))
    }

    /// Questions on the board whose authored points disagree with their level.
    ///
    /// A zero `points` counts as "not authored" and is never reported.
    pub fn points_mismatches(&self) -> Vec<(TileId, u32)> {
        TileId::all()
            .filter_map(|tile| {
                let (_, question) = self.question_at(tile).ok()?;
                (question.points != 0 && question.points != tile.points())
                    .then_some((tile, question.points))
            })
            .collect()
    }
}
