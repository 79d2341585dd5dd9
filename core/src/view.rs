use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// Render data for one board cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileView {
    pub id: TileId,
    pub points: u32,
    pub used: bool,
}

/// The full 5×4 grid in row-major order. Missing dataset entries still get a tile.
pub fn board_tiles(state: &BoardState) -> Vec<TileView> {
    TileId::all()
        .map(|id| TileView {
            id,
            points: id.points(),
            used: state.is_used(id),
        })
        .collect()
}

/// Category names for the header row, blank where the dataset has no category.
pub fn category_headers(dataset: &Dataset) -> Vec<String> {
    (0..COLUMNS)
        .map(|column| {
            dataset
                .category(column)
                .map(|category| category.name.clone())
                .unwrap_or_default()
        })
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnswerReveal {
    /// Nothing to reveal: neither the answer nor the control is shown.
    Unavailable,
    /// Control visible, answer collapsed.
    Hidden,
    Shown,
}

/// Render data for the question panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    pub tile: TileId,
    pub category: String,
    pub points: u32,
    pub text: String,
    pub image: Option<String>,
    pub answer: String,
    pub reveal: AnswerReveal,
}

impl QuestionCard {
    pub fn show(dataset: &Dataset, tile: TileId) -> Result<Self> {
        let (category, question) = dataset.question_at(tile)?;
        let reveal = if category.has_revealable_answer(question) {
            AnswerReveal::Hidden
        } else {
            AnswerReveal::Unavailable
        };
        Ok(Self {
            tile,
            category: category.name.clone(),
            points: tile.points(),
            text: question.text.clone(),
            image: question.image.clone(),
            answer: question.answer.clone(),
            reveal,
        })
    }

    pub fn reveal_answer(&mut self) -> MarkOutcome {
        match self.reveal {
            AnswerReveal::Hidden => {
                self.reveal = AnswerReveal::Shown;
                MarkOutcome::Changed
            }
            AnswerReveal::Unavailable | AnswerReveal::Shown => MarkOutcome::NoChange,
        }
    }

    pub const fn shows_reveal_control(&self) -> bool {
        matches!(self.reveal, AnswerReveal::Hidden)
    }

    pub const fn shows_answer(&self) -> bool {
        matches!(self.reveal, AnswerReveal::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::full_dataset;
    use alloc::vec::Vec;

    #[test]
    fn board_has_twenty_tiles_with_row_points() {
        let tiles = board_tiles(&BoardState::new());
        assert_eq!(tiles.len(), 20);
        for (index, tile) in tiles.iter().enumerate() {
            let level = index / usize::from(COLUMNS);
            assert_eq!(tile.points, (level as u32 + 1) * 10);
            assert_eq!(usize::from(tile.id.level), level);
            assert!(!tile.used);
        }
        for column in 0..COLUMNS {
            let points: Vec<_> = tiles
                .iter()
                .filter(|tile| tile.id.column == column)
                .map(|tile| tile.points)
                .collect();
            assert_eq!(points, [10, 20, 30, 40]);
        }
    }

    #[test]
    fn board_reproduces_used_pattern() {
        // every subset of the first column plus a few scattered tiles
        let scattered = [TileId::new(4, 0), TileId::new(2, 2), TileId::new(3, 3)];
        for mask in 0u8..16 {
            let used: Vec<_> = (0..LEVELS)
                .filter(|&level| mask & (1 << level) != 0)
                .map(|level| TileId::new(0, level))
                .chain(scattered)
                .collect();
            let state = BoardState::from_tiles(used.iter().copied());
            for tile in board_tiles(&state) {
                assert_eq!(tile.used, used.contains(&tile.id), "{}", tile.id);
            }
        }
    }

    #[test]
    fn headers_pad_missing_categories() {
        let mut dataset = full_dataset();
        dataset.categories.truncate(2);
        assert_eq!(
            category_headers(&dataset),
            ["Category 0", "Category 1", "", "", ""]
        );
    }

    #[test]
    fn empty_answer_hides_control_and_answer() {
        let mut dataset = full_dataset();
        dataset.categories[0].questions[0].answer.clear();

        let mut card = QuestionCard::show(&dataset, TileId::new(0, 0)).unwrap();
        assert_eq!(card.reveal, AnswerReveal::Unavailable);
        assert!(!card.shows_reveal_control());
        assert!(!card.shows_answer());
        assert_eq!(card.reveal_answer(), MarkOutcome::NoChange);
        assert!(!card.shows_answer());
    }

    #[test]
    fn answer_is_collapsed_until_revealed() {
        let mut dataset = full_dataset();
        dataset.categories[0].questions[0].answer = "42".into();

        let mut card = QuestionCard::show(&dataset, TileId::new(0, 0)).unwrap();
        assert_eq!(card.category, "Category 0");
        assert_eq!(card.points, 10);
        assert_eq!(card.text, "Question 0/0");
        assert!(card.shows_reveal_control());
        assert!(!card.shows_answer());

        assert_eq!(card.reveal_answer(), MarkOutcome::Changed);
        assert!(card.shows_answer());
        assert!(!card.shows_reveal_control());
        assert_eq!(card.reveal_answer(), MarkOutcome::NoChange);
    }

    #[test]
    fn activity_category_never_reveals() {
        let mut dataset = full_dataset();
        dataset.categories[1].is_activity = true;
        let card = QuestionCard::show(&dataset, TileId::new(1, 3)).unwrap();
        assert_eq!(card.reveal, AnswerReveal::Unavailable);
    }

    #[test]
    fn image_comes_from_question_data() {
        let mut dataset = full_dataset();
        dataset.categories[2].questions[1].image = Some("img/bridge.jpg".into());
        let card = QuestionCard::show(&dataset, TileId::new(2, 1)).unwrap();
        assert_eq!(card.image.as_deref(), Some("img/bridge.jpg"));
        let plain = QuestionCard::show(&dataset, TileId::new(2, 2)).unwrap();
        assert_eq!(plain.image, None);
    }

    #[test]
    fn displayed_points_follow_level_not_authored_value() {
        let mut dataset = full_dataset();
        dataset.categories[0].questions[3].points = 500;
        let card = QuestionCard::show(&dataset, TileId::new(0, 3)).unwrap();
        assert_eq!(card.points, 40);
    }
}
