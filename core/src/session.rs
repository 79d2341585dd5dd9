use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

pub const RESET_PROMPT: &str = "Are you sure you want to reset the game? All progress will be lost.";

/// Capability to ask the player before destroying progress.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Answers every prompt with a fixed value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActiveView {
    #[default]
    Board,
    Question(QuestionCard),
}

/// Application state of one page load: dataset, used tiles and the view on screen.
#[derive(Debug)]
pub struct GameSession<S> {
    dataset: Dataset,
    board: BoardState,
    persistence: Persistence<S>,
    view: ActiveView,
}

impl<S: StateStore> GameSession<S> {
    /// Builds the session from an already loaded dataset, hydrating used tiles from `store`.
    pub fn start(dataset: Dataset, store: S) -> Self {
        let persistence = Persistence::new(store);
        let mut board = BoardState::new();
        board.hydrate(persistence.load());
        Self {
            dataset,
            board,
            persistence,
            view: ActiveView::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn board_tiles(&self) -> Vec<TileView> {
        board_tiles(&self.board)
    }

    pub fn category_headers(&self) -> Vec<String> {
        category_headers(&self.dataset)
    }

    /// Marks `tile` used, saving only when it was not used before.
    pub fn mark_used(&mut self, tile: TileId) -> MarkOutcome {
        let outcome = self.board.mark_used(tile);
        if outcome.has_update() {
            self.persistence.save(&self.board);
        }
        outcome
    }

    /// Handles a click on a board tile. Used tiles are inert.
    pub fn select_tile(&mut self, tile: TileId) -> bool {
        if self.board.is_used(tile) {
            log::debug!("ignoring used tile {}", tile);
            return false;
        }
        self.mark_used(tile);
        if let Err(err) = self.show_question(tile) {
            log::error!("Could not show question {}: {}", tile, err);
        }
        true
    }

    /// Switches to the question panel, leaving the view untouched if the dataset has no such question.
    pub fn show_question(&mut self, tile: TileId) -> Result<()> {
        let card = QuestionCard::show(&self.dataset, tile)?;
        log::debug!("show question {}", tile);
        self.view = ActiveView::Question(card);
        Ok(())
    }

    pub fn reveal_answer(&mut self) -> bool {
        match &mut self.view {
            ActiveView::Question(card) => card.reveal_answer().has_update(),
            ActiveView::Board => false,
        }
    }

    pub fn show_board(&mut self) -> bool {
        log::debug!("show board");
        self.view = ActiveView::Board;
        true
    }

    /// Clears every used tile and saves, even if nothing was used.
    pub fn reset(&mut self) {
        self.board.reset();
        self.persistence.save(&self.board);
        self.view = ActiveView::Board;
        log::info!("board reset");
    }

    pub fn reset_all(&mut self, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(RESET_PROMPT) {
            log::debug!("reset cancelled");
            return false;
        }
        self.reset();
        true
    }
}
