//! Move descriptors, rejection taxonomy, and the atomic executor.
//
//! A `Move` names one of the five user intents the game accepts. The
//! executor `GameState::attempt_move` re-validates every move against the
//! pure predicates in `rules` before touching a single pile, so a rejected
//! move leaves the state byte-for-byte untouched. Rejections are values,
//! never panics: the interactive loop reports them and re-prompts.

use core::fmt;

use log::debug;

use crate::game::{GameState, NUM_TABLEAUS};
use crate::rules;

/// One user intent against the current game state.
///
/// Pile indices are 0-based internally; the CLI translates from the
/// 1-based numbers shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Place the front card of the stock onto a tableau pile.
    DrawToTableau { dst: usize },
    /// Move the top `count`-card run from one tableau pile to another.
    TableauToTableau {
        src: usize,
        dst: usize,
        count: usize,
    },
    /// Move the top card of a tableau pile to its suit's foundation.
    TableauToFoundation { src: usize },
    /// Move the front card of the stock to its suit's foundation.
    StockToFoundation,
    /// Rotate the stock: the front card goes to the back, exposing the
    /// next card. A deliberate one-card peek with wraparound, not a
    /// reshuffle.
    CycleStock,
}

/// Why a move was rejected. None of these is fatal; the session continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The requested run breaks descending-rank/alternating-color order,
    /// or includes face-down cards.
    InvalidSequence,
    /// The destination pile's top card or emptiness rule refuses the card.
    InvalidDestination,
    /// The source pile or stock is empty.
    EmptySource,
    /// A pile index outside 0..=6.
    OutOfRange,
    /// The requested count is zero or exceeds the source pile's size.
    InsufficientCards,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::InvalidSequence => "the selected cards do not form a movable run",
            MoveError::InvalidDestination => "that card cannot be placed there",
            MoveError::EmptySource => "there is no card to move from there",
            MoveError::OutOfRange => "pile number must be between 1 and 7",
            MoveError::InsufficientCards => "the pile does not hold that many cards",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

impl GameState {
    /// Validate and apply one move, atomically.
    ///
    /// On `Err`, no pile has been mutated. On `Ok`, the move has been fully
    /// applied, including the face-up flips of newly exposed cards.
    pub fn attempt_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let outcome = self.apply(mv);
        match &outcome {
            Ok(()) => debug!("applied {mv:?}"),
            Err(err) => debug!("rejected {mv:?}: {err}"),
        }
        outcome
    }

    fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::DrawToTableau { dst } => self.draw_to_tableau(dst),
            Move::TableauToTableau { src, dst, count } => {
                self.tableau_to_tableau(src, dst, count)
            }
            Move::TableauToFoundation { src } => self.tableau_to_foundation(src),
            Move::StockToFoundation => self.stock_to_foundation(),
            Move::CycleStock => self.cycle_stock(),
        }
    }

    fn draw_to_tableau(&mut self, dst: usize) -> Result<(), MoveError> {
        if dst >= NUM_TABLEAUS {
            return Err(MoveError::OutOfRange);
        }
        let front = *self.stock.front().ok_or(MoveError::EmptySource)?;
        if !rules::can_place_on_tableau(&self.tableaus[dst], front) {
            return Err(MoveError::InvalidDestination);
        }

        self.stock.pop_front();
        let mut card = front;
        card.reveal();
        self.tableaus[dst].push(card);
        Ok(())
    }

    fn tableau_to_tableau(&mut self, src: usize, dst: usize, count: usize) -> Result<(), MoveError> {
        if src >= NUM_TABLEAUS || dst >= NUM_TABLEAUS {
            return Err(MoveError::OutOfRange);
        }
        let pile = &self.tableaus[src];
        if pile.is_empty() {
            return Err(MoveError::EmptySource);
        }
        if count == 0 || count > pile.len() {
            return Err(MoveError::InsufficientCards);
        }
        let suffix = &pile[pile.len() - count..];
        // Only face-up runs may move; a buried card cannot be extracted even
        // if the ranks happen to line up.
        if !suffix.iter().all(|c| c.is_face_up()) || !rules::is_valid_sequence(suffix) {
            return Err(MoveError::InvalidSequence);
        }
        // A same-pile move always fails here: the pile's own top can never
        // sit one rank above the run's deepest card.
        if !rules::can_place_on_tableau(&self.tableaus[dst], suffix[0]) {
            return Err(MoveError::InvalidDestination);
        }

        let at = self.tableaus[src].len() - count;
        let mut run = self.tableaus[src].split_off(at);
        if let Some(new_top) = self.tableaus[src].last_mut() {
            new_top.reveal();
        }
        for card in &mut run {
            card.reveal();
        }
        self.tableaus[dst].extend(run);
        Ok(())
    }

    fn tableau_to_foundation(&mut self, src: usize) -> Result<(), MoveError> {
        if src >= NUM_TABLEAUS {
            return Err(MoveError::OutOfRange);
        }
        let top = *self.tableaus[src].last().ok_or(MoveError::EmptySource)?;
        let foundation = top.suit() as usize;
        if !rules::can_place_on_foundation(&self.foundations[foundation], top) {
            return Err(MoveError::InvalidDestination);
        }

        self.tableaus[src].pop();
        if let Some(new_top) = self.tableaus[src].last_mut() {
            new_top.reveal();
        }
        self.foundations[foundation].push(top);
        Ok(())
    }

    fn stock_to_foundation(&mut self) -> Result<(), MoveError> {
        let front = *self.stock.front().ok_or(MoveError::EmptySource)?;
        let foundation = front.suit() as usize;
        if !rules::can_place_on_foundation(&self.foundations[foundation], front) {
            return Err(MoveError::InvalidDestination);
        }

        self.stock.pop_front();
        let mut card = front;
        card.reveal();
        self.foundations[foundation].push(card);
        Ok(())
    }

    fn cycle_stock(&mut self) -> Result<(), MoveError> {
        match self.stock.pop_front() {
            Some(card) => {
                self.stock.push_back(card);
                Ok(())
            }
            None => Err(MoveError::EmptySource),
        }
    }
}
