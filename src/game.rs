//! Game-level state: tableau piles, stock, and foundations.
//
//! This module defines `GameState`, which owns every card for the life of
//! one game session:
//!   - seven tableau piles (stored bottom-to-top)
//!   - the face-down stock, with the *front* being the next drawable card
//!   - four foundation piles, one per suit in `Suit::ALL` order.
//!
//! Dealing follows the classic triangular layout: pile i receives i+1
//! cards from the front of the shuffled deck, the remaining 24 become the
//! stock, and exactly the last card of each tableau pile is revealed.

use core::fmt;
use std::collections::VecDeque;

use crate::card::{CARDS_PER_DECK, Card, LabelStyle, NUM_RANKS, Suit};

/// Number of tableau piles.
pub const NUM_TABLEAUS: usize = 7;
/// Number of foundation piles (one per suit).
pub const NUM_FOUNDATIONS: usize = 4;

/// Why a deal was refused. These are construction-time precondition
/// failures; a deck produced by `deck::standard_deck` can never trigger
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealError {
    /// The input deck did not hold exactly 52 cards.
    WrongCount(usize),
    /// The same (suit, rank) identity appeared twice.
    DuplicateCard(Card),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::WrongCount(n) => {
                write!(f, "deck holds {n} cards, expected {CARDS_PER_DECK}")
            }
            DealError::DuplicateCard(card) => write!(f, "duplicate card in deck: {card}"),
        }
    }
}

impl std::error::Error for DealError {}

/// Complete state of one patience game.
///
/// The union of all piles is always exactly the 52 distinct (suit, rank)
/// pairs; moves transfer cards wholesale between piles and never duplicate
/// or drop one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The seven tableau piles, each stored bottom-to-top.
    pub tableaus: [Vec<Card>; NUM_TABLEAUS],
    /// Face-down reserve; the front is the next drawable card. Cycling
    /// rotates the front to the back, so a `VecDeque` avoids reshuffling
    /// storage on every draw.
    pub stock: VecDeque<Card>,
    /// Foundation piles indexed by suit (`Suit::ALL` order), each built
    /// Ace up to King.
    pub foundations: [Vec<Card>; NUM_FOUNDATIONS],
    /// Label style used when rendering this game's cards.
    pub labels: LabelStyle,
}

impl GameState {
    /// Deal a shuffled deck into the initial layout.
    ///
    /// Pile i (0-based) takes the next i+1 cards from the front of the
    /// deck; the 24 left over become the stock. Only the last card of each
    /// tableau pile is turned face-up. Foundations start empty.
    pub fn deal(deck: Vec<Card>, labels: LabelStyle) -> Result<Self, DealError> {
        if deck.len() != CARDS_PER_DECK as usize {
            return Err(DealError::WrongCount(deck.len()));
        }
        let mut seen = [false; CARDS_PER_DECK as usize];
        for card in &deck {
            let idx = card.index() as usize;
            if seen[idx] {
                return Err(DealError::DuplicateCard(*card));
            }
            seen[idx] = true;
        }

        let mut cards = deck.into_iter();
        let mut tableaus: [Vec<Card>; NUM_TABLEAUS] = Default::default();
        for (i, pile) in tableaus.iter_mut().enumerate() {
            pile.extend(cards.by_ref().take(i + 1));
            if let Some(top) = pile.last_mut() {
                top.reveal();
            }
        }
        let stock: VecDeque<Card> = cards.collect();

        Ok(GameState {
            tableaus,
            stock,
            foundations: Default::default(),
            labels,
        })
    }

    /// The foundation pile for the given suit.
    #[inline]
    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit as usize]
    }

    /// True once every foundation holds all 13 cards of its suit.
    ///
    /// Foundations only grow one rank at a time within one suit, so a full
    /// pile is necessarily Ace through King.
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.len() == NUM_RANKS as usize)
    }

    /// Total number of cards across all piles. Always 52 for any state
    /// produced by `deal` and mutated through `attempt_move`.
    pub fn card_count(&self) -> usize {
        let tableau: usize = self.tableaus.iter().map(Vec::len).sum();
        let foundation: usize = self.foundations.iter().map(Vec::len).sum();
        tableau + foundation + self.stock.len()
    }
}
