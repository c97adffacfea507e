//! Pure move-legality predicates.
//!
//! Nothing in this module mutates state; the executor in `moves` consults
//! these predicates before touching any pile. Slices of cards are ordered
//! bottom-to-top, matching pile storage, so the last element of a pile
//! slice is its top card.

use crate::card::{Card, Rank};

/// True if the slice forms a movable run: each card is exactly one rank
/// below the card beneath it, with alternating colors.
///
/// Empty and single-card slices are trivially valid.
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        let below = pair[0]; // deeper in the pile
        let above = pair[1]; // stacked on top of it
        below.rank().number() == above.rank().number() + 1 && below.color() != above.color()
    })
}

/// True if `card` may be placed on top of the given tableau pile.
///
/// An empty tableau pile accepts only a King; otherwise the pile's top
/// card must be one rank higher than `card` and of the opposite color.
pub fn can_place_on_tableau(pile: &[Card], card: Card) -> bool {
    match pile.last() {
        None => card.rank() == Rank::King,
        Some(&top) => {
            top.rank().number() == card.rank().number() + 1 && top.color() != card.color()
        }
    }
}

/// True if `card` may be placed on top of the given foundation pile.
///
/// An empty foundation accepts only an Ace; otherwise the foundation is
/// built up by exactly one rank within a single suit.
pub fn can_place_on_foundation(foundation: &[Card], card: Card) -> bool {
    match foundation.last() {
        None => card.rank() == Rank::Ace,
        Some(&top) => {
            top.suit() == card.suit() && top.rank().number() + 1 == card.rank().number()
        }
    }
}
