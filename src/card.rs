//! Card, Suit, and Rank types for a standard 52-card deck.
//!
//! - `Card` pairs an immutable (suit, rank) identity with a mutable
//!   face-up flag.
//! - `Suit` and `Rank` give human-readable structure on top of that.
//!
//! The face-up flag only ever moves in one direction: `reveal()` turns a
//! card face-up and nothing turns it back. That is deliberate game-state
//! policy, not an oversight.

use core::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Spades = 1,
    Hearts = 2,
    Diamonds = 3,
}

/// The two card colors, derived from the suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Black,
    Red,
}

/// The thirteen ranks in a standard deck.
///
/// Ace is the lowest rank (0 in the discriminant); use `number()` to get
/// the conventional 1..=13 numbering (Ace=1, King=13).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

/// Which label set to use when rendering ranks and suit names.
///
/// Norwegian labels follow the usual Norwegian deck conventions:
/// Ace is `E` (ess), Jack is `Kn` (knekt), Queen is `D` (dame).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelStyle {
    English,
    Norwegian,
}

/// A playing card: immutable (suit, rank) identity plus a face-up flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a new card, face-down.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Return the suit of this card.
    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Return the rank of this card.
    #[inline]
    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Return the color of this card, derived from its suit.
    #[inline]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    /// Whether this card is currently face-up.
    #[inline]
    pub fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up. Idempotent; cards never re-hide.
    #[inline]
    pub fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Identity index in 0..=51, unique per (suit, rank) pair.
    ///
    /// The mapping is:
    /// ```text
    /// index = suit as u8 * 13 + rank as u8
    /// ```
    #[inline]
    pub fn index(self) -> u8 {
        self.suit as u8 * NUM_RANKS + self.rank as u8
    }

    /// Short label like "Q ♥" or, with Norwegian labels, "D ♥".
    pub fn label(self, style: LabelStyle) -> String {
        format!("{} {}", self.rank.label(style), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(LabelStyle::English))
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Clubs,
        Suit::Spades,
        Suit::Hearts,
        Suit::Diamonds,
    ];

    /// The color of this suit.
    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Pip symbol: '♣', '♠', '♥', or '♦'.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }

    /// Full suit name in the requested label style.
    pub fn name(self, style: LabelStyle) -> &'static str {
        match (self, style) {
            (Suit::Clubs, LabelStyle::English) => "Clubs",
            (Suit::Spades, LabelStyle::English) => "Spades",
            (Suit::Hearts, LabelStyle::English) => "Hearts",
            (Suit::Diamonds, LabelStyle::English) => "Diamonds",
            (Suit::Clubs, LabelStyle::Norwegian) => "Kløver",
            (Suit::Spades, LabelStyle::Norwegian) => "Spar",
            (Suit::Hearts, LabelStyle::Norwegian) => "Hjerter",
            (Suit::Diamonds, LabelStyle::Norwegian) => "Ruter",
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Display label for this rank in the requested style.
    ///
    /// Number cards are their number in both styles; court cards and the
    /// Ace differ between English and Norwegian decks.
    pub fn label(self, style: LabelStyle) -> String {
        match (self, style) {
            (Rank::Ace, LabelStyle::English) => "A".to_string(),
            (Rank::Ace, LabelStyle::Norwegian) => "E".to_string(),
            (Rank::Jack, LabelStyle::English) => "J".to_string(),
            (Rank::Jack, LabelStyle::Norwegian) => "Kn".to_string(),
            (Rank::Queen, LabelStyle::English) => "Q".to_string(),
            (Rank::Queen, LabelStyle::Norwegian) => "D".to_string(),
            (Rank::King, _) => "K".to_string(),
            _ => self.number().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_colors_are_correct() {
        for rank in Rank::ALL.iter().copied() {
            assert_eq!(Card::new(Suit::Hearts, rank).color(), Color::Red);
            assert_eq!(Card::new(Suit::Diamonds, rank).color(), Color::Red);
            assert_eq!(Card::new(Suit::Clubs, rank).color(), Color::Black);
            assert_eq!(Card::new(Suit::Spades, rank).color(), Color::Black);
        }
    }

    #[test]
    fn card_indices_cover_the_deck_uniquely() {
        let mut seen = [false; CARDS_PER_DECK as usize];
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                let idx = Card::new(suit, rank).index() as usize;
                assert!(!seen[idx], "duplicate card index {idx}");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn reveal_is_one_way_and_idempotent() {
        let mut card = Card::new(Suit::Spades, Rank::Seven);
        assert!(!card.is_face_up());

        card.reveal();
        assert!(card.is_face_up());

        // A second reveal changes nothing, and nothing re-hides.
        card.reveal();
        assert!(card.is_face_up());
    }

    #[test]
    fn rank_numbers_run_1_to_13() {
        for (i, &rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.number(), i as u8 + 1);
        }
    }

    #[test]
    fn labels_follow_the_requested_style() {
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        let jack = Card::new(Suit::Clubs, Rank::Jack);
        let queen = Card::new(Suit::Diamonds, Rank::Queen);
        let king = Card::new(Suit::Spades, Rank::King);
        let five = Card::new(Suit::Spades, Rank::Five);

        assert_eq!(ace.label(LabelStyle::English), "A ♥");
        assert_eq!(jack.label(LabelStyle::English), "J ♣");
        assert_eq!(queen.label(LabelStyle::English), "Q ♦");

        assert_eq!(ace.label(LabelStyle::Norwegian), "E ♥");
        assert_eq!(jack.label(LabelStyle::Norwegian), "Kn ♣");
        assert_eq!(queen.label(LabelStyle::Norwegian), "D ♦");

        // King and number cards are the same in both styles.
        assert_eq!(king.label(LabelStyle::English), king.label(LabelStyle::Norwegian));
        assert_eq!(five.label(LabelStyle::English), five.label(LabelStyle::Norwegian));
    }

    #[test]
    fn suit_names_localize() {
        assert_eq!(Suit::Clubs.name(LabelStyle::English), "Clubs");
        assert_eq!(Suit::Clubs.name(LabelStyle::Norwegian), "Kløver");
        assert_eq!(Suit::Diamonds.name(LabelStyle::Norwegian), "Ruter");
    }
}
