//! Colorized, human-readable rendering of the game state.
//!
//! This module only *reads* the engine's state. Red suits are printed in
//! red, black suits in bright black, and face-down cards as a bare "X",
//! mirroring a physical table where hidden cards show only their backs.

use colored::Colorize;

use crate::card::{Card, Color, LabelStyle, Suit};
use crate::game::GameState;

/// Clear the terminal and move the cursor home (ANSI).
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

/// Format one card for display: its colored label if face-up, "X" if not.
pub fn format_card(card: Card, style: LabelStyle) -> String {
    if !card.is_face_up() {
        return "X".to_string();
    }
    let label = card.label(style);
    match card.color() {
        Color::Red => label.red().to_string(),
        Color::Black => label.bright_black().to_string(),
    }
}

/// Render the foundations row, one line per suit, top card or "Empty".
pub fn render_foundations(game: &GameState) -> String {
    let mut s = String::new();
    s.push_str("Foundation Piles:\n");
    for &suit in Suit::ALL.iter() {
        let top = match game.foundation(suit).last() {
            Some(&card) => format_card(card, game.labels),
            None => "Empty".to_string(),
        };
        s.push_str(&format!(
            "{}{} Foundation: {}\n",
            "| ".bright_red(),
            suit.name(game.labels),
            top
        ));
    }
    s
}

/// Render the seven tableau piles, one line each, bottom-to-top.
pub fn render_tableaus(game: &GameState) -> String {
    let mut s = String::new();
    s.push_str("Tableau Piles:\n");
    for (i, pile) in game.tableaus.iter().enumerate() {
        let cards = if pile.is_empty() {
            "Empty".to_string()
        } else {
            pile.iter()
                .map(|&card| format_card(card, game.labels))
                .collect::<Vec<_>>()
                .join(", ")
        };
        s.push_str(&format!("{}Pile {}: {}\n", "| ".bright_red(), i + 1, cards));
    }
    s
}

/// Render the stock: its size plus the current front (drawable) card.
pub fn render_stock(game: &GameState) -> String {
    let mut s = String::new();
    s.push_str("Stock Pile:\n");
    s.push_str(&format!(
        "{}Cards remaining: {}\n",
        "| ".bright_red(),
        game.stock.len()
    ));
    let front = match game.stock.front() {
        // The front card is shown as a peek even though it is face-down in
        // the pile; the player decides with it in view.
        Some(&card) => {
            let mut peek = card;
            peek.reveal();
            format_card(peek, game.labels)
        }
        None => "Empty".to_string(),
    };
    s.push_str(&format!("{}Next card: {}\n", "| ".bright_red(), front));
    s
}

/// Print the whole board: separator, foundations, tableaus, stock.
pub fn print_board(game: &GameState) {
    let rule = "-".repeat(50).bright_black();
    println!("{rule}");
    print!("{}", render_foundations(game));
    println!();
    print!("{}", render_tableaus(game));
    println!();
    print!("{}", render_stock(game));
    println!("{rule}");
}
