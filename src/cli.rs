//! Interactive menu loop: prompting, input translation, and messages.
//!
//! All game logic lives in the engine; this module renders state via
//! `display`, reads user intents from stdin, translates 1-based pile
//! numbers to the engine's 0-based indices, and surfaces rejections as
//! messages before re-prompting. Only an explicit quit (or EOF on stdin)
//! or a completed game ends the loop.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

use colored::Colorize;

use crate::display;
use crate::game::GameState;
use crate::moves::Move;

/// How long rejection messages stay on screen before the next frame.
const MESSAGE_PAUSE: Duration = Duration::from_millis(1200);

/// Run one game to completion: quit, EOF, or a win.
pub fn game_loop(game: &mut GameState) {
    loop {
        display::clear_screen();
        display::print_board(game);
        print_menu();

        let Some(choice) = prompt("Option > (1-6): ") else {
            // EOF on stdin: treat like quit.
            println!("Game over.");
            return;
        };

        let mv = match choice.trim() {
            "1" => prompt_draw_to_tableau(game),
            "2" => prompt_tableau_to_tableau(),
            "3" => prompt_tableau_to_foundation(),
            "4" => Some(Move::CycleStock),
            "5" => Some(Move::StockToFoundation),
            "6" => {
                println!("Game over.");
                return;
            }
            _ => {
                pause_with_message("Invalid choice. Try again.");
                continue;
            }
        };
        let Some(mv) = mv else {
            pause_with_message("Invalid input. Try again.");
            continue;
        };

        if let Err(err) = game.attempt_move(mv) {
            pause_with_message(&format!("Invalid move: {err}."));
            continue;
        }

        if game.is_won() {
            display::clear_screen();
            display::print_board(game);
            println!("Congratulations! You won!");
            return;
        }
    }
}

fn print_menu() {
    let item = |n: &str, text: &str| {
        println!(
            "{}{}{} {}",
            "[".bright_black(),
            n.bright_red(),
            "]".bright_black(),
            text
        );
    };
    item("1", "Move card from stock to tableau pile");
    item("2", "Move cards between tableau piles");
    item("3", "Move card from tableau pile to foundation");
    item("4", "Cycle the stock pile");
    item("5", "Move card from stock to foundation");
    item("6", "Quit");
    println!();
}

/// Print a prompt and read one line; `None` on EOF or a read error.
fn prompt(message: &str) -> Option<String> {
    print!(
        "{}{}{} {}",
        "[".bright_black(),
        "?".bright_red(),
        "]".bright_black(),
        message
    );
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Prompt for a 1-based pile number and translate to a 0-based index.
///
/// Parse failures and zero return `None`; numbers past 7 are forwarded so
/// the engine rejects them as out of range.
fn prompt_pile(message: &str) -> Option<usize> {
    let line = prompt(message)?;
    let n: usize = line.trim().parse().ok()?;
    n.checked_sub(1)
}

fn prompt_draw_to_tableau(game: &GameState) -> Option<Move> {
    if let Some(&front) = game.stock.front() {
        let mut peek = front;
        peek.reveal();
        println!(
            "Next card in stock: {}",
            display::format_card(peek, game.labels)
        );
    }
    let dst = prompt_pile("Choose pile (1-7): ")?;
    Some(Move::DrawToTableau { dst })
}

fn prompt_tableau_to_tableau() -> Option<Move> {
    let src = prompt_pile("Move from pile (1-7): ")?;
    let dst = prompt_pile("Move to pile (1-7): ")?;
    let count: usize = prompt("How many cards? ")?.trim().parse().ok()?;
    Some(Move::TableauToTableau { src, dst, count })
}

fn prompt_tableau_to_foundation() -> Option<Move> {
    let src = prompt_pile("Move from pile (1-7): ")?;
    Some(Move::TableauToFoundation { src })
}

fn pause_with_message(message: &str) {
    println!("{message}");
    sleep(MESSAGE_PAUSE);
}
