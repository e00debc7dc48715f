//! Interactive terminal blackjack built on the engine.
//!
//! The engine owns all game state; this loop only reads commands and prints
//! the renderable summary.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Game, RoundState};

const RULES: &str = "
=== BLACKJACK RULES ===

=== Game Objective ===
Beat the dealer by getting a hand value closer to 21 than the dealer,
by having the dealer go over 21 (bust), or by getting a BlackJack
(Ace + 10-value card) when the dealer doesn't.

=== Card Values ===
- Ace: 11 or 1 (automatically adjusted to prevent busting)
- Face cards (Jack, Queen, King): 10
- Number cards: their face value (2-10)

=== Game Flow ===
1. You and the dealer each get two cards
2. One of the dealer's cards remains hidden until your turn ends
3. You can repeatedly choose to hit (take a card) or stand (keep your hand)
4. If you go over 21, you bust and lose
5. When you stand, the dealer reveals the hidden card and must hit on 16
   or below, standing on 17 or above

=== Winning Conditions ===
You win with a BlackJack, a final hand closer to 21 than the dealer's, or
when the dealer busts. You lose when you bust, when the dealer's hand is
closer to 21, or when only the dealer has a BlackJack. Equal hands push.
";

const HELP: &str = "
=== GAME HELP ===
- h or hit   - Take another card
- s or stand - Keep your current hand
- r or rules - Display game rules
- q or quit  - Exit the game
";

fn main() {
    println!("{RULES}");
    println!("{HELP}");

    let name = prompt("\nEnter your name: ");
    let name = if name.is_empty() { "Player".to_string() } else { name };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(name, seed);

    loop {
        if !play_round(&mut game) {
            break;
        }

        let again = prompt("\nPlay another round? (y/n): ");
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }

    println!("\nThanks for playing!");
}

/// Plays one round. Returns false when the player quits or a round cannot
/// be started.
fn play_round(game: &mut Game) -> bool {
    if let Err(err) = game.start_round() {
        println!("Error starting round: {err}");
        return false;
    }

    loop {
        println!("\n=== BLACKJACK ===");
        println!("{game}");

        match game.state() {
            RoundState::RoundOver => {
                if let Some(outcome) = game.result() {
                    println!("\n{outcome}");
                }
                return true;
            }
            RoundState::DealerTurn => {
                println!("\nDealer's turn...");
                if let Err(err) = game.dealer_play() {
                    println!("Error during dealer play: {err}");
                    return false;
                }
                continue;
            }
            _ => {}
        }

        let command = prompt("\nEnter command (h/hit, s/stand, r/rules, q/quit): ");
        match command.to_lowercase().as_str() {
            "h" | "hit" => {
                if let Err(err) = game.player_hit() {
                    println!("Error hitting: {err}");
                }
            }
            "s" | "stand" => {
                if let Err(err) = game.player_stand() {
                    println!("Error standing: {err}");
                }
            }
            "r" | "rules" => {
                println!("{RULES}");
                println!("{HELP}");
                prompt("\nPress Enter to continue...");
            }
            "q" | "quit" => return false,
            _ => println!("Invalid command. Try again."),
        }
    }
}

fn prompt(text: &str) -> String {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
