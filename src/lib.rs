//! Single-player Blackjack (21) against a dealer who draws to a fixed threshold.
//!
//! [`game::BlackjackGame`] deals and drives both turn loops through a [`console::Table`],
//! [`outcome::decide`] settles the round, and [`session::run`] wraps rounds into a
//! session whose win rate lands on the [`leaderboard::Leaderboard`].

pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod leaderboard;
pub mod outcome;
pub mod session;
pub mod strategy;

pub use deck::{Card, Deck, Rank, Suit};
pub use game::{BlackjackGame, GameRules, RoundResult};
pub use hand::{hand_total, Hand};
pub use outcome::{decide, Finish, Outcome};
