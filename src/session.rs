use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    console::Table,
    error::SessionError,
    game::{BlackjackGame, RoundResult},
    leaderboard::{Leaderboard, Placement},
    outcome::Outcome,
};

const SEPARATOR_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTotals {
    pub games: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
}

impl SessionTotals {
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(_) => self.won += 1,
            Outcome::Lost(_) => self.lost += 1,
            Outcome::Tied(_) => self.tied += 1,
        }
    }

    /// Win percentage over decisive (non-tied) games.
    pub fn win_rate(&self) -> Result<f64, SessionError> {
        let decisive = self.games - self.tied;
        if decisive == 0 {
            return Err(SessionError::NoDecisiveGames {
                games: self.games,
                tied: self.tied,
            });
        }
        Ok(self.won as f64 / decisive as f64 * 100.0)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub name: Option<String>,
    #[serde(flatten)]
    pub totals: SessionTotals,
    pub win_rate: Option<f64>,
    pub placement: Option<Placement>,
    pub rounds: Vec<RoundResult>,
}

/// Plays rounds until the player declines, then records the score.
pub fn run<T: Table>(
    game: &mut BlackjackGame,
    table: &mut T,
    highscores: &Path,
) -> anyhow::Result<SessionSummary> {
    table.say("--------- Welcome to Blackjack ---------")?;
    table.say("")?;

    let mut totals = SessionTotals::default();
    let mut summary = SessionSummary {
        name: None,
        totals,
        win_rate: None,
        placement: None,
        rounds: Vec::new(),
    };

    if !table.ask_yes_no("Do you want to play blackjack (y/n): ")? {
        table.say("Maybe next time...")?;
        table.say("")?;
        return Ok(summary);
    }

    let name = table.ask_name()?;
    info!(%name, "session started");

    loop {
        let round = game.play_round(&name, table)?;
        totals.record(round.outcome);
        info!(
            outcome = ?round.outcome,
            player = round.player_point,
            dealer = round.dealer_point,
            games = totals.games,
            "round finished"
        );
        summary.rounds.push(round);

        table.say("")?;
        table.say(&"-".repeat(SEPARATOR_WIDTH))?;
        table.say("")?;

        let again = table.ask_yes_no("Do you want to play again (y/n): ")?;
        table.say("")?;
        if !again {
            break;
        }
    }

    table.say(&format!("You played {} games.", totals.games))?;
    table.say(&format!(" -> Won:    {}", totals.won))?;
    table.say(&format!(" -> Lost:   {}", totals.lost))?;
    table.say(&format!(" -> Tied:   {}", totals.tied))?;
    table.say("")?;

    summary.totals = totals;
    match totals.win_rate() {
        Ok(score) => {
            summary.win_rate = Some(score);
            summary.placement = Some(record_score(table, highscores, &name, score)?);
        }
        Err(err) => {
            warn!(%err, "skipping leaderboard update");
            table.say(&format!("ERROR: {err}"))?;
        }
    }
    summary.name = Some(name);

    table.say("Thanks for playing!")?;
    table.say("")?;
    Ok(summary)
}

fn record_score<T: Table>(
    table: &mut T,
    highscores: &Path,
    name: &str,
    score: f64,
) -> anyhow::Result<Placement> {
    let mut board = Leaderboard::load(highscores).context("failed to load high scores")?;
    let placement = board.insert(name, score);
    board.save(highscores).context("failed to save high scores")?;
    info!(?placement, score, "score recorded");

    if placement == Placement::NewHighScore {
        table.say("New High Score!")?;
        table.say("")?;
        table.say("NAME\tSCORE")?;
        for entry in board.entries() {
            table.say(&format!("{}\t{:.3}", entry.name, entry.score))?;
        }
        table.say("")?;
    }
    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        console::Console,
        deck::{Card, Deck, Rank, Suit},
        game::GameRules,
        outcome::{LossKind, TieKind, WinKind},
    };
    use std::{fs, io::Cursor};

    fn stacked_game(order: &[Rank]) -> BlackjackGame {
        let cards: Vec<Card> = order.iter().map(|&r| Card::new(r, Suit::Clubs)).collect();
        BlackjackGame::new(Deck::stacked(&cards), GameRules::default())
    }

    fn play(game: &mut BlackjackGame, input: &str, highscores: &Path) -> (SessionSummary, String) {
        let mut table = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let summary = run(game, &mut table, highscores).unwrap();
        (summary, String::from_utf8(table.into_output()).unwrap())
    }

    #[test]
    fn totals_count_each_round_once() {
        let mut totals = SessionTotals::default();
        totals.record(Outcome::Won(WinKind::Higher));
        totals.record(Outcome::Lost(LossKind::PlayerBust));
        totals.record(Outcome::Tied(TieKind::DoubleBust));
        totals.record(Outcome::Won(WinKind::DealerBust));
        assert_eq!(
            totals,
            SessionTotals {
                games: 4,
                won: 2,
                lost: 1,
                tied: 1
            }
        );
        let rate = totals.win_rate().unwrap();
        assert!((rate - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn all_ties_have_no_win_rate() {
        let mut totals = SessionTotals::default();
        totals.record(Outcome::Tied(TieKind::Push));
        assert_eq!(
            totals.win_rate(),
            Err(SessionError::NoDecisiveGames { games: 1, tied: 1 })
        );
    }

    #[test]
    fn declining_to_play() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        let mut game = stacked_game(&[]);
        let (summary, out) = play(&mut game, "n\n", &path);
        assert!(out.contains("Maybe next time..."));
        assert_eq!(summary.totals.games, 0);
        assert!(summary.name.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn winning_session_tops_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        fs::write(&path, "Tiffany 37.500\n\nMike 0.667\n").unwrap();

        // Round 1: player A+K stands, dealer 9 then Q -> 19, player blackjack.
        // Round 2: player 10+8 stands, dealer 10 then 10 -> 20, dealer wins.
        let mut game = stacked_game(&[
            Rank::Nine,
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Ten,
            Rank::Ten,
            Rank::Eight,
            Rank::Ten,
        ]);
        let input = "y\nAnn\ns\n\ny\ns\n\nn\n";
        let (summary, out) = play(&mut game, input, &path);

        assert_eq!(summary.totals.games, 2);
        assert_eq!(summary.totals.won, 1);
        assert_eq!(summary.totals.lost, 1);
        assert_eq!(summary.win_rate, Some(50.0));
        assert_eq!(summary.placement, Some(Placement::NewHighScore));
        assert_eq!(summary.rounds.len(), 2);
        assert_eq!(summary.rounds[0].player_turns, 0);
        assert_eq!(summary.rounds[1].dealer_cards.len(), 2);
        assert!(out.contains("Blackjack! Ann wins!"));
        assert!(out.contains("Dealer: 20\tAnn: 18  ->  Dealer wins!"));
        assert!(out.contains("You played 2 games."));
        assert!(out.contains("New High Score!"));
        assert!(out.contains("Ann\t50.000"));
        assert!(out.ends_with("Thanks for playing!\n\n"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Ann 50.000\nTiffany 37.500\nMike 0.667\n"
        );
    }

    #[test]
    fn summary_serializes_rounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        let mut game = stacked_game(&[Rank::Nine, Rank::Ace, Rank::King, Rank::Queen]);
        let (summary, _) = play(&mut game, "y\nAnn\ns\n\nn\n", &path);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["games"], 1);
        assert_eq!(json["winRate"], 100.0);
        assert_eq!(json["placement"], "newHighScore");
        let round = &json["rounds"][0];
        assert_eq!(round["outcome"]["won"], "blackjack");
        assert_eq!(round["playerPoint"], 21);
        assert_eq!(round["dealerTurns"], 1);
        assert_eq!(round["playerCards"][0]["rank"], "Ace");
        assert_eq!(round["dealerCards"][1]["suit"], "Clubs");
    }

    #[test]
    fn tied_session_skips_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        fs::write(&path, "Tiffany 37.500\n").unwrap();

        // Player 10+8 stands, dealer 8 then K -> 18.
        let mut game = stacked_game(&[Rank::Eight, Rank::Ten, Rank::Eight, Rank::King]);
        let (summary, out) = play(&mut game, "y\nAnn\ns\n\nn\n", &path);

        assert_eq!(summary.totals.tied, 1);
        assert!(summary.win_rate.is_none());
        assert!(out.contains(
            "ERROR: no decisive games as the number of games (1) is equal to the number of tied (1)."
        ));
        assert!(out.contains("Thanks for playing!"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Tiffany 37.500\n");
    }

    #[test]
    fn losing_session_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        fs::write(&path, "Tiffany 37.500\n").unwrap();

        // Player 10+6 hits 8 -> 24, dealer 9 then 10 -> 19.
        let mut game = stacked_game(&[Rank::Nine, Rank::Ten, Rank::Six, Rank::Eight, Rank::Ten]);
        let (summary, out) = play(&mut game, "y\nAnn\nh\n\nn\n", &path);

        assert_eq!(summary.placement, Some(Placement::Appended));
        assert!(out.contains("Ann bust!"));
        assert!(!out.contains("New High Score!"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Tiffany 37.500\nAnn 0.000\n");
    }
}
