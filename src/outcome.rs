//! Round resolution: turns the final totals into won / lost / tied.

use serde::Serialize;

use crate::hand::BLACKJACK;

/// Where one side finished the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finish {
    pub point: u8,
    /// Cards drawn during the turn loop, after the opening deal.
    pub turns: usize,
    /// Cards held before the turn loop started.
    pub opening: usize,
}

impl Finish {
    pub fn new(point: u8, turns: usize, opening: usize) -> Self {
        Finish { point, turns, opening }
    }

    pub fn is_natural(&self) -> bool {
        self.point == BLACKJACK && self.opening + self.turns == 2
    }

    pub fn is_bust(&self) -> bool {
        self.point > BLACKJACK
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WinKind {
    Blackjack,
    Higher,
    DealerBust,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LossKind {
    Blackjack,
    Higher,
    PlayerBust,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TieKind {
    Push,
    DoubleBlackjack,
    DoubleBust,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Won(WinKind),
    Lost(LossKind),
    Tied(TieKind),
}

/// Precedence: equal totals tie first, then the higher total wins unless it
/// busted, in which case a second bust on the other side makes it a tie.
pub fn decide(player: Finish, dealer: Finish) -> Outcome {
    if player.point == dealer.point {
        let kind = if player.is_natural() && dealer.is_natural() {
            TieKind::DoubleBlackjack
        } else if player.is_bust() {
            TieKind::DoubleBust
        } else {
            TieKind::Push
        };
        return Outcome::Tied(kind);
    }

    if player.point > dealer.point {
        if !player.is_bust() {
            return Outcome::Won(if player.is_natural() {
                WinKind::Blackjack
            } else {
                WinKind::Higher
            });
        }
        return if dealer.is_bust() {
            Outcome::Tied(TieKind::DoubleBust)
        } else {
            Outcome::Lost(LossKind::PlayerBust)
        };
    }

    if !dealer.is_bust() {
        return Outcome::Lost(if dealer.is_natural() {
            LossKind::Blackjack
        } else {
            LossKind::Higher
        });
    }
    if player.is_bust() {
        Outcome::Tied(TieKind::DoubleBust)
    } else {
        Outcome::Won(WinKind::DealerBust)
    }
}

impl Outcome {
    /// Lines announcing the outcome to the table.
    pub fn message(&self, name: &str, player: u8, dealer: u8) -> Vec<String> {
        let score = format!("Dealer: {dealer}\t{name}: {player}");
        match self {
            Outcome::Won(WinKind::Blackjack) => vec![format!("Blackjack! {name} wins!")],
            Outcome::Won(WinKind::Higher) => vec![format!("{score}  ->  {name} wins!")],
            Outcome::Won(WinKind::DealerBust) => vec![
                "Dealer bust!".to_string(),
                format!("{score}  ->  {name} wins!"),
            ],
            Outcome::Lost(LossKind::Blackjack) => vec!["Blackjack! Dealer wins!".to_string()],
            Outcome::Lost(LossKind::Higher) => vec![format!("{score}  ->  Dealer wins!")],
            Outcome::Lost(LossKind::PlayerBust) => vec![
                format!("{name} bust!"),
                format!("{score}  ->  Dealer wins!"),
            ],
            Outcome::Tied(TieKind::Push) => vec![format!("{score}  ->  Push")],
            Outcome::Tied(TieKind::DoubleBlackjack) => {
                vec!["Two player blackjack!  ->  Push".to_string()]
            }
            Outcome::Tied(TieKind::DoubleBust) => vec!["Two player bust!  ->  Push".to_string()],
        }
    }
}
