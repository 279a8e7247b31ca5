use serde::Serialize;
use tracing::debug;

use crate::{
    console::Table,
    deck::{Card, Deck},
    error::GameError,
    hand::{Hand, BLACKJACK},
    outcome::{self, Finish, Outcome},
    strategy::{Action, DealerRule, DEFAULT_DEALER_STANDS_ON},
};

pub const DEALER: &str = "Dealer";
const PLAYER_OPENING_CARDS: usize = 2;
const DEALER_OPENING_CARDS: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRules {
    pub dealer_stands_on: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub outcome: Outcome,
    pub player_point: u8,
    pub dealer_point: u8,
    pub player_turns: usize,
    pub dealer_turns: usize,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
}

/// One table: the deck plus the two hands it deals into, reused round after round.
pub struct BlackjackGame {
    pub deck: Deck,
    pub rules: GameRules,
    dealer: DealerRule,
    dealer_hand: Hand,
    player_hand: Hand,
}

impl BlackjackGame {
    pub fn new(deck: Deck, rules: GameRules) -> Self {
        BlackjackGame {
            deck,
            rules,
            dealer: DealerRule::new(rules.dealer_stands_on),
            dealer_hand: Hand::new(),
            player_hand: Hand::new(),
        }
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Clears both hands, then deals one card to the dealer and two to the player.
    pub fn deal_opening(&mut self) {
        self.dealer_hand.clear();
        self.player_hand.clear();
        for _ in 0..DEALER_OPENING_CARDS {
            self.dealer_hand.push(self.deck.draw_card());
        }
        for _ in 0..PLAYER_OPENING_CARDS {
            self.player_hand.push(self.deck.draw_card());
        }
    }

    /// Asks for hit or stand until the player stands or reaches 21 or more.
    /// The first choice is always asked, even on a dealt 21.
    pub fn play_player<T: Table>(
        &mut self,
        name: &str,
        table: &mut T,
    ) -> Result<Finish, GameError> {
        let opening = self.player_hand.len();
        let mut turns = 0;
        loop {
            match table.ask_action()? {
                Action::Stand => break,
                Action::Hit => {
                    self.player_hand.push(self.deck.draw_card());
                    turns += 1;
                    table.show_hand(name, &self.player_hand)?;
                    let total = self.player_hand.total();
                    debug!(total, turns, "player hit");
                    if total >= BLACKJACK {
                        break;
                    }
                }
            }
        }
        Ok(Finish::new(self.player_hand.total(), turns, opening))
    }

    /// Draws to the stand threshold, waiting for an acknowledgement after each card.
    pub fn play_dealer<T: Table>(&mut self, table: &mut T) -> Result<Finish, GameError> {
        let opening = self.dealer_hand.len();
        let mut turns = 0;
        while self.dealer.decide_action(self.dealer_hand.total()) == Action::Hit {
            self.dealer_hand.push(self.deck.draw_card());
            turns += 1;
            table.show_hand(DEALER, &self.dealer_hand)?;
            debug!(total = self.dealer_hand.total(), turns, "dealer drew");
            table.acknowledge()?;
        }
        Ok(Finish::new(self.dealer_hand.total(), turns, opening))
    }

    pub fn play_round<T: Table>(
        &mut self,
        name: &str,
        table: &mut T,
    ) -> Result<RoundResult, GameError> {
        self.deal_opening();
        table.show_hand(DEALER, &self.dealer_hand)?;
        table.show_hand(name, &self.player_hand)?;

        let player = self.play_player(name, table)?;
        let dealer = self.play_dealer(table)?;

        let outcome = outcome::decide(player, dealer);
        for line in outcome.message(name, player.point, dealer.point) {
            table.say(&line)?;
        }

        Ok(RoundResult {
            outcome,
            player_point: player.point,
            dealer_point: dealer.point,
            player_turns: player.turns,
            dealer_turns: dealer.turns,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards: self.dealer_hand.cards().to_vec(),
        })
    }
}
