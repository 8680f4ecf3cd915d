//! Players: a hand, committed melds and a round score.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::error::{MeldFromHandError, PileError, RejectedMeld, ScoreError};
use crate::hand::Hand;
use crate::meld::{Meld, MeldValidator};
use crate::options::RuleOptions;
use crate::pile::Pile;
use crate::scoring::RoundScorer;

/// A Canasta player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Player name.
    name: String,
    /// Cards not yet melded.
    hand: Hand,
    /// Committed melds, in the order they were laid down.
    melds: Vec<Meld>,
    /// Score from the most recent [`Player::score_round`].
    score: i32,
    /// Validator used for melds built from the hand.
    validator: MeldValidator,
    /// Scorer for this player's rules. Also decides what counts as a canasta.
    scorer: RoundScorer,
}

impl Player {
    /// Creates a player with the default rules.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name.into(), &RuleOptions::default(), RoundScorer::default())
    }

    /// Creates a player with the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidPointValue`] if either canasta bonus in
    /// `options` is not part of the point schedule.
    pub fn with_options(
        name: impl Into<String>,
        options: &RuleOptions,
    ) -> Result<Self, ScoreError> {
        let scorer = RoundScorer::new(options)?;
        Ok(Self::build(name.into(), options, scorer))
    }

    fn build(name: String, options: &RuleOptions, scorer: RoundScorer) -> Self {
        Self {
            name,
            hand: Hand::new(options.hand_order),
            melds: Vec::new(),
            score: 0,
            validator: MeldValidator::new(options),
            scorer,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the hand.
    pub fn dealt_a_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Moves every card from `source` into the hand.
    pub fn receive_cards(&mut self, source: &mut Pile) {
        self.hand.receive_cards(source);
    }

    /// Plays a random card from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the hand is empty.
    pub fn play_a_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PileError> {
        if self.hand.is_empty() {
            return Err(PileError::NoCardsAvailable);
        }
        let position = rng.random_range(0..self.hand.len());
        self.hand.remove_card_at(position)
    }

    /// Plays a specific card from the hand, if the player holds it.
    pub fn play_card(&mut self, card: &Card) -> Option<Card> {
        self.hand.remove_card(card)
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn hand_is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Lays down a meld made of cards from the hand.
    ///
    /// The cards are taken out of the hand and validated. A rejected meld
    /// puts them straight back.
    ///
    /// # Errors
    ///
    /// Returns [`MeldFromHandError::NotInHand`] if the hand does not hold every
    /// requested card, or [`MeldFromHandError::Rejected`] if the cards do not
    /// form a legal meld. The hand is unchanged in both cases.
    pub fn meld_from_hand(&mut self, cards: &[Card]) -> Result<&Meld, MeldFromHandError> {
        let taken = self
            .hand
            .remove_cards(cards)
            .ok_or(MeldFromHandError::NotInHand)?;

        match Meld::with_validator(taken, &self.validator) {
            Ok(meld) => {
                let index = self.melds.len();
                self.melds.push(meld);
                Ok(&self.melds[index])
            }
            Err(rejected) => {
                let reason = rejected.reason;
                for card in rejected.cards.iter().copied() {
                    self.hand.add_card(card);
                }
                Err(MeldFromHandError::Rejected(reason))
            }
        }
    }

    /// Adds an already validated meld.
    pub fn add_meld(&mut self, meld: Meld) {
        self.melds.push(meld);
    }

    /// Records a meld won from the table.
    pub fn won_round(&mut self, meld: Meld) {
        debug!(player = %self.name, cards = meld.len(), "Won meld");
        self.add_meld(meld);
    }

    /// Builds a meld from cards won from the table and records it.
    ///
    /// # Errors
    ///
    /// Returns the rejected cards if they do not form a legal meld.
    pub fn won_cards(&mut self, cards: Vec<Card>) -> Result<(), RejectedMeld> {
        let meld = Meld::with_validator(cards, &self.validator)?;
        self.won_round(meld);
        Ok(())
    }

    /// Returns the player's melds.
    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Returns the number of melds.
    #[must_use]
    pub fn meld_count(&self) -> usize {
        self.melds.len()
    }

    /// Returns whether any meld is a canasta.
    #[must_use]
    pub fn has_at_least_one_canasta(&self) -> bool {
        self.melds.iter().any(|m| m.is_canasta(self.scorer.canasta_size()))
    }

    /// Scores the round from the current melds and hand and stores the result.
    ///
    /// The stored score is replaced, not added to.
    pub fn score_round(&mut self) -> i32 {
        self.score = self.scorer.score(&self.melds, self.hand.cards());
        self.score
    }

    /// Returns the scorer built from this player's rules.
    #[must_use]
    pub const fn scorer(&self) -> &RoundScorer {
        &self.scorer
    }

    /// Returns the score from the most recent [`Player::score_round`].
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Hands back every card: the hand first, then each meld in order.
    ///
    /// The hand and meld collection are left empty.
    pub fn turn_in_all_cards(&mut self) -> Pile {
        let mut all_cards = Pile::from_cards(self.hand.take_all());

        for meld in self.melds.drain(..) {
            all_cards.extend(meld.into_cards());
        }

        info!(player = %self.name, cards = all_cards.len(), "Turned in all cards");
        all_cards
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.name)?;

        write!(f, "\thand:")?;
        if self.hand.is_empty() {
            write!(f, " empty")?;
        }
        for card in self.hand.cards() {
            write!(f, " {card}")?;
        }
        writeln!(f)?;

        write!(f, "\tmelds:")?;
        if self.melds.is_empty() {
            write!(f, " none")?;
        }
        for meld in &self.melds {
            write!(f, "\n\t\t[")?;
            for (i, card) in meld.cards().iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{card}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
