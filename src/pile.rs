//! Ordered card piles and deck construction.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, CardOrder, CompareOn, Rank, Suit};
use crate::error::PileError;

/// Number of cards in a standard deck, without Jokers.
pub const DECK_SIZE: usize = 52;

/// Number of standard decks in a Canasta stock.
pub const CANASTA_DECK_COUNT: usize = 2;

/// Number of Jokers added to a Canasta stock.
pub const CANASTA_JOKER_COUNT: usize = 4;

/// An ordered pile of cards.
///
/// Position 0 is the bottom of the pile; the last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards listed bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates an unshuffled standard deck followed by `jokers` Jokers.
    #[must_use]
    pub fn standard_deck(jokers: usize) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE + jokers);

        for suit in Suit::ALL {
            for rank in Rank::NATURAL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.extend(core::iter::repeat_n(Card::joker(), jokers));

        Self { cards }
    }

    /// Creates a shuffled Canasta stock: two standard decks and four Jokers.
    ///
    /// The same seed always produces the same order.
    #[must_use]
    pub fn canasta_stock(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut stock = Self::new();

        for deck in 0..CANASTA_DECK_COUNT {
            let jokers = if deck == 0 { CANASTA_JOKER_COUNT } else { 0 };
            stock.move_cards_to_bottom(&mut Self::standard_deck(jokers));
        }

        stock.shuffle(&mut rng);
        stock
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Places a card on top of the pile.
    pub fn add_to_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Places a card at the bottom of the pile.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the pile is empty.
    pub fn top_card(&self) -> Result<&Card, PileError> {
        self.cards.last().ok_or(PileError::NoCardsAvailable)
    }

    /// Returns the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the pile is empty.
    pub fn bottom_card(&self) -> Result<&Card, PileError> {
        self.cards.first().ok_or(PileError::NoCardsAvailable)
    }

    /// Returns the card at `position`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the pile is empty, or
    /// [`PileError::PositionOutOfRange`] if `position` is past the top.
    pub fn card_at(&self, position: usize) -> Result<&Card, PileError> {
        self.check_position(position)?;
        Ok(&self.cards[position])
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the pile is empty.
    pub fn remove_top_card(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::NoCardsAvailable)
    }

    /// Removes and returns the card at `position`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the pile is empty, or
    /// [`PileError::PositionOutOfRange`] if `position` is past the top.
    pub fn remove_card_at(&mut self, position: usize) -> Result<Card, PileError> {
        self.check_position(position)?;
        Ok(self.cards.remove(position))
    }

    /// Removes the first card, from the bottom, that matches `card`.
    pub fn remove_card(&mut self, card: &Card, on: CompareOn) -> Option<Card> {
        let position = self.cards.iter().position(|c| c.matches(card, on))?;
        Some(self.cards.remove(position))
    }

    /// Removes every card matching `card` and returns them in pile order.
    pub fn remove_all_matching(&mut self, card: &Card, on: CompareOn) -> Vec<Card> {
        let (matching, rest): (Vec<Card>, Vec<Card>) =
            self.cards.drain(..).partition(|c| c.matches(card, on));
        self.cards = rest;
        matching
    }

    /// Counts the cards matching `card`.
    #[must_use]
    pub fn match_count(&self, card: &Card, on: CompareOn) -> usize {
        self.cards.iter().filter(|c| c.matches(card, on)).count()
    }

    /// Moves every card from `other` underneath this pile, keeping their order.
    ///
    /// `other` is left empty.
    pub fn move_cards_to_bottom(&mut self, other: &mut Self) {
        let mut moved = core::mem::take(&mut other.cards);
        moved.append(&mut self.cards);
        self.cards = moved;
    }

    /// Moves every card from `other` on top of this pile, keeping their order.
    ///
    /// `other` is left empty.
    pub fn move_cards_to_top(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Removes and returns every card, bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Shuffles the pile.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        trace!(cards = self.cards.len(), "Shuffled pile");
    }

    /// Sorts the pile from lowest to highest under `order`.
    pub fn sort(&mut self, order: CardOrder) {
        self.cards.sort_by(|a, b| a.compare(b, CompareOn::RankAndSuit, order));
    }

    fn check_position(&self, position: usize) -> Result<(), PileError> {
        if self.cards.is_empty() {
            return Err(PileError::NoCardsAvailable);
        }
        if position >= self.cards.len() {
            return Err(PileError::PositionOutOfRange {
                position,
                len: self.cards.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl Extend<Card> for Pile {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pile {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
