//! A player's hand of unmelded cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardOrder, CompareOn};
use crate::error::PileError;
use crate::pile::Pile;

/// A player's hand.
///
/// The hand keeps itself sorted lowest to highest under its [`CardOrder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Pile,
    /// Ordering kept after every insert.
    order: CardOrder,
}

impl Hand {
    /// Creates a new empty hand sorted under `order`.
    #[must_use]
    pub const fn new(order: CardOrder) -> Self {
        Self {
            cards: Pile::new(),
            order,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.add_to_top(card);
        self.cards.sort(self.order);
    }

    /// Moves every card from `source` into the hand, leaving `source` empty.
    pub fn receive_cards(&mut self, source: &mut Pile) {
        self.cards.move_cards_to_top(source);
        self.cards.sort(self.order);
    }

    /// Returns the cards in the hand, lowest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the ordering the hand is kept in.
    #[must_use]
    pub const fn order(&self) -> CardOrder {
        self.order
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the total point value of the cards in the hand.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Removes a card with the same rank and suit as `card`.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        self.cards.remove_card(card, CompareOn::RankAndSuit)
    }

    /// Removes every card in `wanted`, or none of them.
    ///
    /// Returns the removed cards in the order requested. If any card is
    /// missing the hand is left unchanged and `None` is returned.
    pub fn remove_cards(&mut self, wanted: &[Card]) -> Option<Vec<Card>> {
        let mut remaining = self.cards.clone();
        let mut taken = Vec::with_capacity(wanted.len());

        for card in wanted {
            taken.push(remaining.remove_card(card, CompareOn::RankAndSuit)?);
        }

        self.cards = remaining;
        Some(taken)
    }

    /// Removes and returns the card at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the hand is empty, or
    /// [`PileError::PositionOutOfRange`] if `position` is past the last card.
    pub fn remove_card_at(&mut self, position: usize) -> Result<Card, PileError> {
        self.cards.remove_card_at(position)
    }

    /// Removes and returns the highest card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the hand is empty.
    pub fn remove_highest_card(&mut self) -> Result<Card, PileError> {
        self.cards.remove_top_card()
    }

    /// Removes and returns the lowest card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NoCardsAvailable`] if the hand is empty.
    pub fn remove_lowest_card(&mut self) -> Result<Card, PileError> {
        self.cards.remove_card_at(0)
    }

    /// Removes and returns every card in the hand.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.cards.take_all()
    }
}
