//! Error types for pile, meld and scoring operations.

use alloc::vec::Vec;

use thiserror::Error;

use crate::card::{Card, Rank};

/// Errors that can occur when taking cards from a pile or hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards left.
    #[error("no cards available")]
    NoCardsAvailable,
    /// The requested position is past the end of the pile.
    #[error("position {position} is out of range for a pile of {len} cards")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of cards in the pile.
        len: usize,
    },
}

/// Reasons a group of cards is not a legal meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMeld {
    /// Not enough cards to form a meld.
    #[error("a meld needs at least {min} cards, got {count}")]
    TooFewCards {
        /// Number of cards offered.
        count: usize,
        /// Minimum meld size.
        min: usize,
    },
    /// More wild cards than a meld may hold.
    #[error("a meld may hold at most {max} wild cards, got {count}")]
    TooManyWildCards {
        /// Number of wild cards offered.
        count: usize,
        /// Maximum wild cards allowed.
        max: usize,
    },
    /// Natural cards of more than one rank.
    #[error("natural cards must share one rank, found {first:?} and {second:?}")]
    MixedRanks {
        /// The first natural rank seen.
        first: Rank,
        /// The conflicting rank.
        second: Rank,
    },
    /// Only wild cards were offered.
    #[error("a meld needs at least one natural card")]
    NoNaturalCards,
    /// Threes cannot be melded.
    #[error("threes cannot be melded")]
    ThreesNotAllowed,
    /// A meld of sevens must not contain wild cards.
    #[error("a meld of sevens cannot contain wild cards")]
    WildSevens,
}

/// A meld candidate that failed validation.
///
/// Holds the candidate cards so the caller can return them to their source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("meld rejected: {reason}")]
pub struct RejectedMeld {
    /// Why the candidate was rejected.
    pub reason: InvalidMeld,
    /// The candidate cards, in the order they were offered.
    pub cards: Vec<Card>,
}

impl RejectedMeld {
    /// Returns the rejected cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Errors that can occur when melding cards from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeldFromHandError {
    /// The hand does not hold every requested card.
    #[error("hand does not hold every requested card")]
    NotInHand,
    /// The cards do not form a legal meld.
    #[error(transparent)]
    Rejected(#[from] InvalidMeld),
}

/// Errors that can occur when configuring scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The value is not part of the point schedule.
    #[error("{0} is not a legal point value")]
    InvalidPointValue(u32),
}

/// Errors that can occur when parsing card notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card notation")]
    Empty,
    /// The rank character was not recognized.
    #[error("unknown rank '{0}'")]
    UnknownRank(char),
    /// The suit character was not recognized, or a Joker was given a suit.
    #[error("unknown suit '{0}'")]
    UnknownSuit(char),
    /// A non-Joker card was given without a suit.
    #[error("missing suit")]
    MissingSuit,
    /// Characters followed the suit.
    #[error("unexpected trailing input")]
    TrailingInput,
}
