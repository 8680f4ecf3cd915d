//! Meld validation and committed melds.

extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::{Card, Rank};
use crate::error::{InvalidMeld, RejectedMeld};
use crate::options::RuleOptions;

/// Whether a meld holds wild cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// No wild cards.
    Clean,
    /// At least one wild card.
    Dirty,
}

impl MeldKind {
    /// Returns whether the meld holds wild cards.
    #[must_use]
    pub const fn is_dirty(self) -> bool {
        matches!(self, Self::Dirty)
    }
}

/// Flat summary of a validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    /// Whether the cards form a legal meld.
    pub valid: bool,
    /// Whether the cards hold a wild card. Always `false` when invalid.
    pub dirty: bool,
}

impl From<Result<MeldKind, InvalidMeld>> for ValidationResult {
    fn from(result: Result<MeldKind, InvalidMeld>) -> Self {
        match result {
            Ok(kind) => Self {
                valid: true,
                dirty: kind.is_dirty(),
            },
            Err(_) => Self {
                valid: false,
                dirty: false,
            },
        }
    }
}

/// Decides whether a group of cards is a legal meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeldValidator {
    min_meld_size: usize,
    max_wild_cards: usize,
}

impl Default for MeldValidator {
    fn default() -> Self {
        Self::new(&RuleOptions::default())
    }
}

impl MeldValidator {
    /// Creates a validator for the given rules.
    #[must_use]
    pub const fn new(options: &RuleOptions) -> Self {
        Self {
            min_meld_size: options.min_meld_size,
            max_wild_cards: options.max_wild_cards,
        }
    }

    /// Checks whether `cards` form a legal meld.
    ///
    /// Natural cards must all share one rank other than Three, at least one
    /// natural card is required, and the number of wild cards is capped. A
    /// meld of Sevens may not contain any wild card.
    ///
    /// # Errors
    ///
    /// Returns the first rule the cards break.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::{Card, InvalidMeld, MeldKind, MeldValidator, Rank, Suit};
    ///
    /// let validator = MeldValidator::default();
    /// let kings = [
    ///     Card::new(Rank::King, Suit::Hearts),
    ///     Card::new(Rank::King, Suit::Clubs),
    ///     Card::joker(),
    /// ];
    /// assert_eq!(validator.validate(&kings), Ok(MeldKind::Dirty));
    ///
    /// let threes = [Card::new(Rank::Three, Suit::Spades); 3];
    /// assert_eq!(validator.validate(&threes), Err(InvalidMeld::ThreesNotAllowed));
    /// ```
    pub fn validate(&self, cards: &[Card]) -> Result<MeldKind, InvalidMeld> {
        if cards.len() < self.min_meld_size {
            return Err(InvalidMeld::TooFewCards {
                count: cards.len(),
                min: self.min_meld_size,
            });
        }

        let wild_count = cards.iter().filter(|c| c.is_wild()).count();
        if wild_count > self.max_wild_cards {
            return Err(InvalidMeld::TooManyWildCards {
                count: wild_count,
                max: self.max_wild_cards,
            });
        }

        let base_rank = Self::base_rank(cards)?.ok_or(InvalidMeld::NoNaturalCards)?;

        match base_rank {
            Rank::Three => Err(InvalidMeld::ThreesNotAllowed),
            Rank::Seven if wild_count > 0 => Err(InvalidMeld::WildSevens),
            _ if wild_count > 0 => Ok(MeldKind::Dirty),
            _ => Ok(MeldKind::Clean),
        }
    }

    /// Returns the rank shared by every natural card, if there is one.
    fn base_rank(cards: &[Card]) -> Result<Option<Rank>, InvalidMeld> {
        let mut base: Option<Rank> = None;

        for card in cards.iter().filter(|c| !c.is_wild()) {
            match base {
                None => base = Some(card.rank),
                Some(first) if first != card.rank => {
                    return Err(InvalidMeld::MixedRanks {
                        first,
                        second: card.rank,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(base)
    }
}

/// A validated group of cards committed by a player.
///
/// A `Meld` can only be built through validation, so it always satisfies
/// the meld rules it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meld {
    cards: Vec<Card>,
    kind: MeldKind,
    base_rank: Rank,
}

impl Meld {
    /// Validates `cards` with the default rules and builds a meld.
    ///
    /// # Errors
    ///
    /// Returns a [`RejectedMeld`] holding the reason and the untouched
    /// cards, so the caller can return them to their source.
    pub fn new(cards: Vec<Card>) -> Result<Self, RejectedMeld> {
        Self::with_validator(cards, &MeldValidator::default())
    }

    /// Validates `cards` with `validator` and builds a meld.
    ///
    /// # Errors
    ///
    /// Returns a [`RejectedMeld`] holding the reason and the untouched
    /// cards, so the caller can return them to their source.
    pub fn with_validator(
        cards: Vec<Card>,
        validator: &MeldValidator,
    ) -> Result<Self, RejectedMeld> {
        match validator.validate(&cards) {
            Ok(kind) => {
                // Validation guarantees at least one natural card.
                let base_rank = cards
                    .iter()
                    .find(|c| !c.is_wild())
                    .map_or(Rank::Joker, |c| c.rank);
                Ok(Self {
                    cards,
                    kind,
                    base_rank,
                })
            }
            Err(reason) => {
                debug!(%reason, cards = cards.len(), "Rejected meld candidate");
                Err(RejectedMeld { reason, cards })
            }
        }
    }

    /// Returns the cards in the meld.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the meld.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the meld is empty. Always `false` for a validated meld.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the meld is clean or dirty.
    #[must_use]
    pub const fn kind(&self) -> MeldKind {
        self.kind
    }

    /// Returns whether the meld holds wild cards.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.kind.is_dirty()
    }

    /// Returns the rank shared by the natural cards.
    #[must_use]
    pub const fn base_rank(&self) -> Rank {
        self.base_rank
    }

    /// Returns the number of wild cards.
    #[must_use]
    pub fn wild_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_wild()).count()
    }

    /// Returns whether the meld has reached `canasta_size` cards.
    #[must_use]
    pub fn is_canasta(&self, canasta_size: usize) -> bool {
        self.cards.len() >= canasta_size
    }

    /// Returns the face value of the cards, without any canasta bonus.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Consumes the meld and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
