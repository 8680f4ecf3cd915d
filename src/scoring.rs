//! Round scoring.

use tracing::debug;

use crate::card::Card;
use crate::error::ScoreError;
use crate::meld::Meld;
use crate::options::RuleOptions;

/// Every amount a single scoring entry may carry.
pub const LEGAL_POINT_VALUES: [u32; 7] = [5, 10, 20, 50, 100, 300, 500];

/// Checks that `value` is part of the point schedule.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidPointValue`] for any other amount.
///
/// ```
/// use canasta::{ScoreError, legal_point_value};
///
/// assert_eq!(legal_point_value(300), Ok(300));
/// assert_eq!(legal_point_value(250), Err(ScoreError::InvalidPointValue(250)));
/// ```
pub fn legal_point_value(value: u32) -> Result<u32, ScoreError> {
    if LEGAL_POINT_VALUES.contains(&value) {
        Ok(value)
    } else {
        Err(ScoreError::InvalidPointValue(value))
    }
}

/// Itemized result of scoring one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoundScore {
    /// Face value of every meld that is not a canasta.
    pub meld_points: i32,
    /// Bonuses earned by canastas.
    pub canasta_bonus: i32,
    /// Face value of the cards left in hand. Subtracted from the total.
    pub hand_penalty: i32,
    /// `meld_points + canasta_bonus - hand_penalty`.
    pub total: i32,
}

/// Computes a player's round total from their melds and remaining hand.
///
/// A canasta scores only its bonus; any other meld scores the sum of its card
/// values. Cards still in hand are subtracted at face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundScorer {
    canasta_size: usize,
    clean_canasta_bonus: u32,
    dirty_canasta_bonus: u32,
}

impl Default for RoundScorer {
    fn default() -> Self {
        let options = RuleOptions::default();
        Self {
            canasta_size: options.canasta_size,
            clean_canasta_bonus: options.clean_canasta_bonus,
            dirty_canasta_bonus: options.dirty_canasta_bonus,
        }
    }
}

impl RoundScorer {
    /// Creates a scorer for the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidPointValue`] if either canasta bonus is
    /// not part of the point schedule.
    pub fn new(options: &RuleOptions) -> Result<Self, ScoreError> {
        Ok(Self {
            canasta_size: options.canasta_size,
            clean_canasta_bonus: legal_point_value(options.clean_canasta_bonus)?,
            dirty_canasta_bonus: legal_point_value(options.dirty_canasta_bonus)?,
        })
    }

    /// Returns the meld size at which a meld counts as a canasta.
    #[must_use]
    pub const fn canasta_size(&self) -> usize {
        self.canasta_size
    }

    /// Returns the round total.
    ///
    /// The result depends only on the arguments, so it can be negative and
    /// repeated calls with the same state return the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::{Card, Meld, Rank, RoundScorer, Suit};
    ///
    /// let fives = Meld::new(vec![Card::new(Rank::Five, Suit::Hearts); 3]).unwrap();
    /// let hand = [Card::new(Rank::Queen, Suit::Spades)];
    ///
    /// assert_eq!(RoundScorer::default().score(&[fives], &hand), 5);
    /// ```
    #[must_use]
    pub fn score(&self, melds: &[Meld], remaining_hand: &[Card]) -> i32 {
        self.score_breakdown(melds, remaining_hand).total
    }

    /// Returns the round total with its parts.
    #[must_use]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "card values and bonuses are far below i32::MAX"
    )]
    pub fn score_breakdown(&self, melds: &[Meld], remaining_hand: &[Card]) -> RoundScore {
        let mut score = RoundScore::default();

        for meld in melds {
            if meld.is_canasta(self.canasta_size) {
                score.canasta_bonus += self.canasta_bonus(meld) as i32;
            } else {
                score.meld_points += meld.points() as i32;
            }
        }

        score.hand_penalty = remaining_hand.iter().map(|c| c.points() as i32).sum();
        score.total = score.meld_points + score.canasta_bonus - score.hand_penalty;

        debug!(
            melds = melds.len(),
            hand = remaining_hand.len(),
            meld_points = score.meld_points,
            canasta_bonus = score.canasta_bonus,
            hand_penalty = score.hand_penalty,
            total = score.total,
            "Scored round"
        );

        score
    }

    const fn canasta_bonus(&self, meld: &Meld) -> u32 {
        if meld.is_dirty() {
            self.dirty_canasta_bonus
        } else {
            self.clean_canasta_bonus
        }
    }
}
