//! Rule configuration options.

use crate::card::CardOrder;

/// Configuration options for meld validation, scoring and hand sorting.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use canasta::RuleOptions;
///
/// let options = RuleOptions::default()
///     .with_canasta_size(8)
///     .with_max_wild_cards(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleOptions {
    /// Minimum number of cards in a meld.
    pub min_meld_size: usize,
    /// Maximum number of wild cards in a meld.
    pub max_wild_cards: usize,
    /// Number of cards at which a meld counts as a canasta.
    pub canasta_size: usize,
    /// Bonus for a canasta without wild cards.
    pub clean_canasta_bonus: u32,
    /// Bonus for a canasta with at least one wild card.
    pub dirty_canasta_bonus: u32,
    /// Ordering kept by player hands.
    pub hand_order: CardOrder,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            min_meld_size: 3,
            max_wild_cards: 3,
            canasta_size: 7,
            clean_canasta_bonus: 500,
            dirty_canasta_bonus: 300,
            hand_order: CardOrder::default(),
        }
    }
}

impl RuleOptions {
    /// Sets the minimum meld size.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_min_meld_size(4);
    /// assert_eq!(options.min_meld_size, 4);
    /// ```
    #[must_use]
    pub const fn with_min_meld_size(mut self, size: usize) -> Self {
        self.min_meld_size = size;
        self
    }

    /// Sets the maximum number of wild cards per meld.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_max_wild_cards(2);
    /// assert_eq!(options.max_wild_cards, 2);
    /// ```
    #[must_use]
    pub const fn with_max_wild_cards(mut self, max: usize) -> Self {
        self.max_wild_cards = max;
        self
    }

    /// Sets the canasta size.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_canasta_size(8);
    /// assert_eq!(options.canasta_size, 8);
    /// ```
    #[must_use]
    pub const fn with_canasta_size(mut self, size: usize) -> Self {
        self.canasta_size = size;
        self
    }

    /// Sets the clean canasta bonus.
    ///
    /// The value is checked against the point schedule when a
    /// [`RoundScorer`](crate::RoundScorer) is built from these options.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_clean_canasta_bonus(300);
    /// assert_eq!(options.clean_canasta_bonus, 300);
    /// ```
    #[must_use]
    pub const fn with_clean_canasta_bonus(mut self, bonus: u32) -> Self {
        self.clean_canasta_bonus = bonus;
        self
    }

    /// Sets the dirty canasta bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_dirty_canasta_bonus(100);
    /// assert_eq!(options.dirty_canasta_bonus, 100);
    /// ```
    #[must_use]
    pub const fn with_dirty_canasta_bonus(mut self, bonus: u32) -> Self {
        self.dirty_canasta_bonus = bonus;
        self
    }

    /// Sets the ordering kept by player hands.
    ///
    /// # Example
    ///
    /// ```
    /// use canasta::{CardOrder, RankOrder, RuleOptions, SuitOrder};
    ///
    /// let order = CardOrder::new(RankOrder::Standard, SuitOrder::Bridge);
    /// let options = RuleOptions::default().with_hand_order(order);
    /// assert_eq!(options.hand_order, order);
    /// ```
    #[must_use]
    pub const fn with_hand_order(mut self, order: CardOrder) -> Self {
        self.hand_order = order;
        self
    }
}
