//! Card types, ranks, suits and explicit comparison modes.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Color of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    /// Diamonds and Hearts.
    Red,
    /// Spades and Clubs.
    Black,
    /// Cards without a suit, such as Jokers.
    None,
}

/// Suit priority used when ordering cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuitOrder {
    /// Spades, Diamonds, Hearts, Clubs, then suitless cards.
    #[default]
    Standard,
    /// Suitless cards, then Clubs, Hearts, Diamonds, Spades.
    Bridge,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// No suit. Used for Jokers.
    None,
}

impl Suit {
    /// The four real suits, in standard priority order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Self::Diamonds | Self::Hearts => CardColor::Red,
            Self::Spades | Self::Clubs => CardColor::Black,
            Self::None => CardColor::None,
        }
    }

    /// Returns the single letter abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::None => 'N',
        }
    }

    /// Returns the suit symbol, or an empty string for [`Suit::None`].
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Clubs => "♣",
            Self::None => "",
        }
    }

    /// Returns the sort priority of the suit.
    #[must_use]
    pub const fn priority(self, order: SuitOrder) -> u8 {
        match order {
            SuitOrder::Standard => match self {
                Self::Spades => 1,
                Self::Diamonds => 2,
                Self::Hearts => 3,
                Self::Clubs => 4,
                Self::None => 5,
            },
            SuitOrder::Bridge => match self {
                Self::Clubs => 1,
                Self::Hearts => 2,
                Self::Diamonds => 3,
                Self::Spades => 4,
                Self::None => 0,
            },
        }
    }

    const fn from_abbreviation(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Rank ordering used when sorting cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankOrder {
    /// Ace low (1) through King (13), Joker last.
    Standard,
    /// Joker first, Two through King, Ace high (14).
    #[default]
    AceHigh,
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two. Wild.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Joker. Wild.
    Joker,
}

impl Rank {
    /// Every rank, Ace through King followed by Joker.
    pub const ALL: [Self; 14] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Joker,
    ];

    /// The thirteen ranks found in each suit of a standard deck.
    pub const NATURAL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the scoring value of the rank.
    ///
    /// ```
    /// use canasta::Rank;
    ///
    /// assert_eq!(Rank::Ace.points(), 20);
    /// assert_eq!(Rank::Seven.points(), 5);
    /// assert_eq!(Rank::King.points(), 10);
    /// assert_eq!(Rank::Joker.points(), 50);
    /// ```
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Ace | Self::Two => 20,
            Self::Three | Self::Four | Self::Five | Self::Six | Self::Seven => 5,
            Self::Eight | Self::Nine | Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Joker => 50,
        }
    }

    /// Returns whether cards of this rank are wild.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Two | Self::Joker)
    }

    /// Returns the single character abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Joker => 'R',
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        }
    }

    /// Returns the sort position of the rank.
    #[must_use]
    pub const fn order(self, order: RankOrder) -> u8 {
        match (self, order) {
            (Self::Ace, RankOrder::Standard) => 1,
            (Self::Ace, RankOrder::AceHigh) => 14,
            (Self::Joker, RankOrder::Standard) => 99,
            (Self::Joker, RankOrder::AceHigh) => 0,
            (Self::Two, _) => 2,
            (Self::Three, _) => 3,
            (Self::Four, _) => 4,
            (Self::Five, _) => 5,
            (Self::Six, _) => 6,
            (Self::Seven, _) => 7,
            (Self::Eight, _) => 8,
            (Self::Nine, _) => 9,
            (Self::Ten, _) => 10,
            (Self::Jack, _) => 11,
            (Self::Queen, _) => 12,
            (Self::King, _) => 13,
        }
    }

    const fn from_abbreviation(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'A' => Self::Ace,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'R' => Self::Joker,
            _ => return None,
        })
    }
}

/// Which attributes take part in a card comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareOn {
    /// Compare ranks only.
    RankOnly,
    /// Compare suits only.
    SuitOnly,
    /// Compare ranks, then suits.
    #[default]
    RankAndSuit,
}

impl CompareOn {
    const fn rank(self) -> bool {
        matches!(self, Self::RankOnly | Self::RankAndSuit)
    }

    const fn suit(self) -> bool {
        matches!(self, Self::SuitOnly | Self::RankAndSuit)
    }
}

/// Rank and suit ordering used together when sorting cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardOrder {
    /// Rank ordering.
    pub rank: RankOrder,
    /// Suit ordering.
    pub suit: SuitOrder,
}

impl CardOrder {
    /// Creates a card ordering.
    #[must_use]
    pub const fn new(rank: RankOrder, suit: SuitOrder) -> Self {
        Self { rank, suit }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card. [`Suit::None`] for Jokers.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not force Jokers to [`Suit::None`].
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a Joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Rank::Joker, Suit::None)
    }

    /// Returns whether the card is wild (a Two or a Joker).
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Returns the scoring value of the card.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.rank.points()
    }

    /// Returns whether the card is a red three.
    #[must_use]
    pub fn is_red_three(&self) -> bool {
        self.rank == Rank::Three && self.suit.color() == CardColor::Red
    }

    /// Compares two cards on the selected attributes, rank before suit.
    #[must_use]
    pub const fn compare(&self, other: &Self, on: CompareOn, order: CardOrder) -> Ordering {
        if on.rank() {
            let a = self.rank.order(order.rank);
            let b = other.rank.order(order.rank);
            if a < b {
                return Ordering::Less;
            }
            if a > b {
                return Ordering::Greater;
            }
        }
        if on.suit() {
            let a = self.suit.priority(order.suit);
            let b = other.suit.priority(order.suit);
            if a < b {
                return Ordering::Less;
            }
            if a > b {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Returns whether two cards are equal on the selected attributes.
    #[must_use]
    pub fn matches(&self, other: &Self, on: CompareOn) -> bool {
        (!on.rank() || self.rank == other.rank) && (!on.suit() || self.suit == other.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == Rank::Joker {
            write!(f, "{}", self.rank.abbreviation())
        } else {
            write!(f, "{}{}", self.rank.abbreviation(), self.suit.abbreviation())
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the two letter notation produced by [`Display`](fmt::Display),
    /// for example `"QH"`, `"tc"` or `"R"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let rank_char = chars.next().ok_or(ParseCardError::Empty)?;
        let rank =
            Rank::from_abbreviation(rank_char).ok_or(ParseCardError::UnknownRank(rank_char))?;

        // A Joker is written alone; every other rank takes one of the four suits.
        let suit = match (rank, chars.next()) {
            (Rank::Joker, None) => Suit::None,
            (Rank::Joker, Some(c)) => return Err(ParseCardError::UnknownSuit(c)),
            (_, Some(c)) => Suit::from_abbreviation(c).ok_or(ParseCardError::UnknownSuit(c))?,
            (_, None) => return Err(ParseCardError::MissingSuit),
        };

        if chars.next().is_some() {
            return Err(ParseCardError::TrailingInput);
        }

        Ok(Self::new(rank, suit))
    }
}
