//! Playing cards, meld validation and round scoring for a Canasta-style
//! game, with optional `no_std` support.
//!
//! [`MeldValidator`] decides whether a group of cards is a legal meld and
//! whether it is clean or dirty. [`RoundScorer`] turns a player's melds and
//! leftover hand into a round total. [`Player`], [`Hand`] and [`Pile`] carry
//! cards between the two.
//!
//! # Example
//!
//! ```
//! use canasta::{Card, Player, Rank, Suit};
//!
//! let mut player = Player::new("alice");
//! for suit in [Suit::Hearts, Suit::Clubs, Suit::Spades] {
//!     player.dealt_a_card(Card::new(Rank::Five, suit));
//! }
//! player.dealt_a_card(Card::new(Rank::Queen, Suit::Diamonds));
//!
//! let fives = [
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Spades),
//! ];
//! player.meld_from_hand(&fives).unwrap();
//!
//! assert_eq!(player.score_round(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod meld;
pub mod options;
pub mod pile;
pub mod player;
pub mod scoring;

// Re-export main types
pub use card::{Card, CardColor, CardOrder, CompareOn, Rank, RankOrder, Suit, SuitOrder};
pub use error::{
    InvalidMeld, MeldFromHandError, ParseCardError, PileError, RejectedMeld, ScoreError,
};
pub use hand::Hand;
pub use meld::{Meld, MeldKind, MeldValidator, ValidationResult};
pub use options::RuleOptions;
pub use pile::{CANASTA_DECK_COUNT, CANASTA_JOKER_COUNT, DECK_SIZE, Pile};
pub use player::Player;
pub use scoring::{LEGAL_POINT_VALUES, RoundScore, RoundScorer, legal_point_value};
