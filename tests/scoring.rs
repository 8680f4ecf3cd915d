//! Round scoring tests.

use canasta::{
    Card, LEGAL_POINT_VALUES, Meld, Player, Rank, RoundScore, RoundScorer, RuleOptions,
    ScoreError, Suit, legal_point_value,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn naturals(rank: Rank, count: usize) -> Vec<Card> {
    Suit::ALL.iter().cycle().take(count).map(|&suit| card(rank, suit)).collect()
}

fn meld(cards: Vec<Card>) -> Meld {
    Meld::new(cards).unwrap()
}

#[test]
fn rank_point_table() {
    let expected = [
        (Rank::Ace, 20),
        (Rank::Two, 20),
        (Rank::Three, 5),
        (Rank::Four, 5),
        (Rank::Five, 5),
        (Rank::Six, 5),
        (Rank::Seven, 5),
        (Rank::Eight, 10),
        (Rank::Nine, 10),
        (Rank::Ten, 10),
        (Rank::Jack, 10),
        (Rank::Queen, 10),
        (Rank::King, 10),
        (Rank::Joker, 50),
    ];

    for (rank, points) in expected {
        assert_eq!(rank.points(), points, "{rank:?}");
    }
}

#[test]
fn empty_round_scores_zero() {
    assert_eq!(RoundScorer::default().score(&[], &[]), 0);
}

#[test]
fn clean_canasta_scores_bonus_only() {
    let scorer = RoundScorer::default();
    let fours = meld(naturals(Rank::Four, 7));

    assert_eq!(scorer.score(&[fours], &[]), 500);
}

#[test]
fn dirty_canasta_scores_lower_bonus() {
    let scorer = RoundScorer::default();
    let mut cards = naturals(Rank::Four, 5);
    cards.extend([Card::joker(), card(Rank::Two, Suit::Hearts)]);

    assert_eq!(scorer.score(&[meld(cards)], &[]), 300);
}

#[test]
fn non_canasta_meld_scores_card_values() {
    let scorer = RoundScorer::default();
    let mut aces = naturals(Rank::Ace, 3);
    aces.push(Card::joker());

    assert_eq!(scorer.score(&[meld(aces)], &[]), 3 * 20 + 50);
    assert_eq!(scorer.score(&[meld(naturals(Rank::Jack, 6))], &[]), 60);
}

#[test]
fn hand_cards_are_subtracted() {
    let scorer = RoundScorer::default();
    let hand = [card(Rank::Ace, Suit::Spades), Card::joker()];

    assert_eq!(scorer.score(&[], &hand), -70);
}

#[test]
fn score_is_repeatable() {
    let scorer = RoundScorer::default();
    let melds = [
        meld(naturals(Rank::King, 7)),
        meld(naturals(Rank::Six, 3)),
    ];
    let hand = [card(Rank::Nine, Suit::Clubs), card(Rank::Three, Suit::Hearts)];

    let first = scorer.score(&melds, &hand);
    let second = scorer.score(&melds, &hand);
    assert_eq!(first, second);
    assert_eq!(first, 500 + 15 - 15);
}

#[test]
fn breakdown_itemizes_total() {
    let scorer = RoundScorer::default();
    let mut dirty = naturals(Rank::Queen, 6);
    dirty.push(Card::joker());
    let melds = [meld(dirty), meld(naturals(Rank::Eight, 4))];
    let hand = [card(Rank::Two, Suit::Diamonds)];

    assert_eq!(
        scorer.score_breakdown(&melds, &hand),
        RoundScore {
            meld_points: 40,
            canasta_bonus: 300,
            hand_penalty: 20,
            total: 320,
        }
    );
}

#[test]
fn total_can_go_negative() {
    let scorer = RoundScorer::default();
    let hand = vec![Card::joker(); 4];

    assert_eq!(
        scorer.score(&[meld(naturals(Rank::Five, 3))], &hand),
        15 - 200
    );
}

#[test]
fn custom_bonuses_and_canasta_size() {
    let options = RuleOptions::default()
        .with_canasta_size(8)
        .with_clean_canasta_bonus(300)
        .with_dirty_canasta_bonus(100);
    let scorer = RoundScorer::new(&options).unwrap();

    assert_eq!(scorer.score(&[meld(naturals(Rank::King, 7))], &[]), 70);
    assert_eq!(scorer.score(&[meld(naturals(Rank::King, 8))], &[]), 300);

    let mut dirty = naturals(Rank::King, 7);
    dirty.push(Card::joker());
    assert_eq!(scorer.score(&[meld(dirty)], &[]), 100);
}

#[test]
fn off_schedule_bonus_is_rejected() {
    let options = RuleOptions::default().with_clean_canasta_bonus(450);
    assert_eq!(
        RoundScorer::new(&options).unwrap_err(),
        ScoreError::InvalidPointValue(450)
    );

    let options = RuleOptions::default().with_dirty_canasta_bonus(0);
    assert_eq!(
        RoundScorer::new(&options).unwrap_err(),
        ScoreError::InvalidPointValue(0)
    );

    assert_eq!(
        RoundScorer::new(&RuleOptions::default()).unwrap(),
        RoundScorer::default()
    );
}

#[test]
fn point_schedule() {
    for value in LEGAL_POINT_VALUES {
        assert_eq!(legal_point_value(value), Ok(value));
    }
    for value in [0, 1, 15, 25, 200, 1000] {
        assert_eq!(
            legal_point_value(value),
            Err(ScoreError::InvalidPointValue(value))
        );
    }
    for rank in Rank::ALL {
        assert!(legal_point_value(rank.points()).is_ok(), "{rank:?}");
    }
}

#[test]
fn player_with_clean_king_canasta_scores_500() {
    let mut player = Player::new("kings");
    player.won_round(meld(naturals(Rank::King, 7)));

    assert_eq!(player.score_round(), 500);
    assert_eq!(player.score(), 500);
}

#[test]
fn player_with_fives_and_a_queen_scores_5() {
    let mut player = Player::new("fives");
    for c in naturals(Rank::Five, 3) {
        player.dealt_a_card(c);
    }
    player.dealt_a_card(card(Rank::Queen, Suit::Hearts));

    player.meld_from_hand(&naturals(Rank::Five, 3)).unwrap();

    assert_eq!(player.score_round(), 5);
    // Rescoring replaces the stored total.
    assert_eq!(player.score_round(), 5);
    assert_eq!(player.score(), 5);
}
