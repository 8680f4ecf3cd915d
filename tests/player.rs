//! Player integration tests.

use canasta::{
    Card, InvalidMeld, Meld, MeldFromHandError, MeldKind, Pile, PileError, Player, Rank,
    RuleOptions, ScoreError, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn deal(player: &mut Player, cards: &[Card]) {
    for &c in cards {
        player.dealt_a_card(c);
    }
}

#[test]
fn new_player_is_empty() {
    let player = Player::new("tester");

    assert_eq!(player.name(), "tester");
    assert!(player.hand_is_empty());
    assert_eq!(player.meld_count(), 0);
    assert!(!player.has_at_least_one_canasta());
    assert_eq!(player.score(), 0);
}

#[test]
fn meld_from_hand_moves_cards_into_meld() {
    let mut player = Player::new("tester");
    let tens = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
    ];
    deal(&mut player, &tens);
    deal(&mut player, &[card(Rank::Four, Suit::Hearts)]);

    let meld = player.meld_from_hand(&tens).unwrap();
    assert_eq!(meld.kind(), MeldKind::Dirty);
    assert_eq!(meld.cards(), &tens);

    assert_eq!(player.meld_count(), 1);
    assert_eq!(player.hand().cards(), &[card(Rank::Four, Suit::Hearts)]);
}

#[test]
fn rejected_meld_puts_cards_back() {
    let mut player = Player::new("tester");
    let sevens = [
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
        Card::joker(),
    ];
    deal(&mut player, &sevens);
    let before = player.hand().clone();

    assert_eq!(
        player.meld_from_hand(&sevens).unwrap_err(),
        MeldFromHandError::Rejected(InvalidMeld::WildSevens)
    );
    assert_eq!(player.hand(), &before);
    assert_eq!(player.meld_count(), 0);
}

#[test]
fn meld_from_hand_requires_cards_in_hand() {
    let mut player = Player::new("tester");
    deal(
        &mut player,
        &[card(Rank::Jack, Suit::Hearts), card(Rank::Jack, Suit::Spades)],
    );

    let wanted = [
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
    ];
    assert_eq!(
        player.meld_from_hand(&wanted).unwrap_err(),
        MeldFromHandError::NotInHand
    );
    assert_eq!(player.hand().len(), 2);
}

#[test]
fn won_cards_are_validated() {
    let mut player = Player::new("tester");

    let rejected = player
        .won_cards(vec![Card::joker(), Card::joker(), Card::joker()])
        .unwrap_err();
    assert_eq!(rejected.reason, InvalidMeld::NoNaturalCards);
    assert_eq!(rejected.cards.len(), 3);
    assert_eq!(player.meld_count(), 0);

    let queens: Vec<Card> = Suit::ALL
        .iter()
        .cycle()
        .take(7)
        .map(|&suit| card(Rank::Queen, suit))
        .collect();
    player.won_cards(queens).unwrap();
    assert_eq!(player.meld_count(), 1);
    assert!(player.has_at_least_one_canasta());
}

#[test]
fn canasta_size_comes_from_options() {
    let options = RuleOptions::default().with_canasta_size(8);
    let mut player = Player::with_options("tester", &options).unwrap();
    let kings: Vec<Card> = Suit::ALL
        .iter()
        .cycle()
        .take(7)
        .map(|&suit| card(Rank::King, suit))
        .collect();

    player.add_meld(Meld::new(kings).unwrap());
    assert!(!player.has_at_least_one_canasta());
    // Scored as a plain meld, not with the canasta bonus.
    assert_eq!(player.score_round(), 70);
    assert_eq!(player.scorer().canasta_size(), 8);
}

#[test]
fn custom_bonuses_are_used_for_scoring() {
    let options = RuleOptions::default()
        .with_clean_canasta_bonus(300)
        .with_dirty_canasta_bonus(100);
    let mut player = Player::with_options("tester", &options).unwrap();
    let queens: Vec<Card> = Suit::ALL
        .iter()
        .cycle()
        .take(7)
        .map(|&suit| card(Rank::Queen, suit))
        .collect();

    player.won_cards(queens).unwrap();
    assert!(player.has_at_least_one_canasta());
    assert_eq!(player.score_round(), 300);
}

#[test]
fn off_schedule_bonus_is_rejected() {
    let options = RuleOptions::default().with_clean_canasta_bonus(450);
    assert_eq!(
        Player::with_options("tester", &options).unwrap_err(),
        ScoreError::InvalidPointValue(450)
    );

    let options = RuleOptions::default().with_dirty_canasta_bonus(250);
    assert_eq!(
        Player::with_options("tester", &options).unwrap_err(),
        ScoreError::InvalidPointValue(250)
    );
}

#[test]
fn playing_cards() {
    let mut player = Player::new("tester");
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    assert_eq!(player.play_a_card(&mut rng), Err(PileError::NoCardsAvailable));

    let mut dealt = Pile::from_cards(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    player.receive_cards(&mut dealt);
    assert!(dealt.is_empty());

    assert_eq!(
        player.play_card(&card(Rank::Six, Suit::Clubs)),
        Some(card(Rank::Six, Suit::Clubs))
    );
    assert_eq!(player.play_card(&card(Rank::Six, Suit::Clubs)), None);

    let played = player.play_a_card(&mut rng).unwrap();
    assert!(
        played == card(Rank::Ace, Suit::Hearts) || played == card(Rank::Nine, Suit::Diamonds)
    );
    assert_eq!(player.hand().len(), 1);
}

#[test]
fn round_scoring_replaces_previous_score() {
    let mut player = Player::new("tester");
    deal(&mut player, &[card(Rank::Ace, Suit::Hearts), Card::joker()]);

    assert_eq!(player.score_round(), -70);

    player.play_card(&Card::joker());
    assert_eq!(player.score_round(), -20);
    assert_eq!(player.score(), -20);
}

#[test]
fn turn_in_all_cards_empties_player() {
    let mut player = Player::new("tester");
    let eights = [
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
    ];
    deal(&mut player, &eights);
    deal(&mut player, &[card(Rank::Five, Suit::Diamonds)]);
    player.meld_from_hand(&eights).unwrap();

    let returned = player.turn_in_all_cards();
    assert_eq!(
        returned.cards(),
        &[
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Eight, Suit::Clubs),
        ]
    );
    assert!(player.hand_is_empty());
    assert_eq!(player.meld_count(), 0);
}

#[test]
fn display_lists_hand_and_melds() {
    let mut player = Player::new("tester");
    assert_eq!(
        player.to_string(),
        "Player: tester\n\thand: empty\n\tmelds: none"
    );

    let nines = [
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
    ];
    deal(&mut player, &nines);
    deal(&mut player, &[Card::joker()]);
    player.meld_from_hand(&nines).unwrap();

    assert_eq!(
        player.to_string(),
        "Player: tester\n\thand: R\n\tmelds:\n\t\t[9H 9S 9C]"
    );
}
