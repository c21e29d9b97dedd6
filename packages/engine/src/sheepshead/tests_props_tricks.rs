//! Property tests for trick resolution.

use proptest::prelude::*;

use crate::cards::Card;
use crate::player::Hand;

use super::deck::{seeded_deck, PlayClass, SheepsheadCard};
use super::fixtures;
use super::tricks::Trick;

/// Five distinct playable cards drawn from a shuffled deck.
fn five_cards(seed: u64) -> Vec<Card> {
    let mut deck = seeded_deck(seed);
    deck.deal(5).unwrap()
}

fn play_out(cards: &[Card]) -> Trick {
    let players = fixtures::players();
    let mut trick = Trick::new(5);
    for (seat, card) in cards.iter().enumerate() {
        // single-card hands are always legal to play
        let mut hand = Hand::new();
        hand.push(*card);
        trick.play(seat, &players[seat], &mut hand, 0).unwrap();
    }
    trick
}

proptest! {
    /// The winning card is the highest trump on the table, or the highest
    /// card of the led class when no trump was played.
    #[test]
    fn winner_is_highest_trump_or_highest_of_led_class(seed in any::<u64>()) {
        let cards = five_cards(seed);
        let trick = play_out(&cards);

        let winner = trick.trick_winner();
        prop_assert!(winner.is_some());
        let winning = cards[winner.unwrap()];

        let led = cards[0].play_class();
        let trumps: Vec<_> = cards.iter().filter(|c| c.is_trump()).collect();
        if trumps.is_empty() {
            prop_assert_eq!(winning.play_class(), led);
            for card in cards.iter().filter(|c| c.play_class() == led) {
                prop_assert!(winning.power() >= card.power());
            }
        } else {
            prop_assert_eq!(winning.play_class(), PlayClass::Trump);
            for card in &trumps {
                prop_assert!(winning.power() >= card.power());
            }
        }
    }

    /// Ties in power go to the earlier play: no later card with equal power
    /// and equal standing may displace the winner.
    #[test]
    fn equal_power_never_displaces_an_earlier_play(seed in any::<u64>()) {
        let cards = five_cards(seed);
        let trick = play_out(&cards);
        let winner = trick.trick_winner().unwrap();
        let winning = cards[winner];

        for (seat, card) in cards.iter().enumerate().take(winner) {
            // every earlier contender must be strictly weaker
            if card.is_trump() == winning.is_trump()
                && (card.is_trump() || card.play_class() == cards[0].play_class())
            {
                prop_assert!(card.power() < winning.power(), "seat {} should have won", seat);
            }
        }
    }

    /// Trick points are the sum of the card points played into it.
    #[test]
    fn trick_points_sum_the_plays(seed in any::<u64>()) {
        let cards = five_cards(seed);
        let trick = play_out(&cards);
        prop_assert_eq!(trick.trick_points(), cards.iter().map(|c| c.points()).sum::<u32>());
    }
}
