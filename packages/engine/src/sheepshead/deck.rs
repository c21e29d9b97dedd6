//! The Sheepshead deck and card classification.
//!
//! Sheepshead plays with 32 cards (faces 7 through ace). Every diamond,
//! queen, and jack is trump; the remaining cards belong to their natural
//! fail suit.

use std::cmp::Ordering;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Face, Suit};

pub const DECK_SIZE: usize = 32;

/// Total card points in the deck.
pub const TOTAL_POINTS: u32 = 120;

const PLAYABLE_FACES: [Face; 8] = [
    Face::Seven,
    Face::Eight,
    Face::Nine,
    Face::Ten,
    Face::Jack,
    Face::Queen,
    Face::King,
    Face::Ace,
];

/// The 32 Sheepshead cards in suit-then-face order.
pub fn sheepshead_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| PLAYABLE_FACES.iter().map(move |&face| Card { suit, face }))
        .collect()
}

/// A freshly shuffled Sheepshead deck.
pub fn sheepshead_deck() -> Deck {
    let mut deck = Deck::new(sheepshead_cards());
    deck.shuffle(&mut rand::rng());
    deck
}

/// A deterministically shuffled deck for reproducible games.
pub fn seeded_deck(seed: u64) -> Deck {
    let mut deck = Deck::new(sheepshead_cards());
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    deck
}

/// The suit a card counts as during trick play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayClass {
    Trump,
    Club,
    Spade,
    Heart,
}

impl fmt::Display for PlayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayClass::Trump => "trump",
            PlayClass::Club => "clubs",
            PlayClass::Spade => "spades",
            PlayClass::Heart => "hearts",
        };
        f.write_str(name)
    }
}

/// Sheepshead-specific card attributes.
pub trait SheepsheadCard {
    fn play_class(&self) -> PlayClass;

    /// Rank within a play class, ascending: 7, 8, 9, K, 10, A, J, Q.
    fn power(&self) -> u8;

    /// Card points: J=2, Q=3, K=4, 10=10, A=11, rest 0.
    fn points(&self) -> u32;

    fn is_trump(&self) -> bool {
        self.play_class() == PlayClass::Trump
    }
}

impl SheepsheadCard for Card {
    fn play_class(&self) -> PlayClass {
        if self.suit == Suit::Diamonds || self.face == Face::Queen || self.face == Face::Jack {
            PlayClass::Trump
        } else {
            match self.suit {
                Suit::Clubs => PlayClass::Club,
                Suit::Spades => PlayClass::Spade,
                Suit::Hearts => PlayClass::Heart,
                // diamonds are always trump
                Suit::Diamonds => PlayClass::Trump,
            }
        }
    }

    fn power(&self) -> u8 {
        match self.face {
            Face::Seven => 0,
            Face::Eight => 1,
            Face::Nine => 2,
            Face::King => 3,
            Face::Ten => 4,
            Face::Ace => 5,
            Face::Jack => 6,
            Face::Queen => 7,
            // faces 2-6 never appear in a Sheepshead deck
            _ => 0,
        }
    }

    fn points(&self) -> u32 {
        match self.face {
            Face::Jack => 2,
            Face::Queen => 3,
            Face::King => 4,
            Face::Ten => 10,
            Face::Ace => 11,
            _ => 0,
        }
    }
}

/// Display ordering for a hand: trump first, then fail suits, strongest card
/// first within each group.
pub fn compare_for_display(a: &Card, b: &Card) -> Ordering {
    fn class_rank(class: PlayClass) -> u8 {
        match class {
            PlayClass::Trump => 0,
            PlayClass::Club => 1,
            PlayClass::Spade => 2,
            PlayClass::Heart => 3,
        }
    }
    fn suit_rank(suit: Suit) -> u8 {
        match suit {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }
    class_rank(a.play_class())
        .cmp(&class_rank(b.play_class()))
        .then(b.power().cmp(&a.power()))
        .then(suit_rank(a.suit).cmp(&suit_rank(b.suit)))
}

pub fn sort_for_display(cards: &mut [Card]) {
    cards.sort_by(compare_for_display);
}
