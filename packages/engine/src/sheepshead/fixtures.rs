//! Shared test fixtures: a known table and a stacked deck.

use crate::cards::{Card, Deck};
use crate::player::{Hand, Player};

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| t.parse::<Card>().unwrap()).collect()
}

pub fn hand_of(tokens: &[&str]) -> Hand {
    let mut hand = Hand::new();
    hand.extend(cards(tokens));
    hand
}

pub fn players() -> Vec<Player> {
    ["Andy", "Brad", "Carl", "Deryl", "Earl"]
        .iter()
        .map(|name| Player::new(*name))
        .collect()
}

/// A stacked 32-card deck for a fully scripted five-handed game.
///
/// Deal order gives Andy..Earl three cards each, a two-card blind, then
/// three more cards each:
/// - Andy:  TC 8D TD | 9H JH 7D
/// - Brad:  JS JC KH | KS 7H 9S
/// - Carl:  AC TS 7S | TH 8S 7C
/// - Deryl: 8C QC KD | JD AD QD
/// - Earl:  AS 9C 8H | QS KC QH
/// - blind: AH 9D
pub fn stacked_deck() -> Deck {
    Deck::new(cards(&[
        "TC", "8D", "TD", // Andy
        "JS", "JC", "KH", // Brad
        "AC", "TS", "7S", // Carl
        "8C", "QC", "KD", // Deryl
        "AS", "9C", "8H", // Earl
        "AH", "9D", // blind
        "9H", "JH", "7D", // Andy
        "KS", "7H", "9S", // Brad
        "TH", "8S", "7C", // Carl
        "JD", "AD", "QD", // Deryl
        "QS", "KC", "QH", // Earl
    ]))
}
