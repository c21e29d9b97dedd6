//! The five-handed deal.
//!
//! Three cards to each seat, two to the blind, then three more to each seat:
//! 32 cards, six per hand.

use crate::cards::Deck;
use crate::errors::GameError;
use crate::player::Hand;

use super::blind::Blind;
use super::deck::DECK_SIZE;

pub fn five_hand_deal(
    deck: &mut Deck,
    hands: &mut [Hand],
    blind: &mut Blind,
) -> Result<(), GameError> {
    if hands.len() != 5 {
        return Err(GameError::invalid_configuration(
            "Five-handed dealing requires exactly 5 players.",
        ));
    }
    if deck.cards_left() != DECK_SIZE {
        return Err(GameError::protocol(format!(
            "Expected a {DECK_SIZE} card deck, found {} cards.",
            deck.cards_left()
        )));
    }

    for hand in hands.iter_mut() {
        hand.extend(deck.deal(3)?);
    }
    blind.set_blind(deck.deal(2)?)?;
    for hand in hands.iter_mut() {
        hand.extend(deck.deal(3)?);
    }
    Ok(())
}
