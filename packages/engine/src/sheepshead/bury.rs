//! Buried cards.
//!
//! After picking the blind the picker discards the same number of cards face
//! down. Buried points count toward the picking team at scoring time.

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{Hand, Player};

use super::deck::SheepsheadCard;

#[derive(Debug, Clone)]
pub struct BuriedCards {
    bury_size: usize,
    cards: Vec<Card>,
}

impl BuriedCards {
    pub fn new(number_of_players: usize) -> Result<Self, GameError> {
        let bury_size = match number_of_players {
            5 => 2,
            4 => 4,
            n => {
                return Err(GameError::invalid_configuration(format!(
                    "Cannot determine bury size for {n} players."
                )))
            }
        };
        Ok(BuriedCards {
            bury_size,
            cards: Vec::new(),
        })
    }

    pub fn bury_size(&self) -> usize {
        self.bury_size
    }

    pub fn cards_buried(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Bury the cards at `indices` from `hand`. One-shot: a second bury and a
    /// wrong index count are both rejected before any card moves.
    pub fn bury(
        &mut self,
        player: &Player,
        hand: &mut Hand,
        indices: &[usize],
    ) -> Result<(), GameError> {
        if self.cards_buried() {
            return Err(GameError::illegal_action("Cards have already been buried."));
        }

        let mut distinct: Vec<usize> = Vec::with_capacity(indices.len());
        for &index in indices {
            if !distinct.contains(&index) {
                distinct.push(index);
            }
        }
        if distinct.len() != self.bury_size {
            return Err(GameError::invalid_parameter(format!(
                "Must bury exactly {} cards, received {} indices.",
                self.bury_size,
                distinct.len()
            )));
        }

        self.cards = hand.remove(&distinct)?;
        tracing::debug!(
            player = %player,
            cards = ?self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "buried"
        );
        Ok(())
    }

    /// Card points buried away.
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|c| c.points()).sum()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
