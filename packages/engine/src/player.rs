//! Player identity and hand management.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Seat index into a game's rotated player order. Components address players
/// by seat; `Player` values only appear at the game contract boundary.
pub type Seat = usize;

/// A participant, identified by name. Two `Player` values with the same name
/// are the same player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An ordered hand of cards.
///
/// Cards are addressed by index. Removal collapses duplicate indices,
/// resolves all positions against the hand as it was when the request was
/// made, and preserves the relative order of the remaining cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Look at the card at `index` without removing it.
    pub fn peek(&self, index: usize) -> Result<Card, GameError> {
        self.cards
            .get(index)
            .copied()
            .ok_or_else(|| self.index_error(index))
    }

    /// Remove the cards at the requested indices, returning them in request
    /// order. Fails without mutating if any index is out of bounds.
    pub fn remove(&mut self, indices: &[usize]) -> Result<Vec<Card>, GameError> {
        let mut requested: Vec<usize> = Vec::with_capacity(indices.len());
        for &index in indices {
            if !requested.contains(&index) {
                requested.push(index);
            }
        }

        for &index in &requested {
            if index >= self.cards.len() {
                return Err(self.index_error(index));
            }
        }

        let found: Vec<Card> = requested.iter().map(|&i| self.cards[i]).collect();

        let mut positions = requested;
        positions.sort_unstable();
        for &index in positions.iter().rev() {
            self.cards.remove(index);
        }

        Ok(found)
    }

    fn index_error(&self, index: usize) -> GameError {
        GameError::invalid_parameter(format!(
            "Requested card at index {index}, but hand only has {} cards.",
            self.cards.len()
        ))
    }
}
