//! Tricks and the trick tracker.
//!
//! A trick takes one card from each seat. The led card fixes the class to
//! follow; a player holding that class must follow it, while trump is always
//! legal to lead. Trump dominates: the highest trump wins, otherwise the
//! highest card of the led class. The winner of a trick leads the next.

use std::collections::BTreeMap;

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{Hand, Player, Seat};

use super::deck::{PlayClass, SheepsheadCard};

#[derive(Debug, Clone)]
pub struct Trick {
    number_of_players: usize,
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new(number_of_players: usize) -> Self {
        Trick {
            number_of_players,
            plays: Vec::with_capacity(number_of_players),
        }
    }

    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// How many cards have been played; doubles as the index of the next
    /// seat in the trick's play order.
    pub fn current_seat_index(&self) -> usize {
        self.plays.len()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.number_of_players
    }

    /// The class of the led card.
    pub fn suit_led(&self) -> Option<PlayClass> {
        self.plays.first().map(|(_, card)| card.play_class())
    }

    /// Play the card at `card_index` from `hand`. The card is peeked first;
    /// an illegal play rejects without touching the hand.
    pub fn play(
        &mut self,
        seat: Seat,
        player: &Player,
        hand: &mut Hand,
        card_index: usize,
    ) -> Result<Card, GameError> {
        if self.is_complete() {
            return Err(GameError::protocol("Trick is already complete."));
        }
        let proposed = hand.peek(card_index)?;
        if let Some(led) = self.suit_led() {
            if proposed.play_class() != led
                && hand.cards().iter().any(|c| c.play_class() == led)
            {
                return Err(GameError::illegal_action(format!(
                    "{player} cannot play {proposed} as {led} was led, and {player} has {led} remaining."
                )));
            }
        }
        hand.remove(&[card_index])?;
        tracing::info!(player = %player, card = %proposed, "played");
        self.plays.push((seat, proposed));
        Ok(proposed)
    }

    /// The seat currently winning the trick. With trump on the table the
    /// highest trump wins; equal powers go to the earlier play.
    pub fn trick_winner(&self) -> Option<Seat> {
        let led = self.suit_led()?;
        let mut best: Option<(Seat, Card)> = None;
        for &(seat, card) in &self.plays {
            let class = card.play_class();
            if class != PlayClass::Trump && class != led {
                continue;
            }
            best = match best {
                None => Some((seat, card)),
                Some((_, current)) if beats(card, current) => Some((seat, card)),
                Some(current) => Some(current),
            };
        }
        best.map(|(seat, _)| seat)
    }

    pub fn trick_points(&self) -> u32 {
        self.plays.iter().map(|(_, card)| card.points()).sum()
    }
}

/// True if `challenger` beats the `current` best card of a trick.
fn beats(challenger: Card, current: Card) -> bool {
    match (challenger.is_trump(), current.is_trump()) {
        (true, false) => true,
        (false, true) => false,
        _ => challenger.power() > current.power(),
    }
}

/// Trick play details for state projection: seat, card, winner flag.
pub type TrickDetails = Vec<(Seat, Card, bool)>;

#[derive(Debug, Clone)]
pub struct TrickTracker {
    seat_order: Vec<Seat>,
    tricks: Vec<Trick>,
    cards_per_hand: usize,
    play_started: bool,
}

impl TrickTracker {
    pub fn new(seat_order: Vec<Seat>, cards_per_hand: usize) -> Self {
        TrickTracker {
            seat_order,
            tricks: Vec::new(),
            cards_per_hand,
            play_started: false,
        }
    }

    pub fn play_has_begun(&self) -> bool {
        self.play_started
    }

    pub fn begin_play(&mut self) -> Result<(), GameError> {
        if self.play_started {
            return Err(GameError::protocol("Play has already begun."));
        }
        self.play_started = true;
        tracing::debug!(order = ?self.seat_order, "play has begun");
        Ok(())
    }

    pub fn completed_tricks(&self) -> usize {
        self.tricks.iter().filter(|t| t.is_complete()).count()
    }

    pub fn play_is_complete(&self) -> bool {
        self.completed_tricks() == self.cards_per_hand
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// The seat whose turn it is, or `None` outside of trick play.
    pub fn waiting_on(&self) -> Option<Seat> {
        if !self.play_started || self.play_is_complete() {
            return None;
        }
        match self.tricks.last() {
            Some(trick) if !trick.is_complete() => {
                self.seat_order.get(trick.current_seat_index()).copied()
            }
            // between tricks the previous winner leads
            Some(trick) => trick.trick_winner(),
            None => self.seat_order.first().copied(),
        }
    }

    /// Play a card into the open trick, opening a new one (rotated so the
    /// last winner leads) when needed.
    pub fn play_card(
        &mut self,
        seat: Seat,
        player: &Player,
        hand: &mut Hand,
        card_index: usize,
    ) -> Result<Card, GameError> {
        match self.waiting_on() {
            Some(s) if s == seat => {}
            Some(_) => {
                return Err(GameError::illegal_action(format!(
                    "{player} cannot play out of turn."
                )))
            }
            None => return Err(GameError::protocol("Play is not in progress.")),
        }
        self.ensure_open_trick();
        match self.tricks.last_mut() {
            Some(trick) => trick.play(seat, player, hand, card_index),
            None => Err(GameError::protocol("No open trick.")),
        }
    }

    fn ensure_open_trick(&mut self) {
        let needs_new = match self.tricks.last() {
            Some(trick) => trick.is_complete(),
            None => true,
        };
        if !needs_new || self.play_is_complete() {
            return;
        }
        if let Some(winner) = self.tricks.last().and_then(|t| t.trick_winner()) {
            if let Some(pos) = self.seat_order.iter().position(|&s| s == winner) {
                self.seat_order.rotate_left(pos);
            }
            tracing::debug!(winner, order = ?self.seat_order, "rotated lead to trick winner");
        }
        self.tricks.push(Trick::new(self.seat_order.len()));
        tracing::debug!(trick = self.tricks.len(), "trick created");
    }

    /// Plays in the trick currently being filled, if one is open.
    pub fn current_plays(&self) -> &[(Seat, Card)] {
        match self.tricks.last() {
            Some(trick) if !trick.is_complete() => trick.plays(),
            _ => &[],
        }
    }

    pub fn last_complete_trick(&self) -> Option<&Trick> {
        self.tricks.iter().rev().find(|t| t.is_complete())
    }

    /// The plays of the last completed trick with the winning play flagged.
    pub fn last_trick_details(&self) -> Option<TrickDetails> {
        let trick = self.last_complete_trick()?;
        let winner = trick.trick_winner()?;
        Some(
            trick
                .plays()
                .iter()
                .map(|&(seat, card)| (seat, card, seat == winner))
                .collect(),
        )
    }

    /// Trick points taken so far, keyed by the winning seat. Seats that have
    /// taken no trick are absent.
    pub fn points_by_seat(&self) -> BTreeMap<Seat, u32> {
        let mut totals = BTreeMap::new();
        for trick in self.tricks.iter().filter(|t| t.is_complete()) {
            if let Some(winner) = trick.trick_winner() {
                *totals.entry(winner).or_insert(0) += trick.trick_points();
            }
        }
        totals
    }

    /// Index of the last trick each seat has taken, for tie-breaking.
    pub fn last_trick_taken_by_seat(&self) -> BTreeMap<Seat, usize> {
        let mut last = BTreeMap::new();
        for (index, trick) in self.tricks.iter().enumerate().filter(|(_, t)| t.is_complete()) {
            if let Some(winner) = trick.trick_winner() {
                last.insert(winner, index);
            }
        }
        last
    }
}
