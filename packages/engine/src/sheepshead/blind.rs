//! The blind and the pick/pass round.
//!
//! The blind is the set of cards not dealt to any hand. Starting left of the
//! dealer, each player in turn may pick it or pass; the first pick ends the
//! round and skips everyone after. Decisions are irrevocable.

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{Hand, Player, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// The seat is waiting to exercise its option.
    Waiting,
    Passed,
    Picked,
    /// The seat never got an option because an earlier seat picked.
    Skipped,
}

#[derive(Debug, Clone)]
struct SeatDecision {
    seat: Seat,
    player: Player,
    decision: Decision,
}

#[derive(Debug, Clone)]
pub struct Blind {
    decisions: Vec<SeatDecision>,
    cards: Vec<Card>,
}

impl Blind {
    /// `decision_order` lists the seats in option order, player left of the
    /// dealer first, dealer last.
    pub fn new(decision_order: Vec<(Seat, Player)>) -> Self {
        Blind {
            decisions: decision_order
                .into_iter()
                .map(|(seat, player)| SeatDecision {
                    seat,
                    player,
                    decision: Decision::Waiting,
                })
                .collect(),
            cards: Vec::new(),
        }
    }

    pub fn set_blind(&mut self, cards: Vec<Card>) -> Result<(), GameError> {
        if !self.cards.is_empty() {
            return Err(GameError::protocol("Blind has already been set."));
        }
        tracing::debug!(cards = ?cards.iter().map(|c| c.to_string()).collect::<Vec<_>>(), "blind set");
        self.cards = cards;
        Ok(())
    }

    /// True while the blind can still be picked.
    pub fn is_available(&self) -> bool {
        !self.cards.is_empty() && !self.decisions.iter().any(|d| d.decision == Decision::Picked)
    }

    /// The seat currently holding the option, if the blind is available.
    pub fn option(&self) -> Option<Seat> {
        if !self.is_available() {
            return None;
        }
        self.decisions
            .iter()
            .find(|d| d.decision == Decision::Waiting)
            .map(|d| d.seat)
    }

    pub fn player_has_option(&self, seat: Seat) -> bool {
        self.option() == Some(seat)
    }

    /// True if `seat` is the final seat in the option order. The last option
    /// holder may call a leaster or doubler instead of picking.
    pub fn has_last_option(&self, seat: Seat) -> bool {
        self.player_has_option(seat)
            && self.decisions.last().map(|d| d.seat) == Some(seat)
    }

    pub fn blind_round_complete(&self) -> bool {
        !self.decisions.iter().any(|d| d.decision == Decision::Waiting)
    }

    pub fn picker(&self) -> Option<Seat> {
        self.decisions
            .iter()
            .find(|d| d.decision == Decision::Picked)
            .map(|d| d.seat)
    }

    /// Look at the blind. Only the seat currently holding the option may
    /// peek; after a pick only the picker may look back at what they took.
    pub fn peek(&self, seat: Seat) -> Result<&[Card], GameError> {
        if self.picker() == Some(seat) {
            return Ok(&self.cards);
        }
        match self.option() {
            Some(holder) if holder == seat => Ok(&self.cards),
            Some(holder) => Err(self.not_option_holder(seat, holder, "peek")),
            None => Err(GameError::illegal_action(
                "Cannot peek as the blind is not available.",
            )),
        }
    }

    pub fn pass(&mut self, seat: Seat) -> Result<(), GameError> {
        let holder = self
            .option()
            .ok_or_else(|| GameError::illegal_action("Cannot pass as blind has already been picked."))?;
        if holder != seat {
            return Err(self.not_option_holder(seat, holder, "pass"));
        }
        self.set_decision(seat, Decision::Passed);
        tracing::info!(player = %self.name_of(seat), "passed on the blind");
        Ok(())
    }

    /// Pick the blind: its cards join `hand` and every later seat is skipped.
    pub fn pick(&mut self, seat: Seat, hand: &mut Hand) -> Result<(), GameError> {
        let holder = self
            .option()
            .ok_or_else(|| GameError::illegal_action("Cannot pick as blind has already been picked."))?;
        if holder != seat {
            return Err(self.not_option_holder(seat, holder, "pick"));
        }
        self.set_decision(seat, Decision::Picked);
        for decision in &mut self.decisions {
            if decision.decision == Decision::Waiting {
                decision.decision = Decision::Skipped;
            }
        }
        hand.extend(self.cards.iter().copied());
        tracing::info!(player = %self.name_of(seat), "picked the blind");
        Ok(())
    }

    fn set_decision(&mut self, seat: Seat, decision: Decision) {
        for entry in &mut self.decisions {
            if entry.seat == seat {
                entry.decision = decision;
            }
        }
    }

    fn not_option_holder(&self, seat: Seat, holder: Seat, verb: &str) -> GameError {
        GameError::illegal_action(format!(
            "{} cannot {verb} as {} currently has the option.",
            self.name_of(seat),
            self.name_of(holder)
        ))
    }

    fn name_of(&self, seat: Seat) -> String {
        self.decisions
            .iter()
            .find(|d| d.seat == seat)
            .map(|d| d.player.name().to_string())
            .unwrap_or_else(|| format!("seat {seat}"))
    }
}
