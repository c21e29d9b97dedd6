//! Team formation and partner resolution.
//!
//! With a picker the hand splits into "pickers" (picker plus partner, when
//! one exists) and "setters" (everyone else). Without a picker every player
//! is a team of one and the hand scores as a leaster.

use crate::cards::{Card, Face, Suit};
use crate::errors::GameError;
use crate::game::Team;
use crate::player::{Hand, Player, Seat};

use super::deck::SheepsheadCard;
use super::options::PartnerStyle;

const PARTNER_MARKER: Card = Card {
    suit: Suit::Diamonds,
    face: Face::Jack,
};

#[derive(Debug, Clone)]
pub struct Teams {
    style: PartnerStyle,
    picker: Option<Seat>,
    partner: Option<Seat>,
    called_suit: Option<Suit>,
    partner_resolved: bool,
}

impl Teams {
    pub fn with_picker(style: PartnerStyle, picker: Seat) -> Self {
        Teams {
            style,
            picker: Some(picker),
            partner: None,
            called_suit: None,
            // goAlone never resolves a partner
            partner_resolved: style == PartnerStyle::GoAlone,
        }
    }

    /// Teams for a hand nobody picked: every player stands alone.
    pub fn without_picker() -> Self {
        Teams {
            style: PartnerStyle::GoAlone,
            picker: None,
            partner: None,
            called_suit: None,
            partner_resolved: true,
        }
    }

    pub fn style(&self) -> PartnerStyle {
        self.style
    }

    pub fn picker(&self) -> Option<Seat> {
        self.picker
    }

    pub fn partner(&self) -> Option<Seat> {
        self.partner
    }

    pub fn called_suit(&self) -> Option<Suit> {
        self.called_suit
    }

    pub fn need_to_call_partner(&self) -> bool {
        !self.partner_resolved
    }

    /// True once the deciding card can no longer turn up in play: the jack
    /// of diamonds (or the called ace) is absent from every hand. Going
    /// alone makes it trivially true; calledAce is unknown until a suit has
    /// been called.
    pub fn partner_known(&self, hands: &[Hand]) -> bool {
        match self.style {
            PartnerStyle::GoAlone => true,
            PartnerStyle::JackOfDiamonds => holder_of(hands, PARTNER_MARKER).is_none(),
            PartnerStyle::CalledAce => match self.called_suit {
                Some(suit) => holder_of(hands, Card::new(suit, Face::Ace)).is_none(),
                None => false,
            },
        }
    }

    /// The picker opts out of having a partner.
    pub fn go_alone(&mut self) {
        self.style = PartnerStyle::GoAlone;
        self.partner = None;
        self.partner_resolved = true;
        tracing::info!("picker has gone alone");
    }

    /// Resolve the partner from the current hands. For `JackOfDiamonds` the
    /// marker's holder is the partner; for `CalledAce` a fail suit must be
    /// supplied and its ace holder becomes the partner. If the deciding card
    /// is in no hand (buried or left in the blind) the picker plays alone.
    pub fn call_partner(&mut self, hands: &[Hand], suit: Option<Suit>) -> Result<(), GameError> {
        let picker = self
            .picker
            .ok_or_else(|| GameError::protocol("Cannot call a partner without a picker."))?;

        match self.style {
            PartnerStyle::JackOfDiamonds => {
                self.partner = holder_of(hands, PARTNER_MARKER);
                self.partner_resolved = true;
                match self.partner {
                    Some(seat) => tracing::info!(seat, "jack of diamonds partner resolved"),
                    None => tracing::info!("jack of diamonds is out of play; picker is alone"),
                }
                Ok(())
            }
            PartnerStyle::CalledAce => {
                let called = suit.ok_or_else(|| {
                    GameError::invalid_parameter(
                        "Must call a suit when playing calledAce partner style.",
                    )
                })?;
                if called == Suit::Diamonds {
                    return Err(GameError::invalid_parameter(
                        "Cannot call diamonds as it is the trump suit.",
                    ));
                }
                let picker_holds_fail = hands
                    .get(picker)
                    .map(|hand| {
                        hand.cards()
                            .iter()
                            .any(|c| c.suit == called && !c.is_trump())
                    })
                    .unwrap_or(false);
                if !picker_holds_fail {
                    return Err(GameError::invalid_parameter(format!(
                        "Cannot call {called} as the picker holds no fail card of that suit."
                    )));
                }
                self.called_suit = Some(called);
                self.partner = holder_of(hands, Card::new(called, Face::Ace));
                self.partner_resolved = true;
                match self.partner {
                    Some(seat) => tracing::info!(seat, suit = %called, "called ace partner resolved"),
                    None => tracing::info!(suit = %called, "called ace is out of play; picker is alone"),
                }
                Ok(())
            }
            PartnerStyle::GoAlone => Err(GameError::protocol(
                "goAlone style has no partner to call.",
            )),
        }
    }

    /// Current team rosters.
    pub fn teams(&self, seating: &[Player]) -> Vec<Team> {
        match self.picker {
            Some(picker) => {
                let mut picking_seats = vec![picker];
                if let Some(partner) = self.partner {
                    if partner != picker {
                        picking_seats.push(partner);
                    }
                }
                let pickers = Team::new(
                    "pickers",
                    picking_seats.iter().map(|&s| seating[s].clone()).collect(),
                );
                let setters = Team::new(
                    "setters",
                    seating
                        .iter()
                        .enumerate()
                        .filter(|(seat, _)| !picking_seats.contains(seat))
                        .map(|(_, p)| p.clone())
                        .collect(),
                );
                vec![pickers, setters]
            }
            None => seating
                .iter()
                .map(|p| Team::new(p.name(), vec![p.clone()]))
                .collect(),
        }
    }
}

fn holder_of(hands: &[Hand], card: Card) -> Option<Seat> {
    hands
        .iter()
        .position(|hand| hand.cards().contains(&card))
}
