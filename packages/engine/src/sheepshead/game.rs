//! The Sheepshead orchestrator.
//!
//! Owns the full lifecycle of one hand: deal, the pick/pass round, burying,
//! partner resolution, trick play, and scoring. Legality is derived from the
//! current phase; a rejected action leaves the game untouched. One event is
//! emitted per successful action.

use crate::cards::{Deck, Suit};
use crate::errors::GameError;
use crate::events::{EventEmitter, GameEvent, NoOpEmitter};
use crate::game::{ActionParams, Game, ParamType, Play, PlayDetail, StateValue};
use crate::player::{Hand, Player, Seat};

use super::actions::Action;
use super::blind::Blind;
use super::bury::BuriedCards;
use super::dealing::five_hand_deal;
use super::deck::sheepshead_deck;
use super::options::{PartnerStyle, SheepsheadOptions};
use super::scoring::{Points, Scoring};
use super::teams::Teams;
use super::tricks::TrickTracker;

const PLAYERS: usize = 5;
const CARDS_PER_HAND: usize = 6;

/// Lifecycle phase, derived from component state rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dealing,
    Bidding,
    Burying,
    PartnerCall,
    TrickPlay,
    Complete,
}

pub struct Sheepshead {
    options: SheepsheadOptions,
    /// Players in table order, rotated so the dealer sits last.
    seating: Vec<Player>,
    hands: Vec<Hand>,
    deck: Deck,
    blind: Blind,
    buried: BuriedCards,
    teams: Option<Teams>,
    tracker: TrickTracker,
    scoring: Scoring,
    cards_dealt: bool,
    emitter: Box<dyn EventEmitter>,
}

impl Sheepshead {
    /// A new hand with a freshly shuffled deck. `game_number` (1-based)
    /// rotates the deal around the table.
    pub fn new(
        players: &[Player],
        game_number: u32,
        options: SheepsheadOptions,
    ) -> Result<Self, GameError> {
        Sheepshead::with_deck(players, game_number, options, sheepshead_deck())
    }

    /// A new hand with an explicit deck order, for deterministic games.
    pub fn with_deck(
        players: &[Player],
        game_number: u32,
        options: SheepsheadOptions,
        deck: Deck,
    ) -> Result<Self, GameError> {
        if players.len() != PLAYERS {
            return Err(GameError::invalid_configuration(format!(
                "{} is an unsupported number of players.",
                players.len()
            )));
        }
        if game_number < 1 {
            return Err(GameError::invalid_configuration("gameNumber cannot be < 1"));
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].contains(player) {
                return Err(GameError::invalid_configuration(format!(
                    "Player names must be unique; ({}) appears more than once.",
                    player.name()
                )));
            }
        }

        let mut seating = players.to_vec();
        let seats = seating.len();
        seating.rotate_left(game_number as usize % seats);

        let blind = Blind::new(
            seating
                .iter()
                .enumerate()
                .map(|(seat, player)| (seat, player.clone()))
                .collect(),
        );
        let buried = BuriedCards::new(seating.len())?;
        let tracker = TrickTracker::new((0..seating.len()).collect(), CARDS_PER_HAND);
        let scoring = options.scoring;

        Ok(Sheepshead {
            options,
            hands: vec![Hand::new(); seating.len()],
            seating,
            deck,
            blind,
            buried,
            teams: None,
            tracker,
            scoring,
            cards_dealt: false,
            emitter: Box::new(NoOpEmitter),
        })
    }

    pub fn dealer(&self) -> &Player {
        &self.seating[self.seating.len() - 1]
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    fn dealer_seat(&self) -> Seat {
        self.seating.len() - 1
    }

    fn seat_of(&self, player: &Player) -> Result<Seat, GameError> {
        self.seating
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| GameError::unknown_player(player.name()))
    }

    fn phase(&self) -> Phase {
        if !self.cards_dealt {
            return Phase::Dealing;
        }
        if !self.blind.blind_round_complete() {
            return Phase::Bidding;
        }
        if self.blind.picker().is_some() {
            if !self.buried.cards_buried() {
                return Phase::Burying;
            }
            if !self.tracker.play_has_begun() {
                return Phase::PartnerCall;
            }
        }
        if self.tracker.play_is_complete() {
            Phase::Complete
        } else {
            Phase::TrickPlay
        }
    }

    fn legal_actions(&self, seat: Seat) -> Vec<Action> {
        match self.phase() {
            Phase::Dealing => {
                if seat == self.dealer_seat() {
                    vec![Action::Deal]
                } else {
                    vec![]
                }
            }
            Phase::Bidding => {
                if self.blind.player_has_option(seat) {
                    let mut actions = vec![Action::Pick, Action::Pass];
                    if self.blind.has_last_option(seat) {
                        actions.push(Action::CallLeaster);
                        actions.push(Action::CallDoubler);
                    }
                    actions
                } else {
                    vec![]
                }
            }
            Phase::Burying => {
                if self.blind.picker() == Some(seat) {
                    vec![Action::Bury]
                } else {
                    vec![]
                }
            }
            Phase::PartnerCall => {
                if self.blind.picker() != Some(seat) {
                    return vec![];
                }
                match &self.teams {
                    Some(teams)
                        if teams.need_to_call_partner()
                            && teams.style() == PartnerStyle::CalledAce =>
                    {
                        vec![Action::CallAce]
                    }
                    // a called ace binds the partner; only jackOfDiamonds
                    // leaves the go-alone choice open
                    Some(teams) if teams.style() == PartnerStyle::JackOfDiamonds => {
                        vec![Action::GoAlone, Action::StartPlay]
                    }
                    Some(_) => vec![Action::StartPlay],
                    None => vec![],
                }
            }
            Phase::TrickPlay => {
                if self.tracker.waiting_on() == Some(seat) {
                    vec![Action::PlayCard]
                } else {
                    vec![]
                }
            }
            Phase::Complete => vec![],
        }
    }

    fn execute(
        &mut self,
        seat: Seat,
        action: Action,
        params: Option<ActionParams>,
    ) -> Result<(), GameError> {
        match action {
            Action::Deal => self.deal(),
            Action::Pass => self.pass(seat),
            Action::Pick => self.pick(seat),
            Action::Bury => {
                let indices = require_int_list(action, params)?;
                self.bury(seat, &indices)
            }
            Action::CallAce => {
                let suit = parse_called_suit(&require_str(action, params)?)?;
                self.call_ace(suit)
            }
            Action::GoAlone => {
                match self.teams.as_mut() {
                    Some(teams) => {
                        teams.go_alone();
                        Ok(())
                    }
                    None => Err(GameError::protocol("Teams have not been formed.")),
                }
            }
            Action::StartPlay => self.tracker.begin_play(),
            Action::PlayCard => {
                let index = require_int(action, params)?;
                let player = self.seating[seat].clone();
                self.tracker
                    .play_card(seat, &player, &mut self.hands[seat], index)?;
                Ok(())
            }
            Action::CallLeaster | Action::CallDoubler => Err(GameError::illegal_action(format!(
                "({action}) is not supported at this table."
            ))),
        }
    }

    fn deal(&mut self) -> Result<(), GameError> {
        five_hand_deal(&mut self.deck, &mut self.hands, &mut self.blind)?;
        self.cards_dealt = true;
        tracing::info!(dealer = %self.dealer(), "dealt");
        Ok(())
    }

    fn pass(&mut self, seat: Seat) -> Result<(), GameError> {
        self.blind.pass(seat)?;
        if self.blind.blind_round_complete() && self.blind.picker().is_none() {
            // nobody wanted the blind: the hand plays out as a leaster
            self.scoring = Scoring::Leaster;
            self.teams = Some(Teams::without_picker());
            self.tracker.begin_play()?;
            tracing::info!("all players passed; scoring the hand as a leaster");
        }
        Ok(())
    }

    fn pick(&mut self, seat: Seat) -> Result<(), GameError> {
        self.blind.pick(seat, &mut self.hands[seat])?;
        self.teams = Some(Teams::with_picker(self.options.partner_style, seat));
        Ok(())
    }

    fn bury(&mut self, seat: Seat, indices: &[usize]) -> Result<(), GameError> {
        let player = self.seating[seat].clone();
        self.buried.bury(&player, &mut self.hands[seat], indices)?;
        if let Some(teams) = self.teams.as_mut() {
            if teams.style() == PartnerStyle::JackOfDiamonds {
                teams.call_partner(&self.hands, None)?;
            }
        }
        Ok(())
    }

    fn call_ace(&mut self, suit: Suit) -> Result<(), GameError> {
        match self.teams.as_mut() {
            Some(teams) => teams.call_partner(&self.hands, Some(suit)),
            None => Err(GameError::protocol("Teams have not been formed.")),
        }
    }

    fn emit_action(&mut self, seat: Seat, action: Action) {
        let event = GameEvent::for_player(self.seating[seat].clone(), action.name());
        if let Err(err) = self.emitter.emit(&event) {
            tracing::warn!(error = %err, event_type = %action, "failed to deliver game event");
        }
    }

    fn points(&self) -> Result<Points<'_>, GameError> {
        let teams = self
            .teams
            .as_ref()
            .ok_or_else(|| GameError::protocol("Cannot calculate points when teams are unknown."))?;
        Ok(Points::new(
            self.scoring,
            self.options.leaster_tie_break,
            &self.tracker,
            &self.buried,
            teams,
            &self.seating,
        ))
    }

    fn current_plays(&self) -> Vec<Play> {
        self.tracker
            .current_plays()
            .iter()
            .map(|&(seat, card)| Play {
                player: self.seating[seat].clone(),
                card,
            })
            .collect()
    }
}

impl Game for Sheepshead {
    fn game_type(&self) -> &'static str {
        "sheepshead"
    }

    fn current_player(&self) -> Player {
        let seat = match self.phase() {
            Phase::Dealing | Phase::Complete => self.dealer_seat(),
            Phase::Bidding => self.blind.option().unwrap_or_else(|| self.dealer_seat()),
            Phase::Burying | Phase::PartnerCall => {
                self.blind.picker().unwrap_or_else(|| self.dealer_seat())
            }
            Phase::TrickPlay => self
                .tracker
                .waiting_on()
                .unwrap_or_else(|| self.dealer_seat()),
        };
        self.seating[seat].clone()
    }

    fn available_actions(&self, player: &Player) -> Result<Vec<String>, GameError> {
        let seat = self.seat_of(player)?;
        Ok(self
            .legal_actions(seat)
            .iter()
            .map(|a| a.name().to_string())
            .collect())
    }

    fn describe_action(&self, action: &str) -> Result<String, GameError> {
        Ok(Action::parse(action)?.describe().to_string())
    }

    fn action_parameter_type(&self, action: &str) -> Result<Option<ParamType>, GameError> {
        Ok(Action::parse(action)?.parameter_type())
    }

    fn perform_action(
        &mut self,
        player: &Player,
        action: &str,
        params: Option<ActionParams>,
    ) -> Result<String, GameError> {
        let seat = self.seat_of(player)?;
        let action = Action::parse(action)?;

        if !self.legal_actions(seat).contains(&action) {
            return Err(GameError::illegal_action(format!(
                "Player {player} cannot perform {action} at this time."
            )));
        }

        self.execute(seat, action, params)?;
        self.emit_action(seat, action);
        Ok(format!("{player} performed {action}"))
    }

    fn available_states(&self) -> Vec<String> {
        let mut keys = vec![
            "hand".to_string(),
            "blind".to_string(),
            "partnerStyle".to_string(),
            "scoring".to_string(),
            "currentTrick".to_string(),
        ];
        if self.teams.is_some() {
            keys.push("teams".to_string());
            keys.push("partnerKnown".to_string());
        }
        if self.tracker.last_complete_trick().is_some() {
            keys.push("lastTrickDetails".to_string());
            keys.push("lastTrickWinner".to_string());
        }
        if self.is_complete() {
            keys.push("gameOutcome".to_string());
            keys.push("gameWinner".to_string());
            keys.push("score".to_string());
        }
        keys
    }

    fn state(&self, key: &str, for_player: Option<&Player>) -> Result<StateValue, GameError> {
        if !self.available_states().iter().any(|k| k == key) {
            return Err(GameError::unavailable_state(key));
        }
        match key {
            "hand" => {
                let player = for_player.ok_or_else(|| {
                    GameError::invalid_parameter("Must specify player for state (hand).")
                })?;
                let seat = self.seat_of(player)?;
                Ok(StateValue::Cards(self.hands[seat].cards().to_vec()))
            }
            "blind" => {
                let player = for_player.ok_or_else(|| {
                    GameError::invalid_parameter("Must specify player for state (blind).")
                })?;
                let seat = self.seat_of(player)?;
                Ok(StateValue::Cards(self.blind.peek(seat)?.to_vec()))
            }
            "partnerStyle" => {
                let style = self
                    .teams
                    .as_ref()
                    .map(|t| t.style())
                    .unwrap_or(self.options.partner_style);
                Ok(StateValue::Text(style.as_str().to_string()))
            }
            "scoring" => Ok(StateValue::Text(self.scoring.as_str().to_string())),
            "currentTrick" => Ok(StateValue::Plays(self.current_plays())),
            "teams" => match &self.teams {
                Some(teams) => Ok(StateValue::Teams(teams.teams(&self.seating))),
                None => Err(GameError::unavailable_state(key)),
            },
            "partnerKnown" => match &self.teams {
                Some(teams) => Ok(StateValue::Bool(teams.partner_known(&self.hands))),
                None => Err(GameError::unavailable_state(key)),
            },
            "lastTrickDetails" => {
                let details = self
                    .tracker
                    .last_trick_details()
                    .ok_or_else(|| GameError::unavailable_state(key))?;
                Ok(StateValue::PlayDetails(
                    details
                        .into_iter()
                        .map(|(seat, card, winner)| PlayDetail {
                            player: self.seating[seat].clone(),
                            card,
                            winner,
                        })
                        .collect(),
                ))
            }
            "lastTrickWinner" => {
                let winner = self
                    .tracker
                    .last_complete_trick()
                    .and_then(|t| t.trick_winner())
                    .ok_or_else(|| GameError::unavailable_state(key))?;
                Ok(StateValue::Player(self.seating[winner].clone()))
            }
            "gameOutcome" => Ok(StateValue::Outcome(self.points()?.determine_points()?)),
            "gameWinner" => Ok(StateValue::Team(self.points()?.determine_winner()?)),
            "score" => Ok(StateValue::Scores(self.points()?.determine_score()?)),
            _ => Err(GameError::unavailable_state(key)),
        }
    }

    fn is_complete(&self) -> bool {
        self.tracker.play_is_complete()
    }

    fn set_emitter(&mut self, emitter: Box<dyn EventEmitter>) {
        self.emitter = emitter;
    }
}

fn require_int(action: Action, params: Option<ActionParams>) -> Result<usize, GameError> {
    match params {
        Some(ActionParams::Integer(value)) => Ok(value),
        _ => Err(GameError::invalid_parameter(format!(
            "({action}) requires an Integer parameter."
        ))),
    }
}

fn require_int_list(action: Action, params: Option<ActionParams>) -> Result<Vec<usize>, GameError> {
    match params {
        Some(ActionParams::IntList(values)) => Ok(values),
        _ => Err(GameError::invalid_parameter(format!(
            "({action}) requires an IntList parameter."
        ))),
    }
}

fn require_str(action: Action, params: Option<ActionParams>) -> Result<String, GameError> {
    match params {
        Some(ActionParams::Str(value)) => Ok(value),
        _ => Err(GameError::invalid_parameter(format!(
            "({action}) requires a Str parameter."
        ))),
    }
}

fn parse_called_suit(name: &str) -> Result<Suit, GameError> {
    match name.to_ascii_lowercase().as_str() {
        "diamonds" => Ok(Suit::Diamonds),
        "hearts" => Ok(Suit::Hearts),
        "spades" => Ok(Suit::Spades),
        "clubs" => Ok(Suit::Clubs),
        _ => Err(GameError::invalid_parameter(format!(
            "({name}) is not a suit."
        ))),
    }
}
