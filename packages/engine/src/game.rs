//! The game contract.
//!
//! A protocol layer drives any game the same way: ask who the current player
//! is, list that player's available actions, perform one, and read state
//! projections back by key. Parameters and state values are tagged variants
//! so dispatch stays explicit at the boundary.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::events::EventEmitter;
use crate::player::Player;

/// Parameter shape an action expects, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Integer,
    Str,
    IntList,
    StrList,
}

/// Parameters supplied with an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionParams {
    Integer(usize),
    Str(String),
    IntList(Vec<usize>),
    StrList(Vec<String>),
}

impl ActionParams {
    pub fn param_type(&self) -> ParamType {
        match self {
            ActionParams::Integer(_) => ParamType::Integer,
            ActionParams::Str(_) => ParamType::Str,
            ActionParams::IntList(_) => ParamType::IntList,
            ActionParams::StrList(_) => ParamType::StrList,
        }
    }
}

/// A named team and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, members: Vec<Player>) -> Self {
        Team {
            name: name.into(),
            members,
        }
    }
}

/// A team and the card points it has taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team: Team,
    pub points: u32,
}

/// The point outcome of a completed hand, ranked by points taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winners: TeamPoints,
    pub losers: TeamPoints,
}

impl GameOutcome {
    pub fn by_team_name(&self, name: &str) -> Result<&TeamPoints, GameError> {
        if self.winners.team.name == name {
            Ok(&self.winners)
        } else if self.losers.team.name == name {
            Ok(&self.losers)
        } else {
            Err(GameError::protocol(format!(
                "No team by name: {name} was found."
            )))
        }
    }
}

/// One player's score delta for a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: Player,
    pub score: i32,
}

/// One card played into a trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: Player,
    pub card: Card,
}

/// One card played into a completed trick, with the winner flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayDetail {
    pub player: Player,
    pub card: Card,
    pub winner: bool,
}

/// A state projection returned by [`Game::state`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum StateValue {
    Cards(Vec<Card>),
    Plays(Vec<Play>),
    PlayDetails(Vec<PlayDetail>),
    Player(Player),
    Team(Team),
    Teams(Vec<Team>),
    Outcome(GameOutcome),
    Scores(Vec<PlayerScore>),
    Bool(bool),
    Text(String),
}

/// Uniform interface to a running game.
pub trait Game {
    /// Short identifier for the rule set, e.g. `"sheepshead"`.
    fn game_type(&self) -> &'static str;

    /// The player the game is waiting on.
    fn current_player(&self) -> Player;

    /// Actions `player` may legally perform right now. Empty when it is not
    /// their turn.
    fn available_actions(&self, player: &Player) -> Result<Vec<String>, GameError>;

    fn describe_action(&self, action: &str) -> Result<String, GameError>;

    fn action_parameter_type(&self, action: &str) -> Result<Option<ParamType>, GameError>;

    /// Perform an action on behalf of `player`. Returns a log line describing
    /// what happened. Rejected actions leave the game unchanged.
    fn perform_action(
        &mut self,
        player: &Player,
        action: &str,
        params: Option<ActionParams>,
    ) -> Result<String, GameError>;

    /// State keys that can currently be queried.
    fn available_states(&self) -> Vec<String>;

    /// Read a state projection. Player-scoped keys (a hand or the blind,
    /// for instance) require `for_player`.
    fn state(&self, key: &str, for_player: Option<&Player>) -> Result<StateValue, GameError>;

    fn is_complete(&self) -> bool;

    fn set_emitter(&mut self, emitter: Box<dyn EventEmitter>);
}
