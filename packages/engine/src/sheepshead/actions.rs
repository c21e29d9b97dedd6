//! The Sheepshead action vocabulary.

use std::fmt;

use crate::errors::GameError;
use crate::game::ParamType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deal,
    Pick,
    Pass,
    Bury,
    CallLeaster,
    CallDoubler,
    CallAce,
    GoAlone,
    StartPlay,
    PlayCard,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::Deal,
        Action::Pick,
        Action::Pass,
        Action::Bury,
        Action::CallLeaster,
        Action::CallDoubler,
        Action::CallAce,
        Action::GoAlone,
        Action::StartPlay,
        Action::PlayCard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Deal => "deal",
            Action::Pick => "pick",
            Action::Pass => "pass",
            Action::Bury => "bury",
            Action::CallLeaster => "callLeaster",
            Action::CallDoubler => "callDoubler",
            Action::CallAce => "callAce",
            Action::GoAlone => "goAlone",
            Action::StartPlay => "startPlay",
            Action::PlayCard => "playCard",
        }
    }

    pub fn parse(name: &str) -> Result<Action, GameError> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.name() == name)
            .ok_or_else(|| GameError::unknown_action(name))
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Action::Deal => "Deal the cards for the game.",
            Action::Pick => "Pick the cards in the blind.",
            Action::Pass => "Pass the option to pick the blind to the next player.",
            Action::Bury => "Bury the same number of cards you picked up from the blind.",
            Action::CallLeaster => "Call a leaster if you have the last option on the blind.",
            Action::CallDoubler => "Call a doubler if you have the last option on the blind.",
            Action::CallAce => {
                "Call a fail suit you hold; the player with that ace becomes your partner."
            }
            Action::GoAlone => "Declare you want no partner after you pick.",
            Action::StartPlay => "Begin trick play.",
            Action::PlayCard => "Play a card if it is your turn.",
        }
    }

    pub fn parameter_type(&self) -> Option<ParamType> {
        match self {
            Action::Bury => Some(ParamType::IntList),
            Action::CallAce => Some(ParamType::Str),
            Action::PlayCard => Some(ParamType::Integer),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
