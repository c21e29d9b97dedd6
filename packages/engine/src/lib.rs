//! A rules engine for trick-taking card games.
//!
//! The generic layer (`cards`, `player`, `game`, `events`) knows nothing about
//! any particular game; concrete rules live in game modules such as
//! [`sheepshead`]. Callers drive a game exclusively through the [`Game`]
//! trait: inspect `available_actions`, perform one, read projections back via
//! `state`.

pub mod cards;
pub mod errors;
pub mod events;
pub mod game;
pub mod player;
pub mod sheepshead;

pub use cards::{Card, Deck, Face, Suit};
pub use errors::GameError;
pub use events::{
    CaptureEmitter, ComposedEmitter, EmitError, EventEmitter, GameEvent, LogEmitter, NoOpEmitter,
};
pub use game::{ActionParams, Game, ParamType, StateValue};
pub use player::{Hand, Player, Seat};
pub use sheepshead::Sheepshead;
