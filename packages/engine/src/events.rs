//! Game event emission.
//!
//! Games publish one [`GameEvent`] per successful action through an
//! [`EventEmitter`]. The engine owns no I/O; transports implement the trait.
//! Delivery failures never affect game state.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::Player;

/// A notification that something happened in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub target_player: Option<Player>,
    pub event_type: String,
    pub event_message: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl GameEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        GameEvent {
            target_player: None,
            event_type: event_type.into(),
            event_message: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn for_player(player: Player, event_type: impl Into<String>) -> Self {
        GameEvent {
            target_player: Some(player),
            ..GameEvent::new(event_type)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.event_message = Some(message.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Failure to deliver an event to a sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("event delivery failed: {detail}")]
pub struct EmitError {
    pub detail: String,
}

impl EmitError {
    pub fn new(detail: impl Into<String>) -> Self {
        EmitError {
            detail: detail.into(),
        }
    }
}

pub trait EventEmitter {
    fn emit(&mut self, event: &GameEvent) -> Result<(), EmitError>;
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpEmitter;

impl EventEmitter for NoOpEmitter {
    fn emit(&mut self, _event: &GameEvent) -> Result<(), EmitError> {
        Ok(())
    }
}

/// Records every event. Clones share the same buffer, so a test can keep a
/// handle while the game owns another.
#[derive(Debug, Default, Clone)]
pub struct CaptureEmitter {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl CaptureEmitter {
    pub fn new() -> Self {
        CaptureEmitter::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventEmitter for CaptureEmitter {
    fn emit(&mut self, event: &GameEvent) -> Result<(), EmitError> {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
        Ok(())
    }
}

/// Writes events to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmitter;

impl EventEmitter for LogEmitter {
    fn emit(&mut self, event: &GameEvent) -> Result<(), EmitError> {
        tracing::info!(
            event_type = %event.event_type,
            target_player = event.target_player.as_ref().map(|p| p.name()),
            message = event.event_message.as_deref(),
            "game event"
        );
        Ok(())
    }
}

/// Fans events out to several sinks. A failing sink is logged and skipped;
/// composed emission itself never fails.
pub struct ComposedEmitter {
    emitters: Vec<Box<dyn EventEmitter>>,
}

impl ComposedEmitter {
    pub fn new(emitters: Vec<Box<dyn EventEmitter>>) -> Self {
        ComposedEmitter { emitters }
    }
}

impl EventEmitter for ComposedEmitter {
    fn emit(&mut self, event: &GameEvent) -> Result<(), EmitError> {
        for emitter in &mut self.emitters {
            if let Err(err) = emitter.emit(event) {
                tracing::error!(
                    error = %err,
                    event_type = %event.event_type,
                    "event emitter failed; continuing with remaining sinks"
                );
            }
        }
        Ok(())
    }
}
