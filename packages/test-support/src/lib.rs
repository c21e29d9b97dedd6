//! Shared test utilities for the engine workspace.

pub mod logging;
