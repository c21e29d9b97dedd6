//! Five-handed Sheepshead.
//!
//! The deck runs 7 through ace in each suit. Every diamond, queen, and jack
//! is trump. The picker takes the blind, buries, and plays (usually with a
//! partner) against the setters for the majority of the 120 card points.

pub mod actions;
pub mod blind;
pub mod bury;
pub mod dealing;
pub mod deck;
pub mod game;
pub mod options;
pub mod scoring;
pub mod teams;
pub mod tricks;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;

pub use actions::Action;
pub use game::Sheepshead;
pub use options::{PartnerStyle, SheepsheadOptions};
pub use scoring::{LeasterTieBreak, Scoring};
