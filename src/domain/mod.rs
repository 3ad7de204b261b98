//! Domain types for the player registry.

pub mod player;

pub use player::{Player, PlayerDraft, ValidationError, DEFAULT_ASSISTS, DEFAULT_GOALS};
