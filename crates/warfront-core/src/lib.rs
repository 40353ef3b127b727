//! Warfront Core Library
//!
//! This crate contains the core game logic for Warfront, a terminal
//! territory-conquest game. A board of named territories is fought over by
//! dice-driven attacks; each player holds one secret mission drawn from a
//! fixed catalog, and the first player whose mission holds wins.
//!
//! # Design Principles
//!
//! - **No UI dependencies**: This crate is purely game logic; the terminal
//!   front-end lives in its own crate
//! - **Deterministic**: Randomness enters only through the [`RandomSource`]
//!   trait, so every outcome is reproducible under test
//! - **Serializable**: All state can be saved/loaded via serde
//! - **Single mutator**: Combat is the only thing that touches the board;
//!   mission evaluation is a pure read over the same board

// Core modules
pub mod random;
pub mod territory;
pub mod types;

// Combat and missions
pub mod combat;
pub mod mission;
pub mod victory;

// Session state
pub mod game_state;
pub mod player;
pub mod settings;

// Re-exports for convenience
pub use combat::{resolve, CombatError, CombatOutcome, CombatReport};
pub use game_state::{GameError, GamePhase, GameState};
pub use mission::{assign_mission, MissionKind};
pub use player::Player;
pub use random::{RandomSource, ScriptedRandom, SessionRandom};
pub use settings::{GameSettings, SettingsError};
pub use territory::{Board, BoardError, Territory};
pub use types::{PlayerId, TerritoryId, DIE_FACES};
pub use victory::{evaluate, find_winner};
