//! Session settings and validation.

use serde::{Deserialize, Serialize};

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Number of territories on the board, fixed for the session.
    pub territory_count: usize,
    /// Number of players drawing missions.
    pub player_count: u8,
}

impl GameSettings {
    /// Create settings for a session.
    pub fn new(territory_count: usize, player_count: u8) -> Self {
        Self {
            territory_count,
            player_count,
        }
    }

    /// Validate settings before the board is allocated.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.territory_count == 0 {
            return Err(SettingsError::NoTerritories);
        }
        if self.player_count == 0 {
            return Err(SettingsError::NoPlayers);
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(5, 2)
    }
}

/// Errors from invalid session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsError {
    NoTerritories,
    NoPlayers,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NoTerritories => {
                write!(f, "Territory count must be greater than zero")
            }
            SettingsError::NoPlayers => write!(f, "Player count must be greater than zero"),
        }
    }
}

impl std::error::Error for SettingsError {}
