//! Players and their assigned missions.

use crate::mission::MissionKind;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// A registered player holding one mission for the whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player index (assignment order).
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Victory objective fixed at session start, never reassigned.
    pub mission: MissionKind,
}

impl Player {
    /// Create a player with their drawn mission.
    pub fn new(id: PlayerId, name: String, mission: MissionKind) -> Self {
        Self { id, name, mission }
    }

    /// Human-readable mission text for the reveal prompt.
    pub fn mission_text(&self) -> String {
        self.mission.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(0, "Player 1".to_string(), MissionKind::HoldFifteen);
        assert_eq!(player.id, 0);
        assert_eq!(player.name, "Player 1");
        assert_eq!(player.mission, MissionKind::HoldFifteen);
    }

    #[test]
    fn test_mission_text() {
        let player = Player::new(1, "Player 2".to_string(), MissionKind::ThreeInARow);
        assert_eq!(player.mission_text(), "Conquer 3 territories in a row");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(0, "Player 1".to_string(), MissionKind::ExpandToFour);
        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, player);
    }
}
