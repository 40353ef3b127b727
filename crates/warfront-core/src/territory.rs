//! Territories and the game board.

use crate::types::TerritoryId;
use serde::{Deserialize, Serialize};

/// One cell of the game board.
///
/// The owner color and troop count at registration time are kept alongside
/// the live values because some missions reference initial state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, immutable after registration.
    pub name: String,
    /// Color label of the faction currently controlling the territory.
    pub owner: String,
    /// Troops currently stationed here. Mutated only by combat.
    pub troops: u32,
    /// Owner color captured at registration.
    pub initial_owner: String,
    /// Troop count captured at registration.
    pub initial_troops: u32,
}

impl Territory {
    /// Register a territory, capturing its initial snapshot.
    pub fn new(name: String, owner: String, troops: u32) -> Self {
        Self {
            name,
            initial_owner: owner.clone(),
            initial_troops: troops,
            owner,
            troops,
        }
    }

    /// Two territories belong to the same faction when their color labels
    /// are equal.
    pub fn same_faction(&self, other: &Territory) -> bool {
        self.owner == other.owner
    }

    /// A territory with no troops can still be attacked but cannot attack.
    pub fn can_attack(&self) -> bool {
        self.troops > 0
    }
}

/// The ordered, fixed-length sequence of territories for one session.
///
/// Territories are addressed by index only; no two entries share identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    territories: Vec<Territory>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            territories: Vec::new(),
        }
    }

    /// Create a board from already-registered territories.
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    /// Number of territories on the board.
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Whether the board has no territories yet.
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Append a territory during registration.
    pub fn push(&mut self, territory: Territory) {
        self.territories.push(territory);
    }

    /// Get a territory by index.
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id)
    }

    /// Get a mutable territory by index.
    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id)
    }

    /// The full board as an ordered slice.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Disjoint mutable access to an attacker/defender pair.
    ///
    /// Self-attack (equal indices) and out-of-range indices are rejected
    /// here, at the call boundary, so the combat resolver never sees an
    /// aliased or invalid pair.
    pub fn pair_mut(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
    ) -> Result<(&mut Territory, &mut Territory), BoardError> {
        if attacker == defender {
            return Err(BoardError::SelfAttack);
        }
        if attacker >= self.territories.len() {
            return Err(BoardError::OutOfBounds(attacker));
        }
        if defender >= self.territories.len() {
            return Err(BoardError::OutOfBounds(defender));
        }
        if attacker < defender {
            let (left, right) = self.territories.split_at_mut(defender);
            Ok((&mut left[attacker], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(attacker);
            Ok((&mut right[0], &mut left[defender]))
        }
    }
}

/// Errors from invalid board addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Attacker and defender are the same territory.
    SelfAttack,
    /// Index is outside the board.
    OutOfBounds(TerritoryId),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::SelfAttack => {
                write!(f, "Attacker and defender must be different territories")
            }
            BoardError::OutOfBounds(id) => write!(f, "No territory with ID {}", id),
        }
    }
}

impl std::error::Error for BoardError {}
