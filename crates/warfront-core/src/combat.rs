//! Combat resolution between two territories.
//!
//! An attack is decided by two independent d6 draws from the injected
//! random source. The resolver mutates exactly the attacker/defender pair
//! it is given and returns a [`CombatReport`] with both die values, so the
//! caller can narrate the battle without re-deriving anything.

use crate::random::RandomSource;
use crate::territory::Territory;
use serde::{Deserialize, Serialize};

/// How a single combat resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// The attacker rolled higher: the defender keeps half its garrison
    /// (truncated) and flips to the attacker's color.
    Conquest {
        /// Troops remaining in the conquered territory.
        troops_transferred: u32,
    },
    /// The defender rolled higher: the attacker loses one troop when it
    /// has any to lose.
    Repulsion {
        /// Either 1, or 0 when the attacker had nothing to lose.
        troops_lost: u32,
    },
    /// Equal dice: nothing changes hands.
    Stalemate,
}

/// Full record of one resolved combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    /// The attacker's die.
    pub attack_die: u8,
    /// The defender's die.
    pub defense_die: u8,
    /// What happened to the two territories.
    pub outcome: CombatOutcome,
}

/// Reasons an attack is refused before any dice are thrown.
///
/// Both are recoverable: the caller re-prompts or abandons the action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatError {
    /// Attacker and defender share a faction color.
    SameFaction,
    /// The attacking territory has no troops.
    NoTroops,
}

impl std::fmt::Display for CombatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatError::SameFaction => {
                write!(f, "Cannot attack a territory of your own color")
            }
            CombatError::NoTroops => write!(f, "The attacking territory has no troops"),
        }
    }
}

impl std::error::Error for CombatError {}

/// Resolve an attack between two territories.
///
/// Guards run before any dice are thrown; a refused attack leaves both
/// territories untouched. On conquest the attacker's own garrison is
/// unchanged, a deliberate rule of the game.
pub fn resolve(
    attacker: &mut Territory,
    defender: &mut Territory,
    random: &mut dyn RandomSource,
) -> Result<CombatReport, CombatError> {
    if attacker.same_faction(defender) {
        return Err(CombatError::SameFaction);
    }
    if !attacker.can_attack() {
        return Err(CombatError::NoTroops);
    }

    let attack_die = random.roll_die();
    let defense_die = random.roll_die();

    let outcome = if attack_die > defense_die {
        let troops_transferred = defender.troops / 2;
        defender.troops = troops_transferred;
        defender.owner = attacker.owner.clone();
        CombatOutcome::Conquest { troops_transferred }
    } else if attack_die < defense_die {
        // The guard above means troops are present, but the loss is still
        // reported as 0 when there is nothing to decrement.
        let troops_lost = if attacker.troops > 0 {
            attacker.troops -= 1;
            1
        } else {
            0
        };
        CombatOutcome::Repulsion { troops_lost }
    } else {
        CombatOutcome::Stalemate
    };

    Ok(CombatReport {
        attack_die,
        defense_die,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn territory(name: &str, owner: &str, troops: u32) -> Territory {
        Territory::new(name.to_string(), owner.to_string(), troops)
    }

    #[test]
    fn test_same_faction_refused_without_mutation() {
        let mut attacker = territory("A", "blue", 5);
        let mut defender = territory("B", "blue", 3);
        let before = (attacker.clone(), defender.clone());
        let mut random = ScriptedRandom::new(vec![6, 1]);

        let result = resolve(&mut attacker, &mut defender, &mut random);
        assert_eq!(result, Err(CombatError::SameFaction));
        assert_eq!((attacker, defender), before);
    }

    #[test]
    fn test_no_troops_refused_without_mutation() {
        let mut attacker = territory("A", "blue", 0);
        let mut defender = territory("B", "red", 3);
        let before = (attacker.clone(), defender.clone());
        let mut random = ScriptedRandom::new(vec![6, 1]);

        let result = resolve(&mut attacker, &mut defender, &mut random);
        assert_eq!(result, Err(CombatError::NoTroops));
        assert_eq!((attacker, defender), before);
    }

    #[test]
    fn test_conquest_halves_garrison_and_flips_color() {
        let mut attacker = territory("A", "blue", 7);
        let mut defender = territory("B", "red", 10);
        let mut random = ScriptedRandom::new(vec![6, 1]);

        let report = resolve(&mut attacker, &mut defender, &mut random).unwrap();
        assert_eq!(report.attack_die, 6);
        assert_eq!(report.defense_die, 1);
        assert_eq!(
            report.outcome,
            CombatOutcome::Conquest {
                troops_transferred: 5
            }
        );
        assert_eq!(defender.troops, 5);
        assert_eq!(defender.owner, "blue");
        // Attacker untouched
        assert_eq!(attacker.troops, 7);
        assert_eq!(attacker.owner, "blue");
    }

    #[test]
    fn test_conquest_truncates_odd_garrison() {
        let mut attacker = territory("A", "blue", 7);
        let mut defender = territory("B", "red", 9);
        let mut random = ScriptedRandom::new(vec![5, 2]);

        let report = resolve(&mut attacker, &mut defender, &mut random).unwrap();
        assert_eq!(
            report.outcome,
            CombatOutcome::Conquest {
                troops_transferred: 4
            }
        );
        assert_eq!(defender.troops, 4);
    }

    #[test]
    fn test_conquest_of_empty_territory() {
        let mut attacker = territory("A", "blue", 2);
        let mut defender = territory("B", "red", 0);
        let mut random = ScriptedRandom::new(vec![4, 3]);

        let report = resolve(&mut attacker, &mut defender, &mut random).unwrap();
        assert_eq!(
            report.outcome,
            CombatOutcome::Conquest {
                troops_transferred: 0
            }
        );
        assert_eq!(defender.owner, "blue");
        assert_eq!(defender.troops, 0);
    }

    #[test]
    fn test_repulsion_costs_attacker_one_troop() {
        let mut attacker = territory("A", "blue", 3);
        let mut defender = territory("B", "red", 8);
        let before_defender = defender.clone();
        let mut random = ScriptedRandom::new(vec![1, 6]);

        let report = resolve(&mut attacker, &mut defender, &mut random).unwrap();
        assert_eq!(report.outcome, CombatOutcome::Repulsion { troops_lost: 1 });
        assert_eq!(attacker.troops, 2);
        assert_eq!(attacker.owner, "blue");
        assert_eq!(defender, before_defender);
    }

    #[test]
    fn test_stalemate_changes_nothing() {
        let mut attacker = territory("A", "blue", 3);
        let mut defender = territory("B", "red", 8);
        let before = (attacker.clone(), defender.clone());
        let mut random = ScriptedRandom::new(vec![4, 4]);

        let report = resolve(&mut attacker, &mut defender, &mut random).unwrap();
        assert_eq!(report.outcome, CombatOutcome::Stalemate);
        assert_eq!((attacker, defender), before);
    }

    #[test]
    fn test_report_serialization() {
        let report = CombatReport {
            attack_die: 6,
            defense_die: 1,
            outcome: CombatOutcome::Conquest {
                troops_transferred: 5,
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        let restored: CombatReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }
}
