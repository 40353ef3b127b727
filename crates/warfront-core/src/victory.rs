//! Mission evaluation and winner detection.
//!
//! Evaluation is a pure read over the board; combat is the only mutator.
//! Every catalog entry has a total predicate, so there are no error cases.

use crate::mission::MissionKind;
use crate::territory::Territory;
use crate::types::PlayerId;

/// Check whether a mission's predicate currently holds on the board.
pub fn evaluate(mission: &MissionKind, board: &[Territory]) -> bool {
    match mission {
        MissionKind::ThreeInARow => three_in_a_row(board),
        MissionKind::EliminateColor { target } => color_eliminated(board, target),
        MissionKind::ExpandToFour => controls_at_least(board, 4),
        MissionKind::HoldFifteen => holds_garrison(board, 15),
        MissionKind::ConquerLargestInitial => largest_garrison_taken(board),
    }
}

/// Find the first player whose mission currently holds.
///
/// Missions are checked in assignment order, so simultaneous winners
/// resolve to the lowest index; a draw is never reported.
pub fn find_winner(missions: &[MissionKind], board: &[Territory]) -> Option<PlayerId> {
    missions
        .iter()
        .position(|mission| evaluate(mission, board))
        .map(|index| index as PlayerId)
}

fn three_in_a_row(board: &[Territory]) -> bool {
    board
        .windows(3)
        .any(|run| run[0].owner == run[1].owner && run[0].owner == run[2].owner)
}

/// True when no territory is held by the target color in any accepted
/// spelling.
fn color_eliminated(board: &[Territory], target: &str) -> bool {
    !board
        .iter()
        .any(|territory| color_matches(&territory.owner, target))
}

/// Case-insensitive label match that also accepts the grammatical-gender
/// variant of a Portuguese color adjective, so "vermelho", "Vermelho",
/// "vermelha", and "Vermelha" all name the red faction.
fn color_matches(owner: &str, target: &str) -> bool {
    if owner.eq_ignore_ascii_case(target) {
        return true;
    }
    match gender_variant(target) {
        Some(variant) => owner.eq_ignore_ascii_case(&variant),
        None => false,
    }
}

fn gender_variant(target: &str) -> Option<String> {
    if let Some(stem) = target.strip_suffix('o') {
        Some(format!("{}a", stem))
    } else {
        target.strip_suffix('a').map(|stem| format!("{}o", stem))
    }
}

/// The reference color is the first non-empty owner scanning from index 0.
/// This approximates the acting player's color rather than tracking which
/// player issued the mission, a documented limitation of the rules.
fn controls_at_least(board: &[Territory], needed: usize) -> bool {
    let reference = match board.iter().find(|territory| !territory.owner.is_empty()) {
        Some(territory) => &territory.owner,
        None => return false,
    };
    board
        .iter()
        .filter(|territory| &territory.owner == reference)
        .count()
        >= needed
}

fn holds_garrison(board: &[Territory], needed: u32) -> bool {
    board.iter().any(|territory| territory.troops >= needed)
}

/// Weak by the rules: satisfied as soon as the largest garrison on the
/// board is non-zero, without binding the claim to a player or to the
/// historical maximum.
fn largest_garrison_taken(board: &[Territory]) -> bool {
    board
        .iter()
        .map(|territory| territory.troops)
        .max()
        .unwrap_or(0)
        > 0
}
