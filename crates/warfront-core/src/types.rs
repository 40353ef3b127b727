//! Core type aliases used throughout the crate.

/// Player index into the session's roster (assignment order).
pub type PlayerId = u8;

/// Index of a territory on the board.
pub type TerritoryId = usize;

/// Number of faces on a combat die.
pub const DIE_FACES: u8 = 6;
