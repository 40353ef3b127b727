//! Root session state and the operations that mutate it.

use crate::combat::{self, CombatError, CombatReport};
use crate::mission::assign_mission;
use crate::player::Player;
use crate::random::RandomSource;
use crate::settings::{GameSettings, SettingsError};
use crate::territory::{Board, BoardError, Territory};
use crate::types::{PlayerId, TerritoryId};
use crate::victory;
use serde::{Deserialize, Serialize};

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Territories are being registered.
    Registration,
    /// Attacks are accepted and missions are checked.
    Playing,
    /// A player completed their mission.
    Ended,
}

/// The complete state of one game session.
///
/// The attack operation is the only board mutator; winner checks read the
/// same board without touching it. Single-threaded by construction: each
/// call runs to completion before the next user action is accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Session configuration (immutable after creation).
    pub settings: GameSettings,
    /// The game board.
    pub board: Board,
    /// Players in assignment order.
    pub players: Vec<Player>,
    /// Completed attacks this session.
    pub turn: u32,
    /// Session phase.
    pub phase: GamePhase,
    /// Winner (if the game has ended).
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Create a session after validating the settings.
    pub fn new(settings: GameSettings) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self {
            settings,
            board: Board::new(),
            players: Vec::new(),
            turn: 0,
            phase: GamePhase::Registration,
            winner: None,
        })
    }

    /// Register one territory. Allowed only before the game starts.
    pub fn register_territory(&mut self, territory: Territory) -> Result<(), GameError> {
        if self.phase != GamePhase::Registration {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.board.len() >= self.settings.territory_count {
            return Err(GameError::BoardFull);
        }
        self.board.push(territory);
        Ok(())
    }

    /// Draw a mission for every player and start the game.
    ///
    /// Draws are filtered by board size; each player keeps their mission
    /// for the whole session.
    pub fn start(
        &mut self,
        player_names: Vec<String>,
        random: &mut dyn RandomSource,
    ) -> Result<(), GameError> {
        if self.phase != GamePhase::Registration {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.board.len() < self.settings.territory_count {
            return Err(GameError::RegistrationIncomplete);
        }
        if player_names.len() != self.settings.player_count as usize {
            return Err(GameError::WrongPlayerCount);
        }
        for (index, name) in player_names.into_iter().enumerate() {
            let mission = assign_mission(self.board.len(), random);
            self.players.push(Player::new(index as PlayerId, name, mission));
        }
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Resolve an attack between two board indices.
    ///
    /// Self-attack and out-of-range indices are rejected here, before the
    /// combat resolver ever sees the pair. A resolved combat advances the
    /// turn counter; a refused one does not.
    pub fn attack(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
        random: &mut dyn RandomSource,
    ) -> Result<CombatReport, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidPhase);
        }
        let (attacker, defender) = self.board.pair_mut(attacker, defender)?;
        let report = combat::resolve(attacker, defender, random)?;
        self.turn += 1;
        Ok(report)
    }

    /// Check whether any player's mission now holds and end the game if so.
    ///
    /// Missions are checked in assignment order, so simultaneous winners
    /// resolve to the lowest player index.
    pub fn check_winner(&mut self) -> Option<PlayerId> {
        if self.phase != GamePhase::Playing {
            return self.winner;
        }
        let board = self.board.territories();
        if let Some(index) = self
            .players
            .iter()
            .position(|player| victory::evaluate(&player.mission, board))
        {
            self.winner = Some(index as PlayerId);
            self.phase = GamePhase::Ended;
        }
        self.winner
    }

    /// Get a player by ID.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    /// Whether the session has ended.
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}

/// Errors from session-level operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Settings were invalid at session creation.
    Settings(SettingsError),
    /// Registration or start attempted after the game started.
    GameAlreadyStarted,
    /// The configured number of territories is already registered.
    BoardFull,
    /// Start attempted before all territories were registered.
    RegistrationIncomplete,
    /// Player name list does not match the configured player count.
    WrongPlayerCount,
    /// Operation is not valid in the current phase.
    InvalidPhase,
    /// Invalid attacker/defender addressing.
    Board(BoardError),
    /// The attack was refused by the combat resolver.
    Combat(CombatError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Settings(err) => write!(f, "{}", err),
            GameError::GameAlreadyStarted => write!(f, "Game has already started"),
            GameError::BoardFull => write!(f, "All territories are already registered"),
            GameError::RegistrationIncomplete => {
                write!(f, "Not all territories have been registered")
            }
            GameError::WrongPlayerCount => {
                write!(f, "Player names do not match the configured player count")
            }
            GameError::InvalidPhase => write!(f, "Invalid operation for current game phase"),
            GameError::Board(err) => write!(f, "{}", err),
            GameError::Combat(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GameError {}

impl From<SettingsError> for GameError {
    fn from(err: SettingsError) -> Self {
        GameError::Settings(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<CombatError> for GameError {
    fn from(err: CombatError) -> Self {
        GameError::Combat(err)
    }
}
