//! Per-player game status.

use crate::legality::{has_legal_move, is_checked};
use crate::rules::RuleSet;
use crate::GameState;
use simul_core::Player;
use std::fmt;

/// Where one player stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// King capturable, with at least one legal move.
    Checked,
    /// King capturable (or already captured) and no legal move.
    Checkmated,
    /// No legal move while not in check.
    Stalemated,
    /// The player gave up.
    Resigned,
}

impl PlayerStatus {
    /// Returns true if this status ends the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            PlayerStatus::Checkmated | PlayerStatus::Stalemated | PlayerStatus::Resigned
        )
    }

    /// Returns true if this status loses the game.
    #[inline]
    pub const fn is_defeat(self) -> bool {
        matches!(self, PlayerStatus::Checkmated | PlayerStatus::Resigned)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// One player won (the other was checkmated or resigned).
    Winner(Player),
    /// Nobody won.
    Draw(DrawReason),
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// A player had no legal move without being in check.
    Stalemate,
    /// Both players were defeated in the same turn.
    MutualDefeat,
}

/// The status of both players after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameStatus {
    players: [PlayerStatus; 2],
}

impl GameStatus {
    /// Both players ongoing.
    pub const ONGOING: GameStatus = GameStatus {
        players: [PlayerStatus::Ongoing; 2],
    };

    /// Creates a status from each player's status.
    pub const fn new(white: PlayerStatus, black: PlayerStatus) -> Self {
        GameStatus {
            players: [white, black],
        }
    }

    /// Returns the status of `player`.
    #[inline]
    pub const fn of(self, player: Player) -> PlayerStatus {
        self.players[player.index()]
    }

    /// Returns a copy with `player`'s status replaced.
    pub const fn with(self, player: Player, status: PlayerStatus) -> Self {
        let mut players = self.players;
        players[player.index()] = status;
        GameStatus { players }
    }

    /// Returns true if either player's status ends the game.
    pub fn is_over(self) -> bool {
        self.players.iter().any(|s| s.is_terminal())
    }

    /// Returns the players currently in `status`.
    pub fn players_in(self, status: PlayerStatus) -> Vec<Player> {
        Player::ALL
            .into_iter()
            .filter(|p| self.of(*p) == status)
            .collect()
    }

    /// Returns the players whose king is capturable but who can still move.
    pub fn checked(self) -> Vec<Player> {
        self.players_in(PlayerStatus::Checked)
    }

    /// Returns the game result, or `None` while the game goes on.
    pub fn result(self) -> Option<GameResult> {
        let defeated: Vec<Player> = Player::ALL
            .into_iter()
            .filter(|p| self.of(*p).is_defeat())
            .collect();
        match defeated.as_slice() {
            [loser] => Some(GameResult::Winner(loser.opposite())),
            [_, _] => Some(GameResult::Draw(DrawReason::MutualDefeat)),
            _ if self.players.contains(&PlayerStatus::Stalemated) => {
                Some(GameResult::Draw(DrawReason::Stalemate))
            }
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::ONGOING
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "White: {:?}, Black: {:?}",
            self.of(Player::White),
            self.of(Player::Black)
        )
    }
}

/// Computes `player`'s status from the board alone.
///
/// A player whose king has been captured counts as checkmated. Resignation is
/// never derived here; it is recorded by [`crate::Game::resign`].
pub fn player_status<R: RuleSet + ?Sized>(
    rules: &R,
    state: &GameState,
    player: Player,
) -> PlayerStatus {
    if state.king_of(player).is_none() {
        return PlayerStatus::Checkmated;
    }
    let checked = is_checked(rules, state, player);
    let can_move = has_legal_move(rules, state, player);
    match (checked, can_move) {
        (true, true) => PlayerStatus::Checked,
        (true, false) => PlayerStatus::Checkmated,
        (false, false) => PlayerStatus::Stalemated,
        (false, true) => PlayerStatus::Ongoing,
    }
}

/// Computes both players' statuses for `state`.
pub fn evaluate_status<R: RuleSet + ?Sized>(rules: &R, state: &GameState) -> GameStatus {
    GameStatus::new(
        player_status(rules, state, Player::White),
        player_status(rules, state, Player::Black),
    )
}
