//! Configuration file loading for the arena.
//!
//! The arena reads `arena.toml` from the current directory when present.
//! Every field is optional; a missing `[variant]` table means the regular
//! 8x8 layout.

use serde::{Deserialize, Serialize};
use simul_core::{BoardDimensions, Piece, PieceKind, Player, Position};
use simul_engine::{GameState, RegularRules, RuleSet, StateError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or interpreting configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but makes no sense.
    #[error("Invalid config: {0}")]
    Invalid(String),
    /// The configured variant does not form a valid starting position.
    #[error("Invalid variant layout: {0}")]
    Variant(#[from] StateError),
}

/// Main arena configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArenaConfig {
    /// Number of games to play. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Turn limit after which an unfinished game is abandoned. Defaults to 200.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    /// Seed for the move picker. A random seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Custom starting layout.
    #[serde(default)]
    pub variant: Option<VariantConfig>,
}

fn default_games() -> u32 {
    10
}

fn default_max_turns() -> u32 {
    200
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: default_games(),
            max_turns: default_max_turns(),
            seed: None,
            variant: None,
        }
    }
}

impl ArenaConfig {
    /// Loads the arena configuration from [`Self::config_path()`].
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the path to the default configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Builds the rule set to play with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unparseable piece entries and
    /// [`ConfigError::Variant`] if the layout is not a valid position.
    pub fn rules(&self) -> Result<Box<dyn RuleSet>, ConfigError> {
        match &self.variant {
            Some(variant) => Ok(Box::new(variant.rules()?)),
            None => Ok(Box::new(RegularRules)),
        }
    }
}

/// A custom board and starting layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VariantConfig {
    /// Board width in columns.
    pub width: u8,
    /// Board height in rows.
    pub height: u8,
    /// Every piece with its starting square.
    #[serde(default)]
    pub pieces: Vec<PieceConfig>,
}

/// One `[[variant.pieces]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PieceConfig {
    /// `"white"` or `"black"`.
    pub player: String,
    /// Piece kind by name or letter, e.g. `"rook"` or `"R"`.
    pub kind: String,
    /// Unique name of the piece.
    pub designation: String,
    /// Starting square, e.g. `"a1"`.
    pub square: String,
}

impl PieceConfig {
    fn parse(&self) -> Result<(Piece, Position), ConfigError> {
        let invalid = |e: simul_core::ParseError| {
            ConfigError::Invalid(format!("piece {}: {}", self.designation, e))
        };
        let player: Player = self.player.parse().map_err(invalid)?;
        let kind: PieceKind = self.kind.parse().map_err(invalid)?;
        let square: Position = self.square.parse().map_err(invalid)?;
        Ok((Piece::new(player, kind, self.designation.as_str()), square))
    }
}

impl VariantConfig {
    /// Converts the table into a validated rule set.
    pub fn rules(&self) -> Result<ConfiguredRules, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "board must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        let pieces = self
            .pieces
            .iter()
            .map(PieceConfig::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let rules = ConfiguredRules {
            dimensions: BoardDimensions::new(self.width, self.height),
            pieces,
        };
        // Reject overlapping or off-board layouts up front.
        rules.initial_state()?;
        Ok(rules)
    }
}

/// A rule set loaded from configuration: standard piece movement on a custom
/// board with a custom layout.
#[derive(Debug, Clone)]
pub struct ConfiguredRules {
    dimensions: BoardDimensions,
    pieces: Vec<(Piece, Position)>,
}

impl RuleSet for ConfiguredRules {
    fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    fn initial_pieces(&self) -> Vec<(Piece, Position)> {
        self.pieces.clone()
    }

    fn initial_state(&self) -> Result<GameState, StateError> {
        GameState::new(self.dimensions, self.pieces.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
games = 3
max_turns = 50
seed = 42

[variant]
width = 4
height = 4

[[variant.pieces]]
player = "white"
kind = "king"
designation = "wk"
square = "a1"

[[variant.pieces]]
player = "white"
kind = "R"
designation = "wr"
square = "d1"

[[variant.pieces]]
player = "black"
kind = "king"
designation = "bk"
square = "d4"
"#;

        let config: ArenaConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.games, 3);
        assert_eq!(config.max_turns, 50);
        assert_eq!(config.seed, Some(42));

        let rules = config.variant.as_ref().unwrap().rules().unwrap();
        assert_eq!(rules.dimensions(), BoardDimensions::new(4, 4));

        let state = rules.initial_state().unwrap();
        assert_eq!(state.live_count(), 3);
        let rook = state.piece_at(Position::new(0, 3)).unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert_eq!(rook.designation(), "wr");
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.games, 10);
        assert_eq!(config.max_turns, 200);
        assert_eq!(config.seed, None);

        let rules = config.rules().unwrap();
        assert_eq!(rules.dimensions(), BoardDimensions::REGULAR);
        assert_eq!(rules.initial_pieces().len(), 32);
    }

    #[test]
    fn test_invalid_toml() {
        let result: Result<ArenaConfig, _> = toml::from_str("games = \"many\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_piece_kind() {
        let variant = VariantConfig {
            width: 8,
            height: 8,
            pieces: vec![PieceConfig {
                player: "white".to_string(),
                kind: "archbishop".to_string(),
                designation: "wa".to_string(),
                square: "a1".to_string(),
            }],
        };
        let err = variant.rules().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("archbishop"));
    }

    #[test]
    fn test_overlapping_pieces_rejected() {
        let toml_content = r#"
[variant]
width = 8
height = 8

[[variant.pieces]]
player = "white"
kind = "king"
designation = "wk"
square = "e1"

[[variant.pieces]]
player = "black"
kind = "king"
designation = "bk"
square = "e1"
"#;

        let config: ArenaConfig = toml::from_str(toml_content).unwrap();
        assert!(matches!(
            config.rules(),
            Err(ConfigError::Variant(StateError::SquareTaken { .. }))
        ));
    }

    #[test]
    fn test_off_board_piece_rejected() {
        let variant = VariantConfig {
            width: 4,
            height: 4,
            pieces: vec![PieceConfig {
                player: "black".to_string(),
                kind: "q".to_string(),
                designation: "bq".to_string(),
                square: "e5".to_string(),
            }],
        };
        assert!(matches!(
            variant.rules(),
            Err(ConfigError::Variant(StateError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_empty_board_rejected() {
        let variant = VariantConfig {
            width: 0,
            height: 8,
            pieces: Vec::new(),
        };
        assert!(matches!(variant.rules(), Err(ConfigError::Invalid(_))));
    }
}
