//! Run summaries in text and JSON form.

use crate::runner::{GameRecord, InteractionCounts, MatchResult};
use serde::Serialize;
use std::fmt;

/// Per-game line of a report.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    /// 1-based game number.
    pub game: u32,
    /// Committed turns.
    pub turns: usize,
    /// How the game ended.
    pub result: MatchResult,
    /// Pieces captured.
    pub captures: usize,
    /// Interaction tally.
    pub interactions: InteractionCounts,
}

/// Win, draw and abandon counts across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
}

impl Totals {
    fn add(&mut self, result: MatchResult) {
        match result {
            MatchResult::WhiteWins => self.white_wins += 1,
            MatchResult::BlackWins => self.black_wins += 1,
            MatchResult::Stalemate | MatchResult::MutualDefeat => self.draws += 1,
            MatchResult::Unfinished => self.unfinished += 1,
        }
    }
}

/// Summary of a whole arena run.
#[derive(Debug, Clone, Serialize)]
pub struct ArenaReport {
    /// Seed the run was played with.
    pub seed: u64,
    /// `"regular"` or `"custom"`.
    pub variant: String,
    pub games: Vec<GameSummary>,
    pub totals: Totals,
}

impl ArenaReport {
    /// Creates an empty report.
    pub fn new(seed: u64, variant: impl Into<String>) -> Self {
        ArenaReport {
            seed,
            variant: variant.into(),
            games: Vec::new(),
            totals: Totals::default(),
        }
    }

    /// Adds a finished game.
    pub fn push(&mut self, record: &GameRecord) {
        self.totals.add(record.result);
        self.games.push(GameSummary {
            game: self.games.len() as u32 + 1,
            turns: record.turns.len(),
            result: record.result,
            captures: record.captures,
            interactions: record.interactions,
        });
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchResult::WhiteWins => "1-0",
            MatchResult::BlackWins => "0-1",
            MatchResult::Stalemate => "1/2-1/2 (stalemate)",
            MatchResult::MutualDefeat => "1/2-1/2 (mutual defeat)",
            MatchResult::Unfinished => "*",
        };
        f.pad(text)
    }
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variant: {}, seed: {}", self.variant, self.seed)?;
        for game in &self.games {
            writeln!(
                f,
                "Game {:>3}: {:<24} {:>4} turns, {:>2} captures, {} bounced",
                game.game, game.result, game.turns, game.captures, game.interactions.bounced
            )?;
        }
        let t = &self.totals;
        write!(
            f,
            "White {} - Black {} - Draws {} - Unfinished {}",
            t.white_wins, t.black_wins, t.draws, t.unfinished
        )
    }
}
