//! Random self-play.
//!
//! Both sides pick uniformly among their legal moves with a shared seeded
//! RNG, so a run is reproducible from its seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use simul_core::Player;
use simul_engine::{DrawReason, Game, GameError, GameResult, Interaction, RuleSet, Submission};

/// One committed turn, in text form.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    /// White's submitted move.
    pub white: String,
    /// Black's submitted move.
    pub black: String,
    /// The moves actually performed.
    pub performed: Vec<String>,
    /// How the two moves interacted.
    pub interaction: String,
}

/// The outcome of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    /// White won (Black was checkmated).
    WhiteWins,
    /// Black won (White was checkmated).
    BlackWins,
    /// Stalemate.
    Stalemate,
    /// Both kings fell in the same turn.
    MutualDefeat,
    /// The turn limit was reached first.
    Unfinished,
}

impl MatchResult {
    fn from_result(result: Option<GameResult>) -> Self {
        match result {
            Some(GameResult::Winner(Player::White)) => MatchResult::WhiteWins,
            Some(GameResult::Winner(Player::Black)) => MatchResult::BlackWins,
            Some(GameResult::Draw(DrawReason::Stalemate)) => MatchResult::Stalemate,
            Some(GameResult::Draw(DrawReason::MutualDefeat)) => MatchResult::MutualDefeat,
            None => MatchResult::Unfinished,
        }
    }
}

/// How often each kind of interaction happened during a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionCounts {
    pub independent: u32,
    pub contested: u32,
    pub bounced: u32,
    pub mutual_captures: u32,
    pub one_sided: u32,
}

impl InteractionCounts {
    fn record(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Independent => self.independent += 1,
            Interaction::Contested { winner: Some(_) } => self.contested += 1,
            Interaction::MutualCapture => self.mutual_captures += 1,
            Interaction::OneSided { winner: Some(_), .. } => self.one_sided += 1,
            Interaction::Contested { winner: None }
            | Interaction::OneSided { winner: None, .. } => self.bounced += 1,
        }
    }
}

/// The record of a finished (or abandoned) game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Every committed turn.
    pub turns: Vec<TurnRecord>,
    /// How the game ended.
    pub result: MatchResult,
    /// Pieces captured over the game.
    pub captures: usize,
    /// Interaction tally.
    pub interactions: InteractionCounts,
}

/// Plays random games under one rule set.
///
/// # Example
///
/// ```
/// use simul_arena::runner::RandomRunner;
/// use simul_engine::RegularRules;
///
/// let mut runner = RandomRunner::new(RegularRules, 7, 20);
/// let record = runner.play_game().unwrap();
/// assert!(record.turns.len() <= 20);
/// ```
pub struct RandomRunner<R: RuleSet> {
    rules: R,
    rng: StdRng,
    max_turns: u32,
}

impl<R: RuleSet + Clone> RandomRunner<R> {
    /// Creates a runner seeded with `seed` that abandons games after
    /// `max_turns` turns.
    pub fn new(rules: R, seed: u64, max_turns: u32) -> Self {
        Self {
            rules,
            rng: StdRng::seed_from_u64(seed),
            max_turns,
        }
    }

    /// Plays one game to a terminal status or the turn limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules produce an invalid starting position.
    pub fn play_game(&mut self) -> Result<GameRecord, GameError> {
        let mut game = Game::with_rules(self.rules.clone())?;
        let mut turns = Vec::new();
        let mut interactions = InteractionCounts::default();

        while !game.is_over() && game.turn() < self.max_turns as usize {
            let white = game.legal_moves_for(Player::White);
            let black = game.legal_moves_for(Player::Black);
            // A non-terminal status guarantees both sides can move.
            let (Some(white), Some(black)) =
                (white.choose(&mut self.rng), black.choose(&mut self.rng))
            else {
                break;
            };

            game.submit(white.clone())?;
            let Submission::Committed(outcome) = game.submit(black.clone())? else {
                unreachable!("second submission always commits");
            };

            let interaction = outcome.interaction().unwrap_or(Interaction::Independent);
            interactions.record(interaction);
            turns.push(TurnRecord {
                white: white.to_string(),
                black: black.to_string(),
                performed: outcome.performed().iter().map(ToString::to_string).collect(),
                interaction: interaction.to_string(),
            });
        }

        let result = MatchResult::from_result(game.status().result());
        tracing::debug!(turns = game.turn(), ?result, "game finished");

        Ok(GameRecord {
            turns,
            result,
            captures: game.current_state().captured().len(),
            interactions,
        })
    }
}
