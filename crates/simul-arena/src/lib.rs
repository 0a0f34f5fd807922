//! Simul Arena - seeded random self-play for simultaneous chess.
//!
//! Plays games through the public `simul-engine` API only, which makes it
//! both a smoke test for rule sets and a small example client.
//!
//! # Modules
//!
//! - [`config`] - `arena.toml` loading and custom variant layouts
//! - [`runner`] - random self-play of a single game
//! - [`report`] - per-run summaries in text or JSON

pub mod config;
pub mod report;
pub mod runner;
