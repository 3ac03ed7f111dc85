//! Command-line tooling around the rules engine
//!
//! - `perft`: leaf counts of the legal-move tree
//! - `playout`: seeded random games with per-ply invariant checks

pub mod config;
pub mod perft;
pub mod playout;

pub use config::PlayoutConfig;
pub use perft::{divide, perft};
pub use playout::{run_playouts, GameSummary, PlayoutReport};
