//! Playout configuration

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings for a batch of random playouts.
///
/// Missing keys in a TOML file fall back to [`PlayoutConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayoutConfig {
    /// Number of games to play
    pub games: u32,
    /// Games still running after this many plies are abandoned
    pub max_plies: u32,
    /// RNG seed; the same seed replays the same games
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            games: 100,
            max_plies: 300,
            seed: 0x1234_5678_9ABC_DEF0,
        }
    }
}

impl PlayoutConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid playout config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg = PlayoutConfig::from_toml_str("games = 7\n").unwrap();
        assert_eq!(cfg.games, 7);
        assert_eq!(cfg.max_plies, PlayoutConfig::default().max_plies);
        assert_eq!(cfg.seed, PlayoutConfig::default().seed);
    }

    #[test]
    fn test_full_file() {
        let cfg = PlayoutConfig::from_toml_str("games = 3\nmax_plies = 40\nseed = 42\n").unwrap();
        assert_eq!(cfg, PlayoutConfig { games: 3, max_plies: 40, seed: 42 });
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(PlayoutConfig::from_toml_str("gmes = 3\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = PlayoutConfig::load(Path::new("/nonexistent/playout.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
