//! Game configuration.
//!
//! A `GameConfig` names how many pairs to deal and which content keys
//! (asset or category names) the pairs show. The default is the six-flower
//! deck; callers pass configuration in rather than relying on a global list.
//!
//! ```
//! use flower_pairs::core::GameConfig;
//!
//! let config = GameConfig::default();
//! assert_eq!(config.number_of_pairs, 6);
//! assert_eq!(config.content_at(0), Some("flower1"));
//!
//! let small = GameConfig::new(["rose", "tulip"]).with_seed(7);
//! assert_eq!(small.number_of_pairs, 2);
//! assert!(small.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Content keys of the default deck.
pub const DEFAULT_CONTENTS: [&str; 6] = [
    "flower1", "flower2", "flower3", "flower4", "flower5", "flower6",
];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of pairs to deal.
    pub number_of_pairs: usize,

    /// Content key per pair index. Must hold at least `number_of_pairs` keys.
    pub contents: Vec<String>,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENTS)
    }
}

impl GameConfig {
    /// Create a configuration dealing one pair per content key.
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let contents: Vec<String> = contents.into_iter().map(Into::into).collect();
        Self {
            number_of_pairs: contents.len(),
            contents,
            seed: None,
        }
    }

    /// Parse a configuration from JSON. Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Deal only the first `count` content keys.
    #[must_use]
    pub fn with_pairs(mut self, count: usize) -> Self {
        self.number_of_pairs = count;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every pair index has a content key.
    pub fn validate(&self) -> Result<()> {
        if self.contents.len() < self.number_of_pairs {
            return Err(GameError::NotEnoughContent {
                requested: self.number_of_pairs,
                available: self.contents.len(),
            });
        }
        Ok(())
    }

    /// Content key for a pair index.
    #[must_use]
    pub fn content_at(&self, index: usize) -> Option<&str> {
        self.contents.get(index).map(String::as_str)
    }
}
