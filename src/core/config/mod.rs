use std::error::Error;
use std::fmt::{Display, Formatter};
use serde::{Serialize, Deserialize};

/// Storage used underneath a queue
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backing {
    /// Growable ring buffer (`VecDeque`)
    #[default]
    Array,
    /// Doubly linked list with head and tail pointers
    List,
}

/// Settings applied when a queue is built
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub backing: Backing,
    /// Seed for the queue's own shuffle rng. `None` falls back to the thread rng.
    pub shuffle_seed: Option<u64>,
}

impl QueueConfig {
    pub fn new(backing: Backing) -> Self {
        Self { backing, shuffle_seed: None }
    }

    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }
}

/// Failure while loading a `QueueConfig`
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid queue config: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
        }
    }
}
