use std::time::Duration;

pub const BOARD_WIDTH: i32 = 40;
pub const BOARD_HEIGHT: i32 = 20;

/// Points awarded for every fruit eaten
pub const FRUIT_SCORE: u32 = 10;

pub const DEFAULT_TICK_MS: u64 = 100;

/// Runtime settings for a game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Time budget of one render -> input -> update cycle
    pub tick: Duration,
    /// Seed for fruit placement, `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(tick_ms: u64, seed: Option<u64>) -> Self {
        Self {
            tick: Duration::from_millis(tick_ms),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick, Duration::from_millis(100));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(250, Some(7));
        assert_eq!(config.tick, Duration::from_millis(250));
        assert_eq!(config.seed, Some(7));
    }
}
