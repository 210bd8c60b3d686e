//! Tunable engine parameters
//!
//! The compile-time defaults live here as named constants. `EngineConfig`
//! bundles the values the search actually reads so that alternate profiles
//! can be built and tested in isolation.

use crate::board::DIRECTIONS;
use crate::error::GameError;
use crate::eval::Weights;

/// Board side length.
pub const BOARD_SIZE: usize = 15;
/// Total cells on the board.
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Contiguous stones needed to win.
pub const WIN_LENGTH: usize = 5;
/// Search depth in plies.
pub const SEARCH_DEPTH: u8 = 4;
/// Chebyshev radius around existing stones for candidate moves.
pub const CANDIDATE_RADIUS: u8 = 2;
/// How far past the origin cell the evaluator scans in each direction.
pub const EVAL_SCAN_DEPTH: i32 = 4;
/// Pause before the bot moves, purely cosmetic.
pub const THINK_DELAY_MS: u64 = 500;
/// Magnitude no score may reach; the search uses it as its infinity.
pub const SCORE_LIMIT: i32 = i32::MAX / 2;

/// Engine configuration consumed by the search and the decision policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum plies searched before the static frontier lookahead.
    pub search_depth: u8,
    /// Radius used by the candidate generator.
    pub candidate_radius: u8,
    /// Weight table used by the evaluator.
    pub weights: Weights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: SEARCH_DEPTH,
            candidate_radius: CANDIDATE_RADIUS,
            weights: Weights::default(),
        }
    }
}

impl EngineConfig {
    /// Override the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    /// Override the candidate radius.
    #[must_use]
    pub fn with_radius(mut self, radius: u8) -> Self {
        self.candidate_radius = radius;
        self
    }

    /// Override the weight table.
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Check the configuration before handing it to the engine.
    ///
    /// A completed run must outweigh everything else the evaluator can sum up
    /// for one placement, and it must stay above that sum even after the
    /// per-ply discount applied by the search.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.search_depth == 0 {
            return Err(GameError::InvalidConfig(
                "search depth must be at least 1".to_string(),
            ));
        }
        if usize::from(self.candidate_radius) >= BOARD_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "candidate radius {} does not fit a {BOARD_SIZE}x{BOARD_SIZE} board",
                self.candidate_radius
            )));
        }

        let ceiling = self.weights.non_winning_ceiling();
        let discount = i64::from(self.search_depth) + 1;
        if i64::from(self.weights.win) <= ceiling + discount {
            return Err(GameError::InvalidConfig(format!(
                "win weight {} does not dominate the lower tiers ({ceiling})",
                self.weights.win
            )));
        }
        // Four completed lines plus the center bonus must stay below the
        // search bounds, which also keeps `evaluate` clear of i32 overflow.
        let top_tier = i64::from(self.weights.win.max(self.weights.block_win));
        let max_total = top_tier * DIRECTIONS.len() as i64
            + i64::from(self.weights.positional_unit) * BOARD_SIZE as i64;
        if max_total >= i64::from(SCORE_LIMIT) {
            return Err(GameError::InvalidConfig(format!(
                "weights can total {max_total}, above the score limit {SCORE_LIMIT}"
            )));
        }
        if i64::from(self.weights.block_win) <= ceiling {
            return Err(GameError::InvalidConfig(format!(
                "block-win weight {} does not dominate the lower tiers ({ceiling})",
                self.weights.block_win
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.candidate_radius, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::default().with_depth(2).with_radius(1);
        assert_eq!(config.search_depth, 2);
        assert_eq!(config.candidate_radius, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = EngineConfig::default().with_depth(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_radius_rejected() {
        let config = EngineConfig::default().with_radius(15);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weak_win_weight_rejected() {
        let weights = Weights {
            win: 100_000,
            ..Weights::default()
        };
        let config = EngineConfig::default().with_weights(weights);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weak_block_win_weight_rejected() {
        let weights = Weights {
            block_win: 50_000,
            ..Weights::default()
        };
        assert!(EngineConfig::default().with_weights(weights).validate().is_err());
    }

    #[test]
    fn test_overflowing_win_weight_rejected() {
        let weights = Weights {
            win: 600_000_000,
            ..Weights::default()
        };
        let err = EngineConfig::default().with_weights(weights).validate();
        assert!(matches!(err, Err(GameError::InvalidConfig(msg)) if msg.contains("score limit")));
    }

    #[test]
    fn test_largest_safe_win_weight_accepted() {
        let unit = Weights::default().positional_unit;
        let win = (SCORE_LIMIT - 1 - unit * BOARD_SIZE as i32) / 4;
        let weights = Weights {
            win,
            ..Weights::default()
        };
        assert!(EngineConfig::default().with_weights(weights).validate().is_ok());
    }
}
