//! Game configuration types.
//!
//! The setup screen hands the engine plain data:
//! - `GridSize`: a board preset, expanded to a `GridLayout`
//! - `TimingConfig`: pauses applied while a flipped pair resolves
//! - `GameConfig`: combines both with the shuffle seed

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::MemoError;

/// Board presets offered by the setup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridSize {
    /// 2 rows, 2 columns.
    TwoByTwo,
    /// 2 rows, 3 columns.
    TwoByThree,
    /// 3 rows, 4 columns.
    ThreeByFour,
    /// 4 rows, 4 columns.
    FourByFour,
    /// 4 rows, 5 columns.
    FourByFive,
    /// 5 rows, 6 columns.
    FiveBySix,
}

impl GridSize {
    /// All presets, smallest first.
    pub const ALL: [GridSize; 6] = [
        GridSize::TwoByTwo,
        GridSize::TwoByThree,
        GridSize::ThreeByFour,
        GridSize::FourByFour,
        GridSize::FourByFive,
        GridSize::FiveBySix,
    ];

    /// Rows, columns and card count for this preset.
    #[must_use]
    pub const fn layout(self) -> GridLayout {
        let (rows, columns) = match self {
            GridSize::TwoByTwo => (2, 2),
            GridSize::TwoByThree => (2, 3),
            GridSize::ThreeByFour => (3, 4),
            GridSize::FourByFour => (4, 4),
            GridSize::FourByFive => (4, 5),
            GridSize::FiveBySix => (5, 6),
        };
        GridLayout {
            rows,
            columns,
            total_cards: rows * columns,
        }
    }

    /// Number of distinct images the player has to pick.
    #[must_use]
    pub const fn required_images(self) -> usize {
        self.layout().required_images()
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::FourByFour
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layout = self.layout();
        write!(f, "{}x{}", layout.rows, layout.columns)
    }
}

impl FromStr for GridSize {
    type Err = MemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GridSize::ALL
            .into_iter()
            .find(|size| size.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MemoError::UnknownGridSize(s.to_string()))
    }
}

/// Board dimensions.
///
/// `total_cards` is always `rows * columns`, and every preset yields an
/// even count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
    pub total_cards: usize,
}

impl GridLayout {
    /// Pairs on the board; also the number of images to select.
    #[must_use]
    pub const fn required_images(self) -> usize {
        self.total_cards / 2
    }

    /// Row and column of the tile at `position` (row-major).
    #[must_use]
    pub fn cell(self, position: usize) -> Option<(usize, usize)> {
        if self.columns == 0 || position >= self.total_cards {
            return None;
        }
        Some((position / self.columns, position % self.columns))
    }
}

/// Pauses applied while a flipped pair is resolving.
///
/// The mismatch pause is longer so the player can memorize a failed
/// attempt before the cards turn back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Pause before a matching pair is locked in.
    pub match_pause: Duration,

    /// Pause before a mismatched pair flips back.
    pub mismatch_pause: Duration,
}

impl TimingConfig {
    /// Default match confirmation pause.
    pub const MATCH_PAUSE: Duration = Duration::from_millis(800);

    /// Default mismatch revert pause.
    pub const MISMATCH_PAUSE: Duration = Duration::from_millis(1500);

    /// No pauses at all. Useful for tests and simulations.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            match_pause: Duration::ZERO,
            mismatch_pause: Duration::ZERO,
        }
    }

    /// Pause applied to a resolution with the given outcome.
    #[must_use]
    pub fn pause_for(&self, is_match: bool) -> Duration {
        if is_match {
            self.match_pause
        } else {
            self.mismatch_pause
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            match_pause: Self::MATCH_PAUSE,
            mismatch_pause: Self::MISMATCH_PAUSE,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board preset.
    pub grid: GridSize,

    /// Resolution pauses.
    pub timing: TimingConfig,

    /// Seed for deck shuffles. Same seed replays the same boards;
    /// `None` draws a fresh seed from the OS for every session.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            timing: TimingConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config for the given grid with default timing.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Pin the shuffle seed (replays, tests).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the resolution pauses.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Board layout for the configured grid.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.grid.layout()
    }
}
