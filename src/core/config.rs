//! Engine configuration.
//!
//! All tunables live here: round length, animation timing in frame
//! ticks, and the layout fractions that drive rectangle computation.
//! Validation happens once, at `build()` - a bad parameter fails fast
//! at construction instead of dividing by zero mid-session.
//!
//! Durations are counted in driver ticks (nominally 60/s); the engine
//! never looks at wall-clock time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors.
///
/// Returned by [`GameConfigBuilder::build`]; none of these are
/// reachable once a `GameConfig` exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("swap count must be at least 1")]
    ZeroSwapCount,

    #[error("{field} must be at least 1 tick")]
    ZeroDuration { field: &'static str },

    #[error("swap duration range is inverted: min {min} > max {max}")]
    SwapDurationOrder { min: u32, max: u32 },

    #[error("swap eccentricity {0} is outside [0, 1)")]
    EccentricityOutOfRange(f32),

    #[error("{field} {value} is outside (0, 1]")]
    FractionOutOfRange { field: &'static str, value: f32 },

    #[error("shell margins and widths exceed the window: 2*{margin} + 3*{width} > 1")]
    ShellsOverflowWindow { margin: f32, width: f32 },
}

/// Complete engine configuration.
///
/// Build via [`GameConfig::builder`]; the defaults reproduce the
/// shipped minigame's look and pacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of swaps per round. Governs round length and the
    /// speed-up curve.
    pub swap_count: u32,

    /// Ticks the reveal pauses before raising and while at the apex.
    pub pause_ticks: u32,

    /// Ticks the reveal spends raising (and again lowering) the shell.
    pub raise_ticks: u32,

    /// Duration of the final (fastest) swap.
    pub swap_min_ticks: u32,

    /// Duration of the first (slowest) swap.
    pub swap_max_ticks: u32,

    /// Fraction of the viewport the minigame window occupies, centered.
    pub window_fraction: f32,

    /// Shell width as a fraction of window width.
    pub shell_width_fraction: f32,

    /// Leading (and trailing) margin as a fraction of window width.
    pub shell_margin_fraction: f32,

    /// Vertical position of the shell row as a fraction of window
    /// height.
    pub shell_row_fraction: f32,

    /// Reveal raise height as a fraction of window height.
    pub raise_height_fraction: f32,

    /// Prize square size as a fraction of window width.
    pub prize_size_fraction: f32,

    /// Eccentricity of the swap ellipse. Higher values flatten the
    /// arc, so shells appear to lift less while crossing.
    pub swap_eccentricity: f32,
}

impl GameConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Total reveal animation length: pause, raise, pause, lower.
    #[must_use]
    pub const fn reveal_ticks(&self) -> u32 {
        2 * (self.raise_ticks + self.pause_ticks)
    }

    /// Vertical-to-horizontal axis ratio of the swap ellipse,
    /// `sqrt(1 - e^2)`.
    #[must_use]
    pub fn swap_axis_ratio(&self) -> f32 {
        (1.0 - self.swap_eccentricity * self.swap_eccentricity).sqrt()
    }
}

impl Default for GameConfig {
    /// The shipped defaults. Infallible: the defaults always validate.
    fn default() -> Self {
        GameConfigBuilder::new()
            .build()
            .expect("default config must validate")
    }
}

/// Builder for [`GameConfig`].
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    swap_count: u32,
    pause_ticks: u32,
    raise_ticks: u32,
    swap_min_ticks: u32,
    swap_max_ticks: u32,
    window_fraction: f32,
    shell_width_fraction: f32,
    shell_margin_fraction: f32,
    shell_row_fraction: f32,
    raise_height_fraction: f32,
    prize_size_fraction: f32,
    swap_eccentricity: f32,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            swap_count: 5,
            pause_ticks: 30,
            raise_ticks: 45,
            swap_min_ticks: 30,
            swap_max_ticks: 75,
            window_fraction: 0.8,
            shell_width_fraction: 0.2,
            shell_margin_fraction: 0.1,
            shell_row_fraction: 0.35,
            raise_height_fraction: 0.25,
            prize_size_fraction: 0.08,
            swap_eccentricity: 0.9,
        }
    }
}

impl GameConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of swaps per round.
    #[must_use]
    pub fn with_swap_count(mut self, count: u32) -> Self {
        self.swap_count = count;
        self
    }

    /// Set the reveal pause duration in ticks.
    #[must_use]
    pub fn with_pause_ticks(mut self, ticks: u32) -> Self {
        self.pause_ticks = ticks;
        self
    }

    /// Set the reveal raise/lower duration in ticks.
    #[must_use]
    pub fn with_raise_ticks(mut self, ticks: u32) -> Self {
        self.raise_ticks = ticks;
        self
    }

    /// Set the swap duration range in ticks (slowest first swap down
    /// to fastest last swap).
    #[must_use]
    pub fn with_swap_ticks(mut self, min: u32, max: u32) -> Self {
        self.swap_min_ticks = min;
        self.swap_max_ticks = max;
        self
    }

    /// Set the shell row height as a fraction of window height.
    #[must_use]
    pub fn with_shell_row_fraction(mut self, fraction: f32) -> Self {
        self.shell_row_fraction = fraction;
        self
    }

    /// Set the reveal raise height as a fraction of window height.
    #[must_use]
    pub fn with_raise_height_fraction(mut self, fraction: f32) -> Self {
        self.raise_height_fraction = fraction;
        self
    }

    /// Set the swap ellipse eccentricity.
    #[must_use]
    pub fn with_swap_eccentricity(mut self, eccentricity: f32) -> Self {
        self.swap_eccentricity = eccentricity;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if self.swap_count == 0 {
            return Err(ConfigError::ZeroSwapCount);
        }
        if self.raise_ticks == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "raise_ticks",
            });
        }
        if self.pause_ticks == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "pause_ticks",
            });
        }
        if self.swap_min_ticks == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "swap_min_ticks",
            });
        }
        if self.swap_min_ticks > self.swap_max_ticks {
            return Err(ConfigError::SwapDurationOrder {
                min: self.swap_min_ticks,
                max: self.swap_max_ticks,
            });
        }
        if !(0.0..1.0).contains(&self.swap_eccentricity) {
            return Err(ConfigError::EccentricityOutOfRange(self.swap_eccentricity));
        }

        let fractions = [
            ("window_fraction", self.window_fraction),
            ("shell_width_fraction", self.shell_width_fraction),
            ("shell_margin_fraction", self.shell_margin_fraction),
            ("shell_row_fraction", self.shell_row_fraction),
            ("raise_height_fraction", self.raise_height_fraction),
            ("prize_size_fraction", self.prize_size_fraction),
        ];
        for (field, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FractionOutOfRange { field, value });
            }
        }

        if 2.0 * self.shell_margin_fraction + 3.0 * self.shell_width_fraction > 1.0 {
            return Err(ConfigError::ShellsOverflowWindow {
                margin: self.shell_margin_fraction,
                width: self.shell_width_fraction,
            });
        }

        Ok(GameConfig {
            swap_count: self.swap_count,
            pause_ticks: self.pause_ticks,
            raise_ticks: self.raise_ticks,
            swap_min_ticks: self.swap_min_ticks,
            swap_max_ticks: self.swap_max_ticks,
            window_fraction: self.window_fraction,
            shell_width_fraction: self.shell_width_fraction,
            shell_margin_fraction: self.shell_margin_fraction,
            shell_row_fraction: self.shell_row_fraction,
            raise_height_fraction: self.raise_height_fraction,
            prize_size_fraction: self.prize_size_fraction,
            swap_eccentricity: self.swap_eccentricity,
        })
    }
}
