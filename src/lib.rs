//! # shell-game
//!
//! A self-contained, deterministic shell-game minigame engine: a phase
//! state machine driving a hidden-prize guessing game, plus the
//! kinematics that animate three shells through raise/lower and swap
//! motions.
//!
//! ## Design Principles
//!
//! 1. **Host-agnostic**: the host supplies viewport sizes, clicks,
//!    frame ticks, and opaque texture handles; the engine returns
//!    phase changes, draw lists, and an end-of-session signal. No
//!    rendering, assets, or persistence live here.
//!
//! 2. **Deterministic**: all randomness flows through an injected
//!    seedable RNG, so a seed fully determines the swap sequence.
//!
//! 3. **Pure computation at the core**: layout and shell positions are
//!    pure functions of configuration, phase, and the phase-local tick
//!    counter. Transition validation is a pure classifier; the engine
//!    logs anomalies and proceeds rather than crashing a live session.
//!
//! ## Modules
//!
//! - `core`: slots, phases, transition validation, RNG, configuration
//! - `layout`: viewport-driven rectangle computation
//! - `motion`: reveal profile and swap ellipse kinematics
//! - `game`: round state, draw output, and the `ShellGame` driver
//!
//! ## Driving a session
//!
//! ```
//! use shell_game::{GameConfig, GameRng, Phase, ShellGame, SpriteSet, TextureId};
//!
//! let config = GameConfig::builder().with_swap_count(3).build()?;
//! let sprites = SpriteSet {
//!     background: TextureId::new(0),
//!     shell: TextureId::new(1),
//!     start_button: TextureId::new(2),
//!     exit_button: TextureId::new(3),
//! };
//! let mut game = ShellGame::new(
//!     config,
//!     sprites,
//!     TextureId::new(4),
//!     1280,
//!     720,
//!     GameRng::new(42),
//! );
//!
//! assert_eq!(game.phase(), Phase::WaitToStart);
//!
//! // Each frame: advance, then hand game.draw() to the renderer.
//! let ended = game.advance();
//! assert!(!ended);
//! assert!(!game.draw().is_empty());
//! # Ok::<(), shell_game::ConfigError>(())
//! ```

pub mod core;
pub mod game;
pub mod layout;
pub mod motion;

// Re-export commonly used types
pub use crate::core::{
    check_transition, ConfigError, GameConfig, GameConfigBuilder, GameRng, GameRngState, Phase,
    Slot, SlotMap, TransitionAnomaly,
};

pub use crate::layout::{Layout, Rect, RectF};

pub use crate::motion::{
    duration_for, is_raised, raise_factor, shell_positions, SwapDirection, SwapMotion, SwapRecord,
};

pub use crate::game::{
    draw_list, DrawCommand, DrawList, Key, RoundState, ShellGame, SpriteSet, TextureId,
};
