//! Core engine types: slots, phases, RNG, configuration.
//!
//! These are the building blocks the layout, motion, and game modules
//! share. Everything here is a plain value type or a pure function.

pub mod config;
pub mod phase;
pub mod rng;
pub mod slot;

pub use config::{ConfigError, GameConfig, GameConfigBuilder};
pub use phase::{check_transition, Phase, TransitionAnomaly};
pub use rng::{GameRng, GameRngState};
pub use slot::{Slot, SlotMap};
