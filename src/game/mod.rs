//! The game driver: round state, draw output, and the engine facade.

pub mod draw;
pub mod engine;
pub mod state;

pub use draw::{draw_list, DrawCommand, DrawList, SpriteSet, TextureId};
pub use engine::{Key, ShellGame};
pub use state::RoundState;
