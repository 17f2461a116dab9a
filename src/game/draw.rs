//! Draw output: opaque texture handles and the per-frame draw list.
//!
//! The engine never renders. It hands the host an ordered list of
//! (texture, destination rectangle) pairs to blit back-to-front:
//! background, exit button, phase foreground, shells, then the prize
//! where applicable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, Phase, Slot, SlotMap};
use crate::layout::{Layout, Rect};
use crate::motion::is_raised;

/// Opaque host texture handle.
///
/// The engine stores and emits these without interpreting them; the
/// host assigns meaning when it loads its assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

impl TextureId {
    /// Create a new texture handle.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Texture({})", self.0)
    }
}

/// The texture handles the engine draws with.
///
/// The prize texture is passed separately at construction: it is the
/// round's prize descriptor, opaque to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub background: TextureId,
    pub shell: TextureId,
    pub start_button: TextureId,
    pub exit_button: TextureId,
}

/// One sprite placement: blit `texture` at `dest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub texture: TextureId,
    pub dest: Rect,
}

/// The bounded per-frame draw list, in render order.
pub type DrawList = SmallVec<[DrawCommand; 8]>;

/// Assemble the draw list for one frame.
///
/// `shells` are the current shell rectangles from
/// [`crate::motion::shell_positions`]; they are emitted left-to-right
/// by current x so overlap during a swap resolves consistently.
#[must_use]
pub fn draw_list(
    phase: Phase,
    local_time: u32,
    layout: &Layout,
    shells: &SlotMap<Rect>,
    prize_slot: Slot,
    sprites: &SpriteSet,
    prize: TextureId,
    config: &GameConfig,
) -> DrawList {
    let mut list = DrawList::new();

    list.push(DrawCommand {
        texture: sprites.background,
        dest: layout.window,
    });
    list.push(DrawCommand {
        texture: sprites.exit_button,
        dest: layout.exit_button,
    });

    if phase == Phase::WaitToStart {
        list.push(DrawCommand {
            texture: sprites.start_button,
            dest: layout.start_button,
        });
    }

    let mut sorted: [Rect; 3] = [
        shells[Slot::Left],
        shells[Slot::Center],
        shells[Slot::Right],
    ];
    sorted.sort_by_key(|rect| rect.x);
    for dest in sorted {
        list.push(DrawCommand {
            texture: sprites.shell,
            dest,
        });
    }

    let show_prize = match phase {
        Phase::RevealStart => is_raised(local_time, config),
        Phase::RevealPick | Phase::GameOver => true,
        _ => false,
    };
    if show_prize {
        list.push(DrawCommand {
            texture: prize,
            dest: layout.prize[prize_slot],
        });
    }

    list
}
