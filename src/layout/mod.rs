//! Viewport-driven layout.
//!
//! `Layout` is derived state: a pure, deterministic function of the
//! viewport size and the configuration. The engine recomputes it on
//! construction, on every resize, and on entry to the static phases;
//! two calls with the same inputs yield identical rectangles.
//!
//! Geometry rules:
//! - The minigame window occupies a centered fraction of the viewport.
//! - The start button spans 30-70% of window width and 20-40% of
//!   window height, anchored to the window origin.
//! - The exit button is a square of `max(32, 5% viewport width)`
//!   pixels, pinned to the window's top-right corner.
//! - The three shell rest slots sit left-to-right on a fixed row, with
//!   gaps solving `2*margin + 3*shell_w + 2*gap = window_w`. Shells
//!   keep a 4:3 aspect ratio.
//! - Prize squares are centered on the rest rectangles.

pub mod rect;

pub use rect::{Rect, RectF};

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Slot, SlotMap};

/// Exit button minimum edge length in pixels.
const EXIT_MIN_PX: f32 = 32.0;
/// Exit button edge as a fraction of viewport width.
const EXIT_VIEWPORT_FRACTION: f32 = 0.05;

/// Start button horizontal span, as fractions of window width.
const START_X: (f32, f32) = (0.3, 0.7);
/// Start button vertical span, as fractions of window height.
const START_Y: (f32, f32) = (0.2, 0.4);

/// Shell height over width.
const SHELL_ASPECT: f32 = 0.75;

/// The fixed on-screen layout for one viewport size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// The minigame window, centered in the viewport.
    pub window: Rect,
    /// Start button, shown in `WaitToStart`.
    pub start_button: Rect,
    /// Exit button, active in every phase.
    pub exit_button: Rect,
    /// Rest rectangle per slot, ordered left-to-right.
    pub rest: SlotMap<Rect>,
    /// Prize-display square per slot, centered on the rest rectangle.
    pub prize: SlotMap<Rect>,
}

impl Layout {
    /// Compute the layout for a viewport.
    #[must_use]
    pub fn compute(viewport_w: u32, viewport_h: u32, config: &GameConfig) -> Self {
        let vw = viewport_w as f32;
        let vh = viewport_h as f32;

        let win_w = vw * config.window_fraction;
        let win_h = vh * config.window_fraction;
        let window = RectF::new((vw - win_w) / 2.0, (vh - win_h) / 2.0, win_w, win_h);

        let start_button = RectF::new(
            window.x + win_w * START_X.0,
            window.y + win_h * START_Y.0,
            win_w * (START_X.1 - START_X.0),
            win_h * (START_Y.1 - START_Y.0),
        );

        let exit_edge = (vw * EXIT_VIEWPORT_FRACTION).max(EXIT_MIN_PX);
        let exit_button = RectF::new(
            window.x + win_w - exit_edge,
            window.y,
            exit_edge,
            exit_edge,
        );

        let shell_w = win_w * config.shell_width_fraction;
        let shell_h = shell_w * SHELL_ASPECT;
        let margin = win_w * config.shell_margin_fraction;
        // 2*margin + 3*shell_w + 2*gap = win_w
        let gap = (win_w - 2.0 * margin - 3.0 * shell_w) / 2.0;
        let row_y = window.y + win_h * config.shell_row_fraction;

        let rest = SlotMap::new(|slot| {
            let i = slot.index() as f32;
            RectF::new(
                window.x + margin + i * (shell_w + gap),
                row_y,
                shell_w,
                shell_h,
            )
            .to_pixel()
        });

        let prize_edge = win_w * config.prize_size_fraction;
        let prize = rest.map(|_, rect| {
            let (cx, cy) = rect.center();
            RectF::new(
                cx - prize_edge / 2.0,
                cy - prize_edge / 2.0,
                prize_edge,
                prize_edge,
            )
            .to_pixel()
        });

        Self {
            window: window.to_pixel(),
            start_button: start_button.to_pixel(),
            exit_button: exit_button.to_pixel(),
            rest,
            prize,
        }
    }

    /// The slot whose rest rectangle contains the point, if any.
    #[must_use]
    pub fn slot_at(&self, x: i32, y: i32) -> Option<Slot> {
        Slot::all().find(|&slot| self.rest[slot].contains(x, y))
    }
}
