//! Swap selection, half-ellipse kinematics, and swap history.
//!
//! Each swap exchanges two of the three slots while the third stays at
//! rest. Which slot is held out and which way the pair rotates are
//! drawn from the injected RNG at the start of the swap; the duration
//! shrinks linearly as the round progresses so the game speeds up.
//!
//! A `SwapMotion` stores only the chosen parameters. The ellipse
//! geometry is derived from the current layout at position-computation
//! time, so a mid-swap viewport resize reflows the arc instead of
//! animating against stale rectangles.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::core::{GameConfig, GameRng, Slot};
use crate::layout::Layout;

/// Rotation direction of a swap's half-ellipse arc.
///
/// The two moving shells always take opposite arcs of the same
/// ellipse; the direction decides which member takes which arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    Clockwise,
    CounterClockwise,
}

/// Parameters of one animated swap, chosen at its start.
///
/// Valid only while the swap is in flight; the next swap gets a fresh
/// choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapMotion {
    /// The slot that stays at rest.
    pub held_out: Slot,
    /// Rotation direction of the moving pair.
    pub direction: SwapDirection,
    /// Swap length in ticks.
    pub duration: u32,
}

impl SwapMotion {
    /// Choose the parameters for the next swap.
    ///
    /// The held-out slot is uniform over the three slots and the
    /// direction uniform over the two orderings. `remaining` is the
    /// number of swaps still to run including this one, so the first
    /// swap of a round gets the full `swap_max_ticks`.
    #[must_use]
    pub fn choose(rng: &mut GameRng, remaining: u32, config: &GameConfig) -> Self {
        let held_out = Slot::ALL[rng.gen_range_usize(0..3)];
        let direction = if rng.gen_bool(0.5) {
            SwapDirection::Clockwise
        } else {
            SwapDirection::CounterClockwise
        };

        Self {
            held_out,
            direction,
            duration: duration_for(remaining, config),
        }
    }

    /// The moving pair, left member first.
    #[must_use]
    pub const fn pair(&self) -> (Slot, Slot) {
        self.held_out.others()
    }

    /// The slot the prize ends up in once this swap completes.
    ///
    /// A prize in one of the swapped slots flips to the partner slot;
    /// a prize in the held-out slot is unaffected.
    #[must_use]
    pub fn apply_to(&self, prize: Slot) -> Slot {
        let (a, b) = self.pair();
        if prize == a {
            b
        } else if prize == b {
            a
        } else {
            prize
        }
    }

    /// Shell center positions of the moving pair at local time `t`.
    ///
    /// The pair traces opposite arcs of the same half-ellipse: at
    /// `t = 0` each shell sits at its own rest center, at
    /// `t = duration` they have exchanged places. `t` past the
    /// duration clamps to the end points.
    ///
    /// Returns (left member center, right member center).
    #[must_use]
    pub fn positions(&self, t: u32, layout: &Layout, config: &GameConfig) -> ((f32, f32), (f32, f32)) {
        let (a, b) = self.pair();
        let (ax, _) = layout.rest[a].center();
        let (bx, _) = layout.rest[b].center();
        let (_, cy) = layout.rest[self.held_out].center();

        let cx = (ax + bx) / 2.0;
        let rx = (bx - ax) / 2.0;
        let ry = rx * config.swap_axis_ratio();

        let phi = PI * (t.min(self.duration) as f32) / (self.duration as f32);
        let (theta_a, theta_b) = match self.direction {
            SwapDirection::Clockwise => (PI - phi, -phi),
            SwapDirection::CounterClockwise => (PI + phi, phi),
        };

        let point = |theta: f32| (cx + rx * theta.cos(), cy + ry * theta.sin());
        (point(theta_a), point(theta_b))
    }
}

/// Swap duration at `remaining` swaps left, interpolated linearly
/// between the configured max (first swap) and min (last swap).
#[must_use]
pub fn duration_for(remaining: u32, config: &GameConfig) -> u32 {
    let span = (config.swap_max_ticks - config.swap_min_ticks) as f32;
    let fraction = remaining as f32 / config.swap_count as f32;
    config.swap_min_ticks + (fraction * span).round() as u32
}

/// A completed swap, kept on the engine for replay and debugging.
///
/// Replaying the recorded pair exchanges in sequence order from the
/// starting prize slot reproduces the final prize slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRecord {
    /// The swap's chosen parameters.
    pub motion: SwapMotion,
    /// 0-based position of this swap within the round.
    pub sequence: u32,
}
