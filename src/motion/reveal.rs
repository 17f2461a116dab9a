//! Reveal raise/pause/lower profile.
//!
//! During `RevealStart` only the center shell moves: it pauses, rises
//! linearly to the apex, pauses there, and lowers back to rest. The
//! profile is expressed as a factor in `[0, 1]` of the configured
//! maximum raise height, keyed off the phase-local tick counter.

use crate::core::GameConfig;

/// Raise factor at local time `t`: 0 at rest, 1 at the apex.
///
/// Breakpoints with `p0 = pause`, `p1 = p0 + raise`, `p2 = p1 + pause`:
/// initial pause to `p0`, linear ramp up to `p1`, apex hold to `p2`,
/// then a linear ramp back down over another `raise` ticks. Past the
/// end of the profile the factor stays 0.
#[must_use]
pub fn raise_factor(t: u32, config: &GameConfig) -> f32 {
    let pause = config.pause_ticks as f32;
    let raise = config.raise_ticks as f32;
    let t = t as f32;

    let p0 = pause;
    let p1 = p0 + raise;
    let p2 = p1 + pause;

    if t < p0 {
        0.0
    } else if t < p1 {
        (t - p0) / raise
    } else if t < p2 {
        1.0
    } else {
        (1.0 - (t - p2) / raise).max(0.0)
    }
}

/// Whether the shell is clear of the prize at local time `t`.
///
/// The prize is drawn underneath the raised shell once it has left
/// the rest position.
#[must_use]
pub fn is_raised(t: u32, config: &GameConfig) -> bool {
    raise_factor(t, config) > 0.0
}
