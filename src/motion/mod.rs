//! Shell kinematics.
//!
//! Position computation is a pure function of the phase, the
//! phase-local tick counter, the current layout, and the in-flight
//! swap parameters (if any). Nothing here caches or mutates; the
//! engine calls [`shell_positions`] after every tick and draws the
//! result.

pub mod reveal;
pub mod swap;

pub use reveal::{is_raised, raise_factor};
pub use swap::{duration_for, SwapDirection, SwapMotion, SwapRecord};

use crate::core::{GameConfig, Phase, Slot, SlotMap};
use crate::layout::{Layout, Rect};

/// Compute the current shell rectangle for each slot.
///
/// - Static phases: every shell at its rest rectangle.
/// - `RevealStart`: the center shell offset upward by the raise
///   profile; left and right stay at rest.
/// - `SwapShells`: the moving pair on their ellipse arcs (sized as at
///   rest), the held-out shell at rest. With no swap in flight the
///   shells stay at rest.
///
/// During a swap the entry for a slot is the shell that started the
/// swap there; rectangles are not re-keyed mid-flight.
#[must_use]
pub fn shell_positions(
    phase: Phase,
    local_time: u32,
    layout: &Layout,
    swap: Option<&SwapMotion>,
    config: &GameConfig,
) -> SlotMap<Rect> {
    match phase {
        Phase::RevealStart => {
            let max_height = config.raise_height_fraction * layout.window.h as f32;
            let offset = raise_factor(local_time, config) * max_height;

            layout.rest.map(|slot, rect| {
                if slot == Slot::Center {
                    Rect::new(rect.x, rect.y - offset.round() as i32, rect.w, rect.h)
                } else {
                    *rect
                }
            })
        }
        Phase::SwapShells => match swap {
            Some(motion) => {
                let (a, b) = motion.pair();
                let (pa, pb) = motion.positions(local_time, layout, config);

                layout.rest.map(|slot, rect| {
                    if slot == a {
                        rect.centered_at(pa.0, pa.1)
                    } else if slot == b {
                        rect.centered_at(pb.0, pb.1)
                    } else {
                        *rect
                    }
                })
            }
            None => layout.rest,
        },
        _ => layout.rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameConfig, Layout) {
        let config = GameConfig::default();
        let layout = Layout::compute(1000, 800, &config);
        (config, layout)
    }

    #[test]
    fn test_static_phases_at_rest() {
        let (config, layout) = setup();

        for phase in [
            Phase::WaitToStart,
            Phase::WaitForPick,
            Phase::RevealPick,
            Phase::GameOver,
        ] {
            let positions = shell_positions(phase, 123, &layout, None, &config);
            for slot in Slot::all() {
                assert_eq!(positions[slot], layout.rest[slot]);
            }
        }
    }

    #[test]
    fn test_reveal_raises_only_center() {
        let (config, layout) = setup();

        // Middle of the ramp-up: past the initial pause.
        let t = config.pause_ticks + config.raise_ticks / 2;
        let positions = shell_positions(Phase::RevealStart, t, &layout, None, &config);

        assert_eq!(positions[Slot::Left], layout.rest[Slot::Left]);
        assert_eq!(positions[Slot::Right], layout.rest[Slot::Right]);
        assert!(positions[Slot::Center].y < layout.rest[Slot::Center].y);
        assert_eq!(positions[Slot::Center].x, layout.rest[Slot::Center].x);
    }

    #[test]
    fn test_reveal_apex_height() {
        let (config, layout) = setup();

        let t = config.pause_ticks + config.raise_ticks;
        let positions = shell_positions(Phase::RevealStart, t, &layout, None, &config);

        let expected = (config.raise_height_fraction * layout.window.h as f32).round() as i32;
        assert_eq!(
            layout.rest[Slot::Center].y - positions[Slot::Center].y,
            expected
        );
    }

    #[test]
    fn test_swap_moves_only_pair() {
        let (config, layout) = setup();
        let motion = SwapMotion {
            held_out: Slot::Right,
            direction: SwapDirection::Clockwise,
            duration: 40,
        };

        let positions = shell_positions(Phase::SwapShells, 20, &layout, Some(&motion), &config);

        assert_eq!(positions[Slot::Right], layout.rest[Slot::Right]);
        assert_ne!(positions[Slot::Left], layout.rest[Slot::Left]);
        assert_ne!(positions[Slot::Center], layout.rest[Slot::Center]);

        // Moving shells keep their rest size.
        assert_eq!(positions[Slot::Left].w, layout.rest[Slot::Left].w);
        assert_eq!(positions[Slot::Left].h, layout.rest[Slot::Left].h);
    }

    #[test]
    fn test_swap_without_motion_stays_at_rest() {
        let (config, layout) = setup();
        let positions = shell_positions(Phase::SwapShells, 20, &layout, None, &config);

        for slot in Slot::all() {
            assert_eq!(positions[slot], layout.rest[slot]);
        }
    }

    #[test]
    fn test_swap_endpoints_exchange_rects() {
        let (config, layout) = setup();
        let motion = SwapMotion {
            held_out: Slot::Center,
            direction: SwapDirection::CounterClockwise,
            duration: 30,
        };

        let positions = shell_positions(Phase::SwapShells, 30, &layout, Some(&motion), &config);

        assert_eq!(positions[Slot::Left], layout.rest[Slot::Right]);
        assert_eq!(positions[Slot::Right], layout.rest[Slot::Left]);
    }
}
