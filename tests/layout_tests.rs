//! Layout invariant tests.
//!
//! Property-based checks over viewport sizes: rest slots are disjoint
//! and ordered left-to-right, controls stay inside the window, and the
//! computation is deterministic.

use proptest::prelude::*;

use shell_game::{GameConfig, Layout, Slot};

fn layout(w: u32, h: u32) -> Layout {
    Layout::compute(w, h, &GameConfig::default())
}

proptest! {
    #[test]
    fn prop_rest_slots_disjoint_and_ordered(w in 320u32..4000, h in 240u32..3000) {
        let l = layout(w, h);

        let left = l.rest[Slot::Left];
        let center = l.rest[Slot::Center];
        let right = l.rest[Slot::Right];

        // Slot order matches x order.
        prop_assert!(left.x < center.x);
        prop_assert!(center.x < right.x);

        prop_assert!(!left.intersects(center));
        prop_assert!(!center.intersects(right));
        prop_assert!(!left.intersects(right));
    }

    #[test]
    fn prop_compute_is_deterministic(w in 320u32..4000, h in 240u32..3000) {
        prop_assert_eq!(layout(w, h), layout(w, h));
    }

    #[test]
    fn prop_shells_inside_window(w in 320u32..4000, h in 240u32..3000) {
        let l = layout(w, h);

        for slot in Slot::all() {
            let rest = l.rest[slot];
            prop_assert!(rest.x >= l.window.x);
            prop_assert!(rest.right() <= l.window.right());
        }
    }

    #[test]
    fn prop_start_button_inside_window(w in 320u32..4000, h in 240u32..3000) {
        let l = layout(w, h);

        prop_assert!(l.start_button.x >= l.window.x);
        prop_assert!(l.start_button.right() <= l.window.right());
        prop_assert!(l.start_button.y >= l.window.y);
        prop_assert!(l.start_button.bottom() <= l.window.bottom());
    }

    #[test]
    fn prop_exit_button_square_with_floor(w in 320u32..4000, h in 240u32..3000) {
        let l = layout(w, h);

        prop_assert_eq!(l.exit_button.w, l.exit_button.h);
        prop_assert!(l.exit_button.w >= 32);
        prop_assert_eq!(l.exit_button.right(), l.window.right());
        prop_assert_eq!(l.exit_button.y, l.window.y);
    }

    #[test]
    fn prop_prize_centered_within_rest(w in 600u32..4000, h in 450u32..3000) {
        let l = layout(w, h);

        for slot in Slot::all() {
            let rest = l.rest[slot];
            let prize = l.prize[slot];

            let (rx, ry) = rest.center();
            let (px, py) = prize.center();
            prop_assert!((rx - px).abs() <= 1.0);
            prop_assert!((ry - py).abs() <= 1.0);

            // At these sizes the prize square fits inside the shell.
            prop_assert!(prize.w <= rest.w);
        }
    }

    #[test]
    fn prop_slot_at_finds_every_rest_center(w in 320u32..4000, h in 240u32..3000) {
        let l = layout(w, h);

        for slot in Slot::all() {
            let (cx, cy) = l.rest[slot].center();
            prop_assert_eq!(l.slot_at(cx as i32, cy as i32), Some(slot));
        }
    }
}

#[test]
fn test_custom_row_fraction_moves_shell_row() {
    let low = GameConfig::builder().with_shell_row_fraction(0.5).build().unwrap();
    let high = GameConfig::builder().with_shell_row_fraction(0.35).build().unwrap();

    let l_low = Layout::compute(1280, 720, &low);
    let l_high = Layout::compute(1280, 720, &high);

    assert!(l_low.rest[Slot::Left].y > l_high.rest[Slot::Left].y);
    assert_eq!(l_low.rest[Slot::Left].x, l_high.rest[Slot::Left].x);
}
