//! Round state: swap countdown, prize slot, player pick.

use serde::{Deserialize, Serialize};

use crate::core::Slot;
use crate::motion::SwapMotion;

/// The authoritative round bookkeeping.
///
/// Invariant: `0 <= remaining_swaps <= max_swaps` throughout the
/// session. `picked_slot` is set at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Configured number of swaps for this round.
    pub max_swaps: u32,
    /// Swaps still to run.
    pub remaining_swaps: u32,
    /// The slot currently hiding the prize. Mutates only when a swap
    /// involving it completes.
    pub prize_slot: Slot,
    /// The player's selection, recorded during `WaitForPick`.
    pub picked_slot: Option<Slot>,
}

impl RoundState {
    /// Create the state for a fresh round.
    #[must_use]
    pub const fn new(max_swaps: u32) -> Self {
        Self {
            max_swaps,
            remaining_swaps: max_swaps,
            prize_slot: Slot::Center,
            picked_slot: None,
        }
    }

    /// Apply a completed swap: exchange the prize slot if it was in
    /// the moving pair and decrement the countdown.
    ///
    /// A swap finishing with the countdown already spent (reachable
    /// through an anomalous transition back into `SwapShells`) is
    /// ignored: the prize stays put and the countdown stays at zero.
    ///
    /// Returns the number of swaps still to run.
    pub fn complete_swap(&mut self, motion: &SwapMotion) -> u32 {
        if self.remaining_swaps == 0 {
            return 0;
        }

        self.prize_slot = motion.apply_to(self.prize_slot);
        self.remaining_swaps -= 1;
        self.remaining_swaps
    }

    /// Record the player's pick. The first pick wins; later calls are
    /// ignored and return `false`.
    pub fn record_pick(&mut self, slot: Slot) -> bool {
        if self.picked_slot.is_some() {
            return false;
        }
        self.picked_slot = Some(slot);
        true
    }

    /// Whether the recorded pick matches the prize slot.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.picked_slot == Some(self.prize_slot)
    }
}
