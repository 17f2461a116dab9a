//! Game phases and transition validation.
//!
//! The phase enum is strictly ordered: normal play walks it forward one
//! step at a time. Validation is a pure function that classifies a
//! requested transition and reports an anomaly when the request breaks
//! the expected linear progression. It never blocks the transition -
//! the caller decides whether an anomaly is advisory (live session) or
//! fatal (tests).

use serde::{Deserialize, Serialize};

/// The current stage of the game's state machine.
///
/// Exactly one phase is active at a time. Discriminants define the
/// expected progression order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phase {
    /// Idle at the start screen, waiting for the start button.
    WaitToStart = 0,
    /// Raise the center shell to show the prize, then lower it.
    RevealStart = 1,
    /// Animated shell swaps, one after another.
    SwapShells = 2,
    /// Idle, waiting for the player to pick a shell.
    WaitForPick = 3,
    /// Show the picked shell's contents. Display-only in this core.
    RevealPick = 4,
    /// Terminal phase. Display-only in this core.
    GameOver = 5,
}

impl Phase {
    /// Get the phase's position in the expected progression.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The initial phase of every session.
    pub const INITIAL: Phase = Phase::WaitToStart;
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::WaitToStart => "WaitToStart",
            Phase::RevealStart => "RevealStart",
            Phase::SwapShells => "SwapShells",
            Phase::WaitForPick => "WaitForPick",
            Phase::RevealPick => "RevealPick",
            Phase::GameOver => "GameOver",
        };
        write!(f, "{}", name)
    }
}

/// A transition request that breaks the expected linear progression.
///
/// Anomalies are advisory: the state machine logs them and (except for
/// `Repeat`, which is a no-op) executes the transition anyway, so a
/// live session never crashes on an ordering bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionAnomaly {
    /// The current phase was requested again outside the initial phase.
    /// Treated as a no-op: entry actions do not re-run.
    Repeat { phase: Phase },
    /// The target is more than one step ahead of the current phase.
    Skipped { from: Phase, to: Phase },
    /// The target is behind the current phase.
    Regressed { from: Phase, to: Phase },
}

impl std::fmt::Display for TransitionAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionAnomaly::Repeat { phase } => {
                write!(f, "repeat transition to {}", phase)
            }
            TransitionAnomaly::Skipped { from, to } => {
                write!(f, "skipped phase: {} -> {}", from, to)
            }
            TransitionAnomaly::Regressed { from, to } => {
                write!(f, "regressed phase: {} -> {}", from, to)
            }
        }
    }
}

/// Classify a requested phase transition.
///
/// Returns `None` for a normal transition (the next phase in order, or
/// any request while still in the initial phase targeting it again).
///
/// ```
/// use shell_game::core::{check_transition, Phase, TransitionAnomaly};
///
/// assert_eq!(check_transition(Phase::WaitToStart, Phase::RevealStart), None);
/// assert_eq!(
///     check_transition(Phase::WaitToStart, Phase::WaitForPick),
///     Some(TransitionAnomaly::Skipped {
///         from: Phase::WaitToStart,
///         to: Phase::WaitForPick,
///     })
/// );
/// ```
#[must_use]
pub fn check_transition(current: Phase, target: Phase) -> Option<TransitionAnomaly> {
    if target == current {
        if current == Phase::INITIAL {
            return None;
        }
        return Some(TransitionAnomaly::Repeat { phase: current });
    }

    if target.ordinal() > current.ordinal() + 1 {
        return Some(TransitionAnomaly::Skipped {
            from: current,
            to: target,
        });
    }

    if target.ordinal() < current.ordinal() {
        return Some(TransitionAnomaly::Regressed {
            from: current,
            to: target,
        });
    }

    None
}
