//! The minigame engine: phase machine plus frame/input/resize driver.
//!
//! The host drives a `ShellGame` cooperatively: `advance` once per
//! frame tick, `handle_click`/`handle_keypress` on input events,
//! `handle_resize` when the viewport changes, and `draw` whenever it
//! wants the current frame's sprite list. `advance`, `handle_click`,
//! and `handle_keypress` return `true` when the session should end;
//! after that every call is a no-op.
//!
//! Transition validation is permissive: anomalies are logged at warn
//! and executed anyway, so a live session never crashes on an
//! ordering bug. Tests that want strictness assert on
//! [`check_transition`](crate::core::check_transition) directly.

use tracing::{debug, info, trace, warn};

use crate::core::{check_transition, GameConfig, GameRng, Phase, Slot, TransitionAnomaly};
use crate::layout::Layout;
use crate::motion::{shell_positions, SwapMotion, SwapRecord};

use super::draw::{draw_list, DrawList, SpriteSet, TextureId};
use super::state::RoundState;

/// Host key events the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Quits the session, same as clicking the exit button.
    Escape,
    /// Any key the engine does not interpret.
    Other,
}

/// A shell-game session.
pub struct ShellGame {
    config: GameConfig,
    sprites: SpriteSet,
    prize: TextureId,
    rng: GameRng,
    viewport: (u32, u32),
    layout: Layout,
    phase: Phase,
    /// Per-phase tick counter, reset on entry to animated phases.
    local_time: u32,
    round: RoundState,
    /// In-flight swap parameters; `Some` only during `SwapShells`.
    swap: Option<SwapMotion>,
    history: Vec<SwapRecord>,
    ended: bool,
}

impl ShellGame {
    /// Start a new session in `WaitToStart`.
    ///
    /// `prize` is the host's texture for the hidden prize, opaque to
    /// the engine. The RNG is injected so tests can fix the seed.
    #[must_use]
    pub fn new(
        config: GameConfig,
        sprites: SpriteSet,
        prize: TextureId,
        viewport_w: u32,
        viewport_h: u32,
        rng: GameRng,
    ) -> Self {
        let layout = Layout::compute(viewport_w, viewport_h, &config);
        let round = RoundState::new(config.swap_count);

        info!(
            swaps = config.swap_count,
            seed = rng.seed(),
            "shell game session started"
        );

        Self {
            config,
            sprites,
            prize,
            rng,
            viewport: (viewport_w, viewport_h),
            layout,
            phase: Phase::INITIAL,
            local_time: 0,
            round,
            swap: None,
            history: Vec::new(),
            ended: false,
        }
    }

    /// Stable identifier for host bookkeeping.
    #[must_use]
    pub const fn minigame_id() -> &'static str {
        "ShellGame"
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The current layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The current round bookkeeping.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// The in-flight swap, if one is animating.
    #[must_use]
    pub const fn current_swap(&self) -> Option<&SwapMotion> {
        self.swap.as_ref()
    }

    /// Completed swaps in order.
    #[must_use]
    pub fn swap_history(&self) -> &[SwapRecord] {
        &self.history
    }

    /// Whether the session has ended.
    #[must_use]
    pub const fn has_ended(&self) -> bool {
        self.ended
    }

    /// Request a phase transition.
    ///
    /// Validation is advisory: a `Repeat` is a logged no-op; `Skipped`
    /// and `Regressed` are logged and executed anyway. Entry actions
    /// run exactly once per accepted transition.
    pub fn request_transition(&mut self, target: Phase) {
        match check_transition(self.phase, target) {
            Some(anomaly @ TransitionAnomaly::Repeat { .. }) => {
                warn!(phase = %self.phase, "{anomaly}");
                return;
            }
            Some(anomaly) => {
                warn!(from = %self.phase, to = %target, "{anomaly}");
            }
            None => {
                debug!(from = %self.phase, to = %target, "phase transition");
            }
        }

        self.phase = target;
        self.enter_phase(target);
    }

    fn enter_phase(&mut self, phase: Phase) {
        match phase {
            // Static phase: compute the rest layout once, not per frame.
            Phase::WaitToStart | Phase::WaitForPick => {
                self.layout = Layout::compute(self.viewport.0, self.viewport.1, &self.config);
            }
            Phase::RevealStart => {
                self.round.prize_slot = Slot::Center;
                self.local_time = 0;
            }
            Phase::SwapShells => {
                self.local_time = 0;
                let motion =
                    SwapMotion::choose(&mut self.rng, self.round.remaining_swaps, &self.config);
                trace!(
                    held_out = %motion.held_out,
                    duration = motion.duration,
                    "swap chosen"
                );
                self.swap = Some(motion);
            }
            Phase::RevealPick | Phase::GameOver => {
                debug!(phase = %phase, "entered display-only phase");
            }
        }
    }

    /// Advance one frame tick.
    ///
    /// Returns `true` when the session should end.
    pub fn advance(&mut self) -> bool {
        if self.ended {
            return true;
        }

        match self.phase {
            Phase::WaitToStart | Phase::WaitForPick => false,
            Phase::RevealStart => {
                self.local_time += 1;
                if self.local_time > self.config.reveal_ticks() {
                    self.request_transition(Phase::SwapShells);
                }
                false
            }
            Phase::SwapShells => {
                self.local_time += 1;
                if let Some(motion) = self.swap {
                    if self.local_time > motion.duration {
                        self.finish_swap(motion);
                    }
                }
                false
            }
            phase => {
                warn!(%phase, "advance in unhandled phase, ending session");
                self.end_session();
                true
            }
        }
    }

    fn finish_swap(&mut self, motion: SwapMotion) {
        self.local_time = 0;

        // Reachable only through an anomalous transition back into
        // SwapShells: the countdown is spent, so the swap neither
        // moves the prize nor enters the history.
        if self.round.remaining_swaps == 0 {
            warn!("swap finished with spent countdown, returning to pick");
            self.swap = None;
            self.request_transition(Phase::WaitForPick);
            return;
        }

        let sequence = self.history.len() as u32;
        self.history.push(SwapRecord { motion, sequence });
        let remaining = self.round.complete_swap(&motion);
        trace!(
            sequence,
            remaining,
            prize = %self.round.prize_slot,
            "swap completed"
        );

        if remaining == 0 {
            self.swap = None;
            self.request_transition(Phase::WaitForPick);
        } else {
            // Next swap runs back to back, with a shorter duration.
            let next = SwapMotion::choose(&mut self.rng, remaining, &self.config);
            trace!(held_out = %next.held_out, duration = next.duration, "swap chosen");
            self.swap = Some(next);
        }
    }

    /// Handle a pointer click at viewport pixel coordinates.
    ///
    /// Returns `true` when the session should end.
    pub fn handle_click(&mut self, x: i32, y: i32) -> bool {
        if self.ended {
            return true;
        }

        // The exit button works in every phase.
        if self.layout.exit_button.contains(x, y) {
            return self.force_quit();
        }

        match self.phase {
            Phase::WaitToStart if self.layout.start_button.contains(x, y) => {
                self.request_transition(Phase::RevealStart);
            }
            Phase::WaitForPick => {
                if let Some(slot) = self.layout.slot_at(x, y) {
                    if self.round.record_pick(slot) {
                        info!(picked = %slot, win = self.round.is_win(), "shell picked");
                        self.request_transition(Phase::RevealPick);
                    }
                }
            }
            _ => {
                trace!(x, y, phase = %self.phase, "click ignored");
            }
        }

        false
    }

    /// Handle a key press.
    ///
    /// Returns `true` when the session should end.
    pub fn handle_keypress(&mut self, key: Key) -> bool {
        if self.ended {
            return true;
        }

        match key {
            Key::Escape => self.force_quit(),
            Key::Other => false,
        }
    }

    /// Handle a viewport resize. Recomputes the layout with no phase
    /// side effects.
    pub fn handle_resize(&mut self, viewport_w: u32, viewport_h: u32) {
        self.viewport = (viewport_w, viewport_h);
        self.layout = Layout::compute(viewport_w, viewport_h, &self.config);
        debug!(viewport_w, viewport_h, "layout recomputed");
    }

    /// Quit immediately, regardless of phase.
    ///
    /// Always returns `true`.
    pub fn force_quit(&mut self) -> bool {
        info!(phase = %self.phase, "force quit");
        self.end_session();
        true
    }

    fn end_session(&mut self) {
        if !self.ended {
            self.ended = true;
            info!(
                swaps_run = self.history.len(),
                picked = ?self.round.picked_slot,
                "session ended, resources can be unloaded"
            );
        }
    }

    /// Assemble the current frame's draw list.
    ///
    /// Empty once the session has ended.
    #[must_use]
    pub fn draw(&self) -> DrawList {
        if self.ended {
            return DrawList::new();
        }

        let shells = shell_positions(
            self.phase,
            self.local_time,
            &self.layout,
            self.swap.as_ref(),
            &self.config,
        );

        draw_list(
            self.phase,
            self.local_time,
            &self.layout,
            &shells,
            self.round.prize_slot,
            &self.sprites,
            self.prize,
            &self.config,
        )
    }
}
