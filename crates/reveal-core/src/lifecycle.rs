//! Enter / steady / exit phases of a single preview.
//!
//! Time is passed in as seconds on a caller-owned clock, so the machine can
//! be stepped deterministically from tests.

use crate::constants::{
    ENTER_DURATION_SEC, ENTER_SPRING_DAMPING, ENTER_SPRING_MASS, ENTER_SPRING_STIFFNESS,
    EXIT_DURATION_SEC,
};
use crate::placement::Placement;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Entering { since: f64 },
    Steady,
    /// `from` is what was on screen when the exit began.
    Exiting { since: f64, from: Visual },
    Gone,
}

/// What the renderer should draw for a preview this cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub placement: Placement,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub enter_sec: f64,
    pub exit_sec: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter_sec: ENTER_DURATION_SEC,
            exit_sec: EXIT_DURATION_SEC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PreviewLifecycle {
    phase: Phase,
    timing: Timing,
}

impl PreviewLifecycle {
    pub fn entering(now: f64, timing: Timing) -> Self {
        Self {
            phase: Phase::Entering { since: now },
            timing,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_gone(&self) -> bool {
        self.phase == Phase::Gone
    }

    #[inline]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Apply timed transitions. Returns true if the phase changed.
    pub fn advance(&mut self, now: f64) -> bool {
        let next = match self.phase {
            Phase::Entering { since } if now - since >= self.timing.enter_sec => Phase::Steady,
            Phase::Exiting { since, .. } if now - since >= self.timing.exit_sec => Phase::Gone,
            other => other,
        };
        let changed = next != self.phase;
        self.phase = next;
        changed
    }

    /// Start the exit from what is currently shown: the offset freezes and
    /// scale and opacity shrink from their current values.
    /// No-op if already exiting or gone.
    pub fn begin_exit(&mut self, now: f64, shown: Visual) {
        if matches!(self.phase, Phase::Entering { .. } | Phase::Steady) {
            self.phase = Phase::Exiting {
                since: now,
                from: shown,
            };
        }
    }

    /// Compose the visual for this cycle. `at_rest` is the placement without
    /// pointer contribution, `steady` the full one. Entering previews start
    /// at `at_rest` and ride the spring toward `steady`.
    pub fn visual(&self, now: f64, at_rest: Placement, steady: Placement) -> Option<Visual> {
        match self.phase {
            Phase::Entering { since } => {
                let s = spring_response(((now - since).max(0.0)) as f32);
                Some(Visual {
                    placement: at_rest.lerp(steady, s),
                    scale: s,
                    opacity: s.clamp(0.0, 1.0),
                })
            }
            Phase::Steady => Some(Visual {
                placement: steady,
                scale: 1.0,
                opacity: 1.0,
            }),
            Phase::Exiting { since, from } => {
                let t = if self.timing.exit_sec > 0.0 {
                    ((now - since) / self.timing.exit_sec).clamp(0.0, 1.0) as f32
                } else {
                    1.0
                };
                Some(Visual {
                    placement: from.placement,
                    scale: from.scale * (1.0 - t),
                    opacity: from.opacity * (1.0 - t),
                })
            }
            Phase::Gone => None,
        }
    }
}

/// Step response of the enter spring (0 at t=0, settling at 1).
pub fn spring_response(t: f32) -> f32 {
    let omega = (ENTER_SPRING_STIFFNESS / ENTER_SPRING_MASS).sqrt();
    let zeta =
        ENTER_SPRING_DAMPING / (2.0 * (ENTER_SPRING_STIFFNESS * ENTER_SPRING_MASS).sqrt());
    if zeta < 1.0 {
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        1.0 - decay * ((wd * t).cos() + (zeta * omega / wd) * (wd * t).sin())
    } else {
        // critically/over damped: no overshoot
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    }
}
