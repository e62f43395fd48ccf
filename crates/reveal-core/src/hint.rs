//! Auto-dismiss timer for the "tap a title" hint.
//!
//! The hint is owned by a condition (touch layout with nothing selected).
//! When that condition ends before the deadline the timer is cancelled, and
//! every arm hands out a fresh token so a late callback from an earlier arm
//! can never dismiss a newer hint.

use crate::constants::HINT_DURATION_SEC;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintToken(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HintCommand {
    Show { token: HintToken, duration_sec: f64 },
    Hide,
}

#[derive(Clone, Debug)]
pub struct HintTimer {
    duration_sec: f64,
    generation: u64,
    pending: Option<(HintToken, f64)>,
    dismissed: bool,
}

impl HintTimer {
    pub fn new(duration_sec: f64) -> Self {
        Self {
            duration_sec,
            generation: 0,
            pending: None,
            dismissed: false,
        }
    }

    /// Arm the timer unless it is already pending or the hint was dismissed
    /// for good.
    pub fn arm(&mut self, now: f64) -> Option<HintToken> {
        if self.pending.is_some() || self.dismissed {
            return None;
        }
        self.generation += 1;
        let token = HintToken(self.generation);
        self.pending = Some((token, now + self.duration_sec));
        log::debug!("[hint] armed for {:.1}s", self.duration_sec);
        Some(token)
    }

    /// Clear a pending deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was = self.pending.take().is_some();
        if was {
            log::debug!("[hint] cancelled");
        }
        was
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// Timer callback for `token`. Only the currently pending token fires.
    pub fn fire(&mut self, token: HintToken) -> bool {
        match self.pending {
            Some((t, _)) if t == token => self.dismiss(),
            _ => false,
        }
    }

    /// Fire if the deadline has passed.
    pub fn fire_due(&mut self, now: f64) -> bool {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.dismiss(),
            _ => false,
        }
    }

    // Firing dismisses the hint for the rest of the session.
    fn dismiss(&mut self) -> bool {
        self.pending = None;
        self.dismissed = true;
        log::debug!("[hint] dismissed");
        true
    }
}

impl Default for HintTimer {
    fn default() -> Self {
        Self::new(HINT_DURATION_SEC)
    }
}
