//! Movement domain: timestamp windows and timed action locks.
//!
//! Both are compared against the fixed-step clock instead of being
//! decremented every tick, so testing them is idempotent.

/// A one-shot grace window, stored as the time it was last armed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedWindow {
    armed_at: f32,
}

impl Default for TimedWindow {
    fn default() -> Self {
        Self {
            armed_at: f32::NEG_INFINITY,
        }
    }
}

impl TimedWindow {
    pub fn arm(&mut self, now: f32) {
        self.armed_at = now;
    }

    /// Push the armed time into the past so the window can never test active.
    pub fn invalidate(&mut self) {
        self.armed_at = f32::NEG_INFINITY;
    }

    pub fn is_active(&self, now: f32, window: f32) -> bool {
        now < self.armed_at + window
    }

    pub fn armed_at(&self) -> Option<f32> {
        self.armed_at.is_finite().then_some(self.armed_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKind {
    Dash,
    WallJump,
    Knockback,
}

/// A locked action that overrides normal movement until `ends_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionLock {
    pub kind: LockKind,
    pub started_at: f32,
    pub ends_at: f32,
}

impl ActionLock {
    pub fn new(kind: LockKind, now: f32, duration: f32) -> Self {
        Self {
            kind,
            started_at: now,
            ends_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: f32) -> bool {
        now >= self.ends_at
    }

    /// Whether arming `incoming` may replace this lock.
    ///
    /// Wall jump always preempts (restarting itself). Knockback preempts
    /// anything but another knockback. Dash never preempts.
    pub fn yields_to(&self, incoming: LockKind) -> bool {
        match incoming {
            LockKind::WallJump => true,
            LockKind::Knockback => self.kind != LockKind::Knockback,
            LockKind::Dash => false,
        }
    }
}

/// Try to arm `kind` in `slot`, honouring the exclusion policy.
/// Returns true if the lock was armed.
pub fn try_arm_lock(slot: &mut Option<ActionLock>, kind: LockKind, now: f32, duration: f32) -> bool {
    if let Some(current) = slot
        && !current.yields_to(kind)
    {
        return false;
    }

    *slot = Some(ActionLock::new(kind, now, duration));
    true
}

/// Clear the lock in `slot` if it has run out. Returns the released kind.
pub fn release_expired_lock(slot: &mut Option<ActionLock>, now: f32) -> Option<LockKind> {
    if slot.as_ref().is_some_and(|lock| lock.is_expired(now)) {
        slot.take().map(|lock| lock.kind)
    } else {
        None
    }
}
