use std::time::{Duration, Instant};

/// Suppression window after a dismiss/trust action. Mutation-driven
/// rescans fire within milliseconds of a dismissal; without this window
/// the banner would reappear immediately.
pub const COOLDOWN: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Idle,
    Displaying,
    Suppressed { until: Instant },
}

/// Idle -> Displaying -> Suppressed(timer) -> Idle. All transitions take
/// an explicit `now` so tests drive the clock.
pub struct DisplayController {
    state: BannerState,
    cooldown: Duration,
}

impl DisplayController {
    pub fn new() -> Self {
        Self {
            state: BannerState::Idle,
            cooldown: COOLDOWN,
        }
    }

    #[cfg(test)]
    fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            state: BannerState::Idle,
            cooldown,
        }
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    /// Offer an eligible scan result for display. Returns true only on the
    /// Idle -> Displaying transition; while Displaying or Suppressed the
    /// offer is dropped silently.
    pub fn offer(&mut self, eligible: bool, now: Instant) -> bool {
        self.decay(now);

        match self.state {
            BannerState::Idle if eligible => {
                self.state = BannerState::Displaying;
                true
            }
            _ => false,
        }
    }

    /// User dismissed the banner; no persistent effect.
    pub fn dismiss(&mut self, now: Instant) {
        self.suppress(now);
    }

    /// Called after the hostname was added to the trust store.
    pub fn trusted(&mut self, now: Instant) {
        self.suppress(now);
    }

    fn suppress(&mut self, now: Instant) {
        if self.state == BannerState::Displaying {
            self.state = BannerState::Suppressed {
                until: now + self.cooldown,
            };
        }
    }

    fn decay(&mut self, now: Instant) {
        if let BannerState::Suppressed { until } = self.state {
            if now >= until {
                self.state = BannerState::Idle;
            }
        }
    }
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new()
    }
}
