use crate::cooldown::DisplayController;
use crate::debounce::QuiescenceTimer;
use crate::engine::{PageContext, ScanEngine, ScanError, ScanOutcome};
use crate::trust::TrustStore;
use crate::verdict::Severity;
use std::time::Instant;

/// What the presentation layer should do after a scan.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionDecision {
    /// Transitioned to Displaying; render the banner.
    ShowBanner { severity: Severity, score: f64 },
    /// Below threshold, or the exclusion filter fired.
    NoAction,
    /// Eligible, but dropped by the display state machine.
    Suppressed,
}

/// Single-threaded scan loop state: the pure engine plus the trust store,
/// the banner state machine, the mutation debouncer, and the last outcome
/// kept for the messaging surface.
pub struct ScanSession {
    engine: ScanEngine,
    trust: TrustStore,
    display: DisplayController,
    rescan_timer: QuiescenceTimer,
    last_outcome: Option<ScanOutcome>,
}

impl ScanSession {
    pub fn new(engine: ScanEngine, trust: TrustStore) -> Self {
        Self {
            engine,
            trust,
            display: DisplayController::new(),
            rescan_timer: QuiescenceTimer::new(),
            last_outcome: None,
        }
    }

    pub fn trust_store(&self) -> &TrustStore {
        &self.trust
    }

    /// Run a scan immediately (the page-load path) and consult the display
    /// state machine.
    pub fn scan_now(
        &mut self,
        ctx: &PageContext,
        now: Instant,
    ) -> Result<SessionDecision, ScanError> {
        let outcome = self.engine.scan(ctx, &self.trust)?;
        let decision = self.decide(&outcome, now);
        self.last_outcome = Some(outcome);
        Ok(decision)
    }

    /// A batch of page mutations arrived; reset the quiescence window.
    pub fn on_mutation(&mut self, now: Instant) {
        self.rescan_timer.record_event(now);
    }

    /// Debounced rescan path: scans only when the mutation timer fires.
    pub fn poll(
        &mut self,
        ctx: &PageContext,
        now: Instant,
    ) -> Result<Option<SessionDecision>, ScanError> {
        if !self.rescan_timer.poll(now) {
            return Ok(None);
        }
        self.scan_now(ctx, now).map(Some)
    }

    /// User dismissed the banner; arms the cooldown.
    pub fn dismiss(&mut self, now: Instant) {
        self.display.dismiss(now);
    }

    /// User trusted the current site: persist first, then suppress. The
    /// next scan of this hostname short-circuits to score zero.
    pub fn trust_current(&mut self, hostname: &str, now: Instant) {
        self.trust.trust(hostname);
        self.display.trusted(now);
    }

    /// Messaging surface: the popup asks for the last result.
    pub fn last_outcome(&self) -> Option<&ScanOutcome> {
        self.last_outcome.as_ref()
    }

    /// Messaging surface: a user reports the warning as wrong.
    pub fn report_false_positive(&mut self, url: &str) -> Result<bool, url::ParseError> {
        self.trust.report_false_positive(url)
    }

    fn decide(&mut self, outcome: &ScanOutcome, now: Instant) -> SessionDecision {
        let eligible = outcome.is_display_eligible();
        if self.display.offer(eligible, now) {
            match outcome {
                ScanOutcome::Scored(result) => SessionDecision::ShowBanner {
                    severity: result.verdict.severity,
                    score: result.breakdown.total,
                },
                // offer() returns true only for eligible outcomes, and a
                // skipped scan is never eligible.
                ScanOutcome::Skipped { .. } => SessionDecision::NoAction,
            }
        } else if eligible {
            SessionDecision::Suppressed
        } else {
            SessionDecision::NoAction
        }
    }
}
