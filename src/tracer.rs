// 📡 Tracer Validation Simulator
// Cosmetic progress sequence shown when a TRN fails validation. Tick-driven
// and owned by the caller: the UI's single event loop advances it, start()
// restarts from zero, cancel() stops it. Two overlapping runs cannot exist.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Progress gained per tick
const STEP: u8 = 5;

/// Progress at which the status flips from Connecting to Checking
const CHECKING_AT: u8 = 30;

/// Probability of a Success outcome once the trace completes
const SUCCESS_RATE: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TracerStatus {
    Connecting,
    Checking,
    Complete,
}

impl TracerStatus {
    pub fn message(&self) -> &'static str {
        match self {
            TracerStatus::Connecting => "Connecting to sender bank...",
            TracerStatus::Checking => "Checking message status...",
            TracerStatus::Complete => "Validation complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TracerOutcome {
    Success,
    InProcess,
}

impl TracerOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            TracerOutcome::Success => "Message sent successfully",
            TracerOutcome::InProcess => "Message in process",
        }
    }

    /// Secondary explanation line, shown only for InProcess
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            TracerOutcome::Success => None,
            TracerOutcome::InProcess => {
                Some("The message is still being processed by the sender bank.")
            }
        }
    }
}

/// Tick-driven tracer validation run
#[derive(Debug, Clone)]
pub struct TracerValidation {
    progress: u8,
    status: TracerStatus,
    outcome: Option<TracerOutcome>,
    running: bool,
}

impl TracerValidation {
    pub fn new() -> Self {
        TracerValidation {
            progress: 0,
            status: TracerStatus::Connecting,
            outcome: None,
            running: false,
        }
    }

    /// Begin a run. Restarting mid-run resets everything to zero.
    pub fn start(&mut self) {
        self.progress = 0;
        self.status = TracerStatus::Connecting;
        self.outcome = None;
        self.running = true;
    }

    /// Stop immediately (dialog closed mid-run)
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Advance one step. Does nothing unless running; stops itself at 100.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if !self.running {
            return;
        }

        self.progress += STEP;

        if self.progress == CHECKING_AT {
            self.status = TracerStatus::Checking;
        }

        if self.progress == 100 {
            self.status = TracerStatus::Complete;
            self.outcome = Some(if rng.gen::<f64>() < SUCCESS_RATE {
                TracerOutcome::Success
            } else {
                TracerOutcome::InProcess
            });
            self.running = false;
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn status(&self) -> TracerStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<TracerOutcome> {
        self.outcome
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for TracerValidation {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_starts_at_zero_connecting() {
        let tracer = TracerValidation::new();
        assert_eq!(tracer.progress(), 0);
        assert_eq!(tracer.status(), TracerStatus::Connecting);
        assert_eq!(tracer.outcome(), None);
        assert!(!tracer.is_running());
    }

    #[test]
    fn test_tick_is_noop_until_started() {
        let mut tracer = TracerValidation::new();
        let mut rng = StdRng::seed_from_u64(1);

        tracer.tick(&mut rng);
        assert_eq!(tracer.progress(), 0);
    }

    #[test]
    fn test_status_flips_to_checking_exactly_at_30() {
        let mut tracer = TracerValidation::new();
        let mut rng = StdRng::seed_from_u64(2);
        tracer.start();

        for expected in (5..30).step_by(5) {
            tracer.tick(&mut rng);
            assert_eq!(tracer.progress(), expected as u8);
            assert_eq!(tracer.status(), TracerStatus::Connecting);
        }

        tracer.tick(&mut rng);
        assert_eq!(tracer.progress(), 30);
        assert_eq!(tracer.status(), TracerStatus::Checking);
    }

    #[test]
    fn test_completes_exactly_at_100_and_stops() {
        let mut tracer = TracerValidation::new();
        let mut rng = StdRng::seed_from_u64(3);
        tracer.start();

        for _ in 0..19 {
            tracer.tick(&mut rng);
            assert_ne!(tracer.status(), TracerStatus::Complete);
            assert_eq!(tracer.outcome(), None);
        }

        tracer.tick(&mut rng);
        assert_eq!(tracer.progress(), 100);
        assert_eq!(tracer.status(), TracerStatus::Complete);
        assert!(tracer.outcome().is_some());
        assert!(!tracer.is_running());

        // Further ticks change nothing
        let outcome = tracer.outcome();
        tracer.tick(&mut rng);
        assert_eq!(tracer.progress(), 100);
        assert_eq!(tracer.outcome(), outcome);
    }

    #[test]
    fn test_outcome_is_one_of_two_values() {
        let mut seen_success = false;
        let mut seen_in_process = false;

        for seed in 0..64 {
            let mut tracer = TracerValidation::new();
            let mut rng = StdRng::seed_from_u64(seed);
            tracer.start();
            for _ in 0..20 {
                tracer.tick(&mut rng);
            }
            match tracer.outcome().unwrap() {
                TracerOutcome::Success => seen_success = true,
                TracerOutcome::InProcess => seen_in_process = true,
            }
        }

        assert!(seen_success);
        assert!(seen_in_process);
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let mut tracer = TracerValidation::new();
        let mut rng = StdRng::seed_from_u64(4);
        tracer.start();

        for _ in 0..4 {
            tracer.tick(&mut rng);
        }
        tracer.cancel();
        assert!(!tracer.is_running());

        tracer.tick(&mut rng);
        assert_eq!(tracer.progress(), 20);
        assert_eq!(tracer.outcome(), None);
    }

    #[test]
    fn test_restart_mid_run_resets_to_zero() {
        let mut tracer = TracerValidation::new();
        let mut rng = StdRng::seed_from_u64(5);
        tracer.start();

        for _ in 0..8 {
            tracer.tick(&mut rng);
        }
        assert_eq!(tracer.progress(), 40);

        // Reopening the dialog restarts the same run - no second timer
        tracer.start();
        assert_eq!(tracer.progress(), 0);
        assert_eq!(tracer.status(), TracerStatus::Connecting);
        assert_eq!(tracer.outcome(), None);
        assert!(tracer.is_running());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            TracerStatus::Connecting.message(),
            "Connecting to sender bank..."
        );
        assert_eq!(
            TracerStatus::Checking.message(),
            "Checking message status..."
        );
        assert_eq!(TracerStatus::Complete.message(), "Validation complete");

        assert_eq!(TracerOutcome::Success.message(), "Message sent successfully");
        assert!(TracerOutcome::Success.reason().is_none());
        assert_eq!(TracerOutcome::InProcess.message(), "Message in process");
        assert_eq!(
            TracerOutcome::InProcess.reason(),
            Some("The message is still being processed by the sender bank.")
        );
    }
}
