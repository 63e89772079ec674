//! Simulated Analysis Workflow
//!
//! `Idle -> Uploading -> Analyzing { progress } -> Complete { result }`.
//!
//! Each upload starts a new run. Timers hold the run id they were started
//! for and get `Tick::Stale` once a newer run replaces it, so an old timer
//! can never advance or complete a newer analysis.

use crate::models::DetectionResult;

pub const MAX_PROGRESS: u8 = 100;

/// Identifies one analysis run
pub type RunId = u32;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Uploading,
    Analyzing { progress: u8 },
    Complete { result: DetectionResult },
}

/// Outcome of one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced(u8),
    /// Progress hit exactly `MAX_PROGRESS`; the result can be produced
    Reached,
    /// Timer belongs to an old run or the machine is not analyzing
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisWorkflow {
    phase: Phase,
    run: RunId,
    step: u8,
    /// Data URL of the uploaded image
    image: Option<String>,
}

impl AnalysisWorkflow {
    pub fn new(step: u8) -> Self {
        Self {
            phase: Phase::Idle,
            run: 0,
            step: step.clamp(1, MAX_PROGRESS),
            image: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn progress(&self) -> u8 {
        match self.phase {
            Phase::Analyzing { progress } => progress,
            Phase::Complete { .. } => MAX_PROGRESS,
            _ => 0,
        }
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.phase {
            Phase::Complete { result } => Some(result),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Uploading | Phase::Analyzing { .. })
    }

    /// A file was selected. Drops any previous image and result.
    pub fn begin_upload(&mut self) -> RunId {
        self.run = self.run.wrapping_add(1);
        self.image = None;
        self.phase = Phase::Uploading;
        self.run
    }

    /// The file has been read into a displayable image
    pub fn image_loaded(&mut self, run: RunId, data_url: String) -> bool {
        if run != self.run || self.phase != Phase::Uploading {
            return false;
        }
        self.image = Some(data_url);
        self.phase = Phase::Analyzing { progress: 0 };
        true
    }

    /// Reading the file failed; back to idle
    pub fn upload_failed(&mut self, run: RunId) {
        if run == self.run && self.phase == Phase::Uploading {
            self.phase = Phase::Idle;
        }
    }

    /// Analyze the current image again. Returns the new run id.
    pub fn restart(&mut self) -> Option<RunId> {
        if self.image.is_none() || self.is_analyzing() {
            return None;
        }
        self.run = self.run.wrapping_add(1);
        self.phase = Phase::Analyzing { progress: 0 };
        Some(self.run)
    }

    pub fn tick(&mut self, run: RunId) -> Tick {
        if run != self.run {
            return Tick::Stale;
        }
        match self.phase {
            Phase::Analyzing { progress } if progress < MAX_PROGRESS => {
                let next = progress.saturating_add(self.step).min(MAX_PROGRESS);
                self.phase = Phase::Analyzing { progress: next };
                if next == MAX_PROGRESS {
                    Tick::Reached
                } else {
                    Tick::Advanced(next)
                }
            }
            Phase::Analyzing { .. } => Tick::Reached,
            _ => Tick::Stale,
        }
    }

    /// The detector failed. Keeps the image so the run can be restarted.
    pub fn analysis_failed(&mut self, run: RunId) {
        if run == self.run && matches!(self.phase, Phase::Analyzing { .. }) {
            self.phase = Phase::Idle;
        }
    }

    /// Store the detector's result. Only accepted once progress is at 100.
    pub fn complete(&mut self, run: RunId, result: DetectionResult) -> bool {
        if run != self.run || self.phase != (Phase::Analyzing { progress: MAX_PROGRESS }) {
            return false;
        }
        self.phase = Phase::Complete { result };
        true
    }
}

impl Default for AnalysisWorkflow {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    fn sample_result() -> DetectionResult {
        DetectionResult {
            hazard_detected: true,
            hazard_type: "Fire Hazard".to_string(),
            confidence: 97,
            risk_level: RiskLevel::High,
            location: "Building Section A".to_string(),
            recommendations: vec!["Evacuate the area immediately".to_string()],
        }
    }

    fn run_to_full(wf: &mut AnalysisWorkflow, run: RunId) -> Vec<u8> {
        let mut seen = Vec::new();
        loop {
            match wf.tick(run) {
                Tick::Advanced(p) => seen.push(p),
                Tick::Reached => {
                    seen.push(wf.progress());
                    return seen;
                }
                Tick::Stale => panic!("unexpected stale tick"),
            }
        }
    }

    #[test]
    fn test_full_run() {
        let mut wf = AnalysisWorkflow::new(10);
        assert_eq!(*wf.phase(), Phase::Idle);

        let run = wf.begin_upload();
        assert_eq!(*wf.phase(), Phase::Uploading);
        assert!(wf.image_loaded(run, "data:image/png;base64,AAAA".to_string()));
        assert_eq!(wf.progress(), 0);

        let seen = run_to_full(&mut wf, run);
        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(wf.result().is_none());

        assert!(wf.complete(run, sample_result()));
        assert_eq!(wf.result().unwrap().confidence, 97);
        assert!(!wf.is_analyzing());
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_exactly_100() {
        for step in [1u8, 3, 7, 33, 99, 100] {
            let mut wf = AnalysisWorkflow::new(step);
            let run = wf.begin_upload();
            wf.image_loaded(run, "img".to_string());
            let seen = run_to_full(&mut wf, run);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "step {}", step);
            assert_eq!(*seen.last().unwrap(), 100);
        }
    }

    #[test]
    fn test_complete_rejected_before_full_progress() {
        let mut wf = AnalysisWorkflow::new(10);
        let run = wf.begin_upload();
        wf.image_loaded(run, "img".to_string());
        wf.tick(run);
        assert!(!wf.complete(run, sample_result()));
        assert!(wf.result().is_none());
    }

    #[test]
    fn test_reupload_clears_previous_result() {
        let mut wf = AnalysisWorkflow::new(50);
        let first = wf.begin_upload();
        wf.image_loaded(first, "one".to_string());
        run_to_full(&mut wf, first);
        wf.complete(first, sample_result());
        assert!(wf.result().is_some());

        let second = wf.begin_upload();
        assert!(wf.result().is_none());
        assert!(wf.image().is_none());
        assert_ne!(first, second);
    }

    #[test]
    fn test_old_timer_goes_stale_after_reupload() {
        let mut wf = AnalysisWorkflow::new(10);
        let first = wf.begin_upload();
        wf.image_loaded(first, "one".to_string());
        wf.tick(first);

        let second = wf.begin_upload();
        assert_eq!(wf.tick(first), Tick::Stale);
        assert!(!wf.image_loaded(first, "late".to_string()));

        wf.image_loaded(second, "two".to_string());
        assert_eq!(wf.tick(second), Tick::Advanced(10));
        assert!(!wf.complete(first, sample_result()));
    }

    #[test]
    fn test_restart_reanalyzes_current_image() {
        let mut wf = AnalysisWorkflow::new(100);
        assert!(wf.restart().is_none());

        let run = wf.begin_upload();
        wf.image_loaded(run, "img".to_string());
        assert!(wf.restart().is_none(), "busy while analyzing");
        assert_eq!(wf.tick(run), Tick::Reached);
        wf.complete(run, sample_result());

        let again = wf.restart().unwrap();
        assert!(wf.result().is_none());
        assert_eq!(wf.image(), Some("img"));
        assert_eq!(wf.tick(again), Tick::Reached);
    }

    #[test]
    fn test_upload_failure_returns_to_idle() {
        let mut wf = AnalysisWorkflow::default();
        let run = wf.begin_upload();
        wf.upload_failed(run);
        assert_eq!(*wf.phase(), Phase::Idle);
        assert_eq!(wf.tick(run), Tick::Stale);
    }

    #[test]
    fn test_detector_failure_keeps_image_for_restart() {
        let mut wf = AnalysisWorkflow::new(100);
        let run = wf.begin_upload();
        wf.image_loaded(run, "img".to_string());
        assert_eq!(wf.tick(run), Tick::Reached);

        wf.analysis_failed(run);
        assert_eq!(*wf.phase(), Phase::Idle);
        assert_eq!(wf.image(), Some("img"));
        assert!(wf.restart().is_some());
    }
}
