//! Application view state machine
//!
//! Two independent axes: which screen is shown (view axis) and the
//! progress of the current diagnosis attempt (request axis). Transitions
//! are plain methods on `AppState` so the machine can be tested without a
//! browser; the web layer holds one instance inside a signal and applies
//! transitions through it.
//!
//! Each attempt carries a generation token. A completion whose token is
//! no longer current is discarded, so a superseded or reset attempt can
//! never overwrite newer state.

use crate::types::DiagnosisResult;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Diagnostic,
    About,
}

/// Request axis of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Analyzing,
    Succeeded,
    Failed,
}

/// The single process-wide application state, page-session lifetime.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub phase: AnalysisPhase,
    pub result: Option<DiagnosisResult>,
    pub error: Option<String>,
    generation: u64,
}

impl AppState {
    /// Switches the visible screen. The request axis is left alone: a
    /// finished diagnosis survives a round trip through another view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Starts a new attempt and returns its generation token.
    ///
    /// Clears any prior result and error; the previous attempt, if still
    /// in flight, is superseded.
    pub fn begin_analysis(&mut self) -> u64 {
        self.generation += 1;
        self.phase = AnalysisPhase::Analyzing;
        self.result = None;
        self.error = None;
        self.generation
    }

    /// Records a successful diagnosis for the attempt identified by
    /// `generation`. Returns false, changing nothing, when the token is
    /// stale.
    pub fn finish_success(&mut self, generation: u64, result: DiagnosisResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = AnalysisPhase::Succeeded;
        self.result = Some(result);
        self.error = None;
        true
    }

    /// Records a failed attempt with a user-facing message. Returns false,
    /// changing nothing, when the token is stale.
    pub fn finish_failure(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = AnalysisPhase::Failed;
        self.error = Some(message.into());
        self.result = None;
        true
    }

    /// Returns the request axis to its upload-ready state. Also bumps the
    /// generation so an attempt still in flight cannot resurface later.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = AnalysisPhase::Idle;
        self.result = None;
        self.error = None;
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == AnalysisPhase::Analyzing
    }
}
