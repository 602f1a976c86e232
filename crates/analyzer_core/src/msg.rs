use crate::{AnalysisReport, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the draft text.
    InputChanged(String),
    /// User picked a file for analysis.
    FileChosen { path: String, name: String },
    /// User requested the current draft be sent. `at` is the display
    /// timestamp for any messages this send creates.
    SendRequested { at: String },
    /// Gateway resolved a submission with a decoded outcome.
    AnalysisCompleted {
        submission_id: SubmissionId,
        report: AnalysisReport,
        at: String,
    },
    /// Gateway rejected a submission (network, timeout, malformed payload).
    AnalysisFailed {
        submission_id: SubmissionId,
        message: String,
        at: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
