use crate::{Attachment, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitForAnalysis {
        submission_id: SubmissionId,
        attachment: Attachment,
    },
}
