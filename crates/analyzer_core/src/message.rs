pub type MessageId = u64;
pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One conversation entry. Immutable once appended to the log.
///
/// `id` is the identity and the only ordering guarantee; `created_at` is a
/// display string supplied by the platform and may collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: String,
    /// Set only on user messages that originated from a file submission.
    pub attachment_name: Option<String>,
    /// Backend-assigned token for a downloadable artifact, set only on
    /// assistant messages that carry one. Not a filesystem path.
    pub result_ref: Option<String>,
}

/// A file the user picked for analysis, held in the draft until sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: String,
    pub name: String,
}
