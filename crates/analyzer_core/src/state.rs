use crate::view_model::{ChatViewModel, MessageView};
use crate::{Attachment, Message, MessageId, Role, SubmissionId};

/// Derived controller phase. `Sending` admits no new submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Composing,
    Sending,
}

/// Transient pre-send input, distinct from the permanent message log.
///
/// Reset to its default after every completed submission attempt, success
/// or failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    pub pending_text: String,
    pub pending_attachment: Option<Attachment>,
    /// `Some` while exactly one submission is outstanding.
    pub in_flight: Option<SubmissionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    log: Vec<Message>,
    draft: DraftState,
    next_message_id: MessageId,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered, append-only message log. Callers get a read view only;
    /// all appends go through `update`.
    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn is_sending(&self) -> bool {
        self.draft.in_flight.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.draft.in_flight.is_some() {
            Phase::Sending
        } else if !self.draft.pending_text.trim().is_empty()
            || self.draft.pending_attachment.is_some()
        {
            Phase::Composing
        } else {
            Phase::Idle
        }
    }

    /// True once since the last consume; used by the platform layer to
    /// coalesce re-renders.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub fn view(&self) -> ChatViewModel {
        ChatViewModel {
            messages: self.log.iter().map(MessageView::from_message).collect(),
            draft_text: self.draft.pending_text.clone(),
            attachment_name: self
                .draft
                .pending_attachment
                .as_ref()
                .map(|a| a.name.clone()),
            is_sending: self.is_sending(),
            phase: self.phase(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn set_pending_text(&mut self, text: String) {
        self.draft.pending_text = text;
        self.dirty = true;
    }

    pub(crate) fn set_pending_attachment(&mut self, attachment: Attachment) {
        self.draft.pending_attachment = Some(attachment);
        self.dirty = true;
    }

    pub(crate) fn clear_pending_text(&mut self) {
        self.draft.pending_text.clear();
        self.dirty = true;
    }

    /// Takes the single in-flight slot and returns the new submission id.
    /// Callers must check `is_sending` first.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        self.draft.in_flight = Some(self.next_submission_id);
        self.dirty = true;
        self.next_submission_id
    }

    /// Unconditional finalizer: returns the draft to the empty,
    /// no-attachment, not-sending baseline.
    pub(crate) fn reset_draft(&mut self) {
        self.draft = DraftState::default();
        self.dirty = true;
    }

    pub(crate) fn append_user(
        &mut self,
        content: String,
        at: &str,
        attachment_name: Option<String>,
    ) -> MessageId {
        self.append(Role::User, content, at, attachment_name, None)
    }

    pub(crate) fn append_assistant(
        &mut self,
        content: String,
        at: &str,
        result_ref: Option<String>,
    ) -> MessageId {
        self.append(Role::Assistant, content, at, None, result_ref)
    }

    fn append(
        &mut self,
        role: Role,
        content: String,
        at: &str,
        attachment_name: Option<String>,
        result_ref: Option<String>,
    ) -> MessageId {
        // Ids come from a counter, never the clock, so ordering holds even
        // when two messages land in the same millisecond.
        self.next_message_id += 1;
        self.log.push(Message {
            id: self.next_message_id,
            role,
            content,
            created_at: at.to_string(),
            attachment_name,
            result_ref,
        });
        self.dirty = true;
        self.next_message_id
    }
}
