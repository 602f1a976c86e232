use crate::{Message, MessageId, Phase, Role};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    pub messages: Vec<MessageView>,
    pub draft_text: String,
    pub attachment_name: Option<String>,
    pub is_sending: bool,
    pub phase: Phase,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub role: Role,
    /// Content split on newlines: one paragraph per line.
    pub paragraphs: Vec<String>,
    pub created_at: String,
    pub attachment_name: Option<String>,
    pub result_ref: Option<String>,
}

impl MessageView {
    pub(crate) fn from_message(message: &Message) -> Self {
        Self {
            id: message.id,
            role: message.role,
            paragraphs: message.content.lines().map(ToOwned::to_owned).collect(),
            created_at: message.created_at.clone(),
            attachment_name: message.attachment_name.clone(),
            result_ref: message.result_ref.clone(),
        }
    }
}
