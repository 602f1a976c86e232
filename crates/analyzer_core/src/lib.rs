//! Analyzer core: pure conversation state machine and view-model helpers.
mod effect;
mod message;
mod msg;
mod report;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use message::{Attachment, Message, MessageId, Role, SubmissionId};
pub use msg::Msg;
pub use report::AnalysisReport;
pub use state::{AppState, DraftState, Phase};
pub use update::{attachment_placeholder, update, HELP_TEXT};
pub use view_model::{ChatViewModel, MessageView};
