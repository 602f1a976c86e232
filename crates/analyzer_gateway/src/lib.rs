//! Analyzer gateway: backend submission IO and download-URL construction.
mod decode;
mod download;
mod gateway;
mod submit;
mod types;

pub use decode::{decode_response, DecodeError};
pub use download::{download_url_for, DOWNLOAD_PATH};
pub use gateway::GatewayHandle;
pub use submit::{GatewaySettings, ReqwestSubmitter, Submitter, ANALYZE_PATH};
pub use types::{
    AnalysisOutcome, Attachment, FailureKind, GatewayEvent, SubmissionId, TransportError,
};
