use std::fmt;
use std::path::PathBuf;

pub type SubmissionId = u64;

/// A file to upload: where to read it and the filename the backend sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
    pub filename: String,
}

/// Backend response decoded once at this boundary into a closed variant
/// set. Two identical submissions may yield different tokens; the gateway
/// never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Outliers {
        detected: u64,
        cleaned_file: Option<String>,
    },
    Extraction {
        extracted: u64,
        extracted_file: Option<String>,
    },
    Unclassified,
    Failure {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    SubmissionCompleted {
        submission_id: SubmissionId,
        result: Result<AnalysisOutcome, TransportError>,
    },
}

/// The submission never reached a decodable backend response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    AttachmentRead,
    HttpStatus(u16),
    Timeout,
    MalformedPayload,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::AttachmentRead => write!(f, "attachment unreadable"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
