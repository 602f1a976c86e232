use std::time::Duration;

use reqwest::multipart::{Form, Part};
use url::Url;

use crate::decode::decode_response;
use crate::{AnalysisOutcome, Attachment, FailureKind, SubmissionId, TransportError};

/// Path of the analysis endpoint, relative to the backend base URL.
pub const ANALYZE_PATH: &str = "api/analyze_data";

/// Multipart field name the backend expects the file under.
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    /// Bound on the whole exchange, upload included. The backend runs
    /// ML agents per file, so this is generous.
    pub request_timeout: Duration,
}

impl GatewaySettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    /// One attempt, no retries: a failed submission surfaces once to the
    /// controller, which owns all user-visible failure handling.
    async fn submit(
        &self,
        submission_id: SubmissionId,
        attachment: &Attachment,
    ) -> Result<AnalysisOutcome, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: GatewaySettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: GatewaySettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        attachment: &Attachment,
    ) -> Result<AnalysisOutcome, TransportError> {
        let endpoint = self
            .settings
            .base_url
            .join(ANALYZE_PATH)
            .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))?;

        let bytes = tokio::fs::read(&attachment.path)
            .await
            .map_err(|err| TransportError::new(FailureKind::AttachmentRead, err.to_string()))?;

        analyzer_logging::analyzer_debug!(
            "submission {} uploading {} bytes as {:?}",
            submission_id,
            bytes.len(),
            attachment.filename
        );

        let part = Part::bytes(bytes).file_name(attachment.filename.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let client = self.build_client()?;
        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        // Any completed exchange with a well-formed payload resolves, even
        // on a non-2xx status; the decoded Failure variant carries the
        // backend's own story. Only an undecodable body rejects.
        match decode_response(&body) {
            Ok(outcome) => Ok(outcome),
            Err(err) if status.is_success() => Err(TransportError::new(
                FailureKind::MalformedPayload,
                err.to_string(),
            )),
            Err(_) => Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
