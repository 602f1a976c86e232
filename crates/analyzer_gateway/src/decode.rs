use serde::Deserialize;

use crate::AnalysisOutcome;

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed backend payload: {0}")]
    MalformedPayload(String),
}

/// Loose mirror of the wire contract. Every field is optional: the payload
/// is external data and absent fields degrade instead of failing.
#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    outliers_detected: Option<u64>,
    #[serde(default)]
    cleaned_file: Option<String>,
    #[serde(default)]
    numbers_extracted: Option<u64>,
    #[serde(default)]
    extracted_file: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a backend payload into the closed outcome set.
///
/// The two success shapes carry no discriminant tag; they are told apart by
/// which count field is present, outliers checked before extraction, with
/// `Unclassified` as the fallthrough when neither appears.
pub fn decode_response(bytes: &[u8]) -> Result<AnalysisOutcome, DecodeError> {
    let raw: RawResponse = serde_json::from_slice(bytes)
        .map_err(|err| DecodeError::MalformedPayload(err.to_string()))?;

    if raw.status.as_deref() != Some(STATUS_SUCCESS) {
        let error = raw
            .error
            .unwrap_or_else(|| "backend reported an unspecified error".to_string());
        return Ok(AnalysisOutcome::Failure { error });
    }

    if let Some(detected) = raw.outliers_detected {
        return Ok(AnalysisOutcome::Outliers {
            detected,
            cleaned_file: raw.cleaned_file,
        });
    }
    if let Some(extracted) = raw.numbers_extracted {
        return Ok(AnalysisOutcome::Extraction {
            extracted,
            extracted_file: raw.extracted_file,
        });
    }
    Ok(AnalysisOutcome::Unclassified)
}
