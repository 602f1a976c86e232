use analyzer_gateway::{decode_response, AnalysisOutcome, DecodeError};
use pretty_assertions::assert_eq;

#[test]
fn success_with_outlier_fields_decodes_outliers() {
    let body = br#"{"status":"success","outliers_detected":7,"cleaned_file":"out.csv"}"#;
    let outcome = decode_response(body).expect("decodes");
    assert_eq!(
        outcome,
        AnalysisOutcome::Outliers {
            detected: 7,
            cleaned_file: Some("out.csv".to_string()),
        }
    );
}

#[test]
fn success_with_extraction_fields_decodes_extraction() {
    let body = br#"{"status":"success","numbers_extracted":12,"extracted_file":"nums.csv"}"#;
    let outcome = decode_response(body).expect("decodes");
    assert_eq!(
        outcome,
        AnalysisOutcome::Extraction {
            extracted: 12,
            extracted_file: Some("nums.csv".to_string()),
        }
    );
}

#[test]
fn outlier_shape_wins_when_both_counts_present() {
    // No explicit discriminant on the wire: outliers are checked first.
    let body =
        br#"{"status":"success","outliers_detected":1,"numbers_extracted":2,"cleaned_file":"a.csv"}"#;
    let outcome = decode_response(body).expect("decodes");
    assert!(matches!(
        outcome,
        AnalysisOutcome::Outliers { detected: 1, .. }
    ));
}

#[test]
fn success_without_known_shape_is_unclassified() {
    let body = br#"{"status":"success"}"#;
    let outcome = decode_response(body).expect("decodes");
    assert_eq!(outcome, AnalysisOutcome::Unclassified);
}

#[test]
fn count_survives_missing_file_token() {
    let body = br#"{"status":"success","outliers_detected":3}"#;
    let outcome = decode_response(body).expect("decodes");
    assert_eq!(
        outcome,
        AnalysisOutcome::Outliers {
            detected: 3,
            cleaned_file: None,
        }
    );
}

#[test]
fn error_status_carries_backend_message_verbatim() {
    let body = br#"{"status":"error","error":"bad file"}"#;
    let outcome = decode_response(body).expect("decodes");
    assert_eq!(
        outcome,
        AnalysisOutcome::Failure {
            error: "bad file".to_string(),
        }
    );
}

#[test]
fn non_success_status_without_error_degrades_to_generic_failure() {
    let body = br#"{"status":"busy"}"#;
    let outcome = decode_response(body).expect("decodes");
    assert!(matches!(outcome, AnalysisOutcome::Failure { .. }));
}

#[test]
fn missing_status_is_treated_as_failure() {
    let body = br#"{"outliers_detected":7}"#;
    let outcome = decode_response(body).expect("decodes");
    assert!(matches!(outcome, AnalysisOutcome::Failure { .. }));
}

#[test]
fn malformed_json_is_a_decode_error() {
    let err = decode_response(b"<html>proxy error</html>").unwrap_err();
    assert!(matches!(err, DecodeError::MalformedPayload(_)));
}
