use std::time::Duration;

use analyzer_gateway::{
    AnalysisOutcome, Attachment, FailureKind, GatewaySettings, ReqwestSubmitter, Submitter,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_attachment(contents: &[u8], filename: &str) -> (tempfile::TempDir, Attachment) {
    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join(filename);
    std::fs::write(&file_path, contents).expect("write fixture");
    let attachment = Attachment {
        path: file_path,
        filename: filename.to_string(),
    };
    (dir, attachment)
}

fn submitter_for(server_uri: &str) -> ReqwestSubmitter {
    let base = Url::parse(server_uri).expect("server url");
    ReqwestSubmitter::new(GatewaySettings::new(base))
}

#[tokio::test]
async fn submit_uploads_multipart_and_decodes_outlier_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze_data"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"success","outliers_detected":7,"cleaned_file":"out.csv"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let (_dir, attachment) = temp_attachment(b"a,b\n1,2\n", "sales.csv");
    let submitter = submitter_for(&server.uri());

    let outcome = submitter.submit(1, &attachment).await.expect("submit ok");
    assert_eq!(
        outcome,
        AnalysisOutcome::Outliers {
            detected: 7,
            cleaned_file: Some("out.csv".to_string()),
        }
    );

    // One part, fixed field name, client-supplied filename.
    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"sales.csv\""));
}

#[tokio::test]
async fn backend_failure_payload_resolves_as_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze_data"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"error","error":"bad file"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let (_dir, attachment) = temp_attachment(b"junk", "sales.csv");
    let submitter = submitter_for(&server.uri());

    let outcome = submitter.submit(2, &attachment).await.expect("submit ok");
    assert_eq!(
        outcome,
        AnalysisOutcome::Failure {
            error: "bad file".to_string(),
        }
    );
}

#[tokio::test]
async fn non_2xx_with_well_formed_payload_still_resolves() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze_data"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"status":"error","error":"agent crashed"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let (_dir, attachment) = temp_attachment(b"junk", "sales.csv");
    let submitter = submitter_for(&server.uri());

    let outcome = submitter.submit(3, &attachment).await.expect("submit ok");
    assert_eq!(
        outcome,
        AnalysisOutcome::Failure {
            error: "agent crashed".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_body_on_success_status_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze_data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (_dir, attachment) = temp_attachment(b"junk", "sales.csv");
    let submitter = submitter_for(&server.uri());

    let err = submitter.submit(4, &attachment).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedPayload);
}

#[tokio::test]
async fn undecodable_body_on_error_status_rejects_with_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze_data"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let (_dir, attachment) = temp_attachment(b"junk", "sales.csv");
    let submitter = submitter_for(&server.uri());

    let err = submitter.submit(5, &attachment).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze_data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(r#"{"status":"success"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let (_dir, attachment) = temp_attachment(b"junk", "sales.csv");
    let base = Url::parse(&server.uri()).expect("server url");
    let settings = GatewaySettings {
        request_timeout: Duration::from_millis(50),
        ..GatewaySettings::new(base)
    };
    let submitter = ReqwestSubmitter::new(settings);

    let err = submitter.submit(6, &attachment).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreadable_attachment_rejects_before_any_request() {
    let server = MockServer::start().await;

    let attachment = Attachment {
        path: std::path::PathBuf::from("/definitely/not/here.csv"),
        filename: "here.csv".to_string(),
    };
    let submitter = submitter_for(&server.uri());

    let err = submitter.submit(7, &attachment).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::AttachmentRead);

    let requests = server.received_requests().await.expect("requests");
    assert!(requests.is_empty());
}
