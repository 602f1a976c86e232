use analyzer_gateway::download_url_for;
use url::Url;

#[test]
fn builds_download_url_from_token() {
    let base = Url::parse("http://127.0.0.1:8000/").unwrap();
    assert_eq!(
        download_url_for(&base, "out.csv"),
        "http://127.0.0.1:8000/api/download/out.csv"
    );
}

#[test]
fn base_without_trailing_slash_is_handled() {
    let base = Url::parse("https://analyzer.example.com").unwrap();
    assert_eq!(
        download_url_for(&base, "nums.csv"),
        "https://analyzer.example.com/api/download/nums.csv"
    );
}

#[test]
fn token_is_escaped_as_a_single_segment() {
    let base = Url::parse("http://127.0.0.1:8000/").unwrap();
    let url = download_url_for(&base, "my report.csv");
    assert_eq!(url, "http://127.0.0.1:8000/api/download/my%20report.csv");
}

#[test]
fn construction_is_deterministic() {
    let base = Url::parse("http://127.0.0.1:8000/").unwrap();
    assert_eq!(
        download_url_for(&base, "out.csv"),
        download_url_for(&base, "out.csv")
    );
}
