use url::Url;

/// Path prefix of the download endpoint, relative to the backend base URL.
pub const DOWNLOAD_PATH: &str = "api/download";

/// Deterministic download-URL construction from a result token. No I/O;
/// fetching the artifact is outside the core (a plain browser navigation).
///
/// The token is appended as a single path segment, so characters that are
/// not valid in a path get percent-encoded.
pub fn download_url_for(base_url: &Url, token: &str) -> String {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(DOWNLOAD_PATH.split('/'))
            .push(token);
    }
    url.to_string()
}
