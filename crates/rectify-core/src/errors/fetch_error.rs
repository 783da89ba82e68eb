/// Document source errors. The cache treats these as opaque beyond their
/// Display text; the source owns its own timeout.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http request failed: {message}")]
    Http { message: String },

    #[error("unexpected response status: {code}")]
    Status { code: u16 },

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("invalid response body: {message}")]
    InvalidBody { message: String },
}
