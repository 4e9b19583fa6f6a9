#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A raw integer that is not a valid HTTP status code (`100..=999`).
    #[error("Invalid HTTP status code: {0}")]
    InvalidStatusCode(u16),
}
