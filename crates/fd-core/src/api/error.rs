use thiserror::Error;

/// Everything that can go wrong between the console and the backend.
///
/// `Rejected` is a business rejection carried inside a well-formed envelope;
/// the other variants are transport- or schema-level failures. Callers that
/// preserve staged work must treat the two groups differently.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("response marked success but carried no data")]
    MissingData,

    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// True for failures where the server never evaluated the request
    /// (network, status, schema) as opposed to business rejections.
    pub fn is_transport_level(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}
