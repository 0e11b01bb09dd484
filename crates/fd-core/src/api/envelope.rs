use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// The uniform `{ success, message, data }` envelope every endpoint speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, parse-don't-assume style.
    ///
    /// A success envelope without `data` is a schema violation, not an empty
    /// result. A failure envelope surfaces the server's message verbatim.
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.success {
            self.data.ok_or(ApiError::MissingData)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}
