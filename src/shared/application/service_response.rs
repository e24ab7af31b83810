use serde::{Deserialize, Serialize};

/// Outcome of a business operation.
///
/// `success` and `message` are the caller-facing contract; the message text of
/// every outcome is fixed and must not be reworded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub data: T,
    pub success: bool,
    pub message: String,
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: false,
            message: message.into(),
        }
    }
}

impl ServiceResponse<bool> {
    /// Successful yes/no operation, `data` mirrors `success`
    pub fn accepted(message: impl Into<String>) -> Self {
        Self::success(true, message)
    }

    /// Rejected yes/no operation, `data` mirrors `success`
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::failure(false, message)
    }
}
