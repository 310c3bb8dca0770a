use serde::Serialize;

/// Confirmation returned after a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: i64,
}

impl DeleteConfirmation {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
