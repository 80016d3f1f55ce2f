use serde::{Deserialize, Serialize};

use crate::types::ExamBoardId;

/// Awarding body (AQA, Edexcel, OCR...). Read-only from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamBoard {
    pub id: ExamBoardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
