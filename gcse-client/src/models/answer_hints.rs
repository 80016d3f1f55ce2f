use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    mock,
    types::{AnswerHintId, QuestionId},
};

/// AI-generated nudge for a question, looked up by question id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerHint {
    pub id: AnswerHintId,
    pub question_id: QuestionId,
    pub hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerHintCreate {
    pub question_id: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl AnswerHintCreate {
    pub(crate) fn synthesize(self) -> AnswerHint {
        AnswerHint {
            id: mock::mock_id(),
            question_id: self.question_id,
            hint: self.hint.unwrap_or_else(|| "Hint text".to_string()),
            created_at: Some(Utc::now()),
        }
    }
}
