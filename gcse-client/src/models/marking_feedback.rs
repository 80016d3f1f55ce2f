//! AI marking feedback. Produced by the marking service; the client only stores and fetches it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    mock,
    types::{MarkingFeedbackId, QuestionId, SubmissionId},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkingFeedback {
    pub id: MarkingFeedbackId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<QuestionId>,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkingFeedbackCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MarkingFeedbackId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<QuestionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl MarkingFeedbackCreate {
    pub(crate) fn synthesize(self) -> MarkingFeedback {
        MarkingFeedback {
            id: self.id.unwrap_or_else(mock::mock_id),
            submission_id: self.submission_id,
            question_id: self.question_id,
            feedback: self.feedback.unwrap_or_else(|| "Feedback generated".to_string()),
            score: Some(self.score.unwrap_or(0.0)),
            created_at: Some(Utc::now()),
        }
    }
}
