use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    mock,
    types::{ExamSessionId, SubmissionId, UserId},
};

/// A finished exam session handed in for marking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub exam_session_id: ExamSessionId,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SubmissionId>,
    pub user_id: UserId,
    pub exam_session_id: ExamSessionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SubmissionCreate {
    pub(crate) fn synthesize(self) -> Submission {
        Submission {
            id: self.id.unwrap_or_else(mock::mock_id),
            user_id: self.user_id,
            exam_session_id: self.exam_session_id,
            submitted_at: self.submitted_at.unwrap_or_else(Utc::now),
            status: Some(self.status.unwrap_or_else(|| "completed".to_string())),
        }
    }
}
