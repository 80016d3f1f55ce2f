//! Timed exam sessions.
//!
//! A session moves `in_progress → paused ⇄ in_progress → completed`, and `completed` is
//! terminal. The backend does not enforce this; [`ExamSessionStatus::can_transition_to`] is
//! what the lifecycle helpers on [`crate::api::exam_sessions::ExamSessions`] check before
//! sending an update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    mock,
    types::{ExamPaperId, ExamSessionId, UserId},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamSessionStatus {
    #[default]
    InProgress,
    Completed,
    Paused,
}

impl ExamSessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamSessionStatus::InProgress => "in_progress",
            ExamSessionStatus::Completed => "completed",
            ExamSessionStatus::Paused => "paused",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ExamSessionStatus::Completed)
    }

    pub fn can_transition_to(&self, next: ExamSessionStatus) -> bool {
        use ExamSessionStatus::*;
        matches!((self, next), (InProgress, Paused) | (Paused, InProgress) | (InProgress, Completed))
    }
}

impl fmt::Display for ExamSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSession {
    pub id: ExamSessionId,
    pub exam_paper_id: ExamPaperId,
    pub user_id: UserId,
    pub status: ExamSessionStatus,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamSessionCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExamSessionId>,
    pub exam_paper_id: ExamPaperId,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExamSessionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl ExamSessionCreate {
    pub(crate) fn synthesize(self) -> ExamSession {
        ExamSession {
            id: self.id.unwrap_or_else(mock::mock_id),
            exam_paper_id: self.exam_paper_id,
            user_id: self.user_id,
            status: self.status.unwrap_or_default(),
            started_at: self.started_at.unwrap_or_else(Utc::now),
            completed_at: None,
        }
    }
}

/// Partial update sent with PATCH
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamSessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExamSessionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExamSessionUpdate {
    pub fn apply(self, session: &mut ExamSession) {
        if let Some(status) = self.status {
            session.status = status;
        }
        if let Some(completed_at) = self.completed_at {
            session.completed_at = Some(completed_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ExamSessionStatus::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(InProgress.can_transition_to(Paused));
        assert!(Paused.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!Paused.can_transition_to(Completed));
        assert!(!InProgress.can_transition_to(InProgress));
        for next in [InProgress, Paused, Completed] {
            assert!(!Completed.can_transition_to(next), "completed -> {next}");
        }
        assert!(Completed.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(InProgress).unwrap(), "in_progress");
        assert_eq!(serde_json::from_str::<ExamSessionStatus>("\"paused\"").unwrap(), Paused);
        assert!(serde_json::from_str::<ExamSessionStatus>("\"abandoned\"").is_err());
    }

    #[test]
    fn test_update_skips_unset_fields_on_the_wire() {
        let update = ExamSessionUpdate {
            status: Some(Completed),
            completed_at: None,
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"status": "completed"}));
    }
}
