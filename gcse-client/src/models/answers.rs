use serde::{Deserialize, Serialize};

use crate::{
    mock,
    types::{AnswerId, ExamSessionId, QuestionId, UserId},
};

/// A learner's answer to one question. Append-only: there is no update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPaperAnswer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_session_id: Option<ExamSessionId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamPaperAnswerCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AnswerId>,
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_session_id: Option<ExamSessionId>,
}

impl ExamPaperAnswerCreate {
    pub(crate) fn synthesize(self) -> ExamPaperAnswer {
        ExamPaperAnswer {
            id: self.id.unwrap_or_else(mock::mock_id),
            question_id: self.question_id,
            user_id: self.user_id,
            answer: self.answer,
            exam_session_id: self.exam_session_id,
        }
    }
}
