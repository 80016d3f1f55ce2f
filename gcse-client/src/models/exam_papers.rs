use serde::{Deserialize, Serialize};

use crate::{
    mock,
    types::{ExamBoardId, ExamPaperId, QuestionId, SubjectId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPaper {
    pub id: ExamPaperId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_board_id: Option<ExamBoardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamPaperCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExamPaperId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_board_id: Option<ExamBoardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExamPaperCreate {
    pub(crate) fn synthesize(self) -> ExamPaper {
        ExamPaper {
            id: self.id.unwrap_or_else(mock::mock_id),
            title: self.title,
            subject_id: self.subject_id,
            exam_board_id: self.exam_board_id,
            description: self.description,
        }
    }
}

/// Association between a paper and one of its questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPaperQuestion {
    pub exam_paper_id: ExamPaperId,
    pub question_id: QuestionId,
}
