use serde::{Deserialize, Serialize};

use crate::{
    mock,
    types::{ExamPaperId, QuestionId, SubjectId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_paper_id: Option<ExamPaperId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_paper_id: Option<ExamPaperId>,
}

impl QuestionCreate {
    pub(crate) fn synthesize(self) -> Question {
        Question {
            id: self.id.unwrap_or_else(mock::mock_id),
            content: self.content,
            subject_id: self.subject_id,
            exam_paper_id: self.exam_paper_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_paper_id: Option<ExamPaperId>,
}

impl QuestionUpdate {
    pub fn apply(self, question: &mut Question) {
        if let Some(content) = self.content {
            question.content = content;
        }
        if let Some(subject_id) = self.subject_id {
            question.subject_id = Some(subject_id);
        }
        if let Some(exam_paper_id) = self.exam_paper_id {
            question.exam_paper_id = Some(exam_paper_id);
        }
    }
}
