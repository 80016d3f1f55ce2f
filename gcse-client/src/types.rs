//! Identifier aliases shared by the models.
//!
//! Every identifier handed out by the backend is an opaque string. The aliases only document
//! which entity a field points at; nothing client-side checks that the referenced entity
//! exists.

pub type UserId = String;
pub type SubjectId = String;
pub type ExamBoardId = String;
pub type ExamPaperId = String;
pub type ExamSessionId = String;
pub type QuestionId = String;
pub type AnswerId = String;
pub type SubmissionId = String;
pub type MarkingFeedbackId = String;
pub type AnswerHintId = String;
pub type SubscriptionPlanId = String;
pub type SubscriptionId = String;
