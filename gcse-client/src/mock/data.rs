//! Fixed sample records served by mocked resources.
//!
//! The sample set never changes at runtime, so repeated reads return identical data.

use chrono::{DateTime, Utc};

use crate::models::{
    answer_hints::AnswerHint,
    exam_boards::ExamBoard,
    exam_papers::ExamPaper,
    exam_sessions::{ExamSession, ExamSessionStatus},
    marking_feedback::MarkingFeedback,
    questions::Question,
    subjects::Subject,
    submissions::Submission,
    subscriptions::{Subscription, SubscriptionPlan, SubscriptionStatus},
    users::User,
};

/// 2025-01-06T09:00:00Z, the timestamp every sample record carries
const SAMPLE_EPOCH_SECS: i64 = 1_736_154_000;

pub fn sample_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(SAMPLE_EPOCH_SECS, 0).unwrap_or_default()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn subjects() -> Vec<Subject> {
    [
        ("1", "Literature", "English Literature GCSE", "📚"),
        ("2", "Grammar", "English Grammar and Language", "📖"),
        ("3", "Math", "Mathematics GCSE", "📐"),
        ("4", "Physics", "Physics GCSE", "⚛️"),
        ("5", "Chemistry", "Chemistry GCSE", "🧪"),
        ("6", "Biology", "Biology GCSE", "🧬"),
    ]
    .into_iter()
    .map(|(id, name, description, icon)| Subject {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        icon: Some(icon.to_string()),
    })
    .collect()
}

pub fn exam_boards() -> Vec<ExamBoard> {
    [
        ("1", "AQA", "Assessment and Qualifications Alliance"),
        ("2", "Edexcel", "Pearson Edexcel"),
        ("3", "OCR", "Oxford, Cambridge and RSA Examinations"),
    ]
    .into_iter()
    .map(|(id, name, description)| ExamBoard {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

pub fn exam_papers() -> Vec<ExamPaper> {
    [
        ("1", "GCSE Mathematics Paper 1", "3", "1", "Foundation tier mathematics paper"),
        ("2", "GCSE English Literature Paper 1", "1", "1", "Shakespeare and the 19th-century novel"),
        ("3", "GCSE Physics Paper 1", "4", "2", "Energy and electricity"),
    ]
    .into_iter()
    .map(|(id, title, subject_id, exam_board_id, description)| ExamPaper {
        id: id.to_string(),
        title: title.to_string(),
        subject_id: Some(subject_id.to_string()),
        exam_board_id: Some(exam_board_id.to_string()),
        description: Some(description.to_string()),
    })
    .collect()
}

pub fn questions() -> Vec<Question> {
    [
        ("1", "What is the formula for the area of a circle?", "3", "1"),
        ("2", "Solve for x: 2x + 5 = 15", "3", "1"),
        ("3", "Analyze the theme of love in Romeo and Juliet.", "1", "2"),
        ("4", "Explain the relationship between force, mass, and acceleration.", "4", "3"),
    ]
    .into_iter()
    .map(|(id, content, subject_id, exam_paper_id)| Question {
        id: id.to_string(),
        content: content.to_string(),
        subject_id: Some(subject_id.to_string()),
        exam_paper_id: Some(exam_paper_id.to_string()),
    })
    .collect()
}

pub fn subscription_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: "1".to_string(),
            name: "Basic".to_string(),
            price: 9.99,
            duration: "month".to_string(),
            features: Some(owned(&["5 exams/month", "Basic feedback"])),
            description: Some("Perfect for occasional practice".to_string()),
        },
        SubscriptionPlan {
            id: "2".to_string(),
            name: "Premium".to_string(),
            price: 19.99,
            duration: "month".to_string(),
            features: Some(owned(&["Unlimited exams", "AI feedback", "Progress tracking"])),
            description: Some("Best for serious students".to_string()),
        },
        SubscriptionPlan {
            id: "3".to_string(),
            name: "Student".to_string(),
            price: 14.99,
            duration: "month".to_string(),
            features: Some(owned(&["10 exams/month", "AI feedback"])),
            description: Some("Special pricing for students".to_string()),
        },
    ]
}

pub fn subscriptions() -> Vec<Subscription> {
    vec![Subscription {
        id: "1".to_string(),
        user_id: "1".to_string(),
        plan_id: "2".to_string(),
        status: SubscriptionStatus::Active,
        start_date: sample_timestamp(),
        end_date: None,
    }]
}

pub fn submissions() -> Vec<Submission> {
    ["1", "2"]
        .into_iter()
        .map(|id| Submission {
            id: id.to_string(),
            user_id: "1".to_string(),
            exam_session_id: id.to_string(),
            submitted_at: sample_timestamp(),
            status: Some("completed".to_string()),
        })
        .collect()
}

pub fn current_user() -> User {
    User {
        id: "1".to_string(),
        email: "student@example.com".to_string(),
        name: Some("Sample Student".to_string()),
        role: Some("student".to_string()),
    }
}

/// Session record returned for any id looked up against a mocked backend
pub fn exam_session(session_id: &str, user_id: &str) -> ExamSession {
    ExamSession {
        id: session_id.to_string(),
        exam_paper_id: "1".to_string(),
        user_id: user_id.to_string(),
        status: ExamSessionStatus::InProgress,
        started_at: sample_timestamp(),
        completed_at: None,
    }
}

pub fn marking_feedback(id: &str) -> MarkingFeedback {
    MarkingFeedback {
        id: id.to_string(),
        submission_id: None,
        question_id: Some("1".to_string()),
        feedback: "Good attempt! You correctly identified the main theme. Consider expanding on the character development aspect."
            .to_string(),
        score: Some(7.0),
        created_at: Some(sample_timestamp()),
    }
}

pub fn answer_hint(question_id: &str) -> AnswerHint {
    AnswerHint {
        id: format!("hint-{question_id}"),
        question_id: question_id.to_string(),
        hint: "Consider the relationship between the variables. Try substituting known values.".to_string(),
        created_at: Some(sample_timestamp()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subjects_sample_set() {
        let names: Vec<String> = subjects().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Literature", "Grammar", "Math", "Physics", "Chemistry", "Biology"]);
    }

    #[test]
    fn test_foreign_keys_point_into_the_sample_set() {
        let subject_ids: Vec<String> = subjects().into_iter().map(|s| s.id).collect();
        let board_ids: Vec<String> = exam_boards().into_iter().map(|b| b.id).collect();
        let paper_ids: Vec<String> = exam_papers().into_iter().map(|p| p.id).collect();

        for paper in exam_papers() {
            assert!(subject_ids.contains(paper.subject_id.as_ref().unwrap()));
            assert!(board_ids.contains(paper.exam_board_id.as_ref().unwrap()));
        }
        for question in questions() {
            assert!(paper_ids.contains(question.exam_paper_id.as_ref().unwrap()));
        }
    }

    #[test]
    fn test_sample_timestamp_is_stable() {
        assert_eq!(sample_timestamp(), sample_timestamp());
        assert_eq!(sample_timestamp().to_rfc3339(), "2025-01-06T09:00:00+00:00");
    }
}
