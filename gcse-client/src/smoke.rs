//! End-to-end smoke suite.
//!
//! Runs every endpoint operation once, in the order a learner would hit them, and records a
//! pass/fail line for each. A failing check does not stop the suite. Against a fully mocked
//! configuration every check passes, which makes the suite a quick way to see which live
//! resources are misbehaving.

use tracing::{info, warn};

use crate::{
    client::ApiClient,
    errors::{Error, Result},
    models::{
        answer_hints::AnswerHintCreate,
        answers::ExamPaperAnswerCreate,
        exam_papers::{ExamPaperCreate, ExamPaperQuestion},
        exam_sessions::{ExamSessionCreate, ExamSessionStatus, ExamSessionUpdate},
        marking_feedback::MarkingFeedbackCreate,
        questions::{QuestionCreate, QuestionUpdate},
        subjects::{SubjectCreate, SubjectUpdate},
        submissions::SubmissionCreate,
        subscriptions::{SubscriptionCreate, SubscriptionPlanCreate, SubscriptionPlanUpdate},
        users::{LoginCredentials, SignupData},
    },
};

/// Ids the suite reads and writes against
const SAMPLE_ID: &str = "1";

#[derive(Debug, Clone)]
pub struct SmokeOptions {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SmokeCheck {
    pub name: &'static str,
    /// Short summary of what came back, or the failure
    pub outcome: std::result::Result<String, Error>,
}

impl SmokeCheck {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    pub checks: Vec<SmokeCheck>,
}

impl SmokeReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(SmokeCheck::passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &SmokeCheck> {
        self.checks.iter().filter(|c| !c.passed())
    }

    fn record<T>(&mut self, name: &'static str, result: Result<T>, summarize: impl FnOnce(T) -> String) {
        let outcome = result.map(summarize);
        match &outcome {
            Ok(summary) => info!("{name}: ok ({summary})"),
            Err(e) => warn!("{name}: failed with status {}: {e}", e.status_code()),
        }
        self.checks.push(SmokeCheck { name, outcome });
    }
}

fn count<T>(items: Vec<T>) -> String {
    format!("{} item(s)", items.len())
}

/// Run every operation once against `client`.
pub async fn run_smoke_suite(client: &ApiClient, options: &SmokeOptions) -> SmokeReport {
    let mut report = SmokeReport::default();

    // Authentication
    let signup = SignupData {
        email: options.email.clone(),
        password: options.password.clone(),
        name: Some("Smoke Test".to_string()),
    };
    report.record("auth.signup", client.auth().signup(&signup).await, |r| {
        format!("token stored: {}", !r.token.is_empty())
    });
    let credentials = LoginCredentials {
        email: options.email.clone(),
        password: options.password.clone(),
    };
    report.record("auth.login", client.auth().login(&credentials).await, |r| {
        format!("token stored: {}", !r.token.is_empty())
    });
    report.record("auth.me", client.auth().me().await, |u| u.email);

    // Subjects
    report.record("subjects.list", client.subjects().list().await, count);
    report.record("subjects.get", client.subjects().get(SAMPLE_ID).await, |s| s.name);
    let subject = SubjectCreate {
        name: "Test Subject".to_string(),
        description: Some("Test".to_string()),
        ..Default::default()
    };
    report.record("subjects.create", client.subjects().create(&subject).await, |s| s.id);
    let subject_update = SubjectUpdate {
        description: Some("Updated".to_string()),
        ..Default::default()
    };
    report.record(
        "subjects.update",
        client.subjects().update(SAMPLE_ID, &subject_update).await,
        |s| s.name,
    );

    // Exam papers
    report.record("exam_papers.list", client.exam_papers().list().await, count);
    report.record("exam_papers.get", client.exam_papers().get(SAMPLE_ID).await, |p| p.title);
    let paper = ExamPaperCreate {
        title: "Test Paper".to_string(),
        subject_id: Some(SAMPLE_ID.to_string()),
        ..Default::default()
    };
    report.record("exam_papers.create", client.exam_papers().create(&paper).await, |p| p.id);

    // Exam sessions
    let session = ExamSessionCreate {
        exam_paper_id: SAMPLE_ID.to_string(),
        user_id: SAMPLE_ID.to_string(),
        ..Default::default()
    };
    report.record("exam_sessions.create", client.exam_sessions().create(&session).await, |s| s.id);
    report.record("exam_sessions.get", client.exam_sessions().get(SAMPLE_ID).await, |s| {
        s.status.to_string()
    });
    let session_update = ExamSessionUpdate {
        status: Some(ExamSessionStatus::Completed),
        ..Default::default()
    };
    report.record(
        "exam_sessions.update",
        client.exam_sessions().update(SAMPLE_ID, &session_update).await,
        |s| s.status.to_string(),
    );

    // Questions
    report.record("questions.list", client.questions().list().await, count);
    report.record("questions.get", client.questions().get(SAMPLE_ID).await, |q| q.content);
    let question = QuestionCreate {
        content: "Test question".to_string(),
        subject_id: Some(SAMPLE_ID.to_string()),
        ..Default::default()
    };
    report.record("questions.create", client.questions().create(&question).await, |q| q.id);
    let question_update = QuestionUpdate {
        content: Some("Updated question".to_string()),
        ..Default::default()
    };
    report.record(
        "questions.update",
        client.questions().update(SAMPLE_ID, &question_update).await,
        |q| q.content,
    );
    report.record("questions.by_paper", client.questions().by_paper(SAMPLE_ID).await, count);
    let link = ExamPaperQuestion {
        exam_paper_id: SAMPLE_ID.to_string(),
        question_id: SAMPLE_ID.to_string(),
    };
    report.record("questions.add_to_paper", client.questions().add_to_paper(&link).await, |_| {
        "linked".to_string()
    });
    report.record(
        "questions.remove_from_paper",
        client.questions().remove_from_paper(SAMPLE_ID, SAMPLE_ID).await,
        |_| "unlinked".to_string(),
    );

    // Answers
    let answer = ExamPaperAnswerCreate {
        question_id: SAMPLE_ID.to_string(),
        user_id: SAMPLE_ID.to_string(),
        answer: "Test answer".to_string(),
        exam_session_id: Some(SAMPLE_ID.to_string()),
        ..Default::default()
    };
    report.record("answers.create", client.answers().create(&answer).await, |a| a.id);

    // Exam boards
    report.record("exam_boards.list", client.exam_boards().list().await, count);

    // Subscription plans
    report.record("subscription_plans.list", client.subscription_plans().list().await, count);
    report.record(
        "subscription_plans.get",
        client.subscription_plans().get(SAMPLE_ID).await,
        |p| p.name,
    );
    let plan = SubscriptionPlanCreate {
        name: "Test Plan".to_string(),
        price: 9.99,
        duration: "month".to_string(),
        ..Default::default()
    };
    report.record(
        "subscription_plans.create",
        client.subscription_plans().create(&plan).await,
        |p| p.id,
    );
    let plan_update = SubscriptionPlanUpdate {
        price: Some(19.99),
        ..Default::default()
    };
    report.record(
        "subscription_plans.update",
        client.subscription_plans().update(SAMPLE_ID, &plan_update).await,
        |p| format!("{:.2}", p.price),
    );

    // Subscriptions
    let subscription = SubscriptionCreate {
        user_id: SAMPLE_ID.to_string(),
        plan_id: SAMPLE_ID.to_string(),
        ..Default::default()
    };
    report.record(
        "subscriptions.create",
        client.subscriptions().create(&subscription).await,
        |s| s.id,
    );
    let lookup = client.subscriptions().get_user_subscription(SAMPLE_ID).await;
    report.record("subscriptions.get_user_subscription", lookup.into_result(), |s| {
        s.map(|s| s.id).unwrap_or_else(|| "none".to_string())
    });
    report.record("subscriptions.get", client.subscriptions().get(SAMPLE_ID).await, |s| {
        s.status.to_string()
    });

    // Submissions
    report.record("submissions.list", client.submissions().list().await, count);
    report.record("submissions.get", client.submissions().get(SAMPLE_ID).await, |s| s.id);
    let submission = SubmissionCreate {
        user_id: SAMPLE_ID.to_string(),
        exam_session_id: SAMPLE_ID.to_string(),
        ..Default::default()
    };
    report.record("submissions.create", client.submissions().create(&submission).await, |s| s.id);

    // Marking feedback
    report.record("marking_feedback.get", client.marking_feedback().get(SAMPLE_ID).await, |f| {
        f.feedback
    });
    let feedback = MarkingFeedbackCreate {
        question_id: Some(SAMPLE_ID.to_string()),
        feedback: Some("Good work!".to_string()),
        score: Some(8.0),
        ..Default::default()
    };
    report.record(
        "marking_feedback.create",
        client.marking_feedback().create(&feedback).await,
        |f| f.id,
    );

    // Answer hints
    report.record("answer_hints.get", client.answer_hints().get(SAMPLE_ID).await, |h| h.hint);
    let hint = AnswerHintCreate {
        question_id: SAMPLE_ID.to_string(),
        hint: Some("Test hint".to_string()),
    };
    report.record("answer_hints.create", client.answer_hints().create(&hint).await, |h| h.id);

    // User administration
    report.record(
        "users.exam_session",
        client.users().exam_session(SAMPLE_ID, SAMPLE_ID).await,
        |s| s.id,
    );
    report.record(
        "users.update_password",
        client.users().update_password(SAMPLE_ID, "newPassword123").await,
        |_| "updated".to_string(),
    );
    report.record(
        "users.update_role",
        client.users().update_role(SAMPLE_ID, "admin").await,
        |_| "updated".to_string(),
    );
    report.record("users.submissions", client.users().submissions(SAMPLE_ID).await, count);
    report.record(
        "users.exam_paper_answers",
        client.users().exam_paper_answers(SAMPLE_ID).await,
        count,
    );

    report
}
