
use crate::config::{Resource, ResourceBackend};
use crate::models::subjects::SubjectCreate;
use crate::smoke::{SmokeOptions, run_smoke_suite};
use crate::test_utils::{mocked_client, mocked_config};
use crate::{ApiClient, SubscriptionLookup};
use wiremock::MockServer;

fn smoke_options() -> SmokeOptions {
    SmokeOptions {
        email: "smoke@example.com".to_string(),
        password: "password123".to_string(),
    }
}

/// Fully mocked configuration: every operation in the suite succeeds without a network
#[test_log::test(tokio::test)]
async fn test_smoke_suite_passes_in_mock_mode() {
    let client = mocked_client();
    let report = run_smoke_suite(&client, &smoke_options()).await;

    let failed: Vec<&str> = report.failed().map(|c| c.name).collect();
    assert!(failed.is_empty(), "failed checks: {failed:?}");
    assert_eq!(report.checks.len(), 41);
    assert!(client.auth().is_authenticated());
}

#[test_log::test(tokio::test)]
async fn test_mocked_resources_never_touch_the_network() {
    // Nothing is mounted, so any request that reaches the server would get a 404
    let server = MockServer::start().await;
    let mut config = mocked_config();
    config.resources.set(
        Resource::ExamBoard,
        ResourceBackend::Live {
            base_url: server.uri().parse().unwrap(),
        },
    );
    let client = ApiClient::new(&config).unwrap();

    let report = run_smoke_suite(&client, &smoke_options()).await;
    let failed: Vec<&str> = report.failed().map(|c| c.name).collect();
    assert_eq!(failed, vec!["exam_boards.list"]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/exam_board");
}

#[tokio::test]
async fn test_mock_subjects_are_the_six_samples() {
    let subjects = mocked_client().subjects().list().await.unwrap();
    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, ["Literature", "Grammar", "Math", "Physics", "Chemistry", "Biology"]);
    assert!(subjects.iter().all(|s| !s.id.is_empty() && !s.name.is_empty()));
}

#[tokio::test]
async fn test_mock_reads_are_idempotent() {
    let client = mocked_client();

    assert_eq!(client.subjects().list().await.unwrap(), client.subjects().list().await.unwrap());
    assert_eq!(
        client.exam_papers().get("1").await.unwrap(),
        client.exam_papers().get("1").await.unwrap()
    );
    assert_eq!(
        client.questions().by_paper("1").await.unwrap(),
        client.questions().by_paper("1").await.unwrap()
    );
}

#[tokio::test]
async fn test_mock_create_does_not_change_later_reads() {
    let client = mocked_client();
    let created = client
        .subjects()
        .create(&SubjectCreate {
            name: "Computer Science".to_string(),
            icon: Some("💻".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.name, "Computer Science");
    assert_eq!(created.icon.as_deref(), Some("💻"));
    assert_eq!(client.subjects().list().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_mock_questions_for_paper_one() {
    let questions = mocked_client().questions().by_paper("1").await.unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.exam_paper_id.as_deref() == Some("1")));
}

#[tokio::test]
async fn test_mock_subscription_lookup_is_absent() {
    let lookup = mocked_client().subscriptions().get_user_subscription("1").await;
    assert!(matches!(lookup, SubscriptionLookup::Absent));
}

#[tokio::test]
async fn test_mock_lookup_miss_is_not_found_for_every_keyed_read() {
    let client = mocked_client();
    let errors = [
        client.subjects().get("missing").await.unwrap_err(),
        client.exam_papers().get("missing").await.unwrap_err(),
        client.questions().get("missing").await.unwrap_err(),
        client.submissions().get("missing").await.unwrap_err(),
        client.subscription_plans().get("missing").await.unwrap_err(),
        client.subscriptions().get("missing").await.unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.status_code(), 404, "{err}");
        assert!(err.to_string().ends_with("with ID missing not found"));
    }
}
