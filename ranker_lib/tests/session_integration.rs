use ranker_lib::ranker_api::Client;
use ranker_lib::{Criterion, DetailState, RankerError, Session, WeightSet};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE: &str = r#"[
    {"id": "c-001", "name": "Aisha Patel", "skills": ["React"], "years_experience": 6, "score": 0.2},
    {"name": "Ben Okafor", "skills": ["Python"], "years_experience": 3, "score": 0.9}
]"#;

async fn loaded_session(server: &MockServer) -> Session {
    Mock::given(method("GET"))
        .and(path("/sample-data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
        .mount(server)
        .await;

    let mut session = Session::new(Client::with_base_url(&server.uri()), "Senior engineer");
    session.load_sample().await.unwrap();
    session
}

#[tokio::test]
async fn load_sample_populates_and_clears_banner() {
    let server = MockServer::start().await;
    let session = loaded_session(&server).await;

    assert_eq!(session.candidates().len(), 2);
    assert!(session.error_banner().is_none());
    // The record without an id got a synthesized one.
    assert_eq!(session.candidates()[1].id.as_deref(), Some("candidate-2"));

    // Default sort is score descending.
    let slice = session.visible();
    assert_eq!(slice.visible[0].display_name(), "Ben Okafor");
}

#[tokio::test]
async fn load_failure_sets_banner_and_keeps_list() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/sample-data"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let result = session.load_sample().await;
    assert!(matches!(result, Err(RankerError::Api(_))));
    assert!(session.error_banner().unwrap().contains("reachable"));
    assert_eq!(session.candidates().len(), 2);
    assert!(!session.is_list_request_pending());
}

#[tokio::test]
async fn rank_replaces_list_with_service_order() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;
    session.add_required_skills("React");

    let mut weights = WeightSet::default();
    weights.set(Criterion::Skills, 0.3);
    weights.set(Criterion::Experience, 0.15);
    session.apply_weights(weights.validate().unwrap());

    Mock::given(method("POST"))
        .and(path("/rank"))
        .and(body_partial_json(serde_json::json!({
            "requiredSkills": ["React"],
            "weights": { "skills": 0.3, "experience": 0.15 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ranked": [
                {"id": "c-001", "name": "Aisha Patel", "skills": ["React"], "score": 0.95},
                {"id": "candidate-2", "name": "Ben Okafor", "skills": ["Python"], "score": 0.41}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let count = session.rank().await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(session.candidates()[0].score(), 0.95);
    assert!(session.error_banner().is_none());
}

#[tokio::test]
async fn failed_rank_keeps_previous_list_intact() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = session.rank().await;
    assert!(matches!(result, Err(RankerError::Api(_))));
    assert!(session.error_banner().unwrap().contains("Ranking failed"));

    // Previously loaded data survives the failure.
    assert_eq!(session.candidates().len(), 2);
    assert_eq!(session.visible().total, 2);
    assert!(!session.is_list_request_pending());
}

#[tokio::test]
async fn rank_with_missing_ranked_field_yields_empty_list() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    assert_eq!(session.rank().await.unwrap(), 0);
    assert!(session.candidates().is_empty());
}

#[tokio::test]
async fn assess_success_lands_in_detail_state() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/ai-score"))
        .and(body_partial_json(serde_json::json!({
            "job_description": "Senior engineer",
            "candidate": { "id": "c-001" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"score": 85, "summary": "Strong React developer"}"#,
        ))
        .mount(&server)
        .await;

    match session.assess("c-001").await.unwrap() {
        DetailState::Succeeded(assessment) => {
            assert_eq!(assessment.score, 85.0);
            assert_eq!(assessment.summary, "Strong React developer");
        }
        other => panic!("expected success, got {:?}", other),
    }

    // Closing drops the fetched state; nothing is cached.
    session.close_detail();
    assert_eq!(*session.detail().state(), DetailState::Idle);
    assert!(session.detail().selected().is_none());
}

#[tokio::test]
async fn assess_failure_stays_out_of_the_list_banner() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/ai-score"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    match session.assess("c-001").await.unwrap() {
        DetailState::Failed(message) => assert!(message.contains("AI assessment failed")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(session.error_banner().is_none());
    assert_eq!(session.candidates().len(), 2);
}

#[tokio::test]
async fn assess_service_error_body_is_a_detail_failure() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/ai-score"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"error": "upstream model unavailable"}"#),
        )
        .mount(&server)
        .await;

    match session.assess("c-001").await.unwrap() {
        DetailState::Failed(message) => assert!(message.contains("unavailable")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn assess_unknown_candidate_is_an_error() {
    let server = MockServer::start().await;
    let mut session = loaded_session(&server).await;

    match session.assess("nope").await {
        Err(RankerError::UnknownCandidate(id)) => assert_eq!(id, "nope"),
        other => panic!("expected UnknownCandidate, got {:?}", other.map(|_| ())),
    }
}
