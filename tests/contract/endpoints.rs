use ner_console_client::SessionCredentials;
use ner_console_client::types::{JobAction, JobStatus, NewProject};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::harness;

fn creds() -> Option<SessionCredentials> {
    Some(SessionCredentials::new("token", "refresh"))
}

#[tokio::test]
async fn project_routes_match_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/create/"))
        .and(body_json(serde_json::json!({ "name": "Marsiya", "description": "Elegies" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 1, "name": "Marsiya", "slug": "marsiya"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/update/marsiya/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1, "slug": "marsiya", "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/delete/marsiya/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/projects/marsiya/members/create/"))
        .and(body_json(serde_json::json!({ "user": 5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "user": 5 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/marsiya/members/5/delete/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let projects = h.client.projects();
    let created = projects
        .create(&NewProject {
            name: "Marsiya".into(),
            description: "Elegies".into(),
            users: vec![],
        })
        .await
        .unwrap();
    assert_eq!(created.slug, "marsiya");
    let updated = projects
        .update("marsiya", &serde_json::json!({ "status": "active" }))
        .await
        .unwrap();
    assert_eq!(updated.status, "active");
    projects.add_member("marsiya", 5).await.unwrap();
    projects.remove_member("marsiya", 5).await.unwrap();
    projects.delete("marsiya").await.unwrap();
}

#[tokio::test]
async fn slugs_are_percent_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/detail/urdu%20elegies/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 2 })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let project = h.client.projects().get("urdu elegies").await.unwrap();
    assert_eq!(project.id, 2);
}

#[tokio::test]
async fn entity_review_routes_match_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/entities/verify/marsiya/4/12/"))
        .and(body_json(serde_json::json!({ "verified": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "is_verified": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/entities/bulk-verify/marsiya/4/"))
        .and(body_json(serde_json::json!({ "entity_ids": [12, 13], "verified": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "updated": 2 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/entities/bulk-update/marsiya/4/"))
        .and(body_json(serde_json::json!({ "updates": [{ "id": 12, "text": "Hussain" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "updated": 1 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/entities/detail/marsiya/4/12/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 12, "text": "Hussain", "entity_type": 1,
            "start_position": 10, "end_position": 17, "is_verified": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let entities = h.client.entities();
    entities.verify("marsiya", 4, 12, true).await.unwrap();
    entities.bulk_verify("marsiya", 4, &[12, 13], false).await.unwrap();
    entities
        .bulk_update(
            "marsiya",
            4,
            &[serde_json::json!({ "id": 12, "text": "Hussain" })],
        )
        .await
        .unwrap();
    let entity = entities.get("marsiya", 4, 12).await.unwrap();
    assert_eq!(entity.end_position - entity.start_position, 7);
    assert!(entity.is_verified);
}

#[tokio::test]
async fn processing_routes_match_backend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/processing/jobs/"))
        .and(query_param("status", "running"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1, "next": null, "previous": null,
            "results": [{ "id": 9, "job_type": "ner_processing", "status": "running", "progress": 55 }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/processing/jobs/9/progress/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "progress": 80, "current_step": "tagging"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/processing/jobs/9/result/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "entities": 41 }, "error_message": ""
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/processing/jobs/9/action/"))
        .and(body_json(serde_json::json!({ "action": "pause" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Job paused successfully", "job_id": 9, "status": "paused"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let processing = h.client.processing();
    let jobs = processing.jobs(&[("status", "running")]).await.unwrap();
    assert_eq!(jobs.items()[0].status, JobStatus::Running);
    assert_eq!(processing.progress(9).await.unwrap().current_step, "tagging");
    let result = processing.result(9).await.unwrap();
    assert_eq!(result.result.unwrap()["entities"], 41);
    let action = processing.perform_action(9, JobAction::Pause).await.unwrap();
    assert_eq!(action.status, JobStatus::Paused);
}
