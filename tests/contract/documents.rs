use ner_console_client::types::NewDocument;
use ner_console_client::{MultipartForm, SessionCredentials, UploadFile};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::harness;

fn creds() -> Option<SessionCredentials> {
    Some(SessionCredentials::new("token", "refresh"))
}

#[tokio::test]
async fn json_create_tags_project_slug() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/create/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "title": "Marsiya 1",
            "content": "text",
            "project": "marsiya"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 4, "title": "Marsiya 1" })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let doc = h
        .client
        .documents()
        .create(
            "marsiya",
            &NewDocument {
                title: "Marsiya 1".into(),
                content: "text".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(doc.id, 4);
}

#[tokio::test]
async fn upload_uses_multipart_encoding() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/upload/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 5, "file_name": "anis.txt", "file_size": 6
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let file = UploadFile::new("anis.txt", b"salaam".to_vec()).with_content_type("text/plain");
    let doc = h
        .client
        .documents()
        .upload("marsiya", file, [("title", "Salaam".to_string())])
        .await
        .unwrap();
    assert_eq!(doc.file_size, Some(6));

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"), "{}", content_type);
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("filename=\"anis.txt\""));
    assert!(body.contains("name=\"project\""));
    assert!(body.contains("Salaam"));
    assert_eq!(
        received[0].headers.get("Authorization").unwrap().to_str().unwrap(),
        "Bearer token"
    );
}

#[tokio::test]
async fn multipart_create_keeps_existing_project_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/create/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 6 })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let form = MultipartForm::new()
        .text("project", "other-project")
        .file("file", UploadFile::new("a.txt", b"x".to_vec()));
    h.client
        .documents()
        .create_multipart("marsiya", form)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert_eq!(body.matches("name=\"project\"").count(), 1);
    assert!(body.contains("other-project"));
}

#[tokio::test]
async fn search_sends_term_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/search/marsiya/"))
        .and(query_param("search", "karbala"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "id": 1 }])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    let hits = h.client.documents().search("marsiya", "karbala").await.unwrap();
    assert_eq!(hits.total(), 1);
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/documents/delete/marsiya/4/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, creds());
    h.client.documents().delete("marsiya", 4).await.unwrap();
}
