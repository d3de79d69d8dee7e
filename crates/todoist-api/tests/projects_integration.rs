//! Integration tests for the project and section endpoints.

use todoist_api_rs::client::TodoistClient;
use todoist_api_rs::color::Color;
use todoist_api_rs::models::{CreateProject, CreateSection, UpdateProject, UpdateSection};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "color": "charcoal",
        "name": name,
        "comment_count": 0,
        "shared": false,
        "favorite": false,
        "sync_id": 0,
        "order": 1,
        "url": format!("https://todoist.com/showProject?id={id}")
    })
}

#[tokio::test]
async fn test_list_and_create_projects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            project_json(1, "Inbox"),
            project_json(2, "Work")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(serde_json::json!({"name": "Errands", "color": "lime_green"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json(3, "Errands")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TodoistClient::with_base_url("test-token", mock_server.uri()).unwrap();

    let projects = client.list_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].name, "Work");

    let created = client
        .create_project(&CreateProject::new("Errands").with_color(Color::LimeGreen))
        .await
        .unwrap();
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn test_get_update_delete_project() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json(2, "Work")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/2"))
        .and(body_json(serde_json::json!({"favorite": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/projects/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TodoistClient::with_base_url("test-token", mock_server.uri()).unwrap();

    let project = client.get_project(2).await.unwrap().unwrap();
    assert_eq!(project.name, "Work");
    assert!(client.get_project(9).await.unwrap().is_none());

    let update = UpdateProject {
        favorite: Some(true),
        ..Default::default()
    };
    client.update_project(2, &update).await.unwrap();
    client.delete_project(2).await.unwrap();
}

#[tokio::test]
async fn test_project_collaborators() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/2/collaborators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 2671362, "name": "Alice", "email": "alice@example.com"},
            {"id": 2671366, "name": "Bob", "email": "bob@example.com"}
        ])))
        .mount(&mock_server)
        .await;

    let client = TodoistClient::with_base_url("test-token", mock_server.uri()).unwrap();
    let collaborators = client.project_collaborators(2).await.unwrap();

    assert_eq!(collaborators.len(), 2);
    assert_eq!(collaborators[0].email, "alice@example.com");
}

#[tokio::test]
async fn test_sections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sections"))
        .and(query_param("project_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 7025, "project_id": 2, "order": 1, "name": "Groceries"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sections"))
        .and(body_json(serde_json::json!({"name": "Meetings", "project_id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"id": 7026, "project_id": 2, "order": 2, "name": "Meetings"}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sections/7026"))
        .and(body_json(serde_json::json!({"name": "Standups"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sections/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = TodoistClient::with_base_url("test-token", mock_server.uri()).unwrap();

    let sections = client.list_sections(2).await.unwrap();
    assert_eq!(sections[0].name, "Groceries");

    let created = client
        .create_section(&CreateSection::new(2, "Meetings"))
        .await
        .unwrap();
    assert_eq!(created.id, 7026);

    client
        .update_section(
            7026,
            &UpdateSection {
                name: "Standups".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(client.get_section(1).await.unwrap().is_none());
}
