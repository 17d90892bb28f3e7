use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use test_utils::factory;

use super::{app, graphql, json_body, send, send_raw};
use crate::server::middleware::auth::AuthGate;

fn ballet() -> Value {
    json!({
        "name": "Ballet",
        "semester": "Fall",
        "teacher": "Ms Smith",
        "classLength": 60,
        "classType": "Ballet",
        "location": "Studio A",
        "daysOfWeek": ["Monday", "Wednesday"],
        "dancers": [{ "firstName": "Alice", "lastName": "Smith", "age": 12 }]
    })
}

/// Create, read, update and delete a class end to end.
#[tokio::test]
async fn ballet_class_lifecycle() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send(&app, Method::POST, "/danceclasses", Some(ballet())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["teachingAssistant"], Value::Null);
    assert_eq!(created["dancers"][0]["firstName"], "Alice");
    let uri = format!("/danceclasses/{}", created["id"]);

    let fetched = json_body(send(&app, Method::GET, &uri, None).await).await;
    assert_eq!(fetched, created);

    let response = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "location": "Studio B", "teachingAssistant": "Mr Lee" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["location"], "Studio B");
    assert_eq!(updated["teachingAssistant"], "Mr Lee");
    assert_eq!(updated["daysOfWeek"], json!(["Monday", "Wednesday"]));

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Dance class deleted successfully" })
    );

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn embedded_dancer_with_fractional_age_is_rejected() {
    let (_test, app) = app(AuthGate::disabled()).await;
    let mut body = ballet();
    body["dancers"] = json!([{ "firstName": "Alice", "lastName": "Smith", "age": 12.5 }]);

    let response = send(&app, Method::POST, "/danceclasses", Some(body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "errors": [{
            "field": "dancers",
            "message": "Each dancer must have a valid firstName, lastName, and age"
        }] })
    );
}

#[tokio::test]
async fn list_returns_classes_in_creation_order() {
    let (test, app) = app(AuthGate::disabled()).await;
    let db = &test.db;
    factory::dance_class::DanceClassFactory::new(db)
        .name("Jazz")
        .build()
        .await
        .unwrap();
    factory::dance_class::DanceClassFactory::new(db)
        .name("Tap")
        .build()
        .await
        .unwrap();

    let response = send(&app, Method::GET, "/danceclasses", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let names: Vec<Value> = json_body(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|class| class["name"].clone())
        .collect();
    assert_eq!(names, vec![json!("Jazz"), json!("Tap")]);
}

#[tokio::test]
async fn update_unknown_class_is_not_found() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send(
        &app,
        Method::PUT,
        "/danceclasses/777",
        Some(json!({ "location": "Studio C" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn class_created_over_graphql_is_visible_over_rest() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let body = graphql(
        &app,
        r#"mutation {
            addDanceClass(danceClass: {
                name: "Hip Hop",
                semester: "Spring",
                teacher: "Ms Smith",
                classLength: 45,
                classType: "Hip Hop",
                location: "Studio C",
                daysOfWeek: ["Friday"]
            }) { id }
        }"#,
    )
    .await;
    let id = body["data"]["addDanceClass"]["id"].as_str().unwrap().to_string();

    let response = send(&app, Method::GET, &format!("/danceclasses/{id}"), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let class = json_body(response).await;
    assert_eq!(class["name"], "Hip Hop");
    assert_eq!(class["dancers"], json!([]));
}

#[tokio::test]
async fn malformed_json_update_is_rejected() {
    let (test, app) = app(AuthGate::disabled()).await;
    let class = factory::dance_class::DanceClassFactory::new(&test.db)
        .name("Jazz")
        .build()
        .await
        .unwrap();
    let uri = format!("/danceclasses/{}", class.id);

    let response = send_raw(
        &app,
        Method::PUT,
        &uri,
        Some("application/json"),
        r#"{"location": "Studio B""#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["field"], "body");

    let stored = json_body(send(&app, Method::GET, &uri, None).await).await;
    assert_eq!(stored["location"], "Studio A");
}
