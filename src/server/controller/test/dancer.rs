use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::factory;

use super::{app, graphql, json_body, send, send_raw};
use crate::server::middleware::auth::AuthGate;

#[tokio::test]
async fn create_then_get_returns_same_dancer() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send(
        &app,
        Method::POST,
        "/dancers",
        Some(json!({ "firstName": "Kate", "lastName": "Douglas", "age": 18 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;

    let response = send(
        &app,
        Method::GET,
        &format!("/dancers/{}", created["id"]),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
    assert_eq!(created["firstName"], "Kate");
}

#[tokio::test]
async fn invalid_body_is_rejected_and_not_stored() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send(
        &app,
        Method::POST,
        "/dancers",
        Some(json!({ "firstName": "Kate3", "age": "eighteen" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["firstName", "lastName", "age"]);

    let listed = json_body(send(&app, Method::GET, "/dancers", None).await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn unknown_dancer_is_not_found() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send(&app, Method::GET, "/dancers/4242", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({ "message": "Dancer not found" }));
}

/// Ids that cannot be parsed surface as a server fault, not a 404.
#[tokio::test]
async fn malformed_id_is_internal_error() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send(&app, Method::GET, "/dancers/not-an-id", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Internal server error" })
    );
}

#[tokio::test]
async fn update_merges_supplied_fields() {
    let (test, app) = app(AuthGate::disabled()).await;
    let dancer = factory::dancer::DancerFactory::new(&test.db)
        .first_name("Alice")
        .last_name("Smith")
        .age(12)
        .build()
        .await
        .unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/dancers/{}", dancer.id),
        Some(json!({ "lastName": "Jones" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "id": dancer.id, "firstName": "Alice", "lastName": "Jones", "age": 12 })
    );
}

#[tokio::test]
async fn update_with_invalid_field_keeps_stored_value() {
    let (test, app) = app(AuthGate::disabled()).await;
    let dancer = factory::dancer::DancerFactory::new(&test.db)
        .age(12)
        .build()
        .await
        .unwrap();
    let uri = format!("/dancers/{}", dancer.id);

    let response = send(&app, Method::PUT, &uri, Some(json!({ "age": -3 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = json_body(send(&app, Method::GET, &uri, None).await).await;
    assert_eq!(stored["age"], 12);
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let (test, app) = app(AuthGate::disabled()).await;
    let dancer = factory::create_dancer(&test.db).await.unwrap();
    let uri = format!("/dancers/{}", dancer.id);

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Dancer deleted successfully" })
    );

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A dancer created over REST reads back identically over GraphQL.
#[tokio::test]
async fn rest_and_graphql_agree() {
    let (_test, app) = app(AuthGate::disabled()).await;
    let created = json_body(
        send(
            &app,
            Method::POST,
            "/dancers",
            Some(json!({ "firstName": "Cocoa", "lastName": "Douglas", "age": 10 })),
        )
        .await,
    )
    .await;

    let body = graphql(
        &app,
        &format!(
            r#"{{ dancer(id: "{}") {{ firstName lastName age }} }}"#,
            created["id"]
        ),
    )
    .await;

    assert_eq!(
        body["data"]["dancer"],
        json!({ "firstName": "Cocoa", "lastName": "Douglas", "age": 10 })
    );
}

/// A body sent without a JSON content type is a validation failure, not a 415.
#[tokio::test]
async fn body_without_json_content_type_is_rejected() {
    let (_test, app) = app(AuthGate::disabled()).await;

    let response = send_raw(
        &app,
        Method::POST,
        "/dancers",
        None,
        r#"{"firstName":"Kate","lastName":"Douglas","age":18}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);

    let listed = json_body(send(&app, Method::GET, "/dancers", None).await).await;
    assert_eq!(listed, json!([]));
}
