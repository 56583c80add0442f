mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_patient, create_test_user, empty_request, generate_unique_username,
    setup_test_app, token_for,
};
use healthdesk::modules::admin::service::AdminService;
use healthdesk_models::UserRole;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_patients_newest_first_with_owner_and_links(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "root", UserRole::Admin).await;
    let alice = create_test_user(&pool, "alice", "pw1", UserRole::Patient).await;
    let bob = create_test_user(&pool, "bob", "pw2", UserRole::Patient).await;
    let alice_record = create_test_patient(&pool, alice.id, "Alice", 30).await;
    let bob_record = create_test_patient(&pool, bob.id, "Bob", 41).await;

    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/admin/patients", Some(&token_for(&admin))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], bob_record);
    assert_eq!(data[0]["owner"], "bob");
    assert_eq!(data[1]["id"], alice_record);
    assert_eq!(data[1]["owner"], "alice");
    assert_eq!(data[1]["name"], "Alice");
    assert_eq!(data[1]["age"], 30);

    let delete_href = format!("/api/admin/patients/{}", alice_record);
    assert_eq!(data[1]["_links"]["self"]["href"], delete_href.as_str());
    assert_eq!(data[1]["_links"]["delete"]["href"], delete_href.as_str());
    assert_eq!(data[1]["_links"]["delete"]["method"], "DELETE");

    assert_eq!(body["_links"]["self"]["href"], "/api/admin/patients");
    assert_eq!(body["_links"]["self"]["method"], "GET");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_patients_empty(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "root", UserRole::Admin).await;

    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/admin/patients", Some(&token_for(&admin))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_patients_forbidden_for_patient(pool: PgPool) {
    let patient =
        create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;

    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/admin/patients", Some(&token_for(&patient))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Forbidden: Access is restricted to administrators."
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_patients_without_token(pool: PgPool) {
    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/admin/patients", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_patient_removes_only_that_row(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "root", UserRole::Admin).await;
    let alice = create_test_user(&pool, "alice", "pw1", UserRole::Patient).await;
    let bob = create_test_user(&pool, "bob", "pw2", UserRole::Patient).await;
    let alice_record = create_test_patient(&pool, alice.id, "Alice", 30).await;
    let bob_record = create_test_patient(&pool, bob.id, "Bob", 41).await;

    let uri = format!("/api/admin/patients/{}", alice_record);
    let response = setup_test_app(pool.clone())
        .oneshot(empty_request("DELETE", &uri, Some(&token_for(&admin))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(response).await, serde_json::Value::Null);

    let remaining: Vec<i64> = sqlx::query_scalar("SELECT id FROM patients")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, vec![bob_record]);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_patient_is_not_found(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "root", UserRole::Admin).await;

    let response = setup_test_app(pool.clone())
        .oneshot(empty_request(
            "DELETE",
            "/api/admin/patients/999999",
            Some(&token_for(&admin)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Patient record not found.");

    let err = AdminService::delete_patient(&pool, 999_999).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_with_non_numeric_id_is_bad_request(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_username(), "root", UserRole::Admin).await;

    let response = setup_test_app(pool)
        .oneshot(empty_request(
            "DELETE",
            "/api/admin/patients/abc",
            Some(&token_for(&admin)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["status"], 400);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_forbidden_for_patient(pool: PgPool) {
    let patient =
        create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    let record = create_test_patient(&pool, patient.id, "Alice", 30).await;

    let uri = format!("/api/admin/patients/{}", record);
    let response = setup_test_app(pool.clone())
        .oneshot(empty_request("DELETE", &uri, Some(&token_for(&patient))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
