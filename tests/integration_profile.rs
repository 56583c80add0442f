mod common;

use axum::http::{StatusCode, header};
use common::{
    body_json, create_test_user, empty_request, generate_unique_username, json_request,
    setup_test_app, token_for,
};
use healthdesk::modules::profile::service::{ProfileRead, ProfileService};
use healthdesk_models::{UpsertProfileDto, UserRole};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn profile_dto(name: &str, age: i32) -> UpsertProfileDto {
    UpsertProfileDto {
        name: Some(name.to_string()),
        age: Some(age),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_profile_without_record_returns_null_data(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;

    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/my-profile", Some(&token_for(&user))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "private, max-age=3600"
    );
    assert!(response.headers().contains_key(header::ETAG));
    assert_eq!(body_json(response).await, json!({ "data": null }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_profile_then_get(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    let token = token_for(&user);

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "PUT",
            "/api/my-profile",
            Some(&token),
            &json!({ "name": "Alice", "age": 30, "gender": "female", "medical_history": "asthma" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let put_etag = response.headers()[header::ETAG].to_str().unwrap().to_string();
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Alice");
    assert_eq!(body["data"]["age"], 30);
    assert_eq!(body["data"]["user_id"], user.id);
    assert_eq!(body["data"]["_links"]["self"]["href"], "/api/my-profile");
    assert_eq!(body["data"]["_links"]["update"]["method"], "PUT");

    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/my-profile", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ETAG], put_etag.as_str());
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Alice");
    assert_eq!(body["data"]["age"], 30);
    assert_eq!(body["data"]["gender"], "female");
    assert_eq!(body["data"]["medical_history"], "asthma");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_profile_accepts_long_text_and_large_age(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    let name = "N".repeat(300);
    let gender = "g".repeat(60);

    let response = setup_test_app(pool)
        .oneshot(json_request(
            "PUT",
            "/api/my-profile",
            Some(&token_for(&user)),
            &json!({ "name": name, "age": 151, "gender": gender }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], name.as_str());
    assert_eq!(body["data"]["gender"], gender.as_str());
    assert_eq!(body["data"]["age"], 151);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_matching_if_none_match_returns_304(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    let token = token_for(&user);
    ProfileService::upsert_own_profile(&pool, user.id, profile_dto("Alice", 30))
        .await
        .unwrap();

    let first = setup_test_app(pool.clone())
        .oneshot(empty_request("GET", "/api/my-profile", Some(&token)))
        .await
        .unwrap();
    let etag = first.headers()[header::ETAG].to_str().unwrap().to_string();

    let mut request = empty_request("GET", "/api/my-profile", Some(&token));
    request
        .headers_mut()
        .insert(header::IF_NONE_MATCH, etag.parse().unwrap());
    let second = setup_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(second.headers()[header::ETAG], etag.as_str());
    assert_eq!(
        second.headers()[header::CACHE_CONTROL],
        "private, max-age=3600"
    );
    assert_eq!(body_json(second).await, serde_json::Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_invalidates_previous_etag(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    ProfileService::upsert_own_profile(&pool, user.id, profile_dto("Alice", 30))
        .await
        .unwrap();

    let ProfileRead::Fresh { etag: before, .. } =
        ProfileService::get_own_profile(&pool, user.id, None).await.unwrap()
    else {
        panic!("expected a fresh read");
    };

    ProfileService::upsert_own_profile(&pool, user.id, profile_dto("Alice", 31))
        .await
        .unwrap();

    let read = ProfileService::get_own_profile(&pool, user.id, Some(&before))
        .await
        .unwrap();
    match read {
        ProfileRead::Fresh { etag, body } => {
            assert_ne!(etag, before);
            assert_eq!(body.data.unwrap().patient.age, 31);
        }
        ProfileRead::Unchanged { .. } => panic!("stale etag must not match"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_twice_keeps_one_row(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;

    let first = ProfileService::upsert_own_profile(&pool, user.id, profile_dto("Alice", 30))
        .await
        .unwrap();
    let second = ProfileService::upsert_own_profile(&pool, user.id, profile_dto("Alicia", 31))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);

    let rows: Vec<(String, i32)> =
        sqlx::query_as("SELECT name, age FROM patients WHERE user_id = $1")
            .bind(user.id)
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(rows, vec![("Alicia".to_string(), 31)]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_profile_accepts_numeric_string_age(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;

    let response = setup_test_app(pool)
        .oneshot(json_request(
            "PUT",
            "/api/my-profile",
            Some(&token_for(&user)),
            &json!({ "name": "Alice", "age": "42", "gender": "", "medical_history": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["age"], 42);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_put_profile_missing_name_or_age(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    let token = token_for(&user);

    for body in [
        json!({ "age": 30 }),
        json!({ "name": "Alice" }),
        json!({ "name": "", "age": 30 }),
        json!({ "name": "Alice", "age": "" }),
    ] {
        let response = setup_test_app(pool.clone())
            .oneshot(json_request("PUT", "/api/my-profile", Some(&token), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Name and age are required fields.");
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_requires_token(pool: PgPool) {
    let response = setup_test_app(pool.clone())
        .oneshot(empty_request("GET", "/api/my-profile", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = setup_test_app(pool)
        .oneshot(json_request(
            "PUT",
            "/api/my-profile",
            Some("tampered.token.value"),
            &json!({ "name": "Mallory", "age": 40 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profiles_are_isolated_per_user(pool: PgPool) {
    let alice = create_test_user(&pool, &generate_unique_username(), "pw1", UserRole::Patient).await;
    let bob = create_test_user(&pool, &generate_unique_username(), "pw2", UserRole::Patient).await;
    ProfileService::upsert_own_profile(&pool, alice.id, profile_dto("Alice", 30))
        .await
        .unwrap();

    let response = setup_test_app(pool)
        .oneshot(empty_request("GET", "/api/my-profile", Some(&token_for(&bob))))
        .await
        .unwrap();

    assert_eq!(body_json(response).await, json!({ "data": null }));
}
