use std::env;

use ats_backend::{
    config::Config,
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup() -> Option<(Router, PgPool)> {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").ok()?;

    let config = Config {
        server_address: "127.0.0.1:0".to_string(),
        database_url,
        database_max_connections: 5,
        jwt_secret: "test_secret_key".to_string(),
        jwt_ttl_hours: 24,
        auth_rps: 10_000,
        api_rps: 10_000,
        seed_demo_data: false,
    };
    let pool = create_pool(&config).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    let app = routes::router(AppState::new(pool.clone(), config));
    Some((app, pool))
}

macro_rules! setup_or_skip {
    () => {
        match setup().await {
            Some(ctx) => ctx,
            None => {
                eprintln!("DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, rand::random::<u64>())
}

struct Account {
    user_id: i32,
    token: String,
}

async fn register_and_login(app: &Router, prefix: &str) -> Account {
    let email = unique_email(prefix);
    let (status, body) = call(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({ "email": email, "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let user_id = body["id"].as_i64().unwrap() as i32;

    let (status, body) = call(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    Account {
        user_id,
        token: body["token"].as_str().unwrap().to_string(),
    }
}

/// Staff rows are inserted directly: creating the first admin through the
/// API needs an admin.
async fn make_staff(pool: &PgPool, user_id: i32, name: &str, admin: bool) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO staff (user_id, name, title, admin) VALUES ($1, $2, 'Recruiter', $3) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .bind(admin)
    .fetch_one(pool)
    .await
    .expect("insert staff")
}

struct World {
    admin: Account,
    manager: Account,
    manager_staff_id: i32,
    other_staff: Account,
    candidate: Account,
    candidate_id: i32,
    job_id: i32,
}

async fn world(app: &Router, pool: &PgPool) -> World {
    let admin = register_and_login(app, "admin").await;
    make_staff(pool, admin.user_id, "Elizabeth Riley", true).await;

    let manager = register_and_login(app, "manager").await;
    let manager_staff_id = make_staff(pool, manager.user_id, "Irene Ryan", false).await;

    let other_staff = register_and_login(app, "staff").await;
    make_staff(pool, other_staff.user_id, "Ruth Adams", false).await;

    let candidate = register_and_login(app, "candidate").await;
    let (status, body) = call(
        app,
        "POST",
        "/candidates",
        Some(&candidate.token),
        Some(json!({ "name": "Maurice Bailey", "phone_number": "0432043448" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let candidate_id = body["id"].as_i64().unwrap() as i32;

    let (status, body) = call(
        app,
        "POST",
        "/jobs",
        Some(&manager.token),
        Some(json!({
            "title": "Platform Engineer",
            "description": "Run the build farm",
            "department": "Engineering",
            "location": "Australia (Remote)",
            "salary_budget": 150000,
            "hiring_manager_id": manager_staff_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let job_id = body["id"].as_i64().unwrap() as i32;

    World {
        admin,
        manager,
        manager_staff_id,
        other_staff,
        candidate,
        candidate_id,
        job_id,
    }
}

fn application_body(job_id: i32) -> JsonValue {
    json!({
        "job_id": job_id,
        "location": "Sydney",
        "working_rights": "Citizen",
        "notice_period": "4 weeks",
        "salary_expectations": 120000,
        "resume": "https://example.com/cv.pdf"
    })
}

async fn apply(app: &Router, w: &World) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/applications",
        Some(&w.candidate.token),
        Some(application_body(w.job_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap() as i32
}

async fn schedule(app: &Router, w: &World, application_id: i32) -> i32 {
    let (status, body) = call(
        app,
        "POST",
        "/interviews",
        Some(&w.manager.token),
        Some(json!({
            "application_id": application_id,
            "interviewer_id": w.manager_staff_id,
            "interview_datetime": "2030-01-15T10:00:00",
            "length_mins": 45,
            "format": "Video call"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap() as i32
}

async fn count(pool: &PgPool, sql: &str, id: i32) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("count")
}

#[tokio::test]
async fn register_returns_public_fields_and_rejects_duplicates() {
    let (app, _pool) = setup_or_skip!();
    let email = unique_email("alice");
    let payload = json!({ "email": email, "password": "Passw0rd!" });

    let (status, body) = call(&app, "POST", "/auth/register", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 2, "{body}");
    assert_eq!(body["email"], email);
    assert!(body["id"].is_i64());

    let (status, _) = call(&app, "POST", "/auth/register", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_checks_password_and_issues_token() {
    let (app, _pool) = setup_or_skip!();
    let email = unique_email("bob");
    call(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({ "email": email, "password": "Passw0rd!" })),
    )
    .await;

    let (status, _) = call(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = call(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], email);
    let token = body["token"].as_str().unwrap();

    // No profile yet: an empty-result message, not an error.
    let (status, body) = call(&app, "GET", "/interviews", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have no scheduled interviews.");
    let (status, body) = call(&app, "GET", "/applications/mine", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have no applications.");

    let (status, _) = call(&app, "GET", "/interviews", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = call(&app, "GET", "/interviews", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn applying_to_unknown_job_is_invalid_reference() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;

    let (status, body) = call(
        &app,
        "POST",
        "/applications",
        Some(&w.candidate.token),
        Some(application_body(i32::MAX)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    assert_eq!(body["field"], "job_id");
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM applications WHERE candidate_id = $1", w.candidate_id).await,
        0
    );
}

#[tokio::test]
async fn only_admin_can_grant_admin() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let target = register_and_login(&app, "target").await;
    let target_staff = make_staff(&pool, target.user_id, "Jordan Lee", false).await;
    let uri = format!("/staff/{}", target_staff);

    let (status, _) = call(
        &app,
        "PATCH",
        &uri,
        Some(&w.other_staff.token),
        Some(json!({ "admin": true })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let admin: bool = sqlx::query_scalar("SELECT admin FROM staff WHERE id = $1")
        .bind(target_staff)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!admin);

    // A member may not promote themself either.
    let (status, _) = call(
        &app,
        "PATCH",
        &uri,
        Some(&target.token),
        Some(json!({ "admin": true })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call(
        &app,
        "PATCH",
        &uri,
        Some(&w.admin.token),
        Some(json!({ "admin": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["admin"], true);
}

#[tokio::test]
async fn application_candidate_comes_from_the_caller() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;

    let mut body = application_body(w.job_id);
    body["candidate_id"] = json!(w.candidate_id + 1000);
    let (status, created) = call(&app, "POST", "/applications", Some(&w.candidate.token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert!(created.get("status").is_none());

    let stored: i32 = sqlx::query_scalar("SELECT candidate_id FROM applications WHERE id = $1")
        .bind(created["id"].as_i64().unwrap() as i32)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, w.candidate_id);

    // A user without a candidate profile cannot apply.
    let (status, _) = call(
        &app,
        "POST",
        "/applications",
        Some(&w.other_staff.token),
        Some(application_body(w.job_id)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn interview_copies_candidate_and_scorecards_belong_to_the_interviewer() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let application_id = apply(&app, &w).await;
    let interview_id = schedule(&app, &w, application_id).await;

    let stored: i32 = sqlx::query_scalar("SELECT candidate_id FROM interviews WHERE id = $1")
        .bind(interview_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, w.candidate_id);

    let uri = format!("/interviews/{}/scorecards", interview_id);
    let scorecard = json!({ "notes": "Clear communicator", "rating": "Yes" });

    // Other staff can use staff endpoints but not this scorecard.
    let (status, _) = call(&app, "GET", "/jobs/all", Some(&w.other_staff.token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, "POST", &uri, Some(&w.other_staff.token), Some(scorecard.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&app, "PATCH", &uri, Some(&w.other_staff.token), Some(scorecard.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (first, second) = tokio::join!(
        call(&app, "POST", &uri, Some(&w.manager.token), Some(scorecard.clone())),
        call(&app, "POST", &uri, Some(&w.manager.token), Some(scorecard.clone())),
    );
    let mut statuses = vec![first.0.as_u16(), second.0.as_u16()];
    statuses.sort();
    assert_eq!(statuses, vec![201, 409]);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM scorecards WHERE interview_id = $1", interview_id).await,
        1
    );

    let (status, body) = call(
        &app,
        "PATCH",
        &uri,
        Some(&w.manager.token),
        Some(json!({ "rating": "Strong Yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["rating"], "Strong Yes");
    assert_eq!(body["interview"]["candidate"]["name"], "Maurice Bailey");

    let (status, _) = call(&app, "GET", &uri, Some(&w.admin.token), None).await;
    assert_eq!(status, StatusCode::OK);

    // The candidate sees the interview without the application details.
    let (status, body) = call(
        &app,
        "GET",
        &format!("/interviews/{}", interview_id),
        Some(&w.candidate.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("application").is_none());
    assert_eq!(body["job"]["title"], "Platform Engineer");
}

#[tokio::test]
async fn deleting_a_job_removes_everything_below_it() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let application_id = apply(&app, &w).await;
    let interview_id = schedule(&app, &w, application_id).await;
    let (status, _) = call(
        &app,
        "POST",
        &format!("/interviews/{}/scorecards", interview_id),
        Some(&w.manager.token),
        Some(json!({ "notes": "Solid", "rating": "No Decision" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The hiring manager is still referenced and cannot be removed.
    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/staff/{}", w.manager_staff_id),
        Some(&w.admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/jobs/{}", w.job_id),
        Some(&w.admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM applications WHERE job_id = $1", w.job_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM interviews WHERE application_id = $1", application_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM scorecards WHERE interview_id = $1", interview_id).await, 0);

    let (status, _) = call(&app, "GET", &format!("/jobs/{}", w.job_id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn write_scorecard(app: &Router, w: &World, interview_id: i32) {
    let (status, body) = call(
        app,
        "POST",
        &format!("/interviews/{}/scorecards", interview_id),
        Some(&w.manager.token),
        Some(json!({ "notes": "Clear communicator", "rating": "Yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn deleting_an_application_removes_its_interviews_and_scorecards() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let application_id = apply(&app, &w).await;
    let interview_id = schedule(&app, &w, application_id).await;
    write_scorecard(&app, &w, interview_id).await;
    let uri = format!("/applications/{}", application_id);

    let (status, _) = call(&app, "DELETE", &uri, Some(&w.manager.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&app, "DELETE", &uri, Some(&w.admin.token), None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM interviews WHERE application_id = $1", application_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM scorecards WHERE interview_id = $1", interview_id).await, 0);
    // The job itself is untouched.
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM jobs WHERE id = $1", w.job_id).await, 1);

    let (status, _) = call(&app, "GET", &uri, Some(&w.admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_candidate_removes_their_applications_and_interviews() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let application_id = apply(&app, &w).await;
    let interview_id = schedule(&app, &w, application_id).await;
    write_scorecard(&app, &w, interview_id).await;

    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/candidates/{}", w.candidate_id),
        Some(&w.admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM applications WHERE candidate_id = $1", w.candidate_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM interviews WHERE candidate_id = $1", w.candidate_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM scorecards WHERE interview_id = $1", interview_id).await, 0);
    // The login survives; only the profile is gone.
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM users WHERE id = $1", w.candidate.user_id).await, 1);

    let (status, _) = call(&app, "GET", "/candidates/me", Some(&w.candidate.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_deleting_a_user_removes_their_profiles() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let application_id = apply(&app, &w).await;
    let uri = format!("/users/{}", w.candidate.user_id);

    let (status, _) = call(&app, "DELETE", &uri, Some(&w.manager.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM users WHERE id = $1", w.candidate.user_id).await, 1);

    let (status, _) = call(&app, "DELETE", &uri, Some(&w.admin.token), None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM users WHERE id = $1", w.candidate.user_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM candidates WHERE id = $1", w.candidate_id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM applications WHERE id = $1", application_id).await, 0);

    let (status, _) = call(&app, "DELETE", &uri, Some(&w.admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn roles_below_the_minimum_are_forbidden_and_change_nothing() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let job_uri = format!("/jobs/{}", w.job_id);

    let (status, _) = call(&app, "DELETE", &job_uri, Some(&w.manager.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&app, "DELETE", &job_uri, Some(&w.candidate.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM jobs WHERE id = $1", w.job_id).await, 1);

    let (status, _) = call(
        &app,
        "PATCH",
        &job_uri,
        Some(&w.candidate.token),
        Some(json!({ "title": "Renamed Job" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/staff/{}", w.manager_staff_id),
        Some(&w.other_staff.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM staff WHERE id = $1", w.manager_staff_id).await, 1);

    let application_id = apply(&app, &w).await;
    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/applications/{}", application_id),
        Some(&w.manager.token),
        Some(json!({ "status": "Offer" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = call(
        &app,
        "PATCH",
        &format!("/applications/{}", application_id),
        Some(&w.admin.token),
        Some(json!({ "status": "Offer" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Offer");

    let (status, _) = call(&app, "GET", "/candidates", Some(&w.manager.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&app, "GET", "/interviews/all", Some(&w.manager.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn job_views_depend_on_the_caller() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    let uri = format!("/jobs/{}", w.job_id);

    let (status, public) = call(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(public.get("salary_budget").is_none());
    assert!(public.get("hiring_manager").is_none());

    let (_, staff) = call(&app, "GET", &uri, Some(&w.other_staff.token), None).await;
    assert!(staff.get("salary_budget").is_none());
    assert_eq!(staff["hiring_manager"]["name"], "Irene Ryan");

    let (_, owner) = call(&app, "GET", &uri, Some(&w.manager.token), None).await;
    assert_eq!(owner["salary_budget"], 150000);
    let (_, admin) = call(&app, "GET", &uri, Some(&w.admin.token), None).await;
    assert_eq!(admin["salary_budget"], 150000);

    let (status, _) = call(&app, "GET", &uri, Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = call(&app, "GET", "/jobs?status=Open", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().any(|job| job["id"] == w.job_id));
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;

    let (status, body) = call(
        &app,
        "PATCH",
        &format!("/applications/{}", apply(&app, &w).await),
        Some(&w.admin.token),
        Some(json!({ "status": "Hired" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert!(body["error"].is_string());

    let (status, body) = call(
        &app,
        "POST",
        "/jobs",
        Some(&w.manager.token),
        Some(json!({
            "title": "Job; DROP TABLE",
            "description": "x",
            "department": "Engineering",
            "location": "Remote",
            "salary_budget": 1,
            "hiring_manager_id": w.manager_staff_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn query_and_path_errors_use_the_error_body() {
    let (app, _pool) = setup_or_skip!();

    let (status, body) = call(&app, "GET", "/jobs?status=Bogus", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let (status, body) = call(&app, "GET", "/jobs/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}

#[tokio::test]
async fn register_without_email_names_the_missing_field() {
    let (app, _pool) = setup_or_skip!();
    let (status, body) = call(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({ "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn emails_are_case_insensitive() {
    let (app, _pool) = setup_or_skip!();
    let email = unique_email("case");
    let shouted = email.to_uppercase();

    let (status, body) = call(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({ "email": shouted, "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["email"], email);

    let (status, _) = call(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({ "email": email, "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": shouted, "password": "Passw0rd!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn password_hash_never_leaves_the_server() {
    let (app, pool) = setup_or_skip!();
    let w = world(&app, &pool).await;
    apply(&app, &w).await;

    let mut bodies = Vec::new();
    for (token, uri) in [
        (&w.admin.token, "/users"),
        (&w.admin.token, "/staff"),
        (&w.admin.token, "/candidates"),
        (&w.admin.token, "/applications"),
        (&w.candidate.token, "/candidates/me"),
        (&w.candidate.token, "/applications/mine"),
        (&w.manager.token, "/applications/mine"),
    ] {
        let (status, body) = call(&app, "GET", uri, Some(token), None).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
        bodies.push(body.to_string());
    }
    let (_, updated) = call(
        &app,
        "PATCH",
        "/users",
        Some(&w.candidate.token),
        Some(json!({ "password": "N3wPassw0rd!" })),
    )
    .await;
    bodies.push(updated.to_string());

    for body in bodies {
        assert!(!body.contains("password"), "{body}");
        assert!(!body.contains("$argon2"), "{body}");
    }
}
