//! API client behavior: headers, session handling and error mapping.

mod support;

use common::error::ApiError;
use common::model::auth::{Credentials, OrganizationRegistration};
use common::model::opportunity::NewOpportunity;
use common::model::profile::ProfileUpdate;
use common::session::{AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, Role, SessionStore, USER_TYPE_KEY};

use support::{client, list_json, opportunity_json, signed_in};

fn credentials() -> Credentials {
    Credentials {
        email: "sam@example.org".to_string(),
        password: "hunter22".to_string(),
    }
}

const PROFILE_JSON: &str = r#"{
    "user": {"first_name": "Sam", "last_name": "Lee", "email": "sam@example.org"},
    "location": "Oakland",
    "join_date": "2023-09-01",
    "total_hours": 42.5,
    "skills": ["teaching"],
    "badges": ["First Shift"],
    "activities": [{"id": 1, "title": "Tutoring", "date": "2024-01-10", "hours": 2}]
}"#;

#[tokio::test]
async fn authenticated_calls_carry_the_bearer_token() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(1, 5, 0, false)]));

    let list = client.list_opportunities().await.expect("list loads");
    assert_eq!(list.len(), 1);

    let request = &client.transport().requests()[0];
    assert_eq!(request.url, "https://volunteer.test/api/opportunities/");
    assert_eq!(request.header("authorization"), Some("Bearer access-token"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("ngrok-skip-browser-warning"), Some("true"));
}

#[tokio::test]
async fn leaderboard_is_public() {
    let client = signed_in(Role::Volunteer);
    client.transport().respond(
        200,
        r#"[{"id": 3, "name": "Ana", "hours": 40, "tasks": 6, "rating": 4.9},
            {"id": 8, "name": "Ben", "hours": 31, "rank": 2, "tasks": 4, "rating": 4.7}]"#,
    );

    let board = client.leaderboard().await.expect("leaderboard loads");
    assert_eq!(board[0].rank, Some(1));
    assert_eq!(board[1].rank, Some(2));
    assert_eq!(client.transport().requests()[0].header("authorization"), None);
}

#[tokio::test]
async fn unauthorized_clears_the_session() {
    let client = signed_in(Role::Organization);
    client.transport().respond(401, r#"{"detail":"Token expired"}"#);

    let err = client.list_opportunities().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert!(client.session().session().is_none());
    assert!(client.session().role().is_none());
    assert!(client.session().store().is_empty());
}

#[tokio::test]
async fn validation_errors_keep_the_body() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(400, r#"{"detail":"You have already applied"}"#);

    let err = client.apply(4).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            body: r#"{"detail":"You have already applied"}"#.to_string(),
        }
    );
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn server_error_page_is_not_shown_to_the_user() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(502, "<html><body>ERR_NGROK_3200 tunnel offline</body></html>");

    let err = client.apply(4).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 502, .. }));
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let client = signed_in(Role::Volunteer);
    client.transport().respond(200, "<html>not json</html>");

    let err = client.list_opportunities().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn volunteer_login_stores_session() {
    let client = client();
    client.transport().respond(
        200,
        r#"{"access": "a1", "refresh": "r1", "user_type": "volunteer"}"#,
    );

    client.login(&credentials()).await.expect("login succeeds");

    let store = client.session().store();
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("a1"));
    assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("r1"));
    assert_eq!(store.get(USER_TYPE_KEY).as_deref(), Some("volunteer"));

    let request = &client.transport().requests()[0];
    assert_eq!(request.header("authorization"), None);
    let body: serde_json::Value =
        serde_json::from_str(request.body.as_deref().unwrap_or_default()).expect("json body");
    assert_eq!(body["email"], "sam@example.org");
}

#[tokio::test]
async fn volunteer_login_refuses_organization_accounts() {
    let client = client();
    client.transport().respond(
        200,
        r#"{"access": "a1", "refresh": "r1", "user_type": "organization"}"#,
    );

    let err = client.login(&credentials()).await.unwrap_err();
    assert_eq!(err.user_message(), "This account is not registered as a volunteer");
    assert!(client.session().store().is_empty());
}

#[tokio::test]
async fn wrong_password_is_not_a_session_expiry() {
    let client = client();
    client
        .transport()
        .respond(401, r#"{"detail":"Invalid credentials"}"#);

    let err = client.login_organization(&credentials()).await.unwrap_err();
    assert_eq!(err.user_message(), r#"{"detail":"Invalid credentials"}"#);
}

#[tokio::test]
async fn organization_registration_stores_token_field() {
    let client = client();
    client
        .transport()
        .respond(201, r#"{"token": "t9", "refresh": "r9"}"#);

    let registration = OrganizationRegistration {
        email: "team@shelter.org".to_string(),
        password: "secret".to_string(),
        name: "Shelter".to_string(),
        category: "housing".to_string(),
        ..Default::default()
    };
    client
        .register_organization(&registration)
        .await
        .expect("registration succeeds");

    assert_eq!(client.session().access_token().as_deref(), Some("t9"));
    assert_eq!(client.session().role(), Some(Role::Organization));

    let body: serde_json::Value = serde_json::from_str(
        client.transport().requests()[0]
            .body
            .as_deref()
            .unwrap_or_default(),
    )
    .expect("json body");
    assert_eq!(body["username"], "team@shelter.org");
}

#[tokio::test]
async fn logout_clears_even_when_the_server_fails() {
    let client = signed_in(Role::Volunteer);
    client.transport().fail("connection reset");

    client.logout().await;

    assert!(client.session().store().is_empty());
    assert_eq!(client.transport().request_lines(), vec!["POST /api/logout/"]);
    let request = &client.transport().requests()[0];
    assert_eq!(request.body.as_deref(), Some(r#"{"refresh":"refresh-token"}"#));
}

#[tokio::test]
async fn logout_without_refresh_token_sends_nothing() {
    let client = client();
    client.session().store().set(AUTH_TOKEN_KEY, "orphan");

    client.logout().await;

    assert_eq!(client.transport().request_count(), 0);
    assert!(client.session().store().is_empty());
}

#[tokio::test]
async fn profile_without_token_issues_no_request() {
    let client = client();
    let err = client.profile().await.unwrap_err();
    assert_eq!(err, ApiError::NotAuthenticated);
    assert!(err.requires_login());
    assert_eq!(client.transport().request_count(), 0);
}

#[tokio::test]
async fn profile_update_patches_then_rereads() {
    let client = signed_in(Role::Volunteer);
    client.transport().respond(200, "{}");
    client.transport().respond(200, PROFILE_JSON);

    let update = ProfileUpdate {
        location: Some("Oakland".to_string()),
        skills: None,
    };
    let profile = client
        .update_profile(&update)
        .await
        .expect("update succeeds")
        .expect("profile re-read");

    assert_eq!(profile.full_name(), "Sam Lee");
    assert_eq!(profile.activities.len(), 1);
    assert_eq!(
        client.transport().request_lines(),
        vec!["PATCH /api/profile/", "GET /api/profile/"]
    );
}

#[tokio::test]
async fn profile_update_survives_a_failed_reread() {
    let client = signed_in(Role::Volunteer);
    client.transport().respond(200, "{}");
    client.transport().respond(500, "boom");

    let update = ProfileUpdate {
        location: Some("Berkeley".to_string()),
        skills: None,
    };
    let outcome = client.update_profile(&update).await;

    assert_eq!(outcome, Ok(None));
    assert_eq!(client.transport().request_count(), 2);
}

#[tokio::test]
async fn profile_update_failure_skips_the_reread() {
    let client = signed_in(Role::Volunteer);
    client.transport().respond(400, r#"{"location":["Too long"]}"#);

    let update = ProfileUpdate {
        location: Some("x".repeat(300)),
        skills: None,
    };
    let err = client.update_profile(&update).await.unwrap_err();

    assert_eq!(err.user_message(), r#"{"location":["Too long"]}"#);
    assert_eq!(client.transport().request_lines(), vec!["PATCH /api/profile/"]);
}

#[tokio::test]
async fn recommendations_are_best_effort() {
    let client = signed_in(Role::Organization);
    client.transport().respond(
        200,
        r#"{"volunteers": [{"volunteer_id": 5, "name": "Ana", "skills": ["medical"], "rating": 4.8}]}"#,
    );
    client
        .transport()
        .respond(200, r#"{"message": "No recommendations yet"}"#);
    client.transport().respond(500, "boom");

    assert_eq!(client.recommended_volunteers().await.len(), 1);
    assert!(client.recommended_volunteers().await.is_empty());
    assert!(client.recommended_volunteers().await.is_empty());
}

#[tokio::test]
async fn create_opportunity_posts_zero_registrations() {
    let client = signed_in(Role::Organization);
    client.transport().respond(201, &opportunity_json(11, 4, 0, false));

    let new = NewOpportunity {
        title: "Soup kitchen".to_string(),
        volunteers_needed: 4,
        ..Default::default()
    };
    let created = client.create_opportunity(&new).await.expect("created");
    assert_eq!(created.id, 11);

    let body: serde_json::Value = serde_json::from_str(
        client.transport().requests()[0]
            .body
            .as_deref()
            .unwrap_or_default(),
    )
    .expect("json body");
    assert_eq!(body["volunteers_registered"], 0);
    assert_eq!(client.transport().request_lines(), vec!["POST /api/opportunities/"]);
}

#[tokio::test]
async fn network_failure_surfaces_generic_message() {
    let client = signed_in(Role::Volunteer);
    client.transport().fail("dns lookup failed");

    let err = client.community_posts().await.unwrap_err();
    assert_eq!(err, ApiError::Network("dns lookup failed".to_string()));
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    assert!(client.session().is_authenticated());
}
