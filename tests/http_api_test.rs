//! Integration tests for the HTTP surface.
//!
//! Requests go through the full router (CORS, dispatch, handlers) against
//! an in-memory SQLite database.

mod common;

use axum::http::{header, StatusCode};
use serde_json::json;

use common::{body_bytes, body_json, empty_request, json_request, send, TestContext};

// =============================================================================
// Routing and CORS
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("GET", "/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_preflight_returns_empty_ok_with_cors_headers() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("OPTIONS", "/api/lawyers", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization"
    );
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_unknown_endpoint_reports_request() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("GET", "/api/nowhere?x=1", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body = body_json(response).await;
    assert_eq!(body["message"], "Endpoint not found");
    assert_eq!(body["path"], "nowhere");
    assert_eq!(body["request_uri"], "/api/nowhere?x=1");
    assert_eq!(body["method"], "GET");
}

#[tokio::test]
async fn test_alternate_base_path_is_stripped() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("GET", "/backend/api/lookup", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_roundtrip() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"username": "admin", "password": "admin123"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "ADMIN");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_with_bad_password_is_unauthorized() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"username": "admin", "password": "wrong"}),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_requires_post() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("GET", "/api/auth/login", None)).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Method not allowed for login");
}

#[tokio::test]
async fn test_login_with_missing_fields_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(
        &app,
        json_request("POST", "/api/auth/login", None, json!({"username": "admin"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Public Reads
// =============================================================================

#[tokio::test]
async fn test_lookup_uses_camel_case_keys() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("GET", "/api/lookup", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["areasOfLaw"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["services"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["targetClients"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn test_list_with_huge_page_returns_empty_page() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    send(
        &app,
        json_request(
            "POST",
            "/api/lawyers",
            Some(&token),
            json!({"name": "Only Centre", "provider_type": "NGO"}),
        ),
    )
    .await;

    for page in ["18446744073709551615", "500000000000000000"] {
        let response = send(
            &app,
            empty_request("GET", &format!("/api/lawyers?page={page}"), None),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
        assert!(body["page"].as_u64().is_some_and(|p| p <= i64::MAX as u64));
    }
}

#[tokio::test]
async fn test_unknown_lawyer_is_not_found() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let response = send(&app, empty_request("GET", "/api/lawyers/42", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Lawyer not found");

    let huge = send(
        &app,
        empty_request("GET", "/api/lawyers/99999999999999999999999", None),
    )
    .await;
    assert_eq!(huge.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Admin Guard
// =============================================================================

#[tokio::test]
async fn test_admin_endpoints_reject_anonymous_requests() {
    let ctx = TestContext::new().await;
    let app = ctx.router();

    let cases = [
        json_request("POST", "/api/lawyers", None, json!({"name": "X", "provider_type": "NGO"})),
        empty_request("DELETE", "/api/lawyers/1", None),
        empty_request("GET", "/api/staff", None),
        empty_request("GET", "/api/funding", None),
        empty_request("GET", "/api/dashboard/reports", None),
        empty_request("GET", "/api/export/export", None),
        empty_request("GET", "/api/staff", Some("not-a-token")),
    ];

    for request in cases {
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["message"], "Admin access required");
    }
}

// =============================================================================
// Profile Lifecycle
// =============================================================================

#[tokio::test]
async fn test_profile_lifecycle_over_http() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let created = send(
        &app,
        json_request(
            "POST",
            "/api/lawyers",
            Some(&token),
            json!({
                "name": "Haki Centre",
                "provider_type": "Other",
                "provider_type_other": "Faith-based",
                "registration_status": "Registered with MoCLA",
                "registration_stage": "dropped when registered",
                "locations": [{"region": "Arusha"}],
                "services": ["Legal Education"]
            }),
        ),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = body_json(created).await;
    let id = body["lawyer_id"].as_i64().expect("lawyer_id missing");

    let fetched = send(&app, empty_request("GET", &format!("/api/lawyers/{id}"), None)).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let view = body_json(fetched).await;
    assert_eq!(view["name"], "Haki Centre");
    assert_eq!(view["provider_type"], "Faith-based");
    assert!(view["registration_stage"].is_null());
    assert_eq!(view["locations"][0]["region"], "Arusha");
    assert_eq!(view["services"][0], "Legal Education");
    assert!(view["staff"].is_array());

    let listed = send(&app, empty_request("GET", "/api/lawyers?region=Arusha&limit=5", None)).await;
    assert_eq!(listed.status(), StatusCode::OK);
    let page = body_json(listed).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["limit"], 5);
    assert_eq!(page["data"][0]["lawyer_id"], id);
    assert!(page["data"][0].get("staff").is_none());

    let updated = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/lawyers/{id}"),
            Some(&token),
            json!({"name": "Haki Centre Tanzania", "locations": [{"region": "Mwanza"}]}),
        ),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(
        body_json(updated).await["message"],
        "Lawyer profile updated successfully"
    );

    let deleted = send(
        &app,
        empty_request("DELETE", &format!("/api/lawyers/{id}"), Some(&token)),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let again = send(
        &app,
        empty_request("DELETE", &format!("/api/lawyers/{id}"), Some(&token)),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_without_required_fields_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let response = send(
        &app,
        json_request("POST", "/api/lawyers", Some(&token), json!({"name": "No Type"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Name and provider type are required"
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/lawyers")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .expect("Failed to build request");
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = body_json(response).await["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_default();
    assert!(message.starts_with("Invalid JSON data"));
}

// =============================================================================
// Staff and Funding
// =============================================================================

#[tokio::test]
async fn test_staff_crud_over_http() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let created = send(
        &app,
        json_request(
            "POST",
            "/api/lawyers",
            Some(&token),
            json!({"name": "Staffed Centre", "provider_type": "NGO"}),
        ),
    )
    .await;
    let lawyer_id = body_json(created).await["lawyer_id"]
        .as_i64()
        .expect("lawyer_id missing");

    let staff = send(
        &app,
        json_request(
            "POST",
            "/api/staff",
            Some(&token),
            json!({"lawyer_id": lawyer_id.to_string(), "name": "Asha", "role": "Advocate"}),
        ),
    )
    .await;
    assert_eq!(staff.status(), StatusCode::CREATED);
    let staff_id = body_json(staff).await["staff_id"]
        .as_i64()
        .expect("staff_id missing");

    let updated = send(
        &app,
        json_request(
            "PUT",
            "/api/staff",
            Some(&token),
            json!({"staff_id": staff_id, "name": "Asha Mwinyi"}),
        ),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    // Any path starting with "staff" reaches the staff handler.
    let listed = send(
        &app,
        empty_request("GET", &format!("/api/staffer?lawyer_id={lawyer_id}"), Some(&token)),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let body = body_json(listed).await;
    assert_eq!(body["data"][0]["name"], "Asha Mwinyi");

    let missing_id = send(&app, empty_request("DELETE", "/api/staff", Some(&token))).await;
    assert_eq!(missing_id.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(missing_id).await["message"], "Staff ID is required");

    let deleted = send(
        &app,
        empty_request("DELETE", &format!("/api/staff?staff_id={staff_id}"), Some(&token)),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_funding_requires_lawyer_id() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let response = send(
        &app,
        json_request("POST", "/api/funding", Some(&token), json!({"amount": 100})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Lawyer ID is required");
}

// =============================================================================
// Reports and Export
// =============================================================================

#[tokio::test]
async fn test_overview_report_is_wrapped_in_data() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let response = send(
        &app,
        empty_request("GET", "/api/dashboard/reports?type=unknown", Some(&token)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_lawyers"], 0);
    assert_eq!(body["data"]["total_staff"], 0);
}

#[tokio::test]
async fn test_csv_export_is_an_attachment() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    send(
        &app,
        json_request(
            "POST",
            "/api/lawyers",
            Some(&token),
            json!({"name": "Exported, Ltd", "provider_type": "NGO", "verified": true}),
        ),
    )
    .await;

    let response = send(
        &app,
        empty_request("GET", "/api/export/export?type=lawyers", Some(&token)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("Disposition is not ASCII")
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("lawyers_"));
    assert!(disposition.contains(".csv"));

    let csv = String::from_utf8(body_bytes(response).await).expect("CSV is not UTF-8");
    let mut lines = csv.lines();
    assert!(lines.next().is_some_and(|h| h.starts_with("ID,Name,Provider Type")));
    assert!(lines.next().is_some_and(|row| row.contains("\"Exported, Ltd\"")));
}

#[tokio::test]
async fn test_pdf_export_is_unavailable() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let response = send(
        &app,
        empty_request("GET", "/api/export/export?format=pdf", Some(&token)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "PDF export requires additional library setup"
    );
}

#[tokio::test]
async fn test_unsupported_export_format_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = ctx.router();
    let token = ctx.admin_token();

    let response = send(
        &app,
        empty_request("GET", "/api/export/export?format=xlsx", Some(&token)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Unsupported export format: xlsx"
    );
}
