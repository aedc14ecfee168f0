//! Shared fixtures for integration tests: an in-memory SQLite database with
//! migrations applied, lookups seeded and an admin account provisioned.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use legal_aid_directory::api::create_router;
use legal_aid_directory::domain::{AuthUser, UserRole};
use legal_aid_directory::infra::db::seed;
use legal_aid_directory::infra::{Database, Migrator};
use legal_aid_directory::services::{issue_token, Services};
use legal_aid_directory::{AppState, Config, User};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub struct TestContext {
    pub db: DatabaseConnection,
    pub config: Config,
    pub services: Services,
    pub admin: AuthUser,
}

impl TestContext {
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = sea_orm::Database::connect(options)
            .await
            .expect("Failed to open in-memory database");
        Migrator::up(&db, None).await.expect("Failed to run migrations");
        seed::seed_lookups(&db).await.expect("Failed to seed lookups");
        let admin_id = seed::upsert_admin(&db, ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .expect("Failed to create admin");

        let config = Config::with_secret("sqlite::memory:", JWT_SECRET);
        let services = Services::from_connection(db.clone(), config.clone());

        Self {
            db,
            config,
            services,
            admin: AuthUser {
                user_id: admin_id,
                role: UserRole::Admin,
            },
        }
    }

    pub fn router(&self) -> Router {
        let database = Arc::new(Database::from_connection(self.db.clone()));
        create_router(AppState::from_config(database, self.config.clone()))
    }

    pub fn admin_token(&self) -> String {
        let user = User {
            id: self.admin.user_id,
            username: ADMIN_USERNAME.to_string(),
            password_hash: String::new(),
            role: UserRole::Admin,
        };
        issue_token(&user, &self.config).expect("Failed to issue token")
    }

    /// Row count of `table`.
    pub async fn count(&self, table: &str) -> i64 {
        let backend = self.db.get_database_backend();
        let row = self
            .db
            .query_one(Statement::from_string(
                backend,
                format!("SELECT COUNT(*) AS n FROM {table}"),
            ))
            .await
            .expect("Count query failed")
            .expect("Count query returned no row");
        row.try_get::<i64>("", "n").expect("Count column missing")
    }

    pub async fn execute(&self, sql: &str) {
        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(backend, sql.to_string()))
            .await
            .expect("Statement failed");
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("Request failed")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("Failed to build request")
}
