pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers::handle_login;
use crate::intent::handlers::handle_ai_query;
use crate::state::AppState;
use crate::users::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/users", get(handlers::handle_list_users))
        .route("/stats", get(handlers::handle_stats))
        .route("/export-users", get(handlers::handle_export_users))
        .route("/login", post(handle_login))
        .route("/ai-query", post(handle_ai_query))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::store::sqlite::insert_user;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn app() -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("admin.db").display());
        let pool = create_pool(&url, 2).await.unwrap();

        let today = Utc::now().date_naive();
        let stale = Some(today - Duration::days(40));
        let fresh = Some(today - Duration::days(5));
        insert_user(&pool, "Stale Admin", "stale@example.com", stale, "admin").await;
        insert_user(&pool, "Fresh Viewer", "fresh@example.com", fresh, "viewer").await;

        (dir, build_router(AppState { db: pool }))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_reports_running() {
        let (_dir, app) = app().await;
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "Backend is running");
    }

    #[tokio::test]
    async fn test_users_lists_everyone() {
        let (_dir, app) = app().await;
        let response = app.oneshot(get("/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["name"], "Stale Admin");
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let (_dir, app) = app().await;
        let response = app.oneshot(get("/stats")).await.unwrap();
        assert_eq!(
            json_body(response).await,
            json!({"total_users": 2, "inactive_users": 1, "admin_users": 1})
        );
    }

    #[tokio::test]
    async fn test_login_admin() {
        let (_dir, app) = app().await;
        let response = app
            .oneshot(post_json(
                "/login",
                json!({"username": "admin", "password": "admin123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"role": "admin"}));
    }

    #[tokio::test]
    async fn test_login_rejects_bad_and_missing_credentials() {
        let (_dir, app) = app().await;
        let response = app
            .clone()
            .oneshot(post_json(
                "/login",
                json!({"username": "admin", "password": "nope"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "INVALID_CREDENTIALS"
        );

        let response = app.oneshot(post_json("/login", json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_export_is_csv_attachment() {
        let (_dir, app) = app().await;
        let response = app.oneshot(get("/export-users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"users.csv\""
        );
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let lines: Vec<&str> = text.split("\r\n").collect();
        assert_eq!(lines[0], "ID,Name,Email,Last Login,Role");
        assert!(lines[1].starts_with("1,Stale Admin,stale@example.com,"));
        assert!(lines[2].ends_with(",viewer"));
    }

    #[tokio::test]
    async fn test_ai_query_inactive_users() {
        let (_dir, app) = app().await;
        let response = app
            .oneshot(post_json(
                "/ai-query",
                json!({"question": "show me inactive users"}),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["inference"], "Inactive users (last 30 days)");
        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["email"], "stale@example.com");
    }

    #[tokio::test]
    async fn test_ai_query_admin_count_reports_total() {
        let (_dir, app) = app().await;
        let response = app
            .oneshot(post_json(
                "/ai-query",
                json!({"question": "how many admin accounts are there"}),
            ))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await,
            json!({"inference": "Total users", "result": 2})
        );
    }

    #[tokio::test]
    async fn test_ai_query_unknown() {
        let (_dir, app) = app().await;
        let response = app
            .oneshot(post_json("/ai-query", json!({"question": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"inference": "Could not understand the question", "result": []})
        );
    }

    #[tokio::test]
    async fn test_closed_store_is_503() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("admin.db").display());
        let pool = create_pool(&url, 1).await.unwrap();
        pool.close().await;

        let response = build_router(AppState { db: pool })
            .oneshot(get("/users"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
