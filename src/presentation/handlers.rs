// HTTP request handlers
use crate::application::mount::ChartMount;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page with the currently drawn chart
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Response {
    let chart = state.canvas.current();
    match render_page(&state.title, state.canvas.id(), chart.as_ref()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Page render error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Chart configuration currently on the mount
pub async fn current_chart(State(state): State<Arc<AppState>>) -> Response {
    match state.canvas.current() {
        Some(chart) => Json(chart).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Render state per field
pub async fn field_statuses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.renderer.statuses())
}

/// Render state of a single field; never requested fields are idle
pub async fn field_status(
    Path(field): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let status = state.renderer.field_status(&field);
    Json(json!({ "field": field, "state": status }))
}

/// Remove the chart element from the page
pub async fn detach_mount(State(state): State<Arc<AppState>>) -> StatusCode {
    tracing::info!("Detaching #{}", state.canvas.id());
    state.canvas.detach();
    StatusCode::NO_CONTENT
}

/// Put an empty chart element back on the page
pub async fn attach_mount(State(state): State<Arc<AppState>>) -> StatusCode {
    tracing::info!("Attaching #{}", state.canvas.id());
    state.canvas.attach();
    StatusCode::NO_CONTENT
}

/// Re-run fetch and render for one field
pub async fn render_field(
    Path(field): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.renderer.render_chart(&field).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
    }
}

/// Draw the static demonstration chart
pub async fn render_demo(State(state): State<Arc<AppState>>) -> Response {
    match state.renderer.render_demo_chart() {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => (StatusCode::CONFLICT, e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fetcher::tests::ScriptedSource;
    use crate::application::fetcher::SeriesFetcher;
    use crate::application::renderer::ChartRenderer;
    use crate::application::series_store::SeriesStore;
    use crate::infrastructure::canvas::CanvasSlot;
    use crate::router;

    async fn spawn_page(source: ScriptedSource) -> String {
        let canvas = Arc::new(CanvasSlot::new("myChart"));
        let fetcher = SeriesFetcher::new(Arc::new(source), SeriesStore::new());
        let state = Arc::new(AppState {
            renderer: ChartRenderer::new(fetcher, canvas.clone()),
            canvas,
            title: "Hive Dashboard".to_string(),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_render_then_read_chart() {
        let base = spawn_page(
            ScriptedSource::default()
                .reply("Outside_temp", r#"{"Time":[1,2,3], "Outside_temp":[10,12,9]}"#),
        )
        .await;
        let client = reqwest::Client::new();

        let missing = client.get(format!("{}/chart", base)).send().await.unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

        let rendered = client
            .post(format!("{}/render/Outside_temp", base))
            .send()
            .await
            .unwrap();
        assert_eq!(rendered.status(), reqwest::StatusCode::ACCEPTED);

        let chart: serde_json::Value = client
            .get(format!("{}/chart", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(chart["data"]["datasets"][0]["label"], "Outside_temp");
        assert_eq!(chart["data"]["datasets"][0]["data"][1]["y"], 12.0);

        let statuses: serde_json::Value = client
            .get(format!("{}/status", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(statuses["Outside_temp"]["state"], "rendered");

        let page = client.get(&base).send().await.unwrap().text().await.unwrap();
        assert!(page.contains("new Chart(document.getElementById('myChart')"));

        let idle: serde_json::Value = client
            .get(format!("{}/status/Weight", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(idle, serde_json::json!({"field": "Weight", "state": "idle"}));
    }

    #[tokio::test]
    async fn test_detached_mount_fails_render_until_reattached() {
        let base = spawn_page(
            ScriptedSource::default()
                .reply("Frequency", r#"{"Time":[1], "Frequency":[220]}"#)
                .reply("Frequency", r#"{"Time":[2], "Frequency":[230]}"#),
        )
        .await;
        let client = reqwest::Client::new();

        let detached = client.delete(format!("{}/mount", base)).send().await.unwrap();
        assert_eq!(detached.status(), reqwest::StatusCode::NO_CONTENT);

        let failed = client
            .post(format!("{}/render/Frequency", base))
            .send()
            .await
            .unwrap();
        assert_eq!(failed.status(), reqwest::StatusCode::BAD_GATEWAY);
        assert!(failed.text().await.unwrap().contains("#myChart"));

        let status: serde_json::Value = client
            .get(format!("{}/status/Frequency", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status["state"], "failed");

        client.put(format!("{}/mount", base)).send().await.unwrap();
        let rendered = client
            .post(format!("{}/render/Frequency", base))
            .send()
            .await
            .unwrap();
        assert_eq!(rendered.status(), reqwest::StatusCode::ACCEPTED);

        let chart: serde_json::Value = client
            .get(format!("{}/chart", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(chart["data"]["datasets"][0]["data"][0]["y"], 230.0);
    }

    #[tokio::test]
    async fn test_failed_render_reports_bad_gateway() {
        let base = spawn_page(ScriptedSource::default().fail("Weight", 500)).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/render/Weight", base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);

        let chart = client.get(format!("{}/chart", base)).send().await.unwrap();
        assert_eq!(chart.status(), reqwest::StatusCode::NOT_FOUND);

        let health = client.get(format!("{}/healthz", base)).send().await.unwrap();
        assert_eq!(health.text().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_render_demo_endpoint() {
        let base = spawn_page(ScriptedSource::default()).await;
        let client = reqwest::Client::new();

        let response = client.post(format!("{}/render-demo", base)).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::ACCEPTED);

        let chart: serde_json::Value = client
            .get(format!("{}/chart", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(chart["data"]["labels"][0], "Sunday");
    }
}
