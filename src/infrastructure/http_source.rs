// HTTP series source backed by the data endpoint
use crate::application::error::FetchError;
use crate::application::series_source::SeriesSource;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSeriesSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSeriesSource {
    pub fn new(base_url: String, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn build_series_url(&self, field: &str) -> String {
        format!("{}/data/{}", self.base_url, urlencoding::encode(field))
    }
}

#[async_trait]
impl SeriesSource for HttpSeriesSource {
    async fn fetch_raw(&self, field: &str) -> Result<Bytes, FetchError> {
        let url = self.build_series_url(field);
        tracing::debug!("GET {}", url);

        let transport = |source: reqwest::Error| FetchError::Transport {
            field: field.to_string(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(FetchError::Request {
                field: field.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.bytes().await.map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fetcher::SeriesFetcher;
    use crate::application::series_store::SeriesStore;
    use crate::domain::series::SeriesPoint;
    use axum::{extract::Path, http::StatusCode, routing::get, Router};
    use std::sync::Arc;

    async fn data(Path(field): Path<String>) -> (StatusCode, String) {
        match field.as_str() {
            "Outside_temp" => (
                StatusCode::OK,
                r#"{"Time":[1,2,3],"Outside_temp":[10,12,9],"Outside_humidity":[1,1,1]}"#.to_string(),
            ),
            "Garbled" => (StatusCode::OK, "<html>oops</html>".to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
        }
    }

    async fn spawn_backend() -> String {
        let router = Router::new().route("/data/:field", get(data));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn fetcher(base_url: String) -> SeriesFetcher {
        let source = HttpSeriesSource::new(base_url, Some(Duration::from_secs(5))).unwrap();
        SeriesFetcher::new(Arc::new(source), SeriesStore::new())
    }

    #[test]
    fn test_build_series_url() {
        let source = HttpSeriesSource::new("http://hive.local:5000/".to_string(), None).unwrap();
        assert_eq!(
            source.build_series_url("Outside_temp"),
            "http://hive.local:5000/data/Outside_temp"
        );
        assert_eq!(source.build_series_url("a b"), "http://hive.local:5000/data/a%20b");
    }

    #[tokio::test]
    async fn test_fetch_over_http() {
        let fetcher = fetcher(spawn_backend().await);

        fetcher.fetch_series("Outside_temp").await.unwrap();

        assert_eq!(
            fetcher.series("Outside_temp"),
            Some(vec![
                SeriesPoint::new(1, Some(10.0)),
                SeriesPoint::new(2, Some(12.0)),
                SeriesPoint::new(3, Some(9.0)),
            ])
        );
    }

    #[tokio::test]
    async fn test_server_error_is_request_error() {
        let fetcher = fetcher(spawn_backend().await);

        let err = fetcher.fetch_series("Temp_1").await.unwrap_err();

        assert!(matches!(err, FetchError::Request { status: 500, .. }));
        assert_eq!(fetcher.series("Temp_1"), None);
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let fetcher = fetcher(spawn_backend().await);

        let err = fetcher.fetch_series("Garbled").await.unwrap_err();

        assert!(matches!(err, FetchError::Parse { .. }));
        assert_eq!(fetcher.series("Garbled"), None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let fetcher = fetcher(format!("http://{}", addr));

        let err = fetcher.fetch_series("Outside_temp").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
