//! Analysis requests against the backend
//!
//! `AnalysisClient::analyze` performs one `POST /analyze` round trip.
//! `spawn_analysis` runs it on a tokio task and reports the outcome back to
//! the UI loop as an `AppAction::FinishAnalysis` message.

use crate::actions::AppAction;
use crate::config::analyze_url;
use crate::error::{AppError, AppResult};
use crate::types::{AnalysisRequest, AnalysisResponse};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at a different server, keeping the connection pool
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Send one analysis request and return the result text
    pub async fn analyze(&self, request: &AnalysisRequest) -> AppResult<String> {
        let url = analyze_url(&self.base_url).map_err(AppError::InvalidUrl)?;

        tracing::info!(
            url = %url,
            mode = request.mode.tag(),
            topic_len = request.topic.len(),
            has_perspective = !request.perspective.is_empty(),
            "Sending analysis request"
        );

        let start = Instant::now();
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Analysis response received"
        );

        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                tracing::warn!(status = status.as_u16(), error = %e, "Could not read error body");
                AppError::Network(e.to_string())
            })?;
            tracing::error!(status = status.as_u16(), body = %body, "API error response");
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: AnalysisResponse =
            serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))?;

        parsed
            .result_text()
            .map(str::to_string)
            .ok_or(AppError::MalformedResponse)
    }
}

/// Run an analysis in the background and send its outcome to `tx`
pub fn spawn_analysis(
    client: AnalysisClient,
    request: AnalysisRequest,
    request_id: u64,
    tx: UnboundedSender<AppAction>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = client.analyze(&request).await;

        if let Err(ref err) = outcome {
            tracing::warn!(request_id, error = %err, "Analysis failed");
        }

        // the receiver is gone once the UI has quit
        let _ = tx.send(AppAction::FinishAnalysis {
            request_id,
            outcome,
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalysisMode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    /// Serve exactly one canned HTTP response and hand back the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        serve_raw(format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ))
        .await
    }

    /// Write `response` verbatim to the first connection, then close it
    async fn serve_raw(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });

        (base_url, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let (_, body) = raw.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    fn sample_request(mode: AnalysisMode) -> AnalysisRequest {
        AnalysisRequest {
            topic: "Universal basic income".to_string(),
            perspective: "It discourages work".to_string(),
            mode,
        }
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let (base_url, server) = serve_once("200 OK", r#"{"result":"A**B**C"}"#).await;
        let client = AnalysisClient::new(base_url, None).unwrap();

        let result = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await;
        assert_eq!(result, Ok("A**B**C".to_string()));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /analyze HTTP/1.1"));
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert_eq!(
            request_body(&raw),
            serde_json::json!({
                "topic": "Universal basic income",
                "perspective": "It discourages work",
                "mode": "counterarguments"
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_sends_active_mode() {
        let (base_url, server) = serve_once("200 OK", r#"{"result":"ok"}"#).await;
        let client = AnalysisClient::new(base_url, None).unwrap();

        client
            .analyze(&sample_request(AnalysisMode::Fallacies))
            .await
            .unwrap();

        let raw = server.await.unwrap();
        assert_eq!(request_body(&raw)["mode"], "fallacies");
    }

    #[tokio::test]
    async fn test_analyze_http_error_embeds_status_and_body() {
        let (base_url, server) = serve_once("500 Internal Server Error", "server error").await;
        let client = AnalysisClient::new(base_url, None).unwrap();

        let err = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::HttpStatus {
                status: 500,
                body: "server error".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "HTTP error! Status: 500, Response: server error"
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_truncated_error_body_is_network_error() {
        // promises 100 bytes, sends 5, then closes
        let (base_url, server) = serve_raw(
            "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort"
                .to_string(),
        )
        .await;
        let client = AnalysisClient::new(base_url, None).unwrap();

        let err = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Network(_)), "got {err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_missing_result_is_malformed() {
        let (base_url, server) = serve_once("200 OK", "{}").await;
        let client = AnalysisClient::new(base_url, None).unwrap();

        let err = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::MalformedResponse);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_non_json_body_is_decode_error() {
        let (base_url, server) = serve_once("200 OK", "<html>oops</html>").await;
        let client = AnalysisClient::new(base_url, None).unwrap();

        let err = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_connection_refused_is_network_error() {
        // bind then drop to get a port nobody is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = AnalysisClient::new(format!("http://{addr}"), None).unwrap();
        let err = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[tokio::test]
    async fn test_analyze_invalid_base_url() {
        let client = AnalysisClient::new("not a url", None).unwrap();
        let err = client
            .analyze(&sample_request(AnalysisMode::Counterarguments))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_spawn_analysis_reports_completion() {
        let (base_url, server) = serve_once("200 OK", r#"{"result":"line1\n\nline2"}"#).await;
        let client = AnalysisClient::new(base_url, None).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_analysis(
            client,
            sample_request(AnalysisMode::Fallacies),
            7,
            tx,
        )
        .await
        .unwrap();

        let action = rx.recv().await.unwrap();
        assert_eq!(
            action,
            AppAction::FinishAnalysis {
                request_id: 7,
                outcome: Ok("line1\n\nline2".to_string()),
            }
        );
        assert!(rx.try_recv().is_err());

        let raw = server.await.unwrap();
        assert_eq!(raw.matches("POST /analyze").count(), 1);
    }
}
