//! HttpApiBackend - reqwest implementation of the backend port.
//!
//! Talks JSON to the rucscope backend. The client keeps a cookie jar so the
//! session cookie set at login is sent back on logout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use rucscope_core::api::{ApiBackend, LoginRequest, LoginResponse};
use rucscope_core::audit_log::{LogPage, LogQuery};
use rucscope_core::config::ClientConfig;
use rucscope_core::error::{ClientError, Result};
use rucscope_core::lookup::{IdentifierKind, LookupResult};

const LOGIN_PATH: &str = "/api/auth/login";
const LOGOUT_PATH: &str = "/api/auth/logout";
const LOGS_PATH: &str = "/api/logs";

const LOGIN_FAILED: &str = "Login failed";
const LOGS_FAILED: &str = "Failed to load logs";
const LOOKUP_FAILED: &str = "Lookup failed";
const SESSION_REJECTED: &str = "Session expired or invalid, please log in again";

/// [`ApiBackend`] over HTTP.
#[derive(Clone)]
pub struct HttpApiBackend {
    client: Client,
    base_url: String,
}

impl HttpApiBackend {
    /// Builds a client from the configuration (base URL, timeout, cookie jar).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, &config.api_url))
    }

    /// Uses a preconfigured client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(map_transport_error)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(map_transport_error)
    }
}

#[async_trait]
impl ApiBackend for HttpApiBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        tracing::debug!("[HttpApiBackend] POST {} for {}", LOGIN_PATH, request.email);
        let response = Self::send(self.client.post(self.url(LOGIN_PATH)).json(request)).await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            return Err(ClientError::authentication(
                message.unwrap_or_else(|| LOGIN_FAILED.to_string()),
            ));
        }

        Self::decode(response).await
    }

    async fn logout(&self) -> Result<()> {
        tracing::debug!("[HttpApiBackend] POST {}", LOGOUT_PATH);
        let response = Self::send(self.client.post(self.url(LOGOUT_PATH))).await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            return Err(map_http_error(status, message, "Logout failed"));
        }
        Ok(())
    }

    async fn list_logs(&self, token: Option<&str>, query: &LogQuery) -> Result<LogPage> {
        let pairs = query.query_pairs();
        tracing::debug!("[HttpApiBackend] GET {} {:?}", LOGS_PATH, pairs);
        let request = self.client.get(self.url(LOGS_PATH)).query(&pairs);
        let response = Self::send(Self::authorize(request, token)).await?;

        let status = response.status();
        if !status.is_success() {
            // The log endpoint's error body is not shown to the user.
            return Err(map_http_error(status, None, LOGS_FAILED));
        }

        Self::decode(response).await
    }

    async fn lookup(
        &self,
        token: Option<&str>,
        kind: IdentifierKind,
        identifier: &str,
    ) -> Result<LookupResult> {
        let path = kind.path(identifier);
        tracing::debug!("[HttpApiBackend] GET {}", path);
        let request = self.client.get(self.url(&path));
        let response = Self::send(Self::authorize(request, token)).await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            return Err(map_http_error(status, message, LOOKUP_FAILED));
        }

        let envelope: DataEnvelope<LookupResult> = Self::decode(response).await?;
        Ok(envelope.data)
    }
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Extracts `{"error": "..."}` from a failed response, if present.
async fn read_error_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    parse_error_message(&body)
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}

fn map_http_error(status: StatusCode, message: Option<String>, fallback: &str) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ClientError::authentication(message.unwrap_or_else(|| SESSION_REJECTED.to_string()))
        }
        _ => ClientError::server(
            status.as_u16(),
            message.unwrap_or_else(|| fallback.to_string()),
        ),
    }
}

fn map_transport_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::Serialization {
            format: "JSON".to_string(),
            message: format!("Unexpected response body: {err}"),
        }
    } else if err.is_timeout() {
        ClientError::network(format!("Request timed out: {err}"))
    } else {
        ClientError::network(format!("Request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rucscope_core::audit_log::{EndpointFilter, LogFilter, SuccessFilter};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accepts one connection, answers with a canned response and returns the
    /// request head it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            let head_end = loop {
                if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break received.len();
                }
                received.extend_from_slice(&buf[..n]);
            };

            // Drain the body so closing the socket doesn't reset the connection.
            let head = String::from_utf8_lossy(&received[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while received.len() < head_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&received).to_string()
        });

        (base_url, handle)
    }

    fn backend(base_url: &str) -> HttpApiBackend {
        HttpApiBackend::with_client(Client::new(), base_url)
    }

    const EMPTY_PAGE: &str = r#"{"data":[],"pagination":{"page":2,"limit":10,"total":0,"totalPages":0,"hasNext":false,"hasPrev":true}}"#;

    #[tokio::test]
    async fn test_list_logs_sends_bearer_and_filters() {
        let (base_url, server) = serve_once("200 OK", EMPTY_PAGE).await;
        let filter = LogFilter {
            endpoint: EndpointFilter::Ruc,
            success: SuccessFilter::Succeeded,
            ip: String::new(),
        };

        let page = backend(&base_url)
            .list_logs(Some("t1"), &LogQuery::new(2, 10, filter))
            .await
            .unwrap();
        assert!(page.data.is_empty());

        let head = server.await.unwrap().to_lowercase();
        assert!(
            head.starts_with("get /api/logs?page=2&limit=10&endpoint=consulta_ruc&success=true http/1.1"),
            "unexpected request: {head}"
        );
        assert!(head.contains("authorization: bearer t1"));
        assert!(!head.contains("ip="));
    }

    #[tokio::test]
    async fn test_missing_token_sends_no_authorization() {
        let (base_url, server) = serve_once("200 OK", EMPTY_PAGE).await;

        backend(&base_url)
            .list_logs(None, &LogQuery::new(1, 10, LogFilter::default()))
            .await
            .unwrap();

        let head = server.await.unwrap().to_lowercase();
        assert!(!head.contains("authorization:"));
    }

    #[tokio::test]
    async fn test_list_logs_failure_is_generic() {
        let (base_url, _server) =
            serve_once("500 Internal Server Error", r#"{"error":"db down"}"#).await;

        let err = backend(&base_url)
            .list_logs(Some("t1"), &LogQuery::new(1, 10, LogFilter::default()))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::server(500, LOGS_FAILED));
    }

    #[tokio::test]
    async fn test_rejected_token_is_authentication_error() {
        let (base_url, _server) = serve_once("401 Unauthorized", r#"{"error":"Token expirado"}"#).await;

        let err = backend(&base_url)
            .lookup(Some("stale"), IdentifierKind::Ruc, "20100070970")
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::authentication("Token expirado"));
    }

    #[tokio::test]
    async fn test_lookup_not_found_carries_backend_message() {
        let (base_url, server) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;

        let err = backend(&base_url)
            .lookup(Some("t1"), IdentifierKind::Dni, "12345678")
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::server(404, "not found"));
        assert_eq!(err.user_message(), "not found");

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /api/ruc/dni/12345678 http/1.1"));
    }

    #[tokio::test]
    async fn test_lookup_success_unwraps_data() {
        let (base_url, _server) = serve_once(
            "200 OK",
            r#"{"data":{"ruc":"20100070970","nombre_razon_social":"ACME SAC"}}"#,
        )
        .await;

        let result = backend(&base_url)
            .lookup(Some("t1"), IdentifierKind::Ruc, "20100070970")
            .await
            .unwrap();
        assert_eq!(result.ruc, "20100070970");
        assert_eq!(result.business_name.as_deref(), Some("ACME SAC"));
    }

    #[tokio::test]
    async fn test_login_failure_uses_backend_message_or_fallback() {
        let (base_url, _server) =
            serve_once("401 Unauthorized", r#"{"error":"Credenciales inválidas"}"#).await;
        let err = backend(&base_url)
            .login(&LoginRequest::new("a@x.com", "bad"))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::authentication("Credenciales inválidas"));

        let (base_url, _server) = serve_once("500 Internal Server Error", "oops").await;
        let err = backend(&base_url)
            .login(&LoginRequest::new("a@x.com", "bad"))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::authentication(LOGIN_FAILED));
    }

    #[tokio::test]
    async fn test_login_success() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"message":"ok","accessToken":"t1","user":{"id":"u1","name":"Ana","email":"a@x.com","role":"admin"}}"#,
        )
        .await;

        let response = backend(&base_url)
            .login(&LoginRequest::new("a@x.com", "secret"))
            .await
            .unwrap();
        assert_eq!(response.access_token, "t1");
        assert_eq!(response.user.name, "Ana");

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("post /api/auth/login http/1.1"));
        assert!(head.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = backend(&base_url).logout().await.unwrap_err();
        assert!(err.is_network(), "expected network error, got {err:?}");
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"error":"not found"}"#).as_deref(),
            Some("not found")
        );
        assert_eq!(parse_error_message(r#"{"error":""}"#), None);
        assert_eq!(parse_error_message("<html>"), None);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let backend = backend("http://localhost:3000/");
        assert_eq!(backend.base_url(), "http://localhost:3000");
        assert_eq!(backend.url(LOGS_PATH), "http://localhost:3000/api/logs");
    }
}
