//! HTTP client for the LifeFlow registration API
//!
//! Each role has its own endpoint; the payload is posted as JSON and any
//! non-2xx answer is turned into a user-facing message.

use super::payload::{RegistrationError, RegistrationPayload};
use super::traits::RegistrationService;
use crate::state::Role;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Default API address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Registration capability backed by the REST API
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: String,
    /// Message of the last failure, cleared on success
    error: RwLock<Option<String>>,
    loading: AtomicBool,
}

impl RegistrationClient {
    pub fn new(http: reqwest::Client, base_url: &str, role: Role) -> Self {
        Self {
            http,
            endpoint: endpoint_for(base_url, role),
            error: RwLock::new(None),
            loading: AtomicBool::new(false),
        }
    }

    async fn post(&self, payload: &RegistrationPayload) -> Result<(), RegistrationError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(format!("Failed to reach server: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RegistrationError::rejected(
            status.as_u16(),
            error_message(&body, status.as_u16()),
        ))
    }
}

#[async_trait]
impl RegistrationService for RegistrationClient {
    async fn register(&self, payload: RegistrationPayload) -> Result<(), RegistrationError> {
        self.loading.store(true, Ordering::SeqCst);
        tracing::debug!("POST {}", self.endpoint);

        let result = self.post(&payload).await;
        *self.error.write().await = result.as_ref().err().map(ToString::to_string);

        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn error_state(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

/// Path segment for each role's registration endpoint
fn role_path(role: Role) -> &'static str {
    match role {
        Role::Donor => "donors",
        Role::Donee => "donees",
        Role::BloodManager => "blood-managers",
    }
}

fn endpoint_for(base_url: &str, role: Role) -> String {
    format!(
        "{}/api/{}/register",
        base_url.trim_end_matches('/'),
        role_path(role)
    )
}

/// Pull a readable message out of an error response body
fn error_message(body: &str, status: u16) -> String {
    let fallback = || format!("Registration failed (HTTP {status})");

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    ["error", "message", "detail"]
        .iter()
        .find_map(|key| match value.get(*key) {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Object(inner)) => inner
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the raw request
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    fn payload() -> RegistrationPayload {
        RegistrationPayload {
            email: "ada@example.com".into(),
            password: "longenough1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            contact: "9876543210".into(),
        }
    }

    mod endpoints {
        use super::*;

        #[test]
        fn test_role_endpoints() {
            assert_eq!(
                endpoint_for("http://api", Role::Donor),
                "http://api/api/donors/register"
            );
            assert_eq!(
                endpoint_for("http://api", Role::Donee),
                "http://api/api/donees/register"
            );
            assert_eq!(
                endpoint_for("http://api", Role::BloodManager),
                "http://api/api/blood-managers/register"
            );
        }

        #[test]
        fn test_trailing_slash_is_trimmed() {
            assert_eq!(
                endpoint_for("http://api/", Role::Donor),
                "http://api/api/donors/register"
            );
        }
    }

    mod error_messages {
        use super::*;

        #[test]
        fn test_error_key() {
            assert_eq!(error_message(r#"{"error":"Email taken"}"#, 409), "Email taken");
        }

        #[test]
        fn test_message_key() {
            assert_eq!(error_message(r#"{"message":"Bad contact"}"#, 400), "Bad contact");
        }

        #[test]
        fn test_detail_key() {
            assert_eq!(error_message(r#"{"detail":"Nope"}"#, 422), "Nope");
        }

        #[test]
        fn test_nested_error_object() {
            assert_eq!(
                error_message(r#"{"error":{"code":401,"message":"Unauthorized"}}"#, 401),
                "Unauthorized"
            );
        }

        #[test]
        fn test_non_json_falls_back_to_status() {
            assert_eq!(
                error_message("<html>oops</html>", 502),
                "Registration failed (HTTP 502)"
            );
        }

        #[test]
        fn test_empty_error_falls_back() {
            assert_eq!(error_message(r#"{"error":""}"#, 500), "Registration failed (HTTP 500)");
        }
    }

    #[tokio::test]
    async fn test_success_posts_payload_to_role_endpoint() {
        let (base, server) = serve_once("201 Created", "{}").await;
        let client = RegistrationClient::new(reqwest::Client::new(), &base, Role::Donee);

        let result = client.register(payload()).await;

        assert_eq!(result, Ok(()));
        assert!(client.error_state().await.is_none());
        assert!(!client.is_loading());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/donees/register"));
        assert!(request.contains(r#""first_name":"Ada""#));
        assert!(!request.contains("confirm"));
    }

    #[tokio::test]
    async fn test_rejection_sets_error_slot() {
        let (base, server) =
            serve_once("409 Conflict", r#"{"error":"Email already registered"}"#).await;
        let client = RegistrationClient::new(reqwest::Client::new(), &base, Role::Donor);

        let result = client.register(payload()).await;

        assert_eq!(
            result,
            Err(RegistrationError::rejected(409, "Email already registered"))
        );
        assert_eq!(
            client.error_state().await.as_deref(),
            Some("Email already registered")
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            RegistrationClient::new(reqwest::Client::new(), &format!("http://{addr}"), Role::Donor);
        let result = client.register(payload()).await;

        assert!(matches!(result, Err(RegistrationError::Transport(_))));
        assert!(client.error_state().await.is_some());
        assert!(!client.is_loading());
    }
}
